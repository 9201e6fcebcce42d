//! Trait definition for the swap REST API client.
//!
//! The `SwapApi` trait abstracts the seven backend operations so callers can
//! swap in a mock or wrap the client with their own decorator.
//!
//! # Example
//!
//! ```rust,ignore
//! use zos_swap_client::swap::{SwapApi, SwapClient};
//!
//! async fn wait_for_payout<C: SwapApi>(client: &C, id: &str) -> Result<bool, zos_swap_client::SwapError> {
//!     let status = client.get_exchange_status(id).await?;
//!     Ok(status.status.is_successful())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::SwapError;
use crate::swap::types::{
    CreateExchangeRequest, CreateExchangeResponse, Currency, ExchangeEstimate, ExchangeRange, Swap,
    SwapStatusResponse,
};

/// Trait defining all swap REST API operations.
///
/// All methods are async and return `Result<T, SwapError>`.
pub trait SwapApi: Send + Sync {
    /// Get all supported currencies.
    fn get_currencies(&self) -> impl Future<Output = Result<Vec<Currency>, SwapError>> + Send;

    /// Get a quote for a hypothetical swap.
    fn get_exchange_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
        amount: Decimal,
    ) -> impl Future<Output = Result<ExchangeEstimate, SwapError>> + Send;

    /// Get the allowed amount range for a pair.
    fn get_exchange_range(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> impl Future<Output = Result<ExchangeRange, SwapError>> + Send;

    /// Create a swap.
    fn create_exchange(
        &self,
        request: &CreateExchangeRequest,
    ) -> impl Future<Output = Result<CreateExchangeResponse, SwapError>> + Send;

    /// Get the status of a swap.
    fn get_exchange_status(
        &self,
        swap_id: &str,
    ) -> impl Future<Output = Result<SwapStatusResponse, SwapError>> + Send;

    /// Get the caller's swaps.
    fn get_swap_history(&self) -> impl Future<Output = Result<Vec<Swap>, SwapError>> + Send;

    /// Get a single swap.
    fn get_swap_details(
        &self,
        swap_id: &str,
    ) -> impl Future<Output = Result<Swap, SwapError>> + Send;
}
