//! Swap REST API client.
//!
//! Provides the seven backend operations: currency listing, estimates, ranges,
//! swap creation, status polling, history and details.
//!
//! # Trait-based API
//!
//! The [`SwapApi`] trait abstracts all operations, enabling mock
//! implementations and decorators.
//!
//! ```rust,ignore
//! use zos_swap_client::swap::{SwapApi, SwapClient};
//!
//! async fn active_symbols<C: SwapApi>(client: &C) -> Result<Vec<String>, zos_swap_client::SwapError> {
//!     let currencies = client.get_currencies().await?;
//!     Ok(currencies.into_iter().filter(|c| c.is_active).map(|c| c.symbol).collect())
//! }
//! ```

mod client;
mod config;
mod endpoints;
mod traits;
mod types;

pub use client::{SwapClient, SwapClientBuilder};
pub use config::{BASE_URL_ENV_VAR, SwapClientConfig, TIMEOUT_ENV_VAR};
pub use endpoints::*;
pub use traits::SwapApi;
pub use types::*;
