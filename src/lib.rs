//! # ZOS Swap Client
//!
//! An async Rust client library for the ZOS swap REST API: list currencies,
//! quote and range-check a pair, create a swap and follow its status.
//!
//! ## Features
//!
//! - Typed request/response models with exact decimal amounts (`rust_decimal`)
//! - Token authentication through the `x-auth-token` header
//! - One error type with exactly three failure kinds
//! - Request tracing via `reqwest-tracing`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_decimal::Decimal;
//! use zos_swap_client::swap::SwapClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SwapClient::new()?;
//!     let estimate = client.get_exchange_rate("zec", "sol", Decimal::ONE).await?;
//!     println!("1 ZEC ~ {} SOL", estimate.estimated_amount);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod swap;
pub mod types;

// Re-export commonly used types at crate root
pub use error::SwapError;
pub use swap::{SwapApi, SwapClient};
pub use types::common::SwapStatus;

/// Result type alias using SwapError
pub type Result<T> = std::result::Result<T, SwapError>;
