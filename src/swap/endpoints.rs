//! Swap REST API endpoint constants.

use std::time::Duration;

/// Default base URL for the swap API.
pub const SWAP_BASE_URL: &str = "https://zos.computer/";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// List supported currencies.
pub const CURRENCIES: &str = "/swap/currencies";

/// Estimate a swap.
pub const ESTIMATE: &str = "/swap/estimate";

/// Allowed amount range for a pair.
pub const RANGE: &str = "/swap/range";

/// Create a swap.
pub const CREATE: &str = "/swap/create";

/// Swap status; the swap id is appended as a path segment.
pub const STATUS: &str = "/swap/status";

/// The caller's swap history.
pub const HISTORY: &str = "/swap/history";

/// Swap details; the swap id is appended as a path segment.
pub const DETAILS: &str = "/swap";
