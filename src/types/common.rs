//! Common domain types for the swap API.

use serde::{Deserialize, Serialize};

/// Status of a swap as reported by the backend.
///
/// The happy path is `waiting -> confirming -> exchanging -> sending -> finished`.
/// `failed`, `refunded` and `expired` are alternate terminal states. The client
/// never checks transitions; the backend owns the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    /// Waiting for the deposit
    Waiting,
    /// Deposit seen, waiting for confirmations
    Confirming,
    /// Funds are being exchanged
    Exchanging,
    /// Payout is being sent to the recipient
    Sending,
    /// Payout delivered
    Finished,
    /// Exchange failed
    Failed,
    /// Deposit returned to the refund address
    Refunded,
    /// No deposit arrived in time
    Expired,
}

impl SwapStatus {
    /// Check if the backend will not move this swap any further.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SwapStatus::Finished | SwapStatus::Failed | SwapStatus::Refunded | SwapStatus::Expired
        )
    }

    /// Check if the swap completed with a payout.
    pub fn is_successful(&self) -> bool {
        matches!(self, SwapStatus::Finished)
    }

    /// The status string used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapStatus::Waiting => "waiting",
            SwapStatus::Confirming => "confirming",
            SwapStatus::Exchanging => "exchanging",
            SwapStatus::Sending => "sending",
            SwapStatus::Finished => "finished",
            SwapStatus::Failed => "failed",
            SwapStatus::Refunded => "refunded",
            SwapStatus::Expired => "expired",
        }
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
