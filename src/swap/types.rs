//! Request and response types for the swap REST API.
//!
//! Every type mirrors the backend's JSON exactly. Field names are camelCase on
//! the wire unless a field says otherwise, and optional fields that are absent
//! stay absent when a value is serialized back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::SwapStatus;
use crate::types::serde_helpers::{decimal_number, option_decimal_number, via_value};

// Currencies

/// A currency supported by the swap backend.
///
/// A symbol is only unique within its network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Ticker symbol (e.g. "zec")
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
    /// Network identifier
    pub network: String,
    /// Whether deposits need an extra id (memo, tag)
    pub has_external_id: bool,
    /// Token contract address, for token currencies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    /// Decimal precision
    #[serde(deserialize_with = "via_value::deserialize")]
    pub decimals: u32,
    /// Whether this is a fiat currency
    pub is_fiat: bool,
    /// Whether the currency can currently be swapped
    pub is_active: bool,
    /// Precision used for floating-rate amounts
    #[serde(
        default,
        deserialize_with = "via_value::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub precision_floating: Option<u32>,
    /// Precision used for fixed-rate amounts
    #[serde(
        default,
        deserialize_with = "via_value::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub precision_fixed: Option<u32>,
    /// Minimum floating-rate amount
    #[serde(
        default,
        with = "option_decimal_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_floating: Option<Decimal>,
    /// Maximum floating-rate amount
    #[serde(
        default,
        with = "option_decimal_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_floating: Option<Decimal>,
    /// Minimum fixed-rate amount
    #[serde(
        default,
        with = "option_decimal_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_fixed: Option<Decimal>,
    /// Maximum fixed-rate amount
    #[serde(
        default,
        with = "option_decimal_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_fixed: Option<Decimal>,
    /// Warning text to show before swapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Fields not modelled above, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// Estimates and ranges

/// Body of an estimate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateRequest {
    /// Source currency symbol
    pub from_currency: String,
    /// Target currency symbol
    pub to_currency: String,
    /// Amount of the source currency
    #[serde(with = "decimal_number")]
    pub amount: Decimal,
}

impl ExchangeRateRequest {
    /// Create a new estimate request.
    pub fn new(from_currency: impl Into<String>, to_currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            amount,
        }
    }
}

/// A non-binding quote for a hypothetical swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeEstimate {
    /// Source currency symbol
    pub from_currency: String,
    /// Target currency symbol
    pub to_currency: String,
    /// Input amount
    #[serde(with = "decimal_number")]
    pub amount: Decimal,
    /// Amount the recipient would get
    #[serde(with = "decimal_number")]
    pub estimated_amount: Decimal,
    /// Estimated completion time as reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Exchange rate
    #[serde(with = "decimal_number")]
    pub rate: Decimal,
    /// Service fee
    #[serde(with = "decimal_number")]
    pub fee: Decimal,
    /// Total fee (snake_case on the wire)
    #[serde(rename = "total_fee", with = "decimal_number")]
    pub total_fee: Decimal,
    /// Network fee (snake_case on the wire)
    #[serde(rename = "network_fee", with = "decimal_number")]
    pub network_fee: Decimal,
    /// Warning text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Fields not modelled above, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Query for the range endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExchangeRangeQuery<'a> {
    pub from_currency: &'a str,
    pub to_currency: &'a str,
}

/// A min/max pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountBounds {
    /// Minimum amount
    #[serde(with = "decimal_number")]
    pub min: Decimal,
    /// Maximum amount, if the backend sets one
    #[serde(
        default,
        with = "option_decimal_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<Decimal>,
    /// Fields not modelled above, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Allowed amounts for a currency pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRange {
    /// Minimum amount
    #[serde(with = "decimal_number")]
    pub min: Decimal,
    /// Maximum amount, if the backend sets one
    #[serde(
        default,
        with = "option_decimal_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<Decimal>,
    /// Bounds for fixed-rate swaps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<AmountBounds>,
    /// Bounds for floating-rate swaps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating: Option<AmountBounds>,
    /// Warning text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Fields not modelled above, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ExchangeRange {
    /// Check if an amount lies within the plain min/max bounds.
    ///
    /// This is a convenience for callers. The client itself never rejects an
    /// amount locally; the backend is authoritative.
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min && self.max.is_none_or(|max| amount <= max)
    }
}

// Swaps

/// A swap order tracked by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swap {
    /// Swap id assigned by the backend
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Source currency symbol
    pub from_currency: String,
    /// Target currency symbol
    pub to_currency: String,
    /// Source amount
    #[serde(with = "decimal_number")]
    pub amount: Decimal,
    /// Target amount
    #[serde(
        default,
        with = "option_decimal_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_to: Option<Decimal>,
    /// Where the payout goes
    pub recipient_address: String,
    /// Where the caller must send funds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_address: Option<String>,
    /// Current status
    pub status: SwapStatus,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
    /// Fields not modelled above, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Request to create a swap.
///
/// Sent to the backend verbatim. Optional fields that are `None` are left out
/// of the body.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use zos_swap_client::swap::CreateExchangeRequest;
///
/// let request = CreateExchangeRequest::new("zec", "sol", Decimal::ONE, "0x1234")
///     .refund_address("t1refund");
/// assert_eq!(request.refund_address.as_deref(), Some("t1refund"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExchangeRequest {
    /// Source currency symbol
    pub from_currency: String,
    /// Target currency symbol
    pub to_currency: String,
    /// Amount of the source currency
    #[serde(with = "decimal_number")]
    pub amount: Decimal,
    /// Where the payout goes
    pub recipient_address: String,
    /// Where to return funds if the swap fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_address: Option<String>,
    /// Extra id (memo, tag) for the refund address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_extra_id: Option<String>,
}

impl CreateExchangeRequest {
    /// Create a new request with the required fields.
    pub fn new(
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        amount: Decimal,
        recipient_address: impl Into<String>,
    ) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            amount,
            recipient_address: recipient_address.into(),
            refund_address: None,
            refund_extra_id: None,
        }
    }

    /// Set the refund address.
    pub fn refund_address(mut self, address: impl Into<String>) -> Self {
        self.refund_address = Some(address.into());
        self
    }

    /// Set the refund extra id.
    pub fn refund_extra_id(mut self, extra_id: impl Into<String>) -> Self {
        self.refund_extra_id = Some(extra_id.into());
        self
    }
}

/// Deposit instructions returned with a new swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeDetails {
    /// Where the caller must send funds
    pub deposit_address: String,
    /// Amount to deposit
    #[serde(with = "decimal_number")]
    pub amount: Decimal,
    /// Amount the recipient will get
    #[serde(with = "decimal_number")]
    pub amount_to: Decimal,
    /// Fields not modelled above, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response for the create endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExchangeResponse {
    /// Whether the backend accepted the swap
    pub success: bool,
    /// The created swap
    pub swap: Swap,
    /// Deposit instructions
    pub exchange: ExchangeDetails,
    /// Fields not modelled above, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response for the status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapStatusResponse {
    /// Swap id
    pub id: String,
    /// Current status
    pub status: SwapStatus,
    /// Source currency symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_currency: Option<String>,
    /// Target currency symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<String>,
    /// Amount sent
    #[serde(
        default,
        with = "option_decimal_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Amount to be received
    #[serde(
        default,
        with = "option_decimal_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_to: Option<Decimal>,
    /// Address the deposit goes to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_address: Option<String>,
    /// Address the payout goes to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_address: Option<String>,
    /// Last update time as reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Fields not modelled above, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_currency_optional_fields_absent() {
        let body = json!({
            "symbol": "zec",
            "name": "Zcash",
            "image": "https://zos.computer/img/zec.svg",
            "network": "zec",
            "hasExternalId": false,
            "decimals": 8,
            "isFiat": false,
            "isActive": true
        });
        let currency: Currency = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(currency.symbol, "zec");
        assert!(currency.contract_address.is_none());
        assert!(currency.min_floating.is_none());
        assert_eq!(serde_json::to_value(&currency).unwrap(), body);
    }

    #[test]
    fn test_estimate_snake_case_fees() {
        let body = json!({
            "fromCurrency": "zec",
            "toCurrency": "sol",
            "amount": 1,
            "estimatedAmount": 10.25,
            "rate": 10.25,
            "fee": 0.1,
            "total_fee": 0.15,
            "network_fee": 0.05
        });
        let estimate: ExchangeEstimate = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(estimate.total_fee, Decimal::new(15, 2));
        assert_eq!(estimate.network_fee, Decimal::new(5, 2));
        assert_eq!(serde_json::to_value(&estimate).unwrap(), body);
    }

    #[test]
    fn test_create_request_omits_absent_refund() {
        let request = CreateExchangeRequest::new("zec", "sol", Decimal::ONE, "0x1234");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "fromCurrency": "zec",
                "toCurrency": "sol",
                "amount": 1,
                "recipientAddress": "0x1234"
            })
        );

        let request = request.refund_address("t1abc").refund_extra_id("42");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["refundAddress"], "t1abc");
        assert_eq!(value["refundExtraId"], "42");
    }

    #[test]
    fn test_range_contains() {
        let range: ExchangeRange = serde_json::from_value(json!({ "min": 0.5, "max": 100 })).unwrap();
        assert!(range.contains(Decimal::ONE));
        assert!(!range.contains(Decimal::new(1, 1)));
        assert!(!range.contains(Decimal::new(101, 0)));

        let open: ExchangeRange = serde_json::from_value(json!({ "min": 0.5 })).unwrap();
        assert!(open.contains(Decimal::new(1_000_000, 0)));
    }

    #[test]
    fn test_swap_rejects_unknown_status() {
        let body = json!({
            "id": "swap-1",
            "userId": "user-1",
            "fromCurrency": "zec",
            "toCurrency": "sol",
            "amount": 1,
            "recipientAddress": "0x1234",
            "status": "teleported",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        });
        assert!(serde_json::from_value::<Swap>(body).is_err());
    }

    #[test]
    fn test_status_keeps_partial_and_unmodelled_fields() {
        let body = json!({
            "id": "swap-1",
            "status": "sending",
            "amountTo": 10.50,
            "payoutHash": "0xfeed",
            "confirmations": 3
        });
        let status: SwapStatusResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(status.status, SwapStatus::Sending);
        assert_eq!(status.amount_to, Some(Decimal::new(1050, 2)));
        assert!(status.from_currency.is_none());
        assert!(status.updated_at.is_none());
        assert_eq!(status.extra.len(), 2);
        assert_eq!(serde_json::to_value(&status).unwrap(), body);
    }
}
