//! Serde helpers for the swap backend's numeric fields.
//!
//! The backend sends amounts as plain JSON numbers. These helpers read them
//! into [`Decimal`] without going through `f64`, and write them back as JSON
//! numbers with the same textual form, so `1` stays `1` and `0.10` stays `0.10`.
//! Numbers encoded as strings are accepted on input as well.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

fn parse_decimal<E: de::Error>(text: &str) -> Result<Decimal, E> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|e| E::custom(format!("invalid decimal {text:?}: {e}")))
}

fn decimal_from_value<E: de::Error>(value: serde_json::Value) -> Result<Option<Decimal>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => parse_decimal(&n.to_string()).map(Some),
        serde_json::Value::String(s) => parse_decimal(s.trim()).map(Some),
        other => Err(E::invalid_type(
            de::Unexpected::Other(&other.to_string()),
            &"a number or numeric string",
        )),
    }
}

fn decimal_to_number<E: ser::Error>(value: &Decimal) -> Result<serde_json::Number, E> {
    serde_json::Number::from_str(&value.to_string()).map_err(E::custom)
}

/// Serialize/deserialize a [`Decimal`] as an exact JSON number.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use serde::{Deserialize, Serialize};
/// use zos_swap_client::types::serde_helpers::decimal_number;
///
/// #[derive(Serialize, Deserialize)]
/// struct Quote {
///     #[serde(with = "decimal_number")]
///     amount: Decimal,
/// }
///
/// let quote: Quote = serde_json::from_str(r#"{"amount":0.10}"#).unwrap();
/// assert_eq!(quote.amount.to_string(), "0.10");
/// assert_eq!(serde_json::to_string(&quote).unwrap(), r#"{"amount":0.10}"#);
/// ```
pub mod decimal_number {
    use super::*;

    /// Serialize as a JSON number.
    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        decimal_to_number(value)?.serialize(serializer)
    }

    /// Deserialize from a JSON number or numeric string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        decimal_from_value(value)?.ok_or_else(|| de::Error::custom("expected a number, got null"))
    }
}

/// Optional variant of [`decimal_number`]; `null` and missing fields map to `None`.
///
/// Pair with `#[serde(default, skip_serializing_if = "Option::is_none")]`.
pub mod option_decimal_number {
    use super::*;

    /// Serialize as a JSON number or `null`.
    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => decimal_to_number(d)?.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from a JSON number, numeric string or `null`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        decimal_from_value(value)
    }
}

/// Deserialize any value by first reading it as a [`serde_json::Value`].
///
/// Structs with a `#[serde(flatten)]` field buffer their input, and with
/// `arbitrary_precision` enabled a buffered number no longer deserializes
/// into a plain integer. Going through `Value` restores it. Use on integer
/// fields of such structs with `deserialize_with = "via_value::deserialize"`.
pub mod via_value {
    use super::*;
    use serde::de::DeserializeOwned;

    /// Deserialize `T` from an intermediate JSON value.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        T::deserialize(value).map_err(de::Error::custom)
    }
}
