use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{
    de::{Error, IgnoredAny},
    Deserialize, Deserializer,
};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Unsigned(u64),
    Float(f64),
    String(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientFunds {
    Unsigned(u64),
    Float(f64),
    String(String),
    Other(IgnoredAny),
}

/// A number, possibly encoded as a string (`8`, `8.5`, `"8.5"`).
pub fn deserialize_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Unsigned(value) => value as f64,
        NumberOrString::Float(value) => value,
        NumberOrString::String(value) => f64::from_str(value.trim())
            .map_err(|e| D::Error::custom(format!("invalid number {:?}: {}", value, e)))?,
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(D::Error::custom(format!("expected a finite number, got {}", value)))
    }
}

/// Whole amount of funds in `value`, truncating any decimal part.
/// Anything that cannot be read as a non-negative amount is `0`.
pub fn parse_funds_lenient(value: &str) -> u64 {
    let value = value.trim();
    u64::from_str(value)
        .ok()
        .or_else(|| Decimal::from_str(value).ok().and_then(|d| d.trunc().to_u64()))
        .unwrap_or_else(|| {
            debug!(value, "unreadable funds amount, using 0");
            0
        })
}

/// Funds given as a number, a string or null, see [`parse_funds_lenient`].
/// Values of any other type are `0`.
pub fn deserialize_funds_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientFunds>::deserialize(deserializer)? {
        None => 0,
        Some(LenientFunds::Unsigned(value)) => value,
        Some(LenientFunds::Float(value)) if value.is_finite() && value >= 0.0 => {
            value.trunc() as u64
        }
        Some(LenientFunds::Float(value)) => {
            debug!(value, "negative funds amount, using 0");
            0
        }
        Some(LenientFunds::String(value)) => parse_funds_lenient(&value),
        Some(LenientFunds::Other(_)) => {
            debug!("funds amount is not a number, using 0");
            0
        }
    })
}
