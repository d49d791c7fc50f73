//! Serde helper functions for lenient JSON deserialization.
//!
//! Incoming to-do payloads are coerced rather than rejected: `null` becomes
//! the field's zero value and scalars of the wrong type are converted when
//! there is an obvious reading (`"true"` for a flag, `5` for a title).
//! Objects and arrays in a scalar field are still errors.

use serde::{Deserialize, Deserializer};

/// Any JSON scalar, captured before coercion.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

/// Deserialize an optional string, stringifying numbers and booleans.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Scalar::Bool(b) => b.to_string(),
        Scalar::Int(n) => n.to_string(),
        Scalar::UInt(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Str(s) => s,
    }))
}

/// Deserialize a flag, treating `null` and `""` as `false`.
///
/// Accepts `"true"` / `"false"` in any case, and numbers (non-zero is
/// `true`). Any other string is an error.
pub fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Scalar> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(false),
        Some(Scalar::Bool(b)) => Ok(b),
        Some(Scalar::Int(n)) => Ok(n != 0),
        Some(Scalar::UInt(n)) => Ok(n != 0),
        Some(Scalar::Float(n)) => Ok(n != 0.0),
        Some(Scalar::Str(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" | "" | "null" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "cannot read \"{other}\" as a boolean"
            ))),
        },
    }
}
