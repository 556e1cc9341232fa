//! The shoe record and its request payload.
//!
//! # Wire format
//!
//! Records serialize in camelCase with absent optional fields omitted:
//!
//! ```json
//! {
//!   "id": 1,
//!   "brand": "Nike",
//!   "model": "Air",
//!   "size": 42.0,
//!   "color": "black",
//!   "price": 100.0,
//!   "stock": 0,
//!   "tags": [],
//!   "createdAt": "2026-08-25T12:00:00Z"
//! }
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::ShoeId;

/// A shoe size, which clients may supply as a number or as free-form text
/// (e.g. `42`, `"42.5 EU"`, `"M"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    /// Numeric size.
    Number(Decimal),
    /// Free-form text size.
    Text(String),
}

impl SizeValue {
    /// Whether this value overwrites a stored size on update.
    ///
    /// Zero and the empty string count as absent, matching the registry's
    /// presence rule for text/numeric fields.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Number(n) => !n.is_zero(),
            Self::Text(s) => !s.is_empty(),
        }
    }
}

/// One shoe entry in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeRecord {
    /// Server-assigned identifier, unique for the process lifetime.
    pub id: ShoeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Units in stock, never negative.
    pub stock: u32,
    pub tags: Vec<String>,
    /// Creation timestamp, fixed for the lifetime of the record.
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or updating a shoe.
///
/// Every field is optional and deserializes leniently: a value of the wrong
/// JSON type is dropped as if it were absent, never rejected. The registry
/// decides per field whether an absent or falsy value leaves the stored
/// record untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShoePayload {
    #[serde(deserialize_with = "lenient")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub size: Option<SizeValue>,
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub price: Option<Decimal>,
    #[serde(deserialize_with = "lenient")]
    pub stock: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub tags: Option<Vec<String>>,
}

/// Deserialize a field as `Some(T)` if the value has the right shape,
/// `None` otherwise. Malformed fields never fail the whole request.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
