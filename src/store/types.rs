//! Record types held by the item store.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Identifier assigned by the store at creation time.
pub type ItemId = i64;

/// The mutable fields of a stored item.
///
/// Doubles as the request body for create and update, so deserialization is
/// where schema validation happens: all three fields are required, and
/// `price` must be a finite number (numeric strings are coerced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// An item together with its store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: ItemId,
    pub item: Item,
}

/// Accept `9.99` or `"9.99"`, reject anything non-finite.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct PriceVisitor;

    impl de::Visitor<'_> for PriceVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a finite number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            if v.is_finite() {
                Ok(v)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v.trim().parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => Ok(parsed),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(PriceVisitor)
}
