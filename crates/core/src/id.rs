//! Strongly-typed identifiers used across the domain.
//!
//! All identifiers here are opaque strings supplied by the caller (order
//! numbers, SKU codes, batch references), so they wrap `String` rather than a
//! generated id.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a customer order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

/// Stock-keeping unit: identifies a product type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

/// Reference of a purchased batch (the batch's identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchReference(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a trusted value without validation.
            ///
            /// Use `str::parse` for untrusted input.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: cannot be empty", $name)));
                }
                Ok(Self(s.to_owned()))
            }
        }
    };
}

impl_string_newtype!(OrderId, "OrderId");
impl_string_newtype!(Sku, "Sku");
impl_string_newtype!(BatchReference, "BatchReference");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_input() {
        let err = "   ".parse::<Sku>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) if msg.contains("Sku") => {}
            other => panic!("Expected InvalidId naming Sku, got {other:?}"),
        }
        assert!("".parse::<BatchReference>().is_err());
        assert!("".parse::<OrderId>().is_err());
    }

    #[test]
    fn parse_keeps_value_verbatim() {
        let sku: Sku = "SMALL-TABLE".parse().unwrap();
        assert_eq!(sku.as_str(), "SMALL-TABLE");
        assert_eq!(sku.to_string(), "SMALL-TABLE");
        assert_eq!(sku, Sku::from("SMALL-TABLE"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let reference = BatchReference::new("batch-001");
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, "\"batch-001\"");

        let back: BatchReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);
    }
}
