//! Record Metadata Value Objects
//!
//! Scalar metadata attached to embedding records. Metadata drives filtering
//! and match explanations; it never participates in similarity scoring.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Metadata map keyed by field name
///
/// A `BTreeMap` keeps serialized output stable across runs.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// Value Object: Metadata Value
///
/// A single metadata value. Integers and floats are distinct variants so
/// that values round-trip through JSON without changing shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Whole number (urgency levels, counts)
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Free text or a categorical label
    Text(String),
    /// List of labels (emotions, secondary blockers)
    List(Vec<String>),
}

impl MetadataValue {
    /// Borrow the value as text, if it is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the value, if it is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrow the value as a list of labels, if it is a list
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether the value is a scalar (not a list)
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_))
    }

    /// Scalar equality; numbers compare by value across integer/float
    pub fn scalar_eq(&self, other: &MetadataValue) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(_), _) | (_, Self::List(_)) => false,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u8> for MetadataValue {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<String>> for MetadataValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Typed accessors over a metadata map
pub trait MetadataExt {
    /// Text value of a field, if present and textual
    fn text(&self, key: &str) -> Option<&str>;

    /// Text value of a field or an empty string
    fn text_or_empty(&self, key: &str) -> &str {
        self.text(key).unwrap_or("")
    }

    /// Numeric value of a field, if present and numeric
    fn number(&self, key: &str) -> Option<f64>;

    /// List value of a field or an empty slice
    fn list(&self, key: &str) -> &[String];
}

impl MetadataExt for Metadata {
    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetadataValue::as_str)
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(MetadataValue::as_f64)
    }

    fn list(&self, key: &str) -> &[String] {
        self.get(key).and_then(MetadataValue::as_list).unwrap_or(&[])
    }
}
