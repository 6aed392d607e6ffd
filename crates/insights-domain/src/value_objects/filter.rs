//! Metadata Filter Value Objects
//!
//! Backend-agnostic filter model. A [`Filter`] is a conjunction of
//! [`FieldFilter`]s; every condition must pass for a record to qualify.

use crate::value_objects::{Metadata, MetadataValue};
use serde::{Deserialize, Serialize};

/// Condition applied to a single metadata field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "op", content = "value")]
pub enum Condition {
    /// Field equals the value exactly
    Eq(MetadataValue),
    /// Field equals any of the values
    AnyOf(Vec<MetadataValue>),
    /// Field is numeric and `>=` the bound
    Gte(f64),
    /// Field is numeric and `>` the bound
    Gt(f64),
    /// Field is numeric and `<=` the bound
    Lte(f64),
    /// Field is numeric and `<` the bound
    Lt(f64),
}

impl Condition {
    /// Evaluate the condition against a field value
    ///
    /// Exact matches only apply to scalar values; a list-valued field never
    /// satisfies `Eq` or `AnyOf`. Comparisons only pass for numbers.
    pub fn evaluate(&self, value: &MetadataValue) -> bool {
        match self {
            Self::Eq(expected) => value.scalar_eq(expected),
            Self::AnyOf(options) => options.iter().any(|option| value.scalar_eq(option)),
            Self::Gte(bound) => value.as_f64().is_some_and(|v| v >= *bound),
            Self::Gt(bound) => value.as_f64().is_some_and(|v| v > *bound),
            Self::Lte(bound) => value.as_f64().is_some_and(|v| v <= *bound),
            Self::Lt(bound) => value.as_f64().is_some_and(|v| v < *bound),
        }
    }
}

/// A condition bound to a metadata key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldFilter {
    /// Metadata key the condition reads
    pub field: String,
    /// Condition on the field value
    pub condition: Condition,
}

impl FieldFilter {
    /// Whether the metadata satisfies this condition; a missing key fails
    pub fn matches(&self, metadata: &Metadata) -> bool {
        metadata
            .get(&self.field)
            .is_some_and(|value| self.condition.evaluate(value))
    }
}

/// Value Object: Metadata Filter
///
/// ## Example
///
/// ```rust
/// use insights_domain::value_objects::{Filter, Metadata, MetadataValue};
///
/// let filter = Filter::new()
///     .eq("business_focus", "coaching")
///     .gte("urgency_level", 4.0);
///
/// let mut metadata = Metadata::new();
/// metadata.insert("business_focus".into(), MetadataValue::from("coaching"));
/// metadata.insert("urgency_level".into(), MetadataValue::from(5_i64));
/// assert!(filter.matches(&metadata));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Filter {
    conditions: Vec<FieldFilter>,
}

impl Filter {
    /// Empty filter (matches every record)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary condition
    #[must_use]
    pub fn with<S: Into<String>>(mut self, field: S, condition: Condition) -> Self {
        self.conditions.push(FieldFilter {
            field: field.into(),
            condition,
        });
        self
    }

    /// Add an exact-match condition
    #[must_use]
    pub fn eq<S: Into<String>, V: Into<MetadataValue>>(self, field: S, value: V) -> Self {
        self.with(field, Condition::Eq(value.into()))
    }

    /// Add an any-of condition
    #[must_use]
    pub fn any_of<S, I, V>(self, field: S, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<MetadataValue>,
    {
        self.with(
            field,
            Condition::AnyOf(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Add a `>=` condition
    #[must_use]
    pub fn gte<S: Into<String>>(self, field: S, bound: f64) -> Self {
        self.with(field, Condition::Gte(bound))
    }

    /// Add a `>` condition
    #[must_use]
    pub fn gt<S: Into<String>>(self, field: S, bound: f64) -> Self {
        self.with(field, Condition::Gt(bound))
    }

    /// Add a `<=` condition
    #[must_use]
    pub fn lte<S: Into<String>>(self, field: S, bound: f64) -> Self {
        self.with(field, Condition::Lte(bound))
    }

    /// Add a `<` condition
    #[must_use]
    pub fn lt<S: Into<String>>(self, field: S, bound: f64) -> Self {
        self.with(field, Condition::Lt(bound))
    }

    /// Conjunction of two filters
    #[must_use]
    pub fn and(mut self, other: Filter) -> Self {
        self.conditions.extend(other.conditions);
        self
    }

    /// Conditions in insertion order
    pub fn conditions(&self) -> &[FieldFilter] {
        &self.conditions
    }

    /// Whether the filter has no conditions
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether the metadata satisfies every condition
    pub fn matches(&self, metadata: &Metadata) -> bool {
        self.conditions.iter().all(|c| c.matches(metadata))
    }
}

/// Evaluate an optional filter; `None` matches everything
pub fn passes(filter: Option<&Filter>, metadata: &Metadata) -> bool {
    filter.is_none_or(|f| f.matches(metadata))
}
