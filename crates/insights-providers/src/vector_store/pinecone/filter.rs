//! Translation of domain filters into Pinecone's metadata filter dialect

use insights_domain::error::{Error, Result};
use insights_domain::value_objects::{Condition, FieldFilter, Filter, MetadataValue};
use serde_json::{Value, json};

const BACKEND: &str = "pinecone";

/// Translate a filter into a Pinecone filter document
///
/// Returns `None` for an empty filter. More than one condition is wrapped in
/// `$and`. Shapes Pinecone cannot express exactly (list values in `Eq` or
/// `AnyOf`, an empty `AnyOf`, operator-like keys, non-finite bounds) fail
/// with `UnsupportedFilter` so no request is sent.
///
/// # Example
///
/// ```rust
/// use insights_domain::value_objects::Filter;
/// use insights_providers::vector_store::translate_filter;
/// use serde_json::json;
///
/// let filter = Filter::new().eq("business_focus", "coaching");
/// let translated = translate_filter(&filter).unwrap();
/// assert_eq!(translated, Some(json!({"business_focus": {"$eq": "coaching"}})));
/// ```
pub fn translate_filter(filter: &Filter) -> Result<Option<Value>> {
    let mut clauses = filter
        .conditions()
        .iter()
        .map(translate_condition)
        .collect::<Result<Vec<_>>>()?;

    Ok(match clauses.len() {
        0 => None,
        1 => clauses.pop(),
        _ => Some(json!({ "$and": clauses })),
    })
}

fn translate_condition(field_filter: &FieldFilter) -> Result<Value> {
    let field = field_filter.field.as_str();
    if field.is_empty() || field.starts_with('$') {
        return Err(Error::unsupported_filter(
            BACKEND,
            format!("invalid metadata key '{field}'"),
        ));
    }

    let (operator, operand) = match &field_filter.condition {
        Condition::Eq(value) => ("$eq", scalar(field, value)?),
        Condition::AnyOf(values) => {
            if values.is_empty() {
                return Err(Error::unsupported_filter(
                    BACKEND,
                    format!("empty any-of set for '{field}'"),
                ));
            }
            let values = values
                .iter()
                .map(|v| scalar(field, v))
                .collect::<Result<Vec<_>>>()?;
            ("$in", Value::Array(values))
        }
        Condition::Gte(bound) => ("$gte", number(field, *bound)?),
        Condition::Gt(bound) => ("$gt", number(field, *bound)?),
        Condition::Lte(bound) => ("$lte", number(field, *bound)?),
        Condition::Lt(bound) => ("$lt", number(field, *bound)?),
    };

    Ok(json!({ field: { operator: operand } }))
}

fn scalar(field: &str, value: &MetadataValue) -> Result<Value> {
    if !value.is_scalar() {
        return Err(Error::unsupported_filter(
            BACKEND,
            format!("exact match on list value for '{field}'"),
        ));
    }
    Ok(serde_json::to_value(value)?)
}

fn number(field: &str, bound: f64) -> Result<Value> {
    if !bound.is_finite() {
        return Err(Error::unsupported_filter(
            BACKEND,
            format!("non-finite bound for '{field}'"),
        ));
    }
    Ok(json!(bound))
}
