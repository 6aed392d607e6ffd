//! JSON Value Extension
//!
//! Accessors for JSON values with default fallbacks.

/// Extension trait for `serde_json::Value`
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use insights_providers::utils::JsonExt;
///
/// let body = json!({"error": {"message": "Index not found"}, "code": 5});
/// assert_eq!(body.path_str(&["error", "message"]), Some("Index not found"));
/// assert_eq!(body.str_or("missing", "default"), "default");
/// ```
pub trait JsonExt {
    /// Get string value or default
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str;

    /// Get optional string
    fn opt_str(&self, key: &str) -> Option<&str>;

    /// Get a string nested under a path of object keys
    fn path_str(&self, path: &[&str]) -> Option<&str>;
}

impl JsonExt for serde_json::Value {
    #[inline]
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.opt_str(key).unwrap_or(default)
    }

    #[inline]
    fn opt_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(serde_json::Value::as_str)
    }

    fn path_str(&self, path: &[&str]) -> Option<&str> {
        path.iter()
            .try_fold(self, |value, key| value.get(*key))
            .and_then(serde_json::Value::as_str)
    }
}
