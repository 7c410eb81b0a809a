//! Shallow (depth-1) merge.
//!
//! Every configuration update in Horizon Grid goes through the same rule:
//! for each top-level key present in the update, if both the existing and
//! the incoming value are objects (not `null`, not arrays), the two objects
//! are unioned one level deep with incoming keys winning. In every other case
//! the incoming value replaces the existing one outright.
//!
//! The rule stops at one level. Nested objects below that level
//! are replaced wholesale and arrays are never merged element by element, so
//! ordered option lists such as column definitions keep their order:
//!
//! ```
//! use horizon_grid_core::merge::merge_maps;
//! use serde_json::json;
//!
//! let target = json!({ "gridOptions": { "toolbar": { "a": 1, "b": 2 }, "border": true } });
//! let source = json!({ "gridOptions": { "toolbar": { "a": 9 } } });
//!
//! let merged = merge_maps(target.as_object().unwrap(), source.as_object().unwrap().clone());
//! assert_eq!(
//!     serde_json::Value::Object(merged),
//!     json!({ "gridOptions": { "toolbar": { "a": 9 }, "border": true } })
//! );
//! ```

use serde_json::{Map, Value};

/// Types that accept a partial update merged with the shallow rule.
///
/// `Patch` is the partial form of the type. Merging never mutates `self`;
/// it produces the next complete value.
pub trait ShallowMerge: Clone {
    /// The partial update type.
    type Patch;

    /// Merge `patch` onto `self`, returning the new complete value.
    fn merge(&self, patch: Self::Patch) -> Self;
}

/// Merge `source` onto `target` with the depth-1 rule.
pub fn merge_maps(target: &Map<String, Value>, source: Map<String, Value>) -> Map<String, Value> {
    let mut result = target.clone();
    for (key, incoming) in source {
        let next = match result.remove(&key) {
            Some(existing) => merge_value(existing, incoming),
            None => incoming,
        };
        result.insert(key, next);
    }
    result
}

/// Merge a single field value.
///
/// Two objects are unioned one level deep; anything else is replaced by
/// `source`. Values inside the union are not merged further.
pub fn merge_value(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut existing), Value::Object(incoming)) => {
            existing.extend(incoming);
            Value::Object(existing)
        }
        (_, source) => source,
    }
}

/// Union two objects one level deep, incoming keys winning.
///
/// Used for fields that are statically known to be objects.
pub fn union_maps(target: &Map<String, Value>, source: Map<String, Value>) -> Map<String, Value> {
    let mut result = target.clone();
    result.extend(source);
    result
}

impl ShallowMerge for Map<String, Value> {
    type Patch = Map<String, Value>;

    fn merge(&self, patch: Self::Patch) -> Self {
        merge_maps(self, patch)
    }
}
