//! Change-detecting value cells.
//!
//! A [`Property`] backs each [`Selected`](crate::Selected) view and the grid
//! facade's cached snapshot. [`set`](Property::set) reports whether the value
//! actually changed, which is what decides whether anyone gets notified.

use std::fmt;

use parking_lot::RwLock;

/// A shared value whose writes report whether anything changed.
///
/// ```
/// use horizon_grid_core::Property;
///
/// let loading = Property::new(false);
/// assert!(!loading.set(false));
/// assert!(loading.set(true));
/// assert!(loading.get());
/// ```
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// A clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let value = self.value.read();
        f(&value)
    }

    /// Overwrite the value without comparing.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value` if it differs from the current one.
    ///
    /// Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        let changed = *current != value;
        if changed {
            *current = value;
        }
        changed
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_tuple("Property").field(value).finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_set_reports_value_changes_only() {
        let options = Property::new(json!({ "loading": false }));
        assert!(!options.set(json!({ "loading": false })));
        assert!(options.set(json!({ "loading": true })));
        assert_eq!(options.get()["loading"], Value::Bool(true));
    }

    #[test]
    fn test_set_silent_skips_comparison() {
        let title = Property::new(String::from("Users"));
        title.set_silent(String::from("Orders"));
        assert!(!title.set(String::from("Orders")));
    }

    #[test]
    fn test_with_borrows() {
        let columns = Property::new(vec!["id", "name", "status"]);
        assert_eq!(columns.with(|c| c.len()), 3);
    }

    #[test]
    fn test_debug_shows_value() {
        let prop = Property::new(3);
        assert_eq!(format!("{prop:?}"), "Property(3)");
    }
}
