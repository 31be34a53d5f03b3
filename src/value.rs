//! Value ownership for the committed value.
//!
//! A control either owns its committed value (uncontrolled) or mirrors a value
//! supplied by its owner on every render (controlled). Both sit behind
//! [`ValueSource`], picked once when the control is created.

use std::fmt;

/// Where the committed value lives.
pub trait ValueSource: fmt::Debug {
    /// The current committed value
    fn read(&self) -> &str;

    /// Offer a value that should become committed.
    ///
    /// Returns true if the value was stored locally. A controlled source never
    /// stores it: the owner answers through the submit/cancel callbacks.
    fn commit(&mut self, value: &str) -> bool;

    /// Observe the externally supplied value of a render pass.
    ///
    /// Returns true if the mirrored value changed.
    fn observe(&mut self, external: &str) -> bool;

    fn is_controlled(&self) -> bool;
}

/// Committed value owned and mutated by the control itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uncontrolled {
    value: String,
}

impl Uncontrolled {
    pub fn new(default_value: impl Into<String>) -> Self {
        Self {
            value: default_value.into(),
        }
    }
}

impl ValueSource for Uncontrolled {
    fn read(&self) -> &str {
        &self.value
    }

    fn commit(&mut self, value: &str) -> bool {
        self.value.clear();
        self.value.push_str(value);
        true
    }

    fn observe(&mut self, _external: &str) -> bool {
        // External values are handled by switching sources, see EditableModel::observe_value
        false
    }

    fn is_controlled(&self) -> bool {
        false
    }
}

/// Read-only mirror of a value owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controlled {
    mirror: String,
}

impl Controlled {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            mirror: value.into(),
        }
    }
}

impl ValueSource for Controlled {
    fn read(&self) -> &str {
        &self.mirror
    }

    fn commit(&mut self, value: &str) -> bool {
        tracing::trace!(intended = value, "controlled commit left to the owner");
        false
    }

    fn observe(&mut self, external: &str) -> bool {
        if self.mirror == external {
            return false;
        }
        self.mirror.clear();
        self.mirror.push_str(external);
        true
    }

    fn is_controlled(&self) -> bool {
        true
    }
}

/// Pick the value source for a new control.
///
/// Supplying `value` selects controlled mode and `default_value` is ignored.
pub fn value_source(value: Option<String>, default_value: Option<String>) -> Box<dyn ValueSource> {
    match value {
        Some(value) => Box::new(Controlled::new(value)),
        None => Box::new(Uncontrolled::new(default_value.unwrap_or_default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_commit_stores_value() {
        let mut source = Uncontrolled::new("before");
        assert!(source.commit("after"));
        assert_eq!(source.read(), "after");
        assert!(!source.is_controlled());
    }

    #[test]
    fn test_controlled_commit_is_left_to_owner() {
        let mut source = Controlled::new("owned");
        assert!(!source.commit("intended"));
        assert_eq!(source.read(), "owned");
    }

    #[test]
    fn test_controlled_observe_reports_changes() {
        let mut source = Controlled::new("a");
        assert!(!source.observe("a"));
        assert!(source.observe("b"));
        assert_eq!(source.read(), "b");
    }

    #[test]
    fn test_value_source_selection() {
        let source = value_source(None, Some("seed".into()));
        assert!(!source.is_controlled());
        assert_eq!(source.read(), "seed");

        let source = value_source(Some("external".into()), Some("seed".into()));
        assert!(source.is_controlled());
        assert_eq!(source.read(), "external");

        let source = value_source(None, None);
        assert_eq!(source.read(), "");
    }
}
