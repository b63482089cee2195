//! # Property Module
//!
//! Per-entity property log for introspection, plus the handful of property
//! names that also drive entity state (see `handlers`).
//!
//! The log keeps the latest stringified value of each property name in
//! first-seen order. It is bounded: once `cap` distinct names are present,
//! names never seen before are dropped while known names keep updating.

use serde::Serialize;

// Import submodules
pub mod handlers;

pub use handlers::apply_special;

/// One row of a property log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    pub name: String,
    pub value: String,
}

/// What `PropertyLog::apply` did with a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyLogOutcome {
    /// Existing name, value overwritten in place
    Updated,
    /// New name appended
    Inserted,
    /// New name ignored because the log is full
    Dropped,
}

/// Bounded name to latest-value log, ordered by first insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyLog {
    entries: Vec<PropertyEntry>,
    #[serde(skip)]
    cap: usize,
}

impl PropertyLog {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
        }
    }

    /// Record the latest display value of a property
    pub fn apply(&mut self, name: &str, value: String) -> PropertyLogOutcome {
        // Linear scan, the log never grows past `cap`
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.name == name) {
            entry.value = value;
            return PropertyLogOutcome::Updated;
        }

        if self.entries.len() < self.cap {
            self.entries.push(PropertyEntry {
                name: name.to_string(),
                value,
            });
            PropertyLogOutcome::Inserted
        } else {
            PropertyLogOutcome::Dropped
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    pub fn entries(&self) -> &[PropertyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.cap
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_update_in_place() {
        let mut log = PropertyLog::new(50);
        assert_eq!(log.apply("A", "1".into()), PropertyLogOutcome::Inserted);
        assert_eq!(log.apply("B", "2".into()), PropertyLogOutcome::Inserted);
        assert_eq!(log.apply("A", "3".into()), PropertyLogOutcome::Updated);

        let names: Vec<_> = log.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(log.get("A"), Some("3"));
    }

    #[test]
    fn fifty_first_name_is_dropped_but_existing_names_update() {
        let mut log = PropertyLog::new(50);
        for i in 0..50 {
            assert_eq!(log.apply(&format!("prop{}", i), i.to_string()), PropertyLogOutcome::Inserted);
        }
        assert!(log.is_full());

        assert_eq!(log.apply("prop50", "late".into()), PropertyLogOutcome::Dropped);
        assert_eq!(log.len(), 50);
        assert!(log.get("prop50").is_none());

        assert_eq!(log.apply("prop0", "changed".into()), PropertyLogOutcome::Updated);
        assert_eq!(log.get("prop0"), Some("changed"));
        assert_eq!(log.entries()[0].name, "prop0");
    }

    #[test]
    fn small_cap_keeps_first_names() {
        let mut log = PropertyLog::new(1);
        log.apply("first", "x".into());
        log.apply("second", "y".into());
        assert_eq!(log.len(), 1);
        assert_eq!(log.get("first"), Some("x"));
    }
}
