//! # Class System
//!
//! Maps the numeric class ids used in delta records to class names. Built
//! once from the replay's class index before synchronization starts and only
//! read afterwards.

use std::collections::HashMap;
use replay_shared::constants::class::UNKNOWN;
use replay_shared::object::ClassId;
use replay_shared::replay::ClassIndex;
use log::debug;

/// Class id to class name lookup
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    names: HashMap<ClassId, String>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from a replay's class index
    pub fn from_index(index: &[ClassIndex]) -> Self {
        let mut registry = Self::new();
        for entry in index {
            registry.register(entry.index, &entry.class);
        }
        debug!("Built class registry with {} classes", registry.len());
        registry
    }

    /// Register a class, overwriting any previous name for the id
    pub fn register(&mut self, class_id: ClassId, class_name: &str) {
        self.names.insert(class_id, class_name.to_string());
    }

    /// Name registered for `class_id`, or the "class not found" sentinel
    pub fn lookup(&self, class_id: ClassId) -> &str {
        self.get(class_id).unwrap_or_else(|| {
            debug!("Class ID {} not in class index", class_id);
            UNKNOWN
        })
    }

    /// Name registered for `class_id`, if any
    pub fn get(&self, class_id: ClassId) -> Option<&str> {
        self.names.get(&class_id).map(String::as_str)
    }

    pub fn contains(&self, class_id: ClassId) -> bool {
        self.names.contains_key(&class_id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_registered_name() {
        let registry = ClassRegistry::from_index(&[
            ClassIndex::new(1, "TAGame.Car_TA"),
            ClassIndex::new(2, "TAGame.Ball_TA"),
        ]);
        assert_eq!(registry.lookup(1), "TAGame.Car_TA");
        assert_eq!(registry.lookup(2), "TAGame.Ball_TA");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn lookup_miss_yields_sentinel() {
        let registry = ClassRegistry::new();
        assert_eq!(registry.lookup(99), "class not found");
        assert!(registry.get(99).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn register_overwrites_existing_id() {
        let mut registry = ClassRegistry::new();
        registry.register(5, "Engine.Pawn");
        registry.register(5, "TAGame.Car_TA");
        assert_eq!(registry.lookup(5), "TAGame.Car_TA");
        assert_eq!(registry.len(), 1);
    }
}
