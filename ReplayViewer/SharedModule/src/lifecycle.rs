//! # Actor Lifecycle Types
//!
//! The lifecycle tag carried by every delta record.

use serde::{Serialize, Deserialize};

/// What a delta record does to its actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorLifecycle {
    /// Actor enters the scene; the record carries its class id
    New,

    /// Actor already exists and receives state deltas
    Updated,

    /// Actor leaves the scene; its id may be reused afterwards
    Deleted,
}
