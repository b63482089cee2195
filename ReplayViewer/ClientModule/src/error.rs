//! # Synchronization Errors
//!
//! Per-record failures. None of these is fatal: the synchronization loop
//! logs them, records them in its report and moves on to the next record.

use replay_shared::object::{ActorId, ClassId};

/// A delta record that could not be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// `New` record for an id that is already live
    #[error("Duplicate object ID {0}")]
    DuplicateIdentifier(ActorId),

    /// `Updated` or `Deleted` record for an id that is not live
    #[error("Missing object ID {0}")]
    UnknownIdentifier(ActorId),

    /// Class id absent from the class index; resolved to the sentinel name
    #[error("Unknown class ID {0}")]
    UnknownClass(ClassId),
}
