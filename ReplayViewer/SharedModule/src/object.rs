//! # Shared Object Identifiers
//!
//! Identifier types used across the delta log and the engine.

/// Persistent identifier of a replicated actor.
///
/// Unique among live actors; the log may reuse it once the actor is deleted.
pub type ActorId = u32;

/// Identifier of a class in the replay's class index
pub type ClassId = u32;
