//! # SharedModule
//!
//! Shared types used by the replay synchronization engine and by whatever
//! parser produces the delta log. This crate only describes data: frames,
//! per-actor delta records, typed property values and the constants that
//! give certain class and property names their meaning.

// Export module structure
pub mod types;
pub mod object;
pub mod property;
pub mod lifecycle;
pub mod replay;
pub mod constants;

// Re-export commonly used items for convenience
pub use types::*;
pub use object::{ActorId, ClassId};
pub use property::{ActorProperty, PropertyValue, RigidBodyState, TeamPaint};
pub use lifecycle::ActorLifecycle;
pub use replay::{ActorDelta, ClassIndex, Frame, Replay, ReplayLoadError};
