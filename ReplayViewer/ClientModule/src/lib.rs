//! # Replay Client Module
//!
//! Client-side replay synchronization. Walks a recorded delta log up to an
//! externally driven playback time and keeps a set of live entities in step
//! with it; presentation layers consume the emitted events and read entity
//! state, they never mutate it.
//!
//! The system is organized into several sub-modules:
//! - `class`: class id to class name lookup
//! - `actor`: semantic entity kinds
//! - `transform`: raw log coordinates to render coordinates
//! - `property`: bounded per-entity property log and special-case properties
//! - `object`: the entity registry and live entity representation
//! - `engine`: the cursor and synchronization loop
//! - `follow`: smoothed follow point for a camera

// Module declarations
pub mod config;
pub mod error;
pub mod class;
pub mod actor;
pub mod transform;
pub mod property;
pub mod object;
pub mod event;
pub mod engine;
pub mod follow;

// Re-export commonly used items
pub use config::{ConfigError, ReplayConfig};
pub use error::SyncError;
pub use class::ClassRegistry;
pub use actor::{classify, EntityKind};
pub use property::{PropertyEntry, PropertyLog, PropertyLogOutcome};
pub use object::{EntityRegistry, LiveEntity};
pub use event::EntityEvent;
pub use engine::{ReplayEngine, SyncReport};
pub use follow::BallFollower;
