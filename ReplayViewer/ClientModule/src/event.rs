//! # Presentation Events
//!
//! Transitions the engine reports to rendering collaborators. Continuous
//! state (pose, name, property log) is read from the registry instead.

use crate::actor::EntityKind;
use replay_shared::object::ActorId;
use replay_shared::types::LinearColor;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EntityEvent {
    /// Attach a visual for a new entity
    Created {
        id: ActorId,
        kind: EntityKind,
        display_name: String,
    },

    /// Detach and tear down the entity's visual
    Destroyed { id: ActorId },

    /// Repaint the entity's surface
    ColorChanged { id: ActorId, color: LinearColor },
}

impl EntityEvent {
    pub fn id(&self) -> ActorId {
        match self {
            Self::Created { id, .. } | Self::Destroyed { id } | Self::ColorChanged { id, .. } => *id,
        }
    }
}
