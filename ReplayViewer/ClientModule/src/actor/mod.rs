//! # Entity Kinds
//!
//! Semantic classification of replicated actors. Only two class names are
//! distinguished; everything else, including unknown classes, is `Other`.

use replay_shared::constants::class;
use replay_shared::object::ActorId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an entity represents for presentation purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A player-driven car
    PrimaryActor,
    Ball,
    Other,
}

impl EntityKind {
    /// Display name given to a freshly created entity of this kind
    pub fn initial_display_name(self, id: ActorId, class_name: &str) -> String {
        match self {
            Self::PrimaryActor => format!("player ({})", id),
            Self::Ball => format!("Ball ({})", id),
            Self::Other => format!("{}({})", class_name, id),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PrimaryActor => "PrimaryActor",
            Self::Ball => "Ball",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Classify a class name
pub fn classify(class_name: &str) -> EntityKind {
    match class_name {
        class::CAR => EntityKind::PrimaryActor,
        class::BALL => EntityKind::Ball,
        _ => EntityKind::Other,
    }
}
