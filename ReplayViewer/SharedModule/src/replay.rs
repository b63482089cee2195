//! # Delta Log
//!
//! The already-parsed replay handed to the engine: a class index and a
//! time-ordered sequence of frames, each holding per-actor delta records.
//! The engine only reads this structure; producing it is the parser's job.

use serde::{Serialize, Deserialize};
use crate::types::*;
use crate::object::{ActorId, ClassId};
use crate::property::ActorProperty;
use crate::lifecycle::ActorLifecycle;
use std::collections::HashMap;
use std::io::Read;

/// One entry of the replay's class index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassIndex {
    /// Class id as referenced by `ActorDelta::class_id`
    pub index: ClassId,

    /// Fully qualified class name, e.g. `TAGame.Ball_TA`
    pub class: String,
}

impl ClassIndex {
    pub fn new(index: ClassId, class: impl Into<String>) -> Self {
        Self { index, class: class.into() }
    }
}

/// One entity mutation within a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorDelta {
    pub id: ActorId,
    pub state: ActorLifecycle,

    /// Only meaningful when `state` is `New`
    #[serde(default)]
    pub class_id: Option<ClassId>,

    /// Initial position, only present on some records
    #[serde(default)]
    pub position: Option<Vector3>,

    /// Initial rotation, only present on some records
    #[serde(default)]
    pub rotation: Option<Rotator>,

    /// Updated properties keyed by the parser's property key
    #[serde(default)]
    pub properties: HashMap<u32, ActorProperty>,
}

impl ActorDelta {
    /// Record that brings a new actor of `class_id` into the scene
    pub fn spawn(id: ActorId, class_id: ClassId) -> Self {
        Self {
            id,
            state: ActorLifecycle::New,
            class_id: Some(class_id),
            position: None,
            rotation: None,
            properties: HashMap::new(),
        }
    }

    /// Record carrying state deltas for an existing actor
    pub fn update(id: ActorId) -> Self {
        Self {
            id,
            state: ActorLifecycle::Updated,
            class_id: None,
            position: None,
            rotation: None,
            properties: HashMap::new(),
        }
    }

    /// Record removing an actor from the scene
    pub fn delete(id: ActorId) -> Self {
        Self {
            id,
            state: ActorLifecycle::Deleted,
            class_id: None,
            position: None,
            rotation: None,
            properties: HashMap::new(),
        }
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_rotation(mut self, rotation: Rotator) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Add a property under `key`, replacing any previous one with that key
    pub fn with_property(mut self, key: u32, property: ActorProperty) -> Self {
        self.properties.insert(key, property);
        self
    }
}

/// Timestamped batch of delta records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Seconds since the start of the recording
    pub time: f32,

    #[serde(default)]
    pub actor_states: Vec<ActorDelta>,
}

impl Frame {
    pub fn new(time: f32, actor_states: Vec<ActorDelta>) -> Self {
        Self { time, actor_states }
    }
}

/// Parsed replay as consumed by the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    #[serde(default)]
    pub class_indexes: Vec<ClassIndex>,

    /// Frames in non-decreasing time order
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl Replay {
    pub fn new(class_indexes: Vec<ClassIndex>, frames: Vec<Frame>) -> Self {
        Self { class_indexes, frames }
    }

    /// Timestamp of the last frame, or zero for an empty log
    pub fn duration(&self) -> f32 {
        self.frames.last().map(|frame| frame.time).unwrap_or(0.0)
    }

    /// Load a replay that an external parser dumped as JSON
    pub fn from_json_str(json: &str) -> Result<Self, ReplayLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ReplayLoadError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }
}

/// Failure while loading a replay dump
#[derive(Debug, thiserror::Error)]
pub enum ReplayLoadError {
    #[error("Failed to read replay dump: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid replay JSON: {0}")]
    Json(#[from] serde_json::Error),
}
