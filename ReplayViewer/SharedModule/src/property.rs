//! # Shared Property System
//!
//! Typed property values as they appear inside a delta record. Known shapes
//! get their own variant; anything the parser could not type is carried as
//! an opaque display string.

use serde::{Serialize, Deserialize};
use crate::types::*;
use crate::object::ActorId;
use std::fmt;

/// Physics state bundle replicated for moving actors
///
/// The parser stores the position in log axis order (X, Y, Z with Z up) and
/// the rotation as an already-reordered X, Y, Z triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyState {
    #[serde(default)]
    pub sleeping: bool,
    pub position: Vector3,
    pub rotation: Vector3,
    #[serde(default)]
    pub linear_velocity: Option<Vector3>,
    #[serde(default)]
    pub angular_velocity: Option<Vector3>,
}

impl fmt::Display for RigidBodyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position:{} Rotation:{}", self.position, self.rotation)?;
        if let Some(velocity) = self.linear_velocity {
            write!(f, " LinearVelocity:{}", velocity)?;
        }
        if let Some(velocity) = self.angular_velocity {
            write!(f, " AngularVelocity:{}", velocity)?;
        }
        if self.sleeping {
            write!(f, " Sleeping")?;
        }
        Ok(())
    }
}

/// Team and paint selection of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPaint {
    pub team_number: u8,
    #[serde(default)]
    pub team_color_id: u8,
    #[serde(default)]
    pub custom_color_id: u8,
    #[serde(default)]
    pub team_finish_id: u32,
    #[serde(default)]
    pub custom_finish_id: u32,
}

impl fmt::Display for TeamPaint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team:{} TeamColor:{} CustomColor:{} TeamFinish:{} CustomFinish:{}",
            self.team_number, self.team_color_id, self.custom_color_id,
            self.team_finish_id, self.custom_finish_id
        )
    }
}

/// Value carried by one property of a delta record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    // Primitive values
    Bool(bool),
    Byte(u8),
    Int(i32),
    QWord(u64),
    Float(f32),
    String(String),

    // Structured values
    Vector(Vector3),
    Rotator(Rotator),
    RigidBody(RigidBodyState),
    TeamPaint(TeamPaint),

    // Reference to another actor
    ActiveActor { active: bool, actor_id: ActorId },

    /// Anything the parser did not type, already stringified
    Opaque(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Byte(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::QWord(q) => write!(f, "{}", q),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(s) => f.write_str(s),
            Self::Vector(v) => write!(f, "{}", v),
            Self::Rotator(r) => write!(f, "{}", r),
            Self::RigidBody(state) => write!(f, "{}", state),
            Self::TeamPaint(paint) => write!(f, "{}", paint),
            Self::ActiveActor { active, actor_id } => {
                write!(f, "Active:{} ActorId:{}", active, actor_id)
            }
            Self::Opaque(text) => f.write_str(text),
        }
    }
}

/// One named property inside a delta record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorProperty {
    /// Fully qualified property name, e.g. `Engine.PlayerReplicationInfo:PlayerName`
    pub name: String,
    pub value: PropertyValue,
}

impl ActorProperty {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self { name: name.into(), value }
    }

    /// Stringified value as shown by introspection tools
    pub fn display_value(&self) -> String {
        self.value.to_string()
    }
}
