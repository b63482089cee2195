//! # Coordinate Mapping
//!
//! Converts raw log positions and rotations into the render convention
//! (Y up) and scale. The log records positions with Z up, so Y and Z swap.
//!
//! Two raw shapes exist. Top-level record fields carry a `Vector3` position
//! and a pitch/yaw/roll `Rotator`; the rigid-body bundle carries a position
//! in the same axis order and a rotation already stored as X, Y, Z. Callers
//! pick the variant matching the field that was populated.

use replay_shared::property::RigidBodyState;
use replay_shared::types::{Rotator, Vector3};

/// Position from a record's top-level field
pub fn to_position(raw: Vector3, scale: f32) -> Vector3 {
    Vector3::new(raw.x, raw.z, raw.y).scaled(scale)
}

/// Euler rotation from a record's top-level field
pub fn to_rotation(raw: Rotator, scale: f32) -> Vector3 {
    Vector3::new(raw.pitch, raw.yaw, raw.roll).scaled(scale)
}

/// Position from a rigid-body bundle
pub fn rigid_body_position(state: &RigidBodyState, scale: f32) -> Vector3 {
    let raw = state.position;
    Vector3::new(raw.x, raw.z, raw.y).scaled(scale)
}

/// Euler rotation from a rigid-body bundle
pub fn rigid_body_rotation(state: &RigidBodyState, scale: f32) -> Vector3 {
    state.rotation.scaled(scale)
}
