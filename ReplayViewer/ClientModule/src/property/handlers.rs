//! # Special Property Handlers
//!
//! Properties whose values also change entity state. Dispatch is on the
//! property name together with the value's shape; a known name carrying an
//! unexpected shape is logged and otherwise ignored.

use crate::config::ReplayConfig;
use crate::event::EntityEvent;
use crate::object::LiveEntity;
use crate::transform;
use replay_shared::constants::property;
use replay_shared::property::{ActorProperty, PropertyValue};
use log::{trace, warn};

/// Apply the special-case effect of `prop` to `entity`, if it has one.
///
/// Returns a presentation event when the effect has to reach the renderer.
/// The generic property-log step is not performed here.
pub fn apply_special(
    entity: &mut LiveEntity,
    prop: &ActorProperty,
    config: &ReplayConfig,
) -> Option<EntityEvent> {
    match (prop.name.as_str(), &prop.value) {
        (property::RIGID_BODY_STATE, PropertyValue::RigidBody(state)) => {
            entity.position = transform::rigid_body_position(state, config.pos_scale);
            entity.rotation = transform::rigid_body_rotation(state, config.rot_scale);
            entity.linear_velocity = state.linear_velocity;
            trace!("Actor {} rigid body -> {}", entity.id, entity.position);
            None
        }
        (property::PLAYER_NAME, PropertyValue::String(name)) => {
            if !entity.append_display_name(name, config.display_name_cap) {
                trace!("Actor {} name append skipped, cap {} reached", entity.id, config.display_name_cap);
            }
            None
        }
        (property::TEAM_PAINT, PropertyValue::TeamPaint(paint)) => {
            if !entity.paintable {
                trace!("Actor {} has no paintable surface, team paint ignored", entity.id);
                return None;
            }
            let color = config.team_color(paint.team_number);
            entity.color = Some(color);
            Some(EntityEvent::ColorChanged { id: entity.id, color })
        }
        (name @ (property::RIGID_BODY_STATE | property::PLAYER_NAME | property::TEAM_PAINT), value) => {
            warn!("Actor {} property {} has unexpected value {:?}", entity.id, name, value);
            None
        }
        _ => None,
    }
}
