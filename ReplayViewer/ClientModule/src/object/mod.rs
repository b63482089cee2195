//! # Entity Registry
//!
//! Owns every live entity, keyed by the persistent actor id from the log.
//! An id maps to at most one live entity at a time; creation and destruction
//! are the only ways in and out, and each successful transition queues an
//! event for the presentation layer.

use crate::actor::{classify, EntityKind};
use crate::class::ClassRegistry;
use crate::config::ReplayConfig;
use crate::error::SyncError;
use crate::event::EntityEvent;
use crate::property::{self, PropertyLog, PropertyLogOutcome};
use crate::transform;
use replay_shared::constants::class::UNKNOWN;
use replay_shared::object::{ActorId, ClassId};
use replay_shared::property::ActorProperty;
use replay_shared::types::*;
use std::collections::HashMap;
use log::debug;

/// Engine-side representation of one replicated actor
#[derive(Debug, Clone, PartialEq)]
pub struct LiveEntity {
    pub id: ActorId,
    pub kind: EntityKind,

    /// Class name resolved at creation
    pub class_name: String,

    pub display_name: String,

    /// Render-space position
    pub position: Vector3,

    /// Render-space Euler rotation
    pub rotation: Vector3,

    /// Last replicated linear velocity. Not consumed yet.
    pub linear_velocity: Option<Vector3>,

    /// Current paint, if a team color was applied
    pub color: Option<LinearColor>,

    /// Whether the visual has a surface that team paint can recolor
    pub paintable: bool,

    pub property_log: PropertyLog,
}

impl LiveEntity {
    pub fn new(
        id: ActorId,
        kind: EntityKind,
        class_name: &str,
        paintable: bool,
        property_log_cap: usize,
    ) -> Self {
        Self {
            id,
            kind,
            class_name: class_name.to_string(),
            display_name: kind.initial_display_name(id, class_name),
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            linear_velocity: None,
            color: None,
            paintable,
            property_log: PropertyLog::new(property_log_cap),
        }
    }

    /// Append `" (<suffix>)"` to the display name if the result stays
    /// strictly shorter than `cap` characters. Never truncates.
    pub fn append_display_name(&mut self, suffix: &str, cap: usize) -> bool {
        let appended = format!("{} ({})", self.display_name, suffix);
        if appended.chars().count() < cap {
            self.display_name = appended;
            true
        } else {
            false
        }
    }
}

/// Live entities keyed by actor id
#[derive(Debug)]
pub struct EntityRegistry {
    entities: HashMap<ActorId, LiveEntity>,
    events: Vec<EntityEvent>,
    property_log_cap: usize,
    paintable_kinds: Vec<EntityKind>,
}

impl EntityRegistry {
    pub fn new(config: &ReplayConfig) -> Self {
        Self {
            entities: HashMap::new(),
            events: Vec::new(),
            property_log_cap: config.property_log_cap,
            paintable_kinds: config.paintable_kinds.clone(),
        }
    }

    /// Create a live entity for `id`.
    ///
    /// Fails without touching the existing entity if `id` is already live.
    /// A missing or unregistered class resolves to the "class not found"
    /// sentinel and therefore to `EntityKind::Other`.
    pub fn create(
        &mut self,
        id: ActorId,
        class_id: Option<ClassId>,
        classes: &ClassRegistry,
    ) -> Result<&mut LiveEntity, SyncError> {
        if self.entities.contains_key(&id) {
            return Err(SyncError::DuplicateIdentifier(id));
        }

        let class_name = class_id.map_or(UNKNOWN, |class_id| classes.lookup(class_id));
        let kind = classify(class_name);
        let paintable = self.paintable_kinds.contains(&kind);
        let entity = LiveEntity::new(id, kind, class_name, paintable, self.property_log_cap);

        debug!("Created {} entity {} ({})", kind, id, entity.display_name);
        self.events.push(EntityEvent::Created {
            id,
            kind,
            display_name: entity.display_name.clone(),
        });

        Ok(self.entities.entry(id).or_insert(entity))
    }

    pub fn get(&self, id: ActorId) -> Result<&LiveEntity, SyncError> {
        self.entities.get(&id).ok_or(SyncError::UnknownIdentifier(id))
    }

    pub fn get_mut(&mut self, id: ActorId) -> Result<&mut LiveEntity, SyncError> {
        self.entities.get_mut(&id).ok_or(SyncError::UnknownIdentifier(id))
    }

    /// Remove a live entity and hand it back to the caller.
    ///
    /// The queued `Destroyed` event tells the presentation layer to tear
    /// down the visual it attached on creation.
    pub fn destroy(&mut self, id: ActorId) -> Result<LiveEntity, SyncError> {
        let entity = self.entities.remove(&id).ok_or(SyncError::UnknownIdentifier(id))?;
        debug!("Destroyed entity {} ({})", id, entity.display_name);
        self.events.push(EntityEvent::Destroyed { id });
        Ok(entity)
    }

    /// Apply top-level record position/rotation, whichever are present
    pub fn apply_pose(
        &mut self,
        id: ActorId,
        position: Option<Vector3>,
        rotation: Option<Rotator>,
        config: &ReplayConfig,
    ) -> Result<(), SyncError> {
        let entity = self.get_mut(id)?;
        if let Some(raw) = position {
            entity.position = transform::to_position(raw, config.pos_scale);
        }
        if let Some(raw) = rotation {
            entity.rotation = transform::to_rotation(raw, config.rot_scale);
        }
        Ok(())
    }

    /// Apply one property: its special-case effect first, then the
    /// property log.
    pub fn apply_property(
        &mut self,
        id: ActorId,
        prop: &ActorProperty,
        config: &ReplayConfig,
    ) -> Result<PropertyLogOutcome, SyncError> {
        let entity = self.entities.get_mut(&id).ok_or(SyncError::UnknownIdentifier(id))?;
        if let Some(event) = property::apply_special(entity, prop, config) {
            self.events.push(event);
        }
        Ok(entity.property_log.apply(&prop.name, prop.display_value()))
    }

    /// Destroy every live entity in ascending id order
    pub fn clear(&mut self) -> usize {
        let mut released: Vec<LiveEntity> = self.entities.drain().map(|(_, entity)| entity).collect();
        released.sort_unstable_by_key(|entity| entity.id);
        for entity in &released {
            debug!("Destroyed entity {} ({})", entity.id, entity.display_name);
            self.events.push(EntityEvent::Destroyed { id: entity.id });
        }
        released.len()
    }

    pub fn is_live(&self, id: ActorId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiveEntity> {
        self.entities.values()
    }

    /// First live entity of `kind` by ascending id
    pub fn find_kind(&self, kind: EntityKind) -> Option<&LiveEntity> {
        self.entities
            .values()
            .filter(|entity| entity.kind == kind)
            .min_by_key(|entity| entity.id)
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<EntityEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[EntityEvent] {
        &self.events
    }
}
