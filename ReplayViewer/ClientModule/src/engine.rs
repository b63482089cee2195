//! # Replay Synchronization
//!
//! The engine walks the delta log with a monotonic cursor and applies every
//! frame whose timestamp has been reached by the playback time. Playback
//! time is set by the caller and may move backwards; the cursor never does,
//! so seeking back leaves the already applied entity state in place.
//!
//! Everything here is synchronous. A host that shares the engine between
//! threads should hold one lock around each `advance_to` call.

use crate::actor::EntityKind;
use crate::class::ClassRegistry;
use crate::config::{ConfigError, ReplayConfig};
use crate::error::SyncError;
use crate::event::EntityEvent;
use crate::object::{EntityRegistry, LiveEntity};
use crate::property::PropertyLog;
use replay_shared::lifecycle::ActorLifecycle;
use replay_shared::object::ActorId;
use replay_shared::replay::{ActorDelta, Frame, Replay};
use replay_shared::types::Vector3;
use log::{debug, info, trace, warn};

/// Outcome of one `advance_to` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Frames consumed by the cursor
    pub frames_processed: usize,

    /// Records applied without error
    pub records_applied: usize,

    /// Skipped records and class lookup misses, in log order
    pub errors: Vec<SyncError>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn merge(&mut self, other: SyncReport) {
        self.frames_processed += other.frames_processed;
        self.records_applied += other.records_applied;
        self.errors.extend(other.errors);
    }
}

/// Replay playback state: log, cursor, clock and live entities
#[derive(Debug)]
pub struct ReplayEngine {
    frames: Vec<Frame>,
    classes: ClassRegistry,
    registry: EntityRegistry,
    config: ReplayConfig,
    cursor: usize,
    current_time: f32,
    playing: bool,
}

impl ReplayEngine {
    /// Build an engine over a parsed replay. Starts paused at
    /// `config.start_time` with the cursor on the first frame.
    pub fn new(replay: Replay, config: ReplayConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let classes = ClassRegistry::from_index(&replay.class_indexes);
        let registry = EntityRegistry::new(&config);
        info!(
            "Replay engine initialized: {} frames, {} classes, {:.2}s",
            replay.frames.len(),
            classes.len(),
            replay.duration()
        );

        Ok(Self {
            frames: replay.frames,
            classes,
            registry,
            current_time: config.start_time,
            config,
            cursor: 0,
            playing: false,
        })
    }

    /// Apply every frame with `time <= target_time` not applied yet, then
    /// set the playback time to `target_time`.
    ///
    /// A non-finite target is ignored: the cursor cannot rewind, so applying
    /// frames against it could not be undone.
    pub fn advance_to(&mut self, target_time: f32) -> SyncReport {
        let mut report = SyncReport::default();
        if !target_time.is_finite() {
            warn!("Ignoring non-finite playback target {}", target_time);
            return report;
        }

        while let Some(frame) = self.frames.get(self.cursor) {
            if !(frame.time <= target_time) {
                break;
            }
            for record in &frame.actor_states {
                match apply_record(&mut self.registry, &self.classes, &self.config, record, &mut report) {
                    Ok(()) => report.records_applied += 1,
                    Err(err) => {
                        warn!("{} (frame {} at {:.3}s), record skipped", err, self.cursor, frame.time);
                        report.errors.push(err);
                    }
                }
            }
            self.cursor += 1;
            report.frames_processed += 1;
        }

        self.current_time = target_time;
        if report.frames_processed > 0 {
            trace!(
                "Advanced to {:.3}s: {} frames, {} records, {} errors",
                target_time,
                report.frames_processed,
                report.records_applied,
                report.errors.len()
            );
        }
        report
    }

    /// Per-tick driver: when playing, advance by `delta` seconds
    pub fn tick(&mut self, delta: f32) -> Option<SyncReport> {
        if !self.playing {
            return None;
        }
        if !delta.is_finite() {
            warn!("Ignoring non-finite tick delta {}", delta);
            return Some(SyncReport::default());
        }
        Some(self.advance_to(self.current_time + delta))
    }

    /// Advance to the end of the log in steps of `delta`, for headless runs.
    ///
    /// Step targets are computed from the step index so the number of steps
    /// stays bounded even where `current_time + delta` no longer moves.
    pub fn run_to_end(&mut self, delta: f32) -> SyncReport {
        let mut total = SyncReport::default();
        let start = self.current_time;
        let end = self.frames.last().map(|frame| frame.time).unwrap_or(start);
        if delta.is_finite() && delta > 0.0 && end > start {
            let steps = ((end - start) / delta).ceil() as u64;
            for step in 1..=steps {
                if self.is_finished() {
                    break;
                }
                total.merge(self.advance_to(start + step as f32 * delta));
            }
        }
        total.merge(self.advance_to(self.current_time.max(end)));
        total
    }

    /// Destroy every live entity and stop playback
    pub fn shutdown(&mut self) {
        let destroyed = self.registry.clear();
        self.cursor = self.frames.len();
        self.playing = false;
        info!("Replay engine shut down, {} entities released", destroyed);
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    /// Move the playback clock. The cursor and entity state are untouched;
    /// moving backwards does not rewind anything.
    pub fn set_current_time(&mut self, time: f32) {
        if time < self.current_time {
            debug!("Playback time moved back to {:.3}s, cursor stays at frame {}", time, self.cursor);
        }
        self.current_time = time;
    }

    /// Index of the next frame to apply
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    pub fn entity(&self, id: ActorId) -> Option<&LiveEntity> {
        self.registry.get(id).ok()
    }

    pub fn entities(&self) -> impl Iterator<Item = &LiveEntity> {
        self.registry.iter()
    }

    pub fn live_count(&self) -> usize {
        self.registry.len()
    }

    /// Property log of a live entity, for introspection
    pub fn property_log(&self, id: ActorId) -> Option<&PropertyLog> {
        self.entity(id).map(|entity| &entity.property_log)
    }

    pub fn find_kind(&self, kind: EntityKind) -> Option<&LiveEntity> {
        self.registry.find_kind(kind)
    }

    /// Position the camera should follow: the ball, when one is live
    pub fn follow_target(&self) -> Option<Vector3> {
        self.find_kind(EntityKind::Ball).map(|ball| ball.position)
    }

    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    pub fn drain_events(&mut self) -> Vec<EntityEvent> {
        self.registry.drain_events()
    }
}

/// Apply one delta record.
///
/// Errors mean the record was skipped. A class lookup miss on a `New`
/// record is not one of them: it is noted in the report and the entity is
/// created as `Other`.
fn apply_record(
    registry: &mut EntityRegistry,
    classes: &ClassRegistry,
    config: &ReplayConfig,
    record: &ActorDelta,
    report: &mut SyncReport,
) -> Result<(), SyncError> {
    match record.state {
        ActorLifecycle::New => {
            registry.create(record.id, record.class_id, classes)?;
            match record.class_id {
                Some(class_id) if !classes.contains(class_id) => {
                    warn!("Actor {} spawned with unknown class ID {}", record.id, class_id);
                    report.errors.push(SyncError::UnknownClass(class_id));
                }
                None => warn!("Actor {} spawned without a class ID", record.id),
                _ => {}
            }
        }
        ActorLifecycle::Updated => {
            registry.get(record.id)?;
        }
        ActorLifecycle::Deleted => {
            registry.destroy(record.id)?;
            return Ok(());
        }
    }

    // Top-level fields first so a rigid-body property in the same record wins
    registry.apply_pose(record.id, record.position, record.rotation, config)?;
    for prop in record.properties.values() {
        let outcome = registry.apply_property(record.id, prop, config)?;
        trace!("Actor {} {} -> {:?}", record.id, prop.name, outcome);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use replay_shared::replay::ClassIndex;

    fn replay(frames: Vec<Frame>) -> Replay {
        Replay::new(vec![ClassIndex::new(2, "TAGame.Ball_TA")], frames)
    }

    #[test]
    fn starts_paused_at_configured_time() {
        let config = ReplayConfig { start_time: 3.0, ..ReplayConfig::default() };
        let mut engine = ReplayEngine::new(replay(vec![]), config).unwrap();
        assert!(!engine.is_playing());
        assert_eq!(engine.current_time(), 3.0);
        assert!(engine.tick(0.1).is_none());
        assert_eq!(engine.current_time(), 3.0);
    }

    #[test]
    fn tick_advances_only_while_playing() {
        let mut engine = ReplayEngine::new(
            replay(vec![Frame::new(0.05, vec![ActorDelta::spawn(1, 2)])]),
            ReplayConfig::default(),
        )
        .unwrap();

        engine.play();
        let report = engine.tick(0.1).unwrap();
        assert_eq!(report.frames_processed, 1);
        assert!((engine.current_time() - 0.1).abs() < 1e-6);

        engine.pause();
        assert!(engine.tick(0.1).is_none());
        assert!((engine.current_time() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ReplayConfig { pos_scale: -1.0, ..ReplayConfig::default() };
        assert!(ReplayEngine::new(replay(vec![]), config).is_err());
    }

    #[test]
    fn advancing_without_crossing_a_frame_only_moves_clock() {
        let mut engine = ReplayEngine::new(
            replay(vec![Frame::new(2.0, vec![ActorDelta::spawn(1, 2)])]),
            ReplayConfig::default(),
        )
        .unwrap();
        let report = engine.advance_to(1.0);
        assert_eq!(report, SyncReport::default());
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.current_time(), 1.0);
    }

    #[test]
    fn run_to_end_consumes_every_frame() {
        let frames = (0..10)
            .map(|i| Frame::new(i as f32 * 0.1, vec![ActorDelta::update(1)]))
            .collect();
        let mut engine = ReplayEngine::new(replay(frames), ReplayConfig::default()).unwrap();

        let report = engine.run_to_end(1.0 / 30.0);
        assert!(engine.is_finished());
        assert_eq!(report.frames_processed, 10);
        assert_eq!(report.errors, vec![SyncError::UnknownIdentifier(1); 10]);
    }

    #[test]
    fn non_finite_target_applies_nothing() {
        let frames = vec![
            Frame::new(0.0, vec![ActorDelta::spawn(1, 2)]),
            Frame::new(100.0, vec![ActorDelta::spawn(2, 2)]),
        ];
        let mut engine = ReplayEngine::new(replay(frames), ReplayConfig::default()).unwrap();

        assert_eq!(engine.advance_to(f32::NAN), SyncReport::default());
        assert_eq!(engine.advance_to(f32::INFINITY), SyncReport::default());
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.live_count(), 0);
        assert_eq!(engine.current_time(), 0.0);

        engine.play();
        assert_eq!(engine.tick(f32::NAN), Some(SyncReport::default()));
        assert!(!engine.is_finished());

        let report = engine.tick(1.0).unwrap();
        assert_eq!(report.frames_processed, 1);
        assert_eq!(engine.live_count(), 1);
    }

    #[test]
    fn run_to_end_terminates_when_step_is_below_float_resolution() {
        let config = ReplayConfig { start_time: 1.0e8, ..ReplayConfig::default() };
        let frames = vec![Frame::new(1.0e8 + 16.0, vec![ActorDelta::spawn(1, 2)])];
        let mut engine = ReplayEngine::new(replay(frames), config).unwrap();

        let report = engine.run_to_end(1.0);
        assert!(engine.is_finished());
        assert_eq!(report.frames_processed, 1);
        assert_eq!(engine.live_count(), 1);
    }

    #[test]
    fn run_to_end_with_zero_step_jumps_to_last_frame() {
        let frames = vec![Frame::new(0.0, vec![ActorDelta::spawn(1, 2)]), Frame::new(5.0, vec![])];
        let mut engine = ReplayEngine::new(replay(frames), ReplayConfig::default()).unwrap();
        let report = engine.run_to_end(0.0);
        assert_eq!(report.frames_processed, 2);
        assert_eq!(engine.current_time(), 5.0);
    }
}
