//! Headless replay player.
//!
//! Loads a replay that an external parser dumped as JSON, plays it through
//! the synchronization engine at a fixed tick and logs what a renderer
//! would be asked to do.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use replay_client::{BallFollower, EntityEvent, ReplayConfig, ReplayEngine, SyncReport};
use replay_shared::replay::Replay;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(name = "replay-headless", version, about = "Play a parsed match replay without rendering")]
struct Cli {
    /// Replay dump in JSON form
    replay: PathBuf,

    /// Engine configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seconds advanced per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    tick: f32,

    /// Stop at this playback time instead of the end of the log
    #[arg(long)]
    until: Option<f32>,

    /// Start playback at this time, overriding the configuration
    #[arg(long)]
    start: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.tick.is_finite() && cli.tick > 0.0, "--tick must be a positive number of seconds");

    let mut config = match &cli.config {
        Some(path) => ReplayConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => ReplayConfig::default(),
    };
    if let Some(start) = cli.start {
        config.start_time = start;
    }

    let file = File::open(&cli.replay).with_context(|| format!("opening replay {}", cli.replay.display()))?;
    let replay = Replay::from_reader(BufReader::new(file))
        .with_context(|| format!("reading replay {}", cli.replay.display()))?;
    let end = cli.until.unwrap_or_else(|| replay.duration());
    anyhow::ensure!(end.is_finite(), "--until must be a finite number of seconds");

    let mut follower = BallFollower::new(config.follow_smooth_time);
    let mut engine = ReplayEngine::new(replay, config)?;
    let mut total = SyncReport::default();

    // Tick count is fixed up front; the final advance lands exactly on `end`
    let start = engine.current_time();
    let ticks = ((end - start) / cli.tick).ceil().max(0.0) as u64;

    engine.play();
    for _ in 0..ticks {
        if engine.is_finished() {
            break;
        }
        if let Some(report) = engine.tick(cli.tick) {
            accumulate(&mut total, report);
        }
        for event in engine.drain_events() {
            log_event(&event);
        }
        if let Some(target) = engine.follow_target() {
            follower.update(target, cli.tick);
        }
    }
    if engine.current_time() < end {
        accumulate(&mut total, engine.advance_to(end));
        for event in engine.drain_events() {
            log_event(&event);
        }
    }
    engine.pause();

    info!(
        "Stopped at {:.2}s: {} frames, {} records applied, {} skipped, {} live entities, camera at {}",
        engine.current_time(),
        total.frames_processed,
        total.records_applied,
        total.errors.len(),
        engine.live_count(),
        follower.position()
    );

    engine.shutdown();
    let released = engine.drain_events().len();
    info!("Released {} entities", released);
    Ok(())
}

fn accumulate(total: &mut SyncReport, report: SyncReport) {
    total.frames_processed += report.frames_processed;
    total.records_applied += report.records_applied;
    total.errors.extend(report.errors);
}

fn log_event(event: &EntityEvent) {
    match event {
        EntityEvent::Created { id, kind, display_name } => info!("spawn {} {} [{}]", kind, display_name, id),
        EntityEvent::Destroyed { id } => info!("destroy [{}]", id),
        EntityEvent::ColorChanged { id, color } => info!("paint [{}] {}", id, color),
    }
}
