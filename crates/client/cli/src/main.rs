//! Headless chase runner.
//!
//! Builds a session from a generated, built-in or file map, drives it at a
//! fixed frame rate with an optional input script, then prints the final
//! grid and a summary.
//!
//! ```bash
//! chase --seed 7 --seconds 20 --inputs "UURRSDD" --input-every 45
//! chase --builtin corridor --json
//! ```
mod input;
mod logging;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chase_content::{ConfigLoader, MapLoader, maps};
use chase_core::{GameConfig, MapLayout};
use chase_runtime::{GameEvent, MapGenerator, RuntimeConfig, Session, SessionError};
use clap::Parser;
use input::{Command, InputScript};

#[derive(Parser, Debug)]
#[command(name = "chase")]
#[command(about = "Run a grid chase session headlessly", long_about = None)]
#[command(version)]
struct Cli {
    /// Map generation seed (overrides CHASE_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Map file: `.ron` layouts, anything else is read as an ASCII grid
    #[arg(long, conflicts_with = "builtin")]
    map: Option<PathBuf>,

    /// Built-in ASCII map (arena, corridor)
    #[arg(long)]
    builtin: Option<String>,

    /// Game configuration TOML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated seconds before stopping
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,

    /// Frames per second (overrides CHASE_FRAME_HZ)
    #[arg(long)]
    hz: Option<u32>,

    /// Input script: U D L R steer, S releases smoke, `.` waits
    #[arg(long, default_value = "")]
    inputs: String,

    /// Frames between two script commands
    #[arg(long, default_value_t = 30)]
    input_every: u32,

    /// Also write logs to this directory (or CHASE_LOG_DIR)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _guard = logging::setup_logging(logging::resolve_log_dir(cli.log_dir.clone()).as_deref())?;

    let mut runtime = RuntimeConfig::from_env();
    if let Some(seed) = cli.seed {
        runtime.seed = seed;
    }
    if let Some(hz) = cli.hz {
        runtime.frame_hz = hz.max(1);
    }
    runtime.game = load_game_config(cli.config.as_deref())?;

    let layout = load_layout(&cli, &runtime)?;
    let script = InputScript::parse(&cli.inputs, cli.input_every)?;
    let mut session = Session::new(layout, runtime.game.clone()).context("Failed to start session")?;

    let frames = (cli.seconds.max(0.0) * runtime.frame_hz as f32).ceil() as u64;
    tracing::info!(
        seed = runtime.seed,
        frames,
        hz = runtime.frame_hz,
        commands = script.len(),
        "Running session"
    );
    if script.is_empty() {
        tracing::info!("No input script; the player stays on its spawn cell");
    }
    let events = drive(&mut session, &script, frames, runtime.frame_dt())?;
    tracing::info!(events = events.len(), outcome = %session.mode().outcome(), "Session stopped");

    print!("{}", render::render_grid(&session));
    let summary = session.summary();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render::render_summary(&summary));
    }
    Ok(())
}

/// Runs up to `frames` ticks, applying script commands at the start of their
/// slot. Stops early once the session is finished.
fn drive(
    session: &mut Session,
    script: &InputScript,
    frames: u64,
    dt: f32,
) -> Result<Vec<GameEvent>> {
    let mut events = Vec::new();
    for frame in 0..frames {
        match script.at_frame(frame) {
            Some(Command::Steer(direction)) => session.set_direction(direction)?,
            Some(Command::Smoke) => match session.use_ability() {
                Ok(event) => events.push(event),
                // Refusals are logged by the session; the run goes on.
                Err(SessionError::Agent(_)) => {}
                Err(err) => return Err(err.into()),
            },
            Some(Command::Wait) | None => {}
        }
        events.extend(session.tick(dt)?);
        if session.is_finished() {
            break;
        }
    }
    Ok(events)
}

/// Explicit path, then the platform config directory, then defaults.
fn load_game_config(path: Option<&Path>) -> Result<GameConfig> {
    if let Some(path) = path {
        return ConfigLoader::load(path);
    }
    let default = directories::ProjectDirs::from("", "", "chase")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .filter(|path| path.is_file());
    match default {
        Some(path) => {
            tracing::info!("Using config {}", path.display());
            ConfigLoader::load(&path)
        }
        None => Ok(GameConfig::default()),
    }
}

fn load_layout(cli: &Cli, runtime: &RuntimeConfig) -> Result<MapLayout> {
    if let Some(path) = &cli.map {
        return MapLoader::load(path);
    }
    if let Some(name) = &cli.builtin {
        let Some(text) = maps::builtin(name) else {
            bail!("Unknown built-in map: {name}");
        };
        return MapLayout::from_ascii(text).with_context(|| format!("Built-in map {name} is invalid"));
    }
    MapGenerator::new(runtime.map_width, runtime.map_height)
        .generate(runtime.seed)
        .context("Failed to generate map")
}
