use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shooter_app::frontend::{LogRenderer, ScriptedController};
use shooter_app::game_loop::{self, Pacing};
use shooter_core::constants::DEFAULT_SCENE_FILE;
use shooter_sim::engine::{SimConfig, SimulationEngine};

#[derive(Parser)]
#[command(name = "shooter", about = "Headless first-person shooter simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Number of frames to simulate
    #[arg(short, long, default_value = "3600")]
    ticks: u64,

    /// RNG seed for deterministic enemy placement
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Scene file used by --load and --save
    #[arg(long, default_value = DEFAULT_SCENE_FILE)]
    scene: PathBuf,

    /// Load the scene file before the first frame
    #[arg(long)]
    load: bool,

    /// Save the scene file after the last frame
    #[arg(long)]
    save: bool,

    /// Pace frames at the tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Pull the trigger every N frames (0 never fires)
    #[arg(long, default_value = "10")]
    fire_every: u64,

    /// Print the final frame snapshot as JSON
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let mut engine = SimulationEngine::new(SimConfig { seed: cli.seed });

    if cli.load && !engine.load_scene(&cli.scene) {
        warn!(path = %cli.scene.display(), "starting with an empty scene");
    }

    let mut controller = ScriptedController::new(cli.ticks, cli.fire_every);
    let mut renderer = LogRenderer::new();
    let pacing = if cli.realtime {
        Pacing::Realtime
    } else {
        Pacing::Unpaced
    };

    info!(seed = cli.seed, ticks = cli.ticks, ?pacing, "simulation started");
    let summary = game_loop::run_game_loop(&mut engine, &mut controller, &mut renderer, pacing);

    let stats = renderer.stats();
    info!(
        ticks = summary.ticks,
        shots = summary.shots_fired,
        spawned = summary.enemies_spawned,
        destroyed = summary.enemies_destroyed,
        expired = summary.projectiles_expired,
        score = summary.final_score,
        triangles = stats.triangles,
        "simulation finished"
    );

    if cli.save {
        engine
            .save_scene(&cli.scene)
            .with_context(|| format!("saving scene to {}", cli.scene.display()))?;
        info!(path = %cli.scene.display(), "scene saved");
    }

    if cli.dump {
        if let Some(snapshot) = &summary.last_snapshot {
            println!("{}", serde_json::to_string_pretty(snapshot)?);
        }
    }

    Ok(())
}
