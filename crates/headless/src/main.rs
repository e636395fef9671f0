//! Headless host for the Verdant simulation.
//!
//! Stands in for the browser frame-callback host: drives the simulation at a
//! fixed frame rate with a scripted input pattern, drains the collaborator
//! events, and logs HUD lines. Useful for profiling the difficulty curve and
//! for soak-testing a long session without a renderer.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use verdant_core::{FrameInput, GameConfig, GameEvent, GamePhase, Simulation};

#[derive(Parser, Debug)]
#[command(name = "verdant-headless", about = "Run a scripted Verdant session")]
struct Args {
    /// RNG seed for the session.
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Session length in game seconds.
    #[arg(long, default_value_t = 120.0)]
    duration: f32,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Optional JSON config file overriding the default tuning.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Restart and keep playing after a game over instead of stopping.
    #[arg(long)]
    keep_playing: bool,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GameConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(GameConfig::default()),
    }
}

/// Scripted input: keep walking forward, sweep the view slowly so fire
/// direction varies.
fn scripted_input(frame: u64) -> FrameInput {
    let mut input = FrameInput::default();
    input.movement.forward = true;
    input.movement.right = (frame / 300) % 2 == 0;
    input.look_delta = (2.0, 0.0);
    input
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let mut sim = Simulation::new(config, args.seed);
    sim.start();

    let dt = 1.0 / args.fps as f32;
    let total_frames = (args.duration * args.fps as f32) as u64;
    let mut sounds_played: u64 = 0;

    for frame in 0..total_frames {
        if frame % 12 == 0 {
            sim.fire();
        }
        sim.frame(&scripted_input(frame), dt);

        for event in sim.drain_events() {
            match event {
                GameEvent::Sound { sound, volume, pitch } => {
                    sounds_played += 1;
                    log::debug!("playSound({}, {:.2}, {:.2})", sound.name(), volume, pitch);
                }
                GameEvent::GameOver { summary } => {
                    println!(
                        "game over at {} with score {} ({})",
                        summary.time_display, summary.score, summary.difficulty_display
                    );
                    if args.keep_playing {
                        sim.restart();
                    }
                }
                other => log::trace!("{:?}", other),
            }
        }

        if frame % (args.fps as u64) == 0 {
            let hud = sim.hud_snapshot();
            println!(
                "{} | health {:3} | score {:5} | difficulty {} | enemies {:3}",
                hud.time_display,
                hud.health,
                hud.score,
                hud.difficulty_display,
                sim.store.enemies.len()
            );
        }

        if sim.phase == GamePhase::GameOver && !args.keep_playing {
            break;
        }
    }

    log::info!("session finished, {} sounds requested", sounds_played);
    Ok(())
}
