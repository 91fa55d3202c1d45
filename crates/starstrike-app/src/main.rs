use std::io::BufRead;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;

use starstrike_app::game_loop::{self, LoopOptions};
use starstrike_app::host::{self, HostCommand};
use starstrike_app::state::{GameLoopCommand, LatestSnapshot};
use starstrike_core::config::SimConfig;

#[derive(Parser)]
#[command(name = "starstrike", about = "Headless arcade shooter simulation")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many ticks without reading input, then print the final frame
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut config = match &cli.config {
        Some(path) => SimConfig::load_from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let latest: LatestSnapshot = Arc::new(Mutex::new(None));

    if let Some(ticks) = cli.ticks {
        let handle = game_loop::spawn_game_loop(
            config,
            latest,
            LoopOptions {
                max_ticks: Some(ticks),
                unpaced: true,
            },
        )?;
        let summary = handle.join()?;
        if let Some(frame) = summary.last_frame {
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        return Ok(());
    }

    let handle = game_loop::spawn_game_loop(config, latest.clone(), LoopOptions::default())?;
    let sender = handle.sender();

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        match host::parse_line(&line) {
            Ok(Some(HostCommand::Input(event))) => {
                if sender.send(GameLoopCommand::Input(event)).is_err() {
                    break;
                }
            }
            Ok(Some(HostCommand::Status)) => {
                if let Ok(lock) = latest.lock() {
                    if let Some(frame) = lock.as_ref() {
                        println!(
                            "t={:.0}ms {:?} player.x={:.2} destroyed={} escaped={} fired={}",
                            frame.time.elapsed_ms,
                            frame.phase,
                            frame.player.position.x,
                            frame.score.enemies_destroyed,
                            frame.score.enemies_escaped,
                            frame.score.projectiles_fired
                        );
                    }
                }
            }
            Ok(Some(HostCommand::Quit)) => break,
            Ok(None) => {}
            Err(e) => log::warn!("{e}"),
        }
    }

    let summary = handle.shutdown()?;
    if let Some(frame) = summary.last_frame {
        println!("{}", serde_json::to_string(&frame.score)?);
    }
    Ok(())
}
