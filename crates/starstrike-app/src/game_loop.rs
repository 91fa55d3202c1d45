//! Game loop thread: ticks the simulation at a fixed rate and presents frames.
//!
//! The engine and render adapter are created inside this thread because it's
//! cleaner for ownership. Input arrives via `mpsc` channel and is folded into
//! one `InputState` per tick. The latest frame is stored in shared state for
//! synchronous polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use starstrike_core::config::SimConfig;
use starstrike_core::input::InputState;
use starstrike_core::state::FrameSnapshot;
use starstrike_render::{FsTextureLoader, HeadlessScene, RenderAdapter, SceneGraph};
use starstrike_sim::SimulationEngine;

use crate::state::{AppError, GameLoopCommand, LatestSnapshot};

/// How long and how fast to run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    /// Skip sleeping between ticks.
    pub unpaced: bool,
}

/// What the loop leaves behind when it stops.
#[derive(Debug, Clone, Default)]
pub struct LoopSummary {
    pub ticks: u64,
    pub last_frame: Option<FrameSnapshot>,
}

/// Handle to a running game loop.
pub struct GameLoopHandle {
    sender: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<Result<LoopSummary, AppError>>,
}

impl GameLoopHandle {
    /// Command sender for the host side.
    pub fn sender(&self) -> mpsc::Sender<GameLoopCommand> {
        self.sender.clone()
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> Result<LoopSummary, AppError> {
        let _ = self.sender.send(GameLoopCommand::Shutdown);
        self.join()
    }

    /// Wait for the loop to stop on its own.
    pub fn join(self) -> Result<LoopSummary, AppError> {
        match self.thread.join() {
            Ok(result) => result,
            Err(_) => Err(AppError::Io(std::io::Error::other(
                "game loop thread panicked",
            ))),
        }
    }
}

/// Nominal duration of one tick at the given rate.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / tick_rate.max(1) as u64)
}

/// Spawns the game loop in a new thread with a headless scene.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: LatestSnapshot,
    options: LoopOptions,
) -> Result<GameLoopHandle, AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("starstrike-game-loop".into())
        .spawn(move || {
            let mut loader = FsTextureLoader::new(&config.asset_root);
            let engine = SimulationEngine::new(config)?;
            let mut adapter = RenderAdapter::new(HeadlessScene::new(), &mut loader);
            let summary = run_game_loop(engine, &mut adapter, cmd_rx, &latest_snapshot, options)?;
            log::debug!("final scene:\n{}", adapter.scene().describe());
            Ok(summary)
        })?;

    Ok(GameLoopHandle {
        sender: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until Shutdown command, channel disconnect or the
/// tick limit.
pub fn run_game_loop<S: SceneGraph>(
    mut engine: SimulationEngine,
    adapter: &mut RenderAdapter<S>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &LatestSnapshot,
    options: LoopOptions,
) -> Result<LoopSummary, AppError> {
    let tick_duration = tick_duration(engine.config().tick_rate);
    let mut next_tick_time = Instant::now();
    let mut input = InputState::default();
    let mut summary = LoopSummary::default();
    let mut disconnected = false;

    loop {
        if options.max_ticks.is_some_and(|max| summary.ticks >= max) {
            break;
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(event)) => input.record(event),
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shutting down after {} ticks", summary.ticks);
                    return Ok(summary);
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
        // A tick-limited run keeps going without a host.
        if disconnected && options.max_ticks.is_none() {
            log::info!("host disconnected after {} ticks", summary.ticks);
            return Ok(summary);
        }

        // 2. Advance one tick on this tick's input snapshot
        let snapshot = engine.tick(&input.take());

        // 3. Hand the frame to the renderer
        adapter.present(&snapshot)?;
        summary.ticks += 1;

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        summary.last_frame = Some(snapshot);

        // 5. Sleep until next tick
        if options.unpaced {
            continue;
        }
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }

    log::info!("game loop reached {} ticks", summary.ticks);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use starstrike_core::input::{InputEvent, Key};

    fn headless_adapter() -> RenderAdapter<HeadlessScene> {
        let mut loader = FsTextureLoader::new("/nonexistent-asset-root");
        RenderAdapter::new(HeadlessScene::new(), &mut loader)
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputEvent::KeyDown { key: Key::Fire }))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], GameLoopCommand::Input(_)));
        assert!(matches!(commands[1], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_folds_queued_input_into_first_tick() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        for _ in 0..3 {
            tx.send(GameLoopCommand::Input(InputEvent::KeyDown { key: Key::Right }))
                .unwrap();
        }
        tx.send(GameLoopCommand::Input(InputEvent::KeyDown { key: Key::Fire }))
            .unwrap();

        let latest: LatestSnapshot = Arc::new(Mutex::new(None));
        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let mut adapter = headless_adapter();
        let summary = run_game_loop(
            engine,
            &mut adapter,
            rx,
            &latest,
            LoopOptions {
                max_ticks: Some(5),
                unpaced: true,
            },
        )
        .unwrap();

        assert_eq!(summary.ticks, 5);
        let last = summary.last_frame.unwrap();
        assert!((last.player.position.x - 0.3).abs() < 1e-5);
        assert_eq!(last.score.projectiles_fired, 1);
        assert_eq!(last.time.tick, 5);

        let polled = latest.lock().unwrap().clone().unwrap();
        assert_eq!(polled.time.tick, 5);

        // The adapter outlives the loop, so its scene can still be dumped.
        assert_eq!(adapter.frames_presented(), 5);
        let dump = adapter.scene().describe();
        assert!(dump.contains("draws=5"));
        assert!(dump.contains("Player pos=(0.30, -3.00)"));
        assert!(dump.contains("Projectile(0)"));
    }

    #[test]
    fn test_loop_stops_on_shutdown() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let latest: LatestSnapshot = Arc::new(Mutex::new(None));
        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let summary = run_game_loop(
            engine,
            &mut headless_adapter(),
            rx,
            &latest,
            LoopOptions::default(),
        )
        .unwrap();

        assert_eq!(summary.ticks, 0);
        assert!(latest.lock().unwrap().is_none());
    }

    #[test]
    fn test_loop_stops_on_disconnect() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        drop(tx);

        let latest: LatestSnapshot = Arc::new(Mutex::new(None));
        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let summary = run_game_loop(
            engine,
            &mut headless_adapter(),
            rx,
            &latest,
            LoopOptions::default(),
        )
        .unwrap();
        assert_eq!(summary.ticks, 0);
    }

    #[test]
    fn test_spawned_loop_runs_to_tick_limit() {
        let latest: LatestSnapshot = Arc::new(Mutex::new(None));
        let handle = spawn_game_loop(
            SimConfig::default(),
            latest.clone(),
            LoopOptions {
                max_ticks: Some(30),
                unpaced: true,
            },
        )
        .unwrap();

        let summary = handle.join().unwrap();
        assert_eq!(summary.ticks, 30);
        assert_eq!(latest.lock().unwrap().as_ref().unwrap().time.tick, 30);
    }

    #[test]
    fn test_spawned_loop_rejects_bad_config() {
        let latest: LatestSnapshot = Arc::new(Mutex::new(None));
        let handle = spawn_game_loop(
            SimConfig {
                enemy_count: 0,
                ..Default::default()
            },
            latest,
            LoopOptions {
                max_ticks: Some(1),
                unpaced: true,
            },
        )
        .unwrap();
        assert!(matches!(handle.join(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(tick_duration(60).as_nanos(), expected_nanos as u128);
    }
}
