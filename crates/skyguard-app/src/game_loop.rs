//! Game loop thread: runs the simulation engine at 60Hz.
//!
//! The engine is created inside the thread and owned by it. Commands arrive
//! over an `mpsc` channel; each tick's snapshot replaces the shared latest
//! snapshot for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use skyguard_core::constants::TICK_RATE;
use skyguard_core::state::GameStateSnapshot;
use skyguard_sim::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread's join handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyguard-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .map_err(AppError::Thread)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let epoch = Instant::now();
    let mut next_tick_time = epoch;
    info!("game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!(tick = engine.time().tick, "game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed");
                    return;
                }
            }
        }

        // 2. Advance one tick on the wall clock
        let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.tick(now_ms);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::commands::PlayerCommand;
    use skyguard_core::enums::GamePhase;

    fn wait_for_phase(
        latest: &Mutex<Option<GameStateSnapshot>>,
        phase: GamePhase,
    ) -> Option<GameStateSnapshot> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                if snap.phase == phase {
                    return Some(snap.clone());
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession {
            width: 800.0,
            height: 600.0,
        }))
        .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartSession { .. })
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_runs_session_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), Arc::clone(&latest)).unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession {
            width: 800.0,
            height: 600.0,
        }))
        .unwrap();
        let snap = wait_for_phase(&latest, GamePhase::Active).expect("session never started");
        assert_eq!(snap.installations.len(), 9);

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        let paused = wait_for_phase(&latest, GamePhase::Paused).expect("never paused");
        std::thread::sleep(TICK_DURATION * 3);
        let later = latest.lock().unwrap().clone().unwrap();
        assert_eq!(later.time.tick, paused.time.tick);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_loop_exits_when_sender_dropped() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest).unwrap();
        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.start_session(800.0, 600.0);

        let mut now = 0.0;
        for i in 0..600 {
            engine.tick(now);
            if i % 10 == 0 {
                engine.fire(400.0, 200.0);
            }
            now += 1000.0 / 60.0;
        }

        let snapshot = engine.tick(now);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\""));

        // Best of several runs, so a busy machine does not fail the check.
        let fastest = (0..5)
            .map(|_| {
                let start = Instant::now();
                let _ = serde_json::to_string(&snapshot).unwrap();
                start.elapsed()
            })
            .min()
            .unwrap();
        assert!(
            fastest < TICK_DURATION,
            "Snapshot serialization took {:?}, should fit in one tick",
            fastest
        );
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
