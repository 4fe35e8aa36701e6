//! Control surface over the game loop thread.
//!
//! These functions bridge a caller (the binary, or a future front end) to
//! the loop thread through the shared [`AppState`].

use std::sync::Arc;

use tracing::warn;

use skyguard_core::commands::PlayerCommand;
use skyguard_core::state::GameStateSnapshot;
use skyguard_sim::SimConfig;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), AppError> {
    config.tuning.validate()?;

    let mut tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;
    if tx_lock.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, Arc::clone(&state.latest_snapshot))?;
    *tx_lock = Some(cmd_tx);

    let mut handle_lock = state.loop_handle.lock().map_err(|_| AppError::Poisoned)?;
    *handle_lock = Some(handle);

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::Disconnected),
        None => Err(AppError::NotRunning),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| AppError::Poisoned)?
        .take()
        .ok_or(AppError::NotRunning)?;
    // A loop that already exited has dropped its receiver.
    let _ = tx.send(GameLoopCommand::Shutdown);

    let handle = state.loop_handle.lock().map_err(|_| AppError::Poisoned)?.take();
    if let Some(handle) = handle {
        if handle.join().is_err() {
            warn!("game loop thread panicked");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::config::Tuning;

    #[test]
    fn test_commands_require_running_loop() {
        let state = AppState::new();
        let err = send_command(&state, PlayerCommand::Pause).unwrap_err();
        assert!(matches!(err, AppError::NotRunning));
        assert!(matches!(stop_simulation(&state), Err(AppError::NotRunning)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default()).unwrap();
        let err = start_simulation(&state, SimConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::AlreadyRunning));

        stop_simulation(&state).unwrap();
        // Stopped loops can be started again.
        start_simulation(&state, SimConfig::default()).unwrap();
        stop_simulation(&state).unwrap();
    }

    #[test]
    fn test_invalid_tuning_never_spawns() {
        let state = AppState::new();
        let config = SimConfig {
            seed: 1,
            tuning: Tuning {
                interceptor_speed: 0.0,
                ..Tuning::default()
            },
        };
        let err = start_simulation(&state, config).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(state.command_tx.lock().unwrap().is_none());
    }
}
