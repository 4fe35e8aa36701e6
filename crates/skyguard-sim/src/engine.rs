//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use skyguard_core::commands::PlayerCommand;
use skyguard_core::config::{ConfigError, Tuning};
use skyguard_core::enums::GamePhase;
use skyguard_core::events::GameEvent;
use skyguard_core::state::GameStateSnapshot;
use skyguard_core::types::{Position, SimTime, Viewport};

use crate::rng::RandomSource;
use crate::systems;
use crate::systems::collision::Detonation;
use crate::systems::spawner::SpawnClock;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine<R: RandomSource = ChaCha8Rng> {
    world: World,
    time: SimTime,
    phase: GamePhase,
    viewport: Viewport,
    score: u32,
    tuning: Tuning,
    rng: R,
    spawn_clock: SpawnClock,
    /// Timestamp of the tick that paused the session.
    paused_at_ms: Option<f64>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    detonations: Vec<Detonation>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// An invalid tuning is replaced by the defaults; use
    /// [`SimulationEngine::try_new`] to get the error instead.
    pub fn new(config: SimConfig) -> Self {
        Self::with_rng(config.tuning, ChaCha8Rng::seed_from_u64(config.seed))
    }

    /// Like [`SimulationEngine::new`], but rejects an invalid tuning.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.tuning.validate()?;
        Ok(Self::new(config))
    }
}

impl<R: RandomSource> SimulationEngine<R> {
    /// Create an engine drawing randomness from `rng`.
    ///
    /// An invalid tuning is replaced by the defaults.
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(err) => {
                warn!(%err, "invalid tuning, falling back to defaults");
                Tuning::default()
            }
        };

        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            viewport: Viewport::default(),
            score: 0,
            tuning,
            rng,
            spawn_clock: SpawnClock::default(),
            paused_at_ms: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            detonations: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Discard every entity and lay out a fresh playfield.
    ///
    /// Score, ammo, spawn pacing and pending events are reset. An invalid
    /// viewport leaves the current session untouched.
    pub fn start_session(&mut self, width: f64, height: f64) {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            warn!(width, height, "ignoring session start with invalid viewport");
            return;
        }

        self.world.clear();
        world_setup::setup_session(&mut self.world, viewport, &self.tuning);

        self.viewport = viewport;
        self.time = SimTime::default();
        self.score = 0;
        self.spawn_clock = SpawnClock::default();
        self.paused_at_ms = None;
        self.detonations.clear();
        self.events.clear();
        self.events.push(GameEvent::SessionStarted { width, height });
        self.phase = GamePhase::Active;

        info!(width, height, "session started");
    }

    /// Fire a volley toward a playfield coordinate.
    ///
    /// Returns whether interceptors were launched. Outside an active session
    /// this is a no-op.
    pub fn fire(&mut self, x: f64, y: f64) -> bool {
        if self.phase != GamePhase::Active {
            debug!(x, y, phase = ?self.phase, "fire ignored outside active session");
            return false;
        }
        systems::fire_control::fire(
            &mut self.world,
            &self.tuning,
            self.viewport,
            Position::new(x, y),
            &mut self.events,
        )
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `now_ms` is the driver's clock in milliseconds; only differences
    /// between successive values matter.
    pub fn tick(&mut self, now_ms: f64) -> GameStateSnapshot {
        self.process_commands(now_ms);

        if self.phase == GamePhase::Active {
            self.run_systems(now_ms);
            self.time.advance(now_ms);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.viewport,
            self.score,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current playfield dimensions.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Get the active tuning.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for staging test scenarios).
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Overwrite the score (for staging test scenarios).
    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Process all queued commands.
    fn process_commands(&mut self, now_ms: f64) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, now_ms);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand, now_ms: f64) {
        match command {
            PlayerCommand::StartSession { width, height } => {
                self.start_session(width, height);
            }
            PlayerCommand::Fire { x, y } => {
                self.fire(x, y);
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    self.paused_at_ms = Some(now_ms);
                    debug!(now_ms, "session paused");
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    if let Some(paused_at) = self.paused_at_ms.take() {
                        self.spawn_clock.shift(now_ms - paused_at);
                    }
                    self.phase = GamePhase::Active;
                    debug!(now_ms, "session resumed");
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, now_ms: f64) {
        // 1. Spawn scheduling
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_clock,
            &self.tuning,
            self.viewport,
            self.score,
            now_ms,
            &mut self.events,
        );
        // 2. Kinematics
        systems::kinematics::run(&mut self.world, self.tuning.arrival_threshold);
        // 3. Arrivals (impacts, interceptor detonations)
        systems::collision::run(&mut self.world, &mut self.detonations, &mut self.events);
        // 4. Explosion lifecycle and blast kills
        systems::explosion::run(
            &mut self.world,
            &mut self.detonations,
            &self.tuning,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 5. Store pruning
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Outcome
        if let Some(outcome) = systems::outcome::evaluate(&self.world, self.score, self.tuning.win_score)
        {
            self.phase = outcome;
            let score = self.score;
            match outcome {
                GamePhase::Won => {
                    info!(score, "session won");
                    self.events.push(GameEvent::Victory { score });
                }
                _ => {
                    info!(score, "session lost");
                    self.events.push(GameEvent::Defeat { score });
                }
            }
        }
    }
}
