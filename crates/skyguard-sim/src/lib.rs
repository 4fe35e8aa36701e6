//! Simulation engine for SKYGUARD.
//!
//! Owns the hecs world holding every installation, enemy, interceptor and
//! explosion, runs the systems once per tick in a fixed order, and produces
//! `GameStateSnapshot`s for the presentation layer.

pub mod engine;
pub mod rng;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use rng::RandomSource;
pub use skyguard_core as core;
