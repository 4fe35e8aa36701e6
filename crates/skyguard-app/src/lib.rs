//! SKYGUARD headless driver.
//!
//! Runs the simulation engine on a fixed-rate thread, exposes a small
//! control surface over it, and ships an automatic operator for playing
//! sessions without a front end.

pub mod config;
pub mod control;
pub mod error;
pub mod game_loop;
pub mod operator;
pub mod state;

pub use error::AppError;
pub use skyguard_core as core;
