//! Core types and definitions for the SKYGUARD simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, snapshots, events, constants and tuning.
//! It has no dependency on the engine or on any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
