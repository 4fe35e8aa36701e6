//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` when read-only).
//! They hold no state of their own; anything that outlives a tick is owned
//! by the engine and passed in.

pub mod cleanup;
pub mod collision;
pub mod explosion;
pub mod fire_control;
pub mod kinematics;
pub mod outcome;
pub mod snapshot;
pub mod spawner;
