//! Engine module - drives the board core against a live world.
//!
//! The board core only consumes collaborator traits; this crate supplies
//! the concrete ones for a playable game:
//!
//! - [`world::SandboxWorld`]: a toy rigid-body scene with gravity, a floor
//!   under the board footprint, explosion impulses and the trigger volume
//! - [`session::Session`]: per-frame wiring of world + controller +
//!   observer, plus the player-action entry point
//!
//! No I/O lives here; frontends render session snapshots and feed it
//! [`clusterfall_types::BoardAction`]s.

pub mod session;
pub mod world;

pub use clusterfall_core as core;
pub use clusterfall_types as types;

pub use session::Session;
pub use world::SandboxWorld;
