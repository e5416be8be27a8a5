//! Terminal input module.
//!
//! Maps `crossterm` key events into [`clusterfall_types::BoardAction`].
//! Spawning is a discrete keypress, not a held movement key, so there is no
//! auto-repeat handling here.

pub mod map;

pub use clusterfall_types as types;

pub use map::{handle_key_event, should_quit};
