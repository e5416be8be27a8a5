//! Event feed module - line-delimited JSON out of the board core.
//!
//! The board core emits presentation events through
//! [`clusterfall_core::observe::BoardObserver`]; this crate serializes them
//! as one JSON object per line for headless runs and external tooling. The
//! sink is any `io::Write` - a file next to the terminal game, or stdout in
//! headless mode.

pub mod events;
pub mod writer;

pub use clusterfall_core as core;
pub use clusterfall_types as types;

pub use events::FeedEvent;
pub use writer::JsonFeed;
