//! Board core - pure, deterministic, and testable
//!
//! This crate contains the board state machine: piece lifecycle tracking,
//! connected-component match detection over a live physics scene, scoring,
//! and the mission/timer/game-over loop. It performs no I/O and owns no
//! simulation; physics, randomness and presentation are collaborator traits
//! the caller supplies.
//!
//! # Module Structure
//!
//! - [`registry`]: the set of pieces currently active on the board
//! - [`matcher`]: flood-fill match discovery over spatial adjacency
//! - [`score`]: monotonic score accumulator
//! - [`mission`]: the timed objective, an immutable value replaced wholesale
//! - [`clock`]: mission countdown with one-shot expiry
//! - [`board`]: the `BoardController` orchestrating everything per tick
//! - [`physics`]: collaborator traits for the world, plus volume events
//! - [`observe`]: fire-and-forget presentation events
//! - [`rng`]: the randomness collaborator and the default seeded LCG
//! - [`snapshot`]: render/export views of a live board
//!
//! # Determinism
//!
//! A board run is a pure function of its seed, the tick sequence, and the
//! physics world's behavior: the clock advances before match resolution,
//! match resolution scans pieces in registration order, and all randomness
//! flows through [`rng::UniformSource`].
//!
//! # Example
//!
//! ```
//! use clusterfall_core::{BoardClock, ClockTick};
//!
//! let mut clock = BoardClock::new(2.0);
//! assert_eq!(clock.tick(1.0), ClockTick::Running);
//! assert_eq!(clock.tick(1.0), ClockTick::JustExpired);
//! assert_eq!(clock.tick(1.0), ClockTick::Expired);
//! ```

pub mod board;
pub mod clock;
pub mod matcher;
pub mod mission;
pub mod observe;
pub mod physics;
pub mod registry;
pub mod rng;
pub mod score;
pub mod snapshot;

pub use clusterfall_types as types;

// Re-export commonly used types for convenience
pub use board::{BoardController, BoardPhase};
pub use clock::{BoardClock, ClockTick};
pub use matcher::{find_group, qualifies};
pub use mission::{Mission, MissionManager};
pub use observe::{BoardObserver, NullObserver};
pub use physics::{PhysicsQuery, PhysicsWorld, VolumeEvent};
pub use registry::PieceRegistry;
pub use rng::{sample_color, sample_shape, SimpleRng, UniformSource};
pub use score::ScoreTracker;
pub use snapshot::{BoardSnapshot, PieceView};
