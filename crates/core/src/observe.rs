//! Presentation observer - fire-and-forget events out of the board core.
//!
//! Every method has an empty default body: observers implement only what
//! they display, and the core never waits on or reads back from them. The
//! terminal view does not implement this trait (it renders snapshots); the
//! JSON feed does.

use clusterfall_types::{PieceColor, Shape};

use crate::mission::Mission;

/// Consumer of board presentation events.
pub trait BoardObserver {
    /// Active count for `shape` changed (registration or removal).
    fn on_piece_count_changed(&mut self, _shape: Shape, _count: u32) {}

    /// The preview for the next spawn changed.
    fn on_next_preview(&mut self, _shape: Shape, _color: PieceColor) {}

    /// Score changed (match, mission reward, or reset).
    fn on_score_changed(&mut self, _score: u32) {}

    /// A new mission became active.
    fn on_mission_changed(&mut self, _mission: &Mission) {}

    /// Mission countdown moved.
    fn on_mission_time_changed(&mut self, _seconds_left: f32) {}

    /// The board reached its terminal state.
    fn on_game_over(&mut self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl BoardObserver for NullObserver {}
