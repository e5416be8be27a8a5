//! Board snapshots for rendering and export.
//!
//! A snapshot joins the core's state with live positions read from the
//! physics collaborator. Frontends keep one snapshot and refill it each
//! frame via `snapshot_into` so the piece list allocation is reused.

use clusterfall_types::{Piece, PieceColor, Shape, Vec3};

use crate::board::{BoardController, BoardPhase};
use crate::mission::Mission;
use crate::physics::PhysicsQuery;

/// One piece with its position at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceView {
    pub piece: Piece,
    pub position: Vec3,
}

/// Render/export view of a board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub phase: BoardPhase,
    pub score: u32,
    pub mission: Mission,
    pub time_left: f32,
    pub preview: (Shape, PieceColor),
    pub counts: [u32; Shape::COUNT],
    /// Active pieces in registration order, positions included. Bodies the
    /// world no longer knows (already destroyed) are omitted.
    pub pieces: Vec<PieceView>,
}

impl BoardController {
    /// Refill `out` from the current state, reusing its piece allocation.
    pub fn snapshot_into(&self, world: &impl PhysicsQuery, out: &mut BoardSnapshot) {
        out.phase = self.phase();
        out.score = self.score();
        out.mission = self.mission();
        out.time_left = self.time_left();
        out.preview = self.preview();
        for shape in Shape::ALL {
            out.counts[shape.index()] = self.piece_count(shape);
        }
        out.pieces.clear();
        for piece in self.registry().iter() {
            if let Some(position) = world.position(piece.id) {
                out.pieces.push(PieceView {
                    piece: *piece,
                    position,
                });
            }
        }
    }

    /// Allocate a fresh snapshot of the current state.
    pub fn snapshot(&self, world: &impl PhysicsQuery) -> BoardSnapshot {
        let mut out = BoardSnapshot {
            phase: self.phase(),
            score: self.score(),
            mission: self.mission(),
            time_left: self.time_left(),
            preview: self.preview(),
            counts: [0; Shape::COUNT],
            pieces: Vec::new(),
        };
        self.snapshot_into(world, &mut out);
        out
    }
}
