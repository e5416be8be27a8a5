//! Piece registry - the set of pieces currently active on the board.
//!
//! Backing storage is an insertion-ordered Vec: per-tick scans must walk
//! pieces in a stable order for the tick to be deterministic, and a board
//! holds tens of pieces, so linear membership checks are cheaper than
//! hashing here. Per-shape counts are maintained incrementally.
//!
//! Registration and removal are idempotent; the return value reports whether
//! anything actually changed.

use clusterfall_types::{Piece, PieceId, Shape};

/// The set of active board pieces.
#[derive(Debug, Clone, Default)]
pub struct PieceRegistry {
    pieces: Vec<Piece>,
    counts: [u32; Shape::COUNT],
}

impl PieceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a piece to the active set.
    ///
    /// Returns true iff the piece was newly added; re-registering an already
    /// active handle is a no-op reported as false.
    pub fn register(&mut self, piece: Piece) -> bool {
        if self.contains(piece.id) {
            return false;
        }
        self.counts[piece.shape.index()] += 1;
        self.pieces.push(piece);
        true
    }

    /// Remove a piece from the active set.
    ///
    /// Returns the removed piece iff it was present; removing an unknown
    /// handle is a no-op reported as None. Registration order of the
    /// remaining pieces is preserved.
    pub fn unregister(&mut self, id: PieceId) -> Option<Piece> {
        let index = self.pieces.iter().position(|p| p.id == id)?;
        let piece = self.pieces.remove(index);
        self.counts[piece.shape.index()] -= 1;
        Some(piece)
    }

    pub fn get(&self, id: PieceId) -> Option<Piece> {
        self.pieces.iter().find(|p| p.id == id).copied()
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.iter().any(|p| p.id == id)
    }

    pub fn count_by_shape(&self, shape: Shape) -> u32 {
        self.counts[shape.index()]
    }

    pub fn total(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Active pieces in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Copy of the active set in registration order.
    ///
    /// Match resolution iterates a snapshot while unregistering members, so
    /// the copy is the contract, not an optimization opportunity.
    pub fn snapshot(&self) -> Vec<Piece> {
        self.pieces.clone()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
        self.counts = [0; Shape::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clusterfall_types::PieceColor;

    fn piece(id: u32, shape: Shape) -> Piece {
        Piece::new(PieceId(id), shape, PieceColor::Red)
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = PieceRegistry::new();
        assert!(registry.register(piece(1, Shape::Cube)));
        assert!(!registry.register(piece(1, Shape::Cube)));
        assert_eq!(registry.total(), 1);
        assert_eq!(registry.count_by_shape(Shape::Cube), 1);
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut registry = PieceRegistry::new();
        registry.register(piece(1, Shape::Sphere));
        assert!(registry.unregister(PieceId(1)).is_some());
        assert!(registry.unregister(PieceId(1)).is_none());
        assert_eq!(registry.total(), 0);
        assert_eq!(registry.count_by_shape(Shape::Sphere), 0);
    }

    #[test]
    fn counts_track_per_shape() {
        let mut registry = PieceRegistry::new();
        registry.register(piece(1, Shape::Cube));
        registry.register(piece(2, Shape::Cube));
        registry.register(piece(3, Shape::Capsule));
        assert_eq!(registry.count_by_shape(Shape::Cube), 2);
        assert_eq!(registry.count_by_shape(Shape::Capsule), 1);
        assert_eq!(registry.count_by_shape(Shape::Cylinder), 0);

        registry.unregister(PieceId(2));
        assert_eq!(registry.count_by_shape(Shape::Cube), 1);
    }

    #[test]
    fn snapshot_is_a_copy_in_registration_order() {
        let mut registry = PieceRegistry::new();
        registry.register(piece(3, Shape::Cube));
        registry.register(piece(1, Shape::Sphere));
        registry.register(piece(2, Shape::Capsule));

        let snapshot = registry.snapshot();
        assert_eq!(
            snapshot.iter().map(|p| p.id.0).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );

        // Mutating the registry does not touch the snapshot.
        registry.unregister(PieceId(1));
        assert_eq!(snapshot.len(), 3);
        assert_eq!(registry.total(), 2);
    }

    #[test]
    fn clear_resets_counts() {
        let mut registry = PieceRegistry::new();
        registry.register(piece(1, Shape::Cube));
        registry.register(piece(2, Shape::Sphere));
        registry.clear();
        assert!(registry.is_empty());
        for shape in Shape::ALL {
            assert_eq!(registry.count_by_shape(shape), 0);
        }
    }
}
