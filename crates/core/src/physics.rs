//! Physics collaborator traits.
//!
//! The core never simulates bodies itself; it issues queries and commands
//! against whatever world implements these traits. Positions live with the
//! world and are read back on demand, so the core holds no stale spatial
//! state.

use arrayvec::ArrayVec;

use clusterfall_types::{Piece, PieceId, Vec3, MAX_OVERLAP_HITS};

/// Trigger-volume notifications from the physics world.
///
/// `Entered` drives registration (a spawned body has arrived on the board),
/// `Exited` drives out-of-bounds cleanup (the body fell off for good).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeEvent {
    Entered(PieceId),
    Exited(PieceId),
}

/// Read-only spatial queries.
pub trait PhysicsQuery {
    /// World position of a live body, None for unknown handles.
    fn position(&self, id: PieceId) -> Option<Vec3>;

    /// Resolve a handle back to its piece data (the trigger-enter component
    /// lookup). None for unknown handles.
    fn piece(&self, id: PieceId) -> Option<Piece>;

    /// Handles of all bodies within `radius` of `center`, including bodies
    /// that have not yet entered the board volume.
    ///
    /// Results go into a fixed-capacity contact buffer; `MAX_OVERLAP_HITS`
    /// is sized so that unit-diameter bodies can never fill it at the
    /// adjacency radius.
    fn overlap(&self, center: Vec3, radius: f32) -> ArrayVec<PieceId, MAX_OVERLAP_HITS>;
}

/// Commands the board core issues to the physics world.
pub trait PhysicsWorld: PhysicsQuery {
    /// Instantiate a body for `piece` at `position`.
    fn spawn_body(&mut self, piece: Piece, position: Vec3);

    /// Remove a body. Unknown handles are ignored.
    fn destroy_body(&mut self, id: PieceId);

    /// Remove every body (board teardown).
    fn destroy_all(&mut self);

    /// Radial impulse on the `affected` bodies, falling off linearly to zero
    /// at `radius`. Presentation/physics effect only; match logic never
    /// depends on the outcome.
    fn apply_explosion(&mut self, center: Vec3, force: f32, radius: f32, affected: &[PieceId]);

    /// Move pending trigger-volume events into `out`, oldest first.
    fn drain_volume_events(&mut self, out: &mut Vec<VolumeEvent>);
}
