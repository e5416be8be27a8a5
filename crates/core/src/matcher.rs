//! Match finder - connected-component discovery over spatial adjacency.
//!
//! Adjacency is not a stored graph: edges are discovered live by asking the
//! physics collaborator which bodies sit within the adjacency radius of the
//! piece being expanded. Nearby bodies can form cycles (A near B near C near
//! A), so the visited set is the termination guarantee, not bookkeeping.
//!
//! The traversal is iterative with an explicit stack; cluster size is
//! unbounded and must not be limited by recursion depth.

use std::collections::HashSet;

use clusterfall_types::{Piece, PieceId, ADJACENCY_RADIUS, MIN_MATCH_COUNT};

use crate::physics::PhysicsQuery;
use crate::registry::PieceRegistry;

/// Collect the full connected component of registered pieces sharing the
/// seed's shape and color, the seed included.
///
/// Overlap hits that are not registered (in-flight bodies, handles already
/// consumed this tick) are skipped, as are hits differing in shape or color.
/// The result set does not depend on the order in which the physics
/// collaborator reports neighbors.
pub fn find_group(
    seed: Piece,
    registry: &PieceRegistry,
    physics: &impl PhysicsQuery,
) -> Vec<PieceId> {
    let mut visited: HashSet<PieceId> = HashSet::new();
    visited.insert(seed.id);

    let mut stack = vec![seed.id];
    let mut group = Vec::new();

    while let Some(id) = stack.pop() {
        group.push(id);

        let Some(center) = physics.position(id) else {
            continue;
        };
        for hit in physics.overlap(center, ADJACENCY_RADIUS) {
            if visited.contains(&hit) {
                continue;
            }
            let Some(neighbor) = registry.get(hit) else {
                continue;
            };
            if neighbor.shape == seed.shape && neighbor.color == seed.color {
                visited.insert(hit);
                stack.push(hit);
            }
        }
    }

    group
}

/// Whether a group of this size resolves as a match.
///
/// Size-1 and size-2 groups stay on the board.
pub fn qualifies(group_len: usize) -> bool {
    group_len >= MIN_MATCH_COUNT
}
