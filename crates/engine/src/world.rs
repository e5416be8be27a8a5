//! Sandbox physics world.
//!
//! A deliberately small rigid-body stand-in: point bodies with gravity, a
//! floor under the board footprint, one-pass sphere separation, radial
//! explosion impulses, and the board trigger volume. It exists so the board
//! core has a live scene to query; collision fidelity is not a goal.
//!
//! Bodies are stored in spawn order and iterated in that order everywhere,
//! which keeps whole-run behavior reproducible for a given seed.

use arrayvec::ArrayVec;

use clusterfall_core::physics::{PhysicsQuery, PhysicsWorld, VolumeEvent};
use clusterfall_types::{
    Piece, PieceId, Vec3, BOARD_HALF_EXTENT, BOARD_TOP, KILL_PLANE_Y, MAX_OVERLAP_HITS,
    PIECE_RADIUS,
};

/// Downward acceleration, units per second squared.
const GRAVITY_Y: f32 = -18.0;

/// Horizontal velocity decay per second (settling drag).
const DRAG_PER_SEC: f32 = 1.5;

/// Fraction of explosion force redirected upward, so resolved clusters
/// scatter visibly instead of only sliding sideways.
const EXPLOSION_UPWARD_BIAS: f32 = 0.35;

#[derive(Debug, Clone)]
struct Body {
    piece: Piece,
    position: Vec3,
    velocity: Vec3,
    /// Has this body entered the board trigger volume?
    inside: bool,
    /// Exit already reported; the body is waiting to be destroyed.
    exit_reported: bool,
}

/// Toy physics world implementing the core's collaborator traits.
#[derive(Debug, Default)]
pub struct SandboxWorld {
    bodies: Vec<Body>,
    events: Vec<VolumeEvent>,
}

impl SandboxWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn contains_body(&self, id: PieceId) -> bool {
        self.bodies.iter().any(|b| b.piece.id == id)
    }

    pub fn velocity(&self, id: PieceId) -> Option<Vec3> {
        self.bodies.iter().find(|b| b.piece.id == id).map(|b| b.velocity)
    }

    /// Is `position` inside the board trigger volume?
    pub fn in_volume(position: Vec3) -> bool {
        position.x.abs() <= BOARD_HALF_EXTENT
            && position.z.abs() <= BOARD_HALF_EXTENT
            && position.y <= BOARD_TOP
            && position.y > KILL_PLANE_Y
    }

    /// Advance the simulation by `dt` seconds and record volume events.
    ///
    /// `step(0.0)` moves nothing but still runs volume detection, which is
    /// how freshly placed bodies announce themselves.
    pub fn step(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let drag = (1.0 - DRAG_PER_SEC * dt).max(0.0);

        for body in &mut self.bodies {
            body.velocity.y += GRAVITY_Y * dt;
            body.velocity.x *= drag;
            body.velocity.z *= drag;
            body.position += body.velocity * dt;

            // The floor exists only under the board footprint; bodies pushed
            // past the edge keep falling and leave through the kill plane.
            let over_board = body.position.x.abs() <= BOARD_HALF_EXTENT
                && body.position.z.abs() <= BOARD_HALF_EXTENT;
            if over_board && body.position.y < PIECE_RADIUS && body.velocity.y <= 0.0 {
                body.position.y = PIECE_RADIUS;
                body.velocity.y = 0.0;
            }
        }

        self.separate_bodies();
        self.detect_volume_transitions();
    }

    /// One relaxation pass pushing overlapping bodies apart so clusters pile
    /// up instead of collapsing into a single point. Pairs are visited in
    /// spawn order.
    fn separate_bodies(&mut self) {
        let min_dist = PIECE_RADIUS * 2.0;
        let min_dist_sq = min_dist * min_dist;

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let delta = self.bodies[j].position - self.bodies[i].position;
                let dist_sq = delta.length_sq();
                if dist_sq >= min_dist_sq {
                    continue;
                }

                let dist = dist_sq.sqrt();
                let push = delta.normalized_or_up() * ((min_dist - dist) * 0.5);
                self.bodies[i].position = self.bodies[i].position - push;
                self.bodies[j].position += push;

                // The upper body of a stacked pair is supported: stop its
                // fall so piles are stable.
                let (lower, upper) = if delta.y >= 0.0 { (i, j) } else { (j, i) };
                if self.bodies[lower].velocity.y == 0.0 && self.bodies[upper].velocity.y < 0.0 {
                    self.bodies[upper].velocity.y = 0.0;
                }
            }
        }
    }

    fn detect_volume_transitions(&mut self) {
        for body in &mut self.bodies {
            if !body.inside {
                if Self::in_volume(body.position) {
                    body.inside = true;
                    self.events.push(VolumeEvent::Entered(body.piece.id));
                }
            }
            // Anything past the kill plane has left the board for good,
            // whether or not it ever entered (a spawn can miss entirely).
            if body.position.y <= KILL_PLANE_Y && !body.exit_reported {
                body.exit_reported = true;
                body.inside = false;
                self.events.push(VolumeEvent::Exited(body.piece.id));
            }
        }
    }
}

impl PhysicsQuery for SandboxWorld {
    fn position(&self, id: PieceId) -> Option<Vec3> {
        self.bodies.iter().find(|b| b.piece.id == id).map(|b| b.position)
    }

    fn piece(&self, id: PieceId) -> Option<Piece> {
        self.bodies.iter().find(|b| b.piece.id == id).map(|b| b.piece)
    }

    fn overlap(&self, center: Vec3, radius: f32) -> ArrayVec<PieceId, MAX_OVERLAP_HITS> {
        let mut hits = ArrayVec::new();
        let radius_sq = radius * radius;
        for body in &self.bodies {
            if body.position.dist_sq(center) <= radius_sq {
                if hits.try_push(body.piece.id).is_err() {
                    // Contact buffer full; geometry makes this unreachable
                    // at the adjacency radius.
                    break;
                }
            }
        }
        hits
    }
}

impl PhysicsWorld for SandboxWorld {
    fn spawn_body(&mut self, piece: Piece, position: Vec3) {
        self.bodies.push(Body {
            piece,
            position,
            velocity: Vec3::ZERO,
            inside: false,
            exit_reported: false,
        });
    }

    fn destroy_body(&mut self, id: PieceId) {
        if let Some(index) = self.bodies.iter().position(|b| b.piece.id == id) {
            self.bodies.remove(index);
        }
    }

    fn destroy_all(&mut self) {
        self.bodies.clear();
        self.events.clear();
    }

    fn apply_explosion(&mut self, center: Vec3, force: f32, radius: f32, affected: &[PieceId]) {
        for body in &mut self.bodies {
            if !affected.contains(&body.piece.id) {
                continue;
            }
            let delta = body.position - center;
            let dist = delta.length();
            if dist >= radius {
                continue;
            }
            let falloff = 1.0 - dist / radius;
            let mut impulse = delta.normalized_or_up() * (force * falloff);
            impulse.y += force * falloff * EXPLOSION_UPWARD_BIAS;
            body.velocity += impulse;
        }
    }

    fn drain_volume_events(&mut self, out: &mut Vec<VolumeEvent>) {
        out.append(&mut self.events);
    }
}
