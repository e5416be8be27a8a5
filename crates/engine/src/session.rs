//! Session - the per-frame wiring of world, board and observer.
//!
//! The session owns the sandbox world and the board controller and fixes
//! the per-frame ordering: physics steps first, then pending volume events
//! reach the controller, then the board ticks. Player input arrives as
//! [`BoardAction`]s between frames.

use clusterfall_core::observe::BoardObserver;
use clusterfall_core::physics::VolumeEvent;
use clusterfall_core::rng::{SimpleRng, UniformSource};
use clusterfall_core::snapshot::BoardSnapshot;
use clusterfall_core::BoardController;
use clusterfall_core::PhysicsWorld;
use clusterfall_types::{BoardAction, Vec3, BOARD_HALF_EXTENT, SPAWN_HEIGHT};

use crate::world::SandboxWorld;

/// One running game: sandbox world plus board state machine.
#[derive(Debug)]
pub struct Session {
    world: SandboxWorld,
    board: BoardController,
    /// Spawn-position jitter; separate stream so board randomness (missions,
    /// previews) is not perturbed by how often the player drops pieces.
    jitter: SimpleRng,
    pending_events: Vec<VolumeEvent>,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            world: SandboxWorld::new(),
            board: BoardController::new(seed),
            jitter: SimpleRng::new(seed.rotate_left(16) ^ 0x9e37_79b9),
            pending_events: Vec::new(),
        }
    }

    /// Initialize (or restart) the board.
    pub fn start(&mut self, observer: &mut dyn BoardObserver) {
        self.board.initialize(&mut self.world, observer);
    }

    /// Advance one frame: step physics, deliver volume events, tick the
    /// board.
    pub fn step(&mut self, dt: f32, observer: &mut dyn BoardObserver) {
        self.world.step(dt);

        self.world.drain_volume_events(&mut self.pending_events);
        let Self {
            world,
            board,
            pending_events,
            ..
        } = self;
        for event in pending_events.drain(..) {
            board.handle_volume_event(event, world, observer);
        }

        self.board.tick(dt, &mut self.world, observer);
    }

    /// Apply a player action. Returns whether it had any effect.
    pub fn apply(&mut self, action: BoardAction, observer: &mut dyn BoardObserver) -> bool {
        match action {
            BoardAction::SpawnPiece => {
                let position = self.spawn_position();
                self.board.spawn_next(position, &mut self.world, observer)
            }
            BoardAction::Restart => {
                self.board.initialize(&mut self.world, observer);
                true
            }
        }
    }

    /// Somewhere above the board footprint, never dead center every time.
    fn spawn_position(&mut self) -> Vec3 {
        let span = BOARD_HALF_EXTENT * 2.0 - 1.0;
        let fx = self.jitter.uniform(1000) as f32 / 1000.0;
        let fz = self.jitter.uniform(1000) as f32 / 1000.0;
        Vec3::new(
            fx * span - span * 0.5,
            SPAWN_HEIGHT,
            fz * span - span * 0.5,
        )
    }

    pub fn board(&self) -> &BoardController {
        &self.board
    }

    pub fn world(&self) -> &SandboxWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut SandboxWorld {
        &mut self.world
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot(&self.world)
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        self.board.snapshot_into(&self.world, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clusterfall_core::NullObserver;
    use clusterfall_types::BOARD_TOP;

    #[test]
    fn spawn_positions_stay_above_the_footprint() {
        let mut session = Session::new(7);
        for _ in 0..100 {
            let pos = session.spawn_position();
            assert!(pos.x.abs() < BOARD_HALF_EXTENT);
            assert!(pos.z.abs() < BOARD_HALF_EXTENT);
            assert!(pos.y > BOARD_TOP);
        }
    }

    #[test]
    fn start_enters_active_phase() {
        let mut session = Session::new(1);
        let mut observer = NullObserver;
        session.start(&mut observer);
        assert!(!session.board().is_game_over());
        assert_eq!(session.board().time_left(), 90.0);
    }
}
