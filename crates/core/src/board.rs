//! Board controller - the per-board state machine.
//!
//! Owns the registry, score, mission manager, clock and RNG for exactly one
//! board, and orchestrates them once per simulation tick:
//!
//! 1. advance the clock; on expiry flip to `GameOver` and stop,
//! 2. otherwise scan a snapshot of the active pieces for qualifying match
//!    groups and resolve them (explode, unregister, score, mission check).
//!
//! Spawning is decoupled from registration: `spawn_next` only instantiates a
//! physics body above the board, and the piece joins the active set when the
//! physics collaborator later reports it entering the trigger volume. A
//! piece can legitimately stay in flight for many ticks.
//!
//! The phase machine is `Initializing -> Active -> GameOver`; `GameOver` is
//! terminal for this board instance, and only the external restart action
//! (`initialize`) builds fresh state. Mission epochs cycle inside `Active`.

use clusterfall_types::{
    Piece, PieceColor, PieceId, Shape, Vec3, EXPLOSION_FORCE, EXPLOSION_RADIUS,
};

use crate::clock::{BoardClock, ClockTick};
use crate::matcher;
use crate::mission::MissionManager;
use crate::observe::BoardObserver;
use crate::physics::{PhysicsWorld, VolumeEvent};
use crate::registry::PieceRegistry;
use crate::rng::{sample_color, sample_shape, SimpleRng};
use crate::score::ScoreTracker;

/// Lifecycle phase of a board instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    /// Constructed but not yet initialized.
    Initializing,
    /// Normal play; mission epochs cycle within this phase.
    Active,
    /// Mission time ran out. Terminal.
    GameOver,
}

/// State machine for one board.
#[derive(Debug)]
pub struct BoardController {
    phase: BoardPhase,
    registry: PieceRegistry,
    score: ScoreTracker,
    missions: MissionManager,
    clock: BoardClock,
    rng: SimpleRng,
    /// Monotonic handle allocator for spawned pieces.
    next_piece_id: u32,
    /// Shape and color of the next piece, decided before it exists.
    preview: (Shape, PieceColor),
}

impl BoardController {
    /// Build a controller in the `Initializing` phase.
    ///
    /// Nothing is live until [`initialize`](Self::initialize) runs; the
    /// mission and preview rolled here only guarantee the fields are never
    /// absent.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let missions = MissionManager::new(&mut rng);
        let clock = BoardClock::new(missions.current().duration_secs);
        let preview = (sample_shape(&mut rng), sample_color(&mut rng));
        Self {
            phase: BoardPhase::Initializing,
            registry: PieceRegistry::new(),
            score: ScoreTracker::new(),
            missions,
            clock,
            rng,
            next_piece_id: 0,
            preview,
        }
    }

    /// Start (or restart) the board: tear down every tracked body, reset
    /// registry and score, draw the first mission and preview, and enter
    /// `Active`. This is the external "new board" action and the only way
    /// out of `GameOver`.
    pub fn initialize(
        &mut self,
        world: &mut impl PhysicsWorld,
        observer: &mut dyn BoardObserver,
    ) {
        world.destroy_all();
        self.registry.clear();
        for shape in Shape::ALL {
            observer.on_piece_count_changed(shape, 0);
        }

        self.score.reset();
        observer.on_score_changed(self.score.current());

        let mission = self.missions.generate_next(&mut self.rng);
        self.clock.reset(mission.duration_secs);
        observer.on_mission_changed(&mission);
        observer.on_mission_time_changed(self.clock.time_left());

        self.preview = (sample_shape(&mut self.rng), sample_color(&mut self.rng));
        observer.on_next_preview(self.preview.0, self.preview.1);

        self.phase = BoardPhase::Active;
    }

    /// Advance the board by `dt` seconds of mission time and resolve
    /// matches. No-op unless the board is `Active`.
    pub fn tick(
        &mut self,
        dt: f32,
        world: &mut impl PhysicsWorld,
        observer: &mut dyn BoardObserver,
    ) {
        if self.phase != BoardPhase::Active {
            return;
        }

        match self.clock.tick(dt) {
            ClockTick::JustExpired => {
                self.phase = BoardPhase::GameOver;
                observer.on_mission_time_changed(0.0);
                observer.on_game_over();
                // The expiry tick skips the match scan entirely.
                return;
            }
            ClockTick::Running => {
                observer.on_mission_time_changed(self.clock.time_left());
            }
            // Unreachable while Active; the phase flips on JustExpired.
            ClockTick::Expired => return,
        }

        self.resolve_matches(world, observer);
    }

    /// Drop the previewed piece as a physics body at `position` and roll the
    /// next preview. Returns false (and does nothing) unless `Active` - a
    /// spawn request after game over is expected caller sloppiness, not an
    /// error.
    ///
    /// The piece is *not* registered here; registration arrives later as an
    /// `Entered` volume event once the body reaches the board.
    pub fn spawn_next(
        &mut self,
        position: Vec3,
        world: &mut impl PhysicsWorld,
        observer: &mut dyn BoardObserver,
    ) -> bool {
        if self.phase != BoardPhase::Active {
            return false;
        }

        let (shape, color) = self.preview;
        self.next_piece_id += 1;
        let piece = Piece::new(PieceId(self.next_piece_id), shape, color);
        world.spawn_body(piece, position);

        self.preview = (sample_shape(&mut self.rng), sample_color(&mut self.rng));
        observer.on_next_preview(self.preview.0, self.preview.1);
        true
    }

    /// Feed one trigger-volume notification from the physics collaborator.
    ///
    /// `Entered` resolves the handle back to its piece data through the
    /// world and registers it; events for unknown handles are collaborator
    /// noise and are ignored. No piece joins the board after game over.
    /// `Exited` is out-of-bounds cleanup and works in any phase.
    pub fn handle_volume_event(
        &mut self,
        event: VolumeEvent,
        world: &mut impl PhysicsWorld,
        observer: &mut dyn BoardObserver,
    ) {
        match event {
            VolumeEvent::Entered(id) => {
                if self.phase != BoardPhase::Active {
                    return;
                }
                let Some(piece) = world.piece(id) else {
                    return;
                };
                if self.registry.register(piece) {
                    observer.on_piece_count_changed(
                        piece.shape,
                        self.registry.count_by_shape(piece.shape),
                    );
                }
            }
            VolumeEvent::Exited(id) => self.remove(id, world, observer),
        }
    }

    /// Remove a piece that left the board: unregister without scoring or
    /// exploding, and destroy its body. Idempotent.
    pub fn remove(
        &mut self,
        id: PieceId,
        world: &mut impl PhysicsWorld,
        observer: &mut dyn BoardObserver,
    ) {
        if let Some(piece) = self.registry.unregister(id) {
            observer.on_piece_count_changed(
                piece.shape,
                self.registry.count_by_shape(piece.shape),
            );
        }
        world.destroy_body(id);
    }

    /// One match-resolution pass over a snapshot of the active set.
    ///
    /// The snapshot is taken once so the scan order is fixed even though the
    /// registry shrinks mid-loop; pieces consumed by an earlier group in the
    /// same tick are skipped via the registry-presence check.
    fn resolve_matches(
        &mut self,
        world: &mut impl PhysicsWorld,
        observer: &mut dyn BoardObserver,
    ) {
        let snapshot = self.registry.snapshot();
        for seed in snapshot {
            if !self.registry.contains(seed.id) {
                continue;
            }

            let group = matcher::find_group(seed, &self.registry, world);
            if !matcher::qualifies(group.len()) {
                continue;
            }

            // Impulse first, centered on the match location, while the
            // bodies still exist. Everything nearby is shoved, so surviving
            // neighbors scatter when the group vanishes.
            if let Some(center) = world.position(seed.id) {
                let nearby = world.overlap(center, EXPLOSION_RADIUS);
                world.apply_explosion(center, EXPLOSION_FORCE, EXPLOSION_RADIUS, &nearby);
            }
            for &id in &group {
                self.registry.unregister(id);
                world.destroy_body(id);
            }
            observer.on_piece_count_changed(
                seed.shape,
                self.registry.count_by_shape(seed.shape),
            );

            self.score.add(group.len() as u32);
            observer.on_score_changed(self.score.current());

            if self.missions.evaluate(seed.color, seed.shape, group.len() as u32) {
                self.complete_mission(observer);
            }
        }
    }

    /// Mission completed: award the reward, replace the objective, restart
    /// the countdown. There is no grace period between missions.
    fn complete_mission(&mut self, observer: &mut dyn BoardObserver) {
        let reward = self.missions.current().reward_score;
        self.score.add(reward);
        observer.on_score_changed(self.score.current());

        let mission = self.missions.generate_next(&mut self.rng);
        self.clock.reset(mission.duration_secs);
        observer.on_mission_changed(&mission);
        observer.on_mission_time_changed(self.clock.time_left());
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == BoardPhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score.current()
    }

    pub fn mission(&self) -> crate::mission::Mission {
        self.missions.current()
    }

    pub fn time_left(&self) -> f32 {
        self.clock.time_left()
    }

    /// Shape and color the next spawn will use.
    pub fn preview(&self) -> (Shape, PieceColor) {
        self.preview
    }

    pub fn registry(&self) -> &PieceRegistry {
        &self.registry
    }

    pub fn piece_count(&self, shape: Shape) -> u32 {
        self.registry.count_by_shape(shape)
    }
}
