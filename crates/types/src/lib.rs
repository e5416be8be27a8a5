//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (board core, sandbox physics, terminal view,
//! event feed).
//!
//! # Board Geometry
//!
//! The board is a square platform centered on the world origin. Pieces are
//! unit-diameter bodies dropped from above:
//!
//! - **Footprint**: `±BOARD_HALF_EXTENT` on the X and Z axes
//! - **Trigger volume**: the footprint up to `BOARD_TOP`; a piece becomes an
//!   active board piece only once its body enters this volume
//! - **Spawn height**: `SPAWN_HEIGHT`, above the volume so registration is
//!   always asynchronous to the spawn call
//! - **Kill plane**: `KILL_PLANE_Y`; bodies falling past it have left the
//!   board for good and are cleaned up
//!
//! # Match and Mission Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ADJACENCY_RADIUS` | 1.1 | Spatial distance treated as "touching" |
//! | `MIN_MATCH_COUNT` | 3 | Smallest group that resolves as a match |
//! | `MISSION_REQUIRED_COUNT` | 3 | Matched pieces a mission demands |
//! | `MISSION_REWARD_SCORE` | 30 | Score awarded on mission completion |
//! | `MISSION_DURATION_SECS` | 90.0 | Time budget per mission |
//! | `EXPLOSION_FORCE` | 9.0 | Impulse magnitude when a group resolves |
//! | `EXPLOSION_RADIUS` | 2.5 | Impulse falloff radius |
//!
//! # Timing
//!
//! The game loop runs on a fixed timestep of `TICK_MS` milliseconds
//! (~60 FPS). The board core itself is tick-driven and takes elapsed seconds.
//!
//! # Examples
//!
//! ```
//! use clusterfall_types::{PieceColor, Shape};
//!
//! let shape = Shape::Cube;
//! assert_eq!(Shape::from_str("cube"), Some(shape));
//! assert_eq!(shape.as_str(), "cube");
//!
//! assert_eq!(PieceColor::from_str("Red"), Some(PieceColor::Red));
//! assert_eq!(Shape::ALL.len(), Shape::COUNT);
//! ```

/// Half extent of the board footprint on the X and Z axes.
pub const BOARD_HALF_EXTENT: f32 = 4.0;

/// Top of the board trigger volume. Bodies above it are "in flight".
pub const BOARD_TOP: f32 = 12.0;

/// Height at which new pieces are instantiated (above the trigger volume).
pub const SPAWN_HEIGHT: f32 = 14.0;

/// Bodies falling below this height have left the board and are destroyed.
pub const KILL_PLANE_Y: f32 = -3.0;

/// Radius of a piece body (unit diameter).
pub const PIECE_RADIUS: f32 = 0.5;

/// Spatial distance within which two pieces count as graph neighbors.
pub const ADJACENCY_RADIUS: f32 = 1.1;

/// Smallest connected group that resolves as a match.
pub const MIN_MATCH_COUNT: usize = 3;

/// Matched pieces a mission demands.
pub const MISSION_REQUIRED_COUNT: u32 = 3;

/// Score awarded when the active mission completes.
pub const MISSION_REWARD_SCORE: u32 = 30;

/// Time budget for a mission, in seconds.
pub const MISSION_DURATION_SECS: f32 = 90.0;

/// Impulse magnitude applied to matched bodies when a group resolves.
pub const EXPLOSION_FORCE: f32 = 9.0;

/// Falloff radius of the resolution impulse.
pub const EXPLOSION_RADIUS: f32 = 2.5;

/// Capacity of the overlap-query contact buffer.
///
/// Overlap queries write into a fixed-size buffer instead of allocating.
/// With unit-diameter bodies and the adjacency radius above, the number of
/// bodies that can physically crowd one query sphere is far below this cap.
pub const MAX_OVERLAP_HITS: usize = 32;

/// Fixed timestep interval in milliseconds (16ms ~= 60 FPS).
pub const TICK_MS: u32 = 16;

/// The four piece shapes.
///
/// Shape and color together decide match compatibility: only pieces agreeing
/// on both can ever belong to the same group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Cube,
    Cylinder,
    Capsule,
    Sphere,
}

impl Shape {
    /// Number of shape variants.
    pub const COUNT: usize = 4;

    /// All shapes, in index order.
    pub const ALL: [Self; Self::COUNT] = [Self::Cube, Self::Cylinder, Self::Capsule, Self::Sphere];

    /// Stable index into `ALL` (used for per-shape count arrays).
    pub const fn index(self) -> usize {
        match self {
            Shape::Cube => 0,
            Shape::Cylinder => 1,
            Shape::Capsule => 2,
            Shape::Sphere => 3,
        }
    }

    /// Parse shape from string (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use clusterfall_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("cube"), Some(Shape::Cube));
    /// assert_eq!(Shape::from_str("SPHERE"), Some(Shape::Sphere));
    /// assert_eq!(Shape::from_str("prism"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cube" => Some(Shape::Cube),
            "cylinder" => Some(Shape::Cylinder),
            "capsule" => Some(Shape::Capsule),
            "sphere" => Some(Shape::Sphere),
            _ => None,
        }
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Cube => "cube",
            Shape::Cylinder => "cylinder",
            Shape::Capsule => "capsule",
            Shape::Sphere => "sphere",
        }
    }
}

/// The three piece colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Red,
    Green,
    Blue,
}

impl PieceColor {
    /// Number of color variants.
    pub const COUNT: usize = 3;

    /// All colors, in index order.
    pub const ALL: [Self; Self::COUNT] = [Self::Red, Self::Green, Self::Blue];

    /// Stable index into `ALL`.
    pub const fn index(self) -> usize {
        match self {
            PieceColor::Red => 0,
            PieceColor::Green => 1,
            PieceColor::Blue => 2,
        }
    }

    /// Parse color from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(PieceColor::Red),
            "green" => Some(PieceColor::Green),
            "blue" => Some(PieceColor::Blue),
            _ => None,
        }
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Red => "red",
            PieceColor::Green => "green",
            PieceColor::Blue => "blue",
        }
    }
}

/// Stable handle identifying a piece body across the core and the physics
/// collaborator. Allocated monotonically per board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece as the board core sees it: identity plus match attributes.
///
/// World position deliberately lives with the physics collaborator and is
/// read back through queries; the core never caches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub shape: Shape,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(id: PieceId, shape: Shape, color: PieceColor) -> Self {
        Self { id, shape, color }
    }
}

/// Minimal 3D vector for positions, velocities and impulses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    pub fn dist_sq(self, other: Self) -> f32 {
        (self - other).length_sq()
    }

    /// Unit vector in the same direction, or `UP` for a near-zero vector
    /// (degenerate explosion centers push straight up).
    pub fn normalized_or_up(self) -> Self {
        let len = self.length();
        if len > 1e-6 {
            self * (1.0 / len)
        } else {
            Self::UP
        }
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Player-triggered board actions.
///
/// These are produced by the input layer and applied through the engine
/// session. Per-tick simulation is not an action; it runs unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Drop the previewed piece onto the board.
    SpawnPiece,
    /// Tear the board down and start a fresh one.
    Restart,
}
