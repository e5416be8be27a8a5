//! Mission module - the timed objective.
//!
//! A mission is an immutable value, replaced wholesale on generation; there
//! is no partial update path, which keeps generate / evaluate / complete as
//! atomic transitions. The targets come from the closed shape/color sets, so
//! a mission without a concrete target is unrepresentable.
//!
//! Completing a mission is the controller's job (award, regenerate, reset
//! the clock); the manager only holds the current value and answers
//! `evaluate`.

use clusterfall_types::{
    PieceColor, Shape, MISSION_DURATION_SECS, MISSION_REQUIRED_COUNT, MISSION_REWARD_SCORE,
};

use crate::rng::{sample_color, sample_shape, UniformSource};

/// The current scored objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mission {
    pub target_shape: Shape,
    pub target_color: PieceColor,
    pub required_count: u32,
    pub reward_score: u32,
    pub duration_secs: f32,
}

impl Mission {
    /// Draw a fresh mission: targets uniform and independent, the other
    /// parameters fixed.
    pub fn roll(rng: &mut dyn UniformSource) -> Self {
        Self {
            target_shape: sample_shape(rng),
            target_color: sample_color(rng),
            required_count: MISSION_REQUIRED_COUNT,
            reward_score: MISSION_REWARD_SCORE,
            duration_secs: MISSION_DURATION_SECS,
        }
    }

    /// Objective as display text, e.g. `match 3 red cubes`.
    pub fn describe(&self) -> String {
        format!(
            "match {} {} {}s",
            self.required_count,
            self.target_color.as_str(),
            self.target_shape.as_str()
        )
    }
}

/// Holds the active mission. Never empty once constructed.
#[derive(Debug, Clone)]
pub struct MissionManager {
    current: Mission,
}

impl MissionManager {
    pub fn new(rng: &mut dyn UniformSource) -> Self {
        Self {
            current: Mission::roll(rng),
        }
    }

    pub fn current(&self) -> Mission {
        self.current
    }

    /// Replace the active mission with a freshly drawn one and return it.
    ///
    /// The new mission may coincidentally equal the old one; draws are
    /// independent.
    pub fn generate_next(&mut self, rng: &mut dyn UniformSource) -> Mission {
        self.current = Mission::roll(rng);
        self.current
    }

    /// Does a resolved group of `matched_count` pieces of this color and
    /// shape complete the active mission?
    pub fn evaluate(&self, color: PieceColor, shape: Shape, matched_count: u32) -> bool {
        color == self.current.target_color
            && shape == self.current.target_shape
            && matched_count >= self.current.required_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn rolled_missions_carry_fixed_parameters() {
        let mut rng = SimpleRng::new(1);
        for _ in 0..50 {
            let mission = Mission::roll(&mut rng);
            assert_eq!(mission.required_count, 3);
            assert_eq!(mission.reward_score, 30);
            assert_eq!(mission.duration_secs, 90.0);
        }
    }

    #[test]
    fn evaluate_requires_exact_targets_and_count() {
        let mut rng = SimpleRng::new(1);
        let missions = MissionManager::new(&mut rng);
        let mission = missions.current();
        let other_shape = *Shape::ALL
            .iter()
            .find(|s| **s != mission.target_shape)
            .unwrap();
        let other_color = *PieceColor::ALL
            .iter()
            .find(|c| **c != mission.target_color)
            .unwrap();

        assert!(missions.evaluate(mission.target_color, mission.target_shape, 3));
        assert!(missions.evaluate(mission.target_color, mission.target_shape, 5));
        assert!(!missions.evaluate(mission.target_color, mission.target_shape, 2));
        assert!(!missions.evaluate(other_color, mission.target_shape, 3));
        assert!(!missions.evaluate(mission.target_color, other_shape, 3));
    }

    #[test]
    fn generate_next_replaces_wholesale() {
        let mut rng = SimpleRng::new(42);
        let mut missions = MissionManager::new(&mut rng);
        let first = missions.current();
        // Draws are independent, so individual rolls may repeat; across many
        // rolls the target must change at least once.
        let mut changed = false;
        for _ in 0..64 {
            let next = missions.generate_next(&mut rng);
            assert_eq!(missions.current(), next);
            if next != first {
                changed = true;
            }
        }
        assert!(changed);
    }

    #[test]
    fn describe_is_human_readable() {
        let mission = Mission {
            target_shape: Shape::Cube,
            target_color: PieceColor::Red,
            required_count: 3,
            reward_score: 30,
            duration_secs: 90.0,
        };
        assert_eq!(mission.describe(), "match 3 red cubes");
    }
}
