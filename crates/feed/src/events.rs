//! Wire DTOs for the presentation event feed.
//!
//! One JSON object per event, tagged by `event`. Enum-valued fields travel
//! as their lowercase string names so the feed stays readable and stable
//! even if the Rust enums gain variants.

use serde::{Deserialize, Serialize};

use clusterfall_core::mission::Mission;
use clusterfall_types::{PieceColor, Shape};

/// A presentation event as it appears on the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FeedEvent {
    PieceCount {
        shape: String,
        count: u32,
    },
    NextPreview {
        shape: String,
        color: String,
    },
    Score {
        score: u32,
    },
    Mission {
        shape: String,
        color: String,
        required: u32,
        reward: u32,
        duration_secs: f32,
    },
    MissionTime {
        seconds_left: f32,
    },
    GameOver,
}

impl FeedEvent {
    pub fn piece_count(shape: Shape, count: u32) -> Self {
        Self::PieceCount {
            shape: shape.as_str().to_owned(),
            count,
        }
    }

    pub fn next_preview(shape: Shape, color: PieceColor) -> Self {
        Self::NextPreview {
            shape: shape.as_str().to_owned(),
            color: color.as_str().to_owned(),
        }
    }

    pub fn mission(mission: &Mission) -> Self {
        Self::Mission {
            shape: mission.target_shape.as_str().to_owned(),
            color: mission.target_color.as_str().to_owned(),
            required: mission.required_count,
            reward: mission.reward_score,
            duration_secs: mission.duration_secs,
        }
    }
}
