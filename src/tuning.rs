//! Data-driven game balance
//!
//! Every magic constant of the chase lives here with a documented default.
//! Hosts can override balance from a JSON file named by the
//! `CORRIDOR_CHASE_TUNING` environment variable; tests zero the jitter for
//! deterministic pursuit.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable simulation constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lateral acceleration per tick while a steer key is held
    pub accel: f32,
    /// Lateral velocity decay factor per tick with no steer input
    pub damping: f32,
    /// Forward progress per tick
    pub forward_speed: f32,
    /// Lateral velocity added per unit of accumulated touch drag
    pub touch_sensitivity: f32,
    /// Half the drivable road width
    pub half_road_width: f32,
    /// Margin kept between a vehicle center and the road edge
    pub edge_margin: f32,
    /// Length of the recycled scenery segment
    pub segment_length: f32,
    /// Pursuit smoothing gain per tick
    pub pursuit_gain: f32,
    /// Width of the uniform steering jitter (0 disables jitter)
    pub jitter_scale: f32,
    /// Player collision half extents
    pub player_half_extents: Vec3,
    /// Pursuer collision half extents
    pub pursuer_half_extents: Vec3,
    /// Player spawn position
    pub player_spawn: Vec3,
    /// Pursuer spawn position
    pub pursuer_spawn: Vec3,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            accel: consts::ACCEL,
            damping: consts::DAMPING,
            forward_speed: consts::FORWARD_SPEED,
            touch_sensitivity: consts::TOUCH_SENSITIVITY,
            half_road_width: consts::HALF_ROAD_WIDTH,
            edge_margin: consts::EDGE_MARGIN,
            segment_length: consts::SEGMENT_LENGTH,
            pursuit_gain: consts::PURSUIT_GAIN,
            jitter_scale: consts::JITTER_SCALE,
            player_half_extents: consts::VEHICLE_HALF_EXTENTS,
            pursuer_half_extents: consts::VEHICLE_HALF_EXTENTS,
            player_spawn: consts::PLAYER_SPAWN,
            pursuer_spawn: consts::PURSUER_SPAWN,
        }
    }
}

impl Tuning {
    /// Environment variable naming an optional JSON override file
    const ENV_VAR: &'static str = "CORRIDOR_CHASE_TUNING";

    /// Largest lateral coordinate a vehicle center may reach
    pub fn lane_limit(&self) -> f32 {
        self.half_road_width - self.edge_margin
    }

    /// Player z below this triggers a world wrap
    pub fn wrap_threshold(&self) -> f32 {
        -self.segment_length / 2.0
    }

    /// Disable pursuit jitter (deterministic tests)
    pub fn without_jitter(mut self) -> Self {
        self.jitter_scale = 0.0;
        self
    }

    /// Load tuning overrides from the file named by `CORRIDOR_CHASE_TUNING`,
    /// falling back to defaults on any missing/unreadable/invalid file
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {path}: {e} - using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {path}: {e} - using defaults");
                Self::default()
            }
        }
    }
}
