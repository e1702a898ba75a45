//! Corridor Chase - an endless-corridor driving chase
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, pursuit, collision, game state)
//! - `input`: Keyboard/touch intent buffer, read once per tick
//! - `host`: Renderer/display/audio boundaries and the frame-driving loop
//! - `tuning`: Data-driven game balance

pub mod host;
pub mod input;
pub mod sim;
pub mod tuning;

pub use input::{InputState, Key};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    use glam::Vec3;

    /// Lateral acceleration per tick while a steer key is held
    pub const ACCEL: f32 = 0.02;
    /// Multiplicative lateral velocity decay per tick with no steer input
    pub const DAMPING: f32 = 0.9;
    /// Forward progress per tick (negative z is ahead)
    pub const FORWARD_SPEED: f32 = 0.7;
    /// Lateral velocity added per unit of accumulated touch drag
    pub const TOUCH_SENSITIVITY: f32 = 0.001;

    /// Half the drivable road width
    pub const HALF_ROAD_WIDTH: f32 = 5.0;
    /// Margin kept between a vehicle center and the road edge
    pub const EDGE_MARGIN: f32 = 0.5;
    /// Length of the finite scenery segment that gets recycled
    pub const SEGMENT_LENGTH: f32 = 500.0;

    /// Pursuit smoothing gain per tick
    pub const PURSUIT_GAIN: f32 = 0.04;
    /// Width of the uniform steering jitter applied to the pursuer
    pub const JITTER_SCALE: f32 = 0.1;

    /// Raw score ticks per displayed score point
    pub const SCORE_DIVISOR: u64 = 10;

    /// Vehicle ride height (y of both vehicle centers)
    pub const RIDE_HEIGHT: f32 = 0.5;
    /// Player spawn position
    pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, RIDE_HEIGHT, 0.0);
    /// Pursuer spawn position (offset one lane, 50 units down the corridor)
    pub const PURSUER_SPAWN: Vec3 = Vec3::new(2.0, RIDE_HEIGHT, -50.0);
    /// Collision half extents shared by the real model and the stand-in box
    pub const VEHICLE_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 0.5, 2.0);
}

/// Clamp a lateral coordinate onto the drivable surface
#[inline]
pub fn clamp_to_road(x: f32, lane_limit: f32) -> f32 {
    x.clamp(-lane_limit, lane_limit)
}
