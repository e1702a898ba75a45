//! Per-frame simulation tick
//!
//! Advances a session by one host frame callback. All state transitions live
//! here; the host loop maps the emitted events onto display/audio side
//! effects, so this module stays free of platform dependencies.

use crate::clamp_to_road;
use crate::tuning::Tuning;

use super::collision::vehicles_collide;
use super::state::{Phase, Session};

/// Input intent for a single tick, drained from the input buffer by the host
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steer left (level)
    pub left: bool,
    /// Steer right (level)
    pub right: bool,
    /// Pause toggle request (edge, one per key press)
    pub pause: bool,
    /// Start/restart request (edge)
    pub start: bool,
    /// Accumulated touch drag since the previous tick
    pub drag_delta: f32,
}

/// Things that happened during a tick that the host must react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Session (re)started; hide the start prompt, begin the engine loop
    Started,
    Paused,
    Resumed,
    /// The world frame wrapped by one segment length
    Wrapped,
    /// The pursuer caught the player; session is over
    Crashed { final_score: u64 },
}

/// Explicit start/restart. Valid only from Idle or Ended; requests in any
/// other phase are silently ignored. Returns whether the session started.
pub fn start_session(session: &mut Session, tuning: &Tuning) -> bool {
    match session.phase {
        Phase::Idle | Phase::Ended => {
            session.reset_entities(tuning);
            session.phase = Phase::Running;
            log::info!("session started (seed {})", session.seed);
            true
        }
        _ => {
            log::debug!("start request ignored while {:?}", session.phase);
            false
        }
    }
}

/// Advance the session by one frame callback.
///
/// Order matters: the player moves and the wrap is evaluated before the
/// pursuer and the collision test read positions. Non-Running frames leave
/// all state untouched (render-only).
pub fn tick(session: &mut Session, input: &TickInput, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    if input.start && start_session(session, tuning) {
        events.push(GameEvent::Started);
        return;
    }

    if input.pause {
        match session.phase {
            Phase::Running => {
                session.phase = Phase::Paused;
                events.push(GameEvent::Paused);
                return;
            }
            Phase::Paused => {
                // Resume and advance this same frame
                session.phase = Phase::Running;
                events.push(GameEvent::Resumed);
            }
            // Pause requests outside Running/Paused are silently ignored
            _ => {}
        }
    }

    if session.phase != Phase::Running {
        return;
    }

    // Player: lateral intent with damping, then constant forward progress
    let player = &mut session.player;
    if input.left {
        player.lateral_vel -= tuning.accel;
    } else if input.right {
        player.lateral_vel += tuning.accel;
    } else {
        player.lateral_vel *= tuning.damping;
    }
    // Touch drag feeds velocity directly, independent of the key step
    player.lateral_vel += input.drag_delta * tuning.touch_sensitivity;

    player.pos.x = clamp_to_road(player.pos.x + player.lateral_vel, tuning.lane_limit());
    player.pos.z -= tuning.forward_speed;

    // World wrap, triggered by the player position alone. One translation of
    // the whole field; props keep identity and relative spacing.
    if player.pos.z < tuning.wrap_threshold() {
        player.pos.z += tuning.segment_length;
        session.field.shift(tuning.segment_length);
        // The pursuer is deliberately left out of the wrap: it tracks the
        // player every tick and re-converges within a few frames, at the
        // cost of a one-tick visual discontinuity.
        events.push(GameEvent::Wrapped);
        log::debug!("world wrapped at tick {}", session.score);
    }

    // Pursuer: first-order smoothing toward the player, with bounded jitter
    // so paths are never perfectly repeatable
    let jitter = session.rng.jitter(tuning.jitter_scale);
    let target = session.player.pos;
    let pursuer = &mut session.pursuer;
    pursuer.pos.x += (target.x - pursuer.pos.x + jitter) * tuning.pursuit_gain;
    pursuer.pos.z += (target.z - pursuer.pos.z) * tuning.pursuit_gain;
    pursuer.pos.x = clamp_to_road(pursuer.pos.x, tuning.lane_limit());

    // Score accrues once per Running tick
    session.score += 1;

    // Discrete per-tick box overlap; a hit is terminal
    if vehicles_collide(session.player.pos, session.pursuer.pos, tuning) {
        session.phase = Phase::Ended;
        session.player.alive = false;
        let final_score = session.display_score();
        events.push(GameEvent::Crashed { final_score });
        log::info!("caught by the pursuer at score {final_score}");
    }
}
