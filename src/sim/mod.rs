//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per host frame callback, fixed per-tick constants
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, vehicles_collide};
pub use state::{Phase, Player, Prop, PropKind, Pursuer, RecycleField, RngState, Session};
pub use tick::{GameEvent, TickInput, start_session, tick};
