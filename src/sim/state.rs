//! Game state and core simulation types
//!
//! The whole session lives in one aggregate owned by the host loop; nothing
//! here is global or shared.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first start
    Idle,
    /// Active gameplay
    Running,
    /// Simulation suspended, state retained
    Paused,
    /// Crash happened; waiting for restart
    Ended,
}

/// The controlled vehicle
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec3,
    /// Lateral (x) velocity; forward speed is constant and not stored
    pub lateral_vel: f32,
    /// Cleared on crash; gates rendering of both vehicles
    pub alive: bool,
}

impl Player {
    fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_spawn,
            lateral_vel: 0.0,
            alive: true,
        }
    }
}

/// The pursuing adversary
#[derive(Debug, Clone)]
pub struct Pursuer {
    pub pos: Vec3,
}

impl Pursuer {
    fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.pursuer_spawn,
        }
    }
}

/// Decorative prop kinds tiled along the corridor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    Tree,
    House,
    LaneMarker,
}

/// One recyclable scenery entity
#[derive(Debug, Clone)]
pub struct Prop {
    pub pos: Vec3,
    pub kind: PropKind,
}

// Scenery layout over one segment. Cosmetic only, so these are not tunable.
const MARKER_SPACING: f32 = 10.0;
const TREE_SPACING: f32 = 20.0;
const HOUSE_SPACING: f32 = 50.0;
const SHOULDER_OFFSET: f32 = 1.5;
const HOUSE_SETBACK: f32 = 4.0;

/// A fixed set of props tiled over one corridor segment
///
/// Built once per session; never grown, shrunk, or regenerated. The infinite
/// road comes from translating the whole set by the segment length whenever
/// the player crosses the wrap threshold.
#[derive(Debug, Clone)]
pub struct RecycleField {
    props: Vec<Prop>,
    /// Cumulative shift applied since construction
    offset: f32,
}

impl RecycleField {
    /// Lay out props with fixed spacing over `[-segment/2, segment/2)`
    pub fn new(tuning: &Tuning) -> Self {
        let half = tuning.segment_length / 2.0;
        let shoulder = tuning.half_road_width + SHOULDER_OFFSET;
        let mut props = Vec::new();

        let mut z = -half;
        while z < half {
            props.push(Prop {
                pos: Vec3::new(0.0, 0.0, z),
                kind: PropKind::LaneMarker,
            });
            z += MARKER_SPACING;
        }

        let mut z = -half;
        while z < half {
            for side in [-1.0, 1.0] {
                props.push(Prop {
                    pos: Vec3::new(side * shoulder, 0.0, z),
                    kind: PropKind::Tree,
                });
            }
            z += TREE_SPACING;
        }

        let mut z = -half;
        while z < half {
            for side in [-1.0, 1.0] {
                props.push(Prop {
                    pos: Vec3::new(side * (shoulder + HOUSE_SETBACK), 0.0, z),
                    kind: PropKind::House,
                });
            }
            z += HOUSE_SPACING;
        }

        Self { props, offset: 0.0 }
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Translate every prop down the corridor by `dz`. O(n) but triggered at
    /// most once per wrap, never per prop per tick.
    pub fn shift(&mut self, dz: f32) {
        for prop in &mut self.props {
            prop.pos.z += dz;
        }
        self.offset += dz;
    }

    /// Undo all accumulated shifts, repositioning every prop to its original
    /// home. Same entities, same relative spacing.
    pub fn rehome(&mut self) {
        let back = -self.offset;
        if back != 0.0 {
            self.shift(back);
        }
    }
}

/// Seeded RNG wrapper so a session's jitter stream is reproducible
#[derive(Debug, Clone)]
pub struct RngState {
    pub seed: u64,
    rng: Pcg32,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform jitter in `[-scale/2, scale/2)`
    pub fn jitter(&mut self, scale: f32) -> f32 {
        (self.rng.random::<f32>() - 0.5) * scale
    }
}

/// Complete session state, exclusively owned by the host loop
#[derive(Debug, Clone)]
pub struct Session {
    /// Session seed for reproducible pursuit jitter
    pub seed: u64,
    pub rng: RngState,
    pub phase: Phase,
    /// Raw score: exactly the number of ticks spent Running
    pub score: u64,
    pub player: Player,
    pub pursuer: Pursuer,
    pub field: RecycleField,
}

impl Session {
    /// Create an idle session; entities exist but nothing moves until start
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: RngState::new(seed),
            phase: Phase::Idle,
            score: 0,
            player: Player::spawn(tuning),
            pursuer: Pursuer::spawn(tuning),
            field: RecycleField::new(tuning),
        }
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.score / consts::SCORE_DIVISOR
    }

    /// Whether the vehicles should be drawn this frame
    pub fn vehicles_visible(&self) -> bool {
        self.player.alive
    }

    /// Reset entities and score for a (re)start. Phase handling lives in the
    /// tick module; this only rebuilds the world.
    pub(crate) fn reset_entities(&mut self, tuning: &Tuning) {
        self.player = Player::spawn(tuning);
        self.pursuer = Pursuer::spawn(tuning);
        self.field.rehome();
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layout_is_fixed() {
        let tuning = Tuning::default();
        let field = RecycleField::new(&tuning);

        // 500-unit segment: 50 markers, 25 trees per side, 10 houses per side
        let markers = field
            .props()
            .iter()
            .filter(|p| p.kind == PropKind::LaneMarker)
            .count();
        let trees = field
            .props()
            .iter()
            .filter(|p| p.kind == PropKind::Tree)
            .count();
        let houses = field
            .props()
            .iter()
            .filter(|p| p.kind == PropKind::House)
            .count();
        assert_eq!(markers, 50);
        assert_eq!(trees, 50);
        assert_eq!(houses, 20);
        assert_eq!(field.len(), 120);
    }

    #[test]
    fn test_shift_translates_every_prop() {
        let tuning = Tuning::default();
        let mut field = RecycleField::new(&tuning);
        let before: Vec<f32> = field.props().iter().map(|p| p.pos.z).collect();

        let count = field.len();
        field.shift(tuning.segment_length);

        assert_eq!(field.len(), count);
        for (prop, old_z) in field.props().iter().zip(before) {
            assert_eq!(prop.pos.z, old_z + tuning.segment_length);
        }
    }

    #[test]
    fn test_rehome_undoes_shifts() {
        let tuning = Tuning::default();
        let mut field = RecycleField::new(&tuning);
        let before: Vec<f32> = field.props().iter().map(|p| p.pos.z).collect();

        field.shift(tuning.segment_length);
        field.shift(tuning.segment_length);
        field.rehome();

        for (prop, old_z) in field.props().iter().zip(before) {
            assert_eq!(prop.pos.z, old_z);
        }
    }

    #[test]
    fn test_jitter_is_seeded() {
        let mut a = RngState::new(7);
        let mut b = RngState::new(7);
        for _ in 0..32 {
            assert_eq!(a.jitter(0.1), b.jitter(0.1));
        }
    }

    #[test]
    fn test_jitter_bounded() {
        let mut rng = RngState::new(99);
        for _ in 0..1000 {
            let j = rng.jitter(0.1);
            assert!((-0.05..0.05).contains(&j));
        }
    }
}
