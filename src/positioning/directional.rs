//! Directional tuple generation
//!
//! For every base adjustment the engine needs four candidate (dx, dy)
//! offsets, one per quadrant, produced by rotating the base offset
//! through the quarter-turn family appropriate to the motion's grid mode
//! and handedness. The transform table is injected so tests can exercise
//! the empty-table failure path; `new()` installs the default family.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::errors::PositioningError;
use crate::models::motion::{GridMode, MotionData, MotionType, RotationDirection};

/// 2x2 integer transform applied to the rounded base offset:
/// `(x, y) -> (a*x + b*y, c*x + d*y)` with rows `[a, b]`, `[c, d]`.
pub type Transform = [[i32; 2]; 2];

type TupleKey = (GridMode, bool, RotationDirection);

/// Quarter-turn rotations, clockwise in y-down screen coordinates:
/// identity, 90, 180, 270 degrees.
const ROTATIONS_CW: [Transform; 4] = [
    [[1, 0], [0, 1]],
    [[0, -1], [1, 0]],
    [[-1, 0], [0, -1]],
    [[0, 1], [-1, 0]],
];

/// Mirror family for counter-clockwise motions: reflect across the main
/// diagonal, then step through the same quarter turns.
const ROTATIONS_CCW: [Transform; 4] = [
    [[0, -1], [-1, 0]],
    [[1, 0], [0, -1]],
    [[0, 1], [1, 0]],
    [[-1, 0], [0, 1]],
];

/// Box-mode equivalents: the diagonal grid's quadrants sit a half-step
/// around, so the family starts from the diagonal reflection.
const ROTATIONS_BOX_CW: [Transform; 4] = [
    [[0, 1], [1, 0]],
    [[-1, 0], [0, 1]],
    [[0, -1], [-1, 0]],
    [[1, 0], [0, -1]],
];

const ROTATIONS_BOX_CCW: [Transform; 4] = [
    [[1, 0], [0, 1]],
    [[0, -1], [1, 0]],
    [[-1, 0], [0, -1]],
    [[0, 1], [-1, 0]],
];

static DEFAULT_TRANSFORMS: Lazy<HashMap<TupleKey, Vec<Transform>>> = Lazy::new(build_default_transforms);

fn build_default_transforms() -> HashMap<TupleKey, Vec<Transform>> {
    let mut table = HashMap::new();

    for rotation in [
        RotationDirection::Clockwise,
        RotationDirection::CounterClockwise,
        RotationDirection::NoRotation,
    ] {
        // Static/dash motions and no-rotation shifts use the clockwise
        // family; only a counter-clockwise shift mirrors.
        let diamond = if rotation == RotationDirection::CounterClockwise {
            ROTATIONS_CCW
        } else {
            ROTATIONS_CW
        };
        let boxed = if rotation == RotationDirection::CounterClockwise {
            ROTATIONS_BOX_CCW
        } else {
            ROTATIONS_BOX_CW
        };

        table.insert((GridMode::Diamond, true, rotation), diamond.to_vec());
        table.insert((GridMode::Box, true, rotation), boxed.to_vec());
        // Non-shift motions ignore handedness entirely.
        table.insert((GridMode::Diamond, false, rotation), ROTATIONS_CW.to_vec());
        table.insert((GridMode::Box, false, rotation), ROTATIONS_BOX_CW.to_vec());
    }

    table
}

/// Generates the four rotation-derived candidate offsets for a motion.
pub struct DirectionalTupleCalculator {
    transforms: HashMap<TupleKey, Vec<Transform>>,
}

impl DirectionalTupleCalculator {
    /// Calculator with the default transform families installed
    pub fn new() -> Self {
        Self {
            transforms: DEFAULT_TRANSFORMS.clone(),
        }
    }

    /// Calculator with a caller-supplied transform table. Used by tests
    /// to simulate a broken configuration.
    pub fn with_transforms(transforms: HashMap<TupleKey, Vec<Transform>>) -> Self {
        Self { transforms }
    }

    /// Generate exactly four (dx, dy) candidates for `motion` from the
    /// base offset. The base is rounded to integers first; the table's
    /// transforms are then applied in quadrant order.
    ///
    /// An empty or missing transform entry is a configuration bug, not
    /// unusual input, and fails hard.
    pub fn generate_tuples(
        &self,
        motion: &MotionData,
        base_x: f32,
        base_y: f32,
    ) -> Result<Vec<(i32, i32)>, PositioningError> {
        let key = self.key_for(motion);
        let transforms = self.transforms.get(&key).filter(|t| !t.is_empty()).ok_or(
            PositioningError::EmptyTupleTable {
                grid_mode: key.0,
                motion_type: motion.motion_type,
                rotation: key.2,
            },
        )?;

        let x = base_x.round() as i32;
        let y = base_y.round() as i32;
        Ok(transforms
            .iter()
            .map(|[[a, b], [c, d]]| (a * x + b * y, c * x + d * y))
            .collect())
    }

    fn key_for(&self, motion: &MotionData) -> TupleKey {
        let grid_mode = motion.start_loc.grid_mode();
        let rotation = match motion.motion_type {
            // Float carries no rotation count; its quadrant family is the
            // neutral one regardless of the recorded direction.
            MotionType::Float => RotationDirection::NoRotation,
            _ => motion.prop_rot_dir,
        };
        (grid_mode, motion.motion_type.is_shift(), rotation)
    }
}

impl Default for DirectionalTupleCalculator {
    fn default() -> Self {
        Self::new()
    }
}
