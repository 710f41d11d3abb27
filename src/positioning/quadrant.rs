//! Quadrant index calculation
//!
//! Maps an arrow's location to the index 0-3 selecting one of the four
//! canned directional adjustments. Four fixed tables exist, keyed by
//! grid mode and motion category. Unknown combinations degrade to index
//! 0 with a warning rather than erroring: a single malformed beat must
//! not crash the whole layout pass.

use crate::models::motion::{GridMode, Location, MotionData};

/// Compute the quadrant index for a motion's arrow.
///
/// Grid mode is detected from `motion.start_loc` (diagonal start means
/// box mode). Shift motions (pro/anti/float) index by the diagonal
/// family in diamond mode and the cardinal family in box mode;
/// static/dash motions use the opposite family. The result is always in
/// 0..=3.
pub fn quadrant_index(motion: &MotionData, arrow_location: Location) -> usize {
    let grid_mode = motion.start_loc.grid_mode();
    let shift = motion.motion_type.is_shift();

    let index = match (grid_mode, shift) {
        (GridMode::Diamond, true) => diamond_shift_index(arrow_location),
        (GridMode::Diamond, false) => cardinal_index(arrow_location),
        (GridMode::Box, true) => cardinal_index(arrow_location),
        (GridMode::Box, false) => diamond_shift_index(arrow_location),
    };

    match index {
        Some(i) => i,
        None => {
            log::warn!(
                "no quadrant entry for location {} ({:?}, shift={}), falling back to 0",
                arrow_location,
                grid_mode,
                shift
            );
            0
        }
    }
}

/// NE/SE/SW/NW -> 0..3 (diamond shift and box static/dash table)
fn diamond_shift_index(location: Location) -> Option<usize> {
    match location {
        Location::NE => Some(0),
        Location::SE => Some(1),
        Location::SW => Some(2),
        Location::NW => Some(3),
        _ => None,
    }
}

/// N/E/S/W -> 0..3 (diamond static/dash and box shift table)
fn cardinal_index(location: Location) -> Option<usize> {
    match location {
        Location::N => Some(0),
        Location::E => Some(1),
        Location::S => Some(2),
        Location::W => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::motion::{MotionType, Orientation, RotationDirection};
    use std::collections::HashSet;

    fn motion(motion_type: MotionType, start_loc: Location) -> MotionData {
        MotionData::new(
            motion_type,
            RotationDirection::Clockwise,
            start_loc,
            start_loc,
            0.0,
            Orientation::In,
            Orientation::In,
        )
    }

    #[test]
    fn test_diamond_shift_table() {
        let m = motion(MotionType::Pro, Location::N);
        assert_eq!(quadrant_index(&m, Location::NE), 0);
        assert_eq!(quadrant_index(&m, Location::SE), 1);
        assert_eq!(quadrant_index(&m, Location::SW), 2);
        assert_eq!(quadrant_index(&m, Location::NW), 3);
    }

    #[test]
    fn test_diamond_static_dash_table() {
        for motion_type in [MotionType::Static, MotionType::Dash] {
            let m = motion(motion_type, Location::S);
            assert_eq!(quadrant_index(&m, Location::N), 0);
            assert_eq!(quadrant_index(&m, Location::E), 1);
            assert_eq!(quadrant_index(&m, Location::S), 2);
            assert_eq!(quadrant_index(&m, Location::W), 3);
        }
    }

    #[test]
    fn test_box_shift_table() {
        let m = motion(MotionType::Float, Location::NE);
        assert_eq!(quadrant_index(&m, Location::N), 0);
        assert_eq!(quadrant_index(&m, Location::E), 1);
        assert_eq!(quadrant_index(&m, Location::S), 2);
        assert_eq!(quadrant_index(&m, Location::W), 3);
    }

    #[test]
    fn test_box_static_dash_table() {
        let m = motion(MotionType::Static, Location::SW);
        assert_eq!(quadrant_index(&m, Location::NE), 0);
        assert_eq!(quadrant_index(&m, Location::SE), 1);
        assert_eq!(quadrant_index(&m, Location::SW), 2);
        assert_eq!(quadrant_index(&m, Location::NW), 3);
    }

    #[test]
    fn test_mapping_is_bijective_within_each_family() {
        let diamond_shift = motion(MotionType::Pro, Location::N);
        let indices: HashSet<usize> = [Location::NE, Location::SE, Location::SW, Location::NW]
            .iter()
            .map(|loc| quadrant_index(&diamond_shift, *loc))
            .collect();
        assert_eq!(indices.len(), 4);

        let box_shift = motion(MotionType::Anti, Location::NW);
        let indices: HashSet<usize> = [Location::N, Location::E, Location::S, Location::W]
            .iter()
            .map(|loc| quadrant_index(&box_shift, *loc))
            .collect();
        assert_eq!(indices.len(), 4);
    }

    #[test]
    fn test_unknown_combination_falls_back_to_zero() {
        // A cardinal arrow location under the diamond shift table has no
        // entry; the defensive policy maps it to 0.
        let m = motion(MotionType::Pro, Location::N);
        assert_eq!(quadrant_index(&m, Location::E), 0);
    }
}
