//! Directional tuple processing
//!
//! Orchestrates tuple generation and quadrant selection into one final
//! adjustment vector. Generation and selection stay separate stages so
//! the four candidate placements can be unit-tested independently of
//! which one a given motion selects.

use crate::errors::PositioningError;
use crate::models::grid::Point;
use crate::models::motion::{Location, MotionData};

use super::directional::DirectionalTupleCalculator;
use super::quadrant::quadrant_index;

/// Turns a base adjustment into the quadrant-specific final adjustment.
pub struct DirectionalTupleProcessor {
    calculator: DirectionalTupleCalculator,
}

impl DirectionalTupleProcessor {
    pub fn new() -> Self {
        Self {
            calculator: DirectionalTupleCalculator::new(),
        }
    }

    /// Processor over a caller-supplied tuple calculator
    pub fn with_calculator(calculator: DirectionalTupleCalculator) -> Self {
        Self { calculator }
    }

    /// Select the adjustment for `motion` at the caller-computed arrow
    /// `location`. The location must not be re-derived here; doing so
    /// would apply grid-mode detection twice.
    ///
    /// Index out of range is a hard error: the quadrant tables only
    /// produce 0..=3 and the calculator only produces four tuples, so an
    /// out-of-range index means a broken injected table.
    pub fn process(
        &self,
        base_adjustment: Point,
        motion: &MotionData,
        location: Location,
    ) -> Result<Point, PositioningError> {
        let tuples = self
            .calculator
            .generate_tuples(motion, base_adjustment.x, base_adjustment.y)?;
        let index = quadrant_index(motion, location);

        let (dx, dy) = tuples
            .get(index)
            .copied()
            .ok_or(PositioningError::TupleIndexOutOfRange {
                index,
                len: tuples.len(),
            })?;

        log::trace!(
            "directional tuple for {} at {}: quadrant {} -> ({}, {})",
            motion.motion_type,
            location,
            index,
            dx,
            dy
        );
        Ok(Point::new(dx as f32, dy as f32))
    }
}

impl Default for DirectionalTupleProcessor {
    fn default() -> Self {
        Self::new()
    }
}
