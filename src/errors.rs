//! Error types for the positioning pipeline
//!
//! Only internally-inconsistent states surface as errors (a broken or
//! missing transform table, an index that cannot exist). Degenerate but
//! structurally valid inputs fall back to defaults with a logged warning
//! instead; see the quadrant and placement modules.

use thiserror::Error;

use crate::models::motion::{GridMode, MotionType, RotationDirection};

/// Failures of the directional tuple pipeline. These indicate a broken
/// configuration rather than unusual input data and must propagate.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PositioningError {
    /// The transform table held no matrices for this key
    #[error("no directional transforms configured for {grid_mode:?}/{motion_type}/{rotation:?}")]
    EmptyTupleTable {
        grid_mode: GridMode,
        motion_type: MotionType,
        rotation: RotationDirection,
    },

    /// A quadrant index outside the generated tuple list was selected
    #[error("quadrant index {index} out of range for {len} directional tuples")]
    TupleIndexOutOfRange { index: usize, len: usize },
}
