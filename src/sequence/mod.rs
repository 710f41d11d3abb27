//! Sequence module for the pictograph engine
//!
//! Cross-beat machinery: orientation transition rules and the
//! continuity validator that keeps adjacent beats connected.

pub mod orientation;
pub mod validator;

pub use orientation::{DefaultOrientationTransition, OrientationTransition};
pub use validator::{
    calculate_option_start_orientations, end_orientations, validate_continuity, ContinuityReport,
    EndOrientations,
};
