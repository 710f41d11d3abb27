//! Models module for the pictograph positioning engine
//!
//! This module contains all the value types the engine consumes and
//! produces: motions, grid geometry, beats, pictographs and sequences.

pub mod beat;
pub mod grid;
pub mod motion;

// Re-export commonly used types
pub use beat::*;
pub use grid::*;
pub use motion::*;
