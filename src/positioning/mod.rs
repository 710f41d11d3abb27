//! Positioning module for the pictograph engine
//!
//! This module contains the per-arrow placement pipeline (quadrant
//! index, directional tuples, placement lookup) and the per-beat prop
//! separation logic.

pub mod arrow;
pub mod beta;
pub mod directional;
pub mod placement;
pub mod processor;
pub mod quadrant;

pub use arrow::{ArrowPlacement, ArrowPositioner};
pub use beta::{BetaPositioner, SeparationStrategy, BETA_SEPARATION};
pub use directional::DirectionalTupleCalculator;
pub use placement::{PlacementConfig, PlacementLoadError};
pub use processor::DirectionalTupleProcessor;
pub use quadrant::quadrant_index;
