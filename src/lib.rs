//! Pictograph Positioning Engine
//!
//! Deterministic geometric core for the pictograph sequence editor:
//! computes arrow placements, prop separation offsets and cross-beat
//! orientation continuity from immutable beat data. The UI layer that
//! consumes these results lives elsewhere; this crate has no rendering
//! or event-handling surface of its own.

pub mod errors;
pub mod events;
pub mod models;
pub mod positioning;
pub mod sequence;

// Re-export commonly used types
pub use errors::PositioningError;
pub use events::PositioningObserver;
pub use models::beat::*;
pub use models::grid::*;
pub use models::motion::*;
