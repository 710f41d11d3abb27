//! Arrow positioning service
//!
//! Combines the static placement table, the directional tuple pipeline
//! and the grid anchor into the final (x, y, rotation) for one arrow.
//! Rotation comes from a fixed quarter-turn angle table keyed by the
//! arrow's location within its compass family, mirrored for
//! counter-clockwise motions.

use serde::{Deserialize, Serialize};

use crate::errors::PositioningError;
use crate::events::{dispatch, ArrowPositionedEvent, PositioningObserver};
use crate::models::beat::ArrowData;
use crate::models::grid::GridData;
use crate::models::motion::{Location, MotionData, RotationDirection};

use super::placement::PlacementConfig;
use super::processor::DirectionalTupleProcessor;

/// Final render state for one arrow glyph
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ArrowPlacement {
    pub x: f32,
    pub y: f32,
    /// Degrees, clockwise, 0 = north-facing glyph
    pub rotation: f32,
}

/// Positions arrows for one pictograph.
pub struct ArrowPositioner<'a> {
    placements: PlacementConfig,
    processor: DirectionalTupleProcessor,
    observer: Option<&'a dyn PositioningObserver>,
}

impl<'a> ArrowPositioner<'a> {
    /// Positioner over the built-in placement defaults, no observer
    pub fn new() -> Self {
        Self {
            placements: PlacementConfig::new(),
            processor: DirectionalTupleProcessor::new(),
            observer: None,
        }
    }

    /// Positioner over a dataset-loaded placement table
    pub fn with_placements(placements: PlacementConfig) -> Self {
        Self {
            placements,
            processor: DirectionalTupleProcessor::new(),
            observer: None,
        }
    }

    /// Attach a notification subscriber
    pub fn with_observer(mut self, observer: &'a dyn PositioningObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Compute the final placement of one arrow on the given grid.
    ///
    /// The base adjustment is looked up by motion type and location,
    /// refined through the directional tuple pipeline, then added to the
    /// grid anchor of the arrow's location. Rotation is independent of
    /// position. Deterministic: identical inputs give identical output.
    pub fn position(&self, arrow: &ArrowData, grid: &GridData) -> Result<ArrowPlacement, PositioningError> {
        let base = self
            .placements
            .base_adjustment(arrow.motion.motion_type, arrow.location);
        let adjustment = self.processor.process(base, &arrow.motion, arrow.location)?;
        let anchor = grid.anchor(arrow.location);

        let placement = ArrowPlacement {
            x: anchor.x + adjustment.x,
            y: anchor.y + adjustment.y,
            rotation: rotation_angle(&arrow.motion, arrow.location),
        };

        if let Some(observer) = self.observer {
            let event = ArrowPositionedEvent {
                color: arrow.color,
                x: placement.x,
                y: placement.y,
                rotation: placement.rotation,
                motion_type: arrow.motion.motion_type,
                location: arrow.location,
            };
            dispatch("arrow_positioned", || observer.arrow_positioned(&event));
        }

        Ok(placement)
    }
}

impl<'a> Default for ArrowPositioner<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Quarter-turn glyph angle for an arrow location.
///
/// Locations are indexed in clockwise order within their compass family
/// (N/E/S/W or NE/SE/SW/NW); clockwise motions advance 90 degrees per
/// step, counter-clockwise motions use the mirrored table. No-rotation
/// motions take the clockwise table.
pub fn rotation_angle(motion: &MotionData, location: Location) -> f32 {
    let index = match location {
        Location::N | Location::NE => 0,
        Location::E | Location::SE => 1,
        Location::S | Location::SW => 2,
        Location::W | Location::NW => 3,
    };
    let clockwise_angle = (index * 90) as f32;
    match motion.prop_rot_dir {
        RotationDirection::CounterClockwise => (360.0 - clockwise_angle) % 360.0,
        _ => clockwise_angle,
    }
}
