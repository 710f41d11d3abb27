//! Static arrow placement configuration
//!
//! Base adjustments keyed by motion type and arrow location. The table
//! is configuration data: built-in defaults cover every valid key, and
//! a dataset-provided JSON file may override any subset of entries.
//! Lookups on valid enums never fail; a missing entry degrades to a
//! zero adjustment with a warning.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::models::grid::Point;
use crate::models::motion::{Location, MotionType};

const ALL_LOCATIONS: [Location; 8] = [
    Location::N,
    Location::NE,
    Location::E,
    Location::SE,
    Location::S,
    Location::SW,
    Location::W,
    Location::NW,
];

static DEFAULT_PLACEMENTS: Lazy<HashMap<(MotionType, Location), Point>> = Lazy::new(build_default_placements);

fn build_default_placements() -> HashMap<(MotionType, Location), Point> {
    let mut table = HashMap::new();
    add_entries(&mut table, MotionType::Pro, Point::new(25.0, -10.0));
    add_entries(&mut table, MotionType::Anti, Point::new(10.0, -25.0));
    add_entries(&mut table, MotionType::Float, Point::new(5.0, -5.0));
    add_entries(&mut table, MotionType::Static, Point::new(15.0, 0.0));
    add_entries(&mut table, MotionType::Dash, Point::new(20.0, 0.0));
    table
}

fn add_entries(table: &mut HashMap<(MotionType, Location), Point>, motion_type: MotionType, base: Point) {
    for location in ALL_LOCATIONS {
        table.insert((motion_type, location), base);
    }
}

/// Failure to load a placement override file
#[derive(Debug, Error)]
pub enum PlacementLoadError {
    #[error("failed to read placement file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid placement JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape: `{"pro": {"ne": [25.0, -10.0], ...}, ...}`
type PlacementJson = HashMap<MotionType, HashMap<Location, (f32, f32)>>;

/// Read-only base adjustment table for arrow positioning.
#[derive(Clone, Debug)]
pub struct PlacementConfig {
    adjustments: HashMap<(MotionType, Location), Point>,
}

impl PlacementConfig {
    /// Config holding only the built-in defaults
    pub fn new() -> Self {
        Self {
            adjustments: DEFAULT_PLACEMENTS.clone(),
        }
    }

    /// Defaults overlaid with entries from a JSON override document
    pub fn from_json(json: &str) -> Result<Self, PlacementLoadError> {
        let parsed: PlacementJson = serde_json::from_str(json)?;
        let mut config = Self::new();
        for (motion_type, by_location) in parsed {
            for (location, (x, y)) in by_location {
                config
                    .adjustments
                    .insert((motion_type, location), Point::new(x, y));
            }
        }
        Ok(config)
    }

    /// Load an override document from disk
    pub fn from_json_file(path: &Path) -> Result<Self, PlacementLoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Base adjustment for a motion type at an arrow location. Every
    /// valid pair has a built-in default; a missing key degrades to a
    /// zero adjustment with a warning rather than erroring.
    pub fn base_adjustment(&self, motion_type: MotionType, location: Location) -> Point {
        match self.adjustments.get(&(motion_type, location)) {
            Some(point) => *point,
            None => {
                log::warn!(
                    "no placement entry for {}/{}, falling back to zero adjustment",
                    motion_type,
                    location
                );
                Point::ZERO
            }
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::new()
    }
}
