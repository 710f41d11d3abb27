//! Motion model for pictograph beats
//!
//! This module defines the enums describing a single prop's movement
//! (motion type, rotation direction, locations, orientation) and the
//! immutable `MotionData` record built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass point on the pictograph grid.
///
/// Cardinal points (N/E/S/W) belong to the diamond grid, diagonal points
/// (NE/SE/SW/NW) to the box grid. Wire spellings match the dataset JSON.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Location {
    /// Check whether this is one of the four diagonal (box-grid) points
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Location::NE | Location::SE | Location::SW | Location::NW)
    }

    /// Grid mode this location belongs to
    pub fn grid_mode(&self) -> GridMode {
        if self.is_diagonal() {
            GridMode::Box
        } else {
            GridMode::Diamond
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::N => "n",
            Location::NE => "ne",
            Location::E => "e",
            Location::SE => "se",
            Location::S => "s",
            Location::SW => "sw",
            Location::W => "w",
            Location::NW => "nw",
        };
        write!(f, "{}", name)
    }
}

/// Coordinate system variant of the grid
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    /// Cardinal locations (N/E/S/W)
    Diamond,
    /// Diagonal locations (NE/SE/SW/NW)
    Box,
}

/// Type of motion a prop performs during one beat
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    /// Isolation-style travel, prop rotates with the hand path
    Pro,
    /// Anti-spin travel, prop rotates against the hand path
    Anti,
    /// Travel with no defined rotation count
    Float,
    /// Prop stays at one location
    Static,
    /// Straight-line pass through center
    Dash,
}

impl MotionType {
    /// Shift motions travel between distinct grid locations.
    ///
    /// Static and dash motions select quadrants from the opposite location
    /// family, so several lookup tables branch on this predicate.
    pub fn is_shift(&self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Float => "float",
            MotionType::Static => "static",
            MotionType::Dash => "dash",
        };
        write!(f, "{}", name)
    }
}

/// Rotation direction of the prop during the motion
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
    #[serde(rename = "no_rot")]
    NoRotation,
}

/// Prop facing at a point in time
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Facing the grid center
    In,
    /// Facing away from the grid center
    Out,
    /// Tangential, clockwise
    Clock,
    /// Tangential, counter-clockwise
    Counter,
}

impl Orientation {
    /// The radial/tangential opposite (In<->Out, Clock<->Counter)
    pub fn switched(&self) -> Orientation {
        match self {
            Orientation::In => Orientation::Out,
            Orientation::Out => Orientation::In,
            Orientation::Clock => Orientation::Counter,
            Orientation::Counter => Orientation::Clock,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::In => "in",
            Orientation::Out => "out",
            Orientation::Clock => "clock",
            Orientation::Counter => "counter",
        };
        write!(f, "{}", name)
    }
}

/// Which prop of the beat a motion/arrow/offset belongs to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropColor {
    Blue,
    Red,
}

impl PropColor {
    pub fn other(&self) -> PropColor {
        match self {
            PropColor::Blue => PropColor::Red,
            PropColor::Red => PropColor::Blue,
        }
    }
}

impl fmt::Display for PropColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropColor::Blue => write!(f, "blue"),
            PropColor::Red => write!(f, "red"),
        }
    }
}

/// One prop's movement for one beat.
///
/// Immutable: every "mutation" produces a new instance via the `with_*`
/// builders, so callers can compare previous/updated records when checking
/// sequence continuity.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MotionData {
    pub motion_type: MotionType,
    pub prop_rot_dir: RotationDirection,
    pub start_loc: Location,
    pub end_loc: Location,
    /// Number of prop rotations over the beat; half turns are legal
    pub turns: f32,
    pub start_ori: Orientation,
    pub end_ori: Orientation,
}

impl MotionData {
    pub fn new(
        motion_type: MotionType,
        prop_rot_dir: RotationDirection,
        start_loc: Location,
        end_loc: Location,
        turns: f32,
        start_ori: Orientation,
        end_ori: Orientation,
    ) -> Self {
        Self {
            motion_type,
            prop_rot_dir,
            start_loc,
            end_loc,
            turns,
            start_ori,
            end_ori,
        }
    }

    /// Copy with a different turn count
    pub fn with_turns(&self, turns: f32) -> Self {
        Self { turns, ..self.clone() }
    }

    /// Copy with a different start orientation
    pub fn with_start_ori(&self, start_ori: Orientation) -> Self {
        Self { start_ori, ..self.clone() }
    }

    /// Copy with a different end orientation
    pub fn with_end_ori(&self, end_ori: Orientation) -> Self {
        Self { end_ori, ..self.clone() }
    }

    /// Copy with both orientations replaced
    pub fn with_orientations(&self, start_ori: Orientation, end_ori: Orientation) -> Self {
        Self {
            start_ori,
            end_ori,
            ..self.clone()
        }
    }
}
