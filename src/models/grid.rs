//! Grid geometry for pictograph layout
//!
//! Screen-space coordinates are y-down (north is negative y), matching the
//! scene coordinates of the consuming editor.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg};

use super::motion::{GridMode, Location};

/// 2D point / offset vector. Pure value, no identity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale by a scalar magnitude
    pub fn scaled(&self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Offset direction used for prop separation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpRight,
    DownRight,
    DownLeft,
    UpLeft,
}

impl Direction {
    /// Unit vector in y-down screen coordinates.
    ///
    /// Diagonal directions use unit components rather than normalized
    /// length so diagonal separations land on grid-aligned offsets.
    pub fn unit_vector(&self) -> Point {
        match self {
            Direction::Up => Point::new(0.0, -1.0),
            Direction::Down => Point::new(0.0, 1.0),
            Direction::Left => Point::new(-1.0, 0.0),
            Direction::Right => Point::new(1.0, 0.0),
            Direction::UpRight => Point::new(1.0, -1.0),
            Direction::DownRight => Point::new(1.0, 1.0),
            Direction::DownLeft => Point::new(-1.0, 1.0),
            Direction::UpLeft => Point::new(-1.0, -1.0),
        }
    }

    /// The exactly opposite direction
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownRight => Direction::UpLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::UpLeft => Direction::DownRight,
        }
    }
}

/// Coordinate space a beat's locations are interpreted in
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GridData {
    pub grid_mode: GridMode,
    pub center: Point,
    pub radius: f32,
}

impl GridData {
    pub fn new(grid_mode: GridMode, center: Point, radius: f32) -> Self {
        Self {
            grid_mode,
            center,
            radius,
        }
    }

    /// Screen anchor of a grid point: center + radius along the compass
    /// direction. Diagonal points sit on the circle, not the bounding box.
    pub fn anchor(&self, location: Location) -> Point {
        let diag = std::f32::consts::FRAC_1_SQRT_2;
        let (ux, uy) = match location {
            Location::N => (0.0, -1.0),
            Location::NE => (diag, -diag),
            Location::E => (1.0, 0.0),
            Location::SE => (diag, diag),
            Location::S => (0.0, 1.0),
            Location::SW => (-diag, diag),
            Location::W => (-1.0, 0.0),
            Location::NW => (-diag, -diag),
        };
        Point::new(self.center.x + self.radius * ux, self.center.y + self.radius * uy)
    }
}
