//! Prop separation ("beta positioning")
//!
//! When both props of a beat end at the same grid location their glyphs
//! would render on top of each other. This module detects the overlap
//! and pushes the two props apart symmetrically: one prop moves along a
//! computed direction, the other along the exact opposite.
//!
//! Two strategies exist behind one interface. The general rule keys the
//! direction off the shared end location and the prop color. Letters
//! defined by a pro/anti motion pair (currently "I") instead key off
//! which prop carries the PRO motion, regardless of location; the
//! letter-to-strategy table keeps further exceptions additive.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::events::{dispatch, OverlapEvent, PositioningObserver, SeparationEvent};
use crate::models::beat::BeatData;
use crate::models::grid::{Direction, Point};
use crate::models::motion::{Location, MotionType};

/// Fixed separation magnitude in scene pixels
pub const BETA_SEPARATION: f32 = 25.0;

/// How a letter's props are pushed apart
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeparationStrategy {
    /// Direction from (end location, prop color)
    LocationBased,
    /// Direction from which prop carries the PRO motion
    MotionTypeBased,
}

static LETTER_STRATEGIES: Lazy<HashMap<&'static str, SeparationStrategy>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("I", SeparationStrategy::MotionTypeBased);
    table
});

/// Strategy for a pictograph letter; the location rule is the default.
pub fn strategy_for_letter(letter: &str) -> SeparationStrategy {
    LETTER_STRATEGIES
        .get(letter)
        .copied()
        .unwrap_or(SeparationStrategy::LocationBased)
}

/// Clockwise tangent at a grid location. The red prop (and the PRO prop
/// under the motion-type rule) separates along this direction.
fn clockwise_tangent(location: Location) -> Direction {
    match location {
        Location::N => Direction::Right,
        Location::NE => Direction::DownRight,
        Location::E => Direction::Down,
        Location::SE => Direction::DownLeft,
        Location::S => Direction::Left,
        Location::SW => Direction::UpLeft,
        Location::W => Direction::Up,
        Location::NW => Direction::UpRight,
    }
}

impl SeparationStrategy {
    /// Separation directions (blue, red) for an overlapping beat.
    fn directions(&self, beat: &BeatData) -> (Direction, Direction) {
        let tangent = clockwise_tangent(beat.red_motion.end_loc);

        match self {
            SeparationStrategy::LocationBased => (tangent.opposite(), tangent),
            SeparationStrategy::MotionTypeBased => {
                let blue_is_pro = beat.blue_motion.motion_type == MotionType::Pro;
                let red_is_anti = beat.red_motion.motion_type == MotionType::Anti;
                if blue_is_pro && red_is_anti {
                    (tangent, tangent.opposite())
                } else if beat.red_motion.motion_type == MotionType::Pro
                    && beat.blue_motion.motion_type == MotionType::Anti
                {
                    (tangent.opposite(), tangent)
                } else {
                    // Not a pro/anti pair after all; the location rule is
                    // the only sensible meaning left.
                    log::warn!(
                        "letter '{}' selected the motion-type rule but motions are {}/{}, using location rule",
                        beat.letter,
                        beat.blue_motion.motion_type,
                        beat.red_motion.motion_type
                    );
                    (tangent.opposite(), tangent)
                }
            }
        }
    }
}

/// Detects overlaps and computes symmetric separation offsets.
pub struct BetaPositioner<'a> {
    observer: Option<&'a dyn PositioningObserver>,
}

impl<'a> BetaPositioner<'a> {
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// Attach a notification subscriber
    pub fn with_observer(mut self, observer: &'a dyn PositioningObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// True when both props end at the same location (classic "beta"
    /// collision). Blank beats never overlap.
    pub fn detect_overlap(&self, beat: &BeatData) -> bool {
        if beat.is_blank {
            return false;
        }
        let overlapping = beat.blue_motion.end_loc == beat.red_motion.end_loc;
        if overlapping {
            if let Some(observer) = self.observer {
                let event = OverlapEvent {
                    beat_number: beat.beat_number,
                    letter: beat.letter.clone(),
                    location: beat.red_motion.end_loc,
                };
                dispatch("overlap_detected", || observer.overlap_detected(&event));
            }
        }
        overlapping
    }

    /// Separation offsets (blue, red) for a beat. Zero offsets when the
    /// props do not overlap. The two offsets are exact negations of each
    /// other under every strategy.
    pub fn calculate_separation_offsets(&self, beat: &BeatData) -> (Point, Point) {
        if !self.detect_overlap(beat) {
            return (Point::ZERO, Point::ZERO);
        }

        let strategy = strategy_for_letter(&beat.letter);
        let (blue_dir, red_dir) = strategy.directions(beat);
        let blue_offset = blue_dir.unit_vector().scaled(BETA_SEPARATION);
        let red_offset = red_dir.unit_vector().scaled(BETA_SEPARATION);

        log::debug!(
            "beta separation for beat {} ('{}'): blue {:?}, red {:?}",
            beat.beat_number,
            beat.letter,
            blue_dir,
            red_dir
        );

        if let Some(observer) = self.observer {
            let event = SeparationEvent {
                beat_number: beat.beat_number,
                letter: beat.letter.clone(),
                blue_direction: blue_dir,
                red_direction: red_dir,
                blue_offset,
                red_offset,
            };
            dispatch("separation_applied", || observer.separation_applied(&event));
        }

        (blue_offset, red_offset)
    }

    /// New beat whose props carry the computed offsets. The input is not
    /// mutated, and offsets are recomputed from the motions each call,
    /// so repeated application never accumulates.
    pub fn apply_beta_positioning(&self, beat: &BeatData) -> BeatData {
        let (blue_offset, red_offset) = self.calculate_separation_offsets(beat);
        let positioned = beat.with_prop_offsets(blue_offset, red_offset);

        if let Some(observer) = self.observer {
            dispatch("beta_positioning", || {
                observer.beta_positioning_applied(beat.beat_number)
            });
        }

        positioned
    }
}

impl<'a> Default for BetaPositioner<'a> {
    fn default() -> Self {
        Self::new()
    }
}
