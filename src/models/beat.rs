//! Beat, pictograph and sequence aggregates
//!
//! These are the records the positioning engine receives as immutable
//! inputs. The engine never mutates them; corrected or offset-carrying
//! variants are produced as new copies.

use serde::{Deserialize, Serialize};

use super::grid::Point;
use super::motion::{Location, MotionData, Orientation, PropColor};

/// One prop glyph's render state within a beat
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PropData {
    pub color: PropColor,
    pub orientation: Orientation,
    /// Beta-positioning offset, zero when the props do not overlap
    #[serde(default)]
    pub offset: Point,
}

impl PropData {
    pub fn new(color: PropColor, orientation: Orientation) -> Self {
        Self {
            color,
            orientation,
            offset: Point::ZERO,
        }
    }

    /// Copy with a different separation offset
    pub fn with_offset(&self, offset: Point) -> Self {
        Self { offset, ..self.clone() }
    }

    /// Copy with a different orientation
    pub fn with_orientation(&self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self.clone()
        }
    }
}

/// One arrow glyph to be positioned.
///
/// `location` is the arrow's render location, precomputed by the caller
/// from the motion (shift arrows sit between start and end, static arrows
/// at their location). The positioning pipeline never re-derives it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ArrowData {
    pub color: PropColor,
    pub motion: MotionData,
    pub location: Location,
}

impl ArrowData {
    pub fn new(color: PropColor, motion: MotionData, location: Location) -> Self {
        Self {
            color,
            motion,
            location,
        }
    }
}

/// One time-slot in a sequence, holding both props' motions
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BeatData {
    /// 0 is reserved for the start position
    pub beat_number: u32,
    /// Letter classification of the pictograph (e.g. "A", "I")
    pub letter: String,
    pub blue_motion: MotionData,
    pub red_motion: MotionData,
    pub blue_prop: PropData,
    pub red_prop: PropData,
    pub is_blank: bool,
}

impl BeatData {
    pub fn new(beat_number: u32, letter: &str, blue_motion: MotionData, red_motion: MotionData) -> Self {
        let blue_prop = PropData::new(PropColor::Blue, blue_motion.start_ori);
        let red_prop = PropData::new(PropColor::Red, red_motion.start_ori);
        Self {
            beat_number,
            letter: letter.to_string(),
            blue_motion,
            red_motion,
            blue_prop,
            red_prop,
            is_blank: false,
        }
    }

    /// A blank placeholder beat (no meaningful motion content)
    pub fn blank(beat_number: u32, blue_motion: MotionData, red_motion: MotionData) -> Self {
        Self {
            is_blank: true,
            ..Self::new(beat_number, "", blue_motion, red_motion)
        }
    }

    pub fn motion(&self, color: PropColor) -> &MotionData {
        match color {
            PropColor::Blue => &self.blue_motion,
            PropColor::Red => &self.red_motion,
        }
    }

    pub fn prop(&self, color: PropColor) -> &PropData {
        match color {
            PropColor::Blue => &self.blue_prop,
            PropColor::Red => &self.red_prop,
        }
    }

    /// Copy with both prop offsets replaced
    pub fn with_prop_offsets(&self, blue_offset: Point, red_offset: Point) -> Self {
        Self {
            blue_prop: self.blue_prop.with_offset(blue_offset),
            red_prop: self.red_prop.with_offset(red_offset),
            ..self.clone()
        }
    }
}

/// A candidate next pictograph offered to the user while building a
/// sequence. Same shape as a beat minus the slot number.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PictographData {
    pub letter: String,
    pub blue_motion: MotionData,
    pub red_motion: MotionData,
    pub blue_prop: PropData,
    pub red_prop: PropData,
}

impl PictographData {
    pub fn new(letter: &str, blue_motion: MotionData, red_motion: MotionData) -> Self {
        let blue_prop = PropData::new(PropColor::Blue, blue_motion.start_ori);
        let red_prop = PropData::new(PropColor::Red, red_motion.start_ori);
        Self {
            letter: letter.to_string(),
            blue_motion,
            red_motion,
            blue_prop,
            red_prop,
        }
    }

    pub fn motion(&self, color: PropColor) -> &MotionData {
        match color {
            PropColor::Blue => &self.blue_motion,
            PropColor::Red => &self.red_motion,
        }
    }
}

/// Ordered list of beats; insertion order is temporal order.
///
/// Invariant across adjacent non-blank beats: each color's `end_ori` must
/// equal the next beat's `start_ori`. The sequence validator checks and
/// repairs this.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SequenceData {
    pub beats: Vec<BeatData>,
}

impl SequenceData {
    pub fn new(beats: Vec<BeatData>) -> Self {
        Self { beats }
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.beats.len()
    }

    /// Non-blank beats in temporal order
    pub fn filled_beats(&self) -> impl Iterator<Item = &BeatData> {
        self.beats.iter().filter(|beat| !beat.is_blank)
    }

    pub fn last_filled(&self) -> Option<&BeatData> {
        self.beats.iter().rev().find(|beat| !beat.is_blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::motion::{Location, MotionType, RotationDirection};

    fn motion(start_ori: Orientation, end_ori: Orientation) -> MotionData {
        MotionData::new(
            MotionType::Pro,
            RotationDirection::Clockwise,
            Location::N,
            Location::E,
            1.0,
            start_ori,
            end_ori,
        )
    }

    #[test]
    fn test_with_prop_offsets_leaves_input_untouched() {
        let beat = BeatData::new(
            1,
            "A",
            motion(Orientation::In, Orientation::Out),
            motion(Orientation::Out, Orientation::In),
        );
        let offset = Point::new(25.0, 0.0);
        let shifted = beat.with_prop_offsets(offset, -offset);
        assert_eq!(beat.blue_prop.offset, Point::ZERO);
        assert_eq!(shifted.blue_prop.offset, offset);
        assert_eq!(shifted.red_prop.offset, -offset);
        assert_eq!(shifted.letter, beat.letter);
    }

    #[test]
    fn test_filled_beats_skips_blanks() {
        let m = motion(Orientation::In, Orientation::In);
        let seq = SequenceData::new(vec![
            BeatData::new(1, "A", m.clone(), m.clone()),
            BeatData::blank(2, m.clone(), m.clone()),
            BeatData::new(3, "B", m.clone(), m.clone()),
        ]);
        let numbers: Vec<u32> = seq.filled_beats().map(|b| b.beat_number).collect();
        assert_eq!(numbers, vec![1, 3]);
        assert_eq!(seq.last_filled().unwrap().beat_number, 3);
    }
}
