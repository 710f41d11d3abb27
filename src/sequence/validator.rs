//! Sequence orientation validation
//!
//! A prop's end facing on one beat must equal its start facing on the
//! next, for each color, across the whole sequence. This module reports
//! discontinuities and repairs candidate next-options to match the
//! sequence's current end state. Validation itself never fails: callers
//! decide whether a discontinuity rejects an edit or triggers repair.

use serde::{Deserialize, Serialize};

use crate::models::beat::{PictographData, SequenceData};
use crate::models::motion::{Orientation, PropColor};

use super::orientation::OrientationTransition;

/// End facings of both props after the last filled beat
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EndOrientations {
    pub blue: Orientation,
    pub red: Orientation,
}

impl EndOrientations {
    /// Fixed start-position defaults for an empty sequence
    pub const DEFAULT: EndOrientations = EndOrientations {
        blue: Orientation::In,
        red: Orientation::Out,
    };

    pub fn get(&self, color: PropColor) -> Orientation {
        match color {
            PropColor::Blue => self.blue,
            PropColor::Red => self.red,
        }
    }
}

/// Outcome of a continuity check
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContinuityReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// End orientations of each color's motion on the last filled beat, or
/// the fixed defaults for an empty (or all-blank) sequence.
pub fn end_orientations(sequence: &SequenceData) -> EndOrientations {
    match sequence.last_filled() {
        Some(beat) => EndOrientations {
            blue: beat.blue_motion.end_ori,
            red: beat.red_motion.end_ori,
        },
        None => EndOrientations::DEFAULT,
    }
}

/// Check orientation continuity across every adjacent pair of filled
/// beats, for both colors. Sequences of length <= 1 are trivially valid.
/// One human-readable error is produced per violation.
pub fn validate_continuity(sequence: &SequenceData) -> ContinuityReport {
    let beats: Vec<_> = sequence.filled_beats().collect();
    let mut errors = Vec::new();

    for pair in beats.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        for color in [PropColor::Blue, PropColor::Red] {
            let ends = prev.motion(color).end_ori;
            let starts = next.motion(color).start_ori;
            if ends != starts {
                errors.push(format!(
                    "Orientation discontinuity in {}: beat {} ends {}, beat {} starts {}",
                    color, prev.beat_number, ends, next.beat_number, starts
                ));
            }
        }
    }

    ContinuityReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Rewrite each candidate next-option so its start orientations (and the
/// end orientations derived from them) continue the sequence. Props pick
/// up the corrected start facing. Returns new instances; the inputs are
/// untouched.
pub fn calculate_option_start_orientations(
    sequence: &SequenceData,
    options: &[PictographData],
    transition: &dyn OrientationTransition,
) -> Vec<PictographData> {
    let targets = end_orientations(sequence);

    options
        .iter()
        .map(|option| {
            let blue_motion = option.blue_motion.with_start_ori(targets.blue);
            let blue_motion = blue_motion.with_end_ori(transition.end_orientation(&blue_motion));
            let red_motion = option.red_motion.with_start_ori(targets.red);
            let red_motion = red_motion.with_end_ori(transition.end_orientation(&red_motion));

            log::debug!(
                "option '{}' realigned to blue {} / red {}",
                option.letter,
                targets.blue,
                targets.red
            );

            PictographData {
                letter: option.letter.clone(),
                blue_prop: option.blue_prop.with_orientation(targets.blue),
                red_prop: option.red_prop.with_orientation(targets.red),
                blue_motion,
                red_motion,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::beat::BeatData;
    use crate::models::motion::{Location, MotionData, MotionType, RotationDirection};
    use crate::sequence::orientation::DefaultOrientationTransition;

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

    fn beat(number: u32, blue: (Orientation, Orientation), red: (Orientation, Orientation)) -> BeatData {
        BeatData::new(number, "A", motion(blue.0, blue.1), motion(red.0, red.1))
    }

    #[test]
    fn test_empty_sequence_defaults() {
        let seq = SequenceData::default();
        assert_eq!(end_orientations(&seq), EndOrientations::DEFAULT);
        assert_eq!(end_orientations(&seq).blue, Orientation::In);
        assert_eq!(end_orientations(&seq).red, Orientation::Out);
    }

    #[test]
    fn test_end_orientations_from_last_beat() {
        let seq = SequenceData::new(vec![
            beat(1, (Orientation::In, Orientation::Out), (Orientation::Out, Orientation::In)),
            beat(2, (Orientation::Out, Orientation::Clock), (Orientation::In, Orientation::Counter)),
        ]);
        let ends = end_orientations(&seq);
        assert_eq!(ends.blue, Orientation::Clock);
        assert_eq!(ends.red, Orientation::Counter);
    }

    #[test]
    fn test_short_sequences_are_trivially_valid() {
        assert!(validate_continuity(&SequenceData::default()).is_valid);
        let one = SequenceData::new(vec![beat(
            1,
            (Orientation::In, Orientation::Out),
            (Orientation::Out, Orientation::In),
        )]);
        assert!(validate_continuity(&one).is_valid);
    }

    #[test]
    fn test_discontinuity_reports_one_error_naming_the_color() {
        let seq = SequenceData::new(vec![
            beat(1, (Orientation::In, Orientation::In), (Orientation::In, Orientation::Out)),
            // Blue continues correctly; red starts In after ending Out.
            beat(2, (Orientation::In, Orientation::Out), (Orientation::In, Orientation::In)),
        ]);
        let report = validate_continuity(&seq);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("red"));
        assert_eq!(
            report.errors[0],
            "Orientation discontinuity in red: beat 1 ends out, beat 2 starts in"
        );
    }

    #[test]
    fn test_correcting_start_ori_restores_validity() {
        let first = beat(1, (Orientation::In, Orientation::In), (Orientation::In, Orientation::Out));
        let broken = beat(2, (Orientation::In, Orientation::Out), (Orientation::In, Orientation::In));
        assert!(!validate_continuity(&SequenceData::new(vec![first.clone(), broken.clone()])).is_valid);

        let fixed = BeatData {
            red_motion: broken.red_motion.with_start_ori(Orientation::Out),
            ..broken
        };
        assert!(validate_continuity(&SequenceData::new(vec![first, fixed])).is_valid);
    }

    #[test]
    fn test_blank_beats_are_skipped() {
        let first = beat(1, (Orientation::In, Orientation::Out), (Orientation::In, Orientation::Out));
        let blank = BeatData::blank(
            2,
            motion(Orientation::Clock, Orientation::Counter),
            motion(Orientation::Clock, Orientation::Counter),
        );
        // Beat 3 continues beat 1, ignoring the blank between them.
        let third = beat(3, (Orientation::Out, Orientation::In), (Orientation::Out, Orientation::In));
        let report = validate_continuity(&SequenceData::new(vec![first, blank, third]));
        assert!(report.is_valid);
    }

    #[test]
    fn test_option_realignment_produces_new_instances() {
        let seq = SequenceData::new(vec![beat(
            1,
            (Orientation::In, Orientation::Clock),
            (Orientation::Out, Orientation::Counter),
        )]);
        let option = PictographData::new(
            "B",
            motion(Orientation::In, Orientation::In),
            motion(Orientation::In, Orientation::In),
        );
        let transition = DefaultOrientationTransition;
        let realigned = calculate_option_start_orientations(&seq, &[option.clone()], &transition);

        assert_eq!(realigned.len(), 1);
        assert_eq!(realigned[0].blue_motion.start_ori, Orientation::Clock);
        assert_eq!(realigned[0].red_motion.start_ori, Orientation::Counter);
        assert_eq!(realigned[0].blue_prop.orientation, Orientation::Clock);
        assert_eq!(realigned[0].red_prop.orientation, Orientation::Counter);
        // Pro with one whole turn switches the (new) start orientation.
        assert_eq!(realigned[0].blue_motion.end_ori, Orientation::Counter);
        // Input untouched.
        assert_eq!(option.blue_motion.start_ori, Orientation::In);
    }

    #[test]
    fn test_option_realignment_on_empty_sequence_uses_defaults() {
        let option = PictographData::new(
            "C",
            motion(Orientation::Clock, Orientation::Clock),
            motion(Orientation::Clock, Orientation::Clock),
        );
        let realigned = calculate_option_start_orientations(
            &SequenceData::default(),
            &[option],
            &DefaultOrientationTransition,
        );
        assert_eq!(realigned[0].blue_motion.start_ori, Orientation::In);
        assert_eq!(realigned[0].red_motion.start_ori, Orientation::Out);
    }
}
