//! Orientation transitions
//!
//! How a prop's facing evolves over one motion. The rule pair is fixed
//! per motion type for whole turns; half turns insert one extra quarter
//! cycle through the tangential orientations in the prop's rotation
//! direction.

use crate::models::motion::{MotionData, MotionType, Orientation, RotationDirection};

/// Computes the orientation a motion ends with. Injected wherever a
/// motion's orientations are rewritten so the end facing stays
/// consistent with the new start facing.
pub trait OrientationTransition {
    fn end_orientation(&self, motion: &MotionData) -> Orientation;
}

/// Standard transition rules.
///
/// Whole turns: pro and static keep the start orientation on even turn
/// counts and switch on odd; anti and dash are the inverse; float always
/// switches. A trailing half turn then advances one quarter cycle
/// (clockwise: In -> Clock -> Out -> Counter -> In), reversed for
/// counter-clockwise props and skipped for no-rotation motions.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultOrientationTransition;

impl OrientationTransition for DefaultOrientationTransition {
    fn end_orientation(&self, motion: &MotionData) -> Orientation {
        let whole_turns = motion.turns.floor().max(0.0) as u32;
        let has_half_turn = (motion.turns - motion.turns.floor()).abs() >= 0.25;

        let base = whole_turn_orientation(motion.motion_type, motion.start_ori, whole_turns);
        if has_half_turn {
            quarter_cycle(base, motion.prop_rot_dir)
        } else {
            base
        }
    }
}

fn whole_turn_orientation(motion_type: MotionType, start: Orientation, turns: u32) -> Orientation {
    let switches_on_even = matches!(motion_type, MotionType::Anti | MotionType::Dash);
    let odd = turns % 2 == 1;

    match motion_type {
        MotionType::Float => start.switched(),
        _ => {
            if switches_on_even != odd {
                start.switched()
            } else {
                start
            }
        }
    }
}

fn quarter_cycle(orientation: Orientation, rotation: RotationDirection) -> Orientation {
    let clockwise_next = match orientation {
        Orientation::In => Orientation::Clock,
        Orientation::Clock => Orientation::Out,
        Orientation::Out => Orientation::Counter,
        Orientation::Counter => Orientation::In,
    };
    match rotation {
        RotationDirection::Clockwise => clockwise_next,
        RotationDirection::CounterClockwise => match orientation {
            Orientation::In => Orientation::Counter,
            Orientation::Counter => Orientation::Out,
            Orientation::Out => Orientation::Clock,
            Orientation::Clock => Orientation::In,
        },
        RotationDirection::NoRotation => orientation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::motion::Location;

    fn motion(motion_type: MotionType, turns: f32, start_ori: Orientation) -> MotionData {
        MotionData::new(
            motion_type,
            RotationDirection::Clockwise,
            Location::N,
            Location::E,
            turns,
            start_ori,
            start_ori,
        )
    }

    #[test]
    fn test_pro_whole_turns() {
        let calc = DefaultOrientationTransition;
        assert_eq!(
            calc.end_orientation(&motion(MotionType::Pro, 0.0, Orientation::In)),
            Orientation::In
        );
        assert_eq!(
            calc.end_orientation(&motion(MotionType::Pro, 1.0, Orientation::In)),
            Orientation::Out
        );
        assert_eq!(
            calc.end_orientation(&motion(MotionType::Pro, 2.0, Orientation::In)),
            Orientation::In
        );
    }

    #[test]
    fn test_anti_inverts_pro() {
        let calc = DefaultOrientationTransition;
        assert_eq!(
            calc.end_orientation(&motion(MotionType::Anti, 0.0, Orientation::In)),
            Orientation::Out
        );
        assert_eq!(
            calc.end_orientation(&motion(MotionType::Anti, 1.0, Orientation::In)),
            Orientation::In
        );
    }

    #[test]
    fn test_float_always_switches() {
        let calc = DefaultOrientationTransition;
        assert_eq!(
            calc.end_orientation(&motion(MotionType::Float, 0.0, Orientation::Clock)),
            Orientation::Counter
        );
    }

    #[test]
    fn test_static_and_dash_follow_their_families() {
        let calc = DefaultOrientationTransition;
        assert_eq!(
            calc.end_orientation(&motion(MotionType::Static, 0.0, Orientation::Out)),
            Orientation::Out
        );
        assert_eq!(
            calc.end_orientation(&motion(MotionType::Dash, 0.0, Orientation::Out)),
            Orientation::In
        );
    }

    #[test]
    fn test_half_turn_lands_on_tangential() {
        let calc = DefaultOrientationTransition;
        // Pro 0.5 cw from In: whole part keeps In, half turn advances to Clock.
        assert_eq!(
            calc.end_orientation(&motion(MotionType::Pro, 0.5, Orientation::In)),
            Orientation::Clock
        );
        // Pro 1.5 cw from In: whole part switches to Out, then Counter.
        assert_eq!(
            calc.end_orientation(&motion(MotionType::Pro, 1.5, Orientation::In)),
            Orientation::Counter
        );
    }

    #[test]
    fn test_half_turn_mirrors_for_counter_clockwise() {
        let calc = DefaultOrientationTransition;
        let mut m = motion(MotionType::Pro, 0.5, Orientation::In);
        m.prop_rot_dir = RotationDirection::CounterClockwise;
        assert_eq!(calc.end_orientation(&m), Orientation::Counter);
    }
}
