//! Positioning event notifications
//!
//! The engine is pure over its inputs; the UI/telemetry layer may still
//! want to watch it work. Services accept an optional observer and emit
//! fire-and-forget notifications through it. A panicking subscriber is
//! swallowed and logged so it can never abort a layout pass, and absence
//! of an observer never changes computed results.

use serde::{Deserialize, Serialize};
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::models::grid::{Direction, Point};
use crate::models::motion::{Location, MotionType, PropColor};

/// Payload of an `arrow_positioned` notification
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ArrowPositionedEvent {
    pub color: PropColor,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub motion_type: MotionType,
    pub location: Location,
}

/// Payload of an `overlap_detected` notification
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OverlapEvent {
    pub beat_number: u32,
    pub letter: String,
    pub location: Location,
}

/// Payload of a `separation_applied` notification
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeparationEvent {
    pub beat_number: u32,
    pub letter: String,
    pub blue_direction: Direction,
    pub red_direction: Direction,
    pub blue_offset: Point,
    pub red_offset: Point,
}

/// Subscriber interface for positioning notifications.
///
/// All methods default to no-ops so subscribers implement only what they
/// care about.
pub trait PositioningObserver {
    fn arrow_positioned(&self, _event: &ArrowPositionedEvent) {}

    fn overlap_detected(&self, _event: &OverlapEvent) {}

    fn separation_applied(&self, _event: &SeparationEvent) {}

    fn beta_positioning_applied(&self, _beat_number: u32) {}
}

/// Dispatch one notification, isolating subscriber panics.
pub(crate) fn dispatch<F: FnOnce()>(label: &str, notify: F) {
    if catch_unwind(AssertUnwindSafe(notify)).is_err() {
        log::warn!("observer panicked during '{}' notification, continuing", label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct PanickingObserver;

    impl PositioningObserver for PanickingObserver {
        fn beta_positioning_applied(&self, _beat_number: u32) {
            panic!("subscriber bug");
        }
    }

    struct CountingObserver {
        count: Cell<u32>,
    }

    impl PositioningObserver for CountingObserver {
        fn beta_positioning_applied(&self, _beat_number: u32) {
            self.count.set(self.count.get() + 1);
        }
    }

    #[test]
    fn test_dispatch_swallows_subscriber_panic() {
        let observer = PanickingObserver;
        dispatch("beta_positioning", || observer.beta_positioning_applied(1));
        // reaching this line is the assertion
    }

    #[test]
    fn test_dispatch_invokes_subscriber() {
        let observer = CountingObserver { count: Cell::new(0) };
        dispatch("beta_positioning", || observer.beta_positioning_applied(1));
        assert_eq!(observer.count.get(), 1);
    }
}
