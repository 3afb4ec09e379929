//! Input model: knobs, rotation directions, and the gesture hysteresis tracker.
//!
//! This module defines the types consumed by the engine's drag handlers.
//! `RotationSample` captures one host drag-move reading. `RotationTracker`
//! is the active gesture being tracked between drag-start and drag-end,
//! turning a stream of absolute angle readings into discrete
//! clockwise/counter-clockwise events.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CCW_WRAP_HIGH, CCW_WRAP_LOW, CW_WRAP_HIGH, CW_WRAP_LOW, DEGREE_BIAS};

/// Which knob the user is twisting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Knob {
    /// Left knob; drives the pen vertically.
    Left,
    /// Right knob; drives the pen horizontally.
    Right,
}

/// The classified rotational sense of one gesture sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The knob is turning clockwise.
    Clockwise,
    /// The knob is turning counter-clockwise.
    CounterClockwise,
}

/// One drag-move reading supplied by the host: which knob is being dragged
/// and the absolute rotation of that knob's visual transform in radians
/// (any real value; not pre-normalized).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSample {
    /// The knob under the drag.
    pub knob: Knob,
    /// Absolute rotation of the knob's transform.
    pub angle_radians: f64,
}

/// Error returned by [`RotationTracker::sample`].
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// `sample` was called with no gesture in progress.
    #[error("no active gesture; call begin_gesture first")]
    NoActiveGesture,
}

/// State carried across the samples of one knob drag.
#[derive(Debug, Clone, Copy)]
struct Gesture {
    /// Biased degree reading from the previous sample; `0.0` at gesture start.
    last_degree: f64,
}

/// Classifies a stream of absolute angle readings into rotation directions.
///
/// This is an order-dependent hysteresis filter, not a stateless sign-of-
/// angular-velocity computation: every classification compares against the
/// reading stored by the previous call. A gesture must be explicitly opened
/// with [`begin_gesture`] before sampling and closed with [`end_gesture`];
/// sampling outside a gesture is a usage error and is rejected.
///
/// [`begin_gesture`]: RotationTracker::begin_gesture
/// [`end_gesture`]: RotationTracker::end_gesture
#[derive(Debug, Clone, Default)]
pub struct RotationTracker {
    gesture: Option<Gesture>,
}

impl RotationTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a gesture at drag-start, resetting the stored reading to `0.0`.
    /// A gesture already in progress is discarded.
    pub fn begin_gesture(&mut self) {
        self.gesture = Some(Gesture { last_degree: 0.0 });
    }

    /// Close the gesture at drag-end. Idempotent.
    pub fn end_gesture(&mut self) {
        self.gesture = None;
    }

    /// Whether a gesture is currently open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Classify one drag-move reading.
    ///
    /// The reading is normalized to degrees, biased by [`DEGREE_BIAS`], and
    /// compared against the previous sample's stored value. Two wraparound
    /// corrections handle a knob turned fast enough to cross the 0/360
    /// boundary between samples:
    ///
    /// - previous `> 300` and current `< 50`: a clockwise turn wrapped past
    ///   360; the comparison baseline drops to `0.0` so the sample still
    ///   classifies clockwise.
    /// - previous `< 100` and current `> 300`: a counter-clockwise turn
    ///   wrapped past 0; the baseline is forced above the current reading so
    ///   the sample classifies counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NoActiveGesture`] if no gesture is open.
    pub fn sample(&mut self, angle_radians: f64) -> Result<Direction, TrackerError> {
        let gesture = self.gesture.as_mut().ok_or(TrackerError::NoActiveGesture)?;

        let degree = normalize_degrees(angle_radians) + DEGREE_BIAS;

        // Fast clockwise turn wrapped past 360 between samples.
        if gesture.last_degree > CW_WRAP_HIGH && degree < CW_WRAP_LOW {
            gesture.last_degree = 0.0;
        }

        // Fast counter-clockwise turn wrapped past 0 between samples.
        if gesture.last_degree < CCW_WRAP_LOW && degree > CCW_WRAP_HIGH {
            gesture.last_degree = degree + 1.0;
        }

        let direction = if gesture.last_degree <= degree {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        gesture.last_degree = degree;
        Ok(direction)
    }
}

/// Convert an absolute angle to degrees, adding a full turn to non-positive
/// readings. An angle of exactly `0.0` radians therefore reads as `360.0`,
/// not `0.0`; a first sample at angle zero classifies clockwise.
fn normalize_degrees(angle_radians: f64) -> f64 {
    let degrees = angle_radians.to_degrees();
    if degrees <= 0.0 { degrees + 360.0 } else { degrees }
}
