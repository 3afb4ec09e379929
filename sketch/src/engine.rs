//! Engine facade: ties the rotation tracker and the stroke document together.
//!
//! The host feeds raw drag lifecycle events in (`on_drag_start`,
//! `on_drag_move`, `on_drag_end`) and processes the returned [`Action`]s —
//! the engine never touches rendering or upload itself. Only one drag is
//! tracked at a time; the knob→axis mapping is fixed (left knob vertical,
//! right knob horizontal).

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts::FINE_STEP;
use crate::doc::{Axis, Segment, StrokeDoc};
use crate::geom::Rect;
use crate::input::{Knob, RotationSample, RotationTracker, TrackerError};
use crate::render::{Bitmap, rasterize};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing to do.
    None,
    /// A stroke was appended; the host should draw it.
    SegmentAdded(Segment),
    /// The step would leave the surface; the pen did not move.
    PenBlocked,
    /// The surface was wiped.
    Cleared,
}

/// Error returned by input handlers on out-of-order or mismatched events.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// `on_drag_move` arrived with no drag in progress.
    #[error("drag-move with no active drag; call on_drag_start first")]
    NoActiveDrag,
    /// The sample names a different knob than the one being dragged.
    #[error("sample for the {got:?} knob during a {active:?} knob drag")]
    KnobMismatch {
        /// The knob the active drag started on.
        active: Knob,
        /// The knob named by the offending sample.
        got: Knob,
    },
    /// The rotation tracker rejected the sample.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// Core engine state for one drawing session.
///
/// Owns the gesture tracker and the stroke document; single-threaded and
/// synchronous, driven directly from the host's input callbacks.
pub struct SketchEngine {
    tracker: RotationTracker,
    doc: StrokeDoc,
    magnitude: f64,
    active: Option<Knob>,
}

impl SketchEngine {
    /// Create an engine over the given drawing surface with the fine pen step.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self::with_magnitude(bounds, FINE_STEP)
    }

    /// Create an engine with a host-chosen pen step size.
    #[must_use]
    pub fn with_magnitude(bounds: Rect, magnitude: f64) -> Self {
        Self {
            tracker: RotationTracker::new(),
            doc: StrokeDoc::new(bounds),
            magnitude,
            active: None,
        }
    }

    // --- Input events ---

    /// Begin a drag on `knob`. A drag already in progress is replaced:
    /// single-touch hosts can lose the matching drag-end when a touch is
    /// cancelled, and the next touch re-anchors the gesture.
    pub fn on_drag_start(&mut self, knob: Knob) {
        self.active = Some(knob);
        self.tracker.begin_gesture();
    }

    /// Handle one drag-move reading: classify the rotation direction and
    /// step the pen along the dragged knob's axis.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoActiveDrag`] when no drag is in progress and
    /// [`EngineError::KnobMismatch`] when the sample names the wrong knob.
    pub fn on_drag_move(&mut self, sample: RotationSample) -> Result<Action, EngineError> {
        let active = self.active.ok_or(EngineError::NoActiveDrag)?;
        if sample.knob != active {
            return Err(EngineError::KnobMismatch { active, got: sample.knob });
        }

        let direction = self.tracker.sample(sample.angle_radians)?;
        let axis = match active {
            Knob::Left => Axis::Vertical,
            Knob::Right => Axis::Horizontal,
        };

        match self.doc.try_step(axis, direction, self.magnitude) {
            Some(segment) => Ok(Action::SegmentAdded(segment)),
            None => Ok(Action::PenBlocked),
        }
    }

    /// End the active drag. Idempotent; a stray drag-end is harmless.
    pub fn on_drag_end(&mut self) {
        self.active = None;
        self.tracker.end_gesture();
    }

    /// Wipe the surface. Single entry point for the clear button and the
    /// shake-to-clear gesture.
    pub fn clear(&mut self) -> Action {
        self.doc.clear();
        Action::Cleared
    }

    // --- Configuration ---

    /// Replace the per-sample pen step size.
    pub fn set_magnitude(&mut self, magnitude: f64) {
        self.magnitude = magnitude;
    }

    /// The per-sample pen step size.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    // --- Queries ---

    /// The stroke document, for renderers and exporters.
    #[must_use]
    pub fn doc(&self) -> &StrokeDoc {
        &self.doc
    }

    /// Mutable access to the document for host overlay controls.
    pub fn doc_mut(&mut self) -> &mut StrokeDoc {
        &mut self.doc
    }

    /// The knob under the active drag, if any.
    #[must_use]
    pub fn active_knob(&self) -> Option<Knob> {
        self.active
    }

    /// Rasterize the current drawing at the given pixel size.
    #[must_use]
    pub fn snapshot(&self, width: u32, height: u32) -> Bitmap {
        rasterize(&self.doc, width, height)
    }
}
