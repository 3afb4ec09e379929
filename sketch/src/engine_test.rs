#![allow(clippy::float_cmp)]

use super::*;
use crate::geom::Point;

fn engine() -> SketchEngine {
    SketchEngine::with_magnitude(Rect::new(0.0, 0.0, 100.0, 100.0), 5.0)
}

/// A drag-move sample for `knob`, angle given in degrees.
fn sample(knob: Knob, degrees: f64) -> RotationSample {
    RotationSample { knob, angle_radians: degrees.to_radians() }
}

// =============================================================
// Drag lifecycle
// =============================================================

#[test]
fn drag_move_without_start_is_rejected() {
    let mut engine = engine();
    let result = engine.on_drag_move(sample(Knob::Left, 30.0));
    assert!(matches!(result, Err(EngineError::NoActiveDrag)));
}

#[test]
fn drag_move_after_end_is_rejected() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Left);
    engine.on_drag_end();
    let result = engine.on_drag_move(sample(Knob::Left, 30.0));
    assert!(matches!(result, Err(EngineError::NoActiveDrag)));
}

#[test]
fn sample_for_the_wrong_knob_is_rejected() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Left);
    let result = engine.on_drag_move(sample(Knob::Right, 30.0));
    assert!(matches!(
        result,
        Err(EngineError::KnobMismatch { active: Knob::Left, got: Knob::Right })
    ));
}

#[test]
fn drag_end_is_idempotent() {
    let mut engine = engine();
    engine.on_drag_end();
    engine.on_drag_start(Knob::Right);
    engine.on_drag_end();
    engine.on_drag_end();
    assert!(engine.active_knob().is_none());
}

#[test]
fn second_drag_start_replaces_the_gesture() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Left);
    engine.on_drag_move(sample(Knob::Left, 200.0)).unwrap();

    // Re-anchoring on the right knob resets the tracker baseline, so the
    // first sample of the new gesture classifies clockwise again.
    engine.on_drag_start(Knob::Right);
    assert_eq!(engine.active_knob(), Some(Knob::Right));
    let action = engine.on_drag_move(sample(Knob::Right, 100.0)).unwrap();
    assert_eq!(
        action,
        Action::SegmentAdded(Segment {
            from: Point::new(50.0, 45.0),
            to: Point::new(55.0, 45.0),
        })
    );
}

// =============================================================
// Knob → axis mapping
// =============================================================

#[test]
fn left_knob_clockwise_moves_the_pen_up() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Left);
    let action = engine.on_drag_move(sample(Knob::Left, 30.0)).unwrap();
    assert_eq!(
        action,
        Action::SegmentAdded(Segment {
            from: Point::new(50.0, 50.0),
            to: Point::new(50.0, 45.0),
        })
    );
}

#[test]
fn left_knob_counter_clockwise_moves_the_pen_down() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Left);
    engine.on_drag_move(sample(Knob::Left, 90.0)).unwrap();
    let action = engine.on_drag_move(sample(Knob::Left, 60.0)).unwrap();
    assert_eq!(
        action,
        Action::SegmentAdded(Segment {
            from: Point::new(50.0, 45.0),
            to: Point::new(50.0, 50.0),
        })
    );
}

#[test]
fn right_knob_clockwise_moves_the_pen_right() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Right);
    let action = engine.on_drag_move(sample(Knob::Right, 30.0)).unwrap();
    assert_eq!(
        action,
        Action::SegmentAdded(Segment {
            from: Point::new(50.0, 50.0),
            to: Point::new(55.0, 50.0),
        })
    );
}

#[test]
fn right_knob_counter_clockwise_moves_the_pen_left() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Right);
    engine.on_drag_move(sample(Knob::Right, 90.0)).unwrap();
    let action = engine.on_drag_move(sample(Knob::Right, 60.0)).unwrap();
    assert_eq!(
        action,
        Action::SegmentAdded(Segment {
            from: Point::new(55.0, 50.0),
            to: Point::new(50.0, 50.0),
        })
    );
}

// =============================================================
// Pen blocking
// =============================================================

#[test]
fn pen_blocked_at_the_surface_edge() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Left);
    // Ten clockwise steps of 5 reach y = 0; every sample increases the
    // reading so each classifies clockwise.
    for i in 1..=10 {
        let degrees = 10.0 * f64::from(i);
        let action = engine.on_drag_move(sample(Knob::Left, degrees)).unwrap();
        assert!(matches!(action, Action::SegmentAdded(_)), "step {i}");
    }
    assert_eq!(engine.doc().cursor(), Some(Point::new(50.0, 0.0)));

    let action = engine.on_drag_move(sample(Knob::Left, 110.0)).unwrap();
    assert_eq!(action, Action::PenBlocked);
    assert_eq!(engine.doc().cursor(), Some(Point::new(50.0, 0.0)));
    assert_eq!(engine.doc().stroke_count(), 10);
}

// =============================================================
// Clear and configuration
// =============================================================

#[test]
fn clear_wipes_the_document() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Left);
    engine.on_drag_move(sample(Knob::Left, 30.0)).unwrap();
    engine.on_drag_end();

    assert_eq!(engine.clear(), Action::Cleared);
    assert!(engine.doc().is_empty());
    assert!(engine.doc().cursor().is_none());
}

#[test]
fn clear_does_not_disturb_an_active_drag() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Left);
    engine.on_drag_move(sample(Knob::Left, 30.0)).unwrap();
    engine.clear();

    // Still mid-drag: the next sample steps from a fresh center seed.
    let action = engine.on_drag_move(sample(Knob::Left, 60.0)).unwrap();
    assert_eq!(
        action,
        Action::SegmentAdded(Segment {
            from: Point::new(50.0, 50.0),
            to: Point::new(50.0, 45.0),
        })
    );
}

#[test]
fn magnitude_is_host_configurable() {
    let mut engine = SketchEngine::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(engine.magnitude(), crate::consts::FINE_STEP);

    engine.set_magnitude(crate::consts::COARSE_STEP);
    engine.on_drag_start(Knob::Right);
    engine.on_drag_move(sample(Knob::Right, 30.0)).unwrap();
    assert_eq!(engine.doc().cursor(), Some(Point::new(55.0, 50.0)));
}

#[test]
fn snapshot_matches_document_size() {
    let mut engine = engine();
    engine.on_drag_start(Knob::Right);
    engine.on_drag_move(sample(Knob::Right, 30.0)).unwrap();
    let bmp = engine.snapshot(101, 101);
    assert_eq!(bmp.width, 101);
    assert_eq!(bmp.height, 101);
    // The stroke from (50,50) to (55,50) inks the center row.
    assert_eq!(bmp.get(50, 50), 0x00);
    assert_eq!(bmp.get(55, 50), 0x00);
    assert_eq!(bmp.get(0, 0), 0xFF);
}

// =============================================================
// Errors
// =============================================================

#[test]
fn engine_errors_have_actionable_messages() {
    assert!(EngineError::NoActiveDrag.to_string().contains("on_drag_start"));
    let msg = EngineError::KnobMismatch { active: Knob::Left, got: Knob::Right }.to_string();
    assert!(msg.contains("Left"));
    assert!(msg.contains("Right"));
}
