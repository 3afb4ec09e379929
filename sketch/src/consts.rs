//! Shared numeric constants for the sketch crate.

// ── Rotation hysteresis ─────────────────────────────────────────

/// Bias in degrees added to every normalized angle reading. A tie between
/// the previous and current reading classifies as clockwise, and readings
/// near the wraparound boundary get slack against floating-point jitter.
pub const DEGREE_BIAS: f64 = 0.5;

/// A previous reading above this, with the current reading below
/// [`CW_WRAP_LOW`], is a fast clockwise turn that wrapped past 360.
pub const CW_WRAP_HIGH: f64 = 300.0;

/// Upper bound on the current reading for the fast-clockwise-wrap case.
pub const CW_WRAP_LOW: f64 = 50.0;

/// A previous reading below this, with the current reading above
/// [`CCW_WRAP_HIGH`], is a fast counter-clockwise turn that wrapped past 0.
pub const CCW_WRAP_LOW: f64 = 100.0;

/// Lower bound on the current reading for the fast-counter-clockwise-wrap case.
pub const CCW_WRAP_HIGH: f64 = 300.0;

// ── Pen ─────────────────────────────────────────────────────────

/// Pen travel per sample, in surface units, for fine control.
pub const FINE_STEP: f64 = 1.0;

/// Pen travel per sample, in surface units, for a faster response.
pub const COARSE_STEP: f64 = 5.0;

// ── Export ──────────────────────────────────────────────────────

/// Edge length in pixels of the square snapshot the translation service accepts.
pub const UPLOAD_EDGE_PX: u32 = 256;
