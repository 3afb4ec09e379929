//! Rotation-to-stroke drawing engine for the two-knob sketch toy.
//!
//! Twisting the left knob moves the pen vertically and the right knob moves
//! it horizontally; the *rotational direction* of the twist — not the raw
//! drag vector — decides which way the pen travels. This crate owns that
//! conversion end to end: classifying absolute angle readings into
//! clockwise/counter-clockwise events, stepping a bounded pen cursor, and
//! accumulating the resulting strokes. The host layer is responsible only
//! for capturing pointer input against its knob widgets, wiring drag events
//! to the engine, and processing the resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::SketchEngine`] facade |
//! | [`doc`] | Stroke document and the bounded pen cursor |
//! | [`geom`] | Points and the drawing-surface rectangle |
//! | [`input`] | Knob/direction types and the rotation hysteresis tracker |
//! | [`render`] | Grayscale rasterizer for snapshot export |
//! | [`consts`] | Shared numeric constants (bias, wrap thresholds, step sizes) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod input;
pub mod render;
