//! Stroke document: tagged surface items and the bounded pen cursor.
//!
//! This module defines what is on the drawing surface (`CanvasItem`,
//! `ItemKind`) and the runtime store that owns it (`StrokeDoc`). Data flows
//! into this layer from the engine's drag handlers (pen steps) and from the
//! host's overlay/clear controls. The rasterizer reads from `StrokeDoc` via
//! [`StrokeDoc::segments`] in insertion order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{Point, Rect};
use crate::input::Direction;

/// Unique identifier for a surface item.
pub type ItemId = Uuid;

/// Which axis a knob twist moves the pen along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Up/down travel; driven by the left knob.
    Vertical,
    /// Left/right travel; driven by the right knob.
    Horizontal,
}

/// A single recorded pen stroke. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Pen position before the step.
    pub from: Point,
    /// Pen position after the step.
    pub to: Point,
}

/// What a surface item is.
///
/// The tag is what lets [`StrokeDoc::clear_strokes`] bulk-remove drawn lines
/// while leaving other surface content in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A drawing stroke.
    Stroke(Segment),
    /// A stock image placed under the drawing; `name` identifies the asset.
    Overlay {
        /// Host-side asset name, e.g. `"cats3"`.
        name: String,
    },
}

/// An item on the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Stroke or overlay payload.
    pub kind: ItemKind,
}

/// The in-memory drawing: surface bounds, pen cursor, and accumulated items.
///
/// The cursor starts unset and is seeded to the center of the bounds by the
/// first [`step`]. Every stroke in the store has both endpoints inside the
/// bounds at the time it was appended.
///
/// [`step`]: StrokeDoc::step
pub struct StrokeDoc {
    bounds: Rect,
    cursor: Option<Point>,
    items: Vec<CanvasItem>,
}

impl StrokeDoc {
    /// Create an empty document over the given drawing surface.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, cursor: None, items: Vec::new() }
    }

    /// The drawing surface rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Current pen position, or `None` before the first step (and after a clear).
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Move the pen one bounded step along `axis`.
    ///
    /// An unset cursor is first seeded to the center of the bounds (the
    /// seeding sticks even if the candidate below is then rejected). The
    /// candidate position is the cursor moved by `magnitude`:
    /// clockwise is up for [`Axis::Vertical`] and right for
    /// [`Axis::Horizontal`], counter-clockwise the opposite.
    ///
    /// Returns `true` and appends a stroke when the candidate stays inside
    /// the bounds (edges inclusive). A candidate past the edge is a silent
    /// no-op returning `false`: the pen holds its position and nothing is
    /// recorded. The pen is never clipped to the edge.
    pub fn step(&mut self, axis: Axis, direction: Direction, magnitude: f64) -> bool {
        self.try_step(axis, direction, magnitude).is_some()
    }

    /// [`step`](StrokeDoc::step), returning the appended stroke on success.
    pub fn try_step(
        &mut self,
        axis: Axis,
        direction: Direction,
        magnitude: f64,
    ) -> Option<Segment> {
        let cursor = match self.cursor {
            Some(pt) => pt,
            None => {
                let center = self.bounds.center();
                self.cursor = Some(center);
                center
            }
        };

        let candidate = match (axis, direction) {
            (Axis::Vertical, Direction::Clockwise) => Point::new(cursor.x, cursor.y - magnitude),
            (Axis::Vertical, Direction::CounterClockwise) => {
                Point::new(cursor.x, cursor.y + magnitude)
            }
            (Axis::Horizontal, Direction::Clockwise) => Point::new(cursor.x + magnitude, cursor.y),
            (Axis::Horizontal, Direction::CounterClockwise) => {
                Point::new(cursor.x - magnitude, cursor.y)
            }
        };

        if !self.bounds.contains(candidate) {
            return None;
        }

        let segment = Segment { from: cursor, to: candidate };
        self.items.push(CanvasItem { id: Uuid::new_v4(), kind: ItemKind::Stroke(segment) });
        self.cursor = Some(candidate);
        Some(segment)
    }

    /// All surface items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    /// The recorded strokes in insertion order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.items.iter().filter_map(|item| match &item.kind {
            ItemKind::Stroke(segment) => Some(segment),
            ItemKind::Overlay { .. } => None,
        })
    }

    /// The most recently appended stroke, if any.
    #[must_use]
    pub fn last_segment(&self) -> Option<Segment> {
        self.items.iter().rev().find_map(|item| match item.kind {
            ItemKind::Stroke(segment) => Some(segment),
            ItemKind::Overlay { .. } => None,
        })
    }

    /// Number of recorded strokes.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` if the surface holds no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Wipe the surface: remove every item and unset the cursor, so the next
    /// step reseeds from the center exactly like first use. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = None;
    }

    /// Remove only the drawn strokes, leaving overlay content in place.
    pub fn clear_strokes(&mut self) {
        self.items.retain(|item| matches!(item.kind, ItemKind::Overlay { .. }));
    }

    /// Place a stock-image overlay on the surface, replacing any existing one.
    /// Returns the new item's id.
    pub fn set_overlay(&mut self, name: impl Into<String>) -> ItemId {
        self.clear_overlay();
        let id = Uuid::new_v4();
        self.items.push(CanvasItem { id, kind: ItemKind::Overlay { name: name.into() } });
        id
    }

    /// Remove the overlay, if one is placed.
    pub fn clear_overlay(&mut self) {
        self.items.retain(|item| matches!(item.kind, ItemKind::Stroke(_)));
    }

    /// The placed overlay's asset name, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match &item.kind {
            ItemKind::Overlay { name } => Some(name.as_str()),
            ItemKind::Stroke(_) => None,
        })
    }
}
