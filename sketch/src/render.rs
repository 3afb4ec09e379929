//! Rasterizer: draws the stroke document into a grayscale pixel buffer.
//!
//! This module receives a read-only view of document state and produces
//! pixels — it does not mutate any application state. Overlay items are not
//! rendered; the host composes those itself. [`Bitmap::for_upload`]
//! reproduces the preprocessing the translation service expects: resample to
//! a fixed square and invert to white-on-black.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::UPLOAD_EDGE_PX;
use crate::doc::{Segment, StrokeDoc};

/// Background (paper) value.
const BG: u8 = 0xFF;

/// Stroke (ink) value.
const INK: u8 = 0x00;

/// An 8-bit grayscale pixel buffer, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height` bytes, one per pixel.
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// An all-background buffer.
    #[must_use]
    pub fn blank(width: u32, height: u32) -> Self {
        Self { width, height, pixels: vec![BG; (width as usize) * (height as usize)] }
    }

    /// Value at `(x, y)`. Out-of-range coordinates read as background.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return BG;
        }
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Write `value` at `(x, y)`; coordinates outside the buffer are ignored.
    fn put(&mut self, x: i64, y: i64, value: u8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        #[allow(clippy::cast_sign_loss)]
        let offset = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[offset] = value;
    }

    /// Invert every pixel in place.
    pub fn invert(&mut self) {
        for px in &mut self.pixels {
            *px = !*px;
        }
    }

    /// Nearest-neighbor resample to `width × height`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn resized(&self, width: u32, height: u32) -> Bitmap {
        let mut out = Bitmap::blank(width, height);
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..height {
            let src_y = (u64::from(y) * u64::from(self.height) / u64::from(height)) as u32;
            for x in 0..width {
                let src_x = (u64::from(x) * u64::from(self.width) / u64::from(width)) as u32;
                let value = self.get(src_x, src_y);
                out.put(i64::from(x), i64::from(y), value);
            }
        }
        out
    }

    /// The square snapshot the submit collaborator expects: resampled to
    /// [`UPLOAD_EDGE_PX`] on a side and inverted to white-on-black.
    #[must_use]
    pub fn for_upload(&self) -> Bitmap {
        let mut out = self.resized(UPLOAD_EDGE_PX, UPLOAD_EDGE_PX);
        out.invert();
        out
    }
}

/// Render every stroke in `doc` onto a blank `width × height` buffer, with
/// document coordinates scaled to pixel space.
#[must_use]
pub fn rasterize(doc: &StrokeDoc, width: u32, height: u32) -> Bitmap {
    let mut bmp = Bitmap::blank(width, height);
    if width == 0 || height == 0 {
        return bmp;
    }

    let bounds = doc.bounds();
    let sx = if bounds.width > 0.0 { f64::from(width - 1) / bounds.width } else { 0.0 };
    let sy = if bounds.height > 0.0 { f64::from(height - 1) / bounds.height } else { 0.0 };

    for segment in doc.segments() {
        draw_segment(&mut bmp, segment, bounds.x, bounds.y, sx, sy);
    }
    bmp
}

fn draw_segment(bmp: &mut Bitmap, segment: &Segment, ox: f64, oy: f64, sx: f64, sy: f64) {
    #[allow(clippy::cast_possible_truncation)]
    let to_px = |v: f64| v.round() as i64;
    let x0 = to_px((segment.from.x - ox) * sx);
    let y0 = to_px((segment.from.y - oy) * sy);
    let x1 = to_px((segment.to.x - ox) * sx);
    let y1 = to_px((segment.to.y - oy) * sy);
    draw_line(bmp, x0, y0, x1, y1);
}

/// Bresenham line between two pixel coordinates, endpoints inclusive.
fn draw_line(bmp: &mut Bitmap, x0: i64, y0: i64, x1: i64, y1: i64) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        bmp.put(x, y, INK);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += step_x;
        }
        if e2 <= dx {
            err += dx;
            y += step_y;
        }
    }
}
