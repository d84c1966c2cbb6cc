//! Shape rasterizers.
//!
//! Each rasterizer turns one shape's geometry and style extra into a
//! [`Bitmap`]:
//!
//! - [`rectangle::rectangle_bitmap`]: Fill plus a single-traversal border
//! - [`text::text_bitmap`]: A rectangle with aligned text lines inside
//! - [`line::line_bitmap`]: An axis-aligned polyline with anchors
//!
//! Rectangles and text boxes are drawn at the origin and positioned by the
//! caller. Lines are given absolute points, so the line rasterizer returns a
//! [`PositionedBitmap`] anchored at the top-left of the path's bounding box.

pub mod line;
pub mod rectangle;
pub mod text;

use crate::{
    bitmap::Bitmap,
    geometry::{Point, Rect},
};

/// A bitmap together with the absolute position of its top-left cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedBitmap {
    position: Point,
    bitmap: Bitmap,
}

impl PositionedBitmap {
    pub fn new(position: Point, bitmap: Bitmap) -> Self {
        Self { position, bitmap }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Returns the absolute cells covered by the bitmap
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.bitmap.size())
    }
}
