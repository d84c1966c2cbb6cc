//! Style definitions and the built-in catalog.
//!
//! # Overview
//!
//! - [`StrokeStyle`]: Glyphs for straight borders and lines
//! - [`FillStyle`] / [`BorderStyle`]: Drawable-backed fills and border frames
//! - [`AnchorChar`]: Line-end glyphs
//! - [`DashPattern`]: Periodic gaps along a stroke
//! - [`CornerPattern`]: Sharp or rounded corners
//! - [`Catalog`]: The read-only registry of every built-in style
//! - [`RectangleExtra`], [`TextExtra`], [`LineExtra`]: Per-shape settings

mod anchor;
mod catalog;
mod dash;
mod extra;
mod fill;
mod stroke;

pub use anchor::AnchorChar;
pub use catalog::{Catalog, NO_ANCHOR_ID, NO_BORDER_ID, NO_FILL_ID, NO_STROKE_ID};
pub use dash::DashPattern;
pub use extra::{HorizontalAlign, LineExtra, RectangleExtra, TextExtra, VerticalAlign};
pub use fill::{BorderStyle, FillStyle};
pub use stroke::{CornerPattern, StrokeStyle};
