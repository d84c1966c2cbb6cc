//! Gridsketch Core Types and Rasterizers
//!
//! This crate provides the building blocks for drawing diagrams out of
//! Unicode box-drawing characters. It includes:
//!
//! - **Geometry**: Integer cell coordinates and rectangles ([`geometry`] module)
//! - **Bitmaps**: Fixed-size grids of cells ([`bitmap::Bitmap`])
//! - **Crossings**: Junction glyph resolution ([`crossing`] module)
//! - **Drawables**: Uniform and nine-patch fills ([`drawable::Drawable`])
//! - **Styles**: The built-in stroke, fill, anchor and border catalog ([`style`] module)
//! - **Rasterizers**: Rectangle, text and line rasterization ([`raster`] module)
//! - **Board**: The compositing surface that merges shapes ([`board::Board`])

pub mod bitmap;
pub mod board;
pub mod crossing;
pub mod drawable;
pub mod geometry;
pub mod raster;
pub mod style;
