//! Gridsketch - Render declarative shape descriptions as Unicode diagrams.
//!
//! Shapes (rectangles, text boxes, polylines and groups) are described as
//! plain data, rasterized one by one, and composited onto a character grid
//! where touching strokes merge into proper box-drawing junctions.

pub mod config;
pub mod listing;
pub mod session;
pub mod shape;
pub mod text;

mod error;
mod render;
mod resolve;

pub use gridsketch_core::{bitmap, board, geometry, raster, style};

pub use error::GridsketchError;
pub use render::RenderOptions;

use log::{debug, info, trace};

use gridsketch_core::style::Catalog;

use config::AppConfig;
use resolve::Resolver;
use shape::{Scene, ShapeDescription};

/// Builder for parsing and rendering Gridsketch scenes.
///
/// # Examples
///
/// ```
/// use gridsketch::{RenderOptions, SketchBuilder, config::AppConfig, shape::ShapeDescription};
///
/// let builder = SketchBuilder::new(AppConfig::default());
///
/// let shapes = [
///     ShapeDescription::rectangle(0, 0, 5, 3),
///     ShapeDescription::line([(5, 1), (8, 1)]),
/// ];
/// let text = builder.render(&shapes, RenderOptions::default());
/// assert_eq!(text, "┌───┐\n│   │────\n└───┘");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SketchBuilder {
    config: AppConfig,
}

impl SketchBuilder {
    /// Create a new sketch builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration with the default styles
    ///
    /// # Examples
    ///
    /// ```
    /// use gridsketch::{SketchBuilder, config::AppConfig};
    ///
    /// let builder = SketchBuilder::new(AppConfig::default());
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used for rendering.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON scene document.
    ///
    /// The document is either an array of shape descriptions or an object
    /// with a `shapes` array and optional `width` and `height`.
    ///
    /// # Arguments
    ///
    /// * `source` - The JSON text
    ///
    /// # Errors
    ///
    /// Returns [`GridsketchError::Json`] when the document is not valid JSON
    /// or does not describe a scene.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridsketch::SketchBuilder;
    ///
    /// let builder = SketchBuilder::default();
    /// let scene = builder
    ///     .parse_scene(r#"{"shapes": [{"type": "rectangle", "width": 3, "height": 2}]}"#)
    ///     .expect("Failed to parse scene");
    /// assert_eq!(builder.render_scene(&scene), "┌─┐\n└─┘");
    /// ```
    pub fn parse_scene(&self, source: &str) -> Result<Scene, GridsketchError> {
        info!("Parsing scene");
        let scene: Scene = serde_json::from_str(source)
            .map_err(|err| GridsketchError::new_json_error(err, source))?;
        debug!(shapes = scene.shapes().len(); "Scene parsed successfully");
        trace!(scene:?; "Parsed scene");
        Ok(scene)
    }

    /// Render a parsed scene with its own viewport extents.
    pub fn render_scene(&self, scene: &Scene) -> String {
        self.render(scene.shapes(), scene.options())
    }

    /// Render shapes to text.
    ///
    /// Shapes are drawn in order, later ones on top. Rendering never fails:
    /// unknown style identifiers fall back with a warning, and lines with
    /// fewer than two points draw nothing.
    ///
    /// # Arguments
    ///
    /// * `shapes` - The shapes to draw
    /// * `options` - Requested viewport extents
    pub fn render(&self, shapes: &[ShapeDescription], options: RenderOptions) -> String {
        info!(shapes = shapes.len(); "Rendering shapes");
        let resolver = Resolver::new(Catalog::builtin(), &self.config);
        let text = render::render_shapes(shapes, options, &resolver);
        info!(rows = text.lines().count(); "Shapes rendered successfully");
        text
    }
}
