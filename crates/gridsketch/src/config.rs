//! Configuration types for Gridsketch rendering.
//!
//! This module provides the settings used when a shape description leaves a
//! style unspecified. All types implement [`serde::Deserialize`] so they can
//! be loaded from external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and text settings.
//! - [`StyleConfig`] - Default stroke and fill style identifiers.
//! - [`TextConfig`] - Default alignment of text shapes.
//!
//! # Example
//!
//! ```
//! # use gridsketch::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().stroke(), "S1");
//! assert_eq!(config.style().fill(), "F1");
//! ```

use serde::Deserialize;

use gridsketch_core::style::{HorizontalAlign, VerticalAlign};

/// Top-level application configuration.
///
/// Groups [`StyleConfig`] and [`TextConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Text configuration section.
    #[serde(default)]
    text: TextConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and text configurations.
    ///
    /// # Arguments
    ///
    /// * `style` - Default style identifiers.
    /// * `text` - Default text alignment.
    pub fn new(style: StyleConfig, text: TextConfig) -> Self {
        Self { style, text }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the text configuration.
    pub fn text(&self) -> &TextConfig {
        &self.text
    }
}

fn default_stroke() -> String {
    "S1".to_string()
}

fn default_fill() -> String {
    "F1".to_string()
}

/// Style identifiers used when a shape enables a feature without naming a
/// style.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Stroke style for borders and lines.
    #[serde(default = "default_stroke")]
    stroke: String,

    /// Fill style for filled rectangles.
    #[serde(default = "default_fill")]
    fill: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke: default_stroke(),
            fill: default_fill(),
        }
    }
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    ///
    /// # Arguments
    ///
    /// * `stroke` - Default stroke style identifier.
    /// * `fill` - Default fill style identifier.
    pub fn new(stroke: impl Into<String>, fill: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
            fill: fill.into(),
        }
    }

    /// Returns the default stroke style identifier.
    pub fn stroke(&self) -> &str {
        &self.stroke
    }

    /// Returns the default fill style identifier.
    pub fn fill(&self) -> &str {
        &self.fill
    }
}

/// Alignment used when a text shape omits it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextConfig {
    #[serde(default)]
    horizontal_align: HorizontalAlign,

    #[serde(default)]
    vertical_align: VerticalAlign,
}

impl TextConfig {
    /// Creates a new [`TextConfig`].
    pub fn new(horizontal_align: HorizontalAlign, vertical_align: VerticalAlign) -> Self {
        Self {
            horizontal_align,
            vertical_align,
        }
    }

    /// Returns the default horizontal alignment.
    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.horizontal_align
    }

    /// Returns the default vertical alignment.
    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical_align
    }
}
