//! Per-shape style settings consumed by the rasterizers.
//!
//! Each shape kind has its own extra: [`RectangleExtra`], [`TextExtra`] and
//! [`LineExtra`]. They are plain values: the `with_*` methods return a
//! modified copy and never touch catalog entries.
//!
//! A feature can be disabled while still remembering the style the user
//! picked for it, so re-enabling restores the previous choice. The
//! rasterizers only see the effective style through accessors such as
//! [`RectangleExtra::stroke_style`], which return `None` for disabled
//! features.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    crossing::LineWeight,
    drawable::Drawable,
    style::{AnchorChar, Catalog, CornerPattern, DashPattern, FillStyle, StrokeStyle},
};

fn default_stroke() -> StrokeStyle {
    Catalog::builtin()
        .stroke("S1")
        .copied()
        .unwrap_or_else(|| StrokeStyle::from_weight("S1", "Thin", LineWeight::Light))
}

fn default_fill() -> FillStyle {
    Catalog::builtin()
        .fill("F1")
        .cloned()
        .unwrap_or_else(|| FillStyle::new("F1", "Blank", Drawable::Char(' ')))
}

fn default_anchor() -> AnchorChar {
    Catalog::builtin()
        .anchor("A1")
        .copied()
        .unwrap_or_else(|| AnchorChar::directional("A1", "Arrow", '◀', '▶', '▲', '▼'))
}

/// Resolves a user-selected stroke style under a corner pattern
fn effective_stroke(style: &StrokeStyle, corner: CornerPattern) -> StrokeStyle {
    Catalog::builtin()
        .stroke_with_corner(style.id(), corner)
        .copied()
        .unwrap_or(*style)
}

/// Style settings of a rectangle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectangleExtra {
    fill_enabled: bool,
    fill_style: FillStyle,
    border_enabled: bool,
    border_style: StrokeStyle,
    dash: DashPattern,
    corner: CornerPattern,
}

impl Default for RectangleExtra {
    /// A thin solid border with sharp corners and no fill
    fn default() -> Self {
        Self {
            fill_enabled: false,
            fill_style: default_fill(),
            border_enabled: true,
            border_style: default_stroke(),
            dash: DashPattern::SOLID,
            corner: CornerPattern::Sharp,
        }
    }
}

impl RectangleExtra {
    pub fn is_fill_enabled(&self) -> bool {
        self.fill_enabled
    }

    pub fn is_border_enabled(&self) -> bool {
        self.border_enabled
    }

    pub fn dash(&self) -> DashPattern {
        self.dash
    }

    pub fn corner(&self) -> CornerPattern {
        self.corner
    }

    /// Returns the fill to paint, or `None` when fill is disabled
    pub fn fill_style(&self) -> Option<&FillStyle> {
        self.fill_enabled.then_some(&self.fill_style)
    }

    /// Returns the border stroke with the corner pattern applied, or `None`
    /// when the border is disabled
    pub fn stroke_style(&self) -> Option<StrokeStyle> {
        self.border_enabled
            .then(|| effective_stroke(&self.border_style, self.corner))
    }

    pub fn with_fill_enabled(self, fill_enabled: bool) -> Self {
        Self {
            fill_enabled,
            ..self
        }
    }

    pub fn with_fill_style(self, fill_style: FillStyle) -> Self {
        Self { fill_style, ..self }
    }

    pub fn with_border_enabled(self, border_enabled: bool) -> Self {
        Self {
            border_enabled,
            ..self
        }
    }

    pub fn with_border_style(self, border_style: StrokeStyle) -> Self {
        Self {
            border_style,
            ..self
        }
    }

    pub fn with_dash(self, dash: DashPattern) -> Self {
        Self { dash, ..self }
    }

    pub fn with_corner(self, corner: CornerPattern) -> Self {
        Self { corner, ..self }
    }
}

/// Horizontal placement of text lines inside a text box
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl FromStr for HorizontalAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(format!(
                "invalid horizontal alignment `{s}`, valid values: left, center, right"
            )),
        }
    }
}

impl fmt::Display for HorizontalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

/// Vertical placement of text lines inside a text box
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl FromStr for VerticalAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            _ => Err(format!(
                "invalid vertical alignment `{s}`, valid values: top, middle, bottom"
            )),
        }
    }
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        })
    }
}

/// Style settings of a text box: its bounding rectangle plus alignment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextExtra {
    bound: RectangleExtra,
    horizontal_align: HorizontalAlign,
    vertical_align: VerticalAlign,
}

impl TextExtra {
    pub fn new(
        bound: RectangleExtra,
        horizontal_align: HorizontalAlign,
        vertical_align: VerticalAlign,
    ) -> Self {
        Self {
            bound,
            horizontal_align,
            vertical_align,
        }
    }

    pub fn bound(&self) -> &RectangleExtra {
        &self.bound
    }

    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.horizontal_align
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical_align
    }

    pub fn with_bound(self, bound: RectangleExtra) -> Self {
        Self { bound, ..self }
    }

    pub fn with_horizontal_align(self, horizontal_align: HorizontalAlign) -> Self {
        Self {
            horizontal_align,
            ..self
        }
    }

    pub fn with_vertical_align(self, vertical_align: VerticalAlign) -> Self {
        Self {
            vertical_align,
            ..self
        }
    }
}

/// Style settings of a polyline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineExtra {
    stroke_enabled: bool,
    stroke_style: StrokeStyle,
    start_anchor_enabled: bool,
    start_anchor: AnchorChar,
    end_anchor_enabled: bool,
    end_anchor: AnchorChar,
    dash: DashPattern,
    rounded_corner: bool,
}

impl Default for LineExtra {
    /// A thin solid line without anchors
    fn default() -> Self {
        Self {
            stroke_enabled: true,
            stroke_style: default_stroke(),
            start_anchor_enabled: false,
            start_anchor: default_anchor(),
            end_anchor_enabled: false,
            end_anchor: default_anchor(),
            dash: DashPattern::SOLID,
            rounded_corner: false,
        }
    }
}

impl LineExtra {
    pub fn is_stroke_enabled(&self) -> bool {
        self.stroke_enabled
    }

    pub fn dash(&self) -> DashPattern {
        self.dash
    }

    pub fn is_rounded_corner(&self) -> bool {
        self.rounded_corner
    }

    /// Returns the stroke with rounded elbows applied, or `None` when the
    /// stroke is disabled
    pub fn stroke_style(&self) -> Option<StrokeStyle> {
        let corner = if self.rounded_corner {
            CornerPattern::Rounded
        } else {
            CornerPattern::Sharp
        };
        self.stroke_enabled
            .then(|| effective_stroke(&self.stroke_style, corner))
    }

    /// Returns the start anchor, or `None` when it is disabled
    pub fn start_anchor(&self) -> Option<&AnchorChar> {
        self.start_anchor_enabled.then_some(&self.start_anchor)
    }

    /// Returns the end anchor, or `None` when it is disabled
    pub fn end_anchor(&self) -> Option<&AnchorChar> {
        self.end_anchor_enabled.then_some(&self.end_anchor)
    }

    pub fn with_stroke_enabled(self, stroke_enabled: bool) -> Self {
        Self {
            stroke_enabled,
            ..self
        }
    }

    pub fn with_stroke_style(self, stroke_style: StrokeStyle) -> Self {
        Self {
            stroke_style,
            ..self
        }
    }

    /// Sets the start anchor; `None` disables it and keeps the last choice
    pub fn with_start_anchor(self, anchor: Option<AnchorChar>) -> Self {
        Self {
            start_anchor_enabled: anchor.is_some(),
            start_anchor: anchor.unwrap_or(self.start_anchor),
            ..self
        }
    }

    /// Sets the end anchor; `None` disables it and keeps the last choice
    pub fn with_end_anchor(self, anchor: Option<AnchorChar>) -> Self {
        Self {
            end_anchor_enabled: anchor.is_some(),
            end_anchor: anchor.unwrap_or(self.end_anchor),
            ..self
        }
    }

    pub fn with_dash(self, dash: DashPattern) -> Self {
        Self { dash, ..self }
    }

    pub fn with_rounded_corner(self, rounded_corner: bool) -> Self {
        Self {
            rounded_corner,
            ..self
        }
    }
}
