//! Style resolution.
//!
//! Turns the style fields of a [`ShapeDescription`] into the per-shape extras
//! the rasterizers consume. Identifiers are looked up in the built-in
//! [`Catalog`]; an identifier the catalog does not know disables the feature
//! it selects and logs a warning instead of failing the render.

use log::warn;

use gridsketch_core::style::{
    AnchorChar, Catalog, CornerPattern, DashPattern, LineExtra, NO_ANCHOR_ID, RectangleExtra,
    TextExtra,
};

use crate::{
    config::AppConfig,
    shape::{DashSpec, ShapeDescription},
};

/// Resolves descriptions against a catalog and the configured defaults
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolver<'a> {
    catalog: &'a Catalog,
    config: &'a AppConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a AppConfig) -> Self {
        Self { catalog, config }
    }

    /// Returns the border and fill settings of a rectangle or text box.
    ///
    /// The border is on unless the description turns it off; the fill is off
    /// unless the description turns it on.
    pub fn rectangle_extra(&self, shape: &ShapeDescription) -> RectangleExtra {
        let mut extra = RectangleExtra::default()
            .with_border_enabled(shape.border.as_ref().is_none_or(|border| border.enabled))
            .with_fill_enabled(shape.fill.as_ref().is_some_and(|fill| fill.enabled))
            .with_dash(dash_pattern(shape.dash))
            .with_corner(
                shape
                    .border
                    .as_ref()
                    .and_then(|border| border.corner)
                    .unwrap_or(CornerPattern::Sharp),
            );

        if extra.is_border_enabled() {
            let id = shape
                .border
                .as_ref()
                .and_then(|border| border.style.as_deref())
                .unwrap_or(self.config.style().stroke());
            match self.catalog.stroke(id) {
                Some(style) => extra = extra.with_border_style(*style),
                None => {
                    warn!(id; "Unknown border style, drawing no border");
                    extra = extra.with_border_enabled(false);
                }
            }
        }

        if extra.is_fill_enabled() {
            let id = shape
                .fill
                .as_ref()
                .and_then(|fill| fill.style.as_deref())
                .unwrap_or(self.config.style().fill());
            match self.catalog.fill(id) {
                Some(style) => extra = extra.with_fill_style(style.clone()),
                None => {
                    warn!(id; "Unknown fill style, drawing no fill");
                    extra = extra.with_fill_enabled(false);
                }
            }
        }

        extra
    }

    /// Returns the settings of a text box, with alignment falling back to the
    /// configured defaults
    pub fn text_extra(&self, shape: &ShapeDescription) -> TextExtra {
        TextExtra::new(
            self.rectangle_extra(shape),
            shape
                .horizontal_align
                .unwrap_or(self.config.text().horizontal_align()),
            shape
                .vertical_align
                .unwrap_or(self.config.text().vertical_align()),
        )
    }

    /// Returns the settings of a line
    pub fn line_extra(&self, shape: &ShapeDescription) -> LineExtra {
        let mut extra = LineExtra::default()
            .with_stroke_enabled(shape.stroke.as_ref().is_none_or(|stroke| stroke.enabled))
            .with_dash(dash_pattern(shape.dash))
            .with_start_anchor(self.anchor(shape.start_anchor.as_deref()))
            .with_end_anchor(self.anchor(shape.end_anchor.as_deref()));

        if extra.is_stroke_enabled() {
            let id = shape
                .stroke
                .as_ref()
                .and_then(|stroke| stroke.style.as_deref())
                .unwrap_or(self.config.style().stroke());
            match self.catalog.stroke(id) {
                Some(style) if style.is_hollow() => extra = extra.with_stroke_enabled(false),
                Some(style) => extra = extra.with_stroke_style(*style),
                None => {
                    warn!(id; "Unknown stroke style, drawing no stroke");
                    extra = extra.with_stroke_enabled(false);
                }
            }
        }

        extra
    }

    /// Looks up an anchor; absent and `"none"` both mean no anchor
    fn anchor(&self, id: Option<&str>) -> Option<AnchorChar> {
        let id = id.filter(|id| *id != NO_ANCHOR_ID)?;
        let anchor = self.catalog.anchor(id).copied();
        if anchor.is_none() {
            warn!(id; "Unknown anchor, drawing no anchor");
        }
        anchor
    }
}

fn dash_pattern(dash: Option<DashSpec>) -> DashPattern {
    dash.map_or(DashPattern::SOLID, |dash| {
        DashPattern::new(dash.dash, dash.gap, dash.offset.unwrap_or(0))
    })
}
