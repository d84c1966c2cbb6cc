//! A printable summary of the style catalog.
//!
//! [`StyleListing`] collects every user-selectable stroke, fill, anchor and
//! border with its glyphs. It serializes to JSON for tools and implements
//! [`Display`](fmt::Display) as a plain text table for people.

use std::fmt;

use serde::Serialize;

use gridsketch_core::{
    bitmap::Bitmap,
    geometry::{Direction, Size},
    raster::rectangle::rectangle_bitmap,
    style::{Catalog, CornerPattern, RectangleExtra, StrokeStyle},
};

/// Size of the previews drawn for strokes and borders
const PREVIEW: Size = Size::new(5, 3);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeCorners {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub horizontal: char,
    pub vertical: char,
    pub corners: StrokeCorners,
    /// Identifier of the style used for rounded corners, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounded: Option<&'static str>,
    /// Identifier of the style this one rounds the corners of, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounded_of: Option<&'static str>,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub sample: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub left: char,
    pub right: char,
    pub top: char,
    pub bottom: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorderEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub preview: String,
}

impl StrokeEntry {
    fn new(stroke: &StrokeStyle, preview: String) -> Self {
        Self {
            id: stroke.id(),
            name: stroke.name(),
            horizontal: stroke.horizontal(),
            vertical: stroke.vertical(),
            corners: StrokeCorners {
                top_left: stroke.up_right(),
                top_right: stroke.down_left(),
                bottom_left: stroke.down_right(),
                bottom_right: stroke.up_left(),
            },
            rounded: None,
            rounded_of: None,
            preview,
        }
    }

    fn with_rounded(self, rounded: Option<&'static str>) -> Self {
        Self { rounded, ..self }
    }

    fn with_rounded_of(self, rounded_of: Option<&'static str>) -> Self {
        Self { rounded_of, ..self }
    }
}

/// Draws a preview rectangle bordered with `stroke`
fn stroke_preview(stroke: &StrokeStyle) -> Bitmap {
    rectangle_bitmap(PREVIEW, &RectangleExtra::default().with_border_style(*stroke))
}

/// Every user-selectable style in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleListing {
    pub stroke_styles: Vec<StrokeEntry>,
    pub fill_styles: Vec<FillEntry>,
    pub anchor_chars: Vec<AnchorEntry>,
    pub border_styles: Vec<BorderEntry>,
}

impl StyleListing {
    /// Builds the listing of `catalog`.
    ///
    /// Stroke previews come from the border pattern of the same weight when
    /// the catalog has one, and from the rectangle rasterizer otherwise.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut stroke_styles = Vec::new();
        let mut rounded_styles = Vec::new();
        for stroke in catalog.predefined_strokes() {
            let rounded = catalog
                .is_corner_roundable(stroke.id())
                .then(|| catalog.stroke_with_corner(stroke.id(), CornerPattern::Rounded))
                .flatten();
            let preview = match catalog.border_for_stroke(stroke) {
                Some(border) => border.to_bitmap(PREVIEW.width(), PREVIEW.height()),
                None => stroke_preview(stroke),
            };
            stroke_styles.push(StrokeEntry::new(stroke, preview.to_string()).with_rounded(
                rounded.map(StrokeStyle::id),
            ));
            if let Some(rounded) = rounded {
                let entry = StrokeEntry::new(rounded, stroke_preview(rounded).to_string())
                    .with_rounded_of(Some(stroke.id()));
                rounded_styles.push(entry);
            }
        }
        // rounded variants are only reachable by ID or the rounded corner switch
        stroke_styles.extend(rounded_styles);

        let fill_styles = catalog
            .predefined_fills()
            .map(|fill| FillEntry {
                id: fill.id(),
                name: fill.name(),
                sample: fill.to_bitmap(3, 1).to_string(),
            })
            .collect();

        let anchor_chars = catalog
            .anchors()
            .map(|anchor| AnchorEntry {
                id: anchor.id(),
                name: anchor.name(),
                left: anchor.glyph(Direction::Left),
                right: anchor.glyph(Direction::Right),
                top: anchor.glyph(Direction::Up),
                bottom: anchor.glyph(Direction::Down),
            })
            .collect();

        let border_styles = catalog
            .predefined_borders()
            .map(|border| BorderEntry {
                id: border.id(),
                name: border.name(),
                preview: border
                    .to_bitmap(PREVIEW.width(), PREVIEW.height())
                    .to_string(),
            })
            .collect();

        Self {
            stroke_styles,
            fill_styles,
            anchor_chars,
            border_styles,
        }
    }
}

impl fmt::Display for StyleListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strokes:")?;
        for stroke in &self.stroke_styles {
            let corners = &stroke.corners;
            write!(
                f,
                "  {:<5} {:<16} {} {} {}{}{}{}",
                stroke.id,
                stroke.name,
                stroke.horizontal,
                stroke.vertical,
                corners.top_left,
                corners.top_right,
                corners.bottom_left,
                corners.bottom_right
            )?;
            if let Some(rounded) = stroke.rounded {
                write!(f, "  (rounded: {rounded})")?;
            }
            if let Some(base) = stroke.rounded_of {
                write!(f, "  (rounded {base})")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Fills:")?;
        for fill in &self.fill_styles {
            writeln!(f, "  {:<5} {:<16} [{}]", fill.id, fill.name, fill.sample)?;
        }

        writeln!(f, "Anchors:")?;
        for anchor in &self.anchor_chars {
            writeln!(
                f,
                "  {:<5} {:<16} {} {} {} {}",
                anchor.id, anchor.name, anchor.left, anchor.right, anchor.top, anchor.bottom
            )?;
        }

        write!(f, "Borders:")?;
        for border in &self.border_styles {
            write!(f, "\n  {:<5} {}", border.id, border.name)?;
            for row in border.preview.lines() {
                write!(f, "\n        {row}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> StyleListing {
        StyleListing::from_catalog(Catalog::builtin())
    }

    #[test]
    fn test_predefined_ids() {
        let listing = listing();
        let strokes: Vec<&str> = listing.stroke_styles.iter().map(|s| s.id).collect();
        assert_eq!(strokes, ["S1", "S2", "S3", "S4"]);
        let fills: Vec<&str> = listing.fill_styles.iter().map(|f| f.id).collect();
        assert_eq!(fills, ["F1", "F2", "F3", "F4", "F5"]);
        let borders: Vec<&str> = listing.border_styles.iter().map(|b| b.id).collect();
        assert_eq!(borders, ["B1", "B2", "B3"]);
        assert_eq!(listing.anchor_chars.len(), 14);
    }

    #[test]
    fn test_stroke_entries() {
        let listing = listing();
        let thin = &listing.stroke_styles[0];
        assert_eq!(thin.rounded, Some("S4"));
        assert_eq!(thin.corners.top_left, '┌');
        assert_eq!(thin.corners.bottom_right, '┘');
        assert_eq!(thin.preview, "┌───┐\n│   │\n└───┘");
        assert_eq!(listing.stroke_styles[2].rounded, None);
        assert_eq!(listing.stroke_styles[2].preview, "╔═══╗\n║   ║\n╚═══╝");
    }

    #[test]
    fn test_rounded_stroke_listed_after_its_base() {
        let listing = listing();
        let rounded = &listing.stroke_styles[3];
        assert_eq!(rounded.id, "S4");
        assert_eq!(rounded.rounded_of, Some("S1"));
        assert_eq!(rounded.rounded, None);
        assert_eq!(rounded.corners.top_left, '╭');
        assert_eq!(rounded.preview, "╭───╮\n│   │\n╰───╯");
        assert!(listing.stroke_styles[..3].iter().all(|s| s.rounded_of.is_none()));

        let text = listing.to_string();
        assert!(text.contains("(rounded S1)"));
        let json = serde_json::to_value(&listing).expect("serializable");
        assert_eq!(json["strokeStyles"][3]["roundedOf"], "S1");
    }

    #[test]
    fn test_fill_samples() {
        let listing = listing();
        assert_eq!(listing.fill_styles[1].sample, "███");
        assert_eq!(listing.fill_styles[0].sample, "   ");
    }

    #[test]
    fn test_anchor_glyphs() {
        let listing = listing();
        let arrow = &listing.anchor_chars[0];
        assert_eq!((arrow.left, arrow.right, arrow.top, arrow.bottom), ('◀', '▶', '▲', '▼'));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(listing()).expect("serializable");
        assert_eq!(json["strokeStyles"][0]["corners"]["topLeft"], "┌");
        assert_eq!(json["anchorChars"][0]["id"], "A1");
        assert!(json["strokeStyles"][1].get("rounded").is_none());
    }

    #[test]
    fn test_text_table() {
        let text = listing().to_string();
        assert!(text.starts_with("Strokes:\n  S1"));
        assert!(text.contains("(rounded: S4)"));
        assert!(text.contains("  F2    Solid            [███]"));
        assert!(text.ends_with("╚═══╝"));
    }
}
