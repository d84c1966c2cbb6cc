//! The built-in style registry.
//!
//! The catalog is built once, on first use, and is read-only afterwards.
//! Every entry is addressed by a short stable identifier:
//!
//! | Kind | Identifiers |
//! |------|-------------|
//! | Stroke | `S1` thin, `S2` bold, `S3` double, `S4` rounded (`S0` no stroke) |
//! | Fill | `F1` blank, `F2` solid, `F3` medium shade, `F4` light shade, `F5` checker (`F0` no fill) |
//! | Anchor | `A1`, `A12`, `A13`, `A14` arrows; `A2`, `A21`, `A220`, `A221`, `A3`, `A4`, `A5` shapes; `A6`, `A61`, `A62` T-junctions |
//! | Border | `B1` thin, `B2` bold, `B3` double (`B0` no border) |
//!
//! Lookups return `None` for unknown identifiers; callers decide the
//! fallback.

use std::sync::OnceLock;

use indexmap::IndexMap;
use log::debug;

use crate::{
    bitmap::Cell,
    crossing::LineWeight,
    drawable::{Drawable, NinePatch, RepeatableRange},
};

use super::{AnchorChar, BorderStyle, CornerPattern, FillStyle, StrokeStyle};

/// Identifier of the invisible stroke style
pub const NO_STROKE_ID: &str = "S0";
/// Identifier of the transparent fill style
pub const NO_FILL_ID: &str = "F0";
/// Identifier of the invisible border style
pub const NO_BORDER_ID: &str = "B0";
/// The anchor value meaning "no anchor"
pub const NO_ANCHOR_ID: &str = "none";

const STROKES: [StrokeStyle; 5] = [
    StrokeStyle::hollow(NO_STROKE_ID, "No Stroke"),
    StrokeStyle::from_weight("S1", "Thin", LineWeight::Light),
    StrokeStyle::from_weight("S2", "Bold", LineWeight::Heavy),
    StrokeStyle::from_weight("S3", "Double", LineWeight::Double),
    StrokeStyle::from_weight("S4", "Rounded", LineWeight::Rounded),
];

const PREDEFINED_STROKES: [&str; 3] = ["S1", "S2", "S3"];

const ROUNDED_STROKES: [(&str, &str); 1] = [("S1", "S4")];

const FILLS: [(&str, &str, char); 5] = [
    ("F1", "Blank", ' '),
    ("F2", "Solid", '█'),
    ("F3", "Medium Shade", '▒'),
    ("F4", "Light Shade", '░'),
    ("F5", "Checker", '▚'),
];

const ANCHORS: [AnchorChar; 14] = [
    AnchorChar::directional("A1", "Arrow", '◀', '▶', '▲', '▼'),
    AnchorChar::directional("A12", "Hollow Arrow", '◁', '▷', '△', '▽'),
    AnchorChar::directional("A13", "Pointer", '◄', '►', '▲', '▼'),
    AnchorChar::directional("A14", "Hollow Pointer", '◅', '▻', '△', '▽'),
    AnchorChar::uniform("A2", "Square", '■'),
    AnchorChar::uniform("A21", "Hollow Square", '□'),
    AnchorChar::uniform("A220", "Diamond", '◆'),
    AnchorChar::uniform("A221", "Hollow Diamond", '◇'),
    AnchorChar::uniform("A3", "Circle", '○'),
    AnchorChar::uniform("A4", "Bullseye", '◎'),
    AnchorChar::uniform("A5", "Dot", '●'),
    AnchorChar::directional("A6", "Thin Junction", '├', '┤', '┬', '┴'),
    AnchorChar::directional("A61", "Bold Junction", '┣', '┫', '┳', '┻'),
    AnchorChar::directional("A62", "Double Junction", '╠', '╣', '╦', '╩'),
];

const BORDERS: [(&str, &str, &str); 3] = [
    ("B1", "Thin", "┌─┐\n│ │\n└─┘"),
    ("B2", "Bold", "┏━┓\n┃ ┃\n┗━┛"),
    ("B3", "Double", "╔═╗\n║ ║\n╚═╝"),
];

/// Read-only registry of every built-in style.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::style::{Catalog, CornerPattern};
/// let catalog = Catalog::builtin();
/// let thin = catalog.stroke("S1").unwrap();
/// assert_eq!(thin.up_right(), '┌');
///
/// let rounded = catalog.stroke_with_corner("S1", CornerPattern::Rounded).unwrap();
/// assert_eq!(rounded.id(), "S4");
/// assert!(catalog.stroke("S9").is_none());
/// ```
#[derive(Debug)]
pub struct Catalog {
    strokes: IndexMap<&'static str, StrokeStyle>,
    rounded: IndexMap<&'static str, &'static str>,
    fills: IndexMap<&'static str, FillStyle>,
    anchors: IndexMap<&'static str, AnchorChar>,
    borders: IndexMap<&'static str, BorderStyle>,
}

impl Catalog {
    /// Returns the shared built-in catalog
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Self::build)
    }

    fn build() -> Self {
        let strokes = STROKES.iter().map(|style| (style.id(), *style)).collect();
        let rounded = ROUNDED_STROKES.iter().copied().collect();

        let mut fills: IndexMap<&'static str, FillStyle> = IndexMap::new();
        fills.insert(
            NO_FILL_ID,
            FillStyle::new(
                NO_FILL_ID,
                "No Fill",
                Drawable::NinePatch(NinePatch::new(
                    vec![vec![Cell::TRANSPARENT]],
                    vec![RepeatableRange::repeat(0, 0)],
                    vec![RepeatableRange::repeat(0, 0)],
                )),
            ),
        );
        for (id, name, glyph) in FILLS {
            fills.insert(id, FillStyle::new(id, name, Drawable::Char(glyph)));
        }

        let anchors = ANCHORS.iter().map(|anchor| (anchor.id(), *anchor)).collect();

        let mut borders: IndexMap<&'static str, BorderStyle> = IndexMap::new();
        borders.insert(
            NO_BORDER_ID,
            BorderStyle::new(NO_BORDER_ID, "No Border", hollow_frame()),
        );
        for (id, name, template) in BORDERS {
            borders.insert(
                id,
                BorderStyle::new(
                    id,
                    name,
                    Drawable::NinePatch(NinePatch::from_text(
                        template,
                        vec![RepeatableRange::repeat(1, 1)],
                        vec![RepeatableRange::repeat(1, 1)],
                    )),
                ),
            );
        }

        let catalog = Self {
            strokes,
            rounded,
            fills,
            anchors,
            borders,
        };
        debug!(
            strokes = catalog.strokes.len(),
            fills = catalog.fills.len(),
            anchors = catalog.anchors.len(),
            borders = catalog.borders.len();
            "Style catalog initialized"
        );
        catalog
    }

    /// Returns the stroke style with the given identifier
    pub fn stroke(&self, id: &str) -> Option<&StrokeStyle> {
        self.strokes.get(id)
    }

    /// Returns the stroke style for `id` under a corner pattern.
    ///
    /// A rounded corner switches to the rounded counterpart of the style when
    /// one exists and keeps the style unchanged otherwise.
    pub fn stroke_with_corner(&self, id: &str, corner: CornerPattern) -> Option<&StrokeStyle> {
        let id = match corner {
            CornerPattern::Rounded => self.rounded.get(id).copied().unwrap_or(id),
            CornerPattern::Sharp => id,
        };
        self.strokes.get(id)
    }

    /// Returns true if the stroke style has a rounded counterpart
    pub fn is_corner_roundable(&self, id: &str) -> bool {
        self.rounded.contains_key(id)
    }

    /// Returns the invisible stroke style
    pub fn no_stroke(&self) -> &StrokeStyle {
        &self.strokes[NO_STROKE_ID]
    }

    /// Iterates over the user-selectable stroke styles
    pub fn predefined_strokes(&self) -> impl Iterator<Item = &StrokeStyle> {
        PREDEFINED_STROKES
            .iter()
            .filter_map(|id| self.strokes.get(*id))
    }

    /// Returns the fill style with the given identifier
    pub fn fill(&self, id: &str) -> Option<&FillStyle> {
        self.fills.get(id)
    }

    /// Returns the transparent fill style
    pub fn no_fill(&self) -> &FillStyle {
        &self.fills[NO_FILL_ID]
    }

    /// Iterates over the user-selectable fill styles
    pub fn predefined_fills(&self) -> impl Iterator<Item = &FillStyle> {
        self.fills.values().filter(|fill| fill.id() != NO_FILL_ID)
    }

    /// Returns the anchor with the given identifier; `"none"` is not an anchor
    pub fn anchor(&self, id: &str) -> Option<&AnchorChar> {
        self.anchors.get(id)
    }

    /// Iterates over every anchor
    pub fn anchors(&self) -> impl Iterator<Item = &AnchorChar> {
        self.anchors.values()
    }

    /// Returns the border style with the given identifier
    pub fn border(&self, id: &str) -> Option<&BorderStyle> {
        self.borders.get(id)
    }

    /// Returns the invisible border style
    pub fn no_border(&self) -> &BorderStyle {
        &self.borders[NO_BORDER_ID]
    }

    /// Iterates over the user-selectable border styles
    pub fn predefined_borders(&self) -> impl Iterator<Item = &BorderStyle> {
        self.borders
            .values()
            .filter(|border| border.id() != NO_BORDER_ID)
    }

    /// Returns the border style drawn with the same weight as a stroke style
    pub fn border_for_stroke(&self, stroke: &StrokeStyle) -> Option<&BorderStyle> {
        if stroke.is_hollow() {
            return self.borders.get(NO_BORDER_ID);
        }
        let id = match stroke.weight() {
            LineWeight::Light => "B1",
            LineWeight::Heavy => "B2",
            LineWeight::Double => "B3",
            LineWeight::Rounded => return None,
        };
        self.borders.get(id)
    }
}

fn hollow_frame() -> Drawable {
    let frame = [Cell::HOLLOW; 3];
    let middle = [Cell::HOLLOW, Cell::TRANSPARENT, Cell::HOLLOW];
    Drawable::NinePatch(NinePatch::new(
        vec![frame.to_vec(), middle.to_vec(), frame.to_vec()],
        vec![RepeatableRange::repeat(1, 1)],
        vec![RepeatableRange::repeat(1, 1)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;

    #[test]
    fn test_stroke_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.stroke("S2").map(StrokeStyle::horizontal), Some('━'));
        assert_eq!(catalog.stroke("S3").map(StrokeStyle::up_right), Some('╔'));
        assert_eq!(catalog.stroke("S4").map(StrokeStyle::up_right), Some('╭'));
        assert!(catalog.stroke("nope").is_none());
    }

    #[test]
    fn test_rounded_corner_table() {
        let catalog = Catalog::builtin();
        assert!(catalog.is_corner_roundable("S1"));
        assert!(!catalog.is_corner_roundable("S2"));
        let bold = catalog.stroke_with_corner("S2", CornerPattern::Rounded);
        assert_eq!(bold.map(StrokeStyle::id), Some("S2"));
        let thin = catalog.stroke_with_corner("S1", CornerPattern::Sharp);
        assert_eq!(thin.map(StrokeStyle::id), Some("S1"));
    }

    #[test]
    fn test_predefined_lists_exclude_sentinels() {
        let catalog = Catalog::builtin();
        let strokes: Vec<&str> = catalog.predefined_strokes().map(StrokeStyle::id).collect();
        assert_eq!(strokes, ["S1", "S2", "S3"]);
        let fills: Vec<&str> = catalog.predefined_fills().map(FillStyle::id).collect();
        assert_eq!(fills, ["F1", "F2", "F3", "F4", "F5"]);
        let borders: Vec<&str> = catalog.predefined_borders().map(BorderStyle::id).collect();
        assert_eq!(borders, ["B1", "B2", "B3"]);
        assert!(catalog.no_stroke().is_hollow());
        assert_eq!(catalog.no_fill().id(), NO_FILL_ID);
    }

    #[test]
    fn test_fills_paint_their_glyph() {
        let catalog = Catalog::builtin();
        let solid = catalog.fill("F2").map(|fill| fill.to_bitmap(2, 1).to_string());
        assert_eq!(solid.as_deref(), Some("██"));
        let none = catalog.no_fill().to_bitmap(2, 2);
        assert!(none.cells().all(|(_, _, cell)| cell.is_empty()));
    }

    #[test]
    fn test_anchor_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.anchors().count(), 14);
        let arrow = catalog.anchor("A1").map(|a| a.glyph(Direction::Left));
        assert_eq!(arrow, Some('◀'));
        let junction = catalog.anchor("A62").map(|a| a.glyph(Direction::Down));
        assert_eq!(junction, Some('╩'));
        assert!(catalog.anchor(NO_ANCHOR_ID).is_none());
    }

    #[test]
    fn test_borders_stretch() {
        let catalog = Catalog::builtin();
        let double = catalog.border("B3").map(|b| b.to_bitmap(4, 3).to_string());
        assert_eq!(double.as_deref(), Some("╔══╗\n║  ║\n╚══╝"));
        let hollow = catalog.no_border().to_bitmap(3, 3);
        assert!(hollow.get(0, 0).is_some_and(|cell| cell.is_occupied()));
        assert!(hollow.get(1, 1).is_some_and(|cell| !cell.is_occupied()));
    }

    #[test]
    fn test_border_for_stroke() {
        let catalog = Catalog::builtin();
        let heavy = catalog.stroke("S2").and_then(|s| catalog.border_for_stroke(s));
        assert_eq!(heavy.map(BorderStyle::id), Some("B2"));
        let rounded = catalog.stroke("S4").and_then(|s| catalog.border_for_stroke(s));
        assert!(rounded.is_none());
    }
}
