//! Straight stroke styles used for rectangle borders and lines.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::crossing::{Connection, LineWeight, Sides};

/// A set of glyphs for drawing straight strokes and their elbows.
///
/// The corner names follow the elbow a border traversal makes at each corner:
/// `up_right` is the top-left corner (`┌`), `down_left` the top-right (`┐`),
/// `up_left` the bottom-right (`┘`) and `down_right` the bottom-left (`└`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    id: &'static str,
    name: &'static str,
    horizontal: char,
    vertical: char,
    up_right: char,
    down_left: char,
    up_left: char,
    down_right: char,
    weight: LineWeight,
    hollow: bool,
}

impl StrokeStyle {
    /// Creates a visible stroke style whose glyphs come from the junction
    /// table of `weight`
    pub const fn from_weight(id: &'static str, name: &'static str, weight: LineWeight) -> Self {
        let (horizontal, vertical, up_right, down_left, up_left, down_right) = match weight {
            LineWeight::Light => ('─', '│', '┌', '┐', '┘', '└'),
            LineWeight::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            LineWeight::Heavy => ('━', '┃', '┏', '┓', '┛', '┗'),
            LineWeight::Double => ('═', '║', '╔', '╗', '╝', '╚'),
        };
        Self {
            id,
            name,
            horizontal,
            vertical,
            up_right,
            down_left,
            up_left,
            down_right,
            weight,
            hollow: false,
        }
    }

    /// Creates the invisible stroke style: it occupies cells without printing
    /// anything
    pub const fn hollow(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            horizontal: ' ',
            vertical: ' ',
            up_right: ' ',
            down_left: ' ',
            up_left: ' ',
            down_right: ' ',
            weight: LineWeight::Light,
            hollow: true,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn horizontal(&self) -> char {
        self.horizontal
    }

    pub fn vertical(&self) -> char {
        self.vertical
    }

    /// Returns the top-left corner glyph
    pub fn up_right(&self) -> char {
        self.up_right
    }

    /// Returns the top-right corner glyph
    pub fn down_left(&self) -> char {
        self.down_left
    }

    /// Returns the bottom-right corner glyph
    pub fn up_left(&self) -> char {
        self.up_left
    }

    /// Returns the bottom-left corner glyph
    pub fn down_right(&self) -> char {
        self.down_right
    }

    pub fn weight(&self) -> LineWeight {
        self.weight
    }

    /// Returns true for the invisible stroke style
    pub fn is_hollow(&self) -> bool {
        self.hollow
    }

    /// Returns the directional record for a stroke cell touching `sides`
    pub fn connection(&self, sides: Sides) -> Connection {
        Connection::new(self.weight, sides)
    }

    /// Returns the glyph this style draws for a stroke cell touching `sides`.
    ///
    /// T-junctions and crosses come from the junction table of the style's
    /// weight.
    pub fn glyph(&self, sides: Sides) -> char {
        if sides == Sides::DOWN | Sides::RIGHT {
            self.up_right
        } else if sides == Sides::DOWN | Sides::LEFT {
            self.down_left
        } else if sides == Sides::UP | Sides::LEFT {
            self.up_left
        } else if sides == Sides::UP | Sides::RIGHT {
            self.down_right
        } else if sides.count() <= 2 && !sides.contains(Sides::UP) && !sides.contains(Sides::DOWN) {
            self.horizontal
        } else if sides.count() <= 2 && !sides.contains(Sides::LEFT) && !sides.contains(Sides::RIGHT)
        {
            self.vertical
        } else {
            self.weight.glyph(sides)
        }
    }
}

/// Corner treatment of a rectangle border or a line's elbows
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerPattern {
    /// Square corners (default)
    #[default]
    Sharp,
    /// Arc corners, when the stroke style has a rounded counterpart
    Rounded,
}

impl CornerPattern {
    pub fn is_rounded(self) -> bool {
        self == Self::Rounded
    }
}

impl FromStr for CornerPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sharp" => Ok(Self::Sharp),
            "rounded" => Ok(Self::Rounded),
            _ => Err(format!(
                "invalid corner pattern `{s}`, valid values: sharp, rounded"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_style_glyphs() {
        let style = StrokeStyle::from_weight("S1", "Thin", LineWeight::Light);
        assert_eq!(style.horizontal(), '─');
        assert_eq!(style.vertical(), '│');
        assert_eq!(style.up_right(), '┌');
        assert_eq!(style.down_left(), '┐');
        assert_eq!(style.up_left(), '┘');
        assert_eq!(style.down_right(), '└');
        assert!(!style.is_hollow());
    }

    #[test]
    fn test_glyph_by_sides_matches_corners() {
        let style = StrokeStyle::from_weight("S3", "Double", LineWeight::Double);
        assert_eq!(style.glyph(Sides::DOWN | Sides::RIGHT), '╔');
        assert_eq!(style.glyph(Sides::UP | Sides::LEFT), '╝');
        assert_eq!(style.glyph(Sides::LEFT), '═');
        assert_eq!(style.glyph(Sides::UP), '║');
        assert_eq!(style.glyph(Sides::ALL), '╬');
    }

    #[test]
    fn test_style_glyph_agrees_with_connection_glyph() {
        let style = StrokeStyle::from_weight("S4", "Rounded", LineWeight::Rounded);
        for bits in 0..16u8 {
            let sides = [Sides::UP, Sides::DOWN, Sides::LEFT, Sides::RIGHT]
                .into_iter()
                .filter(|side| bits & side.bits() != 0)
                .fold(Sides::NONE, |acc, side| acc | side);
            assert_eq!(style.glyph(sides), style.connection(sides).glyph());
        }
    }

    #[test]
    fn test_hollow_style() {
        let style = StrokeStyle::hollow("S0", "No Stroke");
        assert!(style.is_hollow());
        assert_eq!(style.id(), "S0");
    }

    #[test]
    fn test_corner_pattern_from_str() {
        assert_eq!("sharp".parse::<CornerPattern>(), Ok(CornerPattern::Sharp));
        assert_eq!("rounded".parse::<CornerPattern>(), Ok(CornerPattern::Rounded));
        assert!("round".parse::<CornerPattern>().is_err());
    }
}
