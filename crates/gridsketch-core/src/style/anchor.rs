//! Glyphs drawn at the ends of lines.

use crate::geometry::Direction;

/// A line-end glyph set.
///
/// Directional anchors carry one glyph per direction the line points at the
/// anchor cell. Uniform anchors use the same glyph everywhere.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::geometry::Direction;
/// # use gridsketch_core::style::AnchorChar;
/// let arrow = AnchorChar::directional("A1", "▶", '◀', '▶', '▲', '▼');
/// assert_eq!(arrow.glyph(Direction::Right), '▶');
///
/// let dot = AnchorChar::uniform("A5", "●", '●');
/// assert_eq!(dot.glyph(Direction::Up), '●');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorChar {
    id: &'static str,
    name: &'static str,
    left: char,
    right: char,
    top: char,
    bottom: char,
}

impl AnchorChar {
    pub const fn directional(
        id: &'static str,
        name: &'static str,
        left: char,
        right: char,
        top: char,
        bottom: char,
    ) -> Self {
        Self {
            id,
            name,
            left,
            right,
            top,
            bottom,
        }
    }

    pub const fn uniform(id: &'static str, name: &'static str, glyph: char) -> Self {
        Self::directional(id, name, glyph, glyph, glyph, glyph)
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the glyph for an anchor the line points towards `direction`
    pub fn glyph(&self, direction: Direction) -> char {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.top,
            Direction::Down => self.bottom,
        }
    }

    /// Returns true if every direction uses the same glyph
    pub fn is_uniform(&self) -> bool {
        self.left == self.right && self.right == self.top && self.top == self.bottom
    }
}
