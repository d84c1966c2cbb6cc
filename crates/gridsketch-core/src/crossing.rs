//! Junction glyph resolution for box-drawing strokes.
//!
//! Every stroke cell records which of its four sides the stroke passes
//! through. When two strokes share a cell their sides are unioned, and the
//! union is mapped back to exactly one box-drawing glyph: a straight segment,
//! a corner, a T-junction or a cross.
//!
//! # Overview
//!
//! - [`Sides`]: A 4-bit set of {up, down, left, right}
//! - [`LineWeight`]: The glyph family a stroke is drawn with
//! - [`Connection`]: Sides plus weight, the "directional" half of a cell
//!
//! # Glyph Table
//!
//! | Sides | Light | Rounded | Heavy | Double |
//! |-------|-------|---------|-------|--------|
//! | left + right | `─` | `─` | `━` | `═` |
//! | up + down | `│` | `│` | `┃` | `║` |
//! | down + right | `┌` | `╭` | `┏` | `╔` |
//! | down + left | `┐` | `╮` | `┓` | `╗` |
//! | up + right | `└` | `╰` | `┗` | `╚` |
//! | up + left | `┘` | `╯` | `┛` | `╝` |
//! | up + down + right | `├` | `├` | `┣` | `╠` |
//! | up + down + left | `┤` | `┤` | `┫` | `╣` |
//! | left + right + down | `┬` | `┬` | `┳` | `╦` |
//! | left + right + up | `┴` | `┴` | `┻` | `╩` |
//! | all four | `┼` | `┼` | `╋` | `╬` |
//!
//! Masks with zero or one side only appear at path endpoints and while
//! merging. They resolve to the straight glyph of their axis, with the empty
//! mask treated as horizontal.

use std::{fmt, ops};

use crate::geometry::Direction;

/// A set of cell sides a stroke passes through.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::crossing::Sides;
/// let corner = Sides::DOWN | Sides::RIGHT;
/// assert!(corner.contains(Sides::DOWN));
/// assert_eq!(corner.count(), 2);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sides(u8);

impl Sides {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(0b0001);
    pub const DOWN: Self = Self(0b0010);
    pub const LEFT: Self = Self(0b0100);
    pub const RIGHT: Self = Self(0b1000);
    pub const HORIZONTAL: Self = Self(Self::LEFT.0 | Self::RIGHT.0);
    pub const VERTICAL: Self = Self(Self::UP.0 | Self::DOWN.0);
    pub const ALL: Self = Self(0b1111);

    /// Returns the side a stroke leaves through when moving in `direction`
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }

    /// Returns true if every side in `other` is also in `self`
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no side is set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of sides set
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl ops::BitOr for Sides {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Sides {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::UP, "UP"),
            (Self::DOWN, "DOWN"),
            (Self::LEFT, "LEFT"),
            (Self::RIGHT, "RIGHT"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(side, _)| self.contains(*side))
            .map(|(_, name)| *name)
            .collect();
        if set.is_empty() {
            write!(f, "Sides(NONE)")
        } else {
            write!(f, "Sides({})", set.join(" | "))
        }
    }
}

/// The glyph family a stroke is drawn with
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineWeight {
    /// Thin single line (default)
    #[default]
    Light,
    /// Thin single line with arc corners
    Rounded,
    /// Thick single line
    Heavy,
    /// Double line
    Double,
}

struct GlyphSet {
    horizontal: char,
    vertical: char,
    down_right: char,
    down_left: char,
    up_right: char,
    up_left: char,
    tee_right: char,
    tee_left: char,
    tee_down: char,
    tee_up: char,
    cross: char,
}

const LIGHT: GlyphSet = GlyphSet {
    horizontal: '─',
    vertical: '│',
    down_right: '┌',
    down_left: '┐',
    up_right: '└',
    up_left: '┘',
    tee_right: '├',
    tee_left: '┤',
    tee_down: '┬',
    tee_up: '┴',
    cross: '┼',
};

const ROUNDED: GlyphSet = GlyphSet {
    down_right: '╭',
    down_left: '╮',
    up_right: '╰',
    up_left: '╯',
    ..LIGHT
};

const HEAVY: GlyphSet = GlyphSet {
    horizontal: '━',
    vertical: '┃',
    down_right: '┏',
    down_left: '┓',
    up_right: '┗',
    up_left: '┛',
    tee_right: '┣',
    tee_left: '┫',
    tee_down: '┳',
    tee_up: '┻',
    cross: '╋',
};

const DOUBLE: GlyphSet = GlyphSet {
    horizontal: '═',
    vertical: '║',
    down_right: '╔',
    down_left: '╗',
    up_right: '╚',
    up_left: '╝',
    tee_right: '╠',
    tee_left: '╣',
    tee_down: '╦',
    tee_up: '╩',
    cross: '╬',
};

impl LineWeight {
    fn glyphs(self) -> &'static GlyphSet {
        match self {
            Self::Light => &LIGHT,
            Self::Rounded => &ROUNDED,
            Self::Heavy => &HEAVY,
            Self::Double => &DOUBLE,
        }
    }

    /// Maps a side mask to the glyph of this weight.
    ///
    /// The mapping is total over all sixteen masks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridsketch_core::crossing::{LineWeight, Sides};
    /// assert_eq!(LineWeight::Light.glyph(Sides::ALL), '┼');
    /// assert_eq!(LineWeight::Double.glyph(Sides::UP | Sides::LEFT), '╝');
    /// assert_eq!(LineWeight::Light.glyph(Sides::UP), '│');
    /// ```
    pub fn glyph(self, sides: Sides) -> char {
        let set = self.glyphs();
        let up = sides.contains(Sides::UP);
        let down = sides.contains(Sides::DOWN);
        let left = sides.contains(Sides::LEFT);
        let right = sides.contains(Sides::RIGHT);
        match (up, down, left, right) {
            (true, true, true, true) => set.cross,
            (true, true, false, true) => set.tee_right,
            (true, true, true, false) => set.tee_left,
            (false, true, true, true) => set.tee_down,
            (true, false, true, true) => set.tee_up,
            (false, true, false, true) => set.down_right,
            (false, true, true, false) => set.down_left,
            (true, false, false, true) => set.up_right,
            (true, false, true, false) => set.up_left,
            (true, _, false, false) | (_, true, false, false) => set.vertical,
            _ => set.horizontal,
        }
    }
}

/// The directional record of a stroke cell: which sides it touches and the
/// weight it was drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    weight: LineWeight,
    sides: Sides,
}

impl Connection {
    pub fn new(weight: LineWeight, sides: Sides) -> Self {
        Self { weight, sides }
    }

    pub fn weight(self) -> LineWeight {
        self.weight
    }

    pub fn sides(self) -> Sides {
        self.sides
    }

    /// Returns the glyph this connection resolves to on its own
    pub fn glyph(self) -> char {
        self.weight.glyph(self.sides)
    }

    /// Merges an incoming connection into this one.
    ///
    /// Sides are unioned and the incoming weight replaces the existing one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridsketch_core::crossing::{Connection, LineWeight, Sides};
    /// let vertical = Connection::new(LineWeight::Light, Sides::VERTICAL);
    /// let horizontal = Connection::new(LineWeight::Light, Sides::HORIZONTAL);
    /// assert_eq!(vertical.merge(horizontal).glyph(), '┼');
    /// ```
    pub fn merge(self, incoming: Self) -> Self {
        Self {
            weight: incoming.weight,
            sides: self.sides | incoming.sides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_straight_and_corners() {
        let light = LineWeight::Light;
        assert_eq!(light.glyph(Sides::HORIZONTAL), '─');
        assert_eq!(light.glyph(Sides::VERTICAL), '│');
        assert_eq!(light.glyph(Sides::DOWN | Sides::RIGHT), '┌');
        assert_eq!(light.glyph(Sides::DOWN | Sides::LEFT), '┐');
        assert_eq!(light.glyph(Sides::UP | Sides::RIGHT), '└');
        assert_eq!(light.glyph(Sides::UP | Sides::LEFT), '┘');
    }

    #[test]
    fn test_tees_and_cross() {
        let light = LineWeight::Light;
        assert_eq!(light.glyph(Sides::VERTICAL | Sides::RIGHT), '├');
        assert_eq!(light.glyph(Sides::VERTICAL | Sides::LEFT), '┤');
        assert_eq!(light.glyph(Sides::HORIZONTAL | Sides::DOWN), '┬');
        assert_eq!(light.glyph(Sides::HORIZONTAL | Sides::UP), '┴');
        assert_eq!(light.glyph(Sides::ALL), '┼');
        assert_eq!(LineWeight::Heavy.glyph(Sides::ALL), '╋');
        assert_eq!(LineWeight::Double.glyph(Sides::HORIZONTAL | Sides::UP), '╩');
    }

    #[test]
    fn test_rounded_only_changes_corners() {
        let rounded = LineWeight::Rounded;
        assert_eq!(rounded.glyph(Sides::DOWN | Sides::RIGHT), '╭');
        assert_eq!(rounded.glyph(Sides::UP | Sides::LEFT), '╯');
        assert_eq!(rounded.glyph(Sides::HORIZONTAL), '─');
        assert_eq!(rounded.glyph(Sides::ALL), '┼');
    }

    #[test]
    fn test_degenerate_masks() {
        let light = LineWeight::Light;
        assert_eq!(light.glyph(Sides::NONE), '─');
        assert_eq!(light.glyph(Sides::LEFT), '─');
        assert_eq!(light.glyph(Sides::RIGHT), '─');
        assert_eq!(light.glyph(Sides::UP), '│');
        assert_eq!(light.glyph(Sides::DOWN), '│');
    }

    #[test]
    fn test_merge_endpoints_into_corner() {
        let end_of_horizontal = Connection::new(LineWeight::Light, Sides::RIGHT);
        let end_of_vertical = Connection::new(LineWeight::Light, Sides::DOWN);
        assert_eq!(end_of_horizontal.merge(end_of_vertical).glyph(), '┌');
    }

    #[test]
    fn test_merge_takes_incoming_weight() {
        let light = Connection::new(LineWeight::Light, Sides::VERTICAL);
        let heavy = Connection::new(LineWeight::Heavy, Sides::HORIZONTAL);
        let merged = light.merge(heavy);
        assert_eq!(merged.weight(), LineWeight::Heavy);
        assert_eq!(merged.glyph(), '╋');
    }

    #[test]
    fn test_sides_debug() {
        assert_eq!(format!("{:?}", Sides::UP | Sides::LEFT), "Sides(UP | LEFT)");
        assert_eq!(format!("{:?}", Sides::NONE), "Sides(NONE)");
    }
}
