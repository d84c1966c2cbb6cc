//! The compositing surface for rasterized shapes.
//!
//! A [`Board`] covers a fixed window of absolute coordinates. Shapes are
//! composited onto it in drawing order; anything outside the window is
//! clipped.
//!
//! # Compositing rules
//!
//! For every destination cell, with the incoming cell on the right:
//!
//! | Incoming | Effect |
//! |----------|--------|
//! | empty | nothing |
//! | transparent or hollow | printed content stays; a stroke record is merged in, a hollow cell marks the cell occupied |
//! | opaque, with a stroke on both sides | sides are unioned and the cell prints the junction glyph, unless the incoming glyph is an override such as an anchor |
//! | any other opaque cell | replaces the destination |
//!
//! The junction rule is what turns two borders that touch into `┬`, `├` or
//! `┼` instead of one hiding the other:
//!
//! ```text
//!   ┌─┐  +  ┌─┐  at x = 2   ──►   ┌─┬─┐
//!   │ │     │ │                   │ │ │
//!   └─┘     └─┘                   └─┴─┘
//! ```

use std::fmt;

use log::{trace, warn};

use crate::{
    bitmap::{Bitmap, Cell, Ink},
    geometry::{Point, Rect},
};

/// Highlight tag carried by every board cell
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    #[default]
    None,
    Selected,
}

/// A board cell: the composited cell plus its highlight
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    cell: Cell,
    highlight: Highlight,
}

impl Pixel {
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn visual(&self) -> char {
        self.cell.visual()
    }

    /// Composites an incoming cell onto this pixel
    fn composite(&mut self, incoming: Cell, highlight: Highlight) {
        if incoming.is_empty() {
            return;
        }

        if !incoming.is_opaque() {
            let ink = match (self.cell.ink(), incoming.ink()) {
                (Ink::Transparent, Ink::Hollow) => Ink::Hollow,
                (ink, _) => ink,
            };
            let directional = match (self.cell.directional(), incoming.directional()) {
                (Some(existing), Some(incoming)) => Some(existing.merge(incoming)),
                (existing, incoming) => incoming.or(existing),
            };
            self.cell = Cell::new(ink, directional);
            return;
        }

        self.cell = match (self.cell.directional(), incoming.directional()) {
            (Some(existing), Some(connection)) => {
                let merged = existing.merge(connection);
                let ink = if incoming.is_override() {
                    incoming.ink()
                } else {
                    Ink::Glyph(merged.glyph())
                };
                Cell::new(ink, Some(merged))
            }
            _ => incoming,
        };
        self.highlight = highlight;
    }
}

/// A window of absolute cells that shapes are composited onto.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::board::{Board, Highlight};
/// # use gridsketch_core::geometry::Rect;
/// let mut board = Board::new(Rect::by_left_top_width_height(0, 0, 4, 4));
/// board.fill_rect(Rect::by_left_top_width_height(1, 2, 3, 4), '#', Highlight::None);
/// assert_eq!(board.to_string(), "    \n    \n ###\n ###");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    window: Rect,
    pixels: Vec<Pixel>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// A window with non-positive size holds no cells. A window over the
    /// allocation limits keeps its top-left and is cut down by
    /// [`Size::clamped`](crate::geometry::Size::clamped).
    pub fn new(window: Rect) -> Self {
        if window.size().exceeds_limits() {
            warn!(
                width = window.width(),
                height = window.height();
                "Board window exceeds the cell limit, clipping"
            );
        }
        let window = Rect::new(window.position(), window.size().clamped());
        Self {
            window,
            pixels: vec![Pixel::default(); window.size().cell_count().unwrap_or_default()],
        }
    }

    pub fn window(&self) -> Rect {
        self.window
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        if !self.window.contains(point) {
            return None;
        }
        let relative = point.relative_to(self.window.position());
        Some(relative.top() as usize * self.window.width() as usize + relative.left() as usize)
    }

    /// Returns the pixel at an absolute point, or `None` outside the window
    pub fn get(&self, point: Point) -> Option<&Pixel> {
        self.index_of(point).map(|index| &self.pixels[index])
    }

    /// Returns the printed character at an absolute point, a space outside
    /// the window
    pub fn visual(&self, point: Point) -> char {
        self.get(point).map_or(' ', Pixel::visual)
    }

    /// Returns true if any shape covers the point, including invisible ones
    pub fn is_occupied(&self, point: Point) -> bool {
        self.get(point).is_some_and(|pixel| pixel.cell.is_occupied())
    }

    /// Overwrites one cell with the given ink, dropping any stroke record
    pub fn set_point(&mut self, point: Point, ink: Ink, highlight: Highlight) {
        if let Some(index) = self.index_of(point) {
            self.pixels[index] = Pixel {
                cell: Cell::new(ink, None),
                highlight,
            };
        }
    }

    /// Overwrites every cell of `rect` inside the window with `ch`
    pub fn fill_rect(&mut self, rect: Rect, ch: char, highlight: Highlight) {
        let Some(area) = rect.intersect(self.window) else {
            return;
        };
        for top in area.top()..=area.bottom() {
            for left in area.left()..=area.right() {
                self.set_point(Point::new(left, top), Ink::Glyph(ch), highlight);
            }
        }
    }

    /// Composites another board onto this one where their windows overlap
    pub fn fill(&mut self, other: &Board) {
        let Some(area) = other.window.intersect(self.window) else {
            return;
        };
        for top in area.top()..=area.bottom() {
            for left in area.left()..=area.right() {
                let point = Point::new(left, top);
                if let (Some(index), Some(pixel)) = (self.index_of(point), other.get(point)) {
                    self.pixels[index].composite(pixel.cell, pixel.highlight);
                }
            }
        }
    }

    /// Composites a bitmap with its top-left cell at `position`
    pub fn fill_bitmap(&mut self, position: Point, bitmap: &Bitmap, highlight: Highlight) {
        trace!(
            left = position.left(),
            top = position.top(),
            width = bitmap.width(),
            height = bitmap.height();
            "Compositing bitmap"
        );
        for (row, col, cell) in bitmap.cells() {
            let point = position.offset(col, row);
            if let Some(index) = self.index_of(point) {
                self.pixels[index].composite(*cell, highlight);
            }
        }
    }

    /// Iterates over the rows of the board as printed strings
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.pixels
            .chunks(self.window.width().max(1) as usize)
            .map(|row| row.iter().map(Pixel::visual).collect())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            f.write_str(&row)?;
        }
        Ok(())
    }
}
