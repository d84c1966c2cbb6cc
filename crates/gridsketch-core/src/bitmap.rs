//! Fixed-size grids of character cells.
//!
//! A [`Bitmap`] is the output of every rasterizer. It is assembled through a
//! [`BitmapBuilder`] and then frozen. Each [`Cell`] carries two independent
//! pieces of state:
//!
//! - the *ink*, which decides what is printed, and
//! - the *directional* record, a [`Connection`] describing which sides a
//!   stroke passes through the cell.
//!
//! Keeping the two apart lets an anchor glyph or a dash gap replace what is
//! printed while the board can still merge the underlying stroke into a
//! junction.
//!
//! Row and column indices are `i32` so that callers can place content at
//! negative offsets; anything outside the grid is silently clipped.

use std::fmt;

use log::{trace, warn};

use crate::{crossing::Connection, geometry::Size};

/// What a cell prints
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ink {
    /// Nothing here; prints as a blank and never covers other content
    #[default]
    Transparent,
    /// Invisible but occupied; prints as a blank and never covers other
    /// content, but counts when hit-testing a board
    Hollow,
    /// A printed character, including an opaque space
    Glyph(char),
}

/// One character position of a bitmap
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    ink: Ink,
    directional: Option<Connection>,
}

impl Cell {
    /// The empty cell
    pub const TRANSPARENT: Self = Self {
        ink: Ink::Transparent,
        directional: None,
    };

    /// The invisible but occupied cell
    pub const HOLLOW: Self = Self {
        ink: Ink::Hollow,
        directional: None,
    };

    pub fn new(ink: Ink, directional: Option<Connection>) -> Self {
        Self { ink, directional }
    }

    /// Creates an opaque cell printing `ch` with no stroke information
    pub fn glyph(ch: char) -> Self {
        Self::new(Ink::Glyph(ch), None)
    }

    /// Creates a stroke cell printing the natural glyph of `connection`
    pub fn stroke(connection: Connection) -> Self {
        Self::new(Ink::Glyph(connection.glyph()), Some(connection))
    }

    pub fn ink(&self) -> Ink {
        self.ink
    }

    pub fn directional(&self) -> Option<Connection> {
        self.directional
    }

    /// Returns the printed character, a space for transparent and hollow cells
    pub fn visual(&self) -> char {
        match self.ink {
            Ink::Glyph(ch) => ch,
            Ink::Transparent | Ink::Hollow => ' ',
        }
    }

    /// Returns true if the cell prints something that covers lower layers
    pub fn is_opaque(&self) -> bool {
        matches!(self.ink, Ink::Glyph(_))
    }

    /// Returns true if the cell has neither ink nor stroke information
    pub fn is_empty(&self) -> bool {
        self.ink == Ink::Transparent && self.directional.is_none()
    }

    /// Returns true if the cell is covered by some shape, visible or not
    pub fn is_occupied(&self) -> bool {
        self.ink != Ink::Transparent || self.directional.is_some()
    }

    /// Returns true if the printed glyph is not the glyph the stroke would
    /// resolve to, such as an anchor drawn over a line end
    pub fn is_override(&self) -> bool {
        match (self.ink, self.directional) {
            (Ink::Glyph(ch), Some(connection)) => ch != connection.glyph(),
            _ => false,
        }
    }

    /// Returns a copy of this cell printing `ink` instead
    pub fn with_ink(self, ink: Ink) -> Self {
        Self { ink, ..self }
    }
}

/// An immutable grid of cells.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::bitmap::BitmapBuilder;
/// let mut builder = BitmapBuilder::new(3, 2);
/// builder.put_char(0, 1, 'x');
/// builder.put_char(1, 2, 'y');
/// let bitmap = builder.build();
/// assert_eq!(bitmap.to_string(), " x \n  y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    size: Size,
    cells: Vec<Cell>,
}

impl Bitmap {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width()
    }

    pub fn height(&self) -> i32 {
        self.size.height()
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range
    pub fn get(&self, row: i32, col: i32) -> Option<&Cell> {
        index_of(self.size, row, col).map(|index| &self.cells[index])
    }

    /// Returns the printed character at `(row, col)`, a space when out of range
    pub fn visual(&self, row: i32, col: i32) -> char {
        self.get(row, col).map_or(' ', Cell::visual)
    }

    /// Iterates over the rows of the bitmap
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` valid for zero-width bitmaps, which have no cells
        self.cells.chunks(self.width().max(1) as usize)
    }

    /// Iterates over every cell with its `(row, col)` position
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, &Cell)> {
        let width = self.width().max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (index as i32 / width, index as i32 % width, cell))
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.visual())?;
            }
        }
        Ok(())
    }
}

/// A mutable grid that freezes into a [`Bitmap`]
#[derive(Debug, Clone)]
pub struct BitmapBuilder {
    size: Size,
    cells: Vec<Cell>,
}

impl BitmapBuilder {
    /// Creates a transparent builder.
    ///
    /// Negative dimensions are treated as zero. Sizes over the allocation
    /// limits are cut down by [`Size::clamped`] and writes beyond the cut are
    /// ignored.
    pub fn new(width: i32, height: i32) -> Self {
        let requested = Size::new(width, height);
        if requested.exceeds_limits() {
            warn!(width, height; "Bitmap size exceeds the cell limit, clipping");
        }
        let size = requested.clamped();
        Self {
            size,
            cells: vec![Cell::TRANSPARENT; size.cell_count().unwrap_or_default()],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range
    pub fn get(&self, row: i32, col: i32) -> Option<&Cell> {
        index_of(self.size, row, col).map(|index| &self.cells[index])
    }

    /// Writes a cell; out-of-range writes are ignored
    pub fn put(&mut self, row: i32, col: i32, cell: Cell) {
        if let Some(index) = index_of(self.size, row, col) {
            self.cells[index] = cell;
        }
    }

    /// Writes an opaque character with no stroke information
    pub fn put_char(&mut self, row: i32, col: i32, ch: char) {
        self.put(row, col, Cell::glyph(ch));
    }

    /// Fills every cell with an opaque character
    pub fn fill_all(&mut self, ch: char) {
        self.cells.fill(Cell::glyph(ch));
    }

    /// Copies `bitmap` onto this builder with its top-left at
    /// `(row_offset, col_offset)`.
    ///
    /// Empty source cells leave the destination untouched and anything
    /// falling outside this builder is clipped.
    pub fn fill_bitmap(&mut self, row_offset: i32, col_offset: i32, bitmap: &Bitmap) {
        trace!(
            row_offset,
            col_offset,
            width = bitmap.width(),
            height = bitmap.height();
            "Blitting bitmap"
        );
        for (row, col, cell) in bitmap.cells() {
            if !cell.is_empty() {
                self.put(row + row_offset, col + col_offset, *cell);
            }
        }
    }

    /// Freezes the builder
    pub fn build(self) -> Bitmap {
        Bitmap {
            size: self.size,
            cells: self.cells,
        }
    }
}

fn index_of(size: Size, row: i32, col: i32) -> Option<usize> {
    if row < 0 || col < 0 || row >= size.height() || col >= size.width() {
        return None;
    }
    Some(row as usize * size.width() as usize + col as usize)
}
