//! Integer geometry for character-cell grids.
//!
//! This module provides the value types used to address cells on a bitmap or
//! board.
//!
//! # Overview
//!
//! - [`Point`] - A cell coordinate (`left` is the column, `top` is the row)
//! - [`Size`] - Width and height in cells
//! - [`Rect`] - A rectangle of cells anchored at its top-left cell
//! - [`Direction`] - One of the four axis-aligned directions
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +left
//!     │
//!     │
//!     ▼
//!   +top
//! ```
//!
//! `right` and `bottom` are inclusive: a rectangle at `(0, 0)` with width 3
//! covers columns 0, 1 and 2, so its `right` is 2.
//!
//! # Limits
//!
//! Anything that allocates cells goes through [`Size::clamped`] first: no
//! axis grows beyond [`MAX_EXTENT`] cells and no grid holds more than
//! [`MAX_CELLS`] cells.

/// The largest width or height of any bitmap or board, in cells
pub const MAX_EXTENT: i32 = 4096;

/// The largest number of cells in any bitmap or board
pub const MAX_CELLS: usize = 1 << 20;

/// A cell coordinate on a grid.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::geometry::Point;
/// let p = Point::new(3, 4);
/// let moved = p.offset(-1, 2);
/// assert_eq!(moved, Point::new(2, 6));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    left: i32,
    top: i32,
}

impl Point {
    /// Creates a new point from a column and a row
    pub const fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }

    /// Returns the column of the point
    pub fn left(self) -> i32 {
        self.left
    }

    /// Returns the row of the point
    pub fn top(self) -> i32 {
        self.top
    }

    /// Returns a new point moved by the given column and row deltas
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left.saturating_add(dx),
            top: self.top.saturating_add(dy),
        }
    }

    /// Returns the neighbouring cell in the given direction
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Returns this point expressed relative to `origin`
    pub fn relative_to(self, origin: Point) -> Self {
        Self {
            left: self.left.saturating_sub(origin.left),
            top: self.top.saturating_sub(origin.top),
        }
    }
}

/// The dimensions of a bitmap or rectangle in cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the width in cells
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height in cells
    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns true if either dimension is zero or negative
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns the number of cells, treating negative dimensions as zero.
    ///
    /// Returns `None` if the count does not fit in `usize`.
    pub fn cell_count(self) -> Option<usize> {
        let width = usize::try_from(self.width.max(0)).ok()?;
        let height = usize::try_from(self.height.max(0)).ok()?;
        width.checked_mul(height)
    }

    /// Returns the size cut down to the allocation limits.
    ///
    /// Negative dimensions become zero. Width is kept up to [`MAX_EXTENT`];
    /// height is then cut so the grid holds at most [`MAX_CELLS`] cells.
    ///
    /// ```
    /// # use gridsketch_core::geometry::{MAX_CELLS, MAX_EXTENT, Size};
    /// assert_eq!(Size::new(-2, 3).clamped(), Size::new(0, 3));
    /// let huge = Size::new(70_000, 70_000).clamped();
    /// assert_eq!(huge.width(), MAX_EXTENT);
    /// assert!(huge.cell_count().is_some_and(|cells| cells <= MAX_CELLS));
    /// ```
    pub fn clamped(self) -> Self {
        let width = self.width.clamp(0, MAX_EXTENT);
        let rows_allowed = (MAX_CELLS / width.max(1) as usize) as i32;
        let height = self.height.clamp(0, MAX_EXTENT.min(rows_allowed));
        Self { width, height }
    }

    /// Returns true if [`Size::clamped`] would cut this size down
    pub fn exceeds_limits(self) -> bool {
        self.width.max(0) != self.clamped().width || self.height.max(0) != self.clamped().height
    }
}

/// A rectangle of cells anchored at its top-left cell.
///
/// Width and height are not validated: callers that pass non-positive
/// dimensions get a rectangle that contains no cells.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::geometry::{Point, Rect};
/// let rect = Rect::by_left_top_width_height(1, 2, 3, 4);
/// assert_eq!(rect.right(), 3);
/// assert_eq!(rect.bottom(), 5);
/// assert!(rect.contains(Point::new(3, 5)));
/// assert!(rect.is_vertex(Point::new(1, 5)));
/// assert!(!rect.contains(Point::new(4, 5)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    position: Point,
    size: Size,
}

impl Rect {
    /// Creates a rectangle from its top-left point and size
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Creates a rectangle from its left column, top row, width and height
    pub const fn by_left_top_width_height(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(Point::new(left, top), Size::new(width, height))
    }

    /// Creates the smallest rectangle containing both points
    pub fn by_points(a: Point, b: Point) -> Self {
        let left = a.left.min(b.left);
        let top = a.top.min(b.top);
        let right = a.left.max(b.left);
        let bottom = a.top.max(b.top);
        Self::by_left_top_width_height(left, top, extent(left, right), extent(top, bottom))
    }

    /// Creates the smallest rectangle containing every point, or `None` for an
    /// empty iterator
    pub fn bounding(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::by_points(first, first), |acc, point| {
            acc.union(&Self::by_points(point, point))
        }))
    }

    pub fn position(self) -> Point {
        self.position
    }

    pub fn size(self) -> Size {
        self.size
    }

    pub fn left(self) -> i32 {
        self.position.left
    }

    pub fn top(self) -> i32 {
        self.position.top
    }

    pub fn width(self) -> i32 {
        self.size.width
    }

    pub fn height(self) -> i32 {
        self.size.height
    }

    /// Returns the inclusive right-most column
    pub fn right(self) -> i32 {
        self.position.left.saturating_add(self.size.width - 1)
    }

    /// Returns the inclusive bottom-most row
    pub fn bottom(self) -> i32 {
        self.position.top.saturating_add(self.size.height - 1)
    }

    /// Returns true if the point lies inside the rectangle
    pub fn contains(self, point: Point) -> bool {
        point.left >= self.left()
            && point.left <= self.right()
            && point.top >= self.top()
            && point.top <= self.bottom()
    }

    /// Returns true if the point is one of the four corner cells
    pub fn is_vertex(self, point: Point) -> bool {
        (point.left == self.left() || point.left == self.right())
            && (point.top == self.top() || point.top == self.bottom())
    }

    /// Returns true if the two rectangles share at least one cell
    pub fn is_overlapped(self, other: Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Returns the cells shared by both rectangles, if any
    pub fn intersect(self, other: Rect) -> Option<Self> {
        if !self.is_overlapped(other) || self.size.is_empty() || other.size.is_empty() {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Self::by_left_top_width_height(
            left,
            top,
            extent(left, right),
            extent(top, bottom),
        ))
    }

    /// Returns the smallest rectangle containing both rectangles
    pub fn union(&self, other: &Self) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::by_left_top_width_height(left, top, extent(left, right), extent(top, bottom))
    }

    /// Returns the rectangle shrunk by `inset` cells on every side
    pub fn inset(self, inset: i32) -> Self {
        Self::by_left_top_width_height(
            self.left() + inset,
            self.top() + inset,
            self.width() - 2 * inset,
            self.height() - 2 * inset,
        )
    }
}

/// Number of cells from `first` to `last` inclusive, saturating at `i32::MAX`
fn extent(first: i32, last: i32) -> i32 {
    (i64::from(last) - i64::from(first) + 1).clamp(0, i64::from(i32::MAX)) as i32
}

/// One of the four axis-aligned directions on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the `(column, row)` delta of one step in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true for left and right
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns the direction of a single step between two adjacent cells
    pub fn between(from: Point, to: Point) -> Option<Self> {
        match (to.left - from.left, to.top - from.top) {
            (0, -1) => Some(Self::Up),
            (0, 1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_are_inclusive() {
        let rect = Rect::by_left_top_width_height(2, 3, 4, 5);
        assert_eq!(rect.left(), 2);
        assert_eq!(rect.top(), 3);
        assert_eq!(rect.right(), 5);
        assert_eq!(rect.bottom(), 7);
    }

    #[test]
    fn test_rect_contains_and_vertex() {
        let rect = Rect::by_left_top_width_height(0, 0, 3, 3);
        assert!(rect.contains(Point::new(1, 1)));
        assert!(!rect.contains(Point::new(3, 1)));
        assert!(rect.is_vertex(Point::new(2, 2)));
        assert!(!rect.is_vertex(Point::new(1, 2)));
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::by_left_top_width_height(0, 0, 3, 3);
        let b = Rect::by_left_top_width_height(2, 2, 3, 3);
        let c = Rect::by_left_top_width_height(3, 0, 3, 3);
        assert!(a.is_overlapped(b));
        assert!(!a.is_overlapped(c));
        assert_eq!(
            a.intersect(b),
            Some(Rect::by_left_top_width_height(2, 2, 1, 1))
        );
        assert_eq!(a.intersect(c), None);
    }

    #[test]
    fn test_rect_bounding() {
        let rect = Rect::bounding([Point::new(4, 1), Point::new(0, 3), Point::new(2, -1)]);
        assert_eq!(rect, Some(Rect::by_left_top_width_height(0, -1, 5, 5)));
        assert_eq!(Rect::bounding([]), None);
    }

    #[test]
    fn test_size_clamped_within_limits() {
        assert_eq!(Size::new(80, 24).clamped(), Size::new(80, 24));
        assert!(!Size::new(80, 24).exceeds_limits());
        assert!(!Size::new(-1, 5).exceeds_limits());

        let wide = Size::new(i32::MAX, 2).clamped();
        assert_eq!(wide, Size::new(MAX_EXTENT, 2));

        let huge = Size::new(70_000, 70_000);
        assert!(huge.exceeds_limits());
        assert_eq!(huge.clamped(), Size::new(MAX_EXTENT, 256));
        assert_eq!(huge.clamped().cell_count(), Some(MAX_CELLS));
    }

    #[test]
    fn test_far_apart_rects_saturate() {
        let a = Rect::by_left_top_width_height(i32::MIN, 0, 1, 1);
        let b = Rect::by_left_top_width_height(i32::MAX - 1, 0, 5, 1);
        assert_eq!(b.right(), i32::MAX);
        let union = a.union(&b);
        assert_eq!(union.left(), i32::MIN);
        assert_eq!(union.width(), i32::MAX);
    }

    #[test]
    fn test_size_cell_count() {
        assert_eq!(Size::new(3, 4).cell_count(), Some(12));
        assert_eq!(Size::new(-3, 4).cell_count(), Some(0));
        assert_eq!(
            Size::new(i32::MAX, i32::MAX).cell_count(),
            (i32::MAX as usize).checked_mul(i32::MAX as usize)
        );
    }

    #[test]
    fn test_direction_between() {
        let origin = Point::new(5, 5);
        assert_eq!(
            Direction::between(origin, Point::new(6, 5)),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::between(origin, Point::new(5, 4)),
            Some(Direction::Up)
        );
        assert_eq!(Direction::between(origin, Point::new(6, 6)), None);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }
}
