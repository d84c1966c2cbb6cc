//! Polyline rasterization.
//!
//! A line is an ordered list of absolute points joined by axis-aligned
//! segments. Two consecutive points that differ on both axes are joined by an
//! elbow that runs horizontally first:
//!
//! ```text
//!   (0,0) ──────┐
//!               │
//!               └── (4,2) is reached by going right, then down
//! ```
//!
//! The path is walked one cell at a time from the first point to the last.
//! Every step marks the side it leaves through on the current cell and the
//! opposite side on the next cell, so a cell ends up knowing every side the
//! path touches. The union of those sides picks its glyph.
//!
//! Anchors replace the first and last cells of the walk. The dash pattern is
//! applied to the remaining body cells in walk order, so reversing the point
//! list changes the dash phase and swaps which end gets which anchor.

use indexmap::IndexMap;
use log::{trace, warn};

use crate::{
    bitmap::{BitmapBuilder, Cell, Ink},
    crossing::Sides,
    geometry::{Direction, MAX_EXTENT, Point, Rect},
    raster::PositionedBitmap,
    style::{AnchorChar, LineExtra},
};

/// The cells a polyline walks through, in order
#[derive(Debug, Clone, PartialEq, Eq)]
struct Walk {
    cells: Vec<Point>,
    steps: Vec<Direction>,
}

impl Walk {
    fn new(points: &[Point]) -> Self {
        let mut current = points[0];
        let mut walk = Self {
            cells: vec![current],
            steps: Vec::new(),
        };
        for &target in &points[1..] {
            while current.left() != target.left() {
                let direction = if target.left() > current.left() {
                    Direction::Right
                } else {
                    Direction::Left
                };
                current = walk.advance(current, direction);
            }
            while current.top() != target.top() {
                let direction = if target.top() > current.top() {
                    Direction::Down
                } else {
                    Direction::Up
                };
                current = walk.advance(current, direction);
            }
        }
        walk
    }

    fn advance(&mut self, from: Point, direction: Direction) -> Point {
        let next = from.step(direction);
        self.cells.push(next);
        self.steps.push(direction);
        next
    }

    /// Returns the sides touched by the path for every visited cell
    fn sides(&self) -> IndexMap<Point, Sides> {
        let mut sides: IndexMap<Point, Sides> =
            self.cells.iter().map(|cell| (*cell, Sides::NONE)).collect();
        for (index, direction) in self.steps.iter().enumerate() {
            if let Some(side) = sides.get_mut(&self.cells[index]) {
                *side |= Sides::from_direction(*direction);
            }
            if let Some(side) = sides.get_mut(&self.cells[index + 1]) {
                *side |= Sides::from_direction(direction.opposite());
            }
        }
        sides
    }

    /// The direction the line points at its start anchor
    fn start_direction(&self) -> Direction {
        self.steps
            .first()
            .map_or(Direction::Left, |direction| direction.opposite())
    }

    /// The direction the line points at its end anchor
    fn end_direction(&self) -> Direction {
        self.steps.last().copied().unwrap_or(Direction::Right)
    }
}

/// Returns the width and height of the bounding box of `points`, computed
/// wide enough that far-apart points cannot overflow
fn span(points: &[Point]) -> (i64, i64) {
    let axis = |coordinate: fn(Point) -> i32| {
        let values = points.iter().map(|point| i64::from(coordinate(*point)));
        let min = values.clone().min().unwrap_or(0);
        let max = values.max().unwrap_or(0);
        max - min + 1
    };
    (axis(Point::left), axis(Point::top))
}

/// Rasterizes a polyline through `points`.
///
/// Returns `None` when fewer than two points are given, or when the points
/// span more than [`MAX_EXTENT`] cells on either axis. The bitmap covers the
/// bounding box of the points and is positioned at its top-left.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::geometry::Point;
/// # use gridsketch_core::raster::line::line_bitmap;
/// # use gridsketch_core::style::LineExtra;
/// let points = [Point::new(0, 0), Point::new(3, 0), Point::new(3, 2)];
/// let line = line_bitmap(&points, &LineExtra::default()).unwrap();
/// assert_eq!(line.bitmap().to_string(), "───┐\n   │\n   │");
/// ```
pub fn line_bitmap(points: &[Point], extra: &LineExtra) -> Option<PositionedBitmap> {
    if points.len() < 2 {
        return None;
    }
    let (width, height) = span(points);
    if width > i64::from(MAX_EXTENT) || height > i64::from(MAX_EXTENT) {
        warn!(width, height; "Line exceeds the extent limit, skipping");
        return None;
    }
    let bounds = Rect::bounding(points.iter().copied())?;
    let origin = bounds.position();
    trace!(
        points = points.len(),
        width = bounds.width(),
        height = bounds.height();
        "Rasterizing line"
    );

    let walk = Walk::new(points);
    let sides = walk.sides();
    let stroke = extra.stroke_style();
    let start_anchor = extra.start_anchor();
    let end_anchor = extra.end_anchor();
    let last = walk.cells.len() - 1;

    // Last visit decides whether a body cell prints
    let mut gaps: IndexMap<Point, bool> = IndexMap::new();
    let body_start = usize::from(start_anchor.is_some());
    let body_end = if end_anchor.is_some() { last } else { last + 1 };
    if body_start < body_end {
        for (index, cell) in walk.cells[body_start..body_end].iter().enumerate() {
            gaps.insert(*cell, extra.dash().is_gap(index));
        }
    }

    let mut builder = BitmapBuilder::new(bounds.width(), bounds.height());
    let mut put = |point: Point, cell: Cell| {
        let relative = point.relative_to(origin);
        builder.put(relative.top(), relative.left(), cell);
    };

    for (point, cell_sides) in &sides {
        let cell = match &stroke {
            Some(style) => {
                let ink = if gaps.get(point).copied().unwrap_or(false) {
                    Ink::Transparent
                } else {
                    Ink::Glyph(style.glyph(*cell_sides))
                };
                Cell::new(ink, Some(style.connection(*cell_sides)))
            }
            None => Cell::HOLLOW,
        };
        put(*point, cell);
    }

    let anchor_cell = |anchor: &AnchorChar, point: Point, direction: Direction| {
        let glyph = Ink::Glyph(anchor.glyph(direction));
        let directional = stroke.and_then(|style| {
            sides
                .get(&point)
                .map(|cell_sides| style.connection(*cell_sides))
        });
        Cell::new(glyph, directional)
    };
    if let Some(anchor) = start_anchor {
        let point = walk.cells[0];
        put(point, anchor_cell(anchor, point, walk.start_direction()));
    }
    if let Some(anchor) = end_anchor {
        let point = walk.cells[last];
        put(point, anchor_cell(anchor, point, walk.end_direction()));
    }

    Some(PositionedBitmap::new(origin, builder.build()))
}
