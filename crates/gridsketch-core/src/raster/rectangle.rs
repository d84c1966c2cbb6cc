//! Rectangle rasterization.
//!
//! The border is walked as one continuous path, clockwise from the top-left
//! corner:
//!
//! ```text
//!   0 1 2 3 4
//!   ┌───────┐   top edge runs left to right,
//!   │       │   right edge top to bottom,
//!   └───────┘   bottom edge right to left, left edge bottom to top
//! ```
//!
//! The dash pattern is evaluated against the index of each cell in that walk.
//! A gap prints nothing but keeps its stroke record so the board can still
//! merge it into a junction.

use log::trace;

use crate::{
    bitmap::{Bitmap, BitmapBuilder, Cell, Ink},
    crossing::Sides,
    geometry::Size,
    style::{DashPattern, RectangleExtra, StrokeStyle},
};

/// The glyph drawn for a 1x1 rectangle
pub const SINGLE_CELL_GLYPH: char = '\u{25A1}';

/// One cell of the border walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BorderCell {
    row: i32,
    col: i32,
    glyph: char,
    sides: Sides,
}

/// Rasterizes a rectangle of `size` with the given style.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::geometry::Size;
/// # use gridsketch_core::raster::rectangle::rectangle_bitmap;
/// # use gridsketch_core::style::RectangleExtra;
/// let bitmap = rectangle_bitmap(Size::new(4, 3), &RectangleExtra::default());
/// assert_eq!(bitmap.to_string(), "┌──┐\n│  │\n└──┘");
/// ```
pub fn rectangle_bitmap(size: Size, extra: &RectangleExtra) -> Bitmap {
    trace!(width = size.width(), height = size.height(); "Rasterizing rectangle");
    let mut builder = BitmapBuilder::new(size.width(), size.height());
    // oversized rectangles are drawn at the clipped size
    let size = builder.size();

    if size.width() == 1 && size.height() == 1 {
        builder.put_char(0, 0, SINGLE_CELL_GLYPH);
        return builder.build();
    }

    let fill = extra.fill_style();
    let stroke = extra.stroke_style();

    if fill.is_none() && stroke.is_none() {
        draw_hollow_border(&mut builder, size);
        return builder.build();
    }

    if let Some(fill) = fill {
        builder.fill_bitmap(0, 0, &fill.to_bitmap(size.width(), size.height()));
    }

    let stroke_allowed = fill.is_none() || (size.width() > 1 && size.height() > 1);
    if let Some(stroke) = stroke.filter(|_| stroke_allowed) {
        if stroke.is_hollow() {
            draw_hollow_border(&mut builder, size);
        } else {
            draw_border(&mut builder, size, &stroke, extra.dash());
        }
    }

    builder.build()
}

fn draw_border(builder: &mut BitmapBuilder, size: Size, stroke: &StrokeStyle, dash: DashPattern) {
    for (index, cell) in border_cells(size, stroke).into_iter().enumerate() {
        let connection = stroke.connection(cell.sides);
        let ink = if dash.is_gap(index) {
            Ink::Transparent
        } else {
            Ink::Glyph(cell.glyph)
        };
        builder.put(cell.row, cell.col, Cell::new(ink, Some(connection)));
    }
}

/// Marks the border walk as occupied without printing anything
fn draw_hollow_border(builder: &mut BitmapBuilder, size: Size) {
    let stroke = StrokeStyle::hollow("", "");
    for cell in border_cells(size, &stroke) {
        builder.put(cell.row, cell.col, Cell::HOLLOW);
    }
}

/// Lists the border cells in walk order.
///
/// Single-column rectangles walk their rows except the last, and single-row
/// rectangles walk their columns except the last.
fn border_cells(size: Size, stroke: &StrokeStyle) -> Vec<BorderCell> {
    let right = size.width() - 1;
    let bottom = size.height() - 1;
    let mut cells = Vec::new();

    let mut push = |row: i32, col: i32, glyph: char, sides: Sides| {
        cells.push(BorderCell {
            row,
            col,
            glyph,
            sides,
        });
    };

    if size.is_empty() {
        // nothing to walk
    } else if size.width() == 1 {
        for row in 0..bottom {
            push(row, 0, stroke.vertical(), Sides::VERTICAL);
        }
    } else if size.height() == 1 {
        for col in 0..right {
            push(0, col, stroke.horizontal(), Sides::HORIZONTAL);
        }
    } else {
        push(0, 0, stroke.up_right(), Sides::DOWN | Sides::RIGHT);
        for col in 1..right {
            push(0, col, stroke.horizontal(), Sides::HORIZONTAL);
        }
        push(0, right, stroke.down_left(), Sides::DOWN | Sides::LEFT);
        for row in 1..bottom {
            push(row, right, stroke.vertical(), Sides::VERTICAL);
        }
        push(bottom, right, stroke.up_left(), Sides::UP | Sides::LEFT);
        for col in (1..right).rev() {
            push(bottom, col, stroke.horizontal(), Sides::HORIZONTAL);
        }
        push(bottom, 0, stroke.down_right(), Sides::UP | Sides::RIGHT);
        for row in (1..bottom).rev() {
            push(row, 0, stroke.vertical(), Sides::VERTICAL);
        }
    }
    cells
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bordered_rectangle_glyph_counts(width in 2i32..20, height in 2i32..20) {
            let bitmap = rectangle_bitmap(Size::new(width, height), &RectangleExtra::default());
            let text = bitmap.to_string();
            for corner in ['┌', '┐', '└', '┘'] {
                prop_assert_eq!(text.chars().filter(|c| *c == corner).count(), 1);
            }
            let horizontal = text.chars().filter(|c| *c == '─').count() as i32;
            let vertical = text.chars().filter(|c| *c == '│').count() as i32;
            prop_assert_eq!(horizontal, 2 * (width - 2));
            prop_assert_eq!(vertical, 2 * (height - 2));
        }

        #[test]
        fn border_walk_visits_each_cell_once(width in 2i32..20, height in 2i32..20) {
            let stroke = StrokeStyle::hollow("", "");
            let cells = border_cells(Size::new(width, height), &stroke);
            prop_assert_eq!(cells.len() as i32, 2 * (width + height) - 4);
            let mut positions: Vec<(i32, i32)> = cells.iter().map(|c| (c.row, c.col)).collect();
            positions.sort_unstable();
            positions.dedup();
            prop_assert_eq!(positions.len(), cells.len());
        }
    }
}
