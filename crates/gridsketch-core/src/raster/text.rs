//! Text box rasterization.
//!
//! A text box is a rectangle (see [`rectangle_bitmap`]) with lines of text
//! placed inside. With a border the text area is the rectangle shrunk by one
//! cell on every side; without one it is the whole rectangle.
//!
//! Wrapping is the caller's job: lines arrive pre-split and anything wider
//! than the text area is cut off.

use log::trace;

use crate::{
    bitmap::{Bitmap, BitmapBuilder},
    geometry::{Rect, Size},
    raster::rectangle::rectangle_bitmap,
    style::{HorizontalAlign, TextExtra, VerticalAlign},
};

/// Rasterizes a text box of `size` holding `lines`.
///
/// # Examples
///
/// ```
/// # use gridsketch_core::geometry::Size;
/// # use gridsketch_core::raster::text::text_bitmap;
/// # use gridsketch_core::style::TextExtra;
/// let bitmap = text_bitmap(Size::new(7, 3), &["Hi"], &TextExtra::default());
/// assert_eq!(bitmap.to_string(), "┌─────┐\n│ Hi  │\n└─────┘");
/// ```
pub fn text_bitmap<S: AsRef<str>>(size: Size, lines: &[S], extra: &TextExtra) -> Bitmap {
    let mut builder = BitmapBuilder::new(size.width(), size.height());
    let size = builder.size();
    builder.fill_bitmap(0, 0, &rectangle_bitmap(size, extra.bound()));

    let bordered = extra.bound().stroke_style().is_some();
    let full = Rect::new(Default::default(), size);
    let area = if bordered { full.inset(1) } else { full };
    trace!(
        width = area.width(),
        height = area.height(),
        lines = lines.len();
        "Placing text"
    );
    if area.size().is_empty() {
        return builder.build();
    }

    let row_offset = Placement::from(extra.vertical_align()).offset(area.height(), lines.len() as i32);
    let horizontal = Placement::from(extra.horizontal_align());
    for (index, line) in lines.iter().enumerate() {
        let row = row_offset + index as i32;
        if row >= area.height() {
            break;
        }
        let chars: Vec<char> = line
            .as_ref()
            .chars()
            .take(area.width() as usize)
            .collect();
        let col_offset = horizontal.offset(area.width(), chars.len() as i32);
        for (col, ch) in chars.into_iter().enumerate() {
            builder.put_char(area.top() + row, area.left() + col_offset + col as i32, ch);
        }
    }

    builder.build()
}

/// Where content sits along one axis of the text area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Start,
    Center,
    End,
}

impl From<HorizontalAlign> for Placement {
    fn from(align: HorizontalAlign) -> Self {
        match align {
            HorizontalAlign::Left => Self::Start,
            HorizontalAlign::Center => Self::Center,
            HorizontalAlign::Right => Self::End,
        }
    }
}

impl From<VerticalAlign> for Placement {
    fn from(align: VerticalAlign) -> Self {
        match align {
            VerticalAlign::Top => Self::Start,
            VerticalAlign::Middle => Self::Center,
            VerticalAlign::Bottom => Self::End,
        }
    }
}

impl Placement {
    /// Returns the offset of content of length `used` inside `available`
    /// cells, clamped at 0 when the content overflows
    fn offset(self, available: i32, used: i32) -> i32 {
        let free = (available - used).max(0);
        match self {
            Self::Start => 0,
            Self::Center => free / 2,
            Self::End => free,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::RectangleExtra;

    fn aligned(horizontal: HorizontalAlign, vertical: VerticalAlign) -> TextExtra {
        TextExtra::new(RectangleExtra::default(), horizontal, vertical)
    }

    fn unbordered(horizontal: HorizontalAlign, vertical: VerticalAlign) -> TextExtra {
        TextExtra::new(
            RectangleExtra::default().with_border_enabled(false),
            horizontal,
            vertical,
        )
    }

    #[test]
    fn test_wrapped_lines_centered() {
        let lines = ["01234", "5678", "abc"];
        let bitmap = text_bitmap(
            Size::new(7, 5),
            &lines,
            &aligned(HorizontalAlign::Center, VerticalAlign::Middle),
        );
        assert_eq!(
            bitmap.to_string(),
            "┌─────┐\n│01234│\n│5678 │\n│ abc │\n└─────┘"
        );
    }

    #[test]
    fn test_vertical_middle() {
        let bitmap = text_bitmap(
            Size::new(7, 5),
            &["AB", "CD"],
            &aligned(HorizontalAlign::Left, VerticalAlign::Middle),
        );
        let rows: Vec<String> = bitmap.to_string().lines().map(String::from).collect();
        assert_eq!(rows[1], "│AB   │");
        assert_eq!(rows[2], "│CD   │");
        assert_eq!(rows[3], "│     │");
    }

    #[test]
    fn test_right_bottom() {
        let bitmap = text_bitmap(
            Size::new(6, 4),
            &["ab"],
            &aligned(HorizontalAlign::Right, VerticalAlign::Bottom),
        );
        assert_eq!(bitmap.to_string(), "┌────┐\n│    │\n│  ab│\n└────┘");
    }

    #[test]
    fn test_unbordered_uses_full_area() {
        let bitmap = text_bitmap(
            Size::new(4, 2),
            &["xy"],
            &unbordered(HorizontalAlign::Left, VerticalAlign::Top),
        );
        assert_eq!(bitmap.to_string(), "xy  \n    ");
        assert!(bitmap.get(1, 0).is_some_and(|cell| !cell.is_opaque()));
    }

    #[test]
    fn test_long_lines_are_truncated() {
        let bitmap = text_bitmap(
            Size::new(5, 3),
            &["abcdef"],
            &aligned(HorizontalAlign::Center, VerticalAlign::Middle),
        );
        assert_eq!(bitmap.to_string(), "┌───┐\n│abc│\n└───┘");
    }

    #[test]
    fn test_overflowing_rows_keep_first_lines() {
        let bitmap = text_bitmap(
            Size::new(3, 3),
            &["a", "b", "c"],
            &aligned(HorizontalAlign::Center, VerticalAlign::Bottom),
        );
        assert_eq!(bitmap.to_string(), "┌─┐\n│a│\n└─┘");
    }

    #[test]
    fn test_spaces_in_text_are_opaque() {
        let bitmap = text_bitmap(
            Size::new(3, 1),
            &["a b"],
            &unbordered(HorizontalAlign::Left, VerticalAlign::Top),
        );
        assert!(bitmap.get(0, 1).is_some_and(|cell| cell.is_opaque()));
    }

    #[test]
    fn test_placement_offset() {
        assert_eq!(Placement::Center.offset(5, 4), 0);
        assert_eq!(Placement::Center.offset(5, 2), 1);
        assert_eq!(Placement::End.offset(5, 2), 3);
        assert_eq!(Placement::End.offset(2, 5), 0);
        assert_eq!(Placement::Start.offset(9, 1), 0);
    }
}
