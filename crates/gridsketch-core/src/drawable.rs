//! Fill strategies that rasterize to any requested size.
//!
//! A [`Drawable`] is either a single repeated character or a
//! [`NinePatch`]: a small template whose corner bands keep their size while
//! the bands between them stretch to fill the target.
//!
//! # Nine-patch bands
//!
//! Along each axis the template is split into fixed indices and
//! [`RepeatableRange`]s. Fixed indices map one-to-one to target cells. The
//! target cells left over once the fixed ones are placed are shared between
//! the ranges, and each range tiles its template slice across its share.
//!
//! ```text
//!   template        5 x 3 target
//!   ┌─┐             ┌───┐
//!   │ │     ──►     │   │
//!   └─┘             └───┘
//! ```

use log::trace;

use crate::bitmap::{Bitmap, BitmapBuilder, Cell};

/// How a stretchable band fills its share of the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// Tile the template slice
    Repeat,
    /// Stretch the template slice; single-cell slices are tiled, as are
    /// longer ones
    Scale,
}

/// An inclusive range of template indices that stretches with the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatableRange {
    kind: RangeKind,
    start: usize,
    end: usize,
}

impl RepeatableRange {
    /// Creates a tiling range over template indices `start..=end`
    pub fn repeat(start: usize, end: usize) -> Self {
        Self::new(RangeKind::Repeat, start, end)
    }

    /// Creates a scaling range over template indices `start..=end`
    pub fn scale(start: usize, end: usize) -> Self {
        Self::new(RangeKind::Scale, start, end)
    }

    fn new(kind: RangeKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start must not exceed end");
        Self { kind, start, end }
    }

    pub fn kind(&self) -> RangeKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.end - self.start + 1
    }

    fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Returns the template index for the `offset`-th target cell of this band
    fn source_index(&self, offset: usize) -> usize {
        match self.kind {
            RangeKind::Repeat | RangeKind::Scale => self.start + offset % self.len(),
        }
    }
}

/// A stretchable template of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NinePatch {
    rows: Vec<Vec<Cell>>,
    width: usize,
    horizontal_ranges: Vec<RepeatableRange>,
    vertical_ranges: Vec<RepeatableRange>,
}

impl NinePatch {
    /// Creates a nine-patch from template rows.
    ///
    /// Short rows are padded with transparent cells.
    pub fn new(
        mut rows: Vec<Vec<Cell>>,
        horizontal_ranges: Vec<RepeatableRange>,
        vertical_ranges: Vec<RepeatableRange>,
    ) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Cell::TRANSPARENT);
        }
        debug_assert!(
            horizontal_ranges.iter().all(|range| range.end < width),
            "horizontal range outside template"
        );
        debug_assert!(
            vertical_ranges.iter().all(|range| range.end < rows.len()),
            "vertical range outside template"
        );
        Self {
            rows,
            width,
            horizontal_ranges,
            vertical_ranges,
        }
    }

    /// Creates a nine-patch from a text template.
    ///
    /// Each line of `template` is one template row; spaces are transparent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gridsketch_core::drawable::{NinePatch, RepeatableRange};
    /// let patch = NinePatch::from_text(
    ///     "┌─┐\n│ │\n└─┘",
    ///     vec![RepeatableRange::repeat(1, 1)],
    ///     vec![RepeatableRange::repeat(1, 1)],
    /// );
    /// assert_eq!(patch.to_bitmap(5, 3).to_string(), "┌───┐\n│   │\n└───┘");
    /// ```
    pub fn from_text(
        template: &str,
        horizontal_ranges: Vec<RepeatableRange>,
        vertical_ranges: Vec<RepeatableRange>,
    ) -> Self {
        let rows = template
            .lines()
            .map(|line| {
                line.chars()
                    .map(|ch| {
                        if ch == ' ' {
                            Cell::TRANSPARENT
                        } else {
                            Cell::glyph(ch)
                        }
                    })
                    .collect()
            })
            .collect();
        Self::new(rows, horizontal_ranges, vertical_ranges)
    }

    /// Returns the template width
    pub fn template_width(&self) -> usize {
        self.width
    }

    /// Returns the template height
    pub fn template_height(&self) -> usize {
        self.rows.len()
    }

    /// Rasterizes the template to `width` x `height` cells
    pub fn to_bitmap(&self, width: i32, height: i32) -> Bitmap {
        let mut builder = BitmapBuilder::new(width, height);
        let size = builder.size();
        let columns = band_map(self.width, &self.horizontal_ranges, size.width() as usize);
        let rows = band_map(self.rows.len(), &self.vertical_ranges, size.height() as usize);
        trace!(width, height; "Rasterizing nine-patch");

        for (target_row, &source_row) in rows.iter().enumerate() {
            for (target_col, &source_col) in columns.iter().enumerate() {
                let cell = self.rows[source_row][source_col];
                if !cell.is_empty() {
                    builder.put(target_row as i32, target_col as i32, cell);
                }
            }
        }
        builder.build()
    }
}

/// Maps each target index along one axis to a template index.
///
/// The result holds at most `target` entries. It falls short only when the
/// template has no ranges to absorb the extra cells.
fn band_map(template_len: usize, ranges: &[RepeatableRange], target: usize) -> Vec<usize> {
    if template_len == 0 {
        return Vec::new();
    }

    let stretch_len: usize = ranges.iter().map(RepeatableRange::len).sum();
    let fixed_len = template_len.saturating_sub(stretch_len);
    let variable = target.saturating_sub(fixed_len);

    // Leftover cells go to the first ranges
    let share = |index: usize| {
        if ranges.is_empty() {
            0
        } else {
            variable / ranges.len() + usize::from(index < variable % ranges.len())
        }
    };

    let mut map = Vec::with_capacity(target);
    let mut source = 0;
    while source < template_len && map.len() < target {
        if let Some((index, range)) = ranges
            .iter()
            .enumerate()
            .find(|(_, range)| range.contains(source))
        {
            let cells = share(index);
            map.extend((0..cells).map(|offset| range.source_index(offset)));
            source = range.end + 1;
        } else {
            map.push(source);
            source += 1;
        }
    }
    map.truncate(target);
    map
}

/// A fill strategy that rasterizes to any size
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drawable {
    /// Every cell holds the same character
    Char(char),
    /// A stretchable template
    NinePatch(NinePatch),
}

impl Drawable {
    /// Rasterizes the drawable to `width` x `height` cells
    pub fn to_bitmap(&self, width: i32, height: i32) -> Bitmap {
        match self {
            Self::Char(ch) => {
                let mut builder = BitmapBuilder::new(width, height);
                builder.fill_all(*ch);
                builder.build()
            }
            Self::NinePatch(patch) => patch.to_bitmap(width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_patch() -> NinePatch {
        NinePatch::from_text(
            "┌─┐\n│ │\n└─┘",
            vec![RepeatableRange::repeat(1, 1)],
            vec![RepeatableRange::repeat(1, 1)],
        )
    }

    #[test]
    fn test_char_drawable_fills_uniformly() {
        let bitmap = Drawable::Char('░').to_bitmap(3, 2);
        assert_eq!(bitmap.to_string(), "░░░\n░░░");
    }

    #[test]
    fn test_nine_patch_stretches_middle() {
        let bitmap = box_patch().to_bitmap(4, 4);
        assert_eq!(bitmap.to_string(), "┌──┐\n│  │\n│  │\n└──┘");
    }

    #[test]
    fn test_nine_patch_at_minimum_size() {
        let bitmap = box_patch().to_bitmap(2, 2);
        assert_eq!(bitmap.to_string(), "┌┐\n└┘");
    }

    #[test]
    fn test_nine_patch_centre_is_transparent() {
        let bitmap = box_patch().to_bitmap(3, 3);
        assert!(bitmap.get(1, 1).is_some_and(|cell| cell.is_empty()));
    }

    #[test]
    fn test_nine_patch_tiles_multi_cell_band() {
        let patch = NinePatch::from_text(
            "<ab>",
            vec![RepeatableRange::repeat(1, 2)],
            Vec::new(),
        );
        assert_eq!(patch.to_bitmap(7, 1).to_string(), "<ababa>");
    }

    #[test]
    fn test_scale_band_tiles_like_repeat() {
        let patch = NinePatch::from_text("[=]", vec![RepeatableRange::scale(1, 1)], Vec::new());
        assert_eq!(patch.to_bitmap(5, 1).to_string(), "[===]");
    }

    #[test]
    fn test_band_map_splits_leftover_between_ranges() {
        let ranges = [RepeatableRange::repeat(1, 1), RepeatableRange::repeat(3, 3)];
        assert_eq!(band_map(5, &ranges, 8), vec![0, 1, 1, 1, 2, 3, 3, 4]);
    }

    #[test]
    fn test_band_map_smaller_than_template() {
        let ranges = [RepeatableRange::repeat(1, 1)];
        assert_eq!(band_map(3, &ranges, 1), vec![0]);
        assert_eq!(band_map(3, &ranges, 0), Vec::<usize>::new());
    }
}
