//! The render pipeline.
//!
//! Rendering runs in four steps:
//!
//! 1. Every description is rasterized into a positioned bitmap; groups are
//!    flattened in order and contribute only their children.
//! 2. The viewport is either the requested rectangle or the union of every
//!    placed bitmap.
//! 3. The bitmaps are composited onto a [`Board`] over the viewport in input
//!    order, so later shapes sit on top of earlier ones.
//! 4. The board is printed row by row, with trailing blanks trimmed from each
//!    row and trailing blank rows dropped.

use log::{debug, trace};
use serde::Deserialize;

use gridsketch_core::{
    board::{Board, Highlight},
    geometry::{Point, Rect, Size},
    raster::{
        PositionedBitmap, line::line_bitmap, rectangle::rectangle_bitmap, text::text_bitmap,
    },
};

use crate::{
    resolve::Resolver,
    shape::{ShapeDescription, ShapeKind},
};

/// Viewport extents requested by the caller.
///
/// When both extents are given the viewport is anchored at the origin.
/// Otherwise it is anchored at the top-left of the drawn shapes and the
/// missing extent is measured from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    width: Option<i32>,
    #[serde(default)]
    height: Option<i32>,
}

impl RenderOptions {
    pub fn new(width: Option<i32>, height: Option<i32>) -> Self {
        Self { width, height }
    }

    pub fn with_width(self, width: i32) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }

    pub fn with_height(self, height: i32) -> Self {
        Self {
            height: Some(height),
            ..self
        }
    }

    pub fn width(&self) -> Option<i32> {
        self.width
    }

    pub fn height(&self) -> Option<i32> {
        self.height
    }
}

/// Renders `shapes` to text; an empty scene renders to an empty string
pub(crate) fn render_shapes(
    shapes: &[ShapeDescription],
    options: RenderOptions,
    resolver: &Resolver<'_>,
) -> String {
    let placements = place_shapes(shapes, resolver);
    compose_board(&placements, options)
        .map(|board| board_text(&board))
        .unwrap_or_default()
}

/// Composites placed bitmaps over the viewport, or `None` when nothing was
/// placed
pub(crate) fn compose_board(
    placements: &[PositionedBitmap],
    options: RenderOptions,
) -> Option<Board> {
    let viewport = viewport(placements, options)?;
    debug!(
        left = viewport.left(),
        top = viewport.top(),
        width = viewport.width(),
        height = viewport.height(),
        bitmaps = placements.len();
        "Compositing scene"
    );

    let mut board = Board::new(viewport);
    for placement in placements {
        board.fill_bitmap(placement.position(), placement.bitmap(), Highlight::None);
    }
    Some(board)
}

/// Rasterizes every shape, flattening groups, and drops empty bitmaps
pub(crate) fn place_shapes(
    shapes: &[ShapeDescription],
    resolver: &Resolver<'_>,
) -> Vec<PositionedBitmap> {
    let mut placements = Vec::new();
    for shape in shapes {
        place_shape(shape, resolver, &mut placements);
    }
    placements.retain(|placement| !placement.bitmap().size().is_empty());
    placements
}

fn place_shape(
    shape: &ShapeDescription,
    resolver: &Resolver<'_>,
    placements: &mut Vec<PositionedBitmap>,
) {
    let origin = Point::new(shape.x.unwrap_or(0), shape.y.unwrap_or(0));
    match shape.kind {
        ShapeKind::Rectangle => {
            let size = Size::new(shape.width.unwrap_or(1), shape.height.unwrap_or(1));
            let bitmap = rectangle_bitmap(size, &resolver.rectangle_extra(shape));
            placements.push(PositionedBitmap::new(origin, bitmap));
        }
        ShapeKind::Text => {
            let extra = resolver.text_extra(shape);
            let lines: Vec<&str> = shape.content.as_deref().unwrap_or("").split('\n').collect();
            let padding = if extra.bound().stroke_style().is_some() {
                2
            } else {
                0
            };
            let longest = lines
                .iter()
                .map(|line| line.chars().count() as i32)
                .max()
                .unwrap_or(0)
                .max(1);
            let size = Size::new(
                shape.width.unwrap_or(longest + padding),
                shape.height.unwrap_or(lines.len() as i32 + padding),
            );
            let bitmap = text_bitmap(size, &lines, &extra);
            placements.push(PositionedBitmap::new(origin, bitmap));
        }
        ShapeKind::Line => {
            let points: Vec<Point> = shape
                .points
                .iter()
                .flatten()
                .map(|point| Point::from(*point))
                .collect();
            match line_bitmap(&points, &resolver.line_extra(shape)) {
                Some(line) => placements.push(line),
                None => trace!(points = points.len(); "Skipping line without a segment"),
            }
        }
        ShapeKind::Group => {
            for child in shape.children.iter().flatten() {
                place_shape(child, resolver, placements);
            }
        }
    }
}

/// Computes the viewport, or `None` when nothing was placed
fn viewport(placements: &[PositionedBitmap], options: RenderOptions) -> Option<Rect> {
    if let (Some(width), Some(height)) = (options.width, options.height) {
        return (!placements.is_empty())
            .then(|| Rect::by_left_top_width_height(0, 0, width, height));
    }
    let bounds = placements
        .iter()
        .map(PositionedBitmap::bounds)
        .reduce(|acc, bounds| acc.union(&bounds))?;
    Some(Rect::by_left_top_width_height(
        bounds.left(),
        bounds.top(),
        options.width.unwrap_or(bounds.width()),
        options.height.unwrap_or(bounds.height()),
    ))
}

/// Prints the board with trailing blanks and trailing blank rows removed
fn board_text(board: &Board) -> String {
    let mut rows: Vec<String> = board
        .rows()
        .map(|row| row.trim_end().to_string())
        .collect();
    while rows.last().is_some_and(String::is_empty) {
        rows.pop();
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use gridsketch_core::{crossing::Sides, style::Catalog};

    fn render(shapes: &[ShapeDescription], options: RenderOptions) -> String {
        let config = AppConfig::default();
        render_shapes(shapes, options, &Resolver::new(Catalog::builtin(), &config))
    }

    fn placements(shapes: &[ShapeDescription]) -> Vec<PositionedBitmap> {
        let config = AppConfig::default();
        place_shapes(shapes, &Resolver::new(Catalog::builtin(), &config))
    }

    #[test]
    fn test_empty_scene() {
        assert_eq!(render(&[], RenderOptions::default()), "");
        assert_eq!(
            render(&[], RenderOptions::default().with_width(4).with_height(4)),
            ""
        );
    }

    #[test]
    fn test_rectangle_defaults_to_single_cell() {
        let shape = ShapeDescription::new(ShapeKind::Rectangle);
        assert_eq!(render(&[shape], RenderOptions::default()), "□");
    }

    #[test]
    fn test_groups_are_flattened_in_order() {
        let shapes = [ShapeDescription::group(vec![
            ShapeDescription::rectangle(0, 0, 3, 2),
            ShapeDescription::group(vec![ShapeDescription::line([(4, 0), (6, 0)])]),
        ])];
        let placed = placements(&shapes);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[1].position(), Point::new(4, 0));
    }

    #[test]
    fn test_group_position_is_ignored() {
        let mut group = ShapeDescription::group(vec![ShapeDescription::rectangle(1, 1, 3, 2)]);
        group.x = Some(10);
        group.y = Some(10);
        let placed = placements(&[group]);
        assert_eq!(placed[0].position(), Point::new(1, 1));
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let shapes = [
            ShapeDescription::line([]),
            ShapeDescription::line([(3, 3)]),
            ShapeDescription::new(ShapeKind::Line),
        ];
        assert!(placements(&shapes).is_empty());
        assert_eq!(render(&shapes, RenderOptions::default()), "");
    }

    #[test]
    fn test_text_auto_size() {
        let bordered = placements(&[ShapeDescription::text(0, 0, "ab\nabcd")]);
        assert_eq!(bordered[0].bitmap().size(), Size::new(6, 4));

        let mut plain = ShapeDescription::text(0, 0, "ab\nabcd");
        plain.border = Some(crate::shape::BorderSpec {
            enabled: false,
            style: None,
            corner: None,
        });
        let plain = placements(&[plain]);
        assert_eq!(plain[0].bitmap().size(), Size::new(4, 2));

        let empty = placements(&[ShapeDescription::text(0, 0, "")]);
        assert_eq!(empty[0].bitmap().size(), Size::new(3, 3));
    }

    #[test]
    fn test_auto_viewport_is_union_of_bounds() {
        let placed = placements(&[
            ShapeDescription::rectangle(2, 1, 3, 2),
            ShapeDescription::line([(0, 5), (4, 5)]),
        ]);
        assert_eq!(
            viewport(&placed, RenderOptions::default()),
            Some(Rect::by_left_top_width_height(0, 1, 5, 5))
        );
    }

    #[test]
    fn test_explicit_viewport_is_anchored_at_origin() {
        let placed = placements(&[ShapeDescription::rectangle(2, 1, 3, 2)]);
        assert_eq!(
            viewport(&placed, RenderOptions::new(Some(10), Some(3))),
            Some(Rect::by_left_top_width_height(0, 0, 10, 3))
        );
    }

    #[test]
    fn test_single_extent_keeps_auto_origin() {
        let placed = placements(&[ShapeDescription::rectangle(2, 1, 3, 2)]);
        assert_eq!(
            viewport(&placed, RenderOptions::default().with_width(2)),
            Some(Rect::by_left_top_width_height(2, 1, 2, 2))
        );
        let shapes = [ShapeDescription::rectangle(2, 1, 3, 2)];
        assert_eq!(
            render(&shapes, RenderOptions::default().with_width(2)),
            "┌─\n└─"
        );
    }

    #[test]
    fn test_explicit_viewport_clips_and_pads() {
        let shapes = [ShapeDescription::rectangle(1, 1, 3, 2)];
        assert_eq!(
            render(&shapes, RenderOptions::new(Some(3), Some(5))),
            "\n ┌─\n └─"
        );
    }

    #[test]
    fn test_hidden_border_under_visible_line() {
        let mut hidden = ShapeDescription::rectangle(0, 0, 5, 4);
        hidden.border = Some(crate::shape::BorderSpec {
            enabled: false,
            style: None,
            corner: None,
        });
        let line = ShapeDescription::line([(0, 1), (6, 1)]);

        for shapes in [[hidden.clone(), line.clone()], [line.clone(), hidden.clone()]] {
            let placed = placements(&shapes);
            let board =
                compose_board(&placed, RenderOptions::default()).expect("Shapes were placed");
            assert_eq!(board_text(&board), "\n───────");

            // the line keeps its glyph and stroke record where it crosses the hidden edge
            for (left, sides) in [(0, Sides::RIGHT), (4, Sides::HORIZONTAL)] {
                let pixel = board.get(Point::new(left, 1)).expect("Inside the viewport");
                assert_eq!(pixel.visual(), '─');
                assert_eq!(
                    pixel.cell().directional().map(|connection| connection.sides()),
                    Some(sides)
                );
            }
            for corner in [Point::new(0, 0), Point::new(4, 0), Point::new(0, 3), Point::new(4, 3)] {
                assert!(board.is_occupied(corner));
            }
            assert!(board.is_occupied(Point::new(2, 3)));
            assert!(!board.is_occupied(Point::new(2, 2)));
            assert!(!board.is_occupied(Point::new(6, 0)));
        }
    }

    #[test]
    fn test_trailing_blank_rows_removed() {
        let mut hidden = ShapeDescription::rectangle(0, 3, 4, 2);
        hidden.border = Some(crate::shape::BorderSpec {
            enabled: false,
            style: None,
            corner: None,
        });
        let shapes = [ShapeDescription::rectangle(0, 0, 3, 2), hidden];
        assert_eq!(render(&shapes, RenderOptions::default()), "┌─┐\n└─┘");
    }

    #[test]
    fn test_options_deserialize() {
        let options: RenderOptions = serde_json::from_str(r#"{"width": 8}"#).expect("valid");
        assert_eq!(options, RenderOptions::default().with_width(8));
    }
}
