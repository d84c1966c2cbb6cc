//! Declarative shape descriptions.
//!
//! A [`ShapeDescription`] is the JSON-facing form of one shape. Every field
//! except the type is optional so descriptions can be written by hand and
//! patched field by field; the renderer fills in defaults:
//!
//! ```json
//! { "type": "rectangle", "x": 0, "y": 0, "width": 12, "height": 3,
//!   "border": { "enabled": true, "corner": "rounded" } }
//! { "type": "text", "content": "Hello", "horizontalAlign": "left" }
//! { "type": "line", "points": [{"x": 6, "y": 3}, {"x": 6, "y": 6}], "endAnchor": "A1" }
//! ```
//!
//! A [`Scene`] is a list of descriptions plus optional viewport extents, read
//! either from a bare array or from an object with a `shapes` key.

use serde::{Deserialize, Serialize};

use gridsketch_core::{
    geometry::Point,
    style::{CornerPattern, HorizontalAlign, VerticalAlign},
};

use crate::render::RenderOptions;

/// The closed set of shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Text,
    Line,
    Group,
}

/// An absolute cell coordinate in a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSpec {
    pub x: i32,
    pub y: i32,
}

impl From<PointSpec> for Point {
    fn from(point: PointSpec) -> Self {
        Point::new(point.x, point.y)
    }
}

/// Border settings of a rectangle or text box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderSpec {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner: Option<CornerPattern>,
}

/// Fill settings of a rectangle or text box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillSpec {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Stroke settings of a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeSpec {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// A dash pattern as written in a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashSpec {
    pub dash: u32,
    pub gap: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
}

/// One shape of a scene.
///
/// Fields that do not apply to the shape's kind are ignored when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescription {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_align: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<PointSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<DashSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ShapeDescription>>,
}

impl ShapeDescription {
    /// Creates a description of `kind` with every other field unset
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            x: None,
            y: None,
            width: None,
            height: None,
            content: None,
            horizontal_align: None,
            vertical_align: None,
            points: None,
            start_anchor: None,
            end_anchor: None,
            border: None,
            fill: None,
            stroke: None,
            dash: None,
            children: None,
        }
    }

    /// Creates a bordered rectangle
    pub fn rectangle(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Self::new(ShapeKind::Rectangle)
        }
    }

    /// Creates a text shape at `(x, y)` that sizes itself to `content`
    pub fn text(x: i32, y: i32, content: impl Into<String>) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            content: Some(content.into()),
            ..Self::new(ShapeKind::Text)
        }
    }

    /// Creates a line through `points`
    pub fn line(points: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            points: Some(points.into_iter().map(|(x, y)| PointSpec { x, y }).collect()),
            ..Self::new(ShapeKind::Line)
        }
    }

    /// Creates a group of `children`
    pub fn group(children: Vec<ShapeDescription>) -> Self {
        Self {
            children: Some(children),
            ..Self::new(ShapeKind::Group)
        }
    }

    /// Replaces every field that is present in `patch`
    pub fn apply(&mut self, patch: ShapePatch) {
        let ShapePatch {
            kind,
            x,
            y,
            width,
            height,
            content,
            horizontal_align,
            vertical_align,
            points,
            start_anchor,
            end_anchor,
            border,
            fill,
            stroke,
            dash,
            children,
        } = patch;

        if let Some(kind) = kind {
            self.kind = kind;
        }
        self.x = x.or(self.x);
        self.y = y.or(self.y);
        self.width = width.or(self.width);
        self.height = height.or(self.height);
        self.content = content.or(self.content.take());
        self.horizontal_align = horizontal_align.or(self.horizontal_align);
        self.vertical_align = vertical_align.or(self.vertical_align);
        self.points = points.or(self.points.take());
        self.start_anchor = start_anchor.or(self.start_anchor.take());
        self.end_anchor = end_anchor.or(self.end_anchor.take());
        self.border = border.or(self.border.take());
        self.fill = fill.or(self.fill.take());
        self.stroke = stroke.or(self.stroke.take());
        self.dash = dash.or(self.dash);
        self.children = children.or(self.children.take());
    }
}

/// A partial update of a [`ShapeDescription`].
///
/// Present fields replace the stored ones wholesale; nested objects such as
/// `border` are not merged key by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapePatch {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ShapeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_align: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<PointSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<DashSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ShapeDescription>>,
}

/// The accepted layouts of a scene document
#[derive(Deserialize)]
#[serde(untagged)]
enum SceneInput {
    Shapes(Vec<ShapeDescription>),
    Scene {
        shapes: Vec<ShapeDescription>,
        #[serde(default)]
        width: Option<i32>,
        #[serde(default)]
        height: Option<i32>,
    },
}

impl From<SceneInput> for Scene {
    fn from(input: SceneInput) -> Self {
        match input {
            SceneInput::Shapes(shapes) => Self {
                shapes,
                width: None,
                height: None,
            },
            SceneInput::Scene {
                shapes,
                width,
                height,
            } => Self {
                shapes,
                width,
                height,
            },
        }
    }
}

/// A list of shapes to render together, with optional viewport extents
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "SceneInput")]
pub struct Scene {
    shapes: Vec<ShapeDescription>,
    width: Option<i32>,
    height: Option<i32>,
}

impl Scene {
    pub fn new(shapes: Vec<ShapeDescription>) -> Self {
        Self {
            shapes,
            width: None,
            height: None,
        }
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

    pub fn shapes(&self) -> &[ShapeDescription] {
        &self.shapes
    }

    /// Returns the viewport extents requested by the scene
    pub fn options(&self) -> RenderOptions {
        RenderOptions::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_description() {
        let json = r#"{
            "type": "text",
            "x": 2, "y": 3, "width": 9, "height": 3,
            "content": "Hello",
            "horizontalAlign": "left",
            "verticalAlign": "bottom",
            "border": {"enabled": true, "style": "S2", "corner": "rounded"},
            "fill": {"enabled": false},
            "dash": {"dash": 2, "gap": 1}
        }"#;
        let shape: ShapeDescription = serde_json::from_str(json).expect("valid shape");
        assert_eq!(shape.kind, ShapeKind::Text);
        assert_eq!(shape.x, Some(2));
        assert_eq!(shape.horizontal_align, Some(HorizontalAlign::Left));
        assert_eq!(shape.vertical_align, Some(VerticalAlign::Bottom));
        let border = shape.border.expect("border");
        assert_eq!(border.style.as_deref(), Some("S2"));
        assert_eq!(border.corner, Some(CornerPattern::Rounded));
        assert_eq!(
            shape.dash,
            Some(DashSpec {
                dash: 2,
                gap: 1,
                offset: None
            })
        );
    }

    #[test]
    fn test_parse_line_and_group() {
        let json = r#"{"type": "group", "children": [
            {"type": "line", "points": [{"x": 0, "y": 0}, {"x": 4, "y": 0}], "endAnchor": "A1"}
        ]}"#;
        let shape: ShapeDescription = serde_json::from_str(json).expect("valid shape");
        let children = shape.children.expect("children");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind, ShapeKind::Line);
        assert_eq!(children[0].end_anchor.as_deref(), Some("A1"));
        assert_eq!(children[0].points.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_str::<ShapeDescription>(r#"{"type": "circle"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization_skips_unset_fields() {
        let json = serde_json::to_string(&ShapeDescription::rectangle(1, 2, 3, 4))
            .expect("serializable");
        assert_eq!(
            json,
            r#"{"type":"rectangle","x":1,"y":2,"width":3,"height":4}"#
        );
    }

    #[test]
    fn test_apply_patch_replaces_present_fields() {
        let mut shape = ShapeDescription::text(0, 0, "old");
        shape.border = Some(BorderSpec {
            enabled: true,
            style: Some("S2".to_string()),
            corner: None,
        });
        let patch: ShapePatch =
            serde_json::from_str(r#"{"content": "new", "x": 5, "border": {"enabled": false}}"#)
                .expect("valid patch");
        shape.apply(patch);

        assert_eq!(shape.kind, ShapeKind::Text);
        assert_eq!(shape.x, Some(5));
        assert_eq!(shape.y, Some(0));
        assert_eq!(shape.content.as_deref(), Some("new"));
        // nested objects are replaced, not merged
        assert_eq!(
            shape.border,
            Some(BorderSpec {
                enabled: false,
                style: None,
                corner: None
            })
        );
    }

    #[test]
    fn test_apply_patch_can_change_kind() {
        let mut shape = ShapeDescription::rectangle(0, 0, 3, 3);
        shape.apply(ShapePatch {
            kind: Some(ShapeKind::Text),
            content: Some("hi".to_string()),
            ..Default::default()
        });
        assert_eq!(shape.kind, ShapeKind::Text);
        assert_eq!(shape.width, Some(3));
    }

    #[test]
    fn test_scene_from_bare_array() {
        let scene: Scene =
            serde_json::from_str(r#"[{"type": "rectangle"}]"#).expect("valid scene");
        assert_eq!(scene.shapes().len(), 1);
        assert_eq!(scene.options(), RenderOptions::default());
    }

    #[test]
    fn test_scene_from_object() {
        let scene: Scene = serde_json::from_str(
            r#"{"shapes": [{"type": "line", "points": []}], "width": 10, "height": 4}"#,
        )
        .expect("valid scene");
        assert_eq!(scene.shapes().len(), 1);
        assert_eq!(
            scene.options(),
            RenderOptions::default().with_width(10).with_height(4)
        );
    }
}
