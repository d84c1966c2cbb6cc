//! Fill and border styles backed by drawables.

use crate::{bitmap::Bitmap, drawable::Drawable};

/// A rectangle fill: an identifier plus the drawable that paints the interior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillStyle {
    id: &'static str,
    name: &'static str,
    drawable: Drawable,
}

impl FillStyle {
    pub fn new(id: &'static str, name: &'static str, drawable: Drawable) -> Self {
        Self { id, name, drawable }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn drawable(&self) -> &Drawable {
        &self.drawable
    }

    /// Paints the fill over `width` x `height` cells
    pub fn to_bitmap(&self, width: i32, height: i32) -> Bitmap {
        self.drawable.to_bitmap(width, height)
    }
}

/// A rectangle border drawn from a nine-patch template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderStyle {
    id: &'static str,
    name: &'static str,
    drawable: Drawable,
}

impl BorderStyle {
    pub fn new(id: &'static str, name: &'static str, drawable: Drawable) -> Self {
        Self { id, name, drawable }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Paints the border frame over `width` x `height` cells
    pub fn to_bitmap(&self, width: i32, height: i32) -> Bitmap {
        self.drawable.to_bitmap(width, height)
    }
}
