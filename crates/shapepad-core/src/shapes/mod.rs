//! Shape definitions for the canvas.

mod color;
mod kind;

pub use color::{RANDOM_CHANNEL_MAX, RANDOM_CHANNEL_MIN, ShapeColor};
pub use kind::{STAR_INNER_RATIO, STAR_POINTS, ShapeKind, star_vertices};

use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Side length of newly placed shapes.
pub const DEFAULT_SHAPE_SIZE: f64 = 120.0;

/// A shape placed on the canvas.
///
/// Identity, kind and color are fixed at creation. The frame changes only
/// through [`Canvas::update_frame`](crate::Canvas::update_frame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ShapeId,
    kind: ShapeKind,
    pub(crate) frame: Rect,
    color: ShapeColor,
}

impl Shape {
    /// Create a new shape with a fresh identifier.
    pub fn new(kind: ShapeKind, frame: Rect, color: ShapeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            frame,
            color,
        }
    }

    /// Create a shape of the default size centred on `center`.
    pub fn centered(kind: ShapeKind, center: Point, color: ShapeColor) -> Self {
        let size = Size::new(DEFAULT_SHAPE_SIZE, DEFAULT_SHAPE_SIZE);
        Self::new(kind, Rect::from_center_size(center, size), color)
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Bounding frame in canvas coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn color(&self) -> ShapeColor {
        self.color
    }

    /// Outline path for the shape's current frame.
    pub fn outline(&self) -> BezPath {
        self.kind.outline(self.frame)
    }

    /// Check if a point lies inside the shape's outline.
    ///
    /// Points on the frame boundary count as inside for rectangles on every
    /// edge alike.
    pub fn contains(&self, point: Point) -> bool {
        let frame = self.frame.abs();
        // Cheap inclusive reject before building the path.
        if point.x < frame.x0 || point.x > frame.x1 || point.y < frame.y0 || point.y > frame.y1 {
            return false;
        }
        match self.kind {
            // The outline is the frame itself.
            ShapeKind::Rectangle => true,
            _ => self.outline().contains(point),
        }
    }
}
