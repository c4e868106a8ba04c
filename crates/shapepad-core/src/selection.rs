//! Selection handles and frame manipulation.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum width and height a resize may produce.
pub const MIN_SHAPE_SIZE: f64 = 40.0;
/// Drawn handle size.
pub const HANDLE_SIZE: f64 = 16.0;
/// Side of the square hit zone centred on each corner.
pub const HANDLE_HIT_SIZE: f64 = 24.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in handle order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// Position of this corner on `frame`.
    pub fn position(self, frame: Rect) -> Point {
        match self {
            Corner::TopLeft => Point::new(frame.x0, frame.y0),
            Corner::TopRight => Point::new(frame.x1, frame.y0),
            Corner::BottomLeft => Point::new(frame.x0, frame.y1),
            Corner::BottomRight => Point::new(frame.x1, frame.y1),
        }
    }

    /// Direction the corner moves away from the frame: -1 for left/top, +1 for right/bottom.
    fn outward(self) -> Vec2 {
        match self {
            Corner::TopLeft => Vec2::new(-1.0, -1.0),
            Corner::TopRight => Vec2::new(1.0, -1.0),
            Corner::BottomLeft => Vec2::new(-1.0, 1.0),
            Corner::BottomRight => Vec2::new(1.0, 1.0),
        }
    }
}

/// A corner handle on a selected frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Centre of the handle in canvas coordinates.
    pub position: Point,
    pub corner: Corner,
}

impl Handle {
    pub fn new(position: Point, corner: Corner) -> Self {
        Self { position, corner }
    }

    /// Square of side `size` centred on the handle.
    pub fn rect(&self, size: f64) -> Rect {
        Rect::from_center_size(self.position, Size::new(size, size))
    }

    /// Check if a point falls inside the handle's square hit zone.
    pub fn hit_test(&self, point: Point) -> bool {
        let half = HANDLE_HIT_SIZE / 2.0;
        (point.x - self.position.x).abs() <= half && (point.y - self.position.y).abs() <= half
    }
}

/// The four corner handles of a frame.
pub fn corner_handles(frame: Rect) -> [Handle; 4] {
    Corner::ALL.map(|corner| Handle::new(corner.position(frame), corner))
}

/// Find which corner handle of `frame` (if any) is hit at the given point.
pub fn hit_test_corner_handle(frame: Rect, point: Point) -> Option<Corner> {
    corner_handles(frame)
        .into_iter()
        .find(|handle| handle.hit_test(point))
        .map(|handle| handle.corner)
}

/// Translate a frame by a drag delta.
pub fn translate_frame(original: Rect, delta: Vec2) -> Rect {
    original + delta
}

/// Resize `original` by dragging `corner` by `delta`.
///
/// The opposite corner stays fixed; width and height never drop below
/// [`MIN_SHAPE_SIZE`], so dragging past the anchor stops at the minimum
/// instead of inverting the frame.
pub fn resize_frame(original: Rect, corner: Corner, delta: Vec2) -> Rect {
    let anchor = corner.opposite().position(original);
    let outward = corner.outward();
    let width = (original.width() + outward.x * delta.x).max(MIN_SHAPE_SIZE);
    let height = (original.height() + outward.y * delta.y).max(MIN_SHAPE_SIZE);
    let moved = Point::new(anchor.x + outward.x * width, anchor.y + outward.y * height);
    Rect::from_points(anchor, moved)
}
