//! Shape kinds and their outline geometry.

use kurbo::{BezPath, Ellipse, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Flattening tolerance used when converting curves to paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Number of outer points on a star.
pub const STAR_POINTS: usize = 5;
/// Inner radius of a star relative to its outer radius.
pub const STAR_INNER_RATIO: f64 = 0.4;

/// The kinds of shape that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Star,
}

impl ShapeKind {
    /// All shape kinds, in palette order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Star,
    ];

    /// Display name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Star => "Star",
        }
    }

    /// Build the fill and hit-test outline of this kind drawn into `frame`.
    ///
    /// The outline depends only on the given rectangle, so the same call
    /// serves placed shapes and previews of arbitrary size.
    pub fn outline(self, frame: Rect) -> BezPath {
        match self {
            ShapeKind::Rectangle => frame.to_path(PATH_TOLERANCE),
            ShapeKind::Circle => Ellipse::from_rect(frame).to_path(PATH_TOLERANCE),
            ShapeKind::Triangle => triangle_path(frame),
            ShapeKind::Star => star_path(frame),
        }
    }
}

/// Isosceles triangle with its apex at the top-centre of `frame`.
fn triangle_path(frame: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(Point::new(frame.center().x, frame.y0));
    path.line_to(Point::new(frame.x1, frame.y1));
    path.line_to(Point::new(frame.x0, frame.y1));
    path.close_path();
    path
}

/// Vertices of a five-point star centred in `frame`, starting straight up.
pub fn star_vertices(frame: Rect) -> Vec<Point> {
    let center = frame.center();
    let outer = frame.width().abs().min(frame.height().abs()) / 2.0;
    let inner = outer * STAR_INNER_RATIO;
    let step = PI / STAR_POINTS as f64;

    (0..STAR_POINTS * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = i as f64 * step - FRAC_PI_2;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

fn star_path(frame: Rect) -> BezPath {
    let mut path = BezPath::new();
    let mut vertices = star_vertices(frame).into_iter();
    if let Some(first) = vertices.next() {
        path.move_to(first);
        for vertex in vertices {
            path.line_to(vertex);
        }
        path.close_path();
    }
    path
}
