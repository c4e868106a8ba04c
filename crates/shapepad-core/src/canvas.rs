//! Canvas state: the ordered shape list and the current selection.

use crate::random::{RandomSource, StdRandom};
use crate::shapes::{DEFAULT_SHAPE_SIZE, Shape, ShapeColor, ShapeId, ShapeKind};
use kurbo::{Point, Rect};

/// The authoritative shape list of a drawing session.
///
/// Shapes are kept back to front: index 0 is drawn first, the last shape is
/// topmost. At most one shape is selected; the selection always refers to a
/// shape that is present.
#[derive(Debug, Clone)]
pub struct Canvas<R = StdRandom> {
    /// Shapes in z-order (back to front).
    shapes: Vec<Shape>,
    /// Currently selected shape.
    selected: Option<ShapeId>,
    /// Source for placement and color randomness.
    rng: R,
}

impl Default for Canvas<StdRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas<StdRandom> {
    /// Create an empty canvas using an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_random(StdRandom::from_entropy())
    }
}

impl<R> Canvas<R> {
    /// Create an empty canvas with the given random source.
    pub fn with_random(rng: R) -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            rng,
        }
    }

    /// Shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    /// Position of a shape in z-order.
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|shape| shape.id == id)
    }

    /// Currently selected shape ID.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Currently selected shape.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.get_shape(id))
    }

    /// Check if a shape is selected.
    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected == Some(id)
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the canvas is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Topmost shape whose outline contains `point`.
    pub fn shape_at_point(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|shape| shape.contains(point))
            .map(Shape::id)
    }

    /// Select a shape, or clear the selection with `None`.
    ///
    /// An ID that is not on the canvas clears the selection.
    pub fn select_shape(&mut self, id: Option<ShapeId>) {
        self.selected = match id {
            Some(id) if self.index_of(id).is_some() => Some(id),
            Some(id) => {
                log::warn!("Ignoring selection of unknown shape {}", id);
                None
            }
            None => None,
        };
    }

    /// Delete the selected shape. Does nothing without a selection.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected.take() else {
            return;
        };
        self.shapes.retain(|shape| shape.id != id);
        log::debug!("Deleted shape {}", id);
    }

    /// Move a shape to the end of the z-order (topmost).
    pub fn bring_to_front(&mut self, id: ShapeId) {
        if let Some(index) = self.index_of(id) {
            let shape = self.shapes.remove(index);
            self.shapes.push(shape);
        }
    }

    /// Replace the frame of a shape. Unknown IDs are ignored.
    pub fn update_frame(&mut self, id: ShapeId, frame: Rect) {
        if let Some(shape) = self.shapes.iter_mut().find(|shape| shape.id == id) {
            shape.frame = frame;
        }
    }
}

impl<R: RandomSource> Canvas<R> {
    /// Add a default-size shape centred on `center` with a random fill color.
    ///
    /// The new shape becomes topmost and selected.
    pub fn add_shape(&mut self, kind: ShapeKind, center: Point) -> ShapeId {
        let color = ShapeColor::random(&mut self.rng);
        let shape = Shape::centered(kind, center, color);
        let id = shape.id;
        log::debug!("Added {} {} at ({:.1}, {:.1})", kind.name(), id, center.x, center.y);
        self.shapes.push(shape);
        self.select_shape(Some(id));
        id
    }

    /// Add a shape at a random position fully inside `bounds`.
    ///
    /// On an axis where `bounds` is too small to hold the shape, the shape is
    /// centred on that axis instead.
    pub fn add_random_shape(&mut self, kind: ShapeKind, bounds: Rect) -> ShapeId {
        let bounds = bounds.abs();
        let x = self.random_axis(bounds.x0, bounds.x1);
        let y = self.random_axis(bounds.y0, bounds.y1);
        self.add_shape(kind, Point::new(x, y))
    }

    fn random_axis(&mut self, min: f64, max: f64) -> f64 {
        let half = DEFAULT_SHAPE_SIZE / 2.0;
        let (low, high) = (min + half, max - half);
        if low.is_finite() && high.is_finite() && low <= high {
            return self.rng.next_in_range(low, high);
        }
        let mid = (min + max) / 2.0;
        log::warn!("Placement bounds [{}, {}] cannot hold a shape, centring", min, max);
        if mid.is_finite() { mid } else { 0.0 }
    }
}
