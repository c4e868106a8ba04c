//! Interaction controller: turns pointer gestures into canvas mutations.

use crate::canvas::Canvas;
use crate::input::PointerEvent;
use crate::selection::{Corner, hit_test_corner_handle, resize_frame, translate_frame};
use crate::shapes::ShapeId;
use kurbo::{Point, Rect};

/// What the current drag is doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No drag target.
    #[default]
    Idle,
    /// Dragging a whole shape.
    Moving {
        shape_id: ShapeId,
        original_frame: Rect,
        start_point: Point,
    },
    /// Dragging a corner handle of the selected shape.
    Resizing {
        shape_id: ShapeId,
        corner: Corner,
        original_frame: Rect,
        start_point: Point,
    },
}

/// Cursor the shell should show for the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    Default,
    Move,
    Resize(Corner),
}

/// Interprets taps and drags on a canvas.
///
/// Handle hit zones are only checked against the selected shape at drag
/// begin; once a resize starts it continues wherever the pointer goes.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: GestureState,
}

impl InteractionController {
    /// Create a new controller in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture state.
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Check if a move or resize is in progress.
    pub fn is_manipulating(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    /// Dispatch a gesture event. Returns true if the canvas needs a redraw.
    pub fn handle_event<R>(&mut self, canvas: &mut Canvas<R>, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Tap { position } => {
                self.tap(canvas, position);
                true
            }
            PointerEvent::DragBegin { position } => {
                self.drag_begin(canvas, position);
                self.is_manipulating()
            }
            PointerEvent::DragChange { position } => self.drag_change(canvas, position),
            PointerEvent::DragEnd { .. } => {
                self.drag_end();
                false
            }
        }
    }

    /// Select and raise the topmost shape under `point`, or clear the selection.
    pub fn tap<R>(&mut self, canvas: &mut Canvas<R>, point: Point) -> Option<ShapeId> {
        let hit = canvas.shape_at_point(point);
        if let Some(id) = hit {
            canvas.bring_to_front(id);
        }
        canvas.select_shape(hit);
        hit
    }

    /// Start a drag at `point`: resize if on a handle of the selected shape,
    /// otherwise move the topmost shape under the pointer.
    pub fn drag_begin<R>(&mut self, canvas: &mut Canvas<R>, point: Point) {
        if let Some(shape) = canvas.selected_shape() {
            let frame = shape.frame();
            if let Some(corner) = hit_test_corner_handle(frame, point) {
                log::debug!("Resizing {} from {:?}", shape.id(), corner);
                self.state = GestureState::Resizing {
                    shape_id: shape.id(),
                    corner,
                    original_frame: frame,
                    start_point: point,
                };
                return;
            }
        }

        self.state = match canvas.shape_at_point(point) {
            Some(id) => {
                canvas.bring_to_front(id);
                canvas.select_shape(Some(id));
                let original_frame = canvas.get_shape(id).map(|s| s.frame()).unwrap_or_default();
                log::debug!("Moving {}", id);
                GestureState::Moving {
                    shape_id: id,
                    original_frame,
                    start_point: point,
                }
            }
            None => GestureState::Idle,
        };
    }

    /// Apply the drag so far. Returns true if a frame was updated.
    pub fn drag_change<R>(&mut self, canvas: &mut Canvas<R>, point: Point) -> bool {
        match self.state {
            GestureState::Idle => false,
            GestureState::Moving {
                shape_id,
                original_frame,
                start_point,
            } => {
                canvas.update_frame(shape_id, translate_frame(original_frame, point - start_point));
                true
            }
            GestureState::Resizing {
                shape_id,
                corner,
                original_frame,
                start_point,
            } => {
                canvas.update_frame(shape_id, resize_frame(original_frame, corner, point - start_point));
                true
            }
        }
    }

    /// Finish the current drag.
    pub fn drag_end(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Cursor to show when hovering `point`.
    pub fn cursor_at<R>(&self, canvas: &Canvas<R>, point: Point) -> CursorKind {
        match self.state {
            GestureState::Moving { .. } => return CursorKind::Move,
            GestureState::Resizing { corner, .. } => return CursorKind::Resize(corner),
            GestureState::Idle => {}
        }
        if let Some(corner) = canvas
            .selected_shape()
            .and_then(|shape| hit_test_corner_handle(shape.frame(), point))
        {
            return CursorKind::Resize(corner);
        }
        if canvas.shape_at_point(point).is_some() {
            CursorKind::Move
        } else {
            CursorKind::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::StdRandom;
    use crate::selection::MIN_SHAPE_SIZE;
    use crate::shapes::{Shape, ShapeKind};
    use kurbo::Vec2;

    fn canvas() -> Canvas<StdRandom> {
        Canvas::with_random(StdRandom::seeded(11))
    }

    fn frame_of(canvas: &Canvas<StdRandom>, id: ShapeId) -> Rect {
        canvas.get_shape(id).map(Shape::frame).unwrap_or(Rect::ZERO)
    }

    fn assert_frame(frame: Rect, x: f64, y: f64, w: f64, h: f64) {
        assert!((frame.x0 - x).abs() < 1e-9, "x {} != {}", frame.x0, x);
        assert!((frame.y0 - y).abs() < 1e-9, "y {} != {}", frame.y0, y);
        assert!((frame.width() - w).abs() < 1e-9, "w {} != {}", frame.width(), w);
        assert!((frame.height() - h).abs() < 1e-9, "h {} != {}", frame.height(), h);
    }

    #[test]
    fn test_full_session_scenario() {
        let mut canvas = canvas();
        let mut controller = InteractionController::new();

        let rect = canvas.add_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));
        assert_eq!(canvas.len(), 1);
        assert_frame(frame_of(&canvas, rect), 40.0, 40.0, 120.0, 120.0);
        assert!(canvas.is_selected(rect));

        let circle = canvas.add_shape(ShapeKind::Circle, Point::new(300.0, 300.0));
        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.index_of(circle), Some(1));
        assert!(canvas.is_selected(circle));
        assert!(!canvas.is_selected(rect));

        assert_eq!(controller.tap(&mut canvas, Point::new(100.0, 100.0)), Some(rect));
        assert!(canvas.is_selected(rect));
        assert_eq!(canvas.index_of(rect), Some(1));
        assert_eq!(canvas.index_of(circle), Some(0));

        let corner = Point::new(160.0, 160.0);
        controller.drag_begin(&mut canvas, corner);
        assert!(matches!(
            controller.state(),
            GestureState::Resizing { corner: Corner::BottomRight, .. }
        ));
        assert!(controller.drag_change(&mut canvas, corner + Vec2::new(20.0, 20.0)));
        controller.drag_end();
        assert_frame(frame_of(&canvas, rect), 40.0, 40.0, 140.0, 140.0);

        canvas.delete_selected();
        assert_eq!(canvas.len(), 1);
        assert!(canvas.get_shape(circle).is_some());
        assert_eq!(canvas.selected(), None);
    }

    #[test]
    fn test_tap_empty_space_clears_selection() {
        let mut canvas = canvas();
        let mut controller = InteractionController::new();
        canvas.add_shape(ShapeKind::Star, Point::new(100.0, 100.0));
        assert_eq!(controller.tap(&mut canvas, Point::new(900.0, 900.0)), None);
        assert_eq!(canvas.selected(), None);
    }

    #[test]
    fn test_tap_hits_topmost_overlapping_shape() {
        let mut canvas = canvas();
        let mut controller = InteractionController::new();
        let back = canvas.add_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));
        let front = canvas.add_shape(ShapeKind::Rectangle, Point::new(140.0, 140.0));
        canvas.select_shape(None);
        assert_eq!(controller.tap(&mut canvas, Point::new(120.0, 120.0)), Some(front));
        assert_eq!(controller.tap(&mut canvas, Point::new(50.0, 50.0)), Some(back));
        assert_eq!(canvas.index_of(back), Some(1));
    }

    #[test]
    fn test_tap_respects_outline_not_frame() {
        let mut canvas = canvas();
        let mut controller = InteractionController::new();
        canvas.add_shape(ShapeKind::Circle, Point::new(100.0, 100.0));
        // Inside the frame but outside the inscribed circle.
        assert_eq!(controller.tap(&mut canvas, Point::new(45.0, 45.0)), None);
    }

    #[test]
    fn test_drag_moves_shape_and_selects_it() {
        let mut canvas = canvas();
        let mut controller = InteractionController::new();
        let a = canvas.add_shape(ShapeKind::Triangle, Point::new(100.0, 100.0));
        let b = canvas.add_shape(ShapeKind::Rectangle, Point::new(400.0, 400.0));
        assert!(canvas.is_selected(b));

        let start = Point::new(100.0, 120.0);
        controller.drag_begin(&mut canvas, start);
        assert!(canvas.is_selected(a));
        assert_eq!(canvas.index_of(a), Some(1));

        controller.drag_change(&mut canvas, start + Vec2::new(10.0, 10.0));
        controller.drag_change(&mut canvas, start + Vec2::new(30.0, -15.0));
        assert_frame(frame_of(&canvas, a), 70.0, 25.0, 120.0, 120.0);

        controller.drag_end();
        assert_eq!(controller.state(), &GestureState::Idle);
    }

    #[test]
    fn test_drag_on_empty_space_is_idle() {
        let mut canvas = canvas();
        let mut controller = InteractionController::new();
        let a = canvas.add_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));
        controller.drag_begin(&mut canvas, Point::new(600.0, 600.0));
        assert_eq!(controller.state(), &GestureState::Idle);
        assert!(!controller.drag_change(&mut canvas, Point::new(700.0, 700.0)));
        assert_frame(frame_of(&canvas, a), 40.0, 40.0, 120.0, 120.0);
        // Selection is left alone by an empty drag.
        assert!(canvas.is_selected(a));
    }

    #[test]
    fn test_handles_only_on_selected_shape() {
        let mut canvas = canvas();
        let mut controller = InteractionController::new();
        let a = canvas.add_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));
        canvas.select_shape(None);

        // Bottom-right corner of an unselected shape: plain move.
        controller.drag_begin(&mut canvas, Point::new(158.0, 158.0));
        assert!(matches!(controller.state(), GestureState::Moving { shape_id, .. } if *shape_id == a));
    }

    #[test]
    fn test_resize_continues_outside_handle() {
        let mut canvas = canvas();
        let mut controller = InteractionController::new();
        let a = canvas.add_shape(ShapeKind::Star, Point::new(100.0, 100.0));

        let start = Point::new(40.0, 40.0);
        controller.drag_begin(&mut canvas, start);
        controller.drag_change(&mut canvas, Point::new(-60.0, 0.0));
        assert_frame(frame_of(&canvas, a), -60.0, 0.0, 220.0, 160.0);
        assert!(matches!(controller.state(), GestureState::Resizing { corner: Corner::TopLeft, .. }));
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        for corner in Corner::ALL {
            let mut canvas = canvas();
            let mut controller = InteractionController::new();
            let a = canvas.add_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));
            let original = frame_of(&canvas, a);
            let start = corner.position(original);

            controller.drag_begin(&mut canvas, start);
            let toward_center = original.center() - start;
            controller.drag_change(&mut canvas, start + toward_center * 4.0);
            let frame = frame_of(&canvas, a);
            assert!((frame.width() - MIN_SHAPE_SIZE).abs() < 1e-9);
            assert!((frame.height() - MIN_SHAPE_SIZE).abs() < 1e-9);
            let anchor = corner.opposite();
            assert_eq!(anchor.position(frame), anchor.position(original));
        }
    }

    #[test]
    fn test_handle_event_dispatch() {
        let mut canvas = canvas();
        let mut controller = InteractionController::new();
        let a = canvas.add_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));

        assert!(controller.handle_event(&mut canvas, PointerEvent::DragBegin { position: Point::new(100.0, 100.0) }));
        assert!(controller.handle_event(&mut canvas, PointerEvent::DragChange { position: Point::new(110.0, 100.0) }));
        assert!(!controller.handle_event(&mut canvas, PointerEvent::DragEnd { position: Point::new(110.0, 100.0) }));
        assert_frame(frame_of(&canvas, a), 50.0, 40.0, 120.0, 120.0);
        assert!(!controller.is_manipulating());
    }

    #[test]
    fn test_cursor_feedback() {
        let mut canvas = canvas();
        let controller = InteractionController::new();
        canvas.add_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));
        assert_eq!(controller.cursor_at(&canvas, Point::new(40.0, 160.0)), CursorKind::Resize(Corner::BottomLeft));
        assert_eq!(controller.cursor_at(&canvas, Point::new(100.0, 100.0)), CursorKind::Move);
        assert_eq!(controller.cursor_at(&canvas, Point::new(500.0, 500.0)), CursorKind::Default);

        canvas.select_shape(None);
        assert_eq!(controller.cursor_at(&canvas, Point::new(40.0, 160.0)), CursorKind::Default);
    }
}
