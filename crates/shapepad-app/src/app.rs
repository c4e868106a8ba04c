//! Application state and event dispatch.

use crate::config::AppConfig;
use crate::shortcuts::ShortcutRegistry;
use crate::ui::UiAction;
use kurbo::{Point, Rect, Size};
use shapepad_core::canvas::Canvas;
use shapepad_core::gesture::{CursorKind, InteractionController};
use shapepad_core::input::{InputState, PointerEvent, RawPointerEvent};
use shapepad_core::random::StdRandom;
use shapepad_core::shapes::{ShapeId, ShapeKind};
use shapepad_render::{DisplayList, DisplayListRenderer, RenderContext, RenderResult, Renderer};

/// Main application struct.
///
/// Owns the canvas and routes every input source to it. Each mutating event
/// raises `needs_redraw`; [`App::render`] consumes the flag, so any number of
/// mutations between frames costs one redraw.
pub struct App {
    config: AppConfig,
    canvas: Canvas<StdRandom>,
    controller: InteractionController,
    input: InputState,
    renderer: DisplayListRenderer,
    needs_redraw: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_entropy(),
        };
        log::info!("Starting {} ({}x{})", config.title, config.width, config.height);
        Self {
            config,
            canvas: Canvas::with_random(rng),
            controller: InteractionController::new(),
            input: InputState::new(),
            renderer: DisplayListRenderer::new(),
            needs_redraw: true,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas<StdRandom> {
        &self.canvas
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Whether a redraw has been requested since the last render.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Viewport size as configured.
    pub fn viewport_size(&self) -> Size {
        Size::new(self.config.width as f64, self.config.height as f64)
    }

    /// Process a raw pointer event from the windowing layer.
    pub fn handle_raw_pointer(&mut self, event: RawPointerEvent) {
        for gesture in self.input.handle_raw_event(event) {
            self.handle_pointer(gesture);
        }
    }

    /// Process a gesture-level pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if self.controller.handle_event(&mut self.canvas, event) {
            self.request_redraw();
        }
    }

    /// Cursor for the current pointer position.
    pub fn cursor(&self) -> CursorKind {
        self.controller.cursor_at(&self.canvas, self.input.pointer_position)
    }

    /// Handle a key press. Returns true if it was bound to an action.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool) -> bool {
        match ShortcutRegistry::action_for(key, ctrl, shift) {
            Some(action) => {
                self.apply_action(action);
                true
            }
            None => false,
        }
    }

    /// Apply a toolbar or keyboard action.
    pub fn apply_action(&mut self, action: UiAction) {
        log::debug!("Action: {:?}", action);
        match action {
            UiAction::AddShape(kind) => {
                let bounds = Rect::from_origin_size(Point::ZERO, self.viewport_size());
                self.canvas.add_random_shape(kind, bounds);
            }
            UiAction::DeleteSelected => {
                if self.controller.is_manipulating() {
                    self.controller.drag_end();
                }
                self.canvas.delete_selected();
            }
            UiAction::BringToFront => {
                if let Some(id) = self.canvas.selected() {
                    self.canvas.bring_to_front(id);
                }
            }
            UiAction::ClearSelection => self.canvas.select_shape(None),
        }
        self.request_redraw();
    }

    /// Add a shape dropped from an external source at `point`.
    pub fn drop_shape(&mut self, kind: ShapeKind, point: Point) -> ShapeId {
        let id = self.canvas.add_shape(kind, point);
        self.request_redraw();
        id
    }

    /// Build a frame if one is pending. Returns `None` when nothing changed.
    pub fn render(&mut self) -> RenderResult<Option<&DisplayList>> {
        if !self.needs_redraw {
            return Ok(None);
        }
        let ctx = RenderContext::new(&self.canvas, self.viewport_size())
            .with_background(self.config.background_color.into())
            .with_selection_color(self.config.selection_color.into());
        self.renderer.build_scene(&ctx)?;
        self.needs_redraw = false;
        Ok(Some(self.renderer.display_list()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapepad_core::gesture::GestureState;
    use shapepad_core::selection::Corner;
    use shapepad_render::RendererError;

    fn app() -> App {
        App::with_config(AppConfig {
            width: 800,
            height: 600,
            seed: Some(17),
            ..AppConfig::default()
        })
    }

    fn press_drag_release(app: &mut App, from: Point, to: Point) {
        app.handle_raw_pointer(RawPointerEvent::Down { position: from });
        app.handle_raw_pointer(RawPointerEvent::Move { position: to });
        app.handle_raw_pointer(RawPointerEvent::Up { position: to });
    }

    #[test]
    fn test_redraw_is_coalesced() {
        let mut app = app();
        assert!(app.needs_redraw());
        assert!(matches!(app.render(), Ok(Some(_))));
        assert!(matches!(app.render(), Ok(None)));

        app.drop_shape(ShapeKind::Circle, Point::new(100.0, 100.0));
        app.drop_shape(ShapeKind::Star, Point::new(300.0, 300.0));
        assert!(app.needs_redraw());
        let fills = app.render().ok().flatten().map(DisplayList::fill_count);
        // Two shapes plus four handle fills on the selected star.
        assert_eq!(fills, Some(6));
        assert!(!app.needs_redraw());
    }

    #[test]
    fn test_toolbar_adds_shape_inside_viewport() {
        let mut app = app();
        for entry in crate::ui::palette() {
            app.apply_action(entry.action());
        }
        assert_eq!(app.canvas().len(), 4);
        let viewport = Rect::from_origin_size(Point::ZERO, app.viewport_size());
        for shape in app.canvas().shapes() {
            assert_eq!(viewport.union(shape.frame()), viewport);
        }
    }

    #[test]
    fn test_raw_pointer_tap_and_drag() {
        let mut app = app();
        let rect = app.drop_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));
        app.drop_shape(ShapeKind::Circle, Point::new(300.0, 300.0));

        app.handle_raw_pointer(RawPointerEvent::Down { position: Point::new(100.0, 100.0) });
        app.handle_raw_pointer(RawPointerEvent::Up { position: Point::new(100.0, 100.0) });
        assert!(app.canvas().is_selected(rect));
        assert_eq!(app.canvas().index_of(rect), Some(1));

        press_drag_release(&mut app, Point::new(160.0, 160.0), Point::new(180.0, 180.0));
        let frame = app.canvas().get_shape(rect).map(|s| s.frame());
        assert_eq!(frame, Some(Rect::new(40.0, 40.0, 180.0, 180.0)));
        assert_eq!(app.controller().state(), &GestureState::Idle);

        assert!(app.handle_key("Delete", false, false));
        assert_eq!(app.canvas().len(), 1);
        assert_eq!(app.canvas().selected(), None);
    }

    #[test]
    fn test_second_press_mid_drag_returns_to_idle() {
        let mut app = app();
        let rect = app.drop_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));

        app.handle_raw_pointer(RawPointerEvent::Down { position: Point::new(100.0, 100.0) });
        app.handle_raw_pointer(RawPointerEvent::Move { position: Point::new(120.0, 100.0) });
        assert!(app.controller().is_manipulating());

        app.handle_raw_pointer(RawPointerEvent::Down { position: Point::new(500.0, 500.0) });
        app.handle_raw_pointer(RawPointerEvent::Up { position: Point::new(500.0, 500.0) });
        assert_eq!(app.controller().state(), &GestureState::Idle);
        assert_eq!(app.cursor(), CursorKind::Default);
        // The release tapped empty space.
        assert_eq!(app.canvas().selected(), None);
        let frame = app.canvas().get_shape(rect).map(|s| s.frame());
        assert_eq!(frame, Some(Rect::new(60.0, 40.0, 180.0, 160.0)));
    }

    #[test]
    fn test_cursor_tracks_pointer() {
        let mut app = app();
        app.drop_shape(ShapeKind::Rectangle, Point::new(100.0, 100.0));
        app.handle_raw_pointer(RawPointerEvent::Move { position: Point::new(160.0, 40.0) });
        assert_eq!(app.cursor(), CursorKind::Resize(Corner::TopRight));
        app.handle_raw_pointer(RawPointerEvent::Move { position: Point::new(700.0, 500.0) });
        assert_eq!(app.cursor(), CursorKind::Default);
    }

    #[test]
    fn test_keyboard_actions() {
        let mut app = app();
        assert!(app.handle_key("2", false, false));
        let back = app.canvas().shapes()[0].id();
        app.handle_key("3", false, false);
        assert!(!app.handle_key("q", false, false));

        app.handle_raw_pointer(RawPointerEvent::Down { position: Point::new(-1.0, -1.0) });
        app.handle_raw_pointer(RawPointerEvent::Up { position: Point::new(-1.0, -1.0) });
        assert_eq!(app.canvas().selected(), None);

        assert!(app.handle_key("Escape", false, false));
        app.apply_action(UiAction::BringToFront);
        assert_eq!(app.canvas().index_of(back), Some(0));
    }

    #[test]
    fn test_render_reports_invalid_viewport() {
        let mut app = App::with_config(AppConfig {
            width: 0,
            ..AppConfig::default()
        });
        assert!(matches!(app.render(), Err(RendererError::InvalidViewport(_))));
        // The pending redraw survives the failure.
        assert!(app.needs_redraw());
    }
}
