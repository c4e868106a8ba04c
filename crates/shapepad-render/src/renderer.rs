//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use shapepad_core::canvas::Canvas;
use shapepad_core::shapes::{Shape, ShapeId};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Shapes to draw, back to front.
    pub shapes: &'a [Shape],
    /// Selected shape, drawn with dashed outline and corner handles.
    pub selected: Option<ShapeId>,
    /// Viewport size in logical pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Selection outline and handle border color.
    pub selection_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a render context for a canvas.
    pub fn new<R>(canvas: &'a Canvas<R>, viewport_size: Size) -> Self {
        Self {
            shapes: canvas.shapes(),
            selected: canvas.selected(),
            viewport_size,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            selection_color: Color::from_rgba8(30, 120, 255, 255),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the selection color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    /// Check if a shape is the selected one.
    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected == Some(id)
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the frame for the given context.
    fn build_scene(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()>;
}
