//! Display-list renderer.
//!
//! Records the frame as a flat list of fill and stroke commands in canvas
//! coordinates. A windowing backend replays the list onto its surface.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use kurbo::{BezPath, Rect, Shape as KurboShape, Stroke};
use peniko::Color;
use shapepad_core::selection::{HANDLE_SIZE, corner_handles};
use shapepad_core::shapes::Shape;

/// Width of the dashed selection outline.
const SELECTION_STROKE_WIDTH: f64 = 2.0;
/// Dash and gap lengths of the selection outline.
const SELECTION_DASH: [f64; 2] = [6.0, 4.0];
/// Width of the handle border.
const HANDLE_STROKE_WIDTH: f64 = 1.5;

/// A single drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Fill the whole viewport.
    Clear(Color),
    /// Fill a path.
    Fill { path: BezPath, color: Color },
    /// Stroke a path.
    Stroke {
        path: BezPath,
        color: Color,
        style: Stroke,
    },
}

/// Commands for one frame, in paint order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Number of fill commands.
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Fill { .. }))
            .count()
    }

    /// Number of stroke commands.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Stroke { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn fill(&mut self, path: BezPath, color: Color) {
        self.commands.push(DrawCommand::Fill { path, color });
    }

    fn stroke(&mut self, path: BezPath, color: Color, style: Stroke) {
        self.commands.push(DrawCommand::Stroke { path, color, style });
    }
}

/// Renderer that records a [`DisplayList`].
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    list: DisplayList,
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently built frame.
    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    /// Take the most recently built frame, leaving an empty list.
    pub fn take_display_list(&mut self) -> DisplayList {
        std::mem::take(&mut self.list)
    }

    fn draw_shape(&mut self, shape: &Shape) {
        self.list.fill(shape.outline(), shape.color().into());
    }

    fn draw_selection(&mut self, frame: Rect, color: Color) {
        let outline = Stroke::new(SELECTION_STROKE_WIDTH).with_dashes(0.0, SELECTION_DASH);
        self.list.stroke(frame.to_path(0.1), color, outline);

        for handle in corner_handles(frame) {
            let path = handle.rect(HANDLE_SIZE).to_path(0.1);
            self.list.fill(path.clone(), Color::from_rgba8(255, 255, 255, 255));
            self.list.stroke(path, color, Stroke::new(HANDLE_STROKE_WIDTH));
        }
    }
}

impl Renderer for DisplayListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()> {
        let size = ctx.viewport_size;
        if !(size.width.is_finite() && size.height.is_finite()) || size.width <= 0.0 || size.height <= 0.0 {
            return Err(RendererError::InvalidViewport(format!(
                "{}x{}",
                size.width, size.height
            )));
        }

        self.list.commands.clear();
        self.list.commands.push(DrawCommand::Clear(ctx.background_color));

        // Handles poke out of the frame; keep shapes whose chrome is still visible.
        let visible = size.to_rect().inflate(HANDLE_SIZE, HANDLE_SIZE);
        let mut culled = 0;
        for shape in ctx.shapes {
            if visible.intersect(shape.frame().abs()).area() <= 0.0 {
                culled += 1;
                continue;
            }
            self.draw_shape(shape);
        }

        if let Some(shape) = ctx.shapes.iter().find(|shape| ctx.is_selected(shape.id())) {
            self.draw_selection(shape.frame(), ctx.selection_color);
        }

        log::debug!(
            "Built display list: {} commands, {} shapes culled",
            self.list.commands.len(),
            culled
        );
        Ok(())
    }
}
