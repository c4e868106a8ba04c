//! ShapePad Render Library
//!
//! Renderer abstraction for ShapePad. The bundled implementation records a
//! display list that a windowing backend can replay.

mod display_list;
mod renderer;

pub use display_list::{DisplayList, DisplayListRenderer, DrawCommand};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
