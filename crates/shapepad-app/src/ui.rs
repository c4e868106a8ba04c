//! Toolbar model and UI actions.

use kurbo::{BezPath, Rect, Size};
use shapepad_core::shapes::ShapeKind;

/// Inset between a palette button edge and its preview shape.
const PREVIEW_PADDING: f64 = 4.0;

/// Actions triggered from the toolbar or keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Place a new shape at a random spot in the viewport.
    AddShape(ShapeKind),
    /// Delete the selected shape.
    DeleteSelected,
    /// Raise the selected shape to the top.
    BringToFront,
    /// Clear the selection.
    ClearSelection,
}

/// A shape-creation button in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub kind: ShapeKind,
    pub label: &'static str,
    /// Icon name understood by the shell's icon set.
    pub icon: &'static str,
}

impl PaletteEntry {
    pub fn action(&self) -> UiAction {
        UiAction::AddShape(self.kind)
    }
}

/// Toolbar entries, one per shape kind.
pub fn palette() -> Vec<PaletteEntry> {
    ShapeKind::ALL
        .into_iter()
        .map(|kind| PaletteEntry {
            kind,
            label: kind.name(),
            icon: match kind {
                ShapeKind::Rectangle => "square",
                ShapeKind::Circle => "circle",
                ShapeKind::Triangle => "triangle",
                ShapeKind::Star => "star",
            },
        })
        .collect()
}

/// Outline of `kind` sized to fit a square palette button.
pub fn palette_preview(kind: ShapeKind, button_size: f64) -> BezPath {
    let side = (button_size - 2.0 * PREVIEW_PADDING).max(0.0);
    let frame = Rect::from_origin_size((PREVIEW_PADDING, PREVIEW_PADDING), Size::new(side, side));
    kind.outline(frame)
}
