//! Pointer input: raw press/move/release events and the gesture events
//! derived from them.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Distance the pointer must travel while pressed before a press becomes a drag.
pub const DRAG_THRESHOLD: f64 = 4.0;

/// Raw pointer event as delivered by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RawPointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

/// Gesture-level pointer event consumed by the interaction controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Discrete press-and-release without significant movement.
    Tap { position: Point },
    /// A drag started at `position` (the press point).
    DragBegin { position: Point },
    /// The pointer moved to `position` during a drag.
    DragChange { position: Point },
    /// The drag finished at `position`.
    DragEnd { position: Point },
}

/// Tracks the press state and turns raw events into gesture events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer position.
    pub pointer_position: Point,
    /// Where the current press started.
    press_start: Option<Point>,
    /// Whether the current press has turned into a drag.
    is_dragging: bool,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Whether the pointer is currently pressed.
    pub fn is_pressed(&self) -> bool {
        self.press_start.is_some()
    }

    /// Process a raw pointer event, returning the gesture events it produces.
    ///
    /// A move past [`DRAG_THRESHOLD`] emits `DragBegin` at the press point
    /// followed by `DragChange`; releasing ends the drag, or emits a `Tap`
    /// when the pointer never left the threshold. A press arriving while a
    /// drag is still open ends that drag first.
    pub fn handle_raw_event(&mut self, event: RawPointerEvent) -> Vec<PointerEvent> {
        match event {
            RawPointerEvent::Down { position } => {
                self.pointer_position = position;
                self.press_start = Some(position);
                if std::mem::take(&mut self.is_dragging) {
                    vec![PointerEvent::DragEnd { position }]
                } else {
                    Vec::new()
                }
            }
            RawPointerEvent::Move { position } => {
                self.pointer_position = position;
                let Some(start) = self.press_start else {
                    return Vec::new();
                };
                if self.is_dragging {
                    return vec![PointerEvent::DragChange { position }];
                }
                if start.distance(position) > DRAG_THRESHOLD {
                    self.is_dragging = true;
                    return vec![
                        PointerEvent::DragBegin { position: start },
                        PointerEvent::DragChange { position },
                    ];
                }
                Vec::new()
            }
            RawPointerEvent::Up { position } => {
                self.pointer_position = position;
                let was_pressed = self.press_start.take().is_some();
                let was_dragging = std::mem::take(&mut self.is_dragging);
                if was_dragging {
                    vec![PointerEvent::DragEnd { position }]
                } else if was_pressed {
                    vec![PointerEvent::Tap { position }]
                } else {
                    Vec::new()
                }
            }
        }
    }
}
