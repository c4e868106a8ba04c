//! ShapePad Core Library
//!
//! Platform-agnostic shape model, canvas state and interaction logic for the
//! ShapePad drawing canvas.

pub mod canvas;
pub mod gesture;
pub mod input;
pub mod random;
pub mod selection;
pub mod shapes;

pub use canvas::Canvas;
pub use gesture::{CursorKind, GestureState, InteractionController};
pub use input::{InputState, PointerEvent, RawPointerEvent};
pub use random::{RandomSource, StdRandom};
pub use selection::{Corner, Handle, HANDLE_HIT_SIZE, HANDLE_SIZE, MIN_SHAPE_SIZE};
pub use shapes::{Shape, ShapeColor, ShapeId, ShapeKind};
