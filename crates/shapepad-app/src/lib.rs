//! ShapePad Application
//!
//! The application shell: configuration, event dispatch from pointer,
//! toolbar, keyboard and drop sources, and redraw scheduling.

mod app;
mod config;
mod shortcuts;
mod ui;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{PaletteEntry, UiAction, palette, palette_preview};
