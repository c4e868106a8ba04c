//! Keyboard shortcut registry and documentation.

use crate::ui::UiAction;
use shapepad_core::shapes::ShapeKind;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
    pub action: UiAction,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
        action: UiAction,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
            action,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+F").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("1", false, false, "Add rectangle", UiAction::AddShape(ShapeKind::Rectangle)),
            Shortcut::new("2", false, false, "Add circle", UiAction::AddShape(ShapeKind::Circle)),
            Shortcut::new("3", false, false, "Add triangle", UiAction::AddShape(ShapeKind::Triangle)),
            Shortcut::new("4", false, false, "Add star", UiAction::AddShape(ShapeKind::Star)),
            Shortcut::new("Delete", false, false, "Delete selected shape", UiAction::DeleteSelected),
            Shortcut::new("Backspace", false, false, "Delete selected shape", UiAction::DeleteSelected),
            Shortcut::new("F", true, false, "Bring selected shape to front", UiAction::BringToFront),
            Shortcut::new("Escape", false, false, "Clear selection", UiAction::ClearSelection),
        ]
    }

    /// Find the action bound to a key press. Key names compare case-insensitively.
    pub fn action_for(key: &str, ctrl: bool, shift: bool) -> Option<UiAction> {
        Self::all()
            .into_iter()
            .find(|s| s.key.eq_ignore_ascii_case(key) && s.ctrl == ctrl && s.shift == shift)
            .map(|s| s.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let shortcut = Shortcut::new("F", true, true, "test", UiAction::BringToFront);
        assert_eq!(shortcut.format(), "Ctrl+Shift+F");
        let shortcut = Shortcut::new("Delete", false, false, "test", UiAction::DeleteSelected);
        assert_eq!(shortcut.format(), "Delete");
    }

    #[test]
    fn test_action_lookup() {
        assert_eq!(ShortcutRegistry::action_for("backspace", false, false), Some(UiAction::DeleteSelected));
        assert_eq!(ShortcutRegistry::action_for("f", true, false), Some(UiAction::BringToFront));
        assert_eq!(ShortcutRegistry::action_for("f", false, false), None);
        assert_eq!(
            ShortcutRegistry::action_for("4", false, false),
            Some(UiAction::AddShape(ShapeKind::Star))
        );
    }
}
