// Keyboard shortcut mapping for undo/redo

use crate::sketch::intent::Intent;

/// History shortcut recognised on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditShortcut {
    Undo,
    Redo,
}

impl From<EditShortcut> for Intent {
    fn from(shortcut: EditShortcut) -> Self {
        match shortcut {
            EditShortcut::Undo => Intent::Undo,
            EditShortcut::Redo => Intent::Redo,
        }
    }
}

/// Modifier keys held during a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChordModifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS
    pub command: bool,
    pub shift: bool,
}

/// Map a key press to a history shortcut
///
/// - Ctrl+Z: undo
/// - Ctrl+Y or Ctrl+Shift+Z: redo
pub fn shortcut_for(key: char, modifiers: ChordModifiers) -> Option<EditShortcut> {
    if !modifiers.command {
        return None;
    }

    match key.to_ascii_lowercase() {
        'z' if modifiers.shift => Some(EditShortcut::Redo),
        'z' => Some(EditShortcut::Undo),
        'y' => Some(EditShortcut::Redo),
        _ => None,
    }
}
