//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for pasting into a field
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const PASTE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const PASTE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the review step
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Next step shortcut display
pub const NEXT_SHORTCUT: &str = "Ctrl+N";

/// Previous step shortcut display
pub const BACK_SHORTCUT: &str = "Ctrl+B";

/// Paste shortcut display
/// - macOS: "Cmd+V"
/// - Linux/Windows: "Ctrl+V"
#[cfg(target_os = "macos")]
pub const PASTE_SHORTCUT: &str = "Cmd+V";

#[cfg(not(target_os = "macos"))]
pub const PASTE_SHORTCUT: &str = "Ctrl+V";
