//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for history navigation
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: ALT
#[cfg(target_os = "macos")]
pub const HISTORY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const HISTORY_MODIFIER: KeyModifiers = KeyModifiers::ALT;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Back/forward shortcut display
/// - macOS: "Cmd+←/→"
/// - Linux/Windows: "Alt+←/→"
#[cfg(target_os = "macos")]
pub const HISTORY_SHORTCUT: &str = "Cmd+←/→";

#[cfg(not(target_os = "macos"))]
pub const HISTORY_SHORTCUT: &str = "Alt+←/→";
