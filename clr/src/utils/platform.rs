//! Platform-specific helpers.

/// The key combination that sends end-of-file from an interactive terminal.
pub fn eof_key_combo() -> &'static str {
    if cfg!(windows) { "Ctrl+Z" } else { "Ctrl+D" }
}
