//! System clipboard support

use arboard::Clipboard;

/// Copy text to the system clipboard
pub fn copy_text(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())
}
