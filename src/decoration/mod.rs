//! Target-range highlighting
//!
//! Marks the byte range a suggestion targets in the live document view so
//! the user can see what would change. One region is highlighted at a time,
//! and the whole feature sits behind the `inline_decorations` config flag.

use ratatui::style::{Color, Modifier, Style};

use crate::document::{ByteRange, DocUri};
use crate::host::EditorHost;

/// Visual style for the highlighted region. Created once per controller and
/// reused for every suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationStyle {
    pub style: Style,
}

impl DecorationStyle {
    pub fn review_highlight() -> Self {
        DecorationStyle {
            style: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Applies and removes the single highlight through the host
#[derive(Debug)]
pub struct Highlighter {
    style: DecorationStyle,
    enabled: bool,
    applied: Option<(DocUri, ByteRange)>,
}

impl Highlighter {
    pub fn new(enabled: bool) -> Self {
        Highlighter {
            style: DecorationStyle::review_highlight(),
            enabled,
            applied: None,
        }
    }

    /// Highlight a range in the given document. No-op when the feature is
    /// disabled or the document is not visible in the host.
    pub fn mark(&mut self, host: &mut dyn EditorHost, doc: &DocUri, range: ByteRange) {
        if !self.enabled {
            return;
        }
        if !host.is_document_visible(doc) {
            log::debug!("Skipping highlight, document not visible: {doc}");
            return;
        }
        host.set_highlight(doc, range, &self.style);
        self.applied = Some((doc.clone(), range));
    }

    /// Remove the highlight from whichever document holds it
    pub fn clear(&mut self, host: &mut dyn EditorHost) {
        if self.applied.take().is_some() {
            host.clear_highlight();
        }
    }

    pub fn is_marked(&self) -> bool {
        self.applied.is_some()
    }
}
