//! Terminal implementation of the editor host
//!
//! Owns everything the controller reaches through the capability trait: the
//! live document, the side panes, the log channel, notifications, and the
//! current highlight. The app renders directly from this state.

use std::path::PathBuf;

use ratatui::style::Style;

use crate::decoration::DecorationStyle;
use crate::diff::DiffView;
use crate::document::{ByteRange, DocUri, TextDocument};
use crate::host::{EditorHost, HostError, Notice};
use crate::notification::NotificationState;

pub struct TuiHost {
    pub document: TextDocument,
    target_path: PathBuf,
    pub diff: Option<DiffView>,
    pub explanation: Option<(String, String)>,
    pub log_lines: Vec<String>,
    pub show_log: bool,
    pub notifications: NotificationState,
    pub highlight: Option<(DocUri, ByteRange, Style)>,
}

impl TuiHost {
    pub fn new(document: TextDocument, target_path: PathBuf) -> Self {
        TuiHost {
            document,
            target_path,
            diff: None,
            explanation: None,
            log_lines: Vec::new(),
            show_log: false,
            notifications: NotificationState::new(),
            highlight: None,
        }
    }

    fn require_document(&self, uri: &DocUri) -> Result<(), HostError> {
        if uri != self.document.uri() {
            return Err(HostError::DocumentNotOpen(uri.to_string()));
        }
        Ok(())
    }
}

impl EditorHost for TuiHost {
    fn document_text(&self, uri: &DocUri) -> Result<String, HostError> {
        self.require_document(uri)?;
        Ok(self.document.text().to_string())
    }

    fn text_in(&self, uri: &DocUri, range: ByteRange) -> Result<String, HostError> {
        self.require_document(uri)?;
        Ok(self.document.text_in(range)?.to_string())
    }

    fn is_document_visible(&self, uri: &DocUri) -> bool {
        // the document pane is always on screen in this UI
        uri == self.document.uri()
    }

    fn open_document(&mut self, uri: &DocUri) -> Result<(), HostError> {
        self.require_document(uri)
    }

    fn apply_edit(
        &mut self,
        uri: &DocUri,
        range: ByteRange,
        new_text: &str,
    ) -> Result<(), HostError> {
        self.require_document(uri)?;
        self.document.replace(range, new_text)?;
        Ok(())
    }

    fn save_document(&mut self, uri: &DocUri) -> Result<(), HostError> {
        self.require_document(uri)?;
        std::fs::write(&self.target_path, self.document.text())?;
        self.document.mark_saved();
        Ok(())
    }

    fn open_diff_view(&mut self, view: DiffView) -> Result<(), HostError> {
        self.diff = Some(view);
        self.explanation = None;
        self.show_log = false;
        Ok(())
    }

    fn close_diff_view(&mut self) {
        self.diff = None;
    }

    fn open_explanation_view(&mut self, title: &str, body: &str) -> Result<(), HostError> {
        self.explanation = Some((title.to_string(), body.to_string()));
        Ok(())
    }

    fn append_log(&mut self, line: &str) {
        self.log_lines.push(line.to_string());
        // surface the log pane when nothing else will show this content
        if self.diff.is_none() {
            self.show_log = true;
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.notifications.show(notice);
    }

    fn set_highlight(&mut self, uri: &DocUri, range: ByteRange, style: &DecorationStyle) {
        self.highlight = Some((uri.clone(), range, style.style));
    }

    fn clear_highlight(&mut self) {
        self.highlight = None;
    }
}
