//! Host editor abstraction
//!
//! The suggestion lifecycle never talks to the terminal directly. Everything
//! it needs from the surrounding editor (document access, edits, views,
//! notifications) goes through the [`EditorHost`] trait, so the same
//! controller drives both the real TUI host and an in-memory fake in tests.

mod notice;

pub use notice::{Notice, NoticeLevel};

use thiserror::Error;

use crate::decoration::DecorationStyle;
use crate::diff::DiffView;
use crate::document::{ByteRange, DocUri, DocumentError};

/// Failures of individual host capabilities
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Document not available in host: {0}")]
    DocumentNotOpen(String),

    #[error("Could not open view: {0}")]
    ViewFailed(String),

    #[error("Invalid range: {0}")]
    InvalidRange(#[from] DocumentError),

    #[error("Save failed: {0}")]
    SaveFailed(#[from] std::io::Error),
}

/// Capabilities the suggestion lifecycle requires from its editor host
pub trait EditorHost {
    /// Full text of a live document
    fn document_text(&self, uri: &DocUri) -> Result<String, HostError>;

    /// Text of a live document within a byte range
    fn text_in(&self, uri: &DocUri, range: ByteRange) -> Result<String, HostError>;

    /// Whether the document is currently visible in the host UI
    fn is_document_visible(&self, uri: &DocUri) -> bool;

    /// Open (or re-focus) a live document in the host UI
    fn open_document(&mut self, uri: &DocUri) -> Result<(), HostError>;

    /// Apply a single atomic range edit to a live document
    fn apply_edit(
        &mut self,
        uri: &DocUri,
        range: ByteRange,
        new_text: &str,
    ) -> Result<(), HostError>;

    /// Persist a live document to disk
    fn save_document(&mut self, uri: &DocUri) -> Result<(), HostError>;

    /// Open a read-only side-by-side comparison view
    fn open_diff_view(&mut self, view: DiffView) -> Result<(), HostError>;

    /// Close the comparison view if one is open
    fn close_diff_view(&mut self);

    /// Open a read-only explanation view beside the main view
    fn open_explanation_view(&mut self, title: &str, body: &str) -> Result<(), HostError>;

    /// Append a line to the host's append-only log channel
    fn append_log(&mut self, line: &str);

    /// Show a transient notification
    fn notify(&mut self, notice: Notice);

    /// Highlight a range in a live document with the given style
    fn set_highlight(&mut self, uri: &DocUri, range: ByteRange, style: &DecorationStyle);

    /// Remove the highlight from whichever document holds it
    fn clear_highlight(&mut self);
}
