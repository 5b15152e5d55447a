//! In-memory text document model
//!
//! Holds the live document under review: its URI, text buffer, and dirty
//! flag. Range edits are validated before they touch the buffer so a bad
//! proposal can never corrupt the text.

use memchr::memchr_iter;
use thiserror::Error;

/// Errors from range validation and edits
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Range {start}..{end} is out of bounds (document is {len} bytes)")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("Range start {start} is after end {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("Offset {0} is not a UTF-8 character boundary")]
    NotCharBoundary(usize),
}

/// Document identifier with a scheme prefix, e.g. `file:src/main.rs`
/// or `ai-original:src/main.rs`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocUri(String);

impl DocUri {
    pub fn file(path: &str) -> Self {
        DocUri(format!("file:{path}"))
    }

    pub fn synthetic(scheme: &str, name: &str) -> Self {
        DocUri(format!("{scheme}:{name}"))
    }

    /// Scheme portion of the URI, empty if there is no `:` separator
    pub fn scheme(&self) -> &str {
        self.0.split_once(':').map(|(s, _)| s).unwrap_or("")
    }

    /// Path portion of the URI (everything after the scheme)
    pub fn path(&self) -> &str {
        self.0.split_once(':').map(|(_, p)| p).unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Half-open byte range into a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn new(start: usize, end: usize) -> Self {
        ByteRange { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True if the two ranges share at least one byte
    pub fn overlaps(&self, other: &ByteRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The live document being reviewed
#[derive(Debug, Clone)]
pub struct TextDocument {
    uri: DocUri,
    text: String,
    dirty: bool,
}

impl TextDocument {
    pub fn new(uri: DocUri, text: String) -> Self {
        TextDocument {
            uri,
            text,
            dirty: false,
        }
    }

    pub fn uri(&self) -> &DocUri {
        &self.uri
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Validate that a range lies within the document on char boundaries
    pub fn validate_range(&self, range: ByteRange) -> Result<(), DocumentError> {
        if range.start > range.end {
            return Err(DocumentError::InvertedRange {
                start: range.start,
                end: range.end,
            });
        }
        if range.end > self.text.len() {
            return Err(DocumentError::OutOfBounds {
                start: range.start,
                end: range.end,
                len: self.text.len(),
            });
        }
        if !self.text.is_char_boundary(range.start) {
            return Err(DocumentError::NotCharBoundary(range.start));
        }
        if !self.text.is_char_boundary(range.end) {
            return Err(DocumentError::NotCharBoundary(range.end));
        }
        Ok(())
    }

    /// Text within a validated range
    pub fn text_in(&self, range: ByteRange) -> Result<&str, DocumentError> {
        self.validate_range(range)?;
        Ok(&self.text[range.start..range.end])
    }

    /// Replace a validated range with new text as a single atomic edit
    pub fn replace(&mut self, range: ByteRange, new_text: &str) -> Result<(), DocumentError> {
        self.validate_range(range)?;
        self.text.replace_range(range.start..range.end, new_text);
        self.dirty = true;
        Ok(())
    }

    /// Byte offsets where each line starts (first line starts at 0)
    pub fn line_starts(&self) -> Vec<usize> {
        let mut starts = vec![0];
        starts.extend(memchr_iter(b'\n', self.text.as_bytes()).map(|i| i + 1));
        starts
    }

    /// Zero-based line number containing the given byte offset
    pub fn line_of_offset(&self, offset: usize) -> usize {
        let starts = self.line_starts();
        match starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert) => insert - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> TextDocument {
        TextDocument::new(DocUri::file("test.rs"), text.to_string())
    }

    #[test]
    fn test_uri_scheme_and_path() {
        let uri = DocUri::synthetic("ai-original", "src/lib.rs");
        assert_eq!(uri.scheme(), "ai-original");
        assert_eq!(uri.path(), "src/lib.rs");
        assert_eq!(uri.as_str(), "ai-original:src/lib.rs");
    }

    #[test]
    fn test_text_in_returns_exact_slice() {
        let d = doc("fn main() {}");
        assert_eq!(d.text_in(ByteRange::new(3, 7)).unwrap(), "main");
    }

    #[test]
    fn test_replace_is_byte_exact() {
        let mut d = doc("foo(1,2)");
        d.replace(ByteRange::new(0, 8), "foo(a, b)").unwrap();
        assert_eq!(d.text(), "foo(a, b)");
        assert!(d.is_dirty());
    }

    #[test]
    fn test_replace_middle_of_document() {
        let mut d = doc("let x = 1;\nlet y = 2;\n");
        d.replace(ByteRange::new(11, 21), "let y = 42;").unwrap();
        assert_eq!(d.text(), "let x = 1;\nlet y = 42;\n");
    }

    #[test]
    fn test_out_of_bounds_range_rejected() {
        let d = doc("short");
        let err = d.text_in(ByteRange::new(0, 99)).unwrap_err();
        assert_eq!(
            err,
            DocumentError::OutOfBounds {
                start: 0,
                end: 99,
                len: 5
            }
        );
    }

    #[test]
    fn test_inverted_range_rejected() {
        let d = doc("text");
        let err = d.validate_range(ByteRange::new(3, 1)).unwrap_err();
        assert_eq!(err, DocumentError::InvertedRange { start: 3, end: 1 });
    }

    #[test]
    fn test_non_char_boundary_rejected() {
        // 'é' is two bytes; offset 1 splits it
        let d = doc("é");
        let err = d.validate_range(ByteRange::new(0, 1)).unwrap_err();
        assert_eq!(err, DocumentError::NotCharBoundary(1));
    }

    #[test]
    fn test_failed_replace_leaves_document_untouched() {
        let mut d = doc("original");
        assert!(d.replace(ByteRange::new(0, 99), "clobber").is_err());
        assert_eq!(d.text(), "original");
        assert!(!d.is_dirty());
    }

    #[test]
    fn test_line_starts() {
        let d = doc("a\nbb\nccc");
        assert_eq!(d.line_starts(), vec![0, 2, 5]);
    }

    #[test]
    fn test_line_starts_trailing_newline() {
        let d = doc("a\n");
        assert_eq!(d.line_starts(), vec![0, 2]);
    }

    #[test]
    fn test_line_of_offset() {
        let d = doc("a\nbb\nccc");
        assert_eq!(d.line_of_offset(0), 0);
        assert_eq!(d.line_of_offset(1), 0);
        assert_eq!(d.line_of_offset(2), 1);
        assert_eq!(d.line_of_offset(5), 2);
        assert_eq!(d.line_of_offset(7), 2);
    }

    #[test]
    fn test_overlaps() {
        let a = ByteRange::new(2, 6);
        assert!(a.overlaps(&ByteRange::new(5, 9)));
        assert!(a.overlaps(&ByteRange::new(0, 3)));
        assert!(a.overlaps(&ByteRange::new(3, 4)));
        assert!(!a.overlaps(&ByteRange::new(6, 9)));
        assert!(!a.overlaps(&ByteRange::new(0, 2)));
    }

    #[test]
    fn test_mark_saved_clears_dirty() {
        let mut d = doc("x");
        d.replace(ByteRange::new(0, 1), "y").unwrap();
        assert!(d.is_dirty());
        d.mark_saved();
        assert!(!d.is_dirty());
    }
}
