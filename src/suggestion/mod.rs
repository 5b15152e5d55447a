//! Suggestion state holder
//!
//! A single slot holds the one suggestion under review. There is never a
//! queue: setting the slot replaces whatever was there, and every exit path
//! of the lifecycle clears it.

use crate::document::{ByteRange, DocUri};

/// A proposed edit awaiting the user's verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Live document the edit targets
    pub doc: DocUri,
    /// Byte range to replace
    pub range: ByteRange,
    /// Replacement text
    pub replacement: String,
    /// Why the edit is proposed, shown to the user
    pub explanation: String,
}

/// Single-slot storage for the active suggestion
#[derive(Debug, Default)]
pub struct SuggestionSlot {
    current: Option<Suggestion>,
}

impl SuggestionSlot {
    pub fn new() -> Self {
        SuggestionSlot { current: None }
    }

    /// Store a suggestion, replacing any previous one
    pub fn set(&mut self, suggestion: Suggestion) {
        self.current = Some(suggestion);
    }

    /// Empty the slot; safe to call when already empty
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Remove and return the stored suggestion
    pub fn take(&mut self) -> Option<Suggestion> {
        self.current.take()
    }

    pub fn get(&self) -> Option<&Suggestion> {
        self.current.as_ref()
    }

    /// The one externally observable lifecycle signal: true iff occupied
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
