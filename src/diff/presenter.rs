//! Diff session ownership
//!
//! The presenter turns a suggestion into an open comparison view. It owns
//! the snapshot registry for the session, degrades to the host log channel
//! when the view cannot be opened, and releases the session's registrations
//! on close or supersede. Presentation failures never propagate.

use crate::content::{ProviderRegistry, SCHEME_PREFIX, SnapshotProvider};
use crate::diff::compute::{DiffRow, compute_rows};
use crate::document::DocUri;
use crate::host::{EditorHost, Notice};

/// View model handed to the host for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffView {
    pub title: String,
    pub original_uri: DocUri,
    pub proposed_uri: DocUri,
    pub rows: Vec<DiffRow>,
}

/// How a presentation attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentOutcome {
    /// The comparison view is open
    Opened,
    /// The view could not open; the proposed text went to the log channel
    LoggedFallback,
}

/// Owns the snapshot providers and lifetime of one diff session
#[derive(Debug, Default)]
pub struct DiffPresenter {
    registry: ProviderRegistry,
    session_open: bool,
}

impl DiffPresenter {
    pub fn new() -> Self {
        DiffPresenter {
            registry: ProviderRegistry::new(),
            session_open: false,
        }
    }

    /// Open a side-by-side comparison of the captured original text and the
    /// proposed replacement. On host failure the proposed text is written to
    /// the log channel instead and the session is disposed immediately.
    pub fn present(
        &mut self,
        host: &mut dyn EditorHost,
        doc_name: &str,
        original: String,
        proposed: String,
    ) -> PresentOutcome {
        let original = SnapshotProvider::original(doc_name, original);
        let proposed = SnapshotProvider::proposed(doc_name, proposed);
        let original_uri = original.uri().clone();
        let proposed_uri = proposed.uri().clone();
        self.registry.register(original);
        self.registry.register(proposed);

        // Content is addressed through the registry by URI from here on
        let original_text = self.registry.resolve(&original_uri).unwrap_or("").to_string();
        let proposed_text = self.registry.resolve(&proposed_uri).unwrap_or("").to_string();

        let view = DiffView {
            title: format!("AI Suggestion: {doc_name} (Original ↔ Proposed)"),
            original_uri,
            proposed_uri,
            rows: compute_rows(&original_text, &proposed_text),
        };

        match host.open_diff_view(view) {
            Ok(()) => {
                self.session_open = true;
                PresentOutcome::Opened
            }
            Err(err) => {
                log::warn!("Comparison view unavailable, writing proposal to log: {err}");
                host.append_log(&format!("--- proposed change for {doc_name} ---"));
                for line in proposed_text.lines() {
                    host.append_log(line);
                }
                host.notify(Notice::warning(
                    "Could not open the comparison view; proposed text written to the log",
                ));
                self.registry.dispose_scheme_prefix(SCHEME_PREFIX);
                self.session_open = false;
                PresentOutcome::LoggedFallback
            }
        }
    }

    /// The host reported the comparison view closed (e.g. the user dismissed
    /// it). Releases only this session's registrations.
    pub fn handle_view_closed(&mut self) {
        if self.session_open {
            let dropped = self.registry.dispose_scheme_prefix(SCHEME_PREFIX);
            log::debug!("Diff view closed, released {dropped} snapshot providers");
            self.session_open = false;
        }
    }

    /// Controller-initiated teardown: close the view and release the
    /// session's registrations. Also runs when a new suggestion supersedes
    /// an in-progress session.
    pub fn close_session(&mut self, host: &mut dyn EditorHost) {
        host.close_diff_view();
        self.registry.dispose_scheme_prefix(SCHEME_PREFIX);
        self.session_open = false;
    }

    pub fn has_session(&self) -> bool {
        self.session_open
    }

    pub fn provider_count(&self) -> usize {
        self.registry.len()
    }
}

#[cfg(test)]
#[path = "presenter_tests.rs"]
mod presenter_tests;
