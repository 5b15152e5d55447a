//! Suggestion lifecycle controller
//!
//! Orchestrates the whole review flow: show stores the suggestion and opens
//! the comparison, accept applies the stored edit, reject discards it. The
//! active flag flips synchronously inside show, before any rendering, and
//! every exit path runs the same unconditional cleanup. Host failures inside
//! accept/reject are caught and logged; nothing propagates past here.

use crate::decoration::Highlighter;
use crate::diff::{DiffPresenter, PresentOutcome};
use crate::document::{ByteRange, DocUri};
use crate::host::{EditorHost, Notice};
use crate::suggestion::{Suggestion, SuggestionSlot};

pub struct SuggestionController {
    slot: SuggestionSlot,
    presenter: DiffPresenter,
    highlighter: Highlighter,
    auto_save: bool,
    decoration_pending: bool,
}

impl SuggestionController {
    pub fn new(inline_decorations: bool, auto_save: bool) -> Self {
        SuggestionController {
            slot: SuggestionSlot::new(),
            presenter: DiffPresenter::new(),
            highlighter: Highlighter::new(inline_decorations),
            auto_save,
            decoration_pending: false,
        }
    }

    /// Whether a suggestion is currently under review. The host UI gates
    /// its accept/reject keybindings on this.
    pub fn is_active(&self) -> bool {
        self.slot.is_active()
    }

    pub fn active_suggestion(&self) -> Option<&Suggestion> {
        self.slot.get()
    }

    /// Present a proposed edit for review. Any in-flight suggestion is
    /// superseded: its highlight is cleared and its diff session disposed
    /// before the new one is stored.
    pub fn show(
        &mut self,
        host: &mut dyn EditorHost,
        doc: &DocUri,
        range: ByteRange,
        new_code: &str,
        explanation: &str,
    ) {
        self.highlighter.clear(host);
        if self.presenter.has_session() {
            self.presenter.close_session(host);
        }
        self.decoration_pending = false;

        let original = match host.text_in(doc, range) {
            Ok(text) => text,
            Err(err) => {
                log::error!("Cannot read target range {}..{} of {doc}: {err}", range.start, range.end);
                host.notify(Notice::error(format!("Cannot present suggestion: {err}")));
                self.slot.clear();
                return;
            }
        };

        self.slot.set(Suggestion {
            doc: doc.clone(),
            range,
            replacement: new_code.to_string(),
            explanation: explanation.to_string(),
        });
        // Active from this point on; keybinding checks and accept/reject
        // now agree on what they will find.

        let outcome = self
            .presenter
            .present(host, doc.path(), original, new_code.to_string());

        host.notify(
            Notice::info(format!("AI suggestion: {explanation}")).with_action("x: full explanation"),
        );

        match outcome {
            PresentOutcome::Opened => {
                // highlight waits for the host to report the view open
                self.decoration_pending = true;
            }
            PresentOutcome::LoggedFallback => {
                // no view-opened event will ever arrive on this path
                self.highlighter.mark(host, doc, range);
            }
        }
    }

    /// The host reports the comparison view has opened; apply the deferred
    /// highlight for the active suggestion.
    pub fn on_diff_view_opened(&mut self, host: &mut dyn EditorHost) {
        if !self.decoration_pending {
            return;
        }
        self.decoration_pending = false;
        let target = self.slot.get().map(|s| (s.doc.clone(), s.range));
        if let Some((doc, range)) = target {
            self.highlighter.mark(host, &doc, range);
        }
    }

    /// The host reports the comparison view was closed by the user
    pub fn on_diff_view_closed(&mut self) {
        self.presenter.handle_view_closed();
    }

    /// Apply the active suggestion as a single atomic edit
    pub fn accept(&mut self, host: &mut dyn EditorHost) {
        let Some(suggestion) = self.slot.get().cloned() else {
            log::warn!("Accept invoked with no active suggestion");
            host.notify(Notice::warning("No active suggestion to accept"));
            return;
        };

        self.presenter.close_session(host);

        if let Err(err) = host.open_document(&suggestion.doc) {
            log::warn!("Could not re-open {}: {err}", suggestion.doc);
        }

        match host.apply_edit(&suggestion.doc, suggestion.range, &suggestion.replacement) {
            Ok(()) => {
                if self.auto_save {
                    match host.save_document(&suggestion.doc) {
                        Ok(()) => host.notify(Notice::info("Suggestion applied and saved")),
                        Err(err) => {
                            log::error!("Save after accept failed: {err}");
                            host.notify(Notice::error(format!(
                                "Suggestion applied but save failed: {err}"
                            )));
                        }
                    }
                } else {
                    host.notify(Notice::info("Suggestion applied"));
                }
            }
            Err(err) => {
                log::error!("Failed to apply suggestion: {err}");
                host.notify(Notice::error(format!("Failed to apply suggestion: {err}")));
            }
        }

        self.cleanup(host);
    }

    /// Discard the active suggestion, leaving the document untouched
    pub fn reject(&mut self, host: &mut dyn EditorHost) {
        if !self.slot.is_active() {
            log::debug!("Reject invoked with no active suggestion");
            return;
        }
        let doc = self.slot.get().map(|s| s.doc.clone());

        self.presenter.close_session(host);

        if let Some(doc) = doc {
            if let Err(err) = host.open_document(&doc) {
                log::warn!("Could not re-focus {doc}: {err}");
            }
        }

        host.notify(Notice::info("Suggestion rejected"));
        self.cleanup(host);
    }

    /// Open the full explanation of the active suggestion in a side view
    pub fn show_explanation(&mut self, host: &mut dyn EditorHost) {
        let Some(suggestion) = self.slot.get() else {
            return;
        };
        let title = format!("Why change {}", suggestion.doc.path());
        let body = suggestion.explanation.clone();
        if let Err(err) = host.open_explanation_view(&title, &body) {
            log::warn!("Could not open explanation view: {err}");
            host.notify(Notice::warning("Could not open the explanation view"));
        }
    }

    fn cleanup(&mut self, host: &mut dyn EditorHost) {
        self.highlighter.clear(host);
        self.slot.clear();
        self.decoration_pending = false;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
