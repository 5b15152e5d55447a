//! Application state

use std::path::PathBuf;

use crate::app::TuiHost;
use crate::config::Config;
use crate::controller::SuggestionController;
use crate::diff::PaneSide;
use crate::document::TextDocument;
use crate::host::{EditorHost, Notice};
use crate::proposals::{Proposal, ProposalQueue};

pub struct App {
    pub host: TuiHost,
    pub controller: SuggestionController,
    pub queue: ProposalQueue,
    pub focus: PaneSide,
    pub side_scroll: u16,
    pub doc_scroll: u16,
    pub accepted: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        document: TextDocument,
        target_path: PathBuf,
        proposals: Vec<Proposal>,
        config: &Config,
    ) -> Self {
        App {
            host: TuiHost::new(document, target_path),
            controller: SuggestionController::new(
                config.review.inline_decorations,
                config.review.auto_save,
            ),
            queue: ProposalQueue::new(proposals),
            focus: PaneSide::Proposed,
            side_scroll: 0,
            doc_scroll: 0,
            accepted: 0,
            should_quit: false,
        }
    }

    /// Present the next pending proposal. Skips any proposal the controller
    /// refuses (its range became unreadable), and announces completion when
    /// the queue runs dry.
    pub fn advance(&mut self) {
        while let Some(proposal) = self.queue.next() {
            let doc = self.host.document.uri().clone();
            self.controller.show(
                &mut self.host,
                &doc,
                proposal.range(),
                &proposal.replacement,
                &proposal.explanation,
            );
            if self.controller.is_active() {
                // the comparison pane is on screen as soon as show returns
                if self.host.diff.is_some() {
                    self.controller.on_diff_view_opened(&mut self.host);
                }
                self.side_scroll = 0;
                return;
            }
        }
        self.host.notifications.show(Notice::info(format!(
            "Review complete: {} of {} accepted (q to quit)",
            self.accepted,
            self.queue.total()
        )));
    }

    /// Accept the active suggestion, rebase the pending queue around the
    /// applied edit, and move on to the next proposal
    pub fn accept_current(&mut self) {
        let Some(suggestion) = self.controller.active_suggestion() else {
            return;
        };
        let edited = suggestion.range;
        let delta = suggestion.replacement.len() as isize - edited.len() as isize;

        self.controller.accept(&mut self.host);
        self.accepted += 1;

        let dropped = self.queue.rebase_after_edit(edited, delta);
        if dropped > 0 {
            self.host.notifications.show(Notice::warning(format!(
                "Discarded {dropped} stale proposal(s) overlapping the accepted edit"
            )));
        }
        self.advance();
    }

    /// Reject the active suggestion and move on to the next proposal
    pub fn reject_current(&mut self) {
        if !self.controller.is_active() {
            return;
        }
        self.controller.reject(&mut self.host);
        self.advance();
    }
}
