//! Proposal input
//!
//! Proposed edits arrive as a JSON array of
//! `{start, end, replacement, explanation}` objects. Ranges are validated
//! against the target document at load time: out of bounds, off a char
//! boundary, overlapping, or out of order all reject the file. After an
//! accepted edit, pending proposals are rebased around the change.

use std::path::Path;

use serde::Deserialize;

use crate::document::{ByteRange, TextDocument};
use crate::error::RedlineError;

/// A serialized suggestion awaiting review
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Proposal {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
    #[serde(default)]
    pub explanation: String,
}

impl Proposal {
    pub fn range(&self) -> ByteRange {
        ByteRange::new(self.start, self.end)
    }

    /// Document length change if this proposal is accepted
    pub fn delta(&self) -> isize {
        self.replacement.len() as isize - self.range().len() as isize
    }
}

/// Parse and validate a proposal list against the target document
pub fn parse(json: &str, document: &TextDocument) -> Result<Vec<Proposal>, RedlineError> {
    let proposals: Vec<Proposal> =
        serde_json::from_str(json).map_err(|err| RedlineError::InvalidProposals(err.to_string()))?;

    for (index, proposal) in proposals.iter().enumerate() {
        document
            .validate_range(proposal.range())
            .map_err(|err| RedlineError::InvalidProposals(format!("proposal {index}: {err}")))?;

        if index > 0 {
            let previous = &proposals[index - 1];
            if proposal.start < previous.end {
                return Err(RedlineError::InvalidProposals(format!(
                    "proposal {index} (at {}..{}) overlaps or precedes proposal {} (at {}..{})",
                    proposal.start,
                    proposal.end,
                    index - 1,
                    previous.start,
                    previous.end
                )));
            }
        }
    }

    Ok(proposals)
}

/// Read a proposal file and validate it against the target document
pub fn load(path: &Path, document: &TextDocument) -> Result<Vec<Proposal>, RedlineError> {
    let json = std::fs::read_to_string(path)?;
    parse(&json, document)
}

/// Pending proposals, reviewed front to back
#[derive(Debug, Default)]
pub struct ProposalQueue {
    pending: std::collections::VecDeque<Proposal>,
    total: usize,
    reviewed: usize,
}

impl ProposalQueue {
    pub fn new(proposals: Vec<Proposal>) -> Self {
        let total = proposals.len();
        ProposalQueue {
            pending: proposals.into(),
            total,
            reviewed: 0,
        }
    }

    /// Pop the next proposal for review
    pub fn next(&mut self) -> Option<Proposal> {
        let proposal = self.pending.pop_front();
        if proposal.is_some() {
            self.reviewed += 1;
        }
        proposal
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn reviewed(&self) -> usize {
        self.reviewed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// After an accepted edit over `edited` changed the document length by
    /// `delta`: proposals strictly after the edit shift by `delta`, proposals
    /// overlapping it are dropped as stale. Returns the dropped count.
    pub fn rebase_after_edit(&mut self, edited: ByteRange, delta: isize) -> usize {
        let before = self.pending.len();
        self.pending.retain_mut(|proposal| {
            if proposal.start >= edited.end {
                proposal.start = (proposal.start as isize + delta) as usize;
                proposal.end = (proposal.end as isize + delta) as usize;
                true
            } else if proposal.range().overlaps(&edited) {
                false
            } else {
                // entirely before the edit, offsets unaffected
                true
            }
        });
        let dropped = before - self.pending.len();
        self.total -= dropped;
        dropped
    }
}
