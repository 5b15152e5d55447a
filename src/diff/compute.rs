//! Row alignment for the side-by-side view

use similar::{DiffTag, TextDiff};

/// How a row differs between the two panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Equal,
    Delete,
    Insert,
    Replace,
}

/// One aligned row. `left`/`right` carry a 1-based line number and the line
/// text; `None` means the pane shows a padding row so both panes stay in
/// lockstep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub kind: RowKind,
    pub left: Option<(usize, String)>,
    pub right: Option<(usize, String)>,
}

/// Align original and proposed text into side-by-side rows using a
/// line-level diff
pub fn compute_rows(original: &str, proposed: &str) -> Vec<DiffRow> {
    let old_lines: Vec<&str> = original.lines().collect();
    let new_lines: Vec<&str> = proposed.lines().collect();
    let diff = TextDiff::from_lines(original, proposed);

    let mut rows = Vec::new();
    for op in diff.ops() {
        let old = op.old_range();
        let new = op.new_range();
        match op.tag() {
            DiffTag::Equal => {
                for (i, j) in old.zip(new) {
                    rows.push(DiffRow {
                        kind: RowKind::Equal,
                        left: Some((i + 1, old_lines[i].to_string())),
                        right: Some((j + 1, new_lines[j].to_string())),
                    });
                }
            }
            DiffTag::Delete => {
                for i in old {
                    rows.push(DiffRow {
                        kind: RowKind::Delete,
                        left: Some((i + 1, old_lines[i].to_string())),
                        right: None,
                    });
                }
            }
            DiffTag::Insert => {
                for j in new {
                    rows.push(DiffRow {
                        kind: RowKind::Insert,
                        left: None,
                        right: Some((j + 1, new_lines[j].to_string())),
                    });
                }
            }
            DiffTag::Replace => {
                // Pad the shorter side so the panes stay aligned
                let count = old.len().max(new.len());
                for k in 0..count {
                    let left = old
                        .clone()
                        .nth(k)
                        .map(|i| (i + 1, old_lines[i].to_string()));
                    let right = new
                        .clone()
                        .nth(k)
                        .map(|j| (j + 1, new_lines[j].to_string()));
                    rows.push(DiffRow {
                        kind: RowKind::Replace,
                        left,
                        right,
                    });
                }
            }
        }
    }
    rows
}
