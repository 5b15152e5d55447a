//! Side-by-side comparison of original and proposed text
//!
//! `compute` aligns the two texts into lockstep rows, `presenter` owns the
//! diff session (snapshot registration, fallback, disposal), and `render`
//! draws the two panes.

mod compute;
mod presenter;
mod render;

pub use compute::{DiffRow, RowKind, compute_rows};
pub use presenter::{DiffPresenter, DiffView, PresentOutcome};
pub use render::{PaneSide, render_diff_view};
