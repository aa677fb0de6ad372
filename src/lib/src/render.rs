//! Render a computed DocumentDiff in one of the output modes.
//!

pub mod abdiff;
pub mod chbars;
pub mod html;
pub mod side_by_side;
pub mod wdiff;

use crate::core::word_diff::WordDiff;
use crate::error::IddiffError;
use crate::model::DocumentDiff;
use crate::opts::{DiffMode, DiffOpts};

pub fn render(
    diff: &DocumentDiff,
    opts: &DiffOpts,
    word_diff: &dyn WordDiff,
) -> Result<String, IddiffError> {
    match opts.mode {
        DiffMode::SideBySide => side_by_side::render(diff, opts, word_diff),
        DiffMode::Abdiff => abdiff::render(diff),
        DiffMode::Chbars => chbars::render(diff),
        DiffMode::Wdiff => wdiff::render_wdiff(diff, word_diff),
        DiffMode::Hwdiff => wdiff::render_hwdiff(diff, word_diff),
    }
}
