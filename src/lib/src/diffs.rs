//! # diffs
//!
//! Compare two drafts to find changes between them.
//!

use std::path::{Path, PathBuf};

use crate::core::{align, hunks, tokenize, word_diff};
use crate::error::IddiffError;
use crate::model::DocumentDiff;
use crate::opts::DiffOpts;
use crate::render;
use crate::util;

/// Read, compare and render two files. The returned string is the final
/// artifact for the selected mode, ready for stdout.
pub fn diff_files(
    file_1: impl AsRef<Path>,
    file_2: impl AsRef<Path>,
    opts: &DiffOpts,
) -> Result<String, IddiffError> {
    let file_1 = file_1.as_ref();
    let file_2 = file_2.as_ref();
    let left_raw = util::fs::read_from_path(file_1)?;
    let right_raw = util::fs::read_from_path(file_2)?;

    let diff = compute(
        &left_raw,
        &right_raw,
        Some(file_1.to_path_buf()),
        Some(file_2.to_path_buf()),
        opts,
    )?;
    let word_diff = word_diff::resolve(opts.mode);
    render::render(&diff, opts, word_diff.as_ref())
}

/// Compare and render two in-memory documents.
pub fn diff_text(
    left_raw: &str,
    right_raw: &str,
    opts: &DiffOpts,
) -> Result<String, IddiffError> {
    let diff = compute(left_raw, right_raw, None, None, opts)?;
    let word_diff = word_diff::resolve(opts.mode);
    render::render(&diff, opts, word_diff.as_ref())
}

/// Run the pipeline up to the hunk list, without rendering.
pub fn compute(
    left_raw: &str,
    right_raw: &str,
    filename1: Option<PathBuf>,
    filename2: Option<PathBuf>,
    opts: &DiffOpts,
) -> Result<DocumentDiff, IddiffError> {
    let left = tokenize::tokenize(left_raw, opts.skip_whitespace);
    let right = tokenize::tokenize(right_raw, opts.skip_whitespace);

    let ops = align::align(&left, &right);
    align::verify_coverage(&ops, left.len(), right.len())?;

    let ops = align::coalesce(&ops);
    align::verify_coverage(&ops, left.len(), right.len())?;

    let hunks = hunks::build_hunks(&ops, opts.context_lines);

    Ok(DocumentDiff {
        left,
        right,
        hunks,
        filename1,
        filename2,
    })
}
