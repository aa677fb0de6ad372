//! Two-column HTML table rendering, one row per aligned line pair.
//!

use crate::core::tokenize;
use crate::core::word_diff::WordDiff;
use crate::error::IddiffError;
use crate::model::{DocumentDiff, EditOp, Span};
use crate::opts::DiffOpts;
use crate::render::html;

pub fn render(
    diff: &DocumentDiff,
    opts: &DiffOpts,
    word_diff: &dyn WordDiff,
) -> Result<String, IddiffError> {
    let mut rows = String::new();
    let mut contexts = 0;
    let mut previous_end = 0;
    let mut degraded = false;

    for hunk in &diff.hunks {
        if hunk.start > previous_end {
            rows.push_str(&html::context_rows(contexts));
            contexts += 1;
        }
        previous_end = hunk.end;

        for op in &hunk.ops {
            match op {
                EditOp::Match { left, right } => {
                    rows.push_str(&html::unchanged_row(
                        &html::escape(diff.left.text(*left)),
                        &html::escape(diff.right.text(*right)),
                    ));
                }
                EditOp::Replace { left, right } => {
                    let left_text = diff.left.text(*left);
                    let right_text = diff.right.text(*right);
                    let spans = word_spans(word_diff, left_text, right_text, &mut degraded);
                    let lline = marked_cell(&spans, left_text, false);
                    let rline = marked_cell(&spans, right_text, true);
                    if !lline.is_empty() || !rline.is_empty() {
                        rows.push_str(&html::changed_row(&lline, &rline));
                    }
                }
                EditOp::Delete { left } => {
                    let lline = whole_cell(diff.left.text(*left), "delete");
                    if !lline.is_empty() {
                        rows.push_str(&html::changed_row(&lline, ""));
                    }
                }
                EditOp::Insert { right } => {
                    let rline = whole_cell(diff.right.text(*right), "insert");
                    if !rline.is_empty() {
                        rows.push_str(&html::changed_row("", &rline));
                    }
                }
            }
        }
    }

    let table = html::table(
        &html::display_filename(diff.filename1.as_deref()),
        &html::display_filename(diff.filename2.as_deref()),
        &rows,
    );

    if opts.table_only {
        Ok(table)
    } else {
        Ok(html::page(&html::title(diff), &table))
    }
}

fn word_spans(
    word_diff: &dyn WordDiff,
    left: &str,
    right: &str,
    degraded: &mut bool,
) -> Vec<Span> {
    match word_diff.diff(left, right) {
        Ok(spans) => spans,
        Err(err) => {
            if !*degraded {
                log::warn!("word diff failed, falling back to whole-line markup: {err}");
                *degraded = true;
            }
            vec![
                Span::Deleted(left.to_string()),
                Span::Inserted(right.to_string()),
            ]
        }
    }
}

/// One side of a changed row, with the differing words wrapped in a marker
/// span. A side that is whitespace-only renders as an empty cell; a changed
/// row with two empty cells is dropped by the caller.
fn marked_cell(spans: &[Span], text: &str, right_side: bool) -> String {
    if tokenize::is_blank(text) {
        return String::new();
    }
    let class = if right_side { "insert" } else { "delete" };
    let mut cell = String::new();
    for span in spans {
        match span {
            Span::Unchanged(text) => cell.push_str(&html::escape(text)),
            Span::Deleted(text) if !right_side => {
                cell.push_str(&marker(class, text));
            }
            Span::Inserted(text) if right_side => {
                cell.push_str(&marker(class, text));
            }
            _ => {}
        }
    }
    cell
}

fn whole_cell(text: &str, class: &str) -> String {
    if tokenize::is_blank(text) {
        return String::new();
    }
    marker(class, text)
}

fn marker(class: &str, text: &str) -> String {
    format!("<span class=\"{class}\">{}</span>", html::escape(text))
}
