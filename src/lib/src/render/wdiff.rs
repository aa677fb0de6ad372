//! Word-level rendering over the whole cleaned documents: plain text with
//! bracket markers, or HTML with highlight spans.
//!

use crate::core::word_diff::WordDiff;
use crate::error::IddiffError;
use crate::model::{DocumentDiff, Span};
use crate::render::html;

pub fn render_wdiff(
    diff: &DocumentDiff,
    word_diff: &dyn WordDiff,
) -> Result<String, IddiffError> {
    let spans = document_spans(diff, word_diff);

    let mut output = String::new();
    for span in &spans {
        match span {
            Span::Unchanged(text) => output.push_str(text),
            Span::Deleted(text) => {
                output.push_str("[-");
                output.push_str(text);
                output.push_str("-]");
            }
            Span::Inserted(text) => {
                output.push_str("{+");
                output.push_str(text);
                output.push_str("+}");
            }
        }
    }
    Ok(output)
}

pub fn render_hwdiff(
    diff: &DocumentDiff,
    word_diff: &dyn WordDiff,
) -> Result<String, IddiffError> {
    let spans = document_spans(diff, word_diff);

    let mut body = String::new();
    for span in &spans {
        match span {
            Span::Unchanged(text) => body.push_str(&html::escape(text)),
            Span::Deleted(text) => {
                body.push_str("<span class=\"w-delete\">");
                body.push_str(&html::escape(text));
                body.push_str("</span>");
            }
            Span::Inserted(text) => {
                body.push_str("<span class=\"w-insert\">");
                body.push_str(&html::escape(text));
                body.push_str("</span>");
            }
        }
    }

    Ok(html::page(&html::title(diff), &html::pre_block(&body)))
}

fn document_spans(diff: &DocumentDiff, word_diff: &dyn WordDiff) -> Vec<Span> {
    let left = diff.left.joined();
    let right = diff.right.joined();
    match word_diff.diff(&left, &right) {
        Ok(spans) => spans,
        Err(err) => {
            log::warn!("word diff failed, falling back to whole-document markup: {err}");
            vec![Span::Deleted(left), Span::Inserted(right)]
        }
    }
}
