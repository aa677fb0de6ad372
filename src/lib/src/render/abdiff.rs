//! Before/after rendering: per hunk, the full old block then the full new
//! block, instead of interleaving.
//!

use crate::error::IddiffError;
use crate::model::DocumentDiff;
use crate::render::html;

pub fn render(diff: &DocumentDiff) -> Result<String, IddiffError> {
    let mut blocks = String::new();

    for hunk in &diff.hunks {
        blocks.push_str("OLD:\n\n");
        for op in &hunk.ops {
            if let Some(left) = op.left_index() {
                blocks.push_str("   ");
                blocks.push_str(&html::escape(diff.left.text(left)));
                blocks.push('\n');
            }
        }
        blocks.push_str("\nNEW:\n\n");
        for op in &hunk.ops {
            if let Some(right) = op.right_index() {
                blocks.push_str("   ");
                blocks.push_str(&html::escape(diff.right.text(right)));
                blocks.push('\n');
            }
        }
        blocks.push('\n');
    }

    Ok(html::page(&html::title(diff), &html::pre_block(&blocks)))
}
