//! Changebar rendering: the entire right-hand document, with lines that
//! belong to a changed hunk marked with a bar. Left-only deletions do not
//! appear, since this mode shows one complete document.
//!

use std::collections::HashSet;

use crate::error::IddiffError;
use crate::model::{DocumentDiff, EditOp};
use crate::render::html;

pub fn render(diff: &DocumentDiff) -> Result<String, IddiffError> {
    let mut changed: HashSet<usize> = HashSet::new();
    for hunk in &diff.hunks {
        for op in &hunk.ops {
            match op {
                EditOp::Insert { right } | EditOp::Replace { right, .. } => {
                    changed.insert(*right);
                }
                _ => {}
            }
        }
    }

    let mut body = String::new();
    for (index, line) in diff.right.lines.iter().enumerate() {
        body.push(if changed.contains(&index) { '|' } else { ' ' });
        body.push_str(&html::escape(&line.text));
        body.push('\n');
    }

    Ok(html::page(&html::title(diff), &html::pre_block(&body)))
}
