//! Group changed ops into hunks with context windows.
//!

use crate::model::{EditOp, Hunk};

/// Scan the coalesced edit script and build the ordered hunk list. Every
/// maximal run of non-Match ops becomes a candidate, padded with up to
/// `context_lines` Match ops on each side and truncated at the script
/// boundaries. Candidates whose windows touch or overlap merge into one
/// hunk, keeping the unchanged ops between them.
pub fn build_hunks(ops: &[EditOp], context_lines: usize) -> Vec<Hunk> {
    let mut windows: Vec<(usize, usize)> = Vec::new();

    let mut i = 0;
    while i < ops.len() {
        if ops[i].is_match() {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < ops.len() && !ops[i].is_match() {
            i += 1;
        }
        let lo = run_start.saturating_sub(context_lines);
        let hi = i.saturating_add(context_lines).min(ops.len());
        match windows.last_mut() {
            Some(last) if lo <= last.1 => last.1 = hi,
            _ => windows.push((lo, hi)),
        }
    }

    windows
        .into_iter()
        .map(|(start, end)| Hunk {
            ops: ops[start..end].to_vec(),
            start,
            end,
        })
        .collect()
}
