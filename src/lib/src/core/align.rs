//! Minimum edit script between two line sequences, LCS based.
//!
//! O(N*M) time and space, which is fine for draft-sized documents. The walk
//! is deterministic: a pair of equal lines is matched as early as possible,
//! and on cost ties a Delete is emitted before an Insert, so two runs over
//! the same input produce byte-identical scripts.
//!

use crate::error::IddiffError;
use crate::model::{EditOp, LineSequence};

pub fn align(left: &LineSequence, right: &LineSequence) -> Vec<EditOp> {
    let left_texts: Vec<&str> = left.lines.iter().map(|line| line.text.as_str()).collect();
    let right_texts: Vec<&str> = right.lines.iter().map(|line| line.text.as_str()).collect();
    align_texts(&left_texts, &right_texts)
}

/// Alignment over any token sequence. Also used by the in-process word
/// differ, where tokens are words rather than lines.
pub fn align_texts(left: &[&str], right: &[&str]) -> Vec<EditOp> {
    let n = left.len();
    let m = right.len();

    // lcs[i][j] holds the LCS length of left[i..] vs right[j..].
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if left[i] == right[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops: Vec<EditOp> = Vec::with_capacity(n.max(m));
    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if left[i] == right[j] {
            ops.push(EditOp::Match { left: i, right: j });
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            ops.push(EditOp::Delete { left: i });
            i += 1;
        } else {
            ops.push(EditOp::Insert { right: j });
            j += 1;
        }
    }
    while i < n {
        ops.push(EditOp::Delete { left: i });
        i += 1;
    }
    while j < m {
        ops.push(EditOp::Insert { right: j });
        j += 1;
    }

    ops
}

/// Pair up Delete and Insert runs between matches into Replace ops, for
/// rendering. The alignment itself stays pure; this runs at the hunk stage.
pub fn coalesce(ops: &[EditOp]) -> Vec<EditOp> {
    let mut result: Vec<EditOp> = Vec::with_capacity(ops.len());
    let mut deletes: Vec<usize> = Vec::new();
    let mut inserts: Vec<usize> = Vec::new();

    let flush = |result: &mut Vec<EditOp>, deletes: &mut Vec<usize>, inserts: &mut Vec<usize>| {
        let paired = deletes.len().min(inserts.len());
        for k in 0..paired {
            result.push(EditOp::Replace {
                left: deletes[k],
                right: inserts[k],
            });
        }
        for &left in &deletes[paired..] {
            result.push(EditOp::Delete { left });
        }
        for &right in &inserts[paired..] {
            result.push(EditOp::Insert { right });
        }
        deletes.clear();
        inserts.clear();
    };

    for op in ops {
        match op {
            EditOp::Match { .. } | EditOp::Replace { .. } => {
                flush(&mut result, &mut deletes, &mut inserts);
                result.push(*op);
            }
            EditOp::Delete { left } => deletes.push(*left),
            EditOp::Insert { right } => inserts.push(*right),
        }
    }
    flush(&mut result, &mut deletes, &mut inserts);

    result
}

/// Every left and right index must appear exactly once, in order. Anything
/// else is a defect in the engine, not a user error.
pub fn verify_coverage(
    ops: &[EditOp],
    left_len: usize,
    right_len: usize,
) -> Result<(), IddiffError> {
    let mut next_left = 0;
    let mut next_right = 0;
    for op in ops {
        if let Some(left) = op.left_index() {
            if left != next_left {
                return Err(IddiffError::internal_invariant(format!(
                    "alignment skipped left line {next_left}, got {left}"
                )));
            }
            next_left += 1;
        }
        if let Some(right) = op.right_index() {
            if right != next_right {
                return Err(IddiffError::internal_invariant(format!(
                    "alignment skipped right line {next_right}, got {right}"
                )));
            }
            next_right += 1;
        }
    }
    if next_left != left_len || next_right != right_len {
        return Err(IddiffError::internal_invariant(format!(
            "alignment covered {next_left}/{left_len} left and {next_right}/{right_len} right lines"
        )));
    }
    Ok(())
}
