use serde::{Deserialize, Serialize};

/// One step of the edit script between the two line sequences. Indices are
/// 0-based positions into the left and right `LineSequence`. The alignment
/// emits only Match/Insert/Delete; Replace appears after coalescing.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Match { left: usize, right: usize },
    Insert { right: usize },
    Delete { left: usize },
    Replace { left: usize, right: usize },
}

impl EditOp {
    pub fn is_match(&self) -> bool {
        matches!(self, EditOp::Match { .. })
    }

    pub fn left_index(&self) -> Option<usize> {
        match self {
            EditOp::Match { left, .. } => Some(*left),
            EditOp::Delete { left } => Some(*left),
            EditOp::Replace { left, .. } => Some(*left),
            EditOp::Insert { .. } => None,
        }
    }

    pub fn right_index(&self) -> Option<usize> {
        match self {
            EditOp::Match { right, .. } => Some(*right),
            EditOp::Insert { right } => Some(*right),
            EditOp::Replace { right, .. } => Some(*right),
            EditOp::Delete { .. } => None,
        }
    }
}
