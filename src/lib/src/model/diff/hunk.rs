use serde::{Deserialize, Serialize};

use crate::model::diff::edit_op::EditOp;

/// A contiguous window of the edit script: up to `context_lines` leading
/// Match ops, the changed ops (with interior context when two windows
/// merged), and up to `context_lines` trailing Match ops. `start`/`end` are
/// the op-index bounds of the window within the full coalesced script, so
/// renderers can tell whether unchanged material was elided between hunks.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Hunk {
    pub ops: Vec<EditOp>,
    pub start: usize,
    pub end: usize,
}
