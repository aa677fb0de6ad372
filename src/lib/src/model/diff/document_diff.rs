use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::diff::hunk::Hunk;
use crate::model::diff::line::LineSequence;

/// The assembled comparison of two documents: both tokenized sides, the
/// ordered hunk list, and the display filenames.
#[derive(Default, Deserialize, Serialize, Debug, Clone)]
pub struct DocumentDiff {
    pub left: LineSequence,
    pub right: LineSequence,
    pub hunks: Vec<Hunk>,
    pub filename1: Option<PathBuf>,
    pub filename2: Option<PathBuf>,
}
