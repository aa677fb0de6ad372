//! Data structures produced by the diff pipeline
//!

pub mod diff;

pub use crate::model::diff::document_diff::DocumentDiff;
pub use crate::model::diff::edit_op::EditOp;
pub use crate::model::diff::hunk::Hunk;
pub use crate::model::diff::line::{Line, LineSequence};
pub use crate::model::diff::span::Span;
