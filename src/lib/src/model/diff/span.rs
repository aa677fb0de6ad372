use serde::{Deserialize, Serialize};

/// A word-level fragment of a changed line pair. Concatenating the
/// Unchanged and Deleted spans reconstructs the left input exactly;
/// Unchanged and Inserted reconstruct the right input.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Unchanged(String),
    Inserted(String),
    Deleted(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Unchanged(text) => text,
            Span::Inserted(text) => text,
            Span::Deleted(text) => text,
        }
    }
}
