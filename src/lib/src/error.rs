//! Errors for the iddiff library
//!
//! Enumeration for all errors that can occur while diffing two drafts
//!

use derive_more::{Display, Error};
use std::io;
use std::path::Path;

pub mod string_error;

pub use crate::error::string_error::StringError;

#[derive(Debug, Display, Error)]
pub enum IddiffError {
    // User input
    FileNotFound(StringError),
    InvalidArguments(StringError),

    // Word diff tool (recoverable, renderers degrade instead of aborting)
    WordDiffUnavailable(StringError),

    // Alignment did not cover every line index. A defect, not user error.
    InternalInvariant(StringError),

    // External library errors
    IO(io::Error),

    // Fallback
    Basic(StringError),
}

impl IddiffError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        IddiffError::Basic(StringError::from(s.as_ref()))
    }

    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        IddiffError::FileNotFound(StringError::new(format!(
            "Could not read file {}",
            path.as_ref().display()
        )))
    }

    pub fn invalid_arguments(s: impl AsRef<str>) -> Self {
        IddiffError::InvalidArguments(StringError::from(s.as_ref()))
    }

    pub fn word_diff_unavailable(s: impl AsRef<str>) -> Self {
        IddiffError::WordDiffUnavailable(StringError::from(s.as_ref()))
    }

    pub fn internal_invariant(s: impl AsRef<str>) -> Self {
        IddiffError::InternalInvariant(StringError::from(s.as_ref()))
    }
}

impl From<io::Error> for IddiffError {
    fn from(error: io::Error) -> Self {
        IddiffError::IO(error)
    }
}

impl From<String> for IddiffError {
    fn from(error: String) -> Self {
        IddiffError::Basic(StringError::from(error))
    }
}

