//! Constants used throughout the library
//!

pub const IDDIFF_VERSION: &str = "0.4.0";

/// Context lines shown around each hunk unless configured otherwise.
pub const DEFAULT_CONTEXT_LINES: usize = 8;

/// Program invoked for external word-level diffs.
pub const WDIFF_PROGRAM: &str = "wdiff";
