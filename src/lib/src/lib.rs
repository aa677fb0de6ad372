//! # libiddiff
//!
//! Internet-Draft diff engine: tokenize two drafts, align them line by
//! line with an LCS edit script, group the changes into context-padded
//! hunks and render them for review as a side-by-side table, before/after
//! blocks, changebar-marked text or a word-level diff.
//!
//! ```no_run
//! use libiddiff::diffs;
//! use libiddiff::opts::DiffOpts;
//!
//! # fn main() -> Result<(), libiddiff::error::IddiffError> {
//! let html = diffs::diff_files("draft-00.txt", "draft-01.txt", &DiffOpts::default())?;
//! print!("{html}");
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod core;
pub mod diffs;
pub mod error;
pub mod model;
pub mod opts;
pub mod render;
pub mod util;
