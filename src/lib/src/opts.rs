pub mod diff_opts;

pub use crate::opts::diff_opts::{DiffMode, DiffOpts};
