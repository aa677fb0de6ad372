use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONTEXT_LINES;

/// Output mode. Exactly one is active per run.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    SideBySide,
    Wdiff,
    Hwdiff,
    Chbars,
    Abdiff,
}

/// Options threaded through the whole pipeline. Never ambient state.
#[derive(Debug, Clone)]
pub struct DiffOpts {
    pub mode: DiffMode,
    /// Unchanged lines attached around each hunk. 0 means no context.
    pub context_lines: usize,
    /// Collapse runs of whitespace-only lines to a single blank line.
    pub skip_whitespace: bool,
    /// Emit only the HTML table, without the surrounding page.
    pub table_only: bool,
}

impl Default for DiffOpts {
    fn default() -> DiffOpts {
        DiffOpts {
            mode: DiffMode::SideBySide,
            context_lines: DEFAULT_CONTEXT_LINES,
            skip_whitespace: false,
            table_only: false,
        }
    }
}

impl DiffOpts {
    pub fn with_mode(mode: DiffMode) -> DiffOpts {
        DiffOpts {
            mode,
            ..DiffOpts::default()
        }
    }
}
