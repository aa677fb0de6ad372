//! Word-level diffing behind an injected interface.
//!
//! `ExternalWdiff` shells out to GNU wdiff; `TokenDiff` is the in-process
//! fallback running the same LCS over word tokens. Both return a Span
//! stream whose Unchanged+Deleted concatenation reconstructs the left
//! input exactly and Unchanged+Inserted the right input.
//!

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

use crate::constants::WDIFF_PROGRAM;
use crate::core::align;
use crate::error::IddiffError;
use crate::model::{EditOp, Span};
use crate::opts::DiffMode;

pub trait WordDiff {
    fn diff(&self, left: &str, right: &str) -> Result<Vec<Span>, IddiffError>;
}

/// Pick the adapter for a run. Word-level modes prefer the external tool
/// when it is installed; everything else (and the fallback) uses the
/// deterministic in-process differ.
pub fn resolve(mode: DiffMode) -> Box<dyn WordDiff> {
    match mode {
        DiffMode::Wdiff | DiffMode::Hwdiff => {
            let external = ExternalWdiff::default();
            if external.is_available() {
                Box::new(external)
            } else {
                log::debug!("{WDIFF_PROGRAM} not found, using the built-in token differ");
                Box::new(TokenDiff)
            }
        }
        _ => Box::new(TokenDiff),
    }
}

fn push_span(spans: &mut Vec<Span>, span: Span) {
    if span.text().is_empty() {
        return;
    }
    if let Some(last) = spans.last_mut() {
        match (last, &span) {
            (Span::Unchanged(last), Span::Unchanged(text))
            | (Span::Inserted(last), Span::Inserted(text))
            | (Span::Deleted(last), Span::Deleted(text)) => {
                last.push_str(text);
                return;
            }
            _ => {}
        }
    }
    spans.push(span);
}

/// In-process word differ: alternating word/whitespace tokens, aligned with
/// the same engine the lines go through.
pub struct TokenDiff;

fn tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(first) = rest.chars().next() {
        let in_whitespace = first.is_whitespace();
        let end = rest
            .find(|c: char| c.is_whitespace() != in_whitespace)
            .unwrap_or(rest.len());
        tokens.push(&rest[..end]);
        rest = &rest[end..];
    }
    tokens
}

impl WordDiff for TokenDiff {
    fn diff(&self, left: &str, right: &str) -> Result<Vec<Span>, IddiffError> {
        let left_tokens = tokens(left);
        let right_tokens = tokens(right);
        let ops = align::align_texts(&left_tokens, &right_tokens);

        let mut spans: Vec<Span> = Vec::new();
        for op in ops {
            match op {
                EditOp::Match { left, .. } => {
                    push_span(&mut spans, Span::Unchanged(left_tokens[left].to_string()))
                }
                EditOp::Delete { left } => {
                    push_span(&mut spans, Span::Deleted(left_tokens[left].to_string()))
                }
                EditOp::Insert { right } => {
                    push_span(&mut spans, Span::Inserted(right_tokens[right].to_string()))
                }
                EditOp::Replace { left, right } => {
                    push_span(&mut spans, Span::Deleted(left_tokens[left].to_string()));
                    push_span(&mut spans, Span::Inserted(right_tokens[right].to_string()));
                }
            }
        }
        Ok(spans)
    }
}

/// Shells out to the `wdiff` binary and parses its `[-…-]`/`{+…+}` stream.
pub struct ExternalWdiff {
    program: String,
}

impl Default for ExternalWdiff {
    fn default() -> ExternalWdiff {
        ExternalWdiff::new(WDIFF_PROGRAM)
    }
}

impl ExternalWdiff {
    pub fn new(program: impl Into<String>) -> ExternalWdiff {
        ExternalWdiff {
            program: program.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

impl WordDiff for ExternalWdiff {
    fn diff(&self, left: &str, right: &str) -> Result<Vec<Span>, IddiffError> {
        let unavailable =
            |err: &dyn std::fmt::Display| -> IddiffError {
                IddiffError::word_diff_unavailable(format!("{}: {err}", self.program))
            };

        let mut left_file = NamedTempFile::new().map_err(|err| unavailable(&err))?;
        left_file
            .write_all(left.as_bytes())
            .map_err(|err| unavailable(&err))?;
        let mut right_file = NamedTempFile::new().map_err(|err| unavailable(&err))?;
        right_file
            .write_all(right.as_bytes())
            .map_err(|err| unavailable(&err))?;

        let output = Command::new(&self.program)
            .arg(left_file.path())
            .arg(right_file.path())
            .output()
            .map_err(|err| unavailable(&err))?;

        // wdiff exits 1 when the inputs differ, like diff itself
        match output.status.code() {
            Some(0) | Some(1) => {}
            _ => return Err(unavailable(&format!("exited with {}", output.status))),
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_marked_stream(&stdout))
    }
}

/// Parse a wdiff-convention token stream into Spans.
pub fn parse_marked_stream(stream: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut rest = stream;

    loop {
        let delete_at = rest.find("[-");
        let insert_at = rest.find("{+");
        let (at, deleted) = match (delete_at, insert_at) {
            (Some(d), Some(i)) if d < i => (d, true),
            (Some(d), None) => (d, true),
            (Some(_), Some(i)) | (None, Some(i)) => (i, false),
            (None, None) => {
                push_span(&mut spans, Span::Unchanged(rest.to_string()));
                return spans;
            }
        };

        push_span(&mut spans, Span::Unchanged(rest[..at].to_string()));
        let body = &rest[at + 2..];
        let closer = if deleted { "-]" } else { "+}" };
        let (text, remainder) = match body.find(closer) {
            Some(end) => (&body[..end], &body[end + 2..]),
            None => (body, ""),
        };
        if deleted {
            push_span(&mut spans, Span::Deleted(text.to_string()));
        } else {
            push_span(&mut spans, Span::Inserted(text.to_string()));
        }
        rest = remainder;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IddiffError;

    fn reconstruct_left(spans: &[Span]) -> String {
        spans
            .iter()
            .filter(|span| !matches!(span, Span::Inserted(_)))
            .map(|span| span.text())
            .collect()
    }

    fn reconstruct_right(spans: &[Span]) -> String {
        spans
            .iter()
            .filter(|span| !matches!(span, Span::Deleted(_)))
            .map(|span| span.text())
            .collect()
    }

    #[test]
    fn test_token_diff_reconstructs_both_sides() -> Result<(), IddiffError> {
        let left = "The quick brown fox jumps over the lazy dog";
        let right = "The quick red fox leaps over the dog";

        let spans = TokenDiff.diff(left, right)?;

        assert_eq!(reconstruct_left(&spans), left);
        assert_eq!(reconstruct_right(&spans), right);
        assert!(spans.iter().any(|span| matches!(span, Span::Deleted(_))));
        assert!(spans.iter().any(|span| matches!(span, Span::Inserted(_))));
        Ok(())
    }

    #[test]
    fn test_token_diff_identical_input() -> Result<(), IddiffError> {
        let spans = TokenDiff.diff("same words here", "same words here")?;

        assert_eq!(spans.len(), 1);
        assert!(matches!(spans[0], Span::Unchanged(_)));
        Ok(())
    }

    #[test]
    fn test_token_diff_empty_sides() -> Result<(), IddiffError> {
        let spans = TokenDiff.diff("", "added text")?;
        assert_eq!(reconstruct_right(&spans), "added text");
        assert_eq!(reconstruct_left(&spans), "");

        let spans = TokenDiff.diff("removed text", "")?;
        assert_eq!(reconstruct_left(&spans), "removed text");
        Ok(())
    }

    #[test]
    fn test_parse_marked_stream() -> Result<(), IddiffError> {
        let spans = parse_marked_stream("same [-old-] {+new+} tail");

        assert_eq!(
            spans,
            vec![
                Span::Unchanged("same ".to_string()),
                Span::Deleted("old".to_string()),
                Span::Unchanged(" ".to_string()),
                Span::Inserted("new".to_string()),
                Span::Unchanged(" tail".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_marked_stream_unterminated_marker() -> Result<(), IddiffError> {
        let spans = parse_marked_stream("head [-dangling");

        assert_eq!(
            spans,
            vec![
                Span::Unchanged("head ".to_string()),
                Span::Deleted("dangling".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_missing_binary_is_recoverable() -> Result<(), IddiffError> {
        let external = ExternalWdiff::new("definitely-not-a-wdiff-binary");

        assert!(!external.is_available());
        match external.diff("a", "b") {
            Err(IddiffError::WordDiffUnavailable(_)) => Ok(()),
            other => panic!("expected WordDiffUnavailable, got {other:?}"),
        }
    }
}
