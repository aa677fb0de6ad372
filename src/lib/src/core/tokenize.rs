//! Split raw draft text into lines, dropping Internet-Draft boilerplate
//! (page footers and running headers) and optionally collapsing runs of
//! whitespace-only lines.
//!

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::{Line, LineSequence};

lazy_static! {
    /// Running headers and page footers that change between every revision
    /// of a draft and would otherwise drown the diff.
    static ref SKIPS: Vec<Regex> = vec![
        Regex::new(r"^.*\[?[Pp]age [0-9ivx]+\]?[ \t\f]*$").unwrap(),
        Regex::new(r"^ *Internet.Draft.+[12][0-9][0-9][0-9] *$").unwrap(),
        Regex::new(r"^ *INTERNET.DRAFT.+[12][0-9][0-9][0-9] *$").unwrap(),
        Regex::new(r"^ *Draft.+(  +)[12][0-9][0-9][0-9] *$").unwrap(),
        Regex::new(r"^RFC[ -]?[0-9]+.*(  +).* [12][0-9][0-9][0-9]$").unwrap(),
        Regex::new(r"^draft-[-a-z0-9_.]+.*[0-9][0-9][0-9][0-9]$").unwrap(),
    ];
}

/// Zero-width and joiner characters treated as whitespace in drafts but not
/// covered by the Unicode White_Space property.
const EXTRA_WHITESPACE: [char; 6] = [
    '\u{180E}', // mongolian vowel separator
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{2060}', // word joiner
    '\u{FEFF}', // zero width non-breaking space
];

pub fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || EXTRA_WHITESPACE.contains(&c))
}

fn is_skippable(line: &str) -> bool {
    SKIPS.iter().any(|skip| skip.is_match(line))
}

/// Tokenize one side of the comparison. Line numbers are 1-based ordinals
/// into the original text and survive boilerplate stripping. With
/// `skip_whitespace`, each maximal run of whitespace-only lines collapses
/// to a single blank representative whose `width` is the run length, so
/// runs of different lengths on the two sides still align as a Match.
pub fn tokenize(raw: &str, skip_whitespace: bool) -> LineSequence {
    let mut lines: Vec<Line> = Vec::new();
    let mut blank_run: Option<(usize, usize)> = None;

    for (idx, text) in raw.lines().enumerate() {
        let number = idx + 1;
        if skip_whitespace {
            if is_blank(text) {
                blank_run = match blank_run {
                    Some((start, width)) => Some((start, width + 1)),
                    None => Some((number, 1)),
                };
                continue;
            }
            // A non-blank line ends the run, even if the line itself is
            // boilerplate and gets dropped.
            if let Some((start, width)) = blank_run.take() {
                lines.push(Line::collapsed(start, width));
            }
            if !is_skippable(text) {
                lines.push(Line::new(number, text));
            }
        } else if !is_skippable(text) {
            lines.push(Line::new(number, text));
        }
    }

    if let Some((start, width)) = blank_run {
        lines.push(Line::collapsed(start, width));
    }

    LineSequence::new(lines)
}
