use serde::{Deserialize, Serialize};

/// One line of a tokenized document. `number` is the 1-based ordinal of the
/// line in the original text, before any boilerplate stripping. A collapsed
/// whitespace run is represented by a single Line whose `width` records how
/// many original lines it stands for.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
    pub width: usize,
}

impl Line {
    pub fn new(number: usize, text: impl Into<String>) -> Line {
        Line {
            number,
            text: text.into(),
            width: 1,
        }
    }

    pub fn collapsed(number: usize, width: usize) -> Line {
        Line {
            number,
            text: String::new(),
            width,
        }
    }
}

/// The ordered lines of one side of the comparison. Built once by the
/// tokenizer and read-only afterwards.
#[derive(Default, Deserialize, Serialize, Debug, Clone)]
pub struct LineSequence {
    pub lines: Vec<Line>,
}

impl LineSequence {
    pub fn new(lines: Vec<Line>) -> LineSequence {
        LineSequence { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn text(&self, index: usize) -> &str {
        &self.lines[index].text
    }

    /// The post-tokenization document as a single block of text.
    pub fn joined(&self) -> String {
        let texts: Vec<&str> = self.lines.iter().map(|line| line.text.as_str()).collect();
        texts.join("\n")
    }
}
