use std::fmt;

use serde::{Deserialize, Serialize};

use super::Token;

/// Lines starting with this character are markup and delimit sentences.
pub const MARKUP_PREFIX: char = '<';

/// Minimal number of tab separated fields of a well formed record.
pub const MIN_FIELDS: usize = 5;

/// A record that could not be read, with its 0-based line index.
///
/// Displayed as `<index>::<raw>`, which is also the error file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedRecord {
    index: u64,
    raw: String,
}

impl MalformedRecord {
    pub fn new(index: u64, raw: impl Into<String>) -> Self {
        Self {
            index,
            raw: raw.into(),
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.index, self.raw)
    }
}

/// Outcome of reading a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    Markup,
    Record(Token),
    Malformed(MalformedRecord),
}

impl InputLine {
    /// Classify `line` (without its line terminator).
    pub fn parse(index: u64, line: &str) -> Self {
        if line.starts_with(MARKUP_PREFIX) {
            return Self::Markup;
        }

        match Token::from_conllx(line) {
            Ok(token) => Self::Record(token),
            Err(nb_fields) => {
                log::debug!(
                    "line {}: {} fields, expected at least {}",
                    index,
                    nb_fields,
                    MIN_FIELDS
                );
                Self::Malformed(MalformedRecord::new(index, line))
            }
        }
    }
}
