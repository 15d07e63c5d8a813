//! Output shapes of transformed files and their naming.
use std::{fmt, io::Write, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::types::Token;

/// Layout of the transformed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `word tag` per line, blank line after each sentence.
    Pairs,
    /// One sentence per line, `word_tag` tokens separated by a single space.
    Inline,
}

impl OutputFormat {
    /// Write a whole sentence, terminator included.
    pub fn write_sentence<W: Write>(&self, out: &mut W, tokens: &[Token]) -> std::io::Result<()> {
        match self {
            OutputFormat::Pairs => {
                for token in tokens {
                    writeln!(out, "{} {}", token.surface(), token.tag())?;
                }
                writeln!(out)
            }
            OutputFormat::Inline => writeln!(
                out,
                "{}",
                tokens
                    .iter()
                    .format_with(" ", |t, f| f(&format_args!("{}_{}", t.surface(), t.tag())))
            ),
        }
    }

    /// Scale of a split target (a target of 3 means `3 * unit`).
    pub fn unit(&self) -> u64 {
        match self {
            OutputFormat::Pairs => 1_000_000,
            OutputFormat::Inline => 100_000,
        }
    }

    pub fn default_targets(&self) -> Vec<u64> {
        match self {
            OutputFormat::Pairs => (1..=5).collect(),
            OutputFormat::Inline => (1..=9).collect(),
        }
    }

    /// Human readable target, eg. `3M` or `3x100k`.
    pub fn label(&self, target: u64) -> String {
        match self {
            OutputFormat::Pairs => format!("{}M", target),
            OutputFormat::Inline => format!("{}x100k", target),
        }
    }

    pub fn train_filename(&self, target: u64) -> String {
        match self {
            OutputFormat::Pairs => format!("transformed_train_{}M.conllx", target),
            OutputFormat::Inline => format!("onlp_transformed_train_{}x100k.conllx", target),
        }
    }

    // no trailing `k` on inline test files.
    pub fn test_filename(&self, target: u64) -> String {
        match self {
            OutputFormat::Pairs => format!("transformed_test_{}M.conllx", target),
            OutputFormat::Inline => format!("onlp_transformed_test_{}x100.conllx", target),
        }
    }

    pub fn errors_filename(&self) -> &'static str {
        match self {
            OutputFormat::Pairs => "errors.txt",
            OutputFormat::Inline => "onlp_errors.txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pairs => write!(f, "pairs"),
            OutputFormat::Inline => write!(f, "inline"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pairs" => Ok(OutputFormat::Pairs),
            "inline" => Ok(OutputFormat::Inline),
            other => Err(format!("unknown format {:?} (expected pairs or inline)", other)),
        }
    }
}
