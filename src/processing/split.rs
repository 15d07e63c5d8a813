/*! splitting

Single pass train/test splitting of an annotated corpus.

Sentences are delimited by markup lines (see [crate::types::MARKUP_PREFIX]) and are routed to the train output
until a [Threshold] is crossed, then to the test output.
!*/
use std::{
    fmt,
    io::{Read, Write},
    str::FromStr,
};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    io::{
        reader::ConllxReader,
        writer::{OutputFormat, Side, SplitWriter},
    },
    types::{InputLine, Token},
};

use super::RunReport;

/// Counter the split threshold is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitBasis {
    Words,
    Sentences,
}

impl fmt::Display for SplitBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitBasis::Words => write!(f, "words"),
            SplitBasis::Sentences => write!(f, "sentences"),
        }
    }
}

impl FromStr for SplitBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "words" => Ok(SplitBasis::Words),
            "sentences" => Ok(SplitBasis::Sentences),
            other => Err(format!(
                "unknown split basis {:?} (expected words or sentences)",
                other
            )),
        }
    }
}

/// Switch to test output once the [SplitBasis] counter is strictly above `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    basis: SplitBasis,
    limit: u64,
}

impl Threshold {
    pub fn new(basis: SplitBasis, limit: u64) -> Self {
        Self { basis, limit }
    }

    pub fn basis(&self) -> SplitBasis {
        self.basis
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    fn crossed(&self, words: u64, sentences: u64) -> bool {
        match self.basis {
            SplitBasis::Words => words > self.limit,
            SplitBasis::Sentences => sentences > self.limit,
        }
    }
}

/// Mutable state of a single pass.
struct SplitState {
    training: bool,
    /// set at a boundary, cleared by the first line of a sentence.
    just_flushed: bool,
    sentence: Vec<Token>,
    report: RunReport,
}

impl SplitState {
    fn new(threshold: Threshold) -> Self {
        Self {
            training: true,
            just_flushed: true,
            sentence: Vec::new(),
            report: RunReport::new(threshold),
        }
    }
}

/// Splits an annotated corpus into train and test outputs.
#[derive(Debug, Clone, Copy)]
pub struct Splitter {
    format: OutputFormat,
    threshold: Threshold,
}

impl Splitter {
    pub fn new(format: OutputFormat, threshold: Threshold) -> Self {
        Self { format, threshold }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Run a full pass over `reader`.
    ///
    /// Malformed records are written to the error sink of `writer` and kept in the returned report.
    /// IO errors abort the pass.
    pub fn run<T: Read, W: Write>(
        &self,
        reader: ConllxReader<T>,
        writer: &mut SplitWriter<W>,
    ) -> Result<RunReport, Error> {
        info!(
            "splitting {:?} ({}, {} > {})",
            reader.path(),
            self.format,
            self.threshold.basis,
            self.threshold.limit
        );
        let mut state = SplitState::new(self.threshold);

        for line in reader {
            let (index, line) = line?;
            match line {
                InputLine::Markup => {
                    if !state.just_flushed {
                        self.close_sentence(&mut state, writer)?;
                        state.just_flushed = true;
                    }
                    state.sentence.clear();
                }
                InputLine::Record(token) => {
                    state.just_flushed = false;
                    state.report.words += 1;
                    if !state.report.unique_tags.contains(token.tag()) {
                        state.report.unique_tags.insert(token.tag().to_string());
                    }
                    state.sentence.push(token);
                }
                InputLine::Malformed(record) => {
                    state.just_flushed = false;
                    state.report.words += 1;
                    warn!("malformed record at line {}", index);
                    writer.write_error(&record)?;
                    state.report.errors.push(record);
                }
            }
            state.report.lines += 1;

            if state.training
                && self
                    .threshold
                    .crossed(state.report.words, state.report.sentences)
            {
                debug!(
                    "threshold crossed at line {} ({} words, {} sentences)",
                    index, state.report.words, state.report.sentences
                );
                state.training = false;
                writer.switch_to_test();
            }
        }

        // end of input closes the sentence like a markup line
        if !state.just_flushed {
            debug!("closing unterminated last sentence");
            self.close_sentence(&mut state, writer)?;
        }

        Ok(state.report)
    }

    fn close_sentence<W: Write>(
        &self,
        state: &mut SplitState,
        writer: &mut SplitWriter<W>,
    ) -> Result<(), Error> {
        match writer.write_sentence(self.format, &state.sentence)? {
            Side::Train => state.report.train_sentences += 1,
            Side::Test => state.report.test_sentences += 1,
        }
        state.report.sentences += 1;
        state.sentence.clear();
        Ok(())
    }
}
