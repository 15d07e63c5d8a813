//! Train/test/error sinks of a single run.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, info};
use serde::Serialize;

use super::OutputFormat;
use crate::{
    error::Error,
    types::{MalformedRecord, Token},
};

/// Destination of emitted sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Train,
    Test,
}

/// Routes sentences to the train sink until [SplitWriter::switch_to_test] is called, then to the test sink.
///
/// The switch is one-way.
pub struct SplitWriter<W: Write> {
    train: W,
    test: W,
    errors: W,
    side: Side,
}

impl SplitWriter<BufWriter<File>> {
    /// Create (or truncate) the three files of a run.
    pub fn create(train: &Path, test: &Path, errors: &Path) -> Result<Self, Error> {
        debug!("creating {:?}, {:?} and {:?}", train, test, errors);
        Ok(Self::new(
            BufWriter::new(File::create(train)?),
            BufWriter::new(File::create(test)?),
            BufWriter::new(File::create(errors)?),
        ))
    }
}

impl<W: Write> SplitWriter<W> {
    pub fn new(train: W, test: W, errors: W) -> Self {
        Self {
            train,
            test,
            errors,
            side: Side::Train,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn switch_to_test(&mut self) {
        if self.side == Side::Train {
            info!("switching to test output");
            self.side = Side::Test;
        }
    }

    /// Write a sentence on the active side, returning that side.
    pub fn write_sentence(&mut self, format: OutputFormat, tokens: &[Token]) -> Result<Side, Error> {
        let out = match self.side {
            Side::Train => &mut self.train,
            Side::Test => &mut self.test,
        };
        format.write_sentence(out, tokens)?;
        Ok(self.side)
    }

    pub fn write_error(&mut self, record: &MalformedRecord) -> Result<(), Error> {
        writeln!(self.errors, "{}", record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.train.flush()?;
        self.test.flush()?;
        self.errors.flush()?;
        Ok(())
    }

    /// Get back the train, test and error sinks.
    pub fn into_inner(self) -> (W, W, W) {
        (self.train, self.test, self.errors)
    }
}
