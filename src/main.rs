//! # tagsplit
//!
//! ```sh
//! tagsplit 0.1.0
//! treebank to tagger corpus conversion.
//!
//! USAGE:
//!     tagsplit <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     help      Prints this message or the help of the given subcommand(s)
//!     inline    Split into `word_tag` sentence per line files (targets in hundred thousands)
//!     pairs     Split into `word tag` per line files (targets in millions)
//!     stats     Count words, sentences and tags of a transformed file
//! ```
//!
//! Logging is controlled by `RUST_LOG`.
use std::fs::File;

use structopt::StructOpt;
use tagsplit::{
    error::Error,
    io::writer::OutputFormat,
    processing::{stats::stats, Batch},
};

#[macro_use]
extern crate log;

mod cli;

fn split(s: cli::Split, format: OutputFormat) -> Result<(), Error> {
    let batch = Batch::new(s.src, s.dst, format, s.basis, s.targets);
    let report = batch.run()?;

    if let Some(path) = s.summary {
        info!("writing summary to {:?}", path);
        serde_json::to_writer_pretty(File::create(path)?, &report)?;
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Tagsplit::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Tagsplit::Pairs(s) => split(s, OutputFormat::Pairs)?,
        cli::Tagsplit::Inline(s) => split(s, OutputFormat::Inline)?,
        cli::Tagsplit::Stats(s) => {
            stats(&s.src, s.format, s.csv.as_deref())?;
        }
    };
    Ok(())
}
