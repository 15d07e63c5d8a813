//! # tagsplit
//!
//! Converts a CoNLL-X style treebank into word/tag train and test files for tagger training.
//!
//! The corpus is read line by line: lines starting with `<` delimit sentences, other lines are tab separated records
//! whose second and fifth columns hold the surface form and the tag. Sentences go to the train file until a
//! threshold (in words or sentences) is crossed, then to the test file.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use tagsplit::io::writer::OutputFormat;
//! use tagsplit::processing::{Batch, SplitBasis};
//!
//! let batch = Batch::new(
//!     PathBuf::from("ftb3.1.conllx"),
//!     PathBuf::from("."),
//!     OutputFormat::Pairs,
//!     SplitBasis::Sentences,
//!     vec![1, 2],
//! );
//! let report = batch.run().unwrap();
//! println!("{} runs", report.runs.len());
//! ```
pub mod error;
pub mod io;
pub mod processing;
pub mod types;
