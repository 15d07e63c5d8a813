//! This module deals with checking transformed files before they are fed to a tagger.
//!
//! It loads sentences back, counts words and sentences and builds a tag frequency table.

use std::{collections::HashMap, path::Path};

use itertools::Itertools;
use log::{debug, info};
use serde::Serialize;

use crate::{error::Error, io::reader::TaggedReader, io::writer::OutputFormat, types::Token};

/// Progress is logged every `LOG_EVERY` sentences.
const LOG_EVERY: u64 = 50_000;

/// Tag counter. Holds tag counts and the total number of words and sentences.
#[derive(Debug, Default)]
pub struct TagStats {
    counts: HashMap<String, u64>,
    nb_words: u64,
    nb_sentences: u64,
}

/// A serializable entry composed of tag, count and frequency (count/total words).
#[derive(Debug, Serialize, PartialEq)]
pub struct TagEntry {
    tag: String,
    count: u64,
    frequency: f64,
}

impl TagEntry {
    pub fn new(tag: &str, count: u64, nb_words: u64) -> Self {
        Self {
            tag: tag.to_string(),
            count,
            frequency: count as f64 / nb_words as f64,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl TagStats {
    #[inline]
    fn add_in_counts(&mut self, tag: &str) {
        match self.counts.get_mut(tag) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(tag.to_string(), 1);
            }
        }
        self.nb_words += 1;
    }

    /// Add the tokens of a sentence.
    pub fn add_sentence(&mut self, sentence: &[Token]) {
        sentence.iter().for_each(|t| self.add_in_counts(t.tag()));
        self.nb_sentences += 1;
        if self.nb_sentences % LOG_EVERY == 0 {
            debug!("processed sentences: {}", self.nb_sentences);
        }
    }

    pub fn nb_words(&self) -> u64 {
        self.nb_words
    }

    pub fn nb_sentences(&self) -> u64 {
        self.nb_sentences
    }

    /// Tags by decreasing count, ties sorted by tag.
    pub fn entries(&self) -> Vec<TagEntry> {
        self.counts
            .iter()
            .sorted_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
            .map(|(tag, count)| TagEntry::new(tag, *count, self.nb_words))
            .collect()
    }
}

/// Load a transformed file located at `src`, optionally writing the tag table as csv at `dst`.
pub fn stats(src: &Path, format: OutputFormat, dst: Option<&Path>) -> Result<TagStats, Error> {
    info!("loading {:?} ({})", src, format);
    let mut tag_stats = TagStats::default();

    for sentence in TaggedReader::from_path(src, format)? {
        tag_stats.add_sentence(&sentence?);
    }

    if let Some(dst) = dst {
        let mut out = csv::WriterBuilder::new().from_path(dst)?;
        for entry in tag_stats.entries() {
            out.serialize(entry)?;
        }
        out.flush()?;
    }

    println!("words:{}", tag_stats.nb_words());
    println!("sentences:{}", tag_stats.nb_sentences());
    println!(
        "tags:{}",
        tag_stats
            .entries()
            .iter()
            .map(|e| format!("{}={}", e.tag(), e.count()))
            .join(" ")
    );
    Ok(tag_stats)
}
