//! Run summaries.
use std::collections::BTreeSet;

use itertools::Itertools;
use serde::Serialize;

use super::Threshold;
use crate::types::MalformedRecord;

/// Counters and findings of a single splitting pass.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub label: String,
    pub threshold: Threshold,
    pub lines: u64,
    pub words: u64,
    pub sentences: u64,
    pub train_sentences: u64,
    pub test_sentences: u64,
    pub errors: Vec<MalformedRecord>,
    pub unique_tags: BTreeSet<String>,
}

impl RunReport {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            label: String::new(),
            threshold,
            lines: 0,
            words: 0,
            sentences: 0,
            train_sentences: 0,
            test_sentences: 0,
            errors: Vec::new(),
            unique_tags: BTreeSet::new(),
        }
    }

    /// Sorted unique tags.
    pub fn tags(&self) -> Vec<&str> {
        self.unique_tags.iter().map(String::as_str).collect()
    }

    /// Console summary, one `key:value` per line.
    pub fn summary(&self) -> String {
        format!(
            "{} done.\nwords:{}\nsentences:{}\ntrain set:{}\ntest set:{}",
            self.label, self.words, self.sentences, self.train_sentences, self.test_sentences
        )
    }
}

/// Reports of every run of a [super::Batch], with errors and tags accumulated over all of them.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub runs: Vec<RunReport>,
    pub errors: Vec<MalformedRecord>,
    pub unique_tags: BTreeSet<String>,
}

impl BatchReport {
    pub fn push(&mut self, run: RunReport) {
        self.errors.extend(run.errors.iter().cloned());
        self.unique_tags.extend(run.unique_tags.iter().cloned());
        self.runs.push(run);
    }

    pub fn tags_summary(&self) -> String {
        format!(
            "unique tags:[{}]",
            self.unique_tags.iter().map(|t| format!("'{}'", t)).join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::SplitBasis;

    fn run(tags: &[&str], errors: &[u64]) -> RunReport {
        let mut r = RunReport::new(Threshold::new(SplitBasis::Sentences, 10));
        r.unique_tags = tags.iter().map(|t| t.to_string()).collect();
        r.errors = errors
            .iter()
            .map(|i| MalformedRecord::new(*i, "x"))
            .collect();
        r
    }

    #[test]
    fn accumulates_across_runs() {
        let mut b = BatchReport::default();
        b.push(run(&["V", "N"], &[3]));
        b.push(run(&["N", "A"], &[3, 8]));

        assert_eq!(b.runs.len(), 2);
        assert_eq!(b.errors.len(), 3);
        assert_eq!(b.tags_summary(), "unique tags:['A', 'N', 'V']");
    }

    #[test]
    fn json_summary() {
        let mut b = BatchReport::default();
        let mut r = run(&["N"], &[4]);
        r.label = "1x100k".to_string();
        r.words = 7;
        r.sentences = 2;
        r.train_sentences = 2;
        b.push(r);

        let v = serde_json::to_value(&b).unwrap();
        let first = &v["runs"][0];
        assert_eq!(first["label"], "1x100k");
        assert_eq!(first["words"], 7);
        assert_eq!(first["train_sentences"], 2);
        assert_eq!(first["threshold"]["basis"], "sentences");
        assert_eq!(first["threshold"]["limit"], 10);
        assert_eq!(v["errors"][0]["index"], 4);
        assert_eq!(v["errors"][0]["raw"], "x");
        assert_eq!(v["unique_tags"], serde_json::json!(["N"]));
    }

    #[test]
    fn summary() {
        let mut r = run(&[], &[]);
        r.label = "2M".to_string();
        r.words = 10;
        r.sentences = 3;
        r.train_sentences = 2;
        r.test_sentences = 1;
        assert_eq!(
            r.summary(),
            "2M done.\nwords:10\nsentences:3\ntrain set:2\ntest set:1"
        );
    }
}
