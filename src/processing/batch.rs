/*! Batch splitting

Runs a [Splitter] once per split target, each run re-reading the whole input and writing its own train/test files.
Errors and unique tags are accumulated in the returned [BatchReport].
!*/
use std::path::{Path, PathBuf};

use log::info;

use super::{BatchReport, RunReport, SplitBasis, Splitter, Threshold};
use crate::{
    error::Error,
    io::{
        reader::ConllxReader,
        writer::{OutputFormat, SplitWriter},
    },
};

/// Default input corpus.
pub const DEFAULT_SRC: &str = "ftb3.1.conllx";

/// Files involved in a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub train: PathBuf,
    pub test: PathBuf,
    pub errors: PathBuf,
}

impl RunPaths {
    pub fn new(dst: &Path, format: OutputFormat, target: u64) -> Self {
        Self {
            train: dst.join(format.train_filename(target)),
            test: dst.join(format.test_filename(target)),
            errors: dst.join(format.errors_filename()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Batch {
    src: PathBuf,
    dst: PathBuf,
    format: OutputFormat,
    basis: SplitBasis,
    targets: Vec<u64>,
}

impl Batch {
    /// Create a new batch. An empty `targets` falls back to [OutputFormat::default_targets].
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        format: OutputFormat,
        basis: SplitBasis,
        targets: Vec<u64>,
    ) -> Self {
        let targets = if targets.is_empty() {
            format.default_targets()
        } else {
            targets
        };

        Self {
            src,
            dst,
            format,
            basis,
            targets,
        }
    }

    pub fn targets(&self) -> &[u64] {
        &self.targets
    }

    /// Run every target in order, printing a summary after each run.
    pub fn run(&self) -> Result<BatchReport, Error> {
        if !self.dst.is_dir() {
            return Err(Error::Custom(format!(
                "destination {:?} is not a directory",
                self.dst
            )));
        }

        let mut report = BatchReport::default();
        for &target in &self.targets {
            let run = self.run_target(target)?;

            println!("{}", run.summary());
            report.push(run);
            if self.format == OutputFormat::Inline {
                println!("{}", report.tags_summary());
            }
        }

        info!(
            "{} runs done, {} malformed records",
            report.runs.len(),
            report.errors.len()
        );
        Ok(report)
    }

    fn run_target(&self, target: u64) -> Result<RunReport, Error> {
        let limit = target.checked_mul(self.format.unit()).ok_or_else(|| {
            Error::Custom(format!(
                "target {} overflows the {} threshold",
                target,
                self.format.label(target)
            ))
        })?;

        let label = self.format.label(target);
        println!("starting to process {}", label);

        let paths = RunPaths::new(&self.dst, self.format, target);
        let threshold = Threshold::new(self.basis, limit);

        let reader = ConllxReader::from_path(&self.src)?;
        let mut writer = SplitWriter::create(&paths.train, &paths.test, &paths.errors)?;

        let mut run = Splitter::new(self.format, threshold).run(reader, &mut writer)?;
        writer.flush()?;

        run.label = label;
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets() {
        let b = Batch::new(
            PathBuf::from(DEFAULT_SRC),
            PathBuf::from("."),
            OutputFormat::Inline,
            SplitBasis::Sentences,
            vec![],
        );
        assert_eq!(b.targets(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let b = Batch::new(
            PathBuf::from(DEFAULT_SRC),
            PathBuf::from("."),
            OutputFormat::Pairs,
            SplitBasis::Sentences,
            vec![3],
        );
        assert_eq!(b.targets(), &[3]);
    }

    #[test]
    fn paths() {
        let p = RunPaths::new(Path::new("out"), OutputFormat::Pairs, 1);
        assert_eq!(p.train, PathBuf::from("out/transformed_train_1M.conllx"));
        assert_eq!(p.test, PathBuf::from("out/transformed_test_1M.conllx"));
        assert_eq!(p.errors, PathBuf::from("out/errors.txt"));
    }

    #[test]
    fn target_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.conllx");
        std::fs::write(&src, "<s>\n1\ta\ta\t_\tN\n<s>\n").unwrap();

        let b = Batch::new(
            src,
            dir.path().to_path_buf(),
            OutputFormat::Pairs,
            SplitBasis::Sentences,
            vec![20_000_000_000_000],
        );
        assert!(matches!(b.run(), Err(Error::Custom(_))));
        assert!(!dir.path().join("errors.txt").exists());
    }

    #[test]
    fn missing_input() {
        let dst = tempfile::tempdir().unwrap();
        let b = Batch::new(
            PathBuf::from("svdkjljlkmjlmdsfljkf.conllx"),
            dst.path().to_path_buf(),
            OutputFormat::Pairs,
            SplitBasis::Sentences,
            vec![1],
        );
        assert!(matches!(b.run(), Err(Error::Io(_))));
    }
}
