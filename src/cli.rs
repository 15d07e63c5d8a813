//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;
use tagsplit::{io::writer::OutputFormat, processing::SplitBasis};

#[derive(Debug, StructOpt)]
#[structopt(name = "tagsplit", about = "treebank to tagger corpus conversion.")]
/// Holds every command that is callable by the `tagsplit` command.
pub enum Tagsplit {
    #[structopt(about = "Split into `word tag` per line files (targets in millions)")]
    Pairs(Split),
    #[structopt(about = "Split into `word_tag` sentence per line files (targets in hundred thousands)")]
    Inline(Split),
    #[structopt(about = "Count words, sentences and tags of a transformed file")]
    Stats(Stats),
}

#[derive(Debug, StructOpt)]
/// Split command and parameters.
///
/// ```sh
/// tagsplit-pairs 0.1.0
/// Split into `word tag` per line files (targets in millions)
///
/// USAGE:
///     tagsplit pairs [OPTIONS]
///
/// OPTIONS:
///         --basis <basis>          counter compared to the target (words or sentences) [default: sentences]
///         --dst <dst>              destination folder [default: .]
///         --src <src>              source corpus [default: ftb3.1.conllx]
///         --summary <summary>      write a json summary of all runs
///         --targets <targets>...   split targets, comma separated
/// ```
pub struct Split {
    #[structopt(
        parse(from_os_str),
        long = "src",
        help = "source corpus",
        default_value = "ftb3.1.conllx"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "destination folder",
        default_value = "."
    )]
    pub dst: PathBuf,
    #[structopt(
        long = "basis",
        help = "counter compared to the target (words or sentences)",
        default_value = "sentences"
    )]
    pub basis: SplitBasis,
    #[structopt(
        long = "targets",
        help = "split targets, comma separated. Defaults to 1-5 (pairs) or 1-9 (inline)",
        use_delimiter = true
    )]
    pub targets: Vec<u64>,
    #[structopt(
        parse(from_os_str),
        long = "summary",
        help = "write a json summary of all runs"
    )]
    pub summary: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Stats {
    #[structopt(parse(from_os_str), help = "transformed file")]
    pub src: PathBuf,
    #[structopt(
        short = "f",
        long = "format",
        help = "layout of the file (pairs or inline)",
        default_value = "pairs"
    )]
    pub format: OutputFormat,
    #[structopt(parse(from_os_str), long = "csv", help = "write tag counts as csv")]
    pub csv: Option<PathBuf>,
}
