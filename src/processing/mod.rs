/*! Corpus processing

Train/test splitting of annotated corpora ([split], driven by [batch]) and statistics on transformed files ([stats]).
!*/
pub mod batch;
pub mod report;
pub mod split;
pub mod stats;

pub use batch::Batch;
pub use report::{BatchReport, RunReport};
pub use split::{SplitBasis, Splitter, Threshold};
