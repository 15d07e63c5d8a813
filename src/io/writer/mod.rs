/*!
# Train/test split writing

[SplitWriter] holds the train, test and error sinks of a single run and routes sentences to the active one.
Sentences are rendered following an [OutputFormat].
!*/
mod format;
mod split_writer;

pub use format::OutputFormat;
pub use split_writer::{Side, SplitWriter};
