/*! Corpus reading utilities

- [ConllxReader] reads tab separated annotated corpora, one classified line at a time.
- [TaggedReader] reads transformed word/tag files back, one sentence at a time.

!*/
mod conllx;
mod tagged;

pub use conllx::ConllxReader;
pub use tagged::TaggedReader;
