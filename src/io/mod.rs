/*!
# IO utilities

Reading of annotated corpora and transformed tagger files, writing of train/test splits.
!*/
pub mod reader;
pub mod writer;
