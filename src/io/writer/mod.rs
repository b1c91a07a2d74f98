/*!
# Corpus writing

Groups are written back in the tab-separated format they were read from, header first.
!*/
mod tsv;

pub use tsv::{write_documents, write_groups, CorpusWriter, GROUP_SEPARATOR};
