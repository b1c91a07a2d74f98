/*! Corpus reading utilities

Readers implement [Iterator], yielding groups of rows as they are cut by the structural markers (`# document`, `# segment`) of the file.

- [SentenceReader]: groups are (approximately) sentences.
- [FragmentReader]: groups are document fragments of a minimum length.
- [DocumentReader]: yields documents, each one being a list of fragments.
!*/
mod fragments;
mod lines;
mod sentences;

pub use fragments::{DocumentReader, FragmentReader, MIN_FRAGMENT_LENGTH};
pub use lines::{parse_header, DOCUMENT_MARKER, SEGMENT_MARKER};
pub use sentences::SentenceReader;
