/*!
# IO utilities

Reading and writing of tab-separated, CoNLL-style corpus files.

```text
TOKEN	NE-COARSE-LIT	MISC
# document_id = NZZ-1798-01-13-a-p0001
# segment_iiif_link = _
Zurich	B-LOC	NoSpaceAfter
,	O	_
```
!*/
pub mod reader;
pub mod writer;

pub use reader::{DocumentReader, FragmentReader, SentenceReader};
pub use writer::{write_documents, write_groups, CorpusWriter};
