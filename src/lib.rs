/*! # hipe-nel

Utilities for CoNLL-style NER corpora (segmentation, tag fixing, text reconstruction, mention extraction)
and entity linking against a Wikidata-derived Elasticsearch index.

```no_run
use hipe_nel::config::SegmenterConfig;
use hipe_nel::conll::merge_split_spans;
use hipe_nel::io::SentenceReader;

let reader = SentenceReader::from_path("corpus.tsv".as_ref(), SegmenterConfig::default(), "TOKEN").unwrap();
let groups = reader.collect::<Result<Vec<_>, _>>().unwrap();
for group in merge_split_spans(groups, "NE-COARSE-LIT").unwrap() {
    let group = group.with_beginnings("NE-COARSE-LIT").unwrap();
    println!("{}", group.sentence("TOKEN", "MISC").unwrap());
    println!("{:?}", group.mentions("TOKEN", "NE-COARSE-LIT").unwrap());
}
```
!*/
pub mod config;
pub mod conll;
pub mod error;
pub mod io;
pub mod kb;
pub mod pipeline;
