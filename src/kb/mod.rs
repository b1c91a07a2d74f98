/*! Knowledge-base lookups

Resolution of entity mentions against a Wikidata-derived Elasticsearch index.

Index entries hold a label (analyzed in several ways: `label.snowball`, `label.precise`, `label.ngram`, `label.raw`),
a Wikidata identifier (`label_exact`) and a popularity `count`.

```no_run
use hipe_nel::kb::{ElasticClient, KnowledgeBase};

let kb = KnowledgeBase::new(ElasticClient::new("http://localhost:9200").unwrap());
println!("{}", kb.resolve("Lausanne").unwrap()); // e.g. Q807|NIL|Q669525
```
!*/
mod client;
pub mod query;
mod resolve;

pub use client::{ElasticClient, Entry, Hit, SearchClient, DEFAULT_URL};
pub use resolve::{
    rank, Candidate, KnowledgeBase, Resolution, DEFAULT_DESCRIPTIONS_INDEX, DEFAULT_INDEX,
    MAX_CANDIDATES, NIL,
};
