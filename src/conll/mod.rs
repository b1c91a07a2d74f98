/*! CoNLL-style token data

Rows are kept verbatim (every column of the source file) and grouped in [TokenGroup]s, each one being a sentence or a document fragment.
Processing happens on groups:

- [merge_split_spans] joins groups whose boundary splits an entity span,
- [add_beginnings] fixes `I` tags that start a span,
- [reconstruct] rebuilds the surface text,
- [extract_mentions] extracts tagged spans.
!*/
mod merge;
mod mentions;
mod row;
mod sentence;
pub mod tags;

pub use merge::merge_split_spans;
pub use mentions::{extract_mentions, Mention};
pub use row::{Header, TokenGroup, TokenRow};
pub use sentence::{reconstruct, CONTINUATION_MARKERS, NO_SPACE_AFTER};
pub use tags::add_beginnings;
