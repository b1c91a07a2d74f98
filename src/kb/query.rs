//! Search query bodies.
use serde_json::{json, Value};

/// Fields searched by full-text queries.
pub const PHRASE_FIELDS: [&str; 3] = ["label.snowball", "label.precise", "label.ngram"];

/// Fields searched by fuzzy queries.
pub const FUZZY_FIELDS: [&str; 2] = ["label.snowball", "label.precise"];

/// Unanalyzed label field, holding lower-cased labels.
pub const RAW_FIELD: &str = "label.raw";

/// Identifier field.
pub const ID_FIELD: &str = "label_exact";

/// Restricts results to entries whose identifier looks like a Wikidata one (`Q*`).
fn id_filter() -> Value {
    json!({ "wildcard": { ID_FIELD: "Q*" } })
}

/// Multi-match of `query` on `fields`.
pub fn multi_match(query: &str, fields: &[&str]) -> Value {
    json!({
        "query": {
            "multi_match": {
                "query": query,
                "fields": fields,
            }
        }
    })
}

/// Lookup of an identifier.
pub fn by_id(id: &str) -> Value {
    multi_match(id, &[ID_FIELD])
}

/// Fuzzy matching on labels, tolerating OCR mistakes.
pub fn fuzzy(term: &str) -> Value {
    json!({
        "query": {
            "bool": {
                "must": {
                    "multi_match": {
                        "query": term,
                        "fields": FUZZY_FIELDS,
                        "fuzziness": "AUTO",
                    }
                },
                "filter": id_filter(),
            }
        }
    })
}

/// Exact (lower-cased) label match, most popular entries first.
pub fn precise(term: &str) -> Value {
    json!({
        "query": {
            "bool": {
                "must": {
                    "term": { RAW_FIELD: term.to_lowercase() }
                },
                "filter": id_filter(),
            }
        },
        "sort": [
            { "count": { "order": "desc" } }
        ]
    })
}

/// Full-text phrase search on labels.
pub fn phrase(term: &str) -> Value {
    json!({
        "query": {
            "bool": {
                "must": {
                    "multi_match": {
                        "query": term,
                        "fields": PHRASE_FIELDS,
                        "type": "phrase",
                    }
                },
                "filter": id_filter(),
            }
        }
    })
}
