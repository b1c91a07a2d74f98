//! Entity resolution against a Wikidata-derived index.
use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use log::debug;

use super::client::{Hit, SearchClient};
use super::query;
use crate::error::Error;

/// Placeholder for "no linkable entity".
pub const NIL: &str = "NIL";

/// Candidate separator in [Resolution]'s string form.
pub const SEPARATOR: &str = "|";

/// Default number of candidates.
pub const MAX_CANDIDATES: usize = 5;

pub const DEFAULT_INDEX: &str = "wikidata_clef";
pub const DEFAULT_DESCRIPTIONS_INDEX: &str = "wikidata_descriptions";

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Entity(String),
    Nil,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Entity(id) => write!(f, "{}", id),
            Candidate::Nil => write!(f, "{}", NIL),
        }
    }
}

/// Ranked candidates for a mention.
///
/// Displays as `|`-separated candidates, or `NIL` if there are none.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution(Vec<Candidate>);

impl Resolution {
    pub fn candidates(&self) -> &[Candidate] {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "{}", NIL)
        } else {
            write!(f, "{}", self.0.iter().join(SEPARATOR))
        }
    }
}

/// Full-text ordering: higher score, then shorter identifier, then higher popularity.
fn by_relevance(a: &Hit, b: &Hit) -> Ordering {
    b.score()
        .total_cmp(&a.score())
        .then_with(|| a.id().len().cmp(&b.id().len()))
        .then_with(|| b.count().cmp(&a.count()))
}

/// Merge exact and full-text hits into at most `max` candidates.
///
/// Exact hits come first, in their order. If they do not fill every slot, a [Candidate::Nil] follows,
/// then full-text hits by relevance (see [by_relevance]), skipping already selected identifiers.
/// No hits at all gives an empty (`NIL`) resolution.
pub fn rank(exact: &[Hit], full_text: &[Hit], max: usize) -> Resolution {
    if exact.is_empty() && full_text.is_empty() {
        return Resolution::default();
    }

    let mut res: Vec<Candidate> = exact
        .iter()
        .take(max)
        .map(|hit| Candidate::Entity(hit.id().to_string()))
        .collect();

    if res.len() < max {
        res.push(Candidate::Nil);
    }

    for hit in full_text.iter().sorted_by(|a, b| by_relevance(a, b)) {
        if res.len() >= max {
            break;
        }
        let candidate = Candidate::Entity(hit.id().to_string());
        if !res.contains(&candidate) {
            res.push(candidate);
        }
    }

    Resolution(res)
}

/// Lookups and resolution on a knowledge-base index.
pub struct KnowledgeBase<C> {
    client: C,
    index: String,
    descriptions_index: String,
    max_candidates: usize,
}

impl<C: SearchClient> KnowledgeBase<C> {
    /// Use default indices ([DEFAULT_INDEX], [DEFAULT_DESCRIPTIONS_INDEX]).
    pub fn new(client: C) -> Self {
        Self::with_indices(client, DEFAULT_INDEX, DEFAULT_DESCRIPTIONS_INDEX)
    }

    pub fn with_indices(client: C, index: &str, descriptions_index: &str) -> Self {
        Self {
            client,
            index: index.to_string(),
            descriptions_index: descriptions_index.to_string(),
            max_candidates: MAX_CANDIDATES,
        }
    }

    pub fn max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }

    /// Label entries of identifier `id`.
    pub fn label(&self, id: &str) -> Result<Vec<Hit>, Error> {
        self.client.search(&self.index, &query::by_id(id))
    }

    /// Description entries of identifier `id`.
    pub fn description(&self, id: &str) -> Result<Vec<Hit>, Error> {
        self.client
            .search(&self.descriptions_index, &query::by_id(id))
    }

    pub fn search_fuzzy(&self, term: &str) -> Result<Vec<Hit>, Error> {
        self.client.search(&self.index, &query::fuzzy(term))
    }

    pub fn search_precise(&self, term: &str) -> Result<Vec<Hit>, Error> {
        self.client.search(&self.index, &query::precise(term))
    }

    pub fn search_phrase(&self, term: &str) -> Result<Vec<Hit>, Error> {
        self.client.search(&self.index, &query::phrase(term))
    }

    /// Get ranked candidates for `mention`. See [rank].
    pub fn resolve(&self, mention: &str) -> Result<Resolution, Error> {
        let full_text = self.search_phrase(mention)?;
        let exact = self.search_precise(mention)?;
        debug!(
            "{:?}: {} exact hits, {} full-text hits",
            mention,
            exact.len(),
            full_text.len()
        );
        Ok(rank(&exact, &full_text, self.max_candidates))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::{json, Value};

    use super::*;
    use crate::kb::client::Entry;

    fn hit(id: &str, score: Option<f64>, count: u64) -> Hit {
        Hit {
            score,
            source: Entry {
                label_exact: id.to_string(),
                count,
                other: Default::default(),
            },
        }
    }

    fn ids(res: &Resolution) -> String {
        res.to_string()
    }

    #[test]
    fn no_hits() {
        let res = rank(&[], &[], MAX_CANDIDATES);
        assert!(res.is_nil());
        assert_eq!(ids(&res), "NIL");
    }

    #[test]
    fn exact_then_nil_then_full_text() {
        let exact = vec![hit("Q1", None, 50), hit("Q2", None, 10)];
        let full_text = vec![
            hit("Q30", Some(1.0), 0),
            hit("Q40", Some(5.0), 0),
            hit("Q50", Some(3.0), 0),
            hit("Q60", Some(0.5), 0),
        ];
        let res = rank(&exact, &full_text, MAX_CANDIDATES);
        assert_eq!(res.candidates().len(), 5);
        assert_eq!(ids(&res), "Q1|Q2|NIL|Q40|Q50");
    }

    #[test]
    fn exact_fills_every_slot() {
        let exact: Vec<Hit> = (1..=7).map(|i| hit(&format!("Q{}", i), None, 0)).collect();
        let full_text = vec![hit("Q99", Some(9.0), 0)];
        let res = rank(&exact, &full_text, MAX_CANDIDATES);
        assert_eq!(ids(&res), "Q1|Q2|Q3|Q4|Q5");
    }

    #[test]
    fn only_full_text() {
        let full_text = vec![hit("Q3", Some(1.0), 0), hit("Q4", Some(2.0), 0)];
        let res = rank(&[], &full_text, MAX_CANDIDATES);
        assert_eq!(ids(&res), "NIL|Q4|Q3");
    }

    #[test]
    fn tie_breaks() {
        let full_text = vec![
            hit("Q123", Some(2.0), 100),
            hit("Q12", Some(2.0), 1),
            hit("Q45", Some(2.0), 7),
            hit("Q9", Some(1.0), 1000),
        ];
        let res = rank(&[], &full_text, MAX_CANDIDATES);
        // same score: shorter id first, then most popular
        assert_eq!(ids(&res), "NIL|Q45|Q12|Q123|Q9");
    }

    #[test]
    fn selected_ids_skipped() {
        let exact = vec![hit("Q1", None, 0)];
        let full_text = vec![
            hit("Q1", Some(4.0), 0),
            hit("Q2", Some(3.0), 0),
            hit("Q2", Some(2.0), 0),
            hit("Q3", Some(1.0), 0),
        ];
        let res = rank(&exact, &full_text, MAX_CANDIDATES);
        assert_eq!(ids(&res), "Q1|NIL|Q2|Q3");
    }

    /// Returns canned hits depending on the query kind, recording queried indices.
    struct MockClient {
        exact: Vec<Hit>,
        full_text: Vec<Hit>,
        queries: RefCell<Vec<(String, Value)>>,
    }

    impl SearchClient for MockClient {
        fn search(&self, index: &str, body: &Value) -> Result<Vec<Hit>, Error> {
            self.queries
                .borrow_mut()
                .push((index.to_string(), body.clone()));
            if body.get("sort").is_some() {
                Ok(self.exact.clone())
            } else {
                Ok(self.full_text.clone())
            }
        }
    }

    struct FailingClient;

    impl SearchClient for FailingClient {
        fn search(&self, _: &str, _: &Value) -> Result<Vec<Hit>, Error> {
            Err(Error::Custom("index unavailable".to_string()))
        }
    }

    #[test]
    fn resolve() {
        let client = MockClient {
            exact: vec![hit("Q71", None, 900)],
            full_text: vec![hit("Q11917", Some(2.0), 3), hit("Q71", Some(3.0), 900)],
            queries: RefCell::new(Vec::new()),
        };
        let kb = KnowledgeBase::new(client);
        let res = kb.resolve("Genève").unwrap();
        assert_eq!(res.to_string(), "Q71|NIL|Q11917");

        let queries = kb.client.queries.borrow();
        assert_eq!(queries.len(), 2);
        assert!(queries.iter().all(|(index, _)| index == DEFAULT_INDEX));
        assert!(queries
            .iter()
            .any(|(_, q)| q["query"]["bool"]["must"]["term"]["label.raw"] == json!("genève")));
    }

    #[test]
    fn description_index() {
        let client = MockClient {
            exact: vec![],
            full_text: vec![],
            queries: RefCell::new(Vec::new()),
        };
        let kb = KnowledgeBase::with_indices(client, "labels", "descriptions");
        kb.description("Q72").unwrap();
        kb.label("Q72").unwrap();
        let queries = kb.client.queries.borrow();
        assert_eq!(queries[0].0, "descriptions");
        assert_eq!(queries[1].0, "labels");
    }

    #[test]
    fn max_candidates() {
        let client = MockClient {
            exact: vec![hit("Q1", None, 0)],
            full_text: vec![hit("Q2", Some(1.0), 0), hit("Q3", Some(0.5), 0)],
            queries: RefCell::new(Vec::new()),
        };
        let kb = KnowledgeBase::new(client).max_candidates(3);
        assert_eq!(kb.resolve("x").unwrap().to_string(), "Q1|NIL|Q2");
    }

    #[test]
    fn errors_propagate() {
        let kb = KnowledgeBase::new(FailingClient);
        assert!(kb.resolve("Zürich").is_err());
    }
}
