//! Search index access.
use log::debug;
use reqwest::Url;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Error;

/// Default Elasticsearch location.
pub const DEFAULT_URL: &str = "http://localhost:9200/";

/// Stored fields of a knowledge-base entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    /// Wikidata identifier (`Q…`).
    pub label_exact: String,
    /// Popularity.
    #[serde(default)]
    pub count: u64,
    /// Remaining fields (labels, descriptions…).
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// A search result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hit {
    /// Relevance. Absent (`null`) when results are explicitly sorted.
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: Entry,
}

impl Hit {
    pub fn id(&self) -> &str {
        &self.source.label_exact
    }

    pub fn count(&self) -> u64 {
        self.source.count
    }

    /// Relevance, `0.0` if absent.
    pub fn score(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
struct Hits {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Hits,
}

/// Anything able to run a search query against an index.
pub trait SearchClient {
    fn search(&self, index: &str, body: &Value) -> Result<Vec<Hit>, Error>;
}

/// Blocking Elasticsearch client.
pub struct ElasticClient {
    base: Url,
    client: reqwest::blocking::Client,
}

impl ElasticClient {
    pub fn new(base: &str) -> Result<Self, Error> {
        let mut base =
            Url::parse(base).map_err(|e| Error::Custom(format!("invalid url {}: {}", base, e)))?;

        // ensure joins append to the path
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base,
            client: reqwest::blocking::Client::new(),
        })
    }

    fn search_url(&self, index: &str) -> Result<Url, Error> {
        self.base
            .join(&format!("{}/_search", index))
            .map_err(|e| Error::Custom(format!("invalid index name {}: {}", index, e)))
    }
}

impl SearchClient for ElasticClient {
    fn search(&self, index: &str, body: &Value) -> Result<Vec<Hit>, Error> {
        let url = self.search_url(index)?;
        debug!("querying {}: {}", url, body);
        let response: SearchResponse = self
            .client
            .post(url)
            .json(body)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.hits.hits)
    }
}
