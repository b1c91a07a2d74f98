/*! Corpus processing pipelines.

- [Pipeline::sentences]: segment into sentences, merge split spans, write back.
- [Pipeline::fragments]: segment into fragments of a minimum length, write back.
- [Pipeline::documents]: segment into documents of fragments, write back.
- [Pipeline::annotate]: segment into sentences, merge split spans, fix tags and
  output reconstructed sentences and their mentions as JSON lines, optionally linked to a knowledge base.
!*/
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use serde::Serialize;

use crate::config::{Columns, SegmenterConfig};
use crate::conll::{merge_split_spans, Header, Mention, TokenGroup};
use crate::error::Error;
use crate::io::{self, DocumentReader, FragmentReader, SentenceReader};
use crate::kb::{KnowledgeBase, SearchClient};

/// A mention, with its candidates if it has been linked.
#[derive(Debug, Serialize)]
pub struct LinkedMention {
    #[serde(flatten)]
    pub mention: Mention,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<String>,
}

/// Output of [Pipeline::annotate], one per group.
#[derive(Debug, Serialize)]
pub struct Annotation {
    pub sentence: String,
    pub mentions: Vec<LinkedMention>,
}

pub struct Pipeline {
    src: PathBuf,
    columns: Columns,
    segmenter: SegmenterConfig,
}

impl Pipeline {
    pub fn new(src: PathBuf, columns: Columns, segmenter: SegmenterConfig) -> Self {
        Pipeline {
            src,
            columns,
            segmenter,
        }
    }

    /// Read sentences and merge those that split an entity span.
    fn read_sentences(&self) -> Result<(Arc<Header>, Vec<TokenGroup>), Error> {
        let mut reader =
            SentenceReader::from_path(&self.src, self.segmenter.clone(), &self.columns.token)?;
        let groups = reader.by_ref().collect::<Result<Vec<_>, _>>()?;
        info!("{} sentences read", groups.len());
        let groups = merge_split_spans(groups, &self.columns.tag)?;
        info!("{} sentences after merging", groups.len());
        Ok((reader.header().clone(), groups))
    }

    pub fn sentences(&self, dst: &Path) -> Result<(), Error> {
        let (header, groups) = self.read_sentences()?;
        io::write_groups(dst, &header, &groups)
    }

    pub fn fragments(&self, dst: &Path, min_length: usize) -> Result<(), Error> {
        let mut reader = FragmentReader::from_path(&self.src, min_length)?;
        let groups = reader.by_ref().collect::<Result<Vec<_>, _>>()?;
        info!("{} fragments read", groups.len());
        io::write_groups(dst, reader.header(), &groups)
    }

    pub fn documents(&self, dst: &Path) -> Result<(), Error> {
        let mut reader = DocumentReader::from_path(&self.src)?;
        let documents = reader.by_ref().collect::<Result<Vec<_>, _>>()?;
        info!("{} documents read", documents.len());
        io::write_documents(dst, reader.header(), &documents)
    }

    /// Annotate a single group.
    fn annotate_group<C: SearchClient>(
        &self,
        group: &TokenGroup,
        kb: Option<&KnowledgeBase<C>>,
    ) -> Result<Annotation, Error> {
        let group = group.with_beginnings(&self.columns.tag)?;
        let sentence = group.sentence(&self.columns.token, &self.columns.misc)?;
        let mentions = group
            .mentions(&self.columns.token, &self.columns.tag)?
            .into_iter()
            .map(|mention| -> Result<LinkedMention, Error> {
                let candidates = match kb {
                    Some(kb) => Some(kb.resolve(&mention.text)?.to_string()),
                    None => None,
                };
                Ok(LinkedMention {
                    mention,
                    candidates,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Annotation { sentence, mentions })
    }

    /// Write one JSON line per sentence into `out`.
    ///
    /// Mentions are resolved when `kb` is provided.
    pub fn annotate<W: Write, C: SearchClient>(
        &self,
        mut out: W,
        kb: Option<&KnowledgeBase<C>>,
    ) -> Result<(), Error> {
        let (_, groups) = self.read_sentences()?;
        let mut nb_mentions = 0;
        for group in &groups {
            let annotation = self.annotate_group(group, kb)?;
            nb_mentions += annotation.mentions.len();
            serde_json::to_writer(&mut out, &annotation)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        info!("{} mentions extracted", nb_mentions);
        Ok(())
    }
}
