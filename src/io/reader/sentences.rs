//! Sentence-level segmentation.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use log::info;

use super::lines::{Line, LineSource};
use crate::config::SegmenterConfig;
use crate::conll::{Header, TokenGroup};
use crate::error::Error;

/// Yields groups that are (more or less) sentences.
///
/// Groups are only cut at markers:
/// - `# document` always ends the current group,
/// - `# segment` ends it only if a sentence end has been seen since the last cut.
///
/// Sentence ends are detected using [SegmenterConfig::ends_sentence] on the last two tokens of the group.
/// Empty groups are never yielded.
#[derive(Debug)]
pub struct SentenceReader<R> {
    source: LineSource<R>,
    config: SegmenterConfig,
    token_idx: usize,
    current: TokenGroup,
    sentence_finished: bool,
}

impl SentenceReader<BufReader<File>> {
    pub fn from_path(
        src: &Path,
        config: SegmenterConfig,
        token_column: &str,
    ) -> Result<Self, Error> {
        info!("reading sentences from {:?}", src);
        let f = File::open(src)?;
        Self::new(BufReader::new(f), config, token_column)
    }
}

impl<R: BufRead> SentenceReader<R> {
    pub fn new(reader: R, config: SegmenterConfig, token_column: &str) -> Result<Self, Error> {
        let source = LineSource::new(reader)?;
        let token_idx = source.header().position(token_column)?;
        let current = TokenGroup::new(source.header().clone());
        Ok(Self {
            source,
            config,
            token_idx,
            current,
            sentence_finished: false,
        })
    }

    pub fn header(&self) -> &Arc<Header> {
        self.source.header()
    }

    /// Take current group, leaving an empty one. Returns `None` if it was empty.
    fn flush(&mut self) -> Option<TokenGroup> {
        self.sentence_finished = false;
        if self.current.is_empty() {
            None
        } else {
            let empty = TokenGroup::new(self.source.header().clone());
            Some(std::mem::replace(&mut self.current, empty))
        }
    }

    fn update_finished(&mut self) {
        if let [.., previous, last] = self.current.rows() {
            let previous = previous.get(self.token_idx);
            let last = last.get(self.token_idx);
            if self.config.ends_sentence(previous, last) {
                self.sentence_finished = true;
            }
        }
    }
}

impl<R: BufRead> Iterator for SentenceReader<R> {
    type Item = Result<TokenGroup, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.source.next() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };

            match line {
                Line::Document => {
                    if let Some(group) = self.flush() {
                        return Some(Ok(group));
                    }
                }
                Line::Segment => {
                    if self.sentence_finished {
                        if let Some(group) = self.flush() {
                            return Some(Ok(group));
                        }
                    }
                }
                Line::Row(row) => {
                    self.current.push(row);
                    self.update_finished();
                }
                Line::Blank | Line::Comment => (),
            }
        }

        self.flush().map(Ok)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn read(content: &str) -> Vec<Vec<String>> {
        SentenceReader::new(Cursor::new(content), SegmenterConfig::default(), "TOKEN")
            .unwrap()
            .map(|group| {
                group
                    .unwrap()
                    .column("TOKEN")
                    .unwrap()
                    .into_iter()
                    .map(String::from)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn segment_after_sentence_end() {
        let content = "TOKEN\tNE-COARSE-LIT
# document_id = doc1
# segment_iiif_link = _
Hello\tO
world\tO
.\tO
# segment_iiif_link = _
Bye\tO
";
        assert_eq!(
            read(content),
            vec![vec!["Hello", "world", "."], vec!["Bye"]]
        );
    }

    #[test]
    fn segment_without_sentence_end() {
        let content = "TOKEN\tNE-COARSE-LIT
# segment
The\tO
# segment
city\tO
.\tO
";
        assert_eq!(read(content), vec![vec!["The", "city", "."]]);
    }

    #[test]
    fn abbreviation_does_not_end_sentence() {
        let content = "TOKEN\tNE-COARSE-LIT
Mr\tB-PER
.\tI-PER
# segment
Smith\tI-PER
!\tO

# segment
Next\tO
";
        assert_eq!(
            read(content),
            vec![vec!["Mr", ".", "Smith", "!"], vec!["Next"]]
        );
    }

    #[test]
    fn document_always_cuts() {
        let content = "TOKEN\tNE-COARSE-LIT
# document
a\tO
# document
b\tO
# document
";
        assert_eq!(read(content), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn custom_abbreviations() {
        let content = "TOKEN\tNE-COARSE-LIT
Hr\tO
.\tO
# segment
Meier\tO
";
        let config = SegmenterConfig::new(vec![".".to_string()], vec!["Hr".to_string()]);
        let groups: Vec<_> = SentenceReader::new(Cursor::new(content), config, "TOKEN")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn unknown_token_column() {
        let content = "WORD\tNE-COARSE-LIT\n";
        assert!(SentenceReader::new(Cursor::new(content), SegmenterConfig::default(), "TOKEN").is_err());
    }
}
