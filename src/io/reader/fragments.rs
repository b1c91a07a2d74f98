//! Fragment and document readers.
//!
//! These cut on markers only, without any sentence detection.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use log::info;

use super::lines::{Line, LineSource};
use crate::conll::{Header, TokenGroup};
use crate::error::Error;

/// Default minimum number of rows before a `# segment` marker ends a fragment.
pub const MIN_FRAGMENT_LENGTH: usize = 10;

/// Yields document fragments.
///
/// `# document` ends the current fragment, `# segment` ends it only when it holds at least `min_length` rows.
#[derive(Debug)]
pub struct FragmentReader<R> {
    source: LineSource<R>,
    min_length: usize,
    current: TokenGroup,
}

impl FragmentReader<BufReader<File>> {
    pub fn from_path(src: &Path, min_length: usize) -> Result<Self, Error> {
        info!("reading fragments from {:?}", src);
        let f = File::open(src)?;
        Self::new(BufReader::new(f), min_length)
    }
}

impl<R: BufRead> FragmentReader<R> {
    pub fn new(reader: R, min_length: usize) -> Result<Self, Error> {
        let source = LineSource::new(reader)?;
        let current = TokenGroup::new(source.header().clone());
        Ok(Self {
            source,
            min_length,
            current,
        })
    }

    pub fn header(&self) -> &Arc<Header> {
        self.source.header()
    }

    fn flush(&mut self) -> Option<TokenGroup> {
        take_group(&mut self.current)
    }
}

impl<R: BufRead> Iterator for FragmentReader<R> {
    type Item = Result<TokenGroup, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.source.next() {
            match line {
                Ok(Line::Document) => {
                    if let Some(group) = self.flush() {
                        return Some(Ok(group));
                    }
                }
                Ok(Line::Segment) => {
                    if self.current.len() >= self.min_length {
                        if let Some(group) = self.flush() {
                            return Some(Ok(group));
                        }
                    }
                }
                Ok(Line::Row(row)) => self.current.push(row),
                Ok(Line::Blank) | Ok(Line::Comment) => (),
                Err(e) => return Some(Err(e)),
            }
        }

        self.flush().map(Ok)
    }
}

/// Yields documents, each one being a list of fragments.
///
/// `# segment` ends the current fragment, `# document` ends both the current fragment and the current document.
/// Empty fragments and documents are skipped.
#[derive(Debug)]
pub struct DocumentReader<R> {
    source: LineSource<R>,
    fragments: Vec<TokenGroup>,
    current: TokenGroup,
}

impl DocumentReader<BufReader<File>> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        info!("reading documents from {:?}", src);
        let f = File::open(src)?;
        Self::new(BufReader::new(f))
    }
}

impl<R: BufRead> DocumentReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let source = LineSource::new(reader)?;
        let current = TokenGroup::new(source.header().clone());
        Ok(Self {
            source,
            fragments: Vec::new(),
            current,
        })
    }

    pub fn header(&self) -> &Arc<Header> {
        self.source.header()
    }

    fn end_fragment(&mut self) {
        if let Some(fragment) = take_group(&mut self.current) {
            self.fragments.push(fragment);
        }
    }

    /// Ends current fragment and document. Returns `None` if the document is empty.
    fn end_document(&mut self) -> Option<Vec<TokenGroup>> {
        self.end_fragment();
        if self.fragments.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.fragments))
        }
    }
}

impl<R: BufRead> Iterator for DocumentReader<R> {
    type Item = Result<Vec<TokenGroup>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.source.next() {
            match line {
                Ok(Line::Document) => {
                    if let Some(document) = self.end_document() {
                        return Some(Ok(document));
                    }
                }
                Ok(Line::Segment) => self.end_fragment(),
                Ok(Line::Row(row)) => self.current.push(row),
                Ok(Line::Blank) | Ok(Line::Comment) => (),
                Err(e) => return Some(Err(e)),
            }
        }

        self.end_document().map(Ok)
    }
}

/// Take `group`'s rows into a new group, `None` if there are none.
fn take_group(group: &mut TokenGroup) -> Option<TokenGroup> {
    if group.is_empty() {
        None
    } else {
        let empty = TokenGroup::new(group.header().clone());
        Some(std::mem::replace(group, empty))
    }
}
