//! Tab-separated corpus writer.
//!
//! Output starts with the header line. Each group is written as its rows followed by a `#` line.
//! Fields are written as-is, without any quoting or escaping.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::conll::{Header, TokenGroup};
use crate::error::Error;

/// Line written after each group.
pub const GROUP_SEPARATOR: &str = "#";

pub struct CorpusWriter<W: Write> {
    inner: W,
    nb_groups: usize,
}

impl CorpusWriter<BufWriter<File>> {
    /// Create (or truncate) file at `dst` and write `header` in it.
    pub fn create(dst: &Path, header: &Header) -> Result<Self, Error> {
        info!("writing to {:?}", dst);
        let f = File::create(dst)?;
        Self::new(BufWriter::new(f), header)
    }
}

impl<W: Write> CorpusWriter<W> {
    /// Wrap `inner`, writing the header line.
    pub fn new(mut inner: W, header: &Header) -> Result<Self, Error> {
        writeln!(inner, "{}", header.names().join("\t"))?;
        Ok(Self {
            inner,
            nb_groups: 0,
        })
    }

    /// Write rows of `group`, then a separator line.
    pub fn write_group(&mut self, group: &TokenGroup) -> Result<(), Error> {
        for row in group.rows() {
            writeln!(self.inner, "{}", row.fields().join("\t"))?;
        }
        writeln!(self.inner, "{}", GROUP_SEPARATOR)?;
        self.nb_groups += 1;
        Ok(())
    }

    /// Write each fragment of the document, then a blank line.
    pub fn write_document(&mut self, fragments: &[TokenGroup]) -> Result<(), Error> {
        for fragment in fragments {
            self.write_group(fragment)?;
        }
        writeln!(self.inner)?;
        Ok(())
    }

    /// Flush and return the inner writer.
    pub fn finish(mut self) -> Result<W, Error> {
        self.inner.flush()?;
        debug!("{} groups written", self.nb_groups);
        Ok(self.inner)
    }
}

/// Write `groups` to `dst`.
pub fn write_groups<'a, I>(dst: &Path, header: &Header, groups: I) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a TokenGroup>,
{
    let mut writer = CorpusWriter::create(dst, header)?;
    for group in groups {
        writer.write_group(group)?;
    }
    writer.finish()?;
    Ok(())
}

/// Write `documents` to `dst`, separating documents by a blank line.
pub fn write_documents<'a, I>(dst: &Path, header: &Header, documents: I) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a Vec<TokenGroup>>,
{
    let mut writer = CorpusWriter::create(dst, header)?;
    for document in documents {
        writer.write_document(document)?;
    }
    writer.finish()?;
    Ok(())
}
