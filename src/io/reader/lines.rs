//! Line-level parsing of corpus files.
//!
//! A corpus file starts with a tab-separated header, followed by lines that are either
//! blank, markers/comments (starting with `#`) or tab-separated data rows.
use std::io::{BufRead, Lines};
use std::sync::Arc;

use log::debug;

use crate::config;
use crate::conll::{Header, TokenRow};
use crate::error::Error;

pub const DOCUMENT_MARKER: &str = "# document";
pub const SEGMENT_MARKER: &str = "# segment";

/// Kinds of body lines.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line {
    Blank,
    /// New document boundary
    Document,
    /// New segment boundary
    Segment,
    /// Any other `#` line
    Comment,
    Row(TokenRow),
}

/// Parse a tab-separated header line.
pub fn parse_header(line: &str) -> Result<Header, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .from_reader(line.as_bytes());
    let names = rdr.headers()?.iter().map(String::from).collect();
    Ok(Header::new(names))
}

/// Classify and parse a body line. `line_nb` is only used for error reporting.
pub(crate) fn parse_line(line: &str, line_nb: usize, header: &Header) -> Result<Line, Error> {
    if line.is_empty() {
        return Ok(Line::Blank);
    }
    if line.starts_with(DOCUMENT_MARKER) {
        return Ok(Line::Document);
    }
    if line.starts_with(SEGMENT_MARKER) {
        return Ok(Line::Segment);
    }
    if line.starts_with('#') {
        return Ok(Line::Comment);
    }

    let limit = config::field_size_limit();
    let fields: Vec<String> = line.split('\t').map(String::from).collect();
    if fields.len() != header.len() {
        return Err(Error::ColumnMismatch {
            line: line_nb,
            expected: header.len(),
            found: fields.len(),
        });
    }
    if let Some(field) = fields.iter().find(|f| f.len() > limit) {
        return Err(Error::FieldTooLarge {
            line: line_nb,
            size: field.len(),
            limit,
        });
    }

    Ok(Line::Row(TokenRow::new(fields)))
}

/// Reads the header then yields parsed body lines.
#[derive(Debug)]
pub(crate) struct LineSource<R> {
    header: Arc<Header>,
    lines: Lines<R>,
    line_nb: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => parse_header(&line?)?,
            None => return Err(Error::MissingHeader),
        };
        debug!("header: {:?}", header.names());

        Ok(Self {
            header: Arc::new(header),
            lines,
            line_nb: 1,
        })
    }

    pub fn header(&self) -> &Arc<Header> {
        &self.header
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<Line, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_nb += 1;
        Some(
            line.map_err(Error::Io)
                .and_then(|line| parse_line(&line, self.line_nb, &self.header)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Header {
        parse_header("TOKEN\tNE-COARSE-LIT\tMISC").unwrap()
    }

    #[test]
    fn header_columns() {
        let h = header();
        assert_eq!(h.names(), &["TOKEN", "NE-COARSE-LIT", "MISC"]);
    }

    #[test]
    fn header_quotes_kept() {
        let h = parse_header("\"TOKEN\tMISC").unwrap();
        assert_eq!(h.names(), &["\"TOKEN", "MISC"]);
    }

    #[test]
    fn markers() {
        let h = header();
        assert_eq!(parse_line("", 2, &h).unwrap(), Line::Blank);
        assert_eq!(
            parse_line("# document_id = NZZ-1798", 2, &h).unwrap(),
            Line::Document
        );
        assert_eq!(parse_line("# segment_iiif_link = _", 2, &h).unwrap(), Line::Segment);
        assert_eq!(parse_line("# language = fr", 2, &h).unwrap(), Line::Comment);
        assert_eq!(parse_line("#", 2, &h).unwrap(), Line::Comment);
    }

    #[test]
    fn row() {
        let h = header();
        let expected = TokenRow::new(vec![
            "\"Paris".to_string(),
            "B-LOC".to_string(),
            "_".to_string(),
        ]);
        assert_eq!(parse_line("\"Paris\tB-LOC\t_", 3, &h).unwrap(), Line::Row(expected));
    }

    #[test]
    fn row_mismatch() {
        let h = header();
        assert!(matches!(
            parse_line("Paris\tB-LOC", 7, &h),
            Err(Error::ColumnMismatch {
                line: 7,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn missing_header() {
        let src = std::io::Cursor::new("");
        assert!(matches!(LineSource::new(src), Err(Error::MissingHeader)));
    }
}
