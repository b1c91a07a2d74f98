//! Rows, headers and token groups.
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Error;

/// Column names of a corpus file, with a name to position mapping computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Header {
    pub fn new(names: Vec<String>) -> Self {
        let positions = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self { names, positions }
    }

    /// Position of column `name`.
    pub fn position(&self, name: &str) -> Result<usize, Error> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A single data row. Fields are kept verbatim, in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    fields: Vec<String>,
}

impl TokenRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Get field at `idx`. Panics if `idx` is out of bounds.
    pub fn get(&self, idx: usize) -> &str {
        &self.fields[idx]
    }

    pub fn set(&mut self, idx: usize, value: String) {
        self.fields[idx] = value;
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// An ordered sequence of rows, representing a sentence or a document fragment.
///
/// Groups read from the same file share their [Header].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGroup {
    header: Arc<Header>,
    rows: Vec<TokenRow>,
}

impl TokenGroup {
    /// Create an empty group.
    pub fn new(header: Arc<Header>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Create a group from rows. Rows are expected to have one field per column.
    pub fn with_rows(header: Arc<Header>, rows: Vec<TokenRow>) -> Self {
        Self { header, rows }
    }

    pub fn header(&self) -> &Arc<Header> {
        &self.header
    }

    pub fn rows(&self) -> &[TokenRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [TokenRow] {
        &mut self.rows
    }

    pub fn push(&mut self, row: TokenRow) {
        self.rows.push(row);
    }

    /// Append the rows of `other` at the end of this group.
    pub fn extend(&mut self, other: TokenGroup) {
        self.rows.extend(other.rows);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of column `name`, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>, Error> {
        let idx = self.header.position(name)?;
        Ok(self.rows.iter().map(|row| row.get(idx)).collect())
    }

    /// Value of column `name` at row `row`, if the row exists.
    pub fn value(&self, row: usize, name: &str) -> Result<Option<&str>, Error> {
        let idx = self.header.position(name)?;
        Ok(self.rows.get(row).map(|r| r.get(idx)))
    }

    /// Replace column `name` with `values`.
    pub(crate) fn replace_column(&mut self, name: &str, values: Vec<String>) -> Result<(), Error> {
        let idx = self.header.position(name)?;
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.set(idx, value);
        }
        Ok(())
    }
}
