//! BIO tags.
//!
//! A tag starts with `B` (beginning of a span), `I` (inside a span) or anything else (outside).
//! The remainder (`-PER`, `-LOC`...) is the entity type and is kept as-is when rewriting prefixes.
use super::TokenGroup;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Begin,
    Inside,
    Outside,
}

impl Prefix {
    /// Get the prefix of `tag`, `None` if `tag` is empty.
    pub fn of(tag: &str) -> Option<Prefix> {
        match tag.chars().next()? {
            'B' => Some(Prefix::Begin),
            'I' => Some(Prefix::Inside),
            _ => Some(Prefix::Outside),
        }
    }
}

/// Get prefixes of every tag, failing with [Error::EmptyTag] on the first empty one.
pub(crate) fn prefixes<S: AsRef<str>>(tags: &[S]) -> Result<Vec<Prefix>, Error> {
    tags.iter()
        .enumerate()
        .map(|(idx, tag)| Prefix::of(tag.as_ref()).ok_or(Error::EmptyTag(idx)))
        .collect()
}

/// Turns starting `I` tags into `B` tags.
///
/// A tag is rewritten when it starts with `I` and is either first or follows a tag that does not start with `I`.
pub fn add_beginnings<S: AsRef<str>>(tags: &[S]) -> Result<Vec<String>, Error> {
    let prefixes = prefixes(tags)?;
    Ok(tags
        .iter()
        .enumerate()
        .map(|(idx, tag)| {
            let tag = tag.as_ref();
            let starts_run = idx == 0 || prefixes[idx - 1] != Prefix::Inside;
            if prefixes[idx] == Prefix::Inside && starts_run {
                // 'I' is one byte long
                format!("B{}", &tag[1..])
            } else {
                tag.to_string()
            }
        })
        .collect())
}

impl TokenGroup {
    /// Returns a copy of the group with [add_beginnings] applied on column `tag_column`.
    pub fn with_beginnings(&self, tag_column: &str) -> Result<TokenGroup, Error> {
        let tags = self.column(tag_column)?;
        let tags = add_beginnings(&tags[..])?;
        let mut res = self.clone();
        res.replace_column(tag_column, tags)?;
        Ok(res)
    }
}
