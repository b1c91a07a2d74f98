//! Span-continuation merging.
use log::debug;

use super::tags::Prefix;
use super::TokenGroup;
use crate::error::Error;

/// Merge consecutive groups when an entity span is split between them.
///
/// A group is appended to the previous one when its first tag (column `tag_column`) starts with `I`.
/// Empty groups are never merged into their predecessor.
pub fn merge_split_spans(groups: Vec<TokenGroup>, tag_column: &str) -> Result<Vec<TokenGroup>, Error> {
    let mut res = Vec::with_capacity(groups.len());
    let mut groups = groups.into_iter();

    let mut current = match groups.next() {
        Some(g) => g,
        None => return Ok(res),
    };

    for group in groups {
        let continues = match group.value(0, tag_column)? {
            Some(tag) => Prefix::of(tag).ok_or(Error::EmptyTag(0))? == Prefix::Inside,
            None => false,
        };

        if continues {
            debug!("merging group of {} rows into previous one", group.len());
            current.extend(group);
        } else {
            res.push(std::mem::replace(&mut current, group));
        }
    }

    res.push(current);
    Ok(res)
}
