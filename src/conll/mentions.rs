//! Entity mention extraction.
use log::warn;
use serde::Serialize;

use super::tags::{prefixes, Prefix};
use super::TokenGroup;
use crate::error::Error;

/// A contiguous span of tokens tagged as an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mention {
    /// Position of the first token in its group.
    pub start: usize,
    /// Space-joined tokens of the span.
    pub text: String,
}

impl Mention {
    pub fn new(start: usize, text: String) -> Self {
        Self { start, text }
    }
}

/// Extract mentions from parallel `tokens` and `tags`.
///
/// Each `B` tag closes the open span (if any) and opens a new one, `I` tags extend the open span.
/// `I` tags with no open span are logged and skipped.
pub fn extract_mentions<S, T>(tokens: &[S], tags: &[T]) -> Result<Vec<Mention>, Error>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let prefixes = prefixes(tags)?;
    let mut res = Vec::new();
    let mut current: Option<Mention> = None;

    for (idx, (token, prefix)) in tokens.iter().zip(prefixes).enumerate() {
        let token = token.as_ref();
        match prefix {
            Prefix::Begin => {
                if let Some(mention) = current.take() {
                    res.push(mention);
                }
                current = Some(Mention::new(idx, token.to_string()));
            }
            Prefix::Inside => match &mut current {
                Some(mention) => {
                    mention.text.push(' ');
                    mention.text.push_str(token);
                }
                None => warn!("No beginning found! Token: {} (position {})", token, idx),
            },
            Prefix::Outside => (),
        }
    }

    if let Some(mention) = current {
        res.push(mention);
    }

    Ok(res)
}

impl TokenGroup {
    /// Extract mentions of the group. See [extract_mentions].
    pub fn mentions(&self, token_column: &str, tag_column: &str) -> Result<Vec<Mention>, Error> {
        let tokens = self.column(token_column)?;
        let tags = self.column(tag_column)?;
        extract_mentions(&tokens[..], &tags[..])
    }
}
