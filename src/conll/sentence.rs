//! Surface text reconstruction from tokens.
use super::TokenGroup;
use crate::error::Error;

/// Line-wrap continuation token. Its mis-decoded form is found in some corpora and accepted too.
pub const CONTINUATION_MARKERS: [&str; 2] = ["¬", "Â¬"];

/// MISC hint telling that no space follows the token.
pub const NO_SPACE_AFTER: &str = "NoSpaceAfter";

fn is_continuation(token: &str) -> bool {
    CONTINUATION_MARKERS.contains(&token)
}

/// Join `tokens` into a sentence, honoring [NO_SPACE_AFTER] hints and [CONTINUATION_MARKERS].
///
/// `tokens` and `hints` are expected to have the same length.
pub fn reconstruct<S, H>(tokens: &[S], hints: &[H]) -> String
where
    S: AsRef<str>,
    H: AsRef<str>,
{
    let mut no_space = true;
    let mut sentence = String::new();

    for (token, hint) in tokens.iter().zip(hints) {
        let token = token.as_ref();

        // word wrap: glue next token to the previous one
        if is_continuation(token) {
            no_space = true;
            continue;
        }

        if !no_space {
            sentence.push(' ');
        }
        sentence.push_str(token);
        no_space = hint.as_ref() == NO_SPACE_AFTER;
    }

    sentence
}

impl TokenGroup {
    /// Reconstruct the group's text. See [reconstruct].
    pub fn sentence(&self, token_column: &str, misc_column: &str) -> Result<String, Error> {
        let tokens = self.column(token_column)?;
        let hints = self.column(misc_column)?;
        Ok(reconstruct(&tokens[..], &hints[..]))
    }
}
