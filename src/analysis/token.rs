//! Token types for text analysis.
//!
//! ```
//! use invidx::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! ```

use std::fmt;

/// A single unit of text produced by a tokenizer.
///
/// The text is kept exactly as it appeared in the source. There is no case folding
/// or normalization, so `Word` and `word` are different terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token's text content
    pub text: String,

    /// Position in the token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display_is_raw_text() {
        let token = Token::new("A_word,", 3);
        assert_eq!(token.to_string(), "A_word,");
        assert_eq!(token, Token::new(String::from("A_word,"), 3));
    }
}
