//! Token representation produced by the tokenizers.

/// A single segmented word.
///
/// Tokens carry their text plus the position in the stream and the byte
/// offsets into the source text. They have no identity beyond their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    position: usize,
    start_offset: usize,
    end_offset: usize,
}

impl Token {
    /// Create a token without offset information.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
        }
    }

    /// Create a token with byte offsets into the source text.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// The token text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the token and return its text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Position of the token in its stream.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    pub fn end_offset(&self) -> usize {
        self.end_offset
    }
}

/// A single-pass stream of tokens.
///
/// Streams cannot be restarted; re-tokenize the source text to iterate again.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
