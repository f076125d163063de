pub mod error;
pub mod pattern;

use std::ops::Range;

use error::PatternError;
use pattern::{DEFAULT_PATTERN, Matches, Pattern};

use crate::lexeme::Lexeme;

#[derive(Debug, Clone)]
pub struct Options {
    /// Pattern used instead of [`DEFAULT_PATTERN`].
    pub pattern: Option<String>,
    /// Number of lexemes reserved up front.
    pub capacity: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pattern: None,
            capacity: 20,
        }
    }
}

/// Splits input text into raw [`Lexeme::Token`]s.
#[derive(Debug, Clone)]
pub struct Lexer {
    pattern: Pattern,
    options: Options,
}

impl Lexer {
    pub fn new(options: Options) -> Result<Self, PatternError> {
        let pattern = Pattern::new(options.pattern.as_deref().unwrap_or(DEFAULT_PATTERN))?;
        Ok(Self { pattern, options })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn matches<'i>(&self, input: &'i str) -> Matches<'_, 'i> {
        self.pattern.matches(input)
    }

    pub fn tokenize(&self, input: &str) -> Vec<Lexeme> {
        let mut lexemes = Vec::with_capacity(self.options.capacity);
        lexemes.extend(self.matches(input).map(|m| Lexeme::token(m.text)));
        log::debug!("tokenized {} lexemes from {} bytes", lexemes.len(), input.len());
        lexemes
    }

    /// Like [`Lexer::tokenize`], also returning the byte range of every lexeme.
    pub fn tokenize_spanned(&self, input: &str) -> (Vec<Lexeme>, Vec<Range<usize>>) {
        let mut lexemes = Vec::with_capacity(self.options.capacity);
        let mut spans = Vec::with_capacity(self.options.capacity);

        for m in self.matches(input) {
            lexemes.push(Lexeme::token(m.text));
            spans.push(m.span);
        }

        log::debug!("tokenized {} lexemes from {} bytes", lexemes.len(), input.len());
        (lexemes, spans)
    }

    /// Tokenizes raw bytes, failing at the first byte that is not valid UTF-8.
    pub fn tokenize_bytes(&self, input: &[u8]) -> Result<Vec<Lexeme>, PatternError> {
        let input = std::str::from_utf8(input)?;
        Ok(self.tokenize(input))
    }
}
