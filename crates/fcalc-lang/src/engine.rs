use std::ops::Range;

use crate::{
    classifier::{classify, resolve_unary_minus},
    error::{self, InnerError},
    lexeme::Lexeme,
    lexer::{Lexer, Options},
    parser::flat::FlatExpr,
};

/// Runs the tokenize, classify and flatten pipeline with a pattern compiled
/// once up front. Every failure is reported as a diagnostic [`error::Error`]
/// pointing into the input.
#[derive(Debug, Clone)]
pub struct Engine {
    lexer: Lexer,
}

impl Engine {
    #[allow(clippy::result_large_err)]
    pub fn new(options: Options) -> Result<Self, error::Error> {
        let pattern = options.pattern.clone().unwrap_or_default();
        let lexer = Lexer::new(options)
            .map_err(|e| error::Error::from_error(pattern, InnerError::Pattern(e), None))?;
        Ok(Self { lexer })
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    /// Splits `code` into raw tokens.
    #[allow(clippy::result_large_err)]
    pub fn tokenize(&self, code: &str) -> Result<Vec<Lexeme>, error::Error> {
        Ok(self.lexer.tokenize(code))
    }

    #[allow(clippy::result_large_err)]
    pub fn tokenize_bytes(&self, input: &[u8]) -> Result<Vec<Lexeme>, error::Error> {
        self.lexer.tokenize_bytes(input).map_err(|e| {
            let span = e.offset.map(|offset| offset..offset + 1);
            error::Error::from_error(
                String::from_utf8_lossy(input),
                InnerError::Pattern(e),
                span,
            )
        })
    }

    /// Tokenizes and classifies `code`, rewriting unary minus.
    #[allow(clippy::result_large_err)]
    pub fn classify(&self, code: &str) -> Result<Vec<Lexeme>, error::Error> {
        self.classify_spanned(code).map(|(lexemes, _)| lexemes)
    }

    /// Runs the whole pipeline and returns the flattened expression.
    #[allow(clippy::result_large_err)]
    pub fn parse(&self, code: &str) -> Result<FlatExpr, error::Error> {
        let (lexemes, spans) = self.classify_spanned(code)?;

        FlatExpr::new(lexemes).map_err(|e| {
            let span = spans.get(e.index()).cloned();
            error::Error::from_error(code, InnerError::Parse(e), span)
        })
    }

    #[allow(clippy::result_large_err)]
    fn classify_spanned(
        &self,
        code: &str,
    ) -> Result<(Vec<Lexeme>, Vec<Range<usize>>), error::Error> {
        let (mut lexemes, spans) = self.lexer.tokenize_spanned(code);

        for (lexeme, span) in lexemes.iter_mut().zip(&spans) {
            *lexeme = classify(std::mem::take(lexeme)).map_err(|e| {
                error::Error::from_error(code, InnerError::Classify(e), Some(span.clone()))
            })?;
        }
        resolve_unary_minus(&mut lexemes);

        log::debug!("classified {} lexemes", lexemes.len());
        Ok((lexemes, spans))
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
