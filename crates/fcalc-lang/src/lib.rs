//! `fcalc-lang` tokenizes, classifies and flattens arithmetic expressions.
//!
//! Expressions are never turned into a tree. The parser rewrites the infix
//! lexeme sequence in place into prefix order, and every binary operator
//! records how far ahead its second operand starts.
//!
//! ## Examples
//!
//! ```rust
//! use fcalc_lang::{Engine, LexerOptions};
//!
//! let engine = Engine::new(LexerOptions::default()).unwrap();
//! let expr = engine.parse("x = 2 + 3 * 4").unwrap();
//!
//! assert_eq!(expr.to_string(), "= (x) + 2 * 3 4");
//! assert_eq!(expr.to_sexpr().unwrap(), "(= (x) (+ 2 (* 3 4)))");
//!
//! // Stage by stage
//! let mut lexemes = fcalc_lang::tokenize("-(1 + 2)").unwrap();
//! fcalc_lang::classify_all(&mut lexemes).unwrap();
//! fcalc_lang::flatten(&mut lexemes).unwrap();
//!
//! assert_eq!(lexemes.len(), 4);
//! ```
mod classifier;
mod compact;
mod engine;
mod error;
mod lexeme;
mod lexer;
mod number;
mod parser;

pub use classifier::error::ClassifyError;
pub use classifier::{classify, classify_all, resolve_unary_minus};
pub use compact::{CompactString, INLINE_CAPACITY};
pub use engine::Engine;
pub use error::{Error, InnerError};
pub use lexeme::{Binary, BinaryOp, Constant, Lexeme, LexemeKind, UnaryOp};
pub use lexer::Lexer;
pub use lexer::Options as LexerOptions;
pub use lexer::error::PatternError;
pub use lexer::pattern::{DEFAULT_PATTERN, Match, Matches, Pattern};
pub use number::Number;
pub use parser::error::ParseError;
pub use parser::flat::FlatExpr;
pub use parser::{MAX_NESTING, flatten};

/// Tokenizes `code` with the default pattern.
#[allow(clippy::result_large_err)]
pub fn tokenize(code: &str) -> Result<Vec<Lexeme>, error::Error> {
    Engine::new(LexerOptions::default())?.tokenize(code)
}

/// Runs the whole pipeline over `code` with the default pattern.
#[allow(clippy::result_large_err)]
pub fn parse(code: &str) -> Result<FlatExpr, error::Error> {
    Engine::new(LexerOptions::default())?.parse(code)
}
