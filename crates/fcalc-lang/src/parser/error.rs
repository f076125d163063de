use thiserror::Error;

/// Errors raised while flattening. Each variant carries the index of the
/// offending lexeme in the sequence handed to the parser; an index equal to
/// the sequence length points past its end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed expression at lexeme {0}")]
    MalformedExpression(usize),
    #[error("Unbalanced parenthesis at lexeme {0}")]
    UnbalancedParens(usize),
    #[error("Right operand of the operator at lexeme {0} is too far away to encode")]
    OperandTooFar(usize),
    #[error("Parentheses nested too deeply at lexeme {0}")]
    NestingTooDeep(usize),
}

impl ParseError {
    pub fn index(&self) -> usize {
        match self {
            ParseError::MalformedExpression(index) => *index,
            ParseError::UnbalancedParens(index) => *index,
            ParseError::OperandTooFar(index) => *index,
            ParseError::NestingTooDeep(index) => *index,
        }
    }
}
