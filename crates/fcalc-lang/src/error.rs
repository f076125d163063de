use std::ops::Range;

use miette::{Diagnostic, SourceOffset, SourceSpan};

use crate::{
    classifier::error::ClassifyError,
    lexer::error::PatternError,
    parser::{MAX_NESTING, error::ParseError},
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InnerError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Represents a high-level error with diagnostic information for the user.
#[derive(PartialEq, Debug, thiserror::Error)]
#[error("{cause}")]
pub struct Error {
    /// The underlying cause of the error.
    pub cause: InnerError,
    /// The source text the error points into.
    pub source_code: String,
    /// The location in the source text for diagnostics.
    pub location: SourceSpan,
}

impl Error {
    /// Builds a diagnostic from `cause`, labelling the byte range `span` of
    /// `source_code`. Without a span the label sits at the end of the input.
    pub fn from_error(
        source_code: impl Into<String>,
        cause: InnerError,
        span: Option<Range<usize>>,
    ) -> Self {
        let source_code = source_code.into();
        let end = source_code.len();

        let location = match span {
            Some(span) => {
                let start = span.start.min(end);
                SourceSpan::new(
                    SourceOffset::from(start),
                    span.end.min(end).saturating_sub(start).max(1),
                )
            }
            None => SourceSpan::new(SourceOffset::from(end), 0),
        };

        Self {
            cause,
            source_code,
            location,
        }
    }
}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let c = match self.cause {
            InnerError::Pattern(_) => "PatternError",
            InnerError::Classify(ClassifyError::MalformedNumber(_)) => {
                "ClassifyError::MalformedNumber"
            }
            InnerError::Parse(ParseError::MalformedExpression(_)) => {
                "ParseError::MalformedExpression"
            }
            InnerError::Parse(ParseError::UnbalancedParens(_)) => "ParseError::UnbalancedParens",
            InnerError::Parse(ParseError::OperandTooFar(_)) => "ParseError::OperandTooFar",
            InnerError::Parse(ParseError::NestingTooDeep(_)) => "ParseError::NestingTooDeep",
        };

        Some(Box::new(c))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let msg = match &self.cause {
            InnerError::Pattern(PatternError { offset: Some(_), .. }) => {
                "The input must be valid UTF-8.".to_string()
            }
            InnerError::Pattern(PatternError { offset: None, .. }) => {
                "Check the tokenizer pattern for regular expression syntax errors.".to_string()
            }
            InnerError::Classify(ClassifyError::MalformedNumber(text)) => format!(
                "`{text}` starts with a digit but is not a number. Numbers look like `42` or `3.14`."
            ),
            InnerError::Parse(ParseError::MalformedExpression(_)) => {
                "Operators and operands must alternate. Check for a missing operand or two adjacent values."
                    .to_string()
            }
            InnerError::Parse(ParseError::UnbalancedParens(_)) => {
                "Every `(` needs a matching `)`.".to_string()
            }
            InnerError::Parse(ParseError::OperandTooFar(_)) => {
                "The expression is too long to encode. Split it into smaller expressions.".to_string()
            }
            InnerError::Parse(ParseError::NestingTooDeep(_)) => format!(
                "At most {MAX_NESTING} levels of parentheses are supported. Remove redundant grouping."
            ),
        };

        Some(Box::new(msg))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(
            miette::LabeledSpan::new_with_span(Some(format!("{}", self.cause)), self.location),
        )))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source_code)
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::*;
    use crate::compact::CompactString;

    #[rstest]
    #[case::inside(Some(4..5), 4, 1)]
    #[case::multi_byte(Some(2..6), 2, 4)]
    #[case::empty_span(Some(3..3), 3, 1)]
    #[case::past_end(Some(20..25), 9, 1)]
    #[case::end_of_input(None, 9, 0)]
    fn test_from_error_location(
        #[case] span: Option<Range<usize>>,
        #[case] offset: usize,
        #[case] len: usize,
    ) {
        let cause = InnerError::Parse(ParseError::MalformedExpression(0));
        let error = Error::from_error("1 + + 2 *", cause, span);

        assert_eq!(error.source_code, "1 + + 2 *");
        assert_eq!(error.location.offset(), offset);
        assert_eq!(error.location.len(), len);
    }

    #[rstest]
    #[case::pattern(
        InnerError::Pattern(PatternError::new("unclosed group", None)),
        "PatternError"
    )]
    #[case::malformed_number(
        InnerError::Classify(ClassifyError::MalformedNumber(CompactString::new("1.2.3"))),
        "ClassifyError::MalformedNumber"
    )]
    #[case::malformed_expression(
        InnerError::Parse(ParseError::MalformedExpression(2)),
        "ParseError::MalformedExpression"
    )]
    #[case::unbalanced_parens(
        InnerError::Parse(ParseError::UnbalancedParens(0)),
        "ParseError::UnbalancedParens"
    )]
    #[case::operand_too_far(
        InnerError::Parse(ParseError::OperandTooFar(1)),
        "ParseError::OperandTooFar"
    )]
    #[case::nesting_too_deep(
        InnerError::Parse(ParseError::NestingTooDeep(0)),
        "ParseError::NestingTooDeep"
    )]
    fn test_diagnostic(#[case] cause: InnerError, #[case] code: &str) {
        let error = Error::from_error("source code", cause, Some(0..1));

        assert_eq!(error.code().map(|c| c.to_string()).as_deref(), Some(code));
        assert!(error.help().is_some());
        assert!(error.source_code().is_some());
        let labels = error.labels().map(|l| l.count());
        assert_eq!(labels, Some(1));
    }

    #[test]
    fn test_display_is_transparent() {
        let cause = InnerError::Classify(ClassifyError::MalformedNumber(CompactString::new("12a")));
        let error = Error::from_error("12a", cause, Some(0..3));
        assert_eq!(error.to_string(), "Malformed number `12a`");
    }
}
