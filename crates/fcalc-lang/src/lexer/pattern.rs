use std::ops::Range;

use regex_lite::Regex;

use super::error::PatternError;

/// Leftmost-first alternation of decimal literals, operators and parentheses,
/// constant keywords, and any other single non-whitespace character.
pub const DEFAULT_PATTERN: &str = r"(\d+)(?:\.(\d+))?|([+\-*/^()=√])|(pi|tau|[ieπτ])|(\S)";

/// A compiled pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns a lazy iterator over the non-overlapping matches in `input`.
    pub fn matches<'p, 'i>(&'p self, input: &'i str) -> Matches<'p, 'i> {
        Matches {
            inner: self.regex.find_iter(input),
        }
    }
}

/// One matched substring and its byte range in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'i> {
    pub text: &'i str,
    pub span: Range<usize>,
}

/// Forward-only sequence of matches; each call to `next` resumes right after
/// the previous match.
pub struct Matches<'p, 'i> {
    inner: regex_lite::Matches<'p, 'i>,
}

impl<'i> Iterator for Matches<'_, 'i> {
    type Item = Match<'i>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| Match {
            text: m.as_str(),
            span: m.range(),
        })
    }
}
