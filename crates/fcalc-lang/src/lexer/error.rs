use thiserror::Error;

/// Failure reported by the pattern engine, either while compiling a pattern
/// or because the input could not be matched at a given byte offset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", match .offset {
    Some(offset) => format!("Pattern error at byte {offset}: {message}"),
    None => format!("Pattern error: {message}"),
})]
pub struct PatternError {
    pub message: String,
    pub offset: Option<usize>,
}

impl PatternError {
    pub fn new(message: impl Into<String>, offset: Option<usize>) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

impl From<regex_lite::Error> for PatternError {
    fn from(err: regex_lite::Error) -> Self {
        PatternError::new(err.to_string(), None)
    }
}

impl From<std::str::Utf8Error> for PatternError {
    fn from(err: std::str::Utf8Error) -> Self {
        PatternError::new("input is not valid UTF-8", Some(err.valid_up_to()))
    }
}
