use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("pattern '{pattern}' starts with '{operator}', which has nothing to apply to")]
    LeadingOperator { pattern: String, operator: char },
    #[error("pattern '{pattern}' ends with a lone escape character at index {index}")]
    LoneEscapeCharacter { pattern: String, index: usize },
    #[error("pattern '{pattern}' has an unexpected closing parenthesis at index {index}")]
    UnexpectedClosingParenthesis { pattern: String, index: usize },
    #[error("pattern '{pattern}' has an unterminated group starting at index {start}")]
    UnterminatedGroup { pattern: String, start: usize },
    #[error("quantifier '{modifier}' at index {index} in pattern '{pattern}' has nothing to repeat")]
    NothingToRepeat {
        pattern: String,
        index: usize,
        modifier: char,
    },
    #[error("pattern of {length} bytes exceeds the configured limit of {limit}")]
    PatternTooLong { length: usize, limit: usize },
}

impl PatternError {
    /// Byte offset of the offending character, when the error points at one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::LoneEscapeCharacter { index, .. }
            | Self::UnexpectedClosingParenthesis { index, .. }
            | Self::NothingToRepeat { index, .. } => Some(*index),
            Self::UnterminatedGroup { start, .. } => Some(*start),
            Self::LeadingOperator { .. } => Some(0),
            Self::EmptyPattern | Self::PatternTooLong { .. } => None,
        }
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
