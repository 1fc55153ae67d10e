use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DfaError {
    #[error(
        "subset construction exceeded the limit of {limit} states while compiling {patterns} patterns"
    )]
    StateLimitExceeded { limit: usize, patterns: usize },
}

pub type DfaResult<T> = Result<T, DfaError>;
