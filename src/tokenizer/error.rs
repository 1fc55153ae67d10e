use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unsupported syntax at line {line}, column {column}: '{snippet}'")]
    UnsupportedSyntax {
        line: usize,
        column: usize,
        snippet: String,
    },
}

pub type TokenizeResult<T> = Result<T, TokenizeError>;
