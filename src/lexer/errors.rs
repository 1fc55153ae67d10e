use crate::dfa::DfaError;
use crate::lexer::LexerOptionsError;
use crate::pattern::PatternError;
use crate::types::GroupId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexerError {
    #[error("lexer is compiled; cannot add pattern '{pattern}' for group {group_id}")]
    AddWhileCompiled { pattern: String, group_id: GroupId },
    #[error("lexer is compiled; cannot add {count} patterns in bulk")]
    BulkAddWhileCompiled { count: usize },
    #[error("lexer is already compiled")]
    AlreadyCompiled,
    #[error("lexer is not compiled; cannot perform match")]
    FindWhileMutable,
    #[error("lexer is not compiled; readonly automaton is unavailable")]
    ReadOnlyUnavailable,
    #[error("invalid pattern for group {group_id}: {source}")]
    InvalidPattern {
        group_id: GroupId,
        #[source]
        source: PatternError,
    },
    #[error(transparent)]
    Dfa(#[from] DfaError),
    #[error(transparent)]
    Options(#[from] LexerOptionsError),
}

pub type LexerResult<T> = Result<T, LexerError>;
