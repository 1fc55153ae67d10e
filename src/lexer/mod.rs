mod errors;
mod options;
mod service;

pub use errors::{LexerError, LexerResult};
pub use options::{
    DEFAULT_MAX_DFA_STATES, DEFAULT_MAX_PATTERN_LENGTH, LexerOptions, LexerOptionsBuilder,
    LexerOptionsError,
};
pub use service::Lexer;
