use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 4096;
pub const DEFAULT_MAX_DFA_STATES: usize = 65_536;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerOptions {
    /// Longest pattern text accepted by `add_pattern`, in bytes.
    pub max_pattern_length: usize,
    /// Upper bound on states produced by subset construction.
    pub max_dfa_states: usize,
    /// Emit compile statistics at DEBUG instead of TRACE.
    pub debug: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
            max_dfa_states: DEFAULT_MAX_DFA_STATES,
            debug: false,
        }
    }
}

impl LexerOptions {
    pub fn builder() -> LexerOptionsBuilder {
        LexerOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), LexerOptionsError> {
        if self.max_pattern_length == 0 {
            return Err(LexerOptionsError::MaxPatternLengthInvalid {
                provided: self.max_pattern_length,
            });
        }
        if self.max_dfa_states == 0 {
            return Err(LexerOptionsError::MaxDfaStatesInvalid {
                provided: self.max_dfa_states,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct LexerOptionsBuilder {
    options: LexerOptions,
}

impl LexerOptionsBuilder {
    pub fn max_pattern_length(mut self, value: usize) -> Self {
        self.options.max_pattern_length = value;
        self
    }

    pub fn max_dfa_states(mut self, value: usize) -> Self {
        self.options.max_dfa_states = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<LexerOptions, LexerOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexerOptionsError {
    #[error("max_pattern_length must be at least 1 (got {provided})")]
    MaxPatternLengthInvalid { provided: usize },
    #[error("max_dfa_states must be at least 1 (got {provided})")]
    MaxDfaStatesInvalid { provided: usize },
}
