use serde::{Deserialize, Serialize};

use crate::types::GroupId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub group: GroupId,
    pub text: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Token {
    pub fn new(group: GroupId, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            group,
            text: text.into(),
            line,
            column,
        }
    }
}
