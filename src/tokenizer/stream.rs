use hashbrown::HashSet as FastHashSet;
use std::sync::Arc;

use super::{Token, TokenizeError, TokenizeResult};
use crate::dfa::Dfa;
use crate::types::GroupId;

const SNIPPET_CHARS: usize = 16;

/// Line-oriented driver that turns source text into tokens with a compiled [`Dfa`].
///
/// Each line is scanned by repeatedly matching its unconsumed suffix. The
/// lowest accepting group id names the token; groups in the skip set (usually
/// whitespace and comments) are consumed without producing a token.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    dfa: Arc<Dfa>,
    skip: FastHashSet<GroupId>,
}

impl Tokenizer {
    pub fn new(dfa: Arc<Dfa>) -> Self {
        Self {
            dfa,
            skip: FastHashSet::new(),
        }
    }

    pub fn skip_groups<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = GroupId>,
    {
        self.skip.extend(groups);
        self
    }

    #[tracing::instrument(level = "trace", skip(self, source), fields(source_len=source.len() as u64))]
    pub fn tokenize(&self, source: &str) -> TokenizeResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let bytes = source.as_bytes();
        let mut line_start = 0usize;
        let mut line_no = 1usize;

        for newline in memchr::memchr_iter(b'\n', bytes) {
            self.tokenize_line(&source[line_start..newline], line_no, &mut tokens)?;
            line_start = newline + 1;
            line_no += 1;
        }
        if line_start < source.len() {
            self.tokenize_line(&source[line_start..], line_no, &mut tokens)?;
        }

        Ok(tokens)
    }

    /// Tokenize one line without its terminator, appending to `out`.
    pub fn tokenize_line(
        &self,
        line: &str,
        line_no: usize,
        out: &mut Vec<Token>,
    ) -> TokenizeResult<()> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut cursor = 0usize;
        let mut column = 1usize;

        while cursor < line.len() {
            let rest = &line[cursor..];
            let found = self.dfa.find(rest);
            let group = match found.winner() {
                Some(group) if found.len > 0 => group,
                _ => {
                    return Err(TokenizeError::UnsupportedSyntax {
                        line: line_no,
                        column,
                        snippet: rest.chars().take(SNIPPET_CHARS).collect(),
                    });
                }
            };

            let text = &rest[..found.len];
            if !self.skip.contains(&group) {
                out.push(Token::new(group, text, line_no, column));
            }

            cursor += found.len;
            column += text.chars().count();
        }

        Ok(())
    }
}
