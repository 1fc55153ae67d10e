use super::state::Dfa;
use crate::types::{GroupId, GroupList};

/// Outcome of one longest-match walk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexMatch {
    /// Bytes of the input consumed by the walk.
    pub len: usize,
    /// Patterns accepting in the state the walk stopped in, ascending.
    pub groups: GroupList,
}

impl LexMatch {
    pub fn new(len: usize, groups: &[GroupId]) -> Self {
        Self {
            len,
            groups: GroupList::from_slice(groups),
        }
    }

    /// Lowest accepting group id, the category a tokenizer should report.
    #[inline]
    pub fn winner(&self) -> Option<GroupId> {
        self.groups.first().copied()
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        !self.groups.is_empty()
    }
}

impl Dfa {
    /// Greedy walk from the start state over `text`.
    ///
    /// The walk stops at the first character without a transition and reports
    /// the state it is in at that point; it does not fall back to an earlier
    /// accepting prefix.
    #[tracing::instrument(level = "trace", skip(self, text), fields(input_len=text.len() as u64))]
    pub fn find(&self, text: &str) -> LexMatch {
        let mut state = self.start;
        let mut consumed = 0usize;

        for (offset, ch) in text.char_indices() {
            match self.step(state, ch) {
                Some(next) => {
                    state = next;
                    consumed = offset + ch.len_utf8();
                }
                None => break,
            }
        }

        LexMatch::new(consumed, self.groups_of(state))
    }
}
