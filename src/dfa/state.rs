use crate::types::{GroupId, StateId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState {
    /// Literal transitions sorted by character.
    pub(crate) transitions: Box<[(char, StateId)]>,
    pub(crate) wildcard: Option<StateId>,
    /// Ascending ids of the patterns accepting in this state.
    pub(crate) groups: Box<[GroupId]>,
}

impl DfaState {
    /// Literal transition for `ch` if there is one, the wildcard otherwise.
    #[inline]
    pub fn next(&self, ch: char) -> Option<StateId> {
        match self
            .transitions
            .binary_search_by_key(&ch, |&(label, _)| label)
        {
            Ok(pos) => Some(self.transitions[pos].1),
            Err(_) => self.wildcard,
        }
    }

    #[inline]
    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    #[inline]
    pub fn is_accepting(&self) -> bool {
        !self.groups.is_empty()
    }

    pub fn transitions(&self) -> &[(char, StateId)] {
        &self.transitions
    }

    pub fn wildcard(&self) -> Option<StateId> {
        self.wildcard
    }
}

/// Immutable automaton produced by subset construction.
///
/// Holds only owned plain data, so a compiled `Dfa` is `Send + Sync` and can
/// be shared behind an `Arc` by any number of readers.
#[derive(Debug, Clone)]
pub struct Dfa {
    pub(crate) states: Box<[DfaState]>,
    pub(crate) start: StateId,
    pub(crate) pattern_count: usize,
}

impl Dfa {
    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &DfaState {
        &self.states[id as usize]
    }

    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    #[inline]
    pub fn step(&self, state: StateId, ch: char) -> Option<StateId> {
        self.state(state).next(ch)
    }

    #[inline]
    pub fn groups_of(&self, state: StateId) -> &[GroupId] {
        self.state(state).groups()
    }
}
