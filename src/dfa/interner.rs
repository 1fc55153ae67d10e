use hashbrown::HashMap as FastHashMap;

use crate::types::{NodeId, StateId};

/// Assigns dense ids to epsilon closures.
///
/// Keys are sorted node lists, so two closures share an id only when their
/// member sets are equal. The hash only narrows the lookup.
#[derive(Debug, Default)]
pub struct StateInterner {
    map: FastHashMap<Box<[NodeId]>, StateId>,
    rev: Vec<Box<[NodeId]>>,
}

impl StateInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `members` and whether it was newly created.
    pub fn intern(&mut self, members: Box<[NodeId]>) -> (StateId, bool) {
        debug_assert!(members.windows(2).all(|pair| pair[0] < pair[1]));
        if let Some(&id) = self.map.get(&members) {
            return (id, false);
        }

        let id = self.rev.len() as StateId;
        self.rev.push(members.clone());
        self.map.insert(members, id);
        (id, true)
    }

    #[inline]
    pub fn resolve(&self, id: StateId) -> Option<&[NodeId]> {
        self.rev.get(id as usize).map(|members| members.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rev.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rev.is_empty()
    }
}
