use smallvec::SmallVec;

use crate::pattern::Symbol;
use crate::types::{GroupId, NodeId};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// The shared start node every pattern fans out from.
        const START = 1 << 0;
        /// Reaching this node means the owning pattern accepted.
        const TERMINAL = 1 << 1;
        /// Never consumes input; only epsilon edges leave it.
        const STRUCTURAL = 1 << 2;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Char(char),
    Any,
}

impl Label {
    pub fn from_symbol(symbol: Symbol) -> Option<Self> {
        match symbol {
            Symbol::Literal(ch) => Some(Self::Char(ch)),
            Symbol::Arbitrary => Some(Self::Any),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Epsilon(NodeId),
    Consume(Label, NodeId),
}

#[derive(Debug, Clone)]
pub struct NfaNode {
    pub symbol: Option<Symbol>,
    pub group_id: GroupId,
    pub flags: NodeFlags,
    pub edges: SmallVec<[Transition; 2]>,
}

impl NfaNode {
    pub fn new(symbol: Option<Symbol>, group_id: GroupId) -> Self {
        let flags = match symbol {
            Some(symbol) if symbol.is_consuming() => NodeFlags::empty(),
            _ => NodeFlags::STRUCTURAL,
        };
        Self {
            symbol,
            group_id,
            flags,
            edges: SmallVec::new(),
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.flags.contains(NodeFlags::TERMINAL)
    }

    pub fn epsilon_targets(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().filter_map(|edge| match edge {
            Transition::Epsilon(target) => Some(*target),
            Transition::Consume(..) => None,
        })
    }

    pub fn consuming_edges(&self) -> impl Iterator<Item = (Label, NodeId)> + '_ {
        self.edges.iter().filter_map(|edge| match edge {
            Transition::Consume(label, target) => Some((*label, *target)),
            Transition::Epsilon(_) => None,
        })
    }
}

/// Nondeterministic automaton shared by every registered pattern.
///
/// Node 0 is the start node. Each pattern owns a contiguous run of nodes
/// appended after it, reachable through one epsilon edge from the start.
#[derive(Debug, Clone)]
pub struct NfaGraph {
    nodes: Vec<NfaNode>,
}

impl Default for NfaGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl NfaGraph {
    pub const START: NodeId = 0;

    pub fn new() -> Self {
        let mut start = NfaNode::new(None, 0);
        start.flags.insert(NodeFlags::START);
        Self { nodes: vec![start] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Id the next appended node will receive.
    #[inline]
    pub fn next_id(&self) -> NodeId {
        self.nodes.len() as NodeId
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &NfaNode {
        &self.nodes[id as usize]
    }

    pub fn nodes(&self) -> &[NfaNode] {
        &self.nodes
    }

    /// Append a fully wired pattern fragment and hook its first node to the start.
    ///
    /// Fragment edges must already use absolute ids starting at [`Self::next_id`].
    pub(crate) fn append_fragment(&mut self, fragment: Vec<NfaNode>) {
        let entry = self.next_id();
        let end = entry as usize + fragment.len();
        debug_assert!(fragment.iter().all(|node| {
            node.edges.iter().all(|edge| match edge {
                Transition::Epsilon(target) | Transition::Consume(_, target) => {
                    (*target as usize) < end
                }
            })
        }));
        if fragment.is_empty() {
            return;
        }
        self.nodes.extend(fragment);
        self.nodes[Self::START as usize]
            .edges
            .push(Transition::Epsilon(entry));
    }

    pub fn terminal_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_terminal()).count()
    }
}
