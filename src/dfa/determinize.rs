use std::collections::{BTreeMap, VecDeque};

use smallvec::SmallVec;

use super::interner::StateInterner;
use super::state::{Dfa, DfaState};
use super::{DfaError, DfaResult};
use crate::nfa::{Label, NfaGraph};
use crate::types::{GroupId, NodeId};

/// Every node reachable from `seeds` over epsilon edges, seeds included,
/// as a sorted list.
pub fn epsilon_closure(graph: &NfaGraph, seeds: &[NodeId]) -> Box<[NodeId]> {
    let mut visited = vec![false; graph.len()];
    let mut stack: Vec<NodeId> = Vec::with_capacity(seeds.len());
    let mut members: Vec<NodeId> = Vec::with_capacity(seeds.len());

    for &seed in seeds {
        if !visited[seed as usize] {
            visited[seed as usize] = true;
            stack.push(seed);
        }
    }

    while let Some(node) = stack.pop() {
        members.push(node);
        for target in graph.node(node).epsilon_targets() {
            if !visited[target as usize] {
                visited[target as usize] = true;
                stack.push(target);
            }
        }
    }

    members.sort_unstable();
    members.into_boxed_slice()
}

/// Subset construction over the combined pattern graph.
///
/// States are numbered in breadth-first discovery order and outgoing symbols
/// are visited in ascending order, so the same pattern set always yields the
/// same numbering.
#[tracing::instrument(level = "trace", skip(graph), fields(nodes=graph.len() as u64, patterns=pattern_count as u64))]
pub fn determinize(graph: &NfaGraph, pattern_count: usize, max_states: usize) -> DfaResult<Dfa> {
    let mut interner = StateInterner::new();
    let mut queue: VecDeque<_> = VecDeque::new();
    let mut states: Vec<DfaState> = Vec::new();

    let (start, _) = interner.intern(epsilon_closure(graph, &[NfaGraph::START]));
    queue.push_back(start);

    while let Some(id) = queue.pop_front() {
        let members: Box<[NodeId]> = match interner.resolve(id) {
            Some(members) => members.into(),
            None => unreachable!("queued state {id} was never interned"),
        };
        debug_assert_eq!(states.len(), id as usize);

        let mut moves: BTreeMap<Label, Vec<NodeId>> = BTreeMap::new();
        for &node in members.iter() {
            for (label, target) in graph.node(node).consuming_edges() {
                moves.entry(label).or_default().push(target);
            }
        }
        // A wildcard member also follows every literal the state has an edge for.
        let wildcard_targets = moves.get(&Label::Any).cloned().unwrap_or_default();

        let mut transitions = Vec::with_capacity(moves.len());
        let mut wildcard = None;
        for (label, mut targets) in moves {
            if let Label::Char(_) = label {
                targets.extend_from_slice(&wildcard_targets);
            }
            let closure = epsilon_closure(graph, &targets);
            let (target, fresh) = interner.intern(closure);
            if fresh {
                if interner.len() > max_states {
                    return Err(DfaError::StateLimitExceeded {
                        limit: max_states,
                        patterns: pattern_count,
                    });
                }
                queue.push_back(target);
            }
            match label {
                Label::Char(ch) => transitions.push((ch, target)),
                Label::Any => wildcard = Some(target),
            }
        }

        states.push(DfaState {
            transitions: transitions.into_boxed_slice(),
            wildcard,
            groups: accepting_groups(graph, &members),
        });
    }

    tracing::event!(
        tracing::Level::TRACE,
        operation = "determinize",
        states = states.len() as u64,
        "subset construction finished"
    );

    Ok(Dfa {
        states: states.into_boxed_slice(),
        start,
        pattern_count,
    })
}

fn accepting_groups(graph: &NfaGraph, members: &[NodeId]) -> Box<[GroupId]> {
    let mut groups: SmallVec<[GroupId; 4]> = members
        .iter()
        .map(|&node| graph.node(node))
        .filter(|node| node.is_terminal())
        .map(|node| node.group_id)
        .collect();
    groups.sort_unstable();
    groups.dedup();
    groups.into_iter().collect()
}
