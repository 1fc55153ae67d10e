use smallvec::{SmallVec, smallvec};

use super::graph::{Label, NfaGraph, NfaNode, NodeFlags, Transition};
use crate::dfa::{Dfa, DfaResult, determinize};
use crate::lexer::LexerOptions;
use crate::pattern::{PatternError, PatternResult, Symbol, normalize_pattern_with_offsets};
use crate::types::{GroupId, NodeId};

/// Build-phase owner of the combined automaton.
///
/// Patterns are appended one at a time; a pattern that fails to parse leaves
/// the graph untouched. [`AutomatonBuilder::compile`] consumes the builder, so
/// adding after compilation is not expressible.
#[derive(Debug)]
pub struct AutomatonBuilder {
    graph: NfaGraph,
    options: LexerOptions,
    pattern_count: usize,
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::new(LexerOptions::default())
    }
}

impl AutomatonBuilder {
    pub fn new(options: LexerOptions) -> Self {
        Self {
            graph: NfaGraph::new(),
            options,
            pattern_count: 0,
        }
    }

    #[tracing::instrument(level = "trace", skip(self), fields(pattern=%pattern, group_id=group_id))]
    pub fn add_pattern(&mut self, pattern: &str, group_id: GroupId) -> PatternResult<()> {
        if pattern.len() > self.options.max_pattern_length {
            return Err(PatternError::PatternTooLong {
                length: pattern.len(),
                limit: self.options.max_pattern_length,
            });
        }

        let symbols = normalize_pattern_with_offsets(pattern)?;
        let fragment = FragmentWiring::new(pattern, self.graph.next_id(), group_id, &symbols)
            .wire()?;
        self.graph.append_fragment(fragment);
        self.pattern_count += 1;
        Ok(())
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn node_count(&self) -> usize {
        self.graph.len()
    }

    pub fn graph(&self) -> &NfaGraph {
        &self.graph
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Determinize the current graph without giving up the builder.
    pub fn build_dfa(&self) -> DfaResult<Dfa> {
        determinize(&self.graph, self.pattern_count, self.options.max_dfa_states)
    }

    pub fn compile(self) -> DfaResult<Dfa> {
        self.build_dfa()
    }
}

#[derive(Debug)]
struct GroupFrame {
    open: NodeId,
    choices: SmallVec<[NodeId; 4]>,
}

impl GroupFrame {
    fn new(open: NodeId) -> Self {
        Self {
            open,
            choices: SmallVec::new(),
        }
    }
}

/// Wires one pattern as a linear run of nodes:
/// `entry, symbol_0 .. symbol_n-1, accept`.
///
/// Entry and accept act as an implicit group around the whole pattern so a
/// top-level `|` behaves like one inside parentheses.
struct FragmentWiring<'a> {
    pattern: &'a str,
    base: NodeId,
    symbols: &'a [(usize, Symbol)],
    nodes: Vec<NfaNode>,
}

impl<'a> FragmentWiring<'a> {
    fn new(
        pattern: &'a str,
        base: NodeId,
        group_id: GroupId,
        symbols: &'a [(usize, Symbol)],
    ) -> Self {
        let mut nodes = Vec::with_capacity(symbols.len() + 2);
        nodes.push(NfaNode::new(None, group_id));
        nodes.extend(
            symbols
                .iter()
                .map(|(_, symbol)| NfaNode::new(Some(*symbol), group_id)),
        );
        let mut accept = NfaNode::new(None, group_id);
        accept.flags.insert(NodeFlags::TERMINAL);
        nodes.push(accept);

        Self {
            pattern,
            base,
            symbols,
            nodes,
        }
    }

    fn wire(mut self) -> PatternResult<Vec<NfaNode>> {
        let entry = self.base;
        let symbols = self.symbols;
        let accept = self.base + symbols.len() as NodeId + 1;
        let mut frames: SmallVec<[GroupFrame; 4]> = smallvec![GroupFrame::new(entry)];
        // Start of the most recent complete atom, the target of a quantifier.
        let mut atom: Option<NodeId> = None;

        self.epsilon(entry, entry + 1);

        for (position, (offset, symbol)) in symbols.iter().enumerate() {
            let id = entry + 1 + position as NodeId;
            let next = id + 1;

            match *symbol {
                Symbol::Literal(_) | Symbol::Arbitrary => {
                    if let Some(label) = Label::from_symbol(*symbol) {
                        self.consume(id, label, next);
                    }
                    atom = Some(id);
                }
                Symbol::GroupOpen => {
                    self.epsilon(id, next);
                    frames.push(GroupFrame::new(id));
                    atom = None;
                }
                Symbol::Choice => {
                    if let Some(frame) = frames.last_mut() {
                        frame.choices.push(id);
                    }
                    atom = None;
                }
                Symbol::GroupClose => {
                    if frames.len() < 2 {
                        return Err(PatternError::UnexpectedClosingParenthesis {
                            pattern: self.pattern.to_string(),
                            index: *offset,
                        });
                    }
                    let Some(frame) = frames.pop() else {
                        unreachable!("implicit pattern frame is always present");
                    };
                    self.close_group(&frame, id);
                    self.epsilon(id, next);
                    atom = Some(frame.open);
                }
                Symbol::Repetition | Symbol::ZeroOrOne | Symbol::OneOrMore => {
                    let Some(start) = atom else {
                        return Err(PatternError::NothingToRepeat {
                            pattern: self.pattern.to_string(),
                            index: *offset,
                            modifier: symbol.as_char(),
                        });
                    };
                    match symbol {
                        Symbol::Repetition => {
                            self.epsilon(start, id);
                            self.epsilon(id, start);
                        }
                        Symbol::ZeroOrOne => self.epsilon(start, id),
                        _ => self.epsilon(id, start),
                    }
                    self.epsilon(id, next);
                }
            }
        }

        if frames.len() != 1 {
            let start = frames
                .last()
                .map(|frame| self.offset_of(frame.open))
                .unwrap_or_default();
            return Err(PatternError::UnterminatedGroup {
                pattern: self.pattern.to_string(),
                start,
            });
        }
        if let Some(frame) = frames.pop() {
            self.close_group(&frame, accept);
        }

        Ok(self.nodes)
    }

    /// Each branch after a `|` is entered from the group's open node, and the
    /// `|` itself skips to the close node for the branch that ends there.
    fn close_group(&mut self, frame: &GroupFrame, close: NodeId) {
        for &choice in frame.choices.iter() {
            self.epsilon(frame.open, choice + 1);
            self.epsilon(choice, close);
        }
    }

    fn offset_of(&self, id: NodeId) -> usize {
        let position = (id - self.base) as usize;
        if position == 0 {
            return 0;
        }
        self.symbols
            .get(position - 1)
            .map(|(offset, _)| *offset)
            .unwrap_or(self.pattern.len())
    }

    fn local(&mut self, id: NodeId) -> &mut NfaNode {
        &mut self.nodes[(id - self.base) as usize]
    }

    fn epsilon(&mut self, from: NodeId, to: NodeId) {
        let edge = Transition::Epsilon(to);
        let node = self.local(from);
        if !node.edges.contains(&edge) {
            node.edges.push(edge);
        }
    }

    fn consume(&mut self, from: NodeId, label: Label, to: NodeId) {
        self.local(from).edges.push(Transition::Consume(label, to));
    }
}
