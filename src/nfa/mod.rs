mod builder;
mod graph;

pub use builder::AutomatonBuilder;
pub use graph::{Label, NfaGraph, NfaNode, NodeFlags, Transition};
