mod determinize;
mod error;
mod interner;
mod matcher;
mod state;

pub use determinize::{determinize, epsilon_closure};
pub use error::{DfaError, DfaResult};
pub use interner::StateInterner;
pub use matcher::LexMatch;
pub use state::{Dfa, DfaState};
