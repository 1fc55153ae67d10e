use crate::dfa::{Dfa, LexMatch};
use crate::lexer::{LexerError, LexerOptions, LexerResult};
use crate::nfa::AutomatonBuilder;
use crate::types::GroupId;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::OnceLock;

#[derive(Debug)]
struct LexerState {
    builder: AutomatonBuilder,
    compiled: OnceLock<Arc<Dfa>>,
}

impl LexerState {
    fn new(options: LexerOptions) -> Self {
        Self {
            builder: AutomatonBuilder::new(options),
            compiled: OnceLock::new(),
        }
    }
}

/// Thread-safe two-phase front end over [`AutomatonBuilder`] and [`Dfa`].
///
/// Patterns are added until [`Lexer::compile`]; afterwards only lookups are
/// accepted and every lookup reads the same immutable automaton.
#[derive(Debug)]
pub struct Lexer {
    inner: RwLock<LexerState>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Lexer {
    pub fn new(options: Option<LexerOptions>) -> Self {
        let state = LexerState::new(options.unwrap_or_default());
        Self {
            inner: RwLock::new(state),
        }
    }

    pub fn try_new(options: LexerOptions) -> LexerResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn add_pattern(&self, pattern: &str, group_id: GroupId) -> LexerResult<()> {
        let mut guard = self.inner.write();

        if guard.compiled.get().is_some() {
            return Err(LexerError::AddWhileCompiled {
                pattern: pattern.to_string(),
                group_id,
            });
        }

        guard
            .builder
            .add_pattern(pattern, group_id)
            .map_err(|source| LexerError::InvalidPattern { group_id, source })
    }

    /// Register several patterns, stopping at the first invalid one.
    ///
    /// Patterns before the failing entry stay registered.
    pub fn add_patterns<I, S>(&self, entries: I) -> LexerResult<usize>
    where
        I: IntoIterator<Item = (S, GroupId)>,
        S: AsRef<str>,
    {
        let mut guard = self.inner.write();

        if guard.compiled.get().is_some() {
            let count = entries.into_iter().count();
            return Err(LexerError::BulkAddWhileCompiled { count });
        }

        let mut added = 0usize;
        for (pattern, group_id) in entries {
            guard
                .builder
                .add_pattern(pattern.as_ref(), group_id)
                .map_err(|source| LexerError::InvalidPattern { group_id, source })?;
            added += 1;
        }
        Ok(added)
    }

    /// Determinize the registered patterns and switch to the query phase.
    ///
    /// The pattern graph is dropped once the automaton is built. On failure the
    /// lexer stays in the build phase with its patterns intact.
    pub fn compile(&self) -> LexerResult<()> {
        let mut guard = self.inner.write();

        if guard.compiled.get().is_some() {
            return Err(LexerError::AlreadyCompiled);
        }

        let dfa = guard.builder.build_dfa()?;
        let options = guard.builder.options().clone();
        if options.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "compile",
                patterns = dfa.pattern_count() as u64,
                nodes = guard.builder.node_count() as u64,
                states = dfa.state_count() as u64,
                "lexer compiled"
            );
        } else {
            tracing::event!(
                tracing::Level::TRACE,
                operation = "compile",
                patterns = dfa.pattern_count() as u64,
                states = dfa.state_count() as u64
            );
        }

        guard.builder = AutomatonBuilder::new(options);
        let _ = guard.compiled.set(Arc::new(dfa));
        Ok(())
    }

    pub fn find(&self, text: &str) -> LexerResult<LexMatch> {
        let guard = self.inner.read();

        match guard.compiled.get() {
            Some(dfa) => Ok(dfa.find(text)),
            None => Err(LexerError::FindWhileMutable),
        }
    }

    pub fn get_readonly(&self) -> LexerResult<Arc<Dfa>> {
        let guard = self.inner.read();

        match guard.compiled.get() {
            Some(dfa) => Ok(dfa.clone()),
            None => Err(LexerError::ReadOnlyUnavailable),
        }
    }

    pub fn is_compiled(&self) -> bool {
        self.inner.read().compiled.get().is_some()
    }

    pub fn pattern_count(&self) -> usize {
        let guard = self.inner.read();

        match guard.compiled.get() {
            Some(dfa) => dfa.pattern_count(),
            None => guard.builder.pattern_count(),
        }
    }
}
