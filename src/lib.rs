//! Multi-pattern lexical automaton.
//!
//! Patterns tagged with integer group ids are compiled into one DFA that
//! classifies the longest prefix of its input:
//!
//! | Syntax  | Meaning                          |
//! |---------|----------------------------------|
//! | `x`     | Literal character                |
//! | `\x`    | Escaped literal (any character)  |
//! | `.`     | Any single character             |
//! | `(…)`   | Grouping                         |
//! | `a\|b`  | Alternation                      |
//! | `x*`    | Zero or more                     |
//! | `x?`    | Zero or one                      |
//! | `x+`    | One or more                      |
//!
//! ```
//! use lexer_automaton_rs::Lexer;
//!
//! let lexer = Lexer::new(None);
//! lexer.add_pattern("(ab|cd)", 1).unwrap();
//! lexer.add_pattern("(ef|gh)", 2).unwrap();
//! lexer.compile().unwrap();
//!
//! let found = lexer.find("abc").unwrap();
//! assert_eq!(found.len, 2);
//! assert_eq!(found.groups.as_slice(), &[1]);
//! ```

pub mod dfa;
pub mod lexer;
pub mod nfa;
pub mod pattern;
pub mod tokenizer;
pub mod types;

pub use dfa::{Dfa, LexMatch};
pub use lexer::{Lexer, LexerError, LexerOptions, LexerOptionsBuilder, LexerResult};
pub use nfa::AutomatonBuilder;
pub use pattern::PatternError;
pub use tokenizer::{Token, TokenizeError, Tokenizer};
pub use types::GroupId;
