use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Literal(char),
    Choice,
    Repetition,
    ZeroOrOne,
    OneOrMore,
    Arbitrary,
    GroupOpen,
    GroupClose,
}

impl Symbol {
    pub fn from_char(ch: char) -> Self {
        match ch {
            '|' => Self::Choice,
            '*' => Self::Repetition,
            '?' => Self::ZeroOrOne,
            '+' => Self::OneOrMore,
            '.' => Self::Arbitrary,
            '(' => Self::GroupOpen,
            ')' => Self::GroupClose,
            other => Self::Literal(other),
        }
    }

    /// Symbols that advance the input when matched.
    #[inline]
    pub fn is_consuming(&self) -> bool {
        matches!(self, Self::Literal(_) | Self::Arbitrary)
    }

    #[inline]
    pub fn is_quantifier(&self) -> bool {
        matches!(self, Self::Repetition | Self::ZeroOrOne | Self::OneOrMore)
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Literal(ch) => *ch,
            Self::Choice => '|',
            Self::Repetition => '*',
            Self::ZeroOrOne => '?',
            Self::OneOrMore => '+',
            Self::Arbitrary => '.',
            Self::GroupOpen => '(',
            Self::GroupClose => ')',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(ch) if Symbol::from_char(*ch) != *self || *ch == '\\' => {
                write!(f, "\\{ch}")
            }
            other => write!(f, "{}", other.as_char()),
        }
    }
}
