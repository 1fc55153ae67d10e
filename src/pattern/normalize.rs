use super::{PatternError, PatternResult, Symbol};

/// Turn pattern text into the symbol sequence the automaton builder consumes.
///
/// Escapes collapse to a single literal, every other character maps to its
/// operator symbol when it has one. Parenthesis balance is checked here so the
/// builder can rely on well-nested groups.
#[tracing::instrument(level = "trace", fields(pattern=%pattern))]
pub fn normalize_pattern(pattern: &str) -> PatternResult<Vec<Symbol>> {
    let spanned = normalize_pattern_with_offsets(pattern)?;
    Ok(spanned.into_iter().map(|(_, symbol)| symbol).collect())
}

/// Same as [`normalize_pattern`], keeping the byte offset each symbol starts at.
pub fn normalize_pattern_with_offsets(pattern: &str) -> PatternResult<Vec<(usize, Symbol)>> {
    let mut normalizer = Normalizer::new(pattern);
    normalizer.run()
}

struct Normalizer<'a> {
    pattern: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
}

impl<'a> Normalizer<'a> {
    fn new(pattern: &'a str) -> Self {
        let chars: Vec<(usize, char)> = pattern.char_indices().collect();
        Self {
            pattern,
            chars,
            index: 0,
        }
    }

    fn run(&mut self) -> PatternResult<Vec<(usize, Symbol)>> {
        match self.peek() {
            None => return Err(PatternError::EmptyPattern),
            Some(operator @ ('*' | '|')) => {
                return Err(PatternError::LeadingOperator {
                    pattern: self.pattern.to_string(),
                    operator,
                });
            }
            Some(_) => {}
        }

        let mut symbols = Vec::with_capacity(self.chars.len());
        let mut open_groups: Vec<usize> = Vec::new();

        while let Some(ch) = self.peek() {
            let offset = self.current_byte_index();
            if self.is_escape_char(ch) {
                symbols.push((offset, Symbol::Literal(self.consume_escape_char()?)));
                continue;
            }

            let symbol = Symbol::from_char(ch);
            match symbol {
                Symbol::GroupOpen => open_groups.push(offset),
                Symbol::GroupClose => {
                    if open_groups.pop().is_none() {
                        return Err(PatternError::UnexpectedClosingParenthesis {
                            pattern: self.pattern.to_string(),
                            index: offset,
                        });
                    }
                }
                _ => {}
            }
            symbols.push((offset, symbol));
            self.next();
        }

        if let Some(start) = open_groups.pop() {
            return Err(PatternError::UnterminatedGroup {
                pattern: self.pattern.to_string(),
                start,
            });
        }

        Ok(symbols)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).map(|(_, ch)| *ch)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    fn current_byte_index(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|(idx, _)| *idx)
            .unwrap_or(self.pattern.len())
    }

    fn is_escape_char(&self, ch: char) -> bool {
        ch == '\\'
    }

    fn consume_escape_char(&mut self) -> PatternResult<char> {
        let escape_index = self.current_byte_index();
        self.next();
        match self.next() {
            Some(ch) => Ok(ch),
            None => Err(PatternError::LoneEscapeCharacter {
                pattern: self.pattern.to_string(),
                index: escape_index,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_plain_text_to_literals() {
        let symbols = normalize_pattern("let").unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::Literal('l'),
                Symbol::Literal('e'),
                Symbol::Literal('t')
            ]
        );
    }

    #[test]
    fn maps_operators_to_meta_symbols() {
        let symbols = normalize_pattern("(a|.)*?+").unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::GroupOpen,
                Symbol::Literal('a'),
                Symbol::Choice,
                Symbol::Arbitrary,
                Symbol::GroupClose,
                Symbol::Repetition,
                Symbol::ZeroOrOne,
                Symbol::OneOrMore,
            ]
        );
    }

    #[test]
    fn escape_yields_single_literal() {
        let symbols = normalize_pattern("\\(\\*\\\\").unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::Literal('('),
                Symbol::Literal('*'),
                Symbol::Literal('\\')
            ]
        );
    }

    #[test]
    fn escaped_parenthesis_does_not_count_towards_depth() {
        assert!(normalize_pattern("(\\))").is_ok());
        assert!(normalize_pattern("\\(").is_ok());
    }

    #[test]
    fn rejects_leading_star_and_bar() {
        for (pattern, expected) in [("*a", '*'), ("|a", '|')] {
            match normalize_pattern(pattern).unwrap_err() {
                PatternError::LeadingOperator { operator, .. } => assert_eq!(operator, expected),
                other => panic!("expected LeadingOperator, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_trailing_backslash() {
        let err = normalize_pattern("ab\\").unwrap_err();
        assert_eq!(
            err,
            PatternError::LoneEscapeCharacter {
                pattern: "ab\\".to_string(),
                index: 2,
            }
        );
        assert_eq!(err.index(), Some(2));
    }

    #[test]
    fn rejects_excess_closing_parenthesis_immediately() {
        let err = normalize_pattern("(a))(").unwrap_err();
        match err {
            PatternError::UnexpectedClosingParenthesis { index, .. } => assert_eq!(index, 3),
            other => panic!("expected UnexpectedClosingParenthesis, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unterminated_group() {
        let err = normalize_pattern("a((b)").unwrap_err();
        match err {
            PatternError::UnterminatedGroup { start, .. } => assert_eq!(start, 1),
            other => panic!("expected UnterminatedGroup, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_pattern() {
        assert_eq!(normalize_pattern(""), Err(PatternError::EmptyPattern));
    }

    #[test]
    fn keeps_source_offsets_of_escapes() {
        let spanned = normalize_pattern_with_offsets("a\\.b").unwrap();
        assert_eq!(
            spanned,
            vec![
                (0, Symbol::Literal('a')),
                (1, Symbol::Literal('.')),
                (3, Symbol::Literal('b')),
            ]
        );
    }

    #[test]
    fn reports_byte_offsets_for_multibyte_text() {
        let err = normalize_pattern("é)").unwrap_err();
        assert_eq!(err.index(), Some(2));
    }
}
