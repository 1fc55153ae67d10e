use lexer_automaton_rs::{AutomatonBuilder, Dfa, GroupId};

fn compile(patterns: &[(&str, GroupId)]) -> Dfa {
    let mut builder = AutomatonBuilder::default();
    for (pattern, group_id) in patterns {
        builder
            .add_pattern(pattern, *group_id)
            .unwrap_or_else(|err| panic!("pattern {pattern:?} should register: {err}"));
    }
    builder.compile().expect("automaton should compile")
}

fn lex(dfa: &Dfa, text: &str) -> (usize, Vec<GroupId>) {
    let found = dfa.find(text);
    (found.len, found.groups.to_vec())
}

fn digit_group(first: u8) -> String {
    let digits: Vec<String> = (first..=9).map(|d| d.to_string()).collect();
    format!("({})", digits.join("|"))
}

#[test]
fn meta_free_patterns_match_themselves_in_full() {
    for (index, pattern) in ["while", "x", "hello world", "a-b=c", "ünïcödé", "{}[]"]
        .iter()
        .enumerate()
    {
        let group_id = index as GroupId + 1;
        let dfa = compile(&[(*pattern, group_id)]);
        assert_eq!(lex(&dfa, pattern), (pattern.len(), vec![group_id]));
    }
}

#[test]
fn grouped_alternatives_pick_their_own_group() {
    let dfa = compile(&[("(ab|cd)", 1), ("(ef|gh)", 2)]);
    assert_eq!(lex(&dfa, "ab"), (2, vec![1]));
    assert_eq!(lex(&dfa, "cd"), (2, vec![1]));
    assert_eq!(lex(&dfa, "gh"), (2, vec![2]));
    assert_eq!(lex(&dfa, "abc"), (2, vec![1]));
    assert_eq!(lex(&dfa, "ag"), (1, vec![]));
}

#[test]
fn repetition_inside_alternatives() {
    let dfa = compile(&[("(ab*|cd)", 1), ("(ef|g*h)", 2)]);
    assert_eq!(lex(&dfa, "a"), (1, vec![1]));
    assert_eq!(lex(&dfa, "h"), (1, vec![2]));
    assert_eq!(lex(&dfa, "abb"), (3, vec![1]));
    assert_eq!(lex(&dfa, "ggh"), (3, vec![2]));
    assert_eq!(lex(&dfa, "gih"), (1, vec![]));
}

#[test]
fn numbers_without_leading_zero_and_quoted_strings() {
    let number = format!("({}{}*)", digit_group(1), digit_group(0));
    let dfa = compile(&[(number.as_str(), 1), ("\"(.)*\"", 2)]);

    assert_eq!(lex(&dfa, "123"), (3, vec![1]));
    assert_eq!(lex(&dfa, "0123"), (0, vec![]));
    assert_eq!(lex(&dfa, "\"helloWORLD\""), (12, vec![2]));
    assert_eq!(lex(&dfa, "\"\""), (2, vec![2]));
}

#[test]
fn escaped_brace_round_trips() {
    let dfa = compile(&[("(\\{)", 1)]);
    assert_eq!(lex(&dfa, "{"), (1, vec![1]));
    assert_eq!(lex(&dfa, "\\{"), (0, vec![]));
}

#[test]
fn escaped_operators_are_plain_literals() {
    let dfa = compile(&[("a\\*", 1), ("\\(\\)", 2), ("\\.", 3)]);
    assert_eq!(lex(&dfa, "a*"), (2, vec![1]));
    assert_eq!(lex(&dfa, "aa"), (1, vec![]));
    assert_eq!(lex(&dfa, "()"), (2, vec![2]));
    assert_eq!(lex(&dfa, "."), (1, vec![3]));
    assert_eq!(lex(&dfa, "x"), (0, vec![]));
}

#[test]
fn top_level_alternation_needs_no_parentheses() {
    let dfa = compile(&[("\\+=|-=", 1)]);
    assert_eq!(lex(&dfa, "+="), (2, vec![1]));
    assert_eq!(lex(&dfa, "-="), (2, vec![1]));
}

#[test]
fn one_or_more_requires_a_first_pass() {
    let dfa = compile(&[("x(ab)+", 1)]);
    assert_eq!(lex(&dfa, "x"), (1, vec![]));
    assert_eq!(lex(&dfa, "xab"), (3, vec![1]));
    assert_eq!(lex(&dfa, "xababab"), (7, vec![1]));
}

#[test]
fn optional_group_may_be_skipped() {
    let dfa = compile(&[("colou?r", 1)]);
    assert_eq!(lex(&dfa, "color"), (5, vec![1]));
    assert_eq!(lex(&dfa, "colour"), (6, vec![1]));
    assert_eq!(lex(&dfa, "colouur"), (5, vec![]));
}

#[test]
fn wildcard_matches_multibyte_characters() {
    let dfa = compile(&[("'.'", 1)]);
    assert_eq!(lex(&dfa, "'é'"), ("'é'".len(), vec![1]));
    assert_eq!(lex(&dfa, "'ab'"), (2, vec![]));
}

#[test]
fn repeated_queries_are_identical() {
    let dfa = compile(&[("(ab*|cd)", 1), ("(ef|g*h)", 2), ("a.", 3)]);
    for text in ["abbb", "ggh", "ax", "cd", ""] {
        let first = dfa.find(text);
        for _ in 0..8 {
            assert_eq!(dfa.find(text), first);
        }
    }
}

#[test]
fn shared_accepting_states_report_every_group_ascending() {
    let dfa = compile(&[("if", 7), ("(i|j)(f|g)", 2), ("i.", 4)]);
    let found = dfa.find("if");
    assert_eq!(found.len, 2);
    assert_eq!(found.groups.as_slice(), &[2, 4, 7]);
    assert_eq!(found.winner(), Some(2));
    assert_eq!(lex(&dfa, "jg"), (2, vec![2]));
    assert_eq!(lex(&dfa, "ix"), (2, vec![4]));
}

#[test]
fn longest_walk_does_not_fall_back_to_an_earlier_accepting_prefix() {
    let dfa = compile(&[("ab", 1), ("abcd", 2)]);
    assert_eq!(lex(&dfa, "abx"), (2, vec![1]));
    assert_eq!(lex(&dfa, "abcd"), (4, vec![2]));
    // "ab" accepted on the way, but the walk ends inside "abcd".
    assert_eq!(lex(&dfa, "abc"), (3, vec![]));
    assert_eq!(lex(&dfa, "abce"), (3, vec![]));
}

#[test]
fn nullable_pattern_accepts_at_the_start_state() {
    let dfa = compile(&[("(a)*", 1)]);
    assert_eq!(lex(&dfa, ""), (0, vec![1]));
    assert_eq!(lex(&dfa, "b"), (0, vec![1]));
    assert_eq!(lex(&dfa, "aab"), (2, vec![1]));
}

#[test]
fn engine_without_patterns_never_matches() {
    let dfa = AutomatonBuilder::default()
        .compile()
        .expect("empty automaton should compile");
    assert_eq!(dfa.state_count(), 1);
    assert_eq!(lex(&dfa, ""), (0, vec![]));
    assert_eq!(lex(&dfa, "anything"), (0, vec![]));
}
