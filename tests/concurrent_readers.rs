use lexer_automaton_rs::{Dfa, Lexer};
use std::sync::Arc;

fn assert_send_sync<T: Send + Sync>() {}

fn compiled_lexer() -> Lexer {
    let lexer = Lexer::new(None);
    lexer
        .add_patterns([("(ab*|cd)", 1), ("(ef|g*h)", 2), ("\"(.)*\"", 3)])
        .expect("patterns should register");
    lexer.compile().expect("compile should succeed");
    lexer
}

#[test]
fn compiled_automaton_is_shareable() {
    assert_send_sync::<Dfa>();
    assert_send_sync::<Lexer>();
}

#[test]
fn readers_on_a_shared_snapshot_agree() {
    let lexer = compiled_lexer();
    let dfa: Arc<Dfa> = lexer.get_readonly().expect("snapshot should be available");
    let inputs = ["abbbb", "cd", "gggh", "\"quoted text\"", "gih", "nothing"];
    let expected: Vec<_> = inputs.iter().map(|text| dfa.find(text)).collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let dfa = Arc::clone(&dfa);
            let expected = &expected;
            scope.spawn(move || {
                for _ in 0..200 {
                    for (text, want) in inputs.iter().zip(expected.iter()) {
                        assert_eq!(&dfa.find(text), want);
                    }
                }
            });
        }
    });
}

#[test]
fn readers_through_the_facade_agree() {
    let lexer = compiled_lexer();
    let expected = lexer.find("abbb").expect("lexer is compiled");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(lexer.find("abbb").unwrap(), expected);
                }
            });
        }
    });
    assert_eq!(expected.len, 4);
    assert_eq!(expected.groups.as_slice(), &[1]);
}
