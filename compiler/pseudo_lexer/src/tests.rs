#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(text: &str) -> Vec<TokenKind> {
    lex(SourceId::default(), text)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_string())
}

#[test]
fn test_simple_assignment() {
    assert_eq!(
        kinds("VAR a = 1 + 2.5"),
        vec![
            TokenKind::Keyword(Keyword::Var),
            ident("a"),
            TokenKind::Eq,
            TokenKind::Int(1),
            TokenKind::Plus,
            TokenKind::float(2.5),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_two_char_operators() {
    assert_eq!(
        kinds("** == != <= >= -> * = < > -"),
        vec![
            TokenKind::Pow,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::Arrow,
            TokenKind::Mul,
            TokenKind::Eq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Minus,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_percent_and_caret() {
    assert_eq!(
        kinds("7 % 2 ^ 3"),
        vec![
            TokenKind::Int(7),
            TokenKind::Keyword(Keyword::Mod),
            TokenKind::Int(2),
            TokenKind::Pow,
            TokenKind::Int(3),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_separators() {
    assert_eq!(
        kinds("a;b\nc"),
        vec![
            ident("a"),
            TokenKind::Newline,
            ident("b"),
            TokenKind::Newline,
            ident("c"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comment_keeps_newline() {
    assert_eq!(
        kinds("1 # one\n2"),
        vec![
            TokenKind::Int(1),
            TokenKind::Newline,
            TokenKind::Int(2),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(kinds("1 # done"), vec![TokenKind::Int(1), TokenKind::Eof]);
}

#[test]
fn test_number_pivots_to_identifier() {
    assert_eq!(kinds("12abc"), vec![ident("12abc"), TokenKind::Eof]);
}

#[test]
fn test_second_dot_ends_number() {
    let tokens = lex(SourceId::default(), "1.2.3");
    // `1.2` is a float, then `.` cannot start a token.
    let err = tokens.unwrap_err();
    assert_eq!(err.kind, LexErrorKind::IllegalChar('.'));
    assert_eq!(err.span.start.offset, 3);
}

#[test]
fn test_float_then_pivot() {
    // `1.5x` rewinds to `1`, which is an identifier-shaped run ending at `.`
    let err = lex(SourceId::default(), "1.5x").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::IllegalChar('.'));
}

#[test]
fn test_huge_integer_becomes_float() {
    let toks = kinds("99999999999999999999");
    assert_eq!(toks[0], TokenKind::float(1e20));
}

#[test]
fn test_keywords_and_constants() {
    assert_eq!(
        kinds("FUN PROCEDURE TRUE"),
        vec![
            TokenKind::Keyword(Keyword::Fun),
            TokenKind::Keyword(Keyword::Procedure),
            ident("TRUE"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        kinds(r#""a\nb\tc\"d\\e\q""#),
        vec![TokenKind::Str("a\nb\tc\"d\\eq".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_unterminated_string_runs_to_end() {
    assert_eq!(
        kinds("\"open ended"),
        vec![TokenKind::Str("open ended".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_illegal_character() {
    let err = lex(SourceId::default(), "a @ b").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::IllegalChar('@'));
    assert_eq!(err.span.to_range(), 2..3);
}

#[test]
fn test_bang_without_equals() {
    let err = lex(SourceId::default(), "a ! b").unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::ExpectedChar {
            expected: '=',
            after: '!'
        }
    );
    assert_eq!(err.span.start.offset, 2);
}

#[test]
fn test_eof_span_is_point_at_end() {
    let tokens = lex(SourceId::default(), "x\n").unwrap();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert!(eof.span.is_empty());
    assert_eq!(eof.span.start.offset, 2);
    assert_eq!(eof.span.start.line, 1);
}

#[test]
fn test_line_and_column_tracking() {
    let tokens = lex(SourceId::default(), "a\n  bb").unwrap();
    let bb = &tokens[2];
    assert_eq!(bb.span.start.line, 1);
    assert_eq!(bb.span.start.column, 2);
    assert_eq!(bb.span.end.column, 4);
}

fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..1_000_000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
        "[a-z_][a-z0-9_]{0,8}",
        "\"[a-z ]{0,8}\"",
        prop::sample::select(vec!["+", "-", "*", "/", "**", "==", "!=", "<=", ">=", "->", "(", ")", "[", "]", ","])
            .prop_map(str::to_string),
    ]
}

proptest! {
    #[test]
    fn prop_span_covers_lexeme(words in prop::collection::vec(lexeme(), 1..20)) {
        let text = words.join(" ");
        let tokens = lex(SourceId::default(), &text).unwrap();
        prop_assert_eq!(tokens.len(), words.len() + 1);
        for (token, word) in tokens.iter().zip(&words) {
            prop_assert_eq!(&text[token.span.to_range()], word.as_str());
        }
    }
}
