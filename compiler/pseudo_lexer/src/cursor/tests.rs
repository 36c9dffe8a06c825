use super::*;

fn cursor(text: &str) -> Cursor<'_> {
    Cursor::new(SourceId::default(), text)
}

#[test]
fn test_bump_and_current() {
    let mut c = cursor("ab");
    assert_eq!(c.current(), Some('a'));
    assert_eq!(c.bump(), Some('a'));
    assert_eq!(c.current(), Some('b'));
    assert_eq!(c.bump(), Some('b'));
    assert_eq!(c.current(), None);
    assert_eq!(c.bump(), None);
}

#[test]
fn test_eat() {
    let mut c = cursor("=>");
    assert!(!c.eat('>'));
    assert!(c.eat('='));
    assert!(c.eat('>'));
}

#[test]
fn test_skip_to_line_end_stops_before_newline() {
    let mut c = cursor("# note ü\nx");
    c.skip_to_line_end();
    assert_eq!(c.current(), Some('\n'));
    assert_eq!(c.pos().column, 8);
    assert_eq!(c.pos().line, 0);
}

#[test]
fn test_skip_to_line_end_at_eof() {
    let mut c = cursor("# trailing");
    c.skip_to_line_end();
    assert_eq!(c.current(), None);
}

#[test]
fn test_rewind_by_copy() {
    let mut c = cursor("123abc");
    let saved = c;
    c.eat_while(|ch| ch.is_ascii_digit());
    assert_eq!(c.slice_from(saved.pos()), "123");
    c = saved;
    assert_eq!(c.current(), Some('1'));
}
