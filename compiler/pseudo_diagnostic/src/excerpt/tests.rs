use super::*;
use pretty_assertions::assert_eq;
use pseudo_ir::{Position, SourceId};

fn span(start: (u32, u32, u32), end: (u32, u32, u32)) -> Span {
    Span::new(
        SourceId::default(),
        Position::new(start.0, start.1, start.2),
        Position::new(end.0, end.1, end.2),
    )
}

#[test]
fn test_single_line_span() {
    let file = SourceFile::new("t", "PRINT(5/0)");
    let out = caret_excerpt(&file, span((8, 0, 8), (9, 0, 9)));
    assert_eq!(out, "PRINT(5/0)\n        ^");
}

#[test]
fn test_empty_span_gets_one_caret() {
    let file = SourceFile::new("t", "1 +");
    let out = caret_excerpt(&file, span((3, 0, 3), (3, 0, 3)));
    assert_eq!(out, "1 +\n   ^");
}

#[test]
fn test_multi_line_span() {
    let file = SourceFile::new("t", "ab\ncdef");
    let out = caret_excerpt(&file, span((1, 0, 1), (5, 1, 2)));
    assert_eq!(out, "ab\n ^\ncdef\n^^");
}

#[test]
fn test_tabs_become_spaces() {
    let file = SourceFile::new("t", "\tx");
    let out = caret_excerpt(&file, span((1, 0, 1), (2, 0, 2)));
    assert_eq!(out, " x\n ^");
}
