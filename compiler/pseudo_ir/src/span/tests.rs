use super::*;

fn pos(offset: u32) -> Position {
    Position::new(offset, 0, offset)
}

#[test]
fn test_span_basic() {
    let span = Span::new(SourceId::default(), pos(10), pos(20));
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_merge() {
    let a = Span::new(SourceId::default(), pos(10), pos(20));
    let b = Span::new(SourceId::default(), pos(15), pos(30));
    let merged = a.merge(b);
    assert_eq!(merged.start.offset, 10);
    assert_eq!(merged.end.offset, 30);
}

#[test]
fn test_span_merge_keeps_positions() {
    let a = Span::new(SourceId::default(), Position::new(4, 1, 0), Position::new(6, 1, 2));
    let b = Span::new(SourceId::default(), Position::new(0, 0, 0), Position::new(2, 0, 2));
    let merged = a.merge(b);
    assert_eq!(merged.start, Position::new(0, 0, 0));
    assert_eq!(merged.end, Position::new(6, 1, 2));
}

#[test]
fn test_point_is_empty() {
    let span = Span::point(SourceId::default(), pos(3));
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn test_span_display() {
    let span = Span::new(SourceId::default(), pos(3), pos(9));
    assert_eq!(span.to_string(), "3..9");
}
