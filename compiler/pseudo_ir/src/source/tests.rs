use super::*;

#[test]
fn test_add_assigns_sequential_ids() {
    let mut map = SourceMap::new();
    let a = map.add(SourceFile::new("a.psd", "1"));
    let b = map.add(SourceFile::new("b.psd", "2"));
    assert_eq!(a.raw(), 0);
    assert_eq!(b.raw(), 1);
    assert_eq!(map.len(), 2);
    assert_eq!(map.name(b), "b.psd");
}

#[test]
fn test_unknown_id() {
    let map = SourceMap::new();
    assert!(map.get(SourceId::from_raw(3)).is_none());
    assert_eq!(map.name(SourceId::from_raw(3)), "<unknown>");
}

#[test]
fn test_line_text() {
    let file = SourceFile::new("f", "first\nsecond\n");
    assert_eq!(file.line_text(0), "first");
    assert_eq!(file.line_text(1), "second");
    assert_eq!(file.line_text(2), "");
    assert_eq!(file.line_text(9), "");
}
