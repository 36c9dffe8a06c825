use super::*;

#[test]
fn test_advance_plain_char() {
    let pos = Position::START.advance('a');
    assert_eq!(pos, Position::new(1, 0, 1));
}

#[test]
fn test_advance_newline_resets_column() {
    let pos = Position::START.advance('a').advance('b').advance('\n');
    assert_eq!(pos, Position::new(3, 1, 0));
    let pos = pos.advance('c');
    assert_eq!(pos, Position::new(4, 1, 1));
}

#[test]
fn test_advance_multibyte_counts_one_column() {
    let pos = Position::START.advance('é');
    assert_eq!(pos.offset, 2);
    assert_eq!(pos.column, 1);
}

#[test]
fn test_advance_leaves_original_untouched() {
    let start = Position::new(5, 2, 3);
    let next = start.advance('x');
    assert_eq!(start, Position::new(5, 2, 3));
    assert!(next.offset > start.offset);
}

#[test]
fn test_debug_is_one_based() {
    assert_eq!(format!("{:?}", Position::new(7, 0, 4)), "1:5@7");
}
