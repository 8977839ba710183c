use super::*;
use pretty_assertions::assert_eq;

fn replay(text: &str) -> Position {
    let mut pos = Position::start(SourceId::default());
    for c in text.chars() {
        pos.advance(c);
    }
    pos
}

#[test]
fn starts_at_line_one_column_one() {
    let pos = Position::start(SourceId::new("main.qk"));
    assert_eq!((pos.line, pos.column, pos.index), (1, 1, 0));
    assert_eq!(pos.source_id.as_str(), "main.qk");
}

#[test]
fn advance_moves_column() {
    let pos = replay("abc");
    assert_eq!((pos.line, pos.column, pos.index), (1, 4, 3));
}

#[test]
fn newline_resets_column() {
    let pos = replay("ab\ncd\n");
    assert_eq!((pos.line, pos.column, pos.index), (3, 1, 6));
    assert!(pos.at_line_start());
}

#[test]
fn carriage_return_is_a_column() {
    let pos = replay("a\r\nb");
    assert_eq!((pos.line, pos.column), (2, 2));
}

#[test]
fn index_counts_bytes_column_counts_chars() {
    let pos = replay("é λ");
    assert_eq!(pos.column, 4);
    assert_eq!(pos.index, "é λ".len());
}

#[test]
fn clone_is_independent() {
    let mut live = replay("ab");
    let snapshot = live.clone();
    live.advance('c');
    assert_eq!(snapshot.column, 3);
    assert_eq!(live.column, 4);
}

#[test]
fn default_source_id_is_unknown() {
    assert_eq!(SourceId::default().as_str(), "<unknown>");
}

#[test]
fn display_includes_source() {
    let pos = replay("x\ny");
    assert_eq!(pos.to_string(), "<unknown>:2:2");
}
