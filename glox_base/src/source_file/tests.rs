use std::sync::Arc;

use super::{Location, SourceFile, Span};

#[test]
fn test_get_line_byte_positions() {
    let text = "Hello\nworld\r\n!\rtes";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..6, 6..13, 13..18]);
}

#[test]
fn test_trailing_new_line_opens_an_empty_line() {
    let byte_positions = super::get_line_byte_positions("a\n");
    assert_eq!(byte_positions, vec![0..2, 2..2]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "print \"hi\";\nvar x = 1;";
    let source_file = SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE);
    assert_eq!(source_file.line_number(), 2);
    assert_eq!(source_file.get_line(2), Some("var x = 1;"));
}

#[test]
fn test_empty_mapped_file() {
    let source_file = SourceFile::temp("").unwrap();
    assert_eq!(source_file.content(), "");
    assert_eq!(source_file.line_number(), 1);
}

#[test]
fn test_in_memory_file() {
    let source_file = SourceFile::from_string("1 + 2\n", "<stdin>");
    assert_eq!(source_file.content(), "1 + 2\n");
    assert_eq!(source_file.full_path().to_str(), Some("<stdin>"));
    assert_eq!(source_file.get_line(0), None);
    assert_eq!(source_file.get_line(1), Some("1 + 2\n"));
    assert_eq!(source_file.get_line(3), None);
}

#[test]
fn test_get_location() {
    let source_file = SourceFile::from_string("ab\nçd\n", "test");

    assert_eq!(
        source_file.get_location(0),
        Some(Location { line: 1, column: 1 })
    );
    assert_eq!(
        source_file.get_location(2),
        Some(Location { line: 1, column: 3 })
    );
    // `ç` takes two bytes but one column
    assert_eq!(
        source_file.get_location(5),
        Some(Location { line: 2, column: 2 })
    );
    assert_eq!(source_file.get_location(4), None);
    assert_eq!(
        source_file.get_location(source_file.content().len()),
        Some(Location { line: 3, column: 1 })
    );
}

#[test]
fn test_span() {
    let source_file = SourceFile::from_string("var éa = 1;", "test");

    let span = Span::new(source_file.clone(), 4, 7).unwrap();
    assert_eq!(span.str(), "éa");
    assert_eq!(span.start_location(), Location { line: 1, column: 5 });

    assert!(Span::new(source_file.clone(), 5, 7).is_none());
    assert!(Span::new(source_file.clone(), 7, 4).is_none());
    assert!(Span::new(source_file.clone(), 0, 100).is_none());

    let other = SourceFile::from_string("var éa = 1;", "test");
    assert_ne!(span, Span::new(other, 4, 7).unwrap());
    assert_eq!(span, Span::new(Arc::clone(&source_file), 4, 7).unwrap());
}

#[test]
fn test_iterator_lookahead() {
    let source_file = SourceFile::from_string("1.5", "test");
    let mut iter = source_file.iter();

    assert_eq!(iter.next(), Some((0, '1')));
    assert_eq!(iter.peek(), Some((1, '.')));
    assert_eq!(iter.peek_second(), Some((2, '5')));
    assert!(!iter.next_if_eq('5'));
    assert!(iter.next_if_eq('.'));
    assert_eq!(iter.offset(), 2);
    assert_eq!(iter.span_from(0).str(), "1.");

    iter.next();
    assert_eq!(iter.peek(), None);
    assert_eq!(iter.peek_second(), None);
    assert_eq!(iter.offset(), 3);
    assert_eq!(iter.span_from(2).str(), "5");
}
