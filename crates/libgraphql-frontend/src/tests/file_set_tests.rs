//! Tests for `FileSet`, `File`, `Pos` and `Position`.

use crate::FileSet;
use crate::Pos;
use crate::Position;
use proptest::prelude::*;

// =============================================================================
// Registration
// =============================================================================

#[test]
fn new_file_set_starts_at_base_one() {
    let files = FileSet::new();
    assert_eq!(files.base().get(), 1);
    assert!(files.files().is_empty());
}

/// Each file reserves `size + 1` positions so that its end-of-file position
/// is distinct from the next file's first position.
#[test]
fn add_file_reserves_size_plus_one() {
    let mut files = FileSet::new();
    assert_eq!(files.add_file("a.graphql", 10).base().get(), 1);
    assert_eq!(files.base().get(), 12);
    assert_eq!(files.add_file("b.graphql", 5).base().get(), 12);
    assert_eq!(files.base().get(), 18);
    assert_eq!(files.add_file("empty.graphql", 0).base().get(), 18);
    assert_eq!(files.base().get(), 19);
    assert_eq!(files.files().len(), 3);
}

#[test]
fn pos_none_is_invalid() {
    assert!(!Pos::NONE.is_valid());
    assert_eq!(Pos::default(), Pos::NONE);
    assert_eq!(FileSet::new().position(Pos::NONE), None);
}

// =============================================================================
// Line table
// =============================================================================

/// `add_line` ignores offsets that are not strictly increasing or that lie
/// at or beyond the end of the file.
#[test]
fn add_line_ignores_duplicate_and_out_of_range_offsets() {
    let mut files = FileSet::new();
    let file = files.add_file("lines.graphql", 20);
    assert_eq!(file.line_count(), 1);

    file.add_line(5);
    file.add_line(5);
    file.add_line(3);
    file.add_line(20);
    file.add_line(25);
    assert_eq!(file.line_count(), 2);

    file.add_line(19);
    assert_eq!(file.line_count(), 3);
    assert_eq!(file.line_start(1), Some(0));
    assert_eq!(file.line_start(2), Some(5));
    assert_eq!(file.line_start(3), Some(19));
    assert_eq!(file.line_start(0), None);
    assert_eq!(file.line_start(4), None);
}

// =============================================================================
// Position resolution
// =============================================================================

#[test]
fn position_resolves_line_and_column() {
    let mut files = FileSet::new();
    let (second_line, eof) = {
        // "ab\ncd\n"
        let file = files.add_file("x.graphql", 6);
        file.add_line(3);
        (file.pos(4), file.pos(6))
    };

    assert_eq!(
        files.position(second_line),
        Some(Position {
            filename: "x.graphql".to_string(),
            offset: 4,
            line: 2,
            column: 2,
        }),
    );

    // The end-of-file position belongs to the file.
    let eof = files.position(eof).unwrap();
    assert_eq!((eof.line, eof.column, eof.offset), (2, 4, 6));
}

#[test]
fn position_finds_owning_file() {
    let mut files = FileSet::new();
    files.add_file("first.graphql", 4);
    let pos = {
        let file = files.add_file("second.graphql", 8);
        file.add_line(2);
        file.pos(7)
    };
    files.add_file("third.graphql", 3);

    let file = files.file(pos).unwrap();
    assert_eq!(file.name(), "second.graphql");
    assert_eq!(file.offset(pos), 7);

    let position = files.position(pos).unwrap();
    assert_eq!(position.to_string(), "second.graphql:2:6");
}

#[test]
fn position_outside_every_file_is_none() {
    let mut files = FileSet::new();
    files.add_file("a.graphql", 4);
    assert_eq!(files.position(Pos::NONE + 100), None);
}

#[test]
fn position_display_forms() {
    let with_file = Position {
        filename: "q.graphql".to_string(),
        offset: 0,
        line: 3,
        column: 7,
    };
    assert_eq!(with_file.to_string(), "q.graphql:3:7");

    let without_file = Position {
        filename: String::new(),
        ..with_file.clone()
    };
    assert_eq!(without_file.to_string(), "3:7");

    let invalid_with_file = Position {
        filename: "q.graphql".to_string(),
        ..Position::default()
    };
    assert_eq!(invalid_with_file.to_string(), "q.graphql");
    assert_eq!(Position::default().to_string(), "-");
}

#[test]
#[should_panic(expected = "out of range")]
fn pos_beyond_file_size_panics() {
    let mut files = FileSet::new();
    files.add_file("small.graphql", 3).pos(4);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// For every offset in a file, the resolved column is the distance from
    /// the start of the resolved line, and that line is the last recorded
    /// line starting at or before the offset. Re-recording the same line
    /// starts does not change the table.
    #[test]
    fn position_round_trip(
        size in 1usize..256,
        mut starts in proptest::collection::vec(1usize..256, 0..16),
    ) {
        starts.sort_unstable();
        starts.dedup();

        let mut files = FileSet::new();
        let file = files.add_file("prop.graphql", size);
        for &start in &starts {
            file.add_line(start);
        }
        let recorded: Vec<usize> = (1..=file.line_count())
            .filter_map(|line| file.line_start(line))
            .collect();

        let count = file.line_count();
        for &start in &starts {
            file.add_line(start);
        }
        prop_assert_eq!(file.line_count(), count);

        for offset in 0..size {
            let position = file.position(file.pos(offset));
            let line_start = recorded[position.line - 1];
            prop_assert!(line_start <= offset);
            prop_assert_eq!(position.column, offset - line_start + 1);
            if let Some(&next) = recorded.get(position.line) {
                prop_assert!(next > offset);
            }
        }
    }
}
