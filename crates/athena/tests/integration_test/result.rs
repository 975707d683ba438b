//! Tests for result flattening through the public API.

use athena_lite::{flatten_rows, ResultSet, NULL_MARKER};

fn cell(v: &str) -> Option<String> {
    Some(v.to_string())
}

#[test]
fn null_cells_become_literal_null_strings() {
    // Header ["a","b"], data [["1",NULL],["2","3"]].
    let set = ResultSet {
        rows: vec![
            vec![cell("a"), cell("b")],
            vec![cell("1"), None],
            vec![cell("2"), cell("3")],
        ],
    };

    let records = flatten_rows(&set);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["a"], "1");
    assert_eq!(records[0]["b"], NULL_MARKER);
    assert_eq!(records[1]["a"], "2");
    assert_eq!(records[1]["b"], "3");
}

#[test]
fn header_is_never_part_of_the_output() {
    let set = ResultSet {
        rows: vec![vec![cell("name")], vec![cell("alice")], vec![cell("bob")]],
    };

    let records = flatten_rows(&set);

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["name"] != "name"));
}

#[test]
fn key_count_matches_header_width() {
    let set = ResultSet {
        rows: vec![
            vec![cell("a"), cell("b"), cell("c")],
            vec![None, None, None],
        ],
    };

    let records = flatten_rows(&set);

    assert_eq!(records[0].len(), 3);
    assert!(records[0].values().all(|v| v == NULL_MARKER));
}

#[test]
fn result_set_serde_roundtrip() {
    let set = ResultSet {
        rows: vec![vec![cell("a")], vec![None], vec![cell("x")]],
    };

    let json = serde_json::to_string(&set).expect("serialize");
    let back: ResultSet = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back.rows.len(), 3);
    assert_eq!(back.rows[1][0], None);
    assert_eq!(back.rows[2][0], cell("x"));
}
