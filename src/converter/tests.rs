use super::field_functions::{
    clean_text, coordinate_literal, escape_sql_literal, hole_count_literal, is_all_digits,
    is_coordinate_shape, postal_code_literal, quote_literal,
};
use super::*;
use crate::course::CourseRecord;
use std::borrow::Cow;

const PEBBLE_SQL: &str = "INSERT INTO courses (id, name, city, state_province, country, postal_code, hole_count, latitude, longitude, is_user_submitted, approved, created_at, updated_at) VALUES ('pebble', 'Pebble Beach', 'Pebble Beach', 'CA', 'US', '93953', 18, 36.5725, -121.9486, FALSE, TRUE, NOW(), NOW());";

fn pebble() -> CourseRecord {
    CourseRecord::from_pairs([
        ("id", "pebble"),
        ("name", "Pebble Beach"),
        ("city", "Pebble Beach"),
        ("state", "CA"),
        ("country", "US"),
        ("zip", "93953"),
        ("holeCount", "18"),
        ("latitude", "36.5725"),
        ("longitude", "-121.9486"),
    ])
}

/// 把 `''` 还原为 `'`
fn unescape(literal: &str) -> String {
    literal.replace("''", "'")
}

#[test]
fn test_clean_text() {
    assert_eq!(clean_text("plain"), "plain");
    assert_eq!(clean_text("  padded\t"), "padded");
    assert_eq!(clean_text("\"quoted\""), "quoted");
    assert_eq!(clean_text("\" inner space \""), "inner space");
    assert_eq!(clean_text("a\"b\"c"), "abc");
    assert_eq!(clean_text("\"\""), "");
    assert_eq!(clean_text("   "), "");
}

#[test]
fn test_is_all_digits() {
    assert!(is_all_digits("9"));
    assert!(is_all_digits("0018"));
    assert!(!is_all_digits(""));
    assert!(!is_all_digits("abc"));
    assert!(!is_all_digits("12.5"));
    assert!(!is_all_digits("-9"));
    assert!(!is_all_digits("٣"));
}

#[test]
fn test_hole_count_literal() {
    assert_eq!(hole_count_literal(""), "18");
    assert_eq!(hole_count_literal("abc"), "18");
    assert_eq!(hole_count_literal("12.5"), "18");
    assert_eq!(hole_count_literal("9"), "9");
    assert_eq!(hole_count_literal("27"), "27");
}

#[test]
fn test_coordinate_shape() {
    assert!(is_coordinate_shape("40.7128"));
    assert!(is_coordinate_shape("-121.9486"));
    assert!(is_coordinate_shape("0"));
    assert!(is_coordinate_shape("5."));
    assert!(is_coordinate_shape("-.5"));

    // `--` 会变成 SQL 注释
    assert!(!is_coordinate_shape("--1.2.3"));
    assert!(!is_coordinate_shape("1--"));
    assert!(!is_coordinate_shape("1-2"));
    assert!(!is_coordinate_shape("1.2.3"));
    assert!(!is_coordinate_shape(""));
    assert!(!is_coordinate_shape("-."));
    assert!(!is_coordinate_shape("-"));
    assert!(!is_coordinate_shape("."));
    assert!(!is_coordinate_shape("abc"));
    assert!(!is_coordinate_shape("1e5"));
    assert!(!is_coordinate_shape("+40.1"));
    assert!(!is_coordinate_shape("40.1 N"));
}

#[test]
fn test_coordinate_literal() {
    assert_eq!(coordinate_literal("40.7128"), "40.7128");
    assert_eq!(coordinate_literal(""), "NULL");
    assert_eq!(coordinate_literal("abc"), "NULL");
}

#[test]
fn test_escape_sql_literal() {
    assert!(matches!(escape_sql_literal("no quotes"), Cow::Borrowed(_)));
    assert_eq!(escape_sql_literal("O'Brien"), "O''Brien");
    assert_eq!(escape_sql_literal("''"), "''''");
    assert_eq!(quote_literal("it's"), "'it''s'");
    assert_eq!(quote_literal(""), "''");
}

#[test]
fn test_postal_code_literal() {
    assert_eq!(postal_code_literal(""), "NULL");
    assert_eq!(postal_code_literal("93953"), "'93953'");
    assert_eq!(postal_code_literal("K1A 0'B6"), "'K1A 0''B6'");
}

#[test]
fn test_convert_pebble_beach() {
    assert_eq!(convert(&pebble()).as_deref(), Some(PEBBLE_SQL));
}

#[test]
fn test_convert_skips_missing_required_fields() {
    for field in ["id", "name", "city", "state"] {
        let mut record = pebble();
        assert!(record.set(field, ""));
        assert!(convert(&record).is_none(), "empty {field} should be skipped");

        let mut record = pebble();
        assert!(record.set(field, " \"  \" "));
        assert!(convert(&record).is_none(), "quote-only {field} should be skipped");
    }
}

#[test]
fn test_convert_optional_fields_do_not_gate() {
    let record = CourseRecord::from_pairs([
        ("id", "x"),
        ("name", "Y"),
        ("city", "Z"),
        ("state", "W"),
        ("country", ""),
        ("zip", ""),
        ("holeCount", "abc"),
        ("latitude", "abc"),
        ("longitude", ""),
    ]);
    let sql = convert(&record).unwrap();
    assert!(sql.ends_with("VALUES ('x', 'Y', 'Z', 'W', 'US', NULL, 18, NULL, NULL, FALSE, TRUE, NOW(), NOW());"));
}

#[test]
fn test_convert_country() {
    let mut record = pebble();
    record.country = "CA".to_string();
    assert!(convert(&record).unwrap().contains("'CA', 'CA', '93953'"));

    record.country = "\"\"".to_string();
    assert!(convert(&record).unwrap().contains("'CA', 'US', '93953'"));
}

#[test]
fn test_convert_hole_count() {
    let mut record = pebble();
    for (raw, expected) in [("", "18"), ("abc", "18"), ("12.5", "18"), ("9", "9"), (" 9 ", "9")] {
        record.hole_count = raw.to_string();
        let sql = convert(&record).unwrap();
        assert!(
            sql.contains(&format!("'93953', {expected}, 36.5725")),
            "holeCount {raw:?} -> {sql}"
        );
    }
}

#[test]
fn test_convert_coordinates_are_independent() {
    let mut record = pebble();
    record.latitude = "40.7128".to_string();
    record.longitude = "west".to_string();
    let sql = convert(&record).unwrap();
    assert!(sql.contains(", 18, 40.7128, NULL, FALSE"));
}

#[test]
fn test_convert_escaping_round_trip() {
    let record = CourseRecord::from_pairs([
        ("id", "o'brien-'s"),
        ("name", " \"Bob's\" 'Links' "),
        ("city", "L'Isle"),
        ("state", "QC"),
        ("country", "C'A"),
        ("zip", "'"),
    ]);
    let sql = convert(&record).unwrap();
    assert!(sql.contains(
        "VALUES ('o''brien-''s', 'Bob''s ''Links''', 'L''Isle', 'QC', 'C''A', '''', 18, NULL, NULL,"
    ));

    let cleaned = record.clean();
    for (raw, expected) in [
        ("o''brien-''s", cleaned.id.as_str()),
        ("Bob''s ''Links''", cleaned.name.as_str()),
        ("L''Isle", cleaned.city.as_str()),
        ("''", cleaned.zip.as_str()),
    ] {
        assert_eq!(unescape(raw), expected);
    }
}

#[test]
fn test_coordinates_are_trimmed_and_unquoted() {
    let mut record = pebble();
    record.latitude = " -0.5 ".to_string();
    let sql = convert(&record).unwrap();
    assert!(sql.contains(", 18, -0.5, -121.9486,"));

    record.latitude = "--1.2.3".to_string();
    let sql = convert(&record).unwrap();
    assert!(sql.contains(", 18, NULL, -121.9486,"));
}

#[test]
fn test_convert_into_table() {
    let sql = convert_into_table(&pebble(), "staging_courses").unwrap();
    assert!(sql.starts_with("INSERT INTO staging_courses (id, name,"));
    assert!(sql.ends_with(PEBBLE_SQL.split_once(" VALUES ").unwrap().1));
}

#[test]
fn test_course_reader_header_lookup() {
    let csv = "zip,extra,id,name,city,state\n93953,ignored,pebble,Pebble Beach,Pebble Beach,CA\n";
    let reader = CourseReader::new(csv.as_bytes()).unwrap();
    assert!(!reader.columns().is_empty());

    let records: Vec<_> = reader.collect::<crate::Result<_>>().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].zip, "93953");
    assert_eq!(records[0].id, "pebble");
    assert_eq!(records[0].country, "US");
    assert_eq!(records[0].hole_count, "18");
}

#[test]
fn test_course_reader_ragged_rows() {
    let csv = "id,name,city,state,holeCount\nshort,Short Row\nlong,Long,Town,ST,9,extra,more\n";
    let records: Vec<_> = CourseReader::new(csv.as_bytes())
        .unwrap()
        .collect::<crate::Result<_>>()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].city, "");
    assert_eq!(records[0].hole_count, "18");
    assert_eq!(records[1].hole_count, "9");
}

#[test]
fn test_course_reader_quoted_fields() {
    let csv = "id,name,city,state\n\"a\",\"Smith, John \"\"Jack\"\" Park\",\"Reno\",NV\n";
    let records: Vec<_> = CourseReader::new(csv.as_bytes())
        .unwrap()
        .collect::<crate::Result<_>>()
        .unwrap();
    assert_eq!(records[0].name, "Smith, John \"Jack\" Park");
    assert_eq!(records[0].clean().name, "Smith, John Jack Park");
}

#[test]
fn test_course_reader_unrecognized_headers() {
    let reader = CourseReader::new("a,b\n1,2\n".as_bytes()).unwrap();
    assert!(reader.columns().is_empty());
}

#[test]
fn test_statement_iter_counts() {
    let csv = "id,name,city,state\na,A,X,S\n,B,X,S\nc,C,X,\nd,D,X,S\n";
    let mut iter = StatementIter::new(csv.as_bytes()).unwrap();
    let statements: Vec<String> = iter.by_ref().collect::<crate::Result<_>>().unwrap();

    assert_eq!(statements.len(), 2);
    assert!(statements[0].contains("VALUES ('a',"));
    assert!(statements[1].contains("VALUES ('d',"));
    assert_eq!(iter.rows_read(), 4);
    assert_eq!(iter.statements(), 2);
    assert_eq!(iter.rows_skipped(), 2);
}

#[test]
fn test_statement_iter_empty_input() {
    assert!(convert_str("").unwrap().is_empty());
    assert!(convert_str("id,name,city,state\n").unwrap().is_empty());
}

#[test]
fn test_statement_iter_invalid_utf8_is_error() {
    let mut data = b"id,name,city,state\na,".to_vec();
    data.extend_from_slice(&[0xff, 0xfe]);
    data.extend_from_slice(b",X,S\n");

    let results: Vec<_> = StatementIter::new(data.as_slice()).unwrap().collect();
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(crate::ConvertError::CsvError(_))));
}

#[test]
fn test_convert_reader_writes_lines() {
    let csv = "id,name,city,state\na,A,X,S\nb,,X,S\n";
    let mut out = Vec::new();
    let summary = convert_reader(csv.as_bytes(), &mut out).unwrap();

    assert_eq!(
        summary,
        ConvertSummary {
            rows_read: 2,
            statements_written: 1,
            rows_skipped: 1,
        }
    );
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with(");\n"));
    assert_eq!(text.lines().count(), 1);
}
