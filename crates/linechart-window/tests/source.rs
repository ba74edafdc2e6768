// File: crates/linechart-window/tests/source.rs
// Purpose: CSV table loading, column selection and session building.

use std::path::PathBuf;

use linechart_core::{Color, Palette};
use linechart_window::source::parse_table;
use linechart_window::{build_session, load_config, load_table, session_from_table, validate, SessionConfig, Table};

fn scratch(name: &str, body: &str) -> PathBuf {
    let path = PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, body).unwrap();
    path
}

fn config(index: Vec<i64>, shared: bool) -> SessionConfig {
    SessionConfig {
        file: PathBuf::from("unused.csv"),
        index,
        title: "cos_sin".into(),
        share_coordinate: shared,
        separator: ',',
    }
}

#[test]
fn loads_rows_until_first_blank_line() {
    let path = scratch("cos_sin.csv", "0,1,0\n0.5, 0.8776, 0.4794\n1,0.5403,0.8415\n\n9,9,9\n");
    let table = load_table(&path, ',').expect("load");
    assert_eq!(table.rows(), 3);
    assert_eq!(table.columns(), 3);
}

#[test]
fn select_supports_row_number_columns() {
    let table = parse_table("10,1,2\n20,3,4\n30,5,6\n", ',').expect("parse");
    let cols = table.select(&[-1, 2]).expect("select");
    assert_eq!(cols, vec![vec![0.0, 1.0, 2.0], vec![2.0, 4.0, 6.0]]);
    let cols = table.select(&[0, 1]).expect("select");
    assert_eq!(cols[0], vec![10.0, 20.0, 30.0]);

    let err = table.select(&[0, 3]).unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");
}

#[test]
fn custom_separator() {
    let table = parse_table("1;2\n3;4\n", ';').expect("parse");
    assert_eq!(table.select(&[1]).unwrap(), vec![vec![2.0, 4.0]]);
}

#[test]
fn malformed_tables_are_rejected() {
    assert!(parse_table("1,2\n3\n", ',').is_err());
    assert!(parse_table("1,abc\n", ',').is_err());
    assert!(parse_table("", ',').is_err());
    assert!(parse_table("\n1,2\n", ',').is_err());
    assert!(load_table(&PathBuf::from("target/test_out/nope.csv"), ',').is_err());
    assert!(Table::from_rows(vec![vec![1.0], vec![1.0, 2.0]]).is_err());
}

#[test]
fn session_uses_first_column_as_shared_x() {
    let table = parse_table("0,0,1\n1,0.84,0.54\n2,0.91,-0.42\n3,0.14,-0.99\n", ',').expect("parse");
    let session = session_from_table(&config(vec![0, 1, 2], true), &table, &Palette::standard()).expect("session");
    assert_eq!(session.title(), "cos_sin");
    assert!(session.is_shared());
    assert_eq!(session.lines().len(), 2);
    assert_eq!(session.lines()[0].xs(), session.lines()[1].xs());
    assert_eq!(session.lines()[0].color(), Color::RED);
    assert_eq!(session.lines()[1].color(), Color::GREEN);

    let frame = session.plan().expect("plan");
    assert!(!frame.x_ticks.is_empty());
}

#[test]
fn per_line_flag_is_carried_through() {
    let table = parse_table("0,5\n1,6\n", ',').expect("parse");
    let session = session_from_table(&config(vec![-1, 1], false), &table, &Palette::standard()).expect("session");
    assert!(!session.is_shared());
    assert_eq!(session.lines()[0].xs(), &[0.0, 1.0]);
}

#[test]
fn bundled_demo_sessions_plan_cleanly() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..");
    let sessions = load_config(&root.join("demos/sessions.json")).expect("config");
    validate(&sessions, Palette::standard().len()).expect("valid");
    assert_eq!(sessions.len(), 3);
    for mut cfg in sessions {
        cfg.file = root.join(&cfg.file);
        let session = build_session(&cfg, &Palette::standard()).expect("session");
        let frame = session.plan().expect("plan");
        assert_eq!(frame.lines.len(), cfg.line_count());
        assert_eq!(frame.shared_range.is_some(), cfg.share_coordinate);
    }
}
