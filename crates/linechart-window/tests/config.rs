// File: crates/linechart-window/tests/config.rs
// Purpose: Session list parsing, defaults and validation.

use std::path::PathBuf;

use linechart_window::config::parse_config;
use linechart_window::{load_config, validate};

fn scratch(name: &str, body: &str) -> PathBuf {
    let path = PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn defaults_fill_optional_fields() {
    let sessions = parse_config(r#"[{"file": "a.csv", "index": [0, 1, 2], "title": "waves"}]"#).expect("parse");
    assert_eq!(sessions.len(), 1);
    let s = &sessions[0];
    assert_eq!(s.file, PathBuf::from("a.csv"));
    assert_eq!(s.index, vec![0, 1, 2]);
    assert!(s.share_coordinate);
    assert_eq!(s.separator, ',');
    assert_eq!(s.line_count(), 2);
}

#[test]
fn explicit_fields_override_defaults() {
    let sessions = parse_config(
        r#"[{"file": "b.tsv", "index": [-1, 3], "title": "t", "share_coordinate": false, "separator": "\t"}]"#,
    )
    .expect("parse");
    assert!(!sessions[0].share_coordinate);
    assert_eq!(sessions[0].separator, '\t');
    assert_eq!(sessions[0].index, vec![-1, 3]);
}

#[test]
fn incomplete_or_misshapen_config_fails() {
    assert!(parse_config(r#"[{"file": "a.csv", "index": [0, 1]}]"#).is_err());
    assert!(parse_config(r#"{"file": "a.csv", "index": [0, 1], "title": "x"}"#).is_err());
    assert!(parse_config(r#"[1, 2]"#).is_err());
}

#[test]
fn validation_requires_x_and_one_y() {
    let ok = parse_config(r#"[{"file": "a.csv", "index": [0, 1], "title": "ok"}]"#).unwrap();
    assert!(validate(&ok, 6).is_ok());

    let short = parse_config(r#"[{"file": "a.csv", "index": [0], "title": "short"}]"#).unwrap();
    let err = validate(&short, 6).unwrap_err();
    assert!(err.to_string().contains("at least"), "{err}");

    assert!(validate(&[], 6).is_err());

    // more lines than colors only warns
    let many = parse_config(r#"[{"file": "a.csv", "index": [0, 1, 2, 3, 4, 5, 6, 7], "title": "many"}]"#).unwrap();
    assert!(validate(&many, 6).is_ok());
}

#[test]
fn colors_repeat_only_past_palette_size() {
    let sessions = parse_config(
        r#"[{"file": "a.csv", "index": [0, 1, 2, 3, 4, 5, 6], "title": "six"},
            {"file": "a.csv", "index": [0, 1, 2, 3, 4, 5, 6, 7], "title": "seven"}]"#,
    )
    .unwrap();
    assert!(!sessions[0].reuses_colors(6));
    assert!(sessions[1].reuses_colors(6));
}

#[test]
fn load_checks_existence_and_extension() {
    let body = r#"[{"file": "a.csv", "index": [0, 1], "title": "ok"}]"#;
    let good = scratch("sessions.json", body);
    assert_eq!(load_config(&good).expect("load").len(), 1);

    let wrong_ext = scratch("sessions.txt", body);
    let err = load_config(&wrong_ext).unwrap_err();
    assert!(err.to_string().contains(".json"), "{err}");

    assert!(load_config(&PathBuf::from("target/test_out/missing.json")).is_err());
}
