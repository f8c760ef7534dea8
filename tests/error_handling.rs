use std::io::Write;

use tempfile::NamedTempFile;
use taskwave::config::load_and_validate;
use taskwave::errors::TaskwaveError;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn non_positive_hours_returns_validation_error() {
    let file = toml_file(
        r#"
[[task]]
title = "A"
estimated_hours = 0
"#,
    );

    match load_and_validate(file.path()) {
        Err(TaskwaveError::ValidationError(msg)) => {
            assert!(msg.contains("'A'"));
            assert!(msg.contains("estimated_hours"));
        }
        Err(e) => panic!("Expected ValidationError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn missing_title_is_a_parse_error() {
    let file = toml_file(
        r#"
[[task]]
estimated_hours = 2
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskwaveError::TomlError(_))
    ));
}

#[test]
fn bad_policy_value_is_a_parse_error() {
    let file = toml_file(
        r#"
[config]
unknown_dependencies = "sometimes"
"#,
    );

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskwaveError::TomlError(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    assert!(matches!(
        load_and_validate(&path),
        Err(TaskwaveError::IoError(_))
    ));
}

#[test]
fn cycle_and_dangling_reference_pass_boundary_validation() {
    let file = toml_file(
        r#"
[[task]]
title = "A"
estimated_hours = 1
dependencies = ["A", "ghost"]
"#,
    );

    let request = load_and_validate(file.path()).unwrap();
    assert_eq!(request.tasks.len(), 1);
}
