use std::fs;

use roster::{StorageError, ValidatedField, load_roster, sample_students, save_roster};
use tempfile::TempDir;

#[test]
fn missing_file_loads_as_none() {
    let dir = TempDir::new().unwrap();
    assert!(load_roster(&dir.path().join("absent.json")).unwrap().is_none());
}

#[test]
fn saved_roster_reloads_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("roster.json");
    let students = sample_students().unwrap();

    save_roster(&path, &students).unwrap();
    let reloaded = load_roster(&path).unwrap().unwrap();
    assert_eq!(reloaded, students);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"studentId\": \"A8743880E\""));
}

#[test]
fn invalid_record_rejects_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(
        &path,
        r#"{"students": [{"name": "Amy", "studentId": "A1234567X", "email": "", "major": "", "year": "7"}]}"#,
    )
    .unwrap();

    let err = load_roster(&path).unwrap_err();
    assert!(matches!(err, StorageError::IllegalValue(_)));
}

#[test]
fn missing_field_is_named() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(&path, r#"{"students": [{"name": "Amy", "email": "", "major": "", "year": ""}]}"#).unwrap();

    let err = load_roster(&path).unwrap_err();
    assert_eq!(err.to_string(), "Student's StudentId field is missing!");
}

#[test]
fn record_without_remark_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(
        &path,
        r#"{"students": [{"name": "Amy", "studentId": "A1234567X", "email": "", "major": "", "year": "", "comment": ""}]}"#,
    )
    .unwrap();

    let err = load_roster(&path).unwrap_err();
    assert_eq!(err.to_string(), "Student's Remark field is missing!");
}

#[test]
fn malformed_json_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(load_roster(&path), Err(StorageError::Json(_))));
}

#[test]
fn minimal_record_loads_with_unset_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(
        &path,
        r#"{"students": [{"name": "Amy", "studentId": "a1234567x", "email": "", "major": "", "year": "", "comment": "", "remark": ""}]}"#,
    )
    .unwrap();

    let students = load_roster(&path).unwrap().unwrap();
    assert_eq!(students[0].student_id().as_str(), "A1234567X");
    assert!(students[0].groups().is_empty());
    assert!(students[0].remark().is_empty());
}
