//! Config file loading and saving

use inline_edit::config::{Dir, EditableConfig, Placeholder};
use inline_edit::editable::{ActivationMode, SubmitMode};
use tempfile::TempDir;

#[test]
fn test_save_then_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = EditableConfig {
        activation_mode: ActivationMode::DblClick,
        submit_mode: SubmitMode::Both,
        max_length: Some(12),
        placeholder: Some(Placeholder::Split {
            edit: "Type a title".to_string(),
            preview: "Untitled".to_string(),
        }),
        dir: Dir::Rtl,
        name: Some("title".to_string()),
        ..EditableConfig::default()
    };
    config.save_to(&path).unwrap();

    let loaded = EditableConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "submit_mode: enter\nplaceholder: Click to edit\n").unwrap();

    let loaded = EditableConfig::load_from(&path).unwrap();
    assert_eq!(loaded.submit_mode, SubmitMode::Enter);
    assert_eq!(loaded.activation_mode, ActivationMode::Focus);
    let placeholder = loaded.placeholder.unwrap();
    assert_eq!(placeholder.for_edit(), "Click to edit");
    assert_eq!(placeholder.for_preview(), "Click to edit");
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let err = EditableConfig::load_from(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config"));
}

#[test]
fn test_unknown_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "submit_on: enter\n").unwrap();

    assert!(EditableConfig::load_from(&path).is_err());
}
