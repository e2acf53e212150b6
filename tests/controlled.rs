//! Controlled value ownership

mod common;

use common::*;
use inline_edit::config::EditableConfig;
use inline_edit::editable::EditState;
use inline_edit::view::EditableView;

#[test]
fn test_submit_never_mutates_controlled_value() {
    let (mut editable, recorder) = recorded_controlled(EditableConfig::default(), Some("ext"));
    assert!(editable.state().is_controlled());

    editable.edit(None);
    editable.set_draft("proposed");
    editable.submit();

    assert_eq!(editable.value(), Some("ext"));
    assert_eq!(recorder.changes(), vec!["proposed".to_string()]);
    assert_eq!(recorder.states(), vec![EditState::Edit, EditState::Submit]);
}

#[test]
fn test_sync_value_accepts_owner_feedback() {
    let (mut editable, recorder) = recorded_controlled(EditableConfig::default(), Some("ext"));

    editable.edit(None);
    editable.set_draft("proposed");
    editable.submit();
    let latest = recorder.changes().pop();
    assert!(editable.sync_value(latest));

    assert_eq!(editable.value(), Some("proposed"));
    assert_eq!(EditableView::new(&editable).preview.content.as_deref(), Some("proposed"));
}

#[test]
fn test_sync_value_refused_when_uncontrolled() {
    let (mut editable, _) = recorded(EditableConfig::default(), "own");
    assert!(!editable.sync_value(Some("other".to_string())));
    assert_eq!(editable.value(), Some("own"));
}

#[test]
fn test_is_empty_tracks_external_value_when_idle() {
    let (mut editable, _) = recorded_controlled(EditableConfig::default(), None);
    assert!(editable.is_empty());
    assert_eq!(editable.value(), None);

    editable.sync_value(Some("now set".to_string()));
    assert!(!editable.is_empty());

    editable.sync_value(Some(String::new()));
    assert!(editable.is_empty());
}

#[test]
fn test_is_empty_tracks_draft_while_editing() {
    let (mut editable, _) = recorded_controlled(EditableConfig::default(), Some("ext"));

    editable.edit(None);
    assert!(!editable.is_empty());
    editable.set_draft("");
    assert!(editable.is_empty());

    editable.cancel();
    assert!(!editable.is_empty());
    assert_eq!(editable.draft(), "ext");
}

#[test]
fn test_edit_from_missing_external_value_starts_empty() {
    let (mut editable, recorder) = recorded_controlled(EditableConfig::default(), None);

    editable.edit(None);
    assert_eq!(editable.draft(), "");
    editable.set_draft("first");
    editable.submit();

    assert_eq!(editable.value(), None);
    assert_eq!(recorder.submits(), vec!["first".to_string()]);
}
