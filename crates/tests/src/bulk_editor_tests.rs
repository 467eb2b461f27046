use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, MarkStatus, NoopAttendanceStore, RosterStats};

use crate::common;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 22).unwrap()
}

#[test]
fn seeded_roster_is_all_present() {
    let editor = common::seeded_editor();
    assert_eq!(
        editor.stats(),
        RosterStats {
            total: 8,
            present: 8,
            absent: 0,
            late: 0
        }
    );
}

#[test]
fn mark_all_absent_then_one_present() {
    let mut editor = common::seeded_editor();
    editor.set_all_status(MarkStatus::Absent);
    assert!(editor.set_status("3", MarkStatus::Present));

    let present: Vec<&str> = editor
        .rows()
        .iter()
        .filter(|r| r.status == MarkStatus::Present)
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(present, vec!["3"]);
    assert_eq!(editor.stats().absent, 7);
}

#[test]
fn unknown_id_changes_nothing() {
    let mut editor = common::seeded_editor();
    let before = editor.clone();
    assert!(!editor.set_status("99", MarkStatus::Late));
    assert_eq!(editor, before);
}

#[test]
fn filter_by_roll_number() {
    let editor = common::seeded_editor();
    let hits = editor.filter("10A003");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Charlie Brown");
}

#[test]
fn filter_is_case_insensitive_and_does_not_mutate() {
    let editor = common::seeded_editor();
    let names: Vec<&str> = editor.filter("DIANA").iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Diana Prince"]);
    assert_eq!(editor.filter("").len(), 8);
    assert!(editor.filter("zzz").is_empty());
    assert_eq!(editor.rows().len(), 8);
}

#[test]
fn whitespace_in_the_term_is_significant() {
    let editor = common::seeded_editor();
    assert!(editor.filter("  ").is_empty());
    assert!(editor.filter("Smith ").is_empty());
    assert_eq!(editor.filter(" Smith").len(), 1);
}

#[test]
fn bulk_set_ignores_search_term() {
    let mut editor = common::seeded_editor();
    assert_eq!(editor.filter("alice").len(), 1);
    editor.set_all_status(MarkStatus::Late);
    assert_eq!(editor.stats().late, 8);
}

#[test]
fn load_requires_class_and_subject() {
    let mut editor = common::seeded_editor();
    assert!(!editor.can_load());
    editor.select_class("10a");
    assert!(!editor.can_load());
    editor.select_subject("math");
    assert!(editor.can_load());
}

#[test]
fn save_hands_every_row_to_the_store() {
    let mut editor = common::seeded_editor();
    editor.select_subject("physics");
    editor.set_status("2", MarkStatus::Late);
    let store = common::RecordingStore::default();

    let notice = editor.save(&store, date()).unwrap();
    assert_eq!(notice.title, "Attendance Saved");
    assert_eq!(notice.description, "Attendance has been marked for 8 students.");

    let batches = store.batches.borrow();
    assert_eq!(batches.len(), 1);
    let batch = &batches[0];
    assert_eq!(batch.len(), 8);
    assert_eq!(batch[1].record_id, "2");
    assert_eq!(batch[1].status, MarkStatus::Late);
    assert_eq!(batch[1].subject, "physics");
    assert!(batch.iter().all(|w| w.date == date()));
}

#[test]
fn save_with_noop_store_always_succeeds() {
    let editor = common::seeded_editor();
    assert!(editor.save(&NoopAttendanceStore, date()).is_ok());
}

#[test]
fn store_failure_is_a_persistence_error() {
    let editor = common::seeded_editor();
    let err = editor.save(&common::RejectingStore, date()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Persistence);
}

#[test]
fn writes_serialize_with_lowercase_status() {
    let editor = common::seeded_editor();
    let writes = editor.to_writes(date(), "math");
    let json = serde_json::to_value(&writes[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "record_id": "1",
            "date": "2024-01-22",
            "subject": "math",
            "status": "present"
        })
    );
}
