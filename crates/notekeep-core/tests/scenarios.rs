use std::fs;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use notekeep_core::convert::{decode, encode};
use notekeep_core::fs::LocalFs;
use notekeep_core::id::id_for_relative_path;
use notekeep_core::index::{index_path, read_index, write_index, NoteIndex, NoteIndexEntry};
use notekeep_core::{NoteStore, SaveRequest};
use tempfile::tempdir;

fn open(root: &Path) -> NoteStore {
    NoteStore::open(root).unwrap()
}

#[test]
fn save_writes_crlf_file_and_index_entry() {
    let dir = tempdir().unwrap();
    let store = open(dir.path());

    let result = store
        .save_note(&SaveRequest::new("abc", "Hello", "Hello\nworld"))
        .unwrap();

    let path = dir.path().join("hello.md");
    assert_eq!(result.file_path, path);
    assert_eq!(result.note_id, "abc");
    assert_eq!(fs::read(&path).unwrap(), b"Hello\r\nworld");

    let index = read_index(&LocalFs, dir.path());
    let entry = index.get("abc").unwrap();
    assert_eq!(entry.relative_path, "hello.md");
    assert_eq!(entry.created_at, result.created_at);
    assert!(entry.manual_title.is_none());
}

#[test]
fn retitled_save_moves_file_and_keeps_created_at() {
    let dir = tempdir().unwrap();
    let store = open(dir.path());

    let first = store
        .save_note(&SaveRequest::new("abc", "Hello", "Hello\nworld"))
        .unwrap();
    let second = store
        .save_note(&SaveRequest::new("abc", "Hello 2", "Hello\nworld"))
        .unwrap();

    assert_eq!(second.file_path, dir.path().join("hello-2.md"));
    assert!(second.file_path.exists());
    assert!(!dir.path().join("hello.md").exists());
    assert_eq!(second.created_at, first.created_at);

    let index = read_index(&LocalFs, dir.path());
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("abc").unwrap().relative_path, "hello-2.md");
}

#[test]
fn nested_checklist_round_trips() {
    let text = "- [x] task A\n  - [ ] subtask";
    assert_eq!(encode(&decode(text)), text);
}

#[test]
fn stray_file_is_adopted_with_stable_id() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("manual.md"), "Shopping\r\n- [ ] eggs").unwrap();
    let store = open(dir.path());

    let first = store.load_all_notes();
    let second = store.load_all_notes();

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].title, "Shopping");
    assert_eq!(first[0].folder_path, "inbox");
    assert_eq!(first[0].note_id, id_for_relative_path("manual.md"));
    assert_eq!(first[0].note_id, second[0].note_id);
    assert_eq!(first[0].created_at, second[0].created_at);
    assert!(first[0].created_at > 0);

    let index = read_index(&LocalFs, dir.path());
    assert!(index.get(&first[0].note_id).is_some());
}

#[test]
fn orphan_entry_is_pruned_and_persisted() {
    let dir = tempdir().unwrap();
    let mut index = NoteIndex::default();
    index.upsert(
        "ghost",
        NoteIndexEntry {
            relative_path: "missing.md".to_string(),
            created_at: 1,
            manual_title: None,
        },
    );
    write_index(&LocalFs, dir.path(), &index).unwrap();

    let store = open(dir.path());
    assert!(store.load_all_notes().is_empty());

    let persisted = read_index(&LocalFs, dir.path());
    assert!(persisted.is_empty());
    assert!(index_path(dir.path()).exists());
}

#[test]
fn notes_are_sorted_most_recent_first() {
    let dir = tempdir().unwrap();
    let store = open(dir.path());

    store.save_note(&SaveRequest::new("old", "Old", "old")).unwrap();
    sleep(Duration::from_millis(1100));
    store.save_note(&SaveRequest::new("new", "New", "new")).unwrap();

    let ids: Vec<String> = store
        .load_all_notes()
        .into_iter()
        .map(|note| note.note_id)
        .collect();
    assert_eq!(ids, vec!["new".to_string(), "old".to_string()]);
}

#[test]
fn index_file_never_appears_as_a_note() {
    let dir = tempdir().unwrap();
    let store = open(dir.path());
    store.save_note(&SaveRequest::new("abc", "One", "one")).unwrap();

    let notes = store.load_all_notes();
    assert_eq!(notes.len(), 1);
    assert!(notes
        .iter()
        .all(|note| !note.file_path.ends_with(".notekeep-index.json")));
}

#[test]
fn adopted_file_in_subfolder_gets_folder_bucket() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("work/2024")).unwrap();
    fs::write(dir.path().join("work/2024/plan.md"), "Plan").unwrap();
    fs::write(dir.path().join("work/readme.txt"), "ignored").unwrap();

    let notes = open(dir.path()).load_all_notes();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].folder_path, "work/2024");
    assert_eq!(notes[0].note_id, id_for_relative_path("work/2024/plan.md"));
}

#[test]
fn renamed_file_reappears_as_new_note() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "A").unwrap();
    let store = open(dir.path());
    let before = store.load_all_notes();

    fs::rename(dir.path().join("a.md"), dir.path().join("b.md")).unwrap();
    let after = store.load_all_notes();

    assert_eq!(after.len(), 1);
    assert_ne!(before[0].note_id, after[0].note_id);
    assert_eq!(after[0].note_id, id_for_relative_path("b.md"));
}
