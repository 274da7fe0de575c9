//! NoteStore operation tests
mod common;

use common::{add_and_wait, new_store, titles, wait_for_cooldown};
use multi_notes::{CreationState, NoteUpdate};
use std::collections::HashSet;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_add_wait_add_scenario() {
    let (mut store, _) = new_store();
    assert!(store.notes().is_empty());

    let first = store.add_note().unwrap();
    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.notes()[0].title, "Untitled 1");
    assert_eq!(store.notes()[0].content, "");
    assert_eq!(store.active_note_id(), Some(first.as_str()));

    assert!(store.add_note().is_none());
    assert_eq!(store.notes().len(), 1);

    wait_for_cooldown().await;
    let second = store.add_note().unwrap();
    assert_eq!(store.notes().len(), 2);
    assert_eq!(store.notes()[1].title, "Untitled 2");
    assert_eq!(store.active_note_id(), Some(second.as_str()));
}

#[tokio::test(start_paused = true)]
async fn test_cooldown_state_transitions() {
    let (mut store, _) = new_store();
    assert_eq!(store.creation_state(), CreationState::CanCreate);

    store.add_note();
    assert_eq!(store.creation_state(), CreationState::CreationCooldown);
    assert!(!store.can_add_note());

    tokio::time::sleep(Duration::from_millis(2_900)).await;
    assert!(store.add_note().is_none());
    assert_eq!(store.notes().len(), 1);

    tokio::time::sleep(Duration::from_millis(101)).await;
    assert_eq!(store.creation_state(), CreationState::CanCreate);
}

#[tokio::test(start_paused = true)]
async fn test_other_operations_work_during_cooldown() {
    let (mut store, downloads) = new_store();
    let first = add_and_wait(&mut store).await;
    store.add_note().unwrap();
    assert_eq!(store.creation_state(), CreationState::CreationCooldown);

    store.select_note(&first);
    store.update_note(NoteUpdate::content("during cooldown"));
    store.export_active_note();
    store.delete_note();

    assert_eq!(store.notes().len(), 1);
    assert_eq!(downloads.downloads().len(), 1);
    assert_eq!(downloads.downloads()[0].contents, "Title: Untitled 1\n\nduring cooldown");
}

#[tokio::test(start_paused = true)]
async fn test_ids_are_unique() {
    let (mut store, _) = new_store();
    for _ in 0..6 {
        add_and_wait(&mut store).await;
    }
    let ids: HashSet<&str> = store.notes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), 6);
}

#[tokio::test(start_paused = true)]
async fn test_next_title_fills_deleted_number() {
    let (mut store, _) = new_store();
    add_and_wait(&mut store).await;
    let second = add_and_wait(&mut store).await;
    add_and_wait(&mut store).await;

    store.select_note(&second);
    store.delete_note();
    assert_eq!(titles(&store), vec!["Untitled 1", "Untitled 3"]);

    store.add_note().unwrap();
    assert_eq!(titles(&store), vec!["Untitled 1", "Untitled 3", "Untitled 2"]);
}

#[tokio::test(start_paused = true)]
async fn test_renamed_notes_free_their_number() {
    let (mut store, _) = new_store();
    add_and_wait(&mut store).await;
    store.update_note(NoteUpdate::title("Groceries"));

    store.add_note().unwrap();
    assert_eq!(titles(&store), vec!["Groceries", "Untitled 1"]);
}

#[tokio::test]
async fn test_delete_clears_active_and_disables_dependent_operations() {
    let (mut store, downloads) = new_store();
    let id = store.add_note().unwrap();
    store.update_note(NoteUpdate::content("keep"));
    store.delete_note();

    assert_eq!(store.active_note_id(), None);
    assert!(store.notes().is_empty());

    store.update_note(NoteUpdate::content("lost"));
    assert!(store.export_active_note().is_none());
    assert!(downloads.downloads().is_empty());

    store.delete_note();
    store.select_note(&id);
    assert_eq!(store.active_note_id(), None);
}

#[tokio::test(start_paused = true)]
async fn test_update_after_reselecting() {
    let (mut store, _) = new_store();
    let first = add_and_wait(&mut store).await;
    add_and_wait(&mut store).await;
    store.delete_note();

    store.update_note(NoteUpdate::content("ignored"));
    assert_eq!(store.notes()[0].content, "");

    store.select_note(&first);
    store.update_note(NoteUpdate::content("applied"));
    assert_eq!(store.notes()[0].content, "applied");
}

#[tokio::test]
async fn test_select_unknown_id_is_ignored() {
    let (mut store, _) = new_store();
    let id = store.add_note().unwrap();
    let before = store.notes().to_vec();

    store.select_note("missing");
    assert_eq!(store.active_note_id(), Some(id.as_str()));
    assert_eq!(store.notes(), before.as_slice());
}

#[tokio::test]
async fn test_update_refreshes_last_saved_every_time() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();

    let mut previous = store.active_note().unwrap().last_saved.clone();
    for _ in 0..3 {
        store.update_note(NoteUpdate::content("same text"));
        let current = store.active_note().unwrap().last_saved.clone();
        assert_ne!(current, previous);
        previous = current;
    }
}

#[tokio::test]
async fn test_update_merges_only_given_fields() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();
    store.update_note(NoteUpdate::content("body"));
    store.update_note(NoteUpdate::title("Plan"));

    let note = store.active_note().unwrap();
    assert_eq!(note.title, "Plan");
    assert_eq!(note.content, "body");

    store.update_note(NoteUpdate {
        title: Some("Both".to_string()),
        content: Some("fields".to_string()),
    });
    let note = store.active_note().unwrap();
    assert_eq!((note.title.as_str(), note.content.as_str()), ("Both", "fields"));
}

#[tokio::test]
async fn test_blank_title_commit_restores_previous_title() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();
    store.update_note(NoteUpdate::title("Project Plan"));

    store.begin_title_edit();
    store.update_note(NoteUpdate::title("Proj"));
    store.update_note(NoteUpdate::title(""));
    assert_eq!(store.active_note().unwrap().title, "");

    store.commit_title_edit();
    assert_eq!(store.active_note().unwrap().title, "Project Plan");
    assert!(!store.is_editing_title());
}

#[tokio::test]
async fn test_whitespace_title_counts_as_blank() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();

    store.begin_title_edit();
    store.update_note(NoteUpdate::title("   "));
    store.commit_title_edit();
    assert_eq!(store.active_note().unwrap().title, "Untitled 1");
}

#[tokio::test]
async fn test_blank_commit_without_previous_title_generates_placeholder() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();
    store.update_note(NoteUpdate::title(""));

    store.commit_title_edit();
    assert_eq!(store.active_note().unwrap().title, "Untitled 1");

    store.update_note(NoteUpdate::title(""));
    store.begin_title_edit();
    store.commit_title_edit();
    assert_eq!(store.active_note().unwrap().title, "Untitled 1");
}

#[tokio::test]
async fn test_non_blank_commit_is_not_a_mutation() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();

    store.begin_title_edit();
    store.update_note(NoteUpdate::title("Renamed"));
    let saved = store.active_note().unwrap().last_saved.clone();
    store.commit_title_edit();

    let note = store.active_note().unwrap();
    assert_eq!(note.title, "Renamed");
    assert_eq!(note.last_saved, saved);
}

#[tokio::test]
async fn test_restore_refreshes_last_saved() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();
    store.begin_title_edit();
    store.update_note(NoteUpdate::title(""));
    let saved = store.active_note().unwrap().last_saved.clone();

    store.commit_title_edit();
    assert_ne!(store.active_note().unwrap().last_saved, saved);
}

#[tokio::test]
async fn test_repeated_focus_keeps_first_restore_target() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();
    store.update_note(NoteUpdate::title("Original"));

    store.begin_title_edit();
    store.update_note(NoteUpdate::title(""));
    store.begin_title_edit();
    store.update_note(NoteUpdate::title(" "));
    store.commit_title_edit();

    assert_eq!(store.active_note().unwrap().title, "Original");
}

#[tokio::test(start_paused = true)]
async fn test_switching_notes_commits_open_title_edit() {
    let (mut store, _) = new_store();
    let first = add_and_wait(&mut store).await;
    store.update_note(NoteUpdate::title("Groceries"));
    let second = add_and_wait(&mut store).await;

    store.select_note(&first);
    store.begin_title_edit();
    store.update_note(NoteUpdate::title(""));
    store.select_note(&second);

    assert!(!store.is_editing_title());
    assert_eq!(titles(&store), vec!["Groceries", "Untitled 1"]);
    assert_eq!(store.active_note_id(), Some(second.as_str()));
}

#[tokio::test(start_paused = true)]
async fn test_adding_commits_open_title_edit() {
    let (mut store, _) = new_store();
    add_and_wait(&mut store).await;
    store.update_note(NoteUpdate::title("Journal"));

    store.begin_title_edit();
    store.update_note(NoteUpdate::title(""));
    store.add_note().unwrap();

    assert_eq!(titles(&store), vec!["Journal", "Untitled 1"]);
}

#[tokio::test]
async fn test_deleting_discards_open_title_edit() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();
    store.begin_title_edit();
    store.update_note(NoteUpdate::title(""));

    store.delete_note();
    assert!(!store.is_editing_title());
    assert!(store.notes().is_empty());
}

#[tokio::test]
async fn test_export_active_note() {
    let (mut store, downloads) = new_store();
    store.add_note().unwrap();
    store.update_note(NoteUpdate::title("Groceries"));
    store.update_note(NoteUpdate::content("milk\neggs"));

    let exported = store.export_active_note().unwrap();
    assert_eq!(exported.text, "Title: Groceries\n\nmilk\neggs");
    assert_eq!(exported.filename, "Groceries.txt");

    let recorded = downloads.downloads();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].filename, "Groceries.txt");
    assert_eq!(recorded[0].mime, "text/plain");
    assert_eq!(recorded[0].contents, "Title: Groceries\n\nmilk\neggs");
}

#[tokio::test]
async fn test_export_does_not_mutate() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();
    let before = store.notes().to_vec();
    store.export_active_note();
    assert_eq!(store.notes(), before.as_slice());
}

#[tokio::test]
async fn test_export_with_transient_empty_title() {
    let (mut store, downloads) = new_store();
    store.add_note().unwrap();
    store.begin_title_edit();
    store.update_note(NoteUpdate::title(""));

    store.export_active_note();
    assert_eq!(downloads.downloads()[0].filename, "untitled.txt");
}

#[tokio::test(start_paused = true)]
async fn test_drop_during_cooldown_is_silent() {
    let (mut store, _) = new_store();
    store.add_note().unwrap();
    drop(store);

    tokio::time::sleep(Duration::from_secs(5)).await;
}
