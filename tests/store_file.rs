use doable::model::{TodoDraft, TodoStatus};
use doable::query::Query;
use doable::store::fs::FileStore;
use doable::store::TodoStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("todo.db"));
    (dir, store)
}

// The CLI runs as repeated short-lived processes; every test that matters
// here re-opens the file with a fresh store instance.
fn reopen(store: &FileStore) -> FileStore {
    FileStore::new(store.path())
}

#[test]
fn records_persist_across_instances() {
    let (_dir, mut store) = setup();
    let inserted = store.insert(TodoDraft::new("Buy milk")).unwrap();

    let store2 = reopen(&store);
    let fetched = store2.find_one(&Query::by_id(inserted.id)).unwrap().unwrap();
    assert_eq!(fetched, inserted);
}

#[test]
fn persisted_order_is_insertion_order() {
    let (_dir, mut store) = setup();
    for title in ["A", "B", "C"] {
        store.insert(TodoDraft::new(title)).unwrap();
    }

    let titles: Vec<_> = reopen(&store)
        .find(&Query::all())
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["A", "B", "C"]);

    let first = reopen(&store).find_one(&Query::all()).unwrap().unwrap();
    assert_eq!(first.title, "A");
}

#[test]
fn multiline_fields_round_trip_without_breaking_records() {
    let (_dir, mut store) = setup();
    let draft = TodoDraft::new("Deploy")
        .with_description("run: `deploy.sh`\nthen check the logs\n")
        .with_note("first\nnote")
        .with_note("second");
    let inserted = store.insert(draft).unwrap();
    store.insert(TodoDraft::new("After")).unwrap();

    // One logical record per line on disk
    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(content.lines().count(), 2);

    let fetched = reopen(&store)
        .find_one(&Query::by_id(inserted.id))
        .unwrap()
        .unwrap();
    assert_eq!(fetched.description, "run: `deploy.sh`\nthen check the logs\n");
    assert_eq!(fetched.notes, ["first\nnote", "second"]);
}

#[test]
fn update_persists_and_preserves_identity() {
    let (_dir, mut store) = setup();
    store.insert(TodoDraft::new("One")).unwrap();
    let original = store.insert(TodoDraft::new("Deploy")).unwrap();

    let mut replacement = original.clone();
    replacement.title = "Deploy v2".into();
    replacement.status = TodoStatus::Solved;
    store
        .update(&Query::by_index(original.index), replacement)
        .unwrap();

    let fetched = reopen(&store)
        .find_one(&Query::by_index(original.index))
        .unwrap()
        .unwrap();
    assert_eq!(fetched.title, "Deploy v2");
    assert_eq!(fetched.status, TodoStatus::Solved);
    assert_eq!(fetched.id, original.id);
    assert_eq!(fetched.index, original.index);
}

#[test]
fn removal_keeps_survivor_indices_across_instances() {
    let (_dir, mut store) = setup();
    for title in ["A", "B", "C"] {
        store.insert(TodoDraft::new(title)).unwrap();
    }
    store.remove(&Query::by_index(2)).unwrap();

    let mut store2 = reopen(&store);
    let indices: Vec<_> = store2
        .find(&Query::all())
        .unwrap()
        .into_iter()
        .map(|t| t.index)
        .collect();
    assert_eq!(indices, [1, 3]);

    assert_eq!(store2.insert(TodoDraft::new("D")).unwrap().index, 4);
}

#[test]
fn find_with_status_query_filters() {
    let (_dir, mut store) = setup();
    store.insert(TodoDraft::new("open one")).unwrap();
    let solved = store.insert(TodoDraft::new("done one")).unwrap();
    let mut replacement = solved.clone();
    replacement.status = TodoStatus::Solved;
    store.update(&Query::by_id(solved.id), replacement).unwrap();

    let open = store.find(&Query::by_status(TodoStatus::Unsolved)).unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].title, "open one");
}
