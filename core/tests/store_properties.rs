//! Behavioural properties of `MemoryStore` exercised through the `TodoStore`
//! trait object, the same way the server uses it.

use todo_core::{MemoryStore, Todo, TodoStore};

fn store() -> Box<dyn TodoStore> {
    Box::new(MemoryStore::new())
}

#[test]
fn ids_are_sequential_and_never_reused() {
    let mut store = store();

    let first: Vec<u64> = (0..5)
        .map(|i| store.create(format!("todo {i}")).unwrap().id)
        .collect();
    assert_eq!(first, vec![1, 2, 3, 4, 5]);

    store.remove(5).unwrap();
    store.remove(2).unwrap();

    let next = store.create("after deletes".to_string()).unwrap();
    assert_eq!(next.id, 6);
}

#[test]
fn create_then_get_round_trips() {
    let mut store = store();
    let created = store.create("Buy milk".to_string()).unwrap();

    let fetched = store.get(created.id).unwrap().unwrap();
    assert_eq!(fetched.title, "Buy milk");
    assert!(!fetched.completed);
}

#[test]
fn update_is_a_total_overwrite() {
    let mut store = store();
    let created = store.create("t1".to_string()).unwrap();

    store.update(created.id, "t2".to_string(), true).unwrap();
    assert_eq!(
        store.get(created.id).unwrap(),
        Some(Todo {
            id: created.id,
            title: "t2".to_string(),
            completed: true,
        })
    );

    store.update(created.id, "t3".to_string(), false).unwrap();
    let fetched = store.get(created.id).unwrap().unwrap();
    assert_eq!(fetched.title, "t3");
    assert!(!fetched.completed);
}

#[test]
fn update_of_missing_id_leaves_collection_unchanged() {
    let mut store = store();
    store.create("keep".to_string()).unwrap();
    let before = store.list().unwrap();

    assert!(store.update(42, "nope".to_string(), true).unwrap().is_none());
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn remove_is_permanent() {
    let mut store = store();
    let a = store.create("a".to_string()).unwrap();
    let b = store.create("b".to_string()).unwrap();

    assert!(store.remove(a.id).unwrap().is_some());
    assert!(store.get(a.id).unwrap().is_none());

    store.create("c".to_string()).unwrap();
    let ids: Vec<u64> = store.list().unwrap().iter().map(|t| t.id).collect();
    assert!(!ids.contains(&a.id));
    assert!(ids.contains(&b.id));
}

#[test]
fn absence_is_reported_not_raised() {
    let mut store = store();
    assert!(store.list().unwrap().is_empty());
    assert!(store.remove(1).unwrap().is_none());

    let created = store.create("once".to_string()).unwrap();
    assert!(store.remove(created.id).unwrap().is_some());
    assert!(store.remove(created.id).unwrap().is_none());
}

#[test]
fn list_preserves_insertion_order() {
    let mut store = store();
    for title in ["first", "second", "third"] {
        store.create(title.to_string()).unwrap();
    }
    store.update(1, "first, edited".to_string(), true).unwrap();

    let titles: Vec<String> = store.list().unwrap().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["first, edited", "second", "third"]);
}

#[test]
fn list_is_a_snapshot() {
    let mut store = store();
    store.create("a".to_string()).unwrap();
    let snapshot = store.list().unwrap();

    store.create("b".to_string()).unwrap();
    store.update(1, "changed".to_string(), true).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "a");
}
