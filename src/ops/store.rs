use indexmap::IndexMap;
use tracing::debug;

use crate::model::{Note, Task};

/// Error type for collection store operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate id: {0}")]
    DuplicateId(String),
}

/// A record that can live in a [`CollectionStore`]
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Receives the full ordered snapshot after every mutation
pub trait ChangeListener<T> {
    fn on_change(&mut self, items: &[&T]);
}

/// A listener that ignores changes
impl<T> ChangeListener<T> for () {
    fn on_change(&mut self, _items: &[&T]) {}
}

/// In-memory ordered collection, the single source of truth for a list view.
///
/// Items keep insertion order. Every successful mutation notifies the
/// listener synchronously with the complete collection before returning.
pub struct CollectionStore<T, L> {
    items: IndexMap<String, T>,
    listener: L,
}

impl<T: Record, L: ChangeListener<T>> CollectionStore<T, L> {
    /// Create an empty store and notify the listener once so it starts
    /// from a consistent (empty) projection.
    pub fn new(listener: L) -> Self {
        let mut store = CollectionStore {
            items: IndexMap::new(),
            listener,
        };
        store.notify();
        store
    }

    /// Create a store pre-populated with `items` (rendered once).
    pub fn with_items(items: Vec<T>, listener: L) -> Result<Self, StoreError> {
        let mut map = IndexMap::with_capacity(items.len());
        for item in items {
            let id = item.id().to_string();
            if map.contains_key(&id) {
                return Err(StoreError::DuplicateId(id));
            }
            map.insert(id, item);
        }
        let mut store = CollectionStore {
            items: map,
            listener,
        };
        store.notify();
        Ok(store)
    }

    /// Append an item. Rejects an id that is already present.
    pub fn add(&mut self, item: T) -> Result<(), StoreError> {
        let id = item.id().to_string();
        if self.items.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        debug!(id = %id, "store add");
        self.items.insert(id, item);
        self.notify();
        Ok(())
    }

    /// Remove by id. Unknown ids are a silent no-op returning false.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.items.shift_remove(id).is_none() {
            return false;
        }
        debug!(id = %id, "store remove");
        self.notify();
        true
    }

    /// Replace the item with the same id, keeping its position.
    /// Returns false (and changes nothing) if the id is absent.
    pub fn replace(&mut self, item: T) -> bool {
        let Some(slot) = self.items.get_mut(item.id()) else {
            return false;
        };
        debug!(id = %item.id(), "store replace");
        *slot = item;
        self.notify();
        true
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    /// All items in insertion order
    pub fn all(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.items.values()
    }

    /// Item at a position in insertion order
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.items.get_index(index).map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Notify the listener with the subset of items accepted by `keep`,
    /// in collection order. The collection itself is untouched.
    pub fn render_view<F>(&mut self, keep: F)
    where
        F: Fn(&T) -> bool,
    {
        let view: Vec<&T> = self.items.values().filter(|item| keep(item)).collect();
        self.listener.on_change(&view);
    }

    fn notify(&mut self) {
        let snapshot: Vec<&T> = self.items.values().collect();
        self.listener.on_change(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use pretty_assertions::assert_eq;

    /// Records the ids of every snapshot it receives
    #[derive(Default)]
    struct Recorder {
        snapshots: Vec<Vec<String>>,
    }

    impl<T: Record> ChangeListener<T> for Recorder {
        fn on_change(&mut self, items: &[&T]) {
            self.snapshots
                .push(items.iter().map(|i| i.id().to_string()).collect());
        }
    }

    fn task(id: &str) -> Task {
        Task::new(id, format!("Task {}", id), Priority::Low)
    }

    fn ids<L: ChangeListener<Task>>(store: &CollectionStore<Task, L>) -> Vec<String> {
        store.all().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut store = CollectionStore::new(());
        store.add(task("b")).unwrap();
        store.add(task("a")).unwrap();
        store.add(task("c")).unwrap();
        assert_eq!(ids(&store), vec!["b", "a", "c"]);
    }

    #[test]
    fn mixed_adds_and_removes() {
        let mut store = CollectionStore::new(());
        let mut removed = 0;
        for i in 0..10 {
            store.add(task(&format!("t{}", i))).unwrap();
        }
        for i in (0..10).step_by(3) {
            if store.remove(&format!("t{}", i)) {
                removed += 1;
            }
        }
        // second removal of the same ids fails
        assert!(!store.remove("t0"));
        assert_eq!(store.len(), 10 - removed);
        assert_eq!(ids(&store), vec!["t1", "t2", "t4", "t5", "t7", "t8"]);
    }

    #[test]
    fn remove_unknown_is_silent_and_does_not_notify() {
        let mut store = CollectionStore::new(Recorder::default());
        store.add(task("a")).unwrap();
        let before = store.listener().snapshots.len();
        assert!(!store.remove("missing"));
        assert_eq!(store.listener().snapshots.len(), before);
        assert_eq!(ids(&store), vec!["a"]);
    }

    #[test]
    fn every_mutation_notifies_with_full_snapshot() {
        let mut store = CollectionStore::new(Recorder::default());
        store.add(task("a")).unwrap();
        store.add(task("b")).unwrap();
        assert!(store.remove("a"));
        let snaps = &store.listener().snapshots;
        assert_eq!(
            snaps,
            &vec![
                Vec::<String>::new(),
                vec!["a".to_string()],
                vec!["a".to_string(), "b".to_string()],
                vec!["b".to_string()],
            ]
        );
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut store = CollectionStore::new(());
        store.add(task("a")).unwrap();
        assert_eq!(
            store.add(task("a")),
            Err(StoreError::DuplicateId("a".into()))
        );
        assert_eq!(store.len(), 1);

        let err = CollectionStore::with_items(vec![task("x"), task("x")], ()).err();
        assert_eq!(err, Some(StoreError::DuplicateId("x".into())));
    }

    #[test]
    fn find_and_get_index() {
        let store = CollectionStore::with_items(vec![task("a"), task("b")], ()).unwrap();
        assert_eq!(store.find("b").map(|t| t.title.as_str()), Some("Task b"));
        assert!(store.find("zzz").is_none());
        assert_eq!(store.get_index(0).map(|t| t.id.as_str()), Some("a"));
        assert!(store.get_index(2).is_none());
    }

    #[test]
    fn replace_keeps_position() {
        let mut store =
            CollectionStore::with_items(vec![task("a"), task("b"), task("c")], ()).unwrap();
        let mut updated = task("b");
        updated.title = "Renamed".into();
        assert!(store.replace(updated));
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
        assert_eq!(store.find("b").unwrap().title, "Renamed");
        assert!(!store.replace(task("zzz")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn render_view_does_not_mutate() {
        let mut store =
            CollectionStore::with_items(vec![task("a"), task("b")], Recorder::default()).unwrap();
        store.render_view(|t| t.id == "b");
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.listener().snapshots.last(),
            Some(&vec!["b".to_string()])
        );
    }

    #[test]
    fn add_then_remove_scenario() {
        let mut store = CollectionStore::new(Recorder::default());
        let t = Task::new("task-x", "X", Priority::High);
        store.add(t).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.remove("task-x"));
        assert_eq!(store.len(), 0);
        assert_eq!(store.listener().snapshots.last(), Some(&Vec::new()));
    }
}
