use std::marker::PhantomData;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::model::{Note, Priority, SubjectStyle, Task};
use crate::ops::store::ChangeListener;
use crate::util::clock::Clock;

/// Color family of a node's badge, mapped to palette colors at draw time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Low,
    Medium,
    High,
    Math,
    Science,
    Neutral,
}

impl From<Priority> for Tone {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Low => Tone::Low,
            Priority::Medium => Tone::Medium,
            Priority::High => Tone::High,
        }
    }
}

impl From<SubjectStyle> for Tone {
    fn from(s: SubjectStyle) -> Self {
        match s {
            SubjectStyle::Math => Tone::Math,
            SubjectStyle::Science => Tone::Science,
            SubjectStyle::Other => Tone::Neutral,
        }
    }
}

/// A per-item action offered by every node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
}

/// An action resolved against a concrete item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAction {
    pub kind: ActionKind,
    pub item_id: String,
}

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    /// Id of the item this node projects
    pub id: String,
    pub title: String,
    pub badge: String,
    pub tone: Tone,
    pub body: String,
    /// Bottom-left text (due label, last-updated label)
    pub footer: String,
    /// Marks the node for emphasis (task due today)
    pub emphasized: bool,
    pub actions: [ActionKind; 2],
}

/// Projection of a record into a [`ListNode`]
pub trait ItemView {
    fn project(&self, today: NaiveDate) -> ListNode;
}

/// "Today", "Due: Jul 26" or "No due date"
pub fn due_label(due: Option<NaiveDate>, today: NaiveDate) -> String {
    match due {
        Some(d) if d == today => "Today".to_string(),
        Some(d) => format!("Due: {}", d.format("%b %-d")),
        None => "No due date".to_string(),
    }
}

impl ItemView for Task {
    fn project(&self, today: NaiveDate) -> ListNode {
        ListNode {
            id: self.id.clone(),
            title: self.title.clone(),
            badge: self.priority.label().to_string(),
            tone: self.priority.into(),
            body: self.description.clone().unwrap_or_default(),
            footer: due_label(self.due, today),
            emphasized: self.is_due_on(today),
            actions: [ActionKind::Edit, ActionKind::Delete],
        }
    }
}

impl ItemView for Note {
    fn project(&self, _today: NaiveDate) -> ListNode {
        ListNode {
            id: self.id.clone(),
            title: self.title.clone(),
            badge: self.subject_label(),
            tone: self.style().into(),
            body: self.content.clone(),
            footer: format!("Last updated: {}", self.last_updated),
            emphasized: false,
            actions: [ActionKind::Edit, ActionKind::Delete],
        }
    }
}

/// Projects a collection snapshot into a list of nodes.
///
/// Every call to [`render`](Self::render) throws away the previous nodes
/// and rebuilds them from the snapshot. Item actions are resolved through
/// [`action_at`](Self::action_at) against the current nodes, so no per-node
/// handlers need re-binding.
pub struct ListRenderer<T> {
    nodes: Vec<ListNode>,
    clock: Rc<dyn Clock>,
    renders: usize,
    _item: PhantomData<fn(&T)>,
}

impl<T: ItemView> ListRenderer<T> {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        ListRenderer {
            nodes: Vec::new(),
            clock,
            renders: 0,
            _item: PhantomData,
        }
    }

    /// Replace all nodes with one node per item, in order
    pub fn render(&mut self, items: &[&T]) {
        let today = self.clock.today();
        self.nodes = items.iter().map(|item| item.project(today)).collect();
        self.renders += 1;
    }

    pub fn nodes(&self) -> &[ListNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// How many times the list has been rebuilt
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Resolve an action on the node at `row` to the item it targets
    pub fn action_at(&self, row: usize, kind: ActionKind) -> Option<ItemAction> {
        let node = self.nodes.get(row)?;
        node.actions.contains(&kind).then(|| ItemAction {
            kind,
            item_id: node.id.clone(),
        })
    }

    /// Row of the node projecting `id`
    pub fn row_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

impl<T: ItemView> ChangeListener<T> for ListRenderer<T> {
    fn on_change(&mut self, items: &[&T]) {
        self.render(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::{sample_notes, sample_tasks};
    use crate::ops::store::CollectionStore;
    use crate::util::clock::FixedClock;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 26).unwrap()
    }

    fn renderer<T: ItemView>() -> ListRenderer<T> {
        ListRenderer::new(Rc::new(FixedClock::new(today())))
    }

    #[test]
    fn due_labels() {
        let t = today();
        assert_eq!(due_label(Some(t), t), "Today");
        assert_eq!(
            due_label(NaiveDate::from_ymd_opt(2025, 7, 27), t),
            "Due: Jul 27"
        );
        assert_eq!(due_label(None, t), "No due date");
    }

    #[test]
    fn task_projection() {
        let tasks = sample_tasks();
        let node = tasks[0].project(today());
        assert_eq!(node.id, "task-1");
        assert_eq!(node.title, "Complete Math Assignment");
        assert_eq!(node.badge, "Medium");
        assert_eq!(node.tone, Tone::Medium);
        assert_eq!(node.footer, "Today");
        assert!(node.emphasized);
        assert_eq!(node.actions, [ActionKind::Edit, ActionKind::Delete]);
    }

    #[test]
    fn note_projection_falls_back_for_unknown_subject() {
        let note = Note::new("note-9", "Essay", "history", "Draft");
        let node = note.project(today());
        assert_eq!(node.badge, "History");
        assert_eq!(node.tone, Tone::Neutral);
        assert_eq!(node.footer, "Last updated: Just now");
    }

    #[test]
    fn render_replaces_all_nodes() {
        let notes = sample_notes();
        let mut r = renderer::<Note>();
        r.render(&notes.iter().collect::<Vec<_>>());
        assert_eq!(r.len(), 2);
        r.render(&[&notes[1]]);
        assert_eq!(r.len(), 1);
        assert_eq!(r.nodes()[0].id, "note-2");
        assert_eq!(r.render_count(), 2);
    }

    #[test]
    fn render_is_idempotent() {
        let tasks = sample_tasks();
        let refs: Vec<&Task> = tasks.iter().collect();
        let mut r = renderer::<Task>();
        r.render(&refs);
        let first = r.nodes().to_vec();
        r.render(&refs);
        assert_eq!(r.nodes(), first.as_slice());
    }

    #[test]
    fn action_dispatch_by_row() {
        let store =
            CollectionStore::with_items(sample_tasks(), renderer::<Task>()).unwrap();
        let r = store.listener();
        assert_eq!(
            r.action_at(1, ActionKind::Delete),
            Some(ItemAction {
                kind: ActionKind::Delete,
                item_id: "task-2".into()
            })
        );
        assert_eq!(r.action_at(5, ActionKind::Edit), None);
        assert_eq!(r.row_of("task-2"), Some(1));
    }

    #[test]
    fn store_mutations_rerender() {
        let mut store = CollectionStore::new(renderer::<Task>());
        assert_eq!(store.listener().render_count(), 1);

        store
            .add(Task::new("task-x", "X", Priority::High))
            .unwrap();
        assert_eq!(store.listener().len(), 1);
        assert_eq!(store.listener().nodes()[0].badge, "High");

        let action = store.listener().action_at(0, ActionKind::Delete).unwrap();
        assert!(store.remove(&action.item_id));
        assert!(store.listener().is_empty());
        assert_eq!(store.listener().render_count(), 3);
    }
}
