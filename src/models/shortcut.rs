//! Observable list of user-created folder shortcuts.
//!
//! Mirrors the shortcut store collaborator: an ordered list of directory
//! entries mutated through splice-style edits. Persistence lives in the
//! store, not here.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::EntryRc;
use crate::utils::{ListenerKey, Listeners};

/// Ordered, observable list of shortcut entries.
#[derive(Default)]
pub struct ShortcutList {
    entries: RefCell<Vec<EntryRc>>,
    listeners: Listeners,
}

impl ShortcutList {
    /// Create an empty shortcut list.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Create a list seeded with `entries` in insertion order.
    pub fn from_entries(entries: Vec<EntryRc>) -> Rc<Self> {
        Rc::new(Self {
            entries: RefCell::new(entries),
            listeners: Listeners::new(),
        })
    }

    /// Number of shortcuts.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the list holds no shortcuts.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Shortcut at `index`, if in range.
    pub fn item(&self, index: usize) -> Option<EntryRc> {
        self.entries.borrow().get(index).cloned()
    }

    /// Snapshot of all shortcuts in insertion order.
    pub fn snapshot(&self) -> Vec<EntryRc> {
        self.entries.borrow().clone()
    }

    /// Splice-style edit: remove `delete_count` entries at `index`, then
    /// insert `additions` there. Indices past the end clamp to the end.
    /// Observers are notified once per splice.
    pub fn splice(&self, index: usize, delete_count: usize, additions: Vec<EntryRc>) {
        {
            let mut entries = self.entries.borrow_mut();
            let start = index.min(entries.len());
            let end = (start + delete_count).min(entries.len());
            entries.splice(start..end, additions);
        }
        self.listeners.notify();
    }

    /// Register a change observer.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> ListenerKey {
        self.listeners.subscribe(callback)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&self, key: ListenerKey) {
        self.listeners.unsubscribe(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FakeEntry;
    use std::cell::Cell;

    fn entry(name: &str) -> EntryRc {
        FakeEntry::new(name, format!("filesystem:drive/root/{name}"))
    }

    fn names(list: &ShortcutList) -> Vec<String> {
        list.snapshot().iter().map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn test_splice_insert_and_remove() {
        let list = ShortcutList::from_entries(vec![entry("shortcut")]);

        list.splice(1, 0, vec![entry("shortcut2")]);
        assert_eq!(names(&list), ["shortcut", "shortcut2"]);

        list.splice(0, 0, vec![entry("head")]);
        assert_eq!(names(&list), ["head", "shortcut", "shortcut2"]);

        list.splice(2, 1, Vec::new());
        assert_eq!(names(&list), ["head", "shortcut"]);

        list.splice(0, 1, Vec::new());
        assert_eq!(names(&list), ["shortcut"]);
    }

    #[test]
    fn test_splice_clamps_out_of_range() {
        let list = ShortcutList::from_entries(vec![entry("shortcut")]);
        list.splice(10, 5, vec![entry("tail")]);
        assert_eq!(names(&list), ["shortcut", "tail"]);
    }

    #[test]
    fn test_splice_notifies_once() {
        let list = ShortcutList::new();
        let hits = Rc::new(Cell::new(0));
        let hits_clone = Rc::clone(&hits);
        list.subscribe(move || hits_clone.set(hits_clone.get() + 1));

        list.splice(0, 0, vec![entry("a"), entry("b")]);
        assert_eq!(hits.get(), 1);
    }
}
