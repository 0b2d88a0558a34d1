//! To-Do List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list-mutation
//! logic lives on [`TodoState`] itself so it can be exercised without a
//! reactive runtime; the `store_*` helpers are the reactive adapter used by
//! the components.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All to-do items, newest first
    pub items: Vec<TodoItem>,
    /// Text typed but not yet committed as an item
    pub pending_input: String,
    /// Next item identifier (monotonically increasing, never reused)
    pub next_id: u64,
}

impl TodoState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Replace the pending-input string. No validation.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Commit the pending input as a new unchecked item at the front of the
    /// list and clear the input. No-op when the input is empty.
    pub fn add_item(&mut self) {
        if self.pending_input.is_empty() {
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        let text = std::mem::take(&mut self.pending_input);
        self.items.insert(0, TodoItem::new(id, text));
    }

    /// Flip the checked flag of the item with the given id in place.
    /// Returns false (and changes nothing) when the id is absent.
    pub fn toggle_item(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Remove the item with the given id. Returns false when the id is absent.
    pub fn delete_item(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }

    /// Number of items in the list
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Number of items not yet checked off
    pub fn unchecked_count(&self) -> usize {
        self.items.iter().filter(|item| !item.checked).count()
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the pending-input string in the store
pub fn store_set_input(store: &TodoStore, text: String) {
    store.pending_input().set(text);
}

/// Commit the pending input as a new item (no-op on empty input)
pub fn store_add_item(store: &TodoStore) {
    let text = store.pending_input().get();
    if text.is_empty() {
        return;
    }
    let id = store.next_id().get();
    store.next_id().set(id + 1);
    store.items().write().insert(0, TodoItem::new(id, text));
    store.pending_input().set(String::new());
}

/// Flip the checked flag of an item in the store by ID
pub fn store_toggle_item(store: &TodoStore, id: u64) {
    store.items().write().iter_mut()
        .find(|item| item.id == id)
        .map(|item| item.checked = !item.checked);
}

/// Remove an item from the store by ID
pub fn store_delete_item(store: &TodoStore, id: u64) {
    store.items().write().retain(|item| item.id != id);
}

/// Count of all items in the store
pub fn store_total_count(store: &TodoStore) -> usize {
    store.items().read().len()
}

/// Count of unchecked items in the store
pub fn store_unchecked_count(store: &TodoStore) -> usize {
    store.items().read().iter().filter(|item| !item.checked).count()
}

#[cfg(test)]
mod tests {
    use super::TodoState;

    fn add(state: &mut TodoState, text: &str) {
        state.set_input(text);
        state.add_item();
    }

    #[test]
    fn test_add_with_empty_input_is_noop() {
        let mut state = TodoState::new();
        state.add_item();

        assert_eq!(state.total_count(), 0);
        assert_eq!(state.next_id, 1);
    }

    #[test]
    fn test_add_prepends_unchecked_item() {
        let mut state = TodoState::new();
        add(&mut state, "Buy milk");
        add(&mut state, "Walk dog");

        assert_eq!(state.total_count(), 2);
        assert_eq!(state.items[0].text, "Walk dog");
        assert_eq!(state.items[1].text, "Buy milk");
        assert!(!state.items[0].checked);
        assert!(!state.items[1].checked);
    }

    #[test]
    fn test_add_clears_pending_input() {
        let mut state = TodoState::new();
        add(&mut state, "Buy milk");

        assert_eq!(state.pending_input, "");
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut state = TodoState::new();
        add(&mut state, "A");
        add(&mut state, "B");
        let a_id = state.items[1].id;

        assert!(state.toggle_item(a_id));

        assert!(state.items[1].checked);
        assert!(!state.items[0].checked);

        assert!(state.toggle_item(a_id));
        assert!(!state.items[1].checked);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut state = TodoState::new();
        add(&mut state, "A");

        assert!(!state.toggle_item(999));
        assert_eq!(state.unchecked_count(), 1);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut state = TodoState::new();
        add(&mut state, "A");
        add(&mut state, "B");
        let b_id = state.items[0].id;

        assert!(state.delete_item(b_id));

        assert_eq!(state.total_count(), 1);
        assert_eq!(state.items[0].text, "A");
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut state = TodoState::new();
        add(&mut state, "A");

        assert!(!state.delete_item(999));
        assert_eq!(state.total_count(), 1);
    }

    #[test]
    fn test_ids_unique_after_delete() {
        let mut state = TodoState::new();
        add(&mut state, "A");
        add(&mut state, "B");
        let b_id = state.items[0].id;
        state.delete_item(b_id);
        add(&mut state, "C");

        let c_id = state.items[0].id;
        assert_ne!(c_id, b_id);
        let mut ids: Vec<u64> = state.items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.total_count());
    }

    #[test]
    fn test_unchecked_count_tracks_checked_items() {
        let mut state = TodoState::new();
        for text in ["A", "B", "C", "D"] {
            add(&mut state, text);
        }
        state.toggle_item(state.items[1].id);
        state.toggle_item(state.items[3].id);

        let checked = state.items.iter().filter(|item| item.checked).count();
        assert_eq!(state.unchecked_count(), state.total_count() - checked);

        state.toggle_item(state.items[1].id);
        let checked = state.items.iter().filter(|item| item.checked).count();
        assert_eq!(state.unchecked_count(), state.total_count() - checked);
    }

    #[test]
    fn test_example_sequence() {
        let mut state = TodoState::new();
        add(&mut state, "A");
        add(&mut state, "B");

        assert_eq!(state.items[0].text, "B");
        assert_eq!(state.items[1].text, "A");
        assert_eq!(state.total_count(), 2);
        assert_eq!(state.unchecked_count(), 2);

        let a_id = state.items[1].id;
        state.toggle_item(a_id);
        assert_eq!(state.unchecked_count(), 1);

        let b_id = state.items[0].id;
        state.delete_item(b_id);
        assert_eq!(state.total_count(), 1);
        assert_eq!(state.items[0].text, "A");
        assert!(state.items[0].checked);
    }
}
