//! To-Do Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created by the to-do page and provided to its children, so it lives
//! exactly as long as the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TaskId;
use crate::task_list::TodoList;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Tasks in display order
    pub list: TodoList,
    /// Text currently typed into the add-task input
    pub draft: String,
}

impl TodoState {
    pub fn seeded() -> Self {
        Self {
            list: TodoList::seeded(),
            draft: String::new(),
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the to-do store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add the current draft as a task and clear the draft on success
pub fn store_add_draft(store: &TodoStore) {
    let draft = store.draft().get_untracked();
    if draft.trim().is_empty() {
        log::debug!("ignored blank task");
        return;
    }
    let added = store.list().write().add(&draft);
    if let Some(id) = added {
        log::debug!("added task {id}");
        store.draft().set(String::new());
    }
}

/// Flip a task's completed flag
pub fn store_toggle_task(store: &TodoStore, id: TaskId) {
    if !store.list().write().toggle(id) {
        log::debug!("toggle ignored, no task {id}");
    }
}

/// Remove a task by ID
pub fn store_delete_task(store: &TodoStore, id: TaskId) {
    if !store.list().write().delete(id) {
        log::debug!("delete ignored, no task {id}");
    }
}

/// Remove all completed tasks
pub fn store_delete_completed(store: &TodoStore) {
    let removed = store.list().write().delete_completed();
    log::debug!("deleted {removed} completed task(s)");
}
