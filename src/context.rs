//! Application Context
//!
//! Item store access provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;
use crate::store::{store_dispatch, TodoAction, TodoState, TodoStateStoreFields, TodoStore};

/// Read and dispatch access to the item store
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: TodoStore,
    /// Pointer movement before a press turns into a drag
    pub drag_threshold_px: i32,
}

impl TodoContext {
    pub fn new(items: Vec<TodoItem>, drag_threshold_px: i32) -> Self {
        Self {
            store: Store::new(TodoState::new(items)),
            drag_threshold_px,
        }
    }

    /// Current items in canonical order (tracked)
    pub fn items(&self) -> Vec<TodoItem> {
        self.store.items().get()
    }

    /// Live version of one item (tracked)
    pub fn item(&self, id: &str) -> Option<TodoItem> {
        self.store
            .items()
            .with(|items| items.iter().find(|item| item.id == id).cloned())
    }

    pub fn dispatch(&self, action: TodoAction) {
        store_dispatch(&self.store, action);
    }
}

/// Get the item store from context
pub fn use_todo_items() -> TodoContext {
    expect_context::<TodoContext>()
}
