//! Item Store
//!
//! Holds the canonical item order in a `reactive_stores` store and
//! applies dispatched actions through a pure reducer.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::models::TodoItem;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All items in canonical (manual) order
    pub items: Vec<TodoItem>,
}

impl TodoState {
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self { items }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Full field replacement sent when an edit is saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPayload {
    pub id: String,
    pub title: String,
    pub details: String,
    pub done: bool,
}

/// Messages accepted by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum TodoAction {
    Add(TodoItem),
    ToggleDone { id: String },
    Delete { id: String },
    Edit(EditPayload),
    /// Replace the canonical order with this full sequence
    Reorder(Vec<TodoItem>),
}

impl TodoAction {
    pub fn kind(&self) -> &'static str {
        match self {
            TodoAction::Add(_) => "add",
            TodoAction::ToggleDone { .. } => "toggleDone",
            TodoAction::Delete { .. } => "delete",
            TodoAction::Edit(_) => "edit",
            TodoAction::Reorder(_) => "reorder",
        }
    }
}

fn find_mut<'a>(items: &'a mut [TodoItem], id: &str) -> StoreResult<&'a mut TodoItem> {
    items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}

/// Apply one action to the item collection.
/// On error the collection is left unchanged.
pub fn apply_action(items: &mut Vec<TodoItem>, action: TodoAction) -> StoreResult<()> {
    match action {
        TodoAction::Add(item) => {
            if items.iter().any(|existing| existing.id == item.id) {
                return Err(StoreError::DuplicateId(item.id));
            }
            items.push(item);
        }
        TodoAction::ToggleDone { id } => {
            let item = find_mut(items, &id)?;
            item.done = !item.done;
        }
        TodoAction::Delete { id } => {
            let before = items.len();
            items.retain(|item| item.id != id);
            if items.len() == before {
                return Err(StoreError::NotFound(id));
            }
        }
        TodoAction::Edit(payload) => {
            let item = find_mut(items, &payload.id)?;
            item.title = payload.title;
            item.details = Some(payload.details).filter(|d| !d.is_empty());
            item.done = payload.done;
        }
        TodoAction::Reorder(reordered) => {
            let current: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
            let proposed: HashSet<&str> = reordered.iter().map(|i| i.id.as_str()).collect();
            if reordered.len() != items.len() || proposed.len() != reordered.len() || current != proposed {
                return Err(StoreError::ReorderMismatch {
                    expected: items.len(),
                    actual: reordered.len(),
                });
            }
            *items = reordered;
        }
    }
    Ok(())
}

/// Apply an action to the reactive store. Fire-and-forget: rejected
/// actions are logged and leave the store untouched.
pub fn store_dispatch(store: &TodoStore, action: TodoAction) {
    let kind = action.kind();
    tracing::debug!(action = kind, "dispatch");
    let field = store.items();
    let mut items = field.write();
    if let Err(error) = apply_action(&mut items, action) {
        tracing::warn!(action = kind, %error, "action rejected by store");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, done: bool) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            title: format!("Item {}", id),
            details: None,
            done,
        }
    }

    fn ids(items: &[TodoItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_add_appends() {
        let mut items = vec![item("a", false)];
        apply_action(&mut items, TodoAction::Add(item("b", false))).unwrap();
        assert_eq!(ids(&items), vec!["a", "b"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut items = vec![item("a", false)];
        let err = apply_action(&mut items, TodoAction::Add(item("a", true))).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("a".to_string()));
        assert_eq!(items, vec![item("a", false)]);
    }

    #[test]
    fn test_toggle_done_flips_flag() {
        let mut items = vec![item("a", false), item("b", true)];
        apply_action(&mut items, TodoAction::ToggleDone { id: "a".into() }).unwrap();
        apply_action(&mut items, TodoAction::ToggleDone { id: "b".into() }).unwrap();
        assert!(items[0].done);
        assert!(!items[1].done);
    }

    #[test]
    fn test_delete_removes_item() {
        let mut items = vec![item("a", false), item("b", false), item("c", false)];
        apply_action(&mut items, TodoAction::Delete { id: "b".into() }).unwrap();
        assert_eq!(ids(&items), vec!["a", "c"]);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut items = vec![item("a", false)];
        let err = apply_action(&mut items, TodoAction::Delete { id: "zz".into() }).unwrap_err();
        assert_eq!(err, StoreError::NotFound("zz".to_string()));
        let err = apply_action(&mut items, TodoAction::ToggleDone { id: "zz".into() }).unwrap_err();
        assert_eq!(err, StoreError::NotFound("zz".to_string()));
        assert_eq!(items, vec![item("a", false)]);
    }

    #[test]
    fn test_edit_replaces_fields_wholesale() {
        let mut items = vec![TodoItem {
            details: Some("old details".into()),
            ..item("a", false)
        }];
        let payload = EditPayload {
            id: "a".into(),
            title: "New title".into(),
            details: "new details".into(),
            done: true,
        };

        apply_action(&mut items, TodoAction::Edit(payload)).unwrap();

        assert_eq!(items[0].title, "New title");
        assert_eq!(items[0].details.as_deref(), Some("new details"));
        assert!(items[0].done);
    }

    #[test]
    fn test_edit_with_empty_details_clears_them() {
        let mut items = vec![TodoItem {
            details: Some("something".into()),
            ..item("a", false)
        }];
        let payload = EditPayload {
            id: "a".into(),
            title: "A".into(),
            details: String::new(),
            done: false,
        };

        apply_action(&mut items, TodoAction::Edit(payload)).unwrap();

        assert_eq!(items[0].details, None);
    }

    #[test]
    fn test_reorder_replaces_canonical_order() {
        let mut items = vec![item("a", false), item("b", false), item("c", true)];
        let reordered = vec![item("c", true), item("a", false), item("b", false)];
        apply_action(&mut items, TodoAction::Reorder(reordered)).unwrap();
        assert_eq!(ids(&items), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_rejects_non_permutation() {
        let original = vec![item("a", false), item("b", false)];

        let mut items = original.clone();
        let err = apply_action(&mut items, TodoAction::Reorder(vec![item("a", false)])).unwrap_err();
        assert_eq!(err, StoreError::ReorderMismatch { expected: 2, actual: 1 });

        let err = apply_action(&mut items, TodoAction::Reorder(vec![item("a", false), item("a", false)])).unwrap_err();
        assert_eq!(err, StoreError::ReorderMismatch { expected: 2, actual: 2 });

        let err = apply_action(&mut items, TodoAction::Reorder(vec![item("a", false), item("x", false)])).unwrap_err();
        assert_eq!(err, StoreError::ReorderMismatch { expected: 2, actual: 2 });

        assert_eq!(items, original);
    }

    #[test]
    fn test_dispatch_applies_and_swallows_rejections() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(TodoState::new(vec![item("a", false), item("b", false)]));

        store_dispatch(&store, TodoAction::ToggleDone { id: "a".into() });
        store_dispatch(&store, TodoAction::Delete { id: "missing".into() });

        assert_eq!(store.items().get_untracked(), vec![item("a", true), item("b", false)]);
    }

    #[test]
    fn test_action_message_shape() {
        let action = TodoAction::ToggleDone { id: "a".into() };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "toggleDone", "data": { "id": "a" } }));

        let action = TodoAction::Reorder(vec![item("a", false)]);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "reorder");
        assert_eq!(json["data"][0]["id"], "a");
    }
}
