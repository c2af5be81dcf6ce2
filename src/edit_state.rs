//! Card Edit State
//!
//! Per-card edit mode: either viewing the committed item or editing a draft.

use crate::models::TodoItem;
use crate::store::{EditPayload, TodoAction};

/// Unsaved values shown while editing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub details: String,
    pub done: bool,
}

impl Draft {
    /// Seed a draft from the committed item
    pub fn from_item(item: &TodoItem) -> Self {
        Self {
            title: item.title.clone(),
            details: item.details.clone().unwrap_or_default(),
            done: item.done,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardMode {
    #[default]
    Viewing,
    Editing(Draft),
}

impl CardMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, CardMode::Editing(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            CardMode::Editing(draft) => Some(draft),
            CardMode::Viewing => None,
        }
    }

    /// Enter edit mode. Always re-seeds from the live item, dropping any
    /// earlier unsaved draft.
    pub fn begin_edit(&mut self, item: &TodoItem) {
        *self = CardMode::Editing(Draft::from_item(item));
    }

    /// Change the draft in place. No-op while viewing.
    pub fn update_draft(&mut self, f: impl FnOnce(&mut Draft)) {
        if let CardMode::Editing(draft) = self {
            f(draft);
        }
    }

    /// Leave edit mode, returning the edit action to dispatch.
    /// `None` when the card was not editing.
    pub fn save(&mut self, id: &str) -> Option<TodoAction> {
        match std::mem::take(self) {
            CardMode::Editing(draft) => Some(TodoAction::Edit(EditPayload {
                id: id.to_string(),
                title: draft.title,
                details: draft.details,
                done: draft.done,
            })),
            CardMode::Viewing => None,
        }
    }
}

/// Action for the completion checkbox; independent of edit mode
pub fn toggle_done_action(item: &TodoItem) -> TodoAction {
    TodoAction::ToggleDone { id: item.id.clone() }
}

pub fn delete_action(item: &TodoItem) -> TodoAction {
    TodoAction::Delete { id: item.id.clone() }
}
