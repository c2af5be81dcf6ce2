//! Frontend Models
//!
//! Data structures for todo items.

use serde::{Deserialize, Serialize};

/// A single task item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque unique identifier, also used as drag identifier
    pub id: String,
    pub title: String,
    /// Optional secondary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl TodoItem {
    /// Create a new, not-done item with a fresh random id
    pub fn new(title: impl Into<String>, details: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            details: details.filter(|d| !d.is_empty()),
            done: false,
        }
    }

    /// Details text, only when non-empty
    pub fn visible_details(&self) -> Option<&str> {
        self.details.as_deref().filter(|d| !d.is_empty())
    }
}
