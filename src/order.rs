//! List Ordering
//!
//! Display order derivation and drop handling for the item list.

use std::cmp::Ordering;

use leptos_dragdrop::DropResult;

use crate::models::TodoItem;

/// Active items first, done items last.
/// Stable: relative order inside each group follows the canonical order.
pub fn display_order(items: &[TodoItem]) -> Vec<TodoItem> {
    let mut sorted = items.to_vec();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| match (a.done, b.done) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    });
    sorted
}

/// Render key for a card. Only the id: a card must survive toggles,
/// edits and moves of other items without remounting.
pub fn item_key(item: &TodoItem) -> String {
    item.id.clone()
}

/// Position of an item in the displayed list
pub fn index_of(displayed: &[TodoItem], id: &str) -> Option<usize> {
    displayed.iter().position(|item| item.id == id)
}

/// Move the element at `start` so it ends up at `end`.
/// Returns `None` when either index is out of range.
pub fn reorder<T: Clone>(list: &[T], start: usize, end: usize) -> Option<Vec<T>> {
    if start >= list.len() || end >= list.len() {
        return None;
    }
    let mut result = list.to_vec();
    let removed = result.remove(start);
    result.insert(end, removed);
    Some(result)
}

/// New canonical order for a finished drag over the displayed list.
///
/// `None` means nothing should be dispatched: the drag was cancelled or its
/// indices no longer match the list. Because `displayed` is the done-last
/// order, the returned sequence commits that partition into canonical order.
pub fn apply_drop(displayed: &[TodoItem], result: &DropResult) -> Option<Vec<TodoItem>> {
    let destination = result.destination?;
    reorder(displayed, result.source.index, destination.index)
}
