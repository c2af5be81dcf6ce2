//! Todo Items List Component
//!
//! Displays items active-first with drag-and-drop reordering.
//! Uses leptos-dragdrop; hovering a card marks its index as the drop destination.

use leptos::prelude::*;

use crate::components::TodoItemCard;
use crate::context::use_todo_items;
use crate::models::TodoItem;
use crate::order::{apply_drop, display_order, index_of, item_key};
use crate::store::TodoAction;

use leptos_dragdrop::*;

/// Action to dispatch for a finished drag, if any
pub fn drop_action(displayed: &[TodoItem], result: &DropResult) -> Option<TodoAction> {
    apply_drop(displayed, result).map(TodoAction::Reorder)
}

/// Item list with DnD support
#[component]
pub fn TodoItemsList() -> impl IntoView {
    let todos = use_todo_items();

    // Create DnD signals
    let dnd = create_dnd_signals(todos.drag_threshold_px);

    // Drag indices refer to this derived order, never the canonical one
    let sorted_items = Memo::new(move |_| display_order(&todos.items()));

    bind_global_mouseup(dnd, move |result| {
        let displayed = sorted_items.get_untracked();
        match drop_action(&displayed, &result) {
            Some(action) => {
                tracing::debug!(
                    draggable_id = %result.draggable_id,
                    from = result.source.index,
                    to = ?result.destination.map(|d| d.index),
                    "drop"
                );
                todos.dispatch(action);
            }
            None => {
                tracing::debug!(draggable_id = %result.draggable_id, reason = ?result.reason, "drag ended without reorder");
            }
        }
    });

    let on_list_mouseleave = make_on_mouseleave(dnd);

    view! {
        <ul class="todo-items-list" on:mouseleave=on_list_mouseleave>
            <For
                each=move || sorted_items.get()
                key=item_key
                children=move |item| {
                    let id = item.id;
                    let index = Memo::new({
                        let id = id.clone();
                        move |_| sorted_items.with(|items| index_of(items, &id))
                    });
                    let on_mousedown = make_on_mousedown(dnd, id.clone(), index.into());
                    let on_mouseenter = make_on_item_mouseenter(dnd, index.into());

                    let item_class = {
                        let id = id.clone();
                        move || {
                            let mut c = String::from("todo-item-wrapper");
                            let source = dnd.dragging_read.with(|d| d.as_ref().map(|s| (s.draggable_id == id, s.index)));
                            if let Some((is_self, source_index)) = source {
                                if is_self { c.push_str(" dragging"); }
                                let side = match (dnd.over_index_read.get(), index.get()) {
                                    (Some(over), Some(own)) if over == own => drop_side(source_index, over),
                                    _ => None,
                                };
                                match side {
                                    Some(DropSide::Above) => c.push_str(" drop-target above"),
                                    Some(DropSide::Below) => c.push_str(" drop-target below"),
                                    None => {}
                                }
                            }
                            c
                        }
                    };

                    let draggable_id = id.clone();
                    view! {
                        <li
                            class=item_class
                            data-draggable-id=draggable_id
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                        >
                            <TodoItemCard id=id />
                        </li>
                    }
                }
            />
        </ul>
    }
}
