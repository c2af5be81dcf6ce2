//! New Item Form Component
//!
//! Form for creating new items with optional details.

use leptos::prelude::*;

use crate::context::use_todo_items;
use crate::models::TodoItem;
use crate::store::TodoAction;

/// Build the add action, or nothing when the title is blank
pub fn new_item_action(title: &str, details: &str) -> Option<TodoAction> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let details = details.trim();
    let details = (!details.is_empty()).then(|| details.to_string());
    Some(TodoAction::Add(TodoItem::new(title, details)))
}

#[component]
pub fn NewItemForm() -> impl IntoView {
    let todos = use_todo_items();

    let (new_title, set_new_title) = signal(String::new());
    let (new_details, set_new_details) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(action) = new_item_action(&new_title.get_untracked(), &new_details.get_untracked()) else {
            return;
        };
        todos.dispatch(action);
        set_new_title.set(String::new());
        set_new_details.set(String::new());
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add new item..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
            <textarea
                class="new-item-details"
                placeholder="Details (optional)"
                prop:value=move || new_details.get()
                on:input=move |ev| set_new_details.set(event_target_value(&ev))
            ></textarea>
        </form>
    }
}
