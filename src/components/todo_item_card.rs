//! Todo Item Card Component
//!
//! One item as a titled panel with toggle, delete and in-place edit.

use leptos::prelude::*;

use crate::context::use_todo_items;
use crate::edit_state::{delete_action, toggle_done_action, CardMode, Draft};
use crate::models::TodoItem;

/// Card for the item with this id. Reads the live item from the store, so
/// the card stays mounted (and keeps its draft) while the item changes.
#[component]
pub fn TodoItemCard(id: String) -> impl IntoView {
    let todos = use_todo_items();

    let id = StoredValue::new(id);
    let item = Memo::new(move |_| id.with_value(|id| todos.item(id)));
    let (mode, set_mode) = signal(CardMode::default());
    let is_editing = Memo::new(move |_| mode.with(CardMode::is_editing));

    let read_item = move |read: fn(&TodoItem) -> String| {
        move || item.with(|it| it.as_ref().map(read).unwrap_or_default())
    };
    let draft_field = move |read: fn(&Draft) -> String| {
        move || mode.with(|m| m.draft().map(read).unwrap_or_default())
    };
    let is_done = move || item.with(|it| it.as_ref().is_some_and(|it| it.done));
    let has_details = move || item.with(|it| it.as_ref().is_some_and(|it| it.visible_details().is_some()));

    let on_edit = move |_| {
        // Seed from the live item, never from an earlier draft
        if let Some(live) = item.get_untracked() {
            set_mode.update(|m| m.begin_edit(&live));
        }
    };

    let on_save = move |_| {
        let mut current = mode.get_untracked();
        let action = id.with_value(|id| current.save(id));
        set_mode.set(current);
        if let Some(action) = action {
            todos.dispatch(action);
        }
    };

    let on_toggle_done = move |_| {
        if let Some(action) = item.with_untracked(|it| it.as_ref().map(toggle_done_action)) {
            todos.dispatch(action);
        }
    };
    let on_delete = move |_| {
        if let Some(action) = item.with_untracked(|it| it.as_ref().map(delete_action)) {
            todos.dispatch(action);
        }
    };

    let title_class = move || if is_done() { "card-title done" } else { "card-title" };

    view! {
        <div class="todo-card">
            <div class="card-header">
                <Show
                    when=move || is_editing.get()
                    fallback=move || view! {
                        <label class="card-title-label">
                            <input
                                type="checkbox"
                                name=id.with_value(|id| format!("checked-{}", id))
                                prop:checked=is_done
                                on:change=on_toggle_done
                            />
                            <span class=title_class>{read_item(|it| it.title.clone())}</span>
                        </label>
                    }
                >
                    <input
                        type="text"
                        class="card-title-input"
                        prop:value=draft_field(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_mode.update(|m| m.update_draft(|d| d.title = value));
                        }
                    />
                    <label class="card-done-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || mode.with(|m| m.draft().is_some_and(|d| d.done))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                set_mode.update(|m| m.update_draft(|d| d.done = checked));
                            }
                        />
                        "Done"
                    </label>
                </Show>

                <div class="card-actions">
                    <Show
                        when=move || is_editing.get()
                        fallback=move || view! {
                            <button class="edit-btn" aria-label="edit" on:click=on_edit>"Edit"</button>
                        }
                    >
                        <button class="save-btn" aria-label="save" on:click=on_save>"Save"</button>
                    </Show>
                    <button class="delete-btn" aria-label="delete" on:click=on_delete>"×"</button>
                </div>
            </div>

            // Details can only be edited when the item already has them
            <Show when=has_details>
                <div class="card-content">
                    <Show
                        when=move || is_editing.get()
                        fallback=move || view! {
                            <p class="card-details">
                                {read_item(|it| it.visible_details().unwrap_or_default().to_string())}
                            </p>
                        }
                    >
                        <textarea
                            class="card-details-input"
                            prop:value=draft_field(|d| d.details.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_mode.update(|m| m.update_draft(|d| d.details = value));
                            }
                        ></textarea>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
