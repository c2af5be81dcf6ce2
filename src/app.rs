//! Todo Items App
//!
//! Root component: loads config, provides the item store, lays out the page.

use leptos::prelude::*;

use crate::components::{NewItemForm, TodoItemsList};
use crate::config::load_config;
use crate::context::TodoContext;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Provide context to all children
    let todos = TodoContext::new(config.seed_items(), config.drag_threshold_px);
    provide_context(todos);

    let item_count = move || {
        let items = todos.items();
        let done = items.iter().filter(|item| item.done).count();
        format!("{} items, {} done", items.len(), done)
    };

    view! {
        <main class="main-content">
            <h1>{config.app_title}</h1>

            <NewItemForm />

            <TodoItemsList />

            <p class="item-count">{item_count}</p>
        </main>
    }
}
