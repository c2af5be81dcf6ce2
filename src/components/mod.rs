//! UI Components
//!
//! Reusable Leptos components.

mod new_item_form;
mod todo_item_card;
mod todo_items_list;

pub use new_item_form::NewItemForm;
pub use todo_item_card::TodoItemCard;
pub use todo_items_list::TodoItemsList;
