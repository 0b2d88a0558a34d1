//! Todo List Item Component
//!
//! A single list row with checkbox, text and delete button.

use leptos::prelude::*;

use crate::models::TodoItem;
use crate::store::{store_delete_item, store_toggle_item, use_todo_store};

/// A single to-do row
///
/// Handlers capture the item id directly instead of reading it back off the
/// DOM event target.
#[component]
pub fn TodoListItem(item: TodoItem) -> impl IntoView {
    let store = use_todo_store();

    let id = item.id;
    let checked = item.checked;
    let text = item.text.clone();

    view! {
        <li class="todo-container">
            <input
                class="todo-checkbox"
                type="checkbox"
                checked=checked
                on:change=move |_| store_toggle_item(&store, id)
            />
            {if checked {
                view! { <s class="todo-crossed">{text.clone()}</s> }.into_any()
            } else {
                view! { <span class="todo-text">{text.clone()}</span> }.into_any()
            }}
            <button
                class="todo-delete"
                on:click=move |_| store_delete_item(&store, id)
            >
                "delete"
            </button>
        </li>
    }
}
