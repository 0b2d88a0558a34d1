//! Todo List Component
//!
//! Renders the ordered item list, newest first.

use leptos::prelude::*;

use crate::components::TodoListItem;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// The to-do item list
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=move || store.items().get()
                key=|item| {
                    // Key on all mutable fields so in-place toggles re-render
                    (item.id, item.checked, item.text.clone())
                }
                children=move |item| view! { <TodoListItem item=item /> }
            />
        </ul>
    }
}
