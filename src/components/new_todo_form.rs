//! New Todo Form Component
//!
//! Text input plus button for committing a new to-do item.

use leptos::prelude::*;

use crate::store::{store_add_item, store_set_input, use_todo_store, TodoStateStoreFields};

/// Form for creating new to-do items
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();

    // Empty-input adds are rejected inside store_add_item
    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_item(&store);
    };

    view! {
        <form class="new-todo-form" on:submit=on_add>
            <input
                class="center"
                type="text"
                prop:value=move || store.pending_input().get()
                on:input=move |ev| store_set_input(&store, event_target_value(&ev))
            />
            <button type="submit" class="button center">
                "New TODO"
            </button>
        </form>
    }
}
