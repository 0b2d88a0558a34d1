//! Todo Frontend App
//!
//! Main application component.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Counts, NewTodoForm, TodoList};
use crate::store::{store_total_count, store_unchecked_count, TodoState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(TodoState::new());

    // Provide the store to all children
    provide_context(store);

    // Log count changes
    Effect::new(move |_| {
        let total = store_total_count(&store);
        let unchecked = store_unchecked_count(&store);
        web_sys::console::log_1(&format!("[APP] {} items, {} unchecked", total, unchecked).into());
    });

    view! {
        <h1 class="center title">"My TODO App"</h1>
        <Counts />
        <NewTodoForm />
        <TodoList />
    }
}
