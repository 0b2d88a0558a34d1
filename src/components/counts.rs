//! Counts Component
//!
//! Displays the total item count and the unchecked item count.

use leptos::prelude::*;

use crate::store::{store_total_count, store_unchecked_count, use_todo_store};

/// Running counts shown above the list
#[component]
pub fn Counts() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="flow-right controls">
            <span>
                "Item count: "
                <span class="todo-text" id="item-count">
                    {move || store_total_count(&store)}
                </span>
            </span>
            <span>
                "Unchecked count: "
                <span class="todo-text" id="unchecked-count">
                    {move || store_unchecked_count(&store)}
                </span>
            </span>
        </div>
    }
}
