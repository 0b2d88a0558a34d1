//! UI Components
//!
//! Reusable Leptos components.

mod counts;
mod new_todo_form;
mod todo_list;
mod todo_list_item;

pub use counts::Counts;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_list_item::TodoListItem;
