//! Frontend Models
//!
//! Data structures for the to-do list.

use serde::{Deserialize, Serialize};

/// One to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub checked: bool,
}

impl TodoItem {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            checked: false,
        }
    }
}
