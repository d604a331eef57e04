//! Frontend Models
//!
//! Data structures for the todo list.

use serde::{Deserialize, Serialize};

/// A single todo entry
///
/// `id` is a stable identifier assigned by the store at creation; rows
/// reference items by id, never by position. Data persisted before ids
/// existed deserializes with `id == 0` and is reassigned on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(default)]
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    /// Create a new incomplete item
    pub fn new(id: u32, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}
