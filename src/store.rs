//! Todo List Store
//!
//! Owns the in-memory list and all mutations. Items are identified by
//! stable id rather than position, so a stale row reference can never
//! hit the wrong item after a delete shifts the sequence.

use crate::models::TodoItem;

/// The ordered todo list plus its id counter
#[derive(Debug, Clone, PartialEq)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
    next_id: u32,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoStore {
    /// Build a store from previously persisted items.
    ///
    /// Zero ids (legacy data) and duplicate ids are reassigned so every
    /// item ends up with a unique id and `next_id` stays above them all.
    pub fn from_items(mut todos: Vec<TodoItem>) -> Self {
        let mut next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let mut seen = Vec::with_capacity(todos.len());
        for todo in &mut todos {
            if todo.id == 0 || seen.contains(&todo.id) {
                todo.id = next_id;
                next_id += 1;
            }
            seen.push(todo.id);
        }
        Self { todos, next_id }
    }

    /// Items in display order
    pub fn items(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Append a new incomplete item and return its id.
    ///
    /// Whitespace-only text is rejected and leaves the store untouched.
    pub fn add(&mut self, text: &str) -> Option<u32> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.todos.push(TodoItem::new(id, trimmed.to_string()));
        Some(id)
    }

    /// Flip the completion flag of the item with this id.
    /// Unknown ids are a no-op and return false.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the item with this id, keeping the order of the rest.
    /// Unknown ids are a no-op and return false.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }
}
