//! localStorage Persistence
//!
//! Whole-list replace under a fixed key. Missing or malformed data
//! loads as an empty list; write failures leave the in-memory list
//! authoritative for the session.

use gloo_storage::{errors::StorageError, LocalStorage, Storage};

use crate::models::TodoItem;

/// localStorage key for the serialized list
pub const STORAGE_TODOS: &str = "todos";

/// Load todos from localStorage.
pub fn load() -> Vec<TodoItem> {
    match LocalStorage::get(STORAGE_TODOS) {
        Ok(todos) => todos,
        Err(StorageError::KeyNotFound(_)) => Vec::new(),
        Err(err) => {
            web_sys::console::warn_1(
                &format!("[STORAGE] Ignoring unreadable todo data: {}", err).into(),
            );
            Vec::new()
        }
    }
}

/// Save todos to localStorage, replacing the previous value.
pub fn save(todos: &[TodoItem]) {
    if let Err(err) = LocalStorage::set(STORAGE_TODOS, todos) {
        web_sys::console::warn_1(&format!("[STORAGE] Failed to persist todos: {}", err).into());
    }
}
