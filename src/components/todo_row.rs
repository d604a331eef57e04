//! Todo Row Component
//!
//! A single row with toggle and delete controls.

use leptos::prelude::*;

use crate::models::TodoItem;

/// Label for the completion toggle button
pub fn toggle_label(completed: bool) -> &'static str {
    if completed {
        "Uncomplete"
    } else {
        "Complete"
    }
}

#[component]
pub fn TodoRow(
    todo: TodoItem,
    on_toggle: Callback<u32>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.completed;

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <span class="todo-text">{todo.text}</span>
            <div class="todo-actions">
                <button class="complete-btn" on:click=move |_| on_toggle.run(id)>
                    {toggle_label(completed)}
                </button>
                <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(false), "Complete");
        assert_eq!(toggle_label(true), "Uncomplete");
    }
}
