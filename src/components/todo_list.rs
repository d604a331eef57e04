//! Todo List Component
//!
//! Rebuilds the displayed list in full from store state.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::TodoStore;

#[component]
pub fn TodoList(
    store: ReadSignal<TodoStore>,
    on_toggle: Callback<u32>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || store.get().items().to_vec()
                // Key on every displayed field so toggles re-render the row
                key=|todo| (todo.id, todo.completed, todo.text.clone())
                children=move |todo| {
                    view! {
                        <TodoRow
                            todo=todo
                            on_toggle=on_toggle
                            on_delete=on_delete
                        />
                    }
                }
            />
        </ul>
    }
}
