//! Todo App
//!
//! Root component. Owns the store and runs the mutate -> persist ->
//! render cycle for every user action.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoList};
use crate::storage;
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    let (store, set_store) = signal(TodoStore::from_items(storage::load()));

    web_sys::console::log_1(
        &format!("[APP] Loaded {} todos", store.get_untracked().items().len()).into(),
    );

    // Returns whether the text was accepted, so the form only clears
    // its input on a real add.
    let on_add = Callback::new(move |text: String| {
        let mut added = false;
        set_store.update(|s| {
            if s.add(&text).is_some() {
                storage::save(s.items());
                added = true;
            }
        });
        added
    });

    let on_toggle = Callback::new(move |id: u32| {
        set_store.update(|s| {
            if s.toggle(id) {
                storage::save(s.items());
            } else {
                web_sys::console::warn_1(&format!("[APP] Toggle for unknown todo #{}", id).into());
            }
        });
    });

    let on_delete = Callback::new(move |id: u32| {
        set_store.update(|s| {
            if s.delete(id) {
                storage::save(s.items());
            } else {
                web_sys::console::warn_1(&format!("[APP] Delete for unknown todo #{}", id).into());
            }
        });
    });

    view! {
        <main class="app">
            <h1>"Todo List"</h1>

            <NewTodoForm on_add=on_add />

            <TodoList
                store=store
                on_toggle=on_toggle
                on_delete=on_delete
            />

            <p class="item-count">{move || format!("{} items", store.get().items().len())}</p>
        </main>
    }
}
