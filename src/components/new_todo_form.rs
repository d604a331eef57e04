//! New Todo Form Component
//!
//! Input row for creating todos. The submit handler covers both the
//! Add button and the Enter key.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn NewTodoForm(on_add: Callback<String, bool>) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if on_add.run(new_text.get()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add a new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
