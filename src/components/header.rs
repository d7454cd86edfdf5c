//! Header Component

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] on_open_add: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="header-title">"Menu"</h1>
            <button type="button" class="new-food-btn" on:click=move |_| on_open_add.run(())>
                <span class="text">"New dish"</span>
                <span class="icon">"+"</span>
            </button>
        </header>
    }
}
