//! Modal Shell
//!
//! Backdrop plus content box. Visibility is entirely controlled by the
//! caller; when closed nothing is rendered, so children start fresh on
//! every open.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
