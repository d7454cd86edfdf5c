//! Food Form Component
//!
//! Image, name, price and description inputs shared by the add and
//! edit modals.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::forms::FoodFormValues;

#[component]
pub fn FoodForm(
    initial: FoodFormValues,
    #[prop(into)] submit_label: String,
    #[prop(into)] test_id: String,
    #[prop(into)] on_submit: Callback<FoodFormValues>,
) -> impl IntoView {
    let (image, set_image) = signal(initial.image);
    let (name, set_name) = signal(initial.name);
    let (price, set_price) = signal(initial.price);
    let (description, set_description) = signal(initial.description);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(FoodFormValues {
            image: image.get_untracked(),
            name: name.get_untracked(),
            price: price.get_untracked(),
            description: description.get_untracked(),
        });
    };

    view! {
        <form class="food-form" on:submit=submit>
            <input
                name="image"
                placeholder="Paste the image link here"
                prop:value=move || image.get()
                on:input=move |ev| set_image.set(event_target_value(&ev))
            />
            <input
                name="name"
                placeholder="Ex: Moda Italiana"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                name="price"
                placeholder="Ex: 19.90"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <input
                name="description"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit" data-testid=test_id>
                <p class="text">{submit_label}</p>
                <div class="icon">"✓"</div>
            </button>
        </form>
    }
}
