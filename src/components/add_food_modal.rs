//! Add Food Modal

use leptos::prelude::*;

use food_api::FoodDraft;

use crate::components::{FoodForm, Modal};
use crate::forms::{submit_then_close, FoodFormValues};

/// Empty form; submitting hands off the draft and closes, whatever the
/// outcome of the request turns out to be
#[component]
pub fn AddFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_add: Callback<FoodDraft>,
) -> impl IntoView {
    let submit = Callback::new(move |values: FoodFormValues| {
        submit_then_close(values.into_draft(), |value| on_add.run(value), || on_close.run(()));
    });

    view! {
        <Modal is_open=is_open on_close=on_close>
            <h1>"New dish"</h1>
            <FoodForm
                initial=FoodFormValues::default()
                submit_label="Add dish"
                test_id="add-food-button"
                on_submit=submit
            />
        </Modal>
    }
}
