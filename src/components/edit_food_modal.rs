//! Edit Food Modal

use leptos::prelude::*;

use food_api::{Food, FoodEdit};

use crate::components::{FoodForm, Modal};
use crate::forms::{submit_then_close, FoodFormValues};

/// Form pre-filled from the food being edited
#[component]
pub fn EditFoodModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] editing_food: Signal<Option<Food>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_update: Callback<FoodEdit>,
) -> impl IntoView {
    let submit = Callback::new(move |values: FoodFormValues| {
        submit_then_close(values.into_edit(), |value| on_update.run(value), || on_close.run(()));
    });

    // Read once per open cycle so a list reload doesn't clobber typing
    let initial_values = move || {
        editing_food
            .get_untracked()
            .as_ref()
            .map(FoodFormValues::from_food)
            .unwrap_or_default()
    };

    view! {
        <Modal is_open=is_open on_close=on_close>
            <h1>"Edit dish"</h1>
            <FoodForm
                initial=initial_values()
                submit_label="Save changes"
                test_id="edit-food-button"
                on_submit=submit
            />
        </Modal>
    }
}
