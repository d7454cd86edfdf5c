//! Food List Component

use leptos::prelude::*;

use food_api::{Food, FoodId};

use crate::components::FoodCard;

/// One card per food, in list order
#[component]
pub fn FoodList(
    #[prop(into)] foods: Signal<Vec<Food>>,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_delete: Callback<FoodId>,
    #[prop(into)] on_toggle_available: Callback<Food>,
) -> impl IntoView {
    view! {
        <div class="foods-list" data-testid="foods-list">
            <For
                each=move || foods.get()
                // Whole value as key so an edited food re-renders
                key=|food| food.clone()
                children=move |food: Food| {
                    view! {
                        <FoodCard
                            food=food
                            on_edit=on_edit
                            on_delete=on_delete
                            on_toggle_available=on_toggle_available
                        />
                    }
                }
            />
        </div>
    }
}
