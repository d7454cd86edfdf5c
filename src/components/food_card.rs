//! Food Card Component
//!
//! One dish in the list, with its edit, delete and availability
//! affordances.

use leptos::prelude::*;

use food_api::{Food, FoodId};

#[component]
pub fn FoodCard(
    food: Food,
    on_edit: Callback<Food>,
    on_delete: Callback<FoodId>,
    on_toggle_available: Callback<Food>,
) -> impl IntoView {
    let edit_target = food.clone();
    let toggle_target = food.clone();
    let Food { id, name, description, price, available, image } = food;
    let alt = name.clone();
    let card_class = if available { "food-card" } else { "food-card unavailable" };
    let status = if available { "Available" } else { "Unavailable" };

    view! {
        <div class=card_class>
            <header>
                <img src=image alt=alt />
            </header>
            <section class="body">
                <h2>{name}</h2>
                <p>{description}</p>
                <p class="price">"R$ " <b>{price}</b></p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "Edit"
                    </button>
                    <button
                        type="button"
                        class="icon"
                        data-testid=format!("remove-food-{}", id)
                        on:click=move |_| on_delete.run(id)
                    >
                        "Delete"
                    </button>
                </div>
                <div class="availability-container">
                    <p>{status}</p>
                    <label class="switch">
                        <input
                            type="checkbox"
                            checked=available
                            data-testid=format!("change-status-food-{}", id)
                            // The box follows the server's record, not the click
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_toggle_available.run(toggle_target.clone());
                            }
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}
