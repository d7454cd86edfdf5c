//! Dashboard Page
//!
//! Wires the header, modals and list to the controller.

use leptos::prelude::*;

use food_api::{Food, FoodDraft, FoodEdit, FoodId};

use crate::components::{AddFoodModal, EditFoodModal, FoodList, Header};
use crate::context::use_dashboard;
use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let dashboard = use_dashboard();
    let store = use_app_store();

    let foods = Signal::derive(move || store.foods().get());
    let add_open = Signal::derive(move || store.add_modal_open().get());
    let edit_open = Signal::derive(move || store.edit_modal_open().get());
    let editing_food = Signal::derive(move || store.editing_food().get());

    let toggle_add: Callback<()> = Callback::new({
        let dashboard = dashboard.clone();
        move |_| dashboard.toggle_add_modal()
    });
    let toggle_edit: Callback<()> = Callback::new({
        let dashboard = dashboard.clone();
        move |_| dashboard.toggle_edit_modal()
    });
    let add_food: Callback<FoodDraft> = Callback::new({
        let dashboard = dashboard.clone();
        move |draft| dashboard.dispatch_add(draft)
    });
    let update_food: Callback<FoodEdit> = Callback::new({
        let dashboard = dashboard.clone();
        move |edit| dashboard.dispatch_update(edit)
    });
    let edit_food: Callback<Food> = Callback::new({
        let dashboard = dashboard.clone();
        move |food| dashboard.edit_food(food)
    });
    let delete_food: Callback<FoodId> = Callback::new({
        let dashboard = dashboard.clone();
        move |id| dashboard.dispatch_delete(id)
    });
    let toggle_available: Callback<Food> = Callback::new(move |food| {
        dashboard.dispatch_toggle_availability(food)
    });

    view! {
        <Header on_open_add=toggle_add />
        <AddFoodModal is_open=add_open on_close=toggle_add on_add=add_food />
        <EditFoodModal
            is_open=edit_open
            editing_food=editing_food
            on_close=toggle_edit
            on_update=update_food
        />
        <FoodList
            foods=foods
            on_edit=edit_food
            on_delete=delete_food
            on_toggle_available=toggle_available
        />
    }
}
