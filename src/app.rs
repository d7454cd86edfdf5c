//! Food Menu App
//!
//! Builds the API client and store, then mounts the dashboard.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use food_api::{FoodApi, HttpFoodApi};

use crate::components::Dashboard;
use crate::config::ApiConfig;
use crate::context::provide_dashboard;
use crate::controller::DashboardController;
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::resolve();
    log::info!("[APP] Menu API at {}", config.base_url());

    let api: Arc<dyn FoodApi> = Arc::new(HttpFoodApi::new(config.base_url()));
    let store = Store::new(DashboardState::default());
    let controller = DashboardController::new(api, store);
    provide_dashboard(controller.clone());

    // Load foods once on mount
    Effect::new(move |_| controller.dispatch_load());

    view! {
        <main class="dashboard">
            <Dashboard />
        </main>
    }
}
