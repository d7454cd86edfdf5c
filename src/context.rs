//! Application Context
//!
//! The dashboard controller and its store, provided via the Leptos
//! Context API.

use leptos::prelude::*;

use crate::controller::AppController;

/// Provide the controller, and its store on its own for components that
/// only read state
pub fn provide_dashboard(controller: AppController) {
    provide_context(*controller.state());
    provide_context(controller);
}

/// Get the dashboard controller from context
pub fn use_dashboard() -> AppController {
    expect_context::<AppController>()
}
