//! Dashboard Controller
//!
//! Sole owner of server-derived state. Every mutation goes to the API
//! first and is merged into local state only from the server's answer.
//!
//! The async operations below can be awaited directly; UI callbacks use
//! the `dispatch_*` wrappers, which spawn the operation and return at
//! once. Spawned operations are never cancelled, so a response that
//! lands after its modal closed still updates the list, and overlapping
//! calls resolve last-wins. Nothing stops the same edit from being
//! submitted twice.

use std::sync::Arc;

use leptos::task::spawn_local;

use food_api::{ApiResult, Food, FoodApi, FoodDraft, FoodEdit, FoodId};

use crate::store::{AppStore, DashboardHandle};

/// Controller wired to the reactive store
pub type AppController = DashboardController<AppStore>;

#[derive(Clone)]
pub struct DashboardController<H> {
    api: Arc<dyn FoodApi>,
    state: H,
}

impl<H: DashboardHandle> DashboardController<H> {
    pub fn new(api: Arc<dyn FoodApi>, state: H) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    /// Replace the list with the server's. On failure the list is left as is.
    pub async fn load(&self) {
        match self.api.list().await {
            Ok(foods) => {
                log::info!("[DASHBOARD] Loaded {} foods", foods.len());
                self.state.set_foods(foods);
            }
            Err(err) => log::error!("[DASHBOARD] Failed to load foods: {}", err),
        }
    }

    pub fn toggle_add_modal(&self) {
        self.state.toggle_add_modal();
    }

    pub fn toggle_edit_modal(&self) {
        self.state.toggle_edit_modal();
    }

    /// Create `draft` as an available dish and append the server's record
    pub async fn add_food(&self, draft: FoodDraft) {
        match self.api.create(&draft.into_available()).await {
            Ok(created) => {
                log::debug!("[DASHBOARD] Created food {}", created.id);
                self.state.push_food(created);
            }
            Err(err) => log::error!("[DASHBOARD] Failed to add food: {}", err),
        }
    }

    /// Target `food` with the edit modal. Does not contact the server.
    pub fn edit_food(&self, food: Food) {
        self.state.begin_edit(food);
    }

    /// Send the edit target merged with `edit` and swap in the server's record
    pub async fn update_food(&self, edit: FoodEdit) {
        let Some(editing) = self.state.edit_target() else {
            log::warn!("[DASHBOARD] Update submitted with no food being edited");
            return;
        };
        let merged = editing.merged(&edit);
        match self.api.update(editing.id, &merged).await {
            Ok(updated) => {
                log::debug!("[DASHBOARD] Updated food {}", updated.id);
                self.state.replace_food(updated);
            }
            Err(err) => log::error!("[DASHBOARD] Failed to update food {}: {}", editing.id, err),
        }
    }

    /// Delete on the server, then locally. Errors go back to the caller.
    pub async fn delete_food(&self, id: FoodId) -> ApiResult<()> {
        self.api.delete(id).await?;
        log::debug!("[DASHBOARD] Deleted food {}", id);
        self.state.remove_food(id);
        Ok(())
    }

    pub async fn toggle_availability(&self, food: Food) {
        let toggled = food.with_availability_toggled();
        match self.api.update(food.id, &toggled).await {
            Ok(updated) => self.state.replace_food(updated),
            Err(err) => log::error!(
                "[DASHBOARD] Failed to change availability of food {}: {}",
                food.id,
                err
            ),
        }
    }

    // ========================
    // UI Dispatch
    // ========================

    pub fn dispatch_load(&self) {
        let this = self.clone();
        spawn_local(async move { this.load().await });
    }

    pub fn dispatch_add(&self, draft: FoodDraft) {
        let this = self.clone();
        spawn_local(async move { this.add_food(draft).await });
    }

    pub fn dispatch_update(&self, edit: FoodEdit) {
        let this = self.clone();
        spawn_local(async move { this.update_food(edit).await });
    }

    pub fn dispatch_toggle_availability(&self, food: Food) {
        let this = self.clone();
        spawn_local(async move { this.toggle_availability(food).await });
    }

    /// The list is untouched on failure, and the user gets no message.
    pub fn dispatch_delete(&self, id: FoodId) {
        let this = self.clone();
        spawn_local(async move {
            if let Err(err) = this.delete_food(id).await {
                log::error!("[DASHBOARD] Unhandled failure deleting food {}: {}", id, err);
            }
        });
    }
}
