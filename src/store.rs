//! Dashboard State Store
//!
//! The food list, both modal flags and the edit target, held in one
//! reactive store so the list and each modal re-render on their own field.

use leptos::prelude::*;
use reactive_stores::Store;

use food_api::{Food, FoodId};

/// Everything the dashboard knows, owned by the controller
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Server list order, then append order
    pub foods: Vec<Food>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
    /// Target of the edit modal (None until the first edit)
    pub editing_food: Option<Food>,
}

/// Type alias for the store
pub type AppStore = Store<DashboardState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// State operations the controller needs.
///
/// Implemented by the reactive store in the browser and by plain state
/// in tests.
pub trait DashboardHandle: Clone + Send + Sync + 'static {
    fn set_foods(&self, foods: Vec<Food>);
    fn push_food(&self, food: Food);
    fn replace_food(&self, food: Food);
    fn remove_food(&self, id: FoodId);
    fn toggle_add_modal(&self);
    fn toggle_edit_modal(&self);
    /// Remember `food` as the edit target and open the edit modal
    fn begin_edit(&self, food: Food);
    fn edit_target(&self) -> Option<Food>;
}

// ========================
// List Reconciliation
// ========================

/// Replace the food whose id matches `updated`. No match, no change.
pub fn replace_by_id(foods: &mut [Food], updated: Food) -> bool {
    foods
        .iter_mut()
        .find(|food| food.id == updated.id)
        .map(|food| *food = updated)
        .is_some()
}

/// Remove the food with `id`. No match, no change.
pub fn remove_by_id(foods: &mut Vec<Food>, id: FoodId) -> bool {
    let before = foods.len();
    foods.retain(|food| food.id != id);
    foods.len() != before
}

impl DashboardHandle for AppStore {
    fn set_foods(&self, foods: Vec<Food>) {
        *self.foods().write() = foods;
    }

    fn push_food(&self, food: Food) {
        self.foods().write().push(food);
    }

    fn replace_food(&self, food: Food) {
        let id = food.id;
        if !replace_by_id(&mut self.foods().write(), food) {
            log::debug!("[STORE] no local food {} to replace", id);
        }
    }

    fn remove_food(&self, id: FoodId) {
        if !remove_by_id(&mut self.foods().write(), id) {
            log::debug!("[STORE] no local food {} to remove", id);
        }
    }

    fn toggle_add_modal(&self) {
        self.add_modal_open().update(|open| *open = !*open);
    }

    fn toggle_edit_modal(&self) {
        self.edit_modal_open().update(|open| *open = !*open);
    }

    fn begin_edit(&self, food: Food) {
        *self.editing_food().write() = Some(food);
        *self.edit_modal_open().write() = true;
    }

    fn edit_target(&self) -> Option<Food> {
        self.editing_food().get_untracked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_food(id: FoodId, price: &str) -> Food {
        Food {
            id,
            name: format!("Dish {}", id),
            description: String::new(),
            price: price.to_string(),
            available: true,
            image: String::new(),
        }
    }

    #[test]
    fn test_replace_by_id_touches_only_match() {
        let mut foods = vec![make_food(1, "1.00"), make_food(3, "10.00"), make_food(5, "5.00")];

        assert!(replace_by_id(&mut foods, make_food(3, "12.50")));

        assert_eq!(foods[0], make_food(1, "1.00"));
        assert_eq!(foods[1].price, "12.50");
        assert_eq!(foods[2], make_food(5, "5.00"));
    }

    #[test]
    fn test_remove_by_id_removes_exactly_one() {
        let mut foods = vec![make_food(4, "1.00"), make_food(5, "2.00"), make_food(6, "3.00")];

        assert!(remove_by_id(&mut foods, 5));

        assert_eq!(foods.iter().map(|f| f.id).collect::<Vec<_>>(), vec![4, 6]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let original = vec![make_food(1, "1.00"), make_food(2, "2.00")];
        let mut foods = original.clone();

        assert!(!replace_by_id(&mut foods, make_food(9, "9.00")));
        assert!(!remove_by_id(&mut foods, 9));

        assert_eq!(foods, original);
    }

    #[test]
    fn test_app_store_drives_controller_flows() {
        use std::sync::Arc;

        use food_api::{FoodDraft, FoodEdit, InMemoryFoodApi};
        use futures::executor::block_on;

        use crate::controller::DashboardController;

        let owner = Owner::new();
        owner.set();

        let api = Arc::new(InMemoryFoodApi::with_foods(vec![make_food(3, "10.00"), make_food(5, "5.00")]));
        let store = Store::new(DashboardState::default());
        let controller = DashboardController::new(api.clone(), store);

        block_on(controller.load());
        assert_eq!(store.foods().get_untracked().len(), 2);

        controller.toggle_add_modal();
        assert!(store.add_modal_open().get_untracked());
        block_on(controller.add_food(FoodDraft {
            name: "X".to_string(),
            price: "19.90".to_string(),
            ..Default::default()
        }));
        controller.toggle_add_modal();
        assert!(!store.add_modal_open().get_untracked());
        let ids: Vec<_> = store.foods().get_untracked().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 5, 6]);

        controller.edit_food(make_food(3, "10.00"));
        assert!(store.edit_modal_open().get_untracked());
        assert_eq!(store.editing_food().get_untracked().map(|f| f.id), Some(3));
        block_on(controller.update_food(FoodEdit {
            price: Some("12.50".to_string()),
            ..Default::default()
        }));
        controller.toggle_edit_modal();
        assert!(!store.edit_modal_open().get_untracked());
        assert_eq!(store.foods().get_untracked()[0].price, "12.50");

        block_on(controller.toggle_availability(make_food(5, "5.00")));
        assert!(!store.foods().get_untracked()[1].available);

        block_on(controller.delete_food(5)).unwrap();
        let ids: Vec<_> = store.foods().get_untracked().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 6]);
        assert_eq!(api.foods().len(), 2);
    }
}
