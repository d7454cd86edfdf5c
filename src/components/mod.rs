//! UI Components
//!
//! Presentational Leptos components. None of them own server state;
//! they talk to the dashboard through callback props.

mod modal;
mod food_form;
mod add_food_modal;
mod edit_food_modal;
mod header;
mod food_card;
mod food_list;
mod dashboard;

pub use modal::Modal;
pub use food_form::FoodForm;
pub use add_food_modal::AddFoodModal;
pub use edit_food_modal::EditFoodModal;
pub use header::Header;
pub use food_card::FoodCard;
pub use food_list::FoodList;
pub use dashboard::Dashboard;
