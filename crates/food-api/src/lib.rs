//! Food API
//!
//! Client side of the restaurant menu HTTP API:
//! - model: foods, drafts and partial edits as they travel on the wire
//! - client: the `FoodApi` trait and its fetch-backed implementation
//! - memory: an in-process server stand-in
//! - error: failure taxonomy shared by every implementation

mod client;
mod error;
mod memory;
mod model;

pub use client::{FoodApi, HttpFoodApi, FOODS_PATH};
pub use error::{ApiError, ApiResult};
pub use memory::InMemoryFoodApi;
pub use model::{Food, FoodDraft, FoodEdit, FoodId, NewFood};
