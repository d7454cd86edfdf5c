//! In-Memory Food API
//!
//! A stand-in for the menu server that keeps foods in process. Ids are
//! assigned sequentially, starting after the highest seeded id.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::client::FoodApi;
use crate::error::{ApiError, ApiResult};
use crate::model::{Food, FoodId, NewFood};

#[derive(Debug)]
struct Inner {
    foods: Vec<Food>,
    next_id: FoodId,
    fail_next: Option<ApiError>,
}

/// `FoodApi` backed by a `Vec<Food>`
#[derive(Debug)]
pub struct InMemoryFoodApi {
    inner: Mutex<Inner>,
}

impl Default for InMemoryFoodApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFoodApi {
    pub fn new() -> Self {
        Self::with_foods(Vec::new())
    }

    pub fn with_foods(foods: Vec<Food>) -> Self {
        let next_id = foods.iter().map(|f| f.id).max().unwrap_or(0).saturating_add(1);
        Self {
            inner: Mutex::new(Inner {
                foods,
                next_id,
                fail_next: None,
            }),
        }
    }

    /// Make the next call, whichever operation it is, fail with `error`
    pub fn fail_next(&self, error: ApiError) {
        self.lock().fail_next = Some(error);
    }

    /// Snapshot of what the "server" currently holds
    pub fn foods(&self) -> Vec<Food> {
        self.lock().foods.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn take_failure(inner: &mut Inner) -> ApiResult<()> {
        match inner.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl FoodApi for InMemoryFoodApi {
    async fn list(&self) -> ApiResult<Vec<Food>> {
        let mut inner = self.lock();
        Self::take_failure(&mut inner)?;
        Ok(inner.foods.clone())
    }

    async fn create(&self, food: &NewFood) -> ApiResult<Food> {
        let mut inner = self.lock();
        Self::take_failure(&mut inner)?;
        let created = Food {
            id: inner.next_id,
            name: food.draft.name.clone(),
            description: food.draft.description.clone(),
            price: food.draft.price.clone(),
            available: food.available,
            image: food.draft.image.clone(),
        };
        inner.next_id = inner.next_id.saturating_add(1);
        inner.foods.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: FoodId, food: &Food) -> ApiResult<Food> {
        let mut inner = self.lock();
        Self::take_failure(&mut inner)?;
        let slot = inner
            .foods
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| ApiError::not_found(id))?;
        // The path id wins over whatever id the body carries
        *slot = Food { id, ..food.clone() };
        Ok(slot.clone())
    }

    async fn delete(&self, id: FoodId) -> ApiResult<()> {
        let mut inner = self.lock();
        Self::take_failure(&mut inner)?;
        let before = inner.foods.len();
        inner.foods.retain(|f| f.id != id);
        if inner.foods.len() == before {
            return Err(ApiError::not_found(id));
        }
        Ok(())
    }
}
