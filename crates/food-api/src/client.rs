//! Food API Client
//!
//! Abstract interface over the `/foods` resource, plus the fetch-backed
//! implementation used in the browser.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::model::{Food, FoodId, NewFood};

/// Resource path of the menu collection
pub const FOODS_PATH: &str = "/foods";

/// CRUD operations against the menu resource.
///
/// No implementation retries; every failure is returned to the caller.
/// Futures are `?Send` because browser fetch futures are bound to the
/// UI thread.
#[async_trait(?Send)]
pub trait FoodApi: Send + Sync {
    /// Fetch every food, in server order
    async fn list(&self) -> ApiResult<Vec<Food>>;

    /// Create a food; the returned record carries the server-assigned id
    async fn create(&self, food: &NewFood) -> ApiResult<Food>;

    /// Replace the food at `id` with `food`, returning what was persisted
    async fn update(&self, id: FoodId, food: &Food) -> ApiResult<Food>;

    /// Remove the food at `id`
    async fn delete(&self, id: FoodId) -> ApiResult<()>;
}

/// `FoodApi` over HTTP using the browser's fetch
#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    base_url: String,
}

impl HttpFoodApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn foods_url(&self) -> String {
        format!("{}{}", self.base_url, FOODS_PATH)
    }

    pub fn food_url(&self, id: FoodId) -> String {
        format!("{}{}/{}", self.base_url, FOODS_PATH, id)
    }
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list(&self) -> ApiResult<Vec<Food>> {
        let response = Request::get(&self.foods_url())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(ensure_success(response)?).await
    }

    async fn create(&self, food: &NewFood) -> ApiResult<Food> {
        let request = Request::post(&self.foods_url())
            .json(food)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(ensure_success(response)?).await
    }

    async fn update(&self, id: FoodId, food: &Food) -> ApiResult<Food> {
        let request = Request::put(&self.food_url(id))
            .json(food)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(ensure_success(response)?).await
    }

    async fn delete(&self, id: FoodId) -> ApiResult<()> {
        let response = Request::delete(&self.food_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        ensure_success(response).map(|_| ())
    }
}

fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        log::debug!("[API] request failed with status {}", response.status());
        Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
