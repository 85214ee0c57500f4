use super::call::{ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::sync::Arc;

/// Production orders. The most heavily exercised module: scenarios edit
/// order positions through the UI and verify the result through here.
pub struct OrdersApi {
    res: ResourceClient,
}

impl OrdersApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/orders", "order"),
        }
    }

    pub async fn create(&self, payload: Value, user_id: &str) -> Result<ApiResponse> {
        self.res.create(payload, Some(user_id)).await
    }

    pub async fn get_all(
        &self,
        full: bool,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<ApiResponse> {
        self.res.get_all(full, page, page_size).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse> {
        self.res.get_by_id(id).await
    }

    pub async fn update(&self, id: i64, payload: Value, user_id: &str) -> Result<ApiResponse> {
        self.res.update(id, payload, Some(user_id)).await
    }

    pub async fn delete(&self, id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res.delete(id, Some(user_id)).await
    }

    pub async fn change_status(
        &self,
        id: i64,
        status: &str,
        user_id: &str,
    ) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "status",
                Some(json!({ "status": status })),
                Verb::Custom {
                    base: "change status of",
                    progressive: "Changing status of",
                    past: "status-changed",
                },
                Some(user_id),
            )
            .await
    }

    /// Item positions of one order.
    pub async fn items(&self, id: i64) -> Result<ApiResponse> {
        self.res.get_sub(&format!("{}/items", id), &[]).await
    }

    /// Lookup by the human-facing order number shown in the UI tables.
    pub async fn find_by_number(&self, number: &str) -> Result<ApiResponse> {
        self.res
            .get_sub("search", &[("number", Some(number.to_string()))])
            .await
    }
}
