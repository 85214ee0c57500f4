use super::call::{ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;

pub struct InventoryApi {
    res: ResourceClient,
}

impl InventoryApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/inventory", "inventory count"),
        }
    }

    pub async fn get_all(
        &self,
        full: bool,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<ApiResponse> {
        self.res.get_all(full, page, page_size).await
    }

    pub async fn start_count(&self, payload: Value, user_id: &str) -> Result<ApiResponse> {
        self.res.create(payload, Some(user_id)).await
    }

    pub async fn post_results(
        &self,
        id: i64,
        payload: Value,
        user_id: &str,
    ) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "results",
                Some(payload),
                Verb::Custom {
                    base: "post results for",
                    progressive: "Posting results for",
                    past: "results-posted for",
                },
                Some(user_id),
            )
            .await
    }

    pub async fn close(&self, id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "close",
                None,
                Verb::Custom {
                    base: "close",
                    progressive: "Closing",
                    past: "closed",
                },
                Some(user_id),
            )
            .await
    }
}
