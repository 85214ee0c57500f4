use super::call::{ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;

pub struct ShipmentsApi {
    res: ResourceClient,
}

impl ShipmentsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/shipments", "shipment"),
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

    pub async fn dispatch(&self, id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "dispatch",
                None,
                Verb::Custom {
                    base: "dispatch",
                    progressive: "Dispatching",
                    past: "dispatched",
                },
                Some(user_id),
            )
            .await
    }

    pub async fn track(&self, number: &str) -> Result<ApiResponse> {
        self.res
            .get_sub("track", &[("number", Some(number.to_string()))])
            .await
    }
}
