use super::call::{ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct MaterialsApi {
    res: ResourceClient,
}

impl MaterialsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/materials", "material"),
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

    pub async fn write_off(&self, id: i64, quantity: i64, user_id: &str) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "write-off",
                Some(json!({ "quantity": quantity })),
                Verb::Custom {
                    base: "write off",
                    progressive: "Writing off",
                    past: "written off",
                },
                Some(user_id),
            )
            .await
    }

    /// Free quantity for a designation across storage locations.
    pub async fn availability(&self, designation: &str) -> Result<ApiResponse> {
        self.res
            .get_sub(
                "availability",
                &[("designation", Some(designation.to_string()))],
            )
            .await
    }
}
