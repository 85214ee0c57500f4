use super::call::{ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct MaintenanceApi {
    res: ResourceClient,
}

impl MaintenanceApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/maintenance", "maintenance job"),
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

    pub async fn schedule(&self, payload: Value, user_id: &str) -> Result<ApiResponse> {
        self.res.create(payload, Some(user_id)).await
    }

    pub async fn history(&self, equipment_id: i64) -> Result<ApiResponse> {
        self.res
            .get_sub(
                "history",
                &[("equipmentId", Some(equipment_id.to_string()))],
            )
            .await
    }

    pub async fn complete(&self, id: i64, notes: &str, user_id: &str) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "complete",
                Some(json!({ "notes": notes })),
                Verb::Custom {
                    base: "complete",
                    progressive: "Completing",
                    past: "completed",
                },
                Some(user_id),
            )
            .await
    }
}
