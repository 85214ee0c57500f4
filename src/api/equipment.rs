use super::call::{ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct EquipmentApi {
    res: ResourceClient,
}

impl EquipmentApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/equipment", "equipment"),
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

    /// Moves a machine to a workplace.
    pub async fn assign(&self, id: i64, workplace_id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "assign",
                Some(json!({ "workplaceId": workplace_id })),
                Verb::Custom {
                    base: "assign",
                    progressive: "Assigning",
                    past: "assigned",
                },
                Some(user_id),
            )
            .await
    }

    pub async fn decommission(&self, id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "decommission",
                None,
                Verb::Custom {
                    base: "decommission",
                    progressive: "Decommissioning",
                    past: "decommissioned",
                },
                Some(user_id),
            )
            .await
    }
}
