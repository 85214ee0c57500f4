use super::call::{ApiCall, ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Warehouse stock. `stock_balance` is the endpoint the warehouse scenario
/// snapshots before and after a receive operation.
pub struct WarehouseApi {
    res: ResourceClient,
}

impl WarehouseApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/warehouse", "warehouse item"),
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

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse> {
        self.res.get_by_id(id).await
    }

    /// Current balance per storage location; all locations when `None`.
    pub async fn stock_balance(&self, warehouse_id: Option<i64>) -> Result<ApiResponse> {
        self.res
            .get_sub(
                "stock",
                &[("warehouseId", warehouse_id.map(|id| id.to_string()))],
            )
            .await
    }

    /// Books received goods into stock.
    pub async fn receive(&self, payload: Value, user_id: &str) -> Result<ApiResponse> {
        let call = ApiCall::new(Method::POST, "/warehouse/receive")
            .describe(
                "stock receipt",
                Verb::Custom {
                    base: "post",
                    progressive: "Posting",
                    past: "posted",
                },
            )
            .json(payload)
            .as_user(user_id);
        self.res.api().send(call).await
    }

    /// Issues goods out of stock against an order.
    pub async fn issue(&self, payload: Value, user_id: &str) -> Result<ApiResponse> {
        let call = ApiCall::new(Method::POST, "/warehouse/issue")
            .describe(
                "stock issue",
                Verb::Custom {
                    base: "post",
                    progressive: "Posting",
                    past: "posted",
                },
            )
            .json(payload)
            .as_user(user_id);
        self.res.api().send(call).await
    }
}
