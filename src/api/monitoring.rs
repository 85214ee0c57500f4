use super::call::{ApiClient, ApiResponse};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use std::sync::Arc;

/// Monitoring endpoints report the environment's own health, so a non-2xx
/// here is data, not a test failure: the family is lenient and callers
/// read `ApiResponse::status` themselves.
pub struct MonitoringApi {
    res: ResourceClient,
}

impl MonitoringApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/monitoring", "monitoring data").lenient(),
        }
    }

    pub async fn health(&self) -> Result<ApiResponse> {
        self.res.get_sub("health", &[]).await
    }

    pub async fn metrics_summary(&self) -> Result<ApiResponse> {
        self.res.get_sub("metrics/summary", &[]).await
    }

    pub async fn alerts(&self, active_only: bool) -> Result<ApiResponse> {
        self.res
            .get_sub("alerts", &[("active", Some(active_only.to_string()))])
            .await
    }
}
