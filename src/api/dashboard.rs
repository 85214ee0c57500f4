use super::call::{ApiClient, ApiResponse};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use std::sync::Arc;

pub struct DashboardApi {
    res: ResourceClient,
}

impl DashboardApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/dashboard", "dashboard data").lenient(),
        }
    }

    pub async fn widgets(&self) -> Result<ApiResponse> {
        self.res.get_sub("widgets", &[]).await
    }

    /// Aggregated KPIs for a reporting period ("day", "week", "month").
    pub async fn kpi(&self, period: &str) -> Result<ApiResponse> {
        self.res
            .get_sub("kpi", &[("period", Some(period.to_string()))])
            .await
    }

    pub async fn summary(&self) -> Result<ApiResponse> {
        self.res.get_sub("summary", &[]).await
    }
}
