use super::call::{ApiClient, ApiResponse};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use std::sync::Arc;

/// Deployed-version probes, used by smoke checks to tell which build a
/// stand is running. Lenient: an older stand without the endpoint answers
/// 404 and the probe still reports something useful.
pub struct VersioningApi {
    res: ResourceClient,
}

impl VersioningApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/versioning", "version info").lenient(),
        }
    }

    pub async fn current(&self) -> Result<ApiResponse> {
        self.res.get_sub("current", &[]).await
    }

    pub async fn history(&self, limit: Option<u32>) -> Result<ApiResponse> {
        self.res
            .get_sub("history", &[("limit", limit.map(|l| l.to_string()))])
            .await
    }
}
