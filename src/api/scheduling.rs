use super::call::{ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SchedulingApi {
    res: ResourceClient,
}

impl SchedulingApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/scheduling", "schedule entry"),
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

    pub async fn delete(&self, id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res.delete(id, Some(user_id)).await
    }

    /// Free production slots in a date window. Dates are opaque strings in
    /// whatever format the application expects.
    pub async fn slots(&self, date_from: &str, date_to: &str) -> Result<ApiResponse> {
        self.res
            .get_sub(
                "slots",
                &[
                    ("from", Some(date_from.to_string())),
                    ("to", Some(date_to.to_string())),
                ],
            )
            .await
    }

    pub async fn reschedule(&self, id: i64, new_date: &str, user_id: &str) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "reschedule",
                Some(json!({ "date": new_date })),
                Verb::Custom {
                    base: "reschedule",
                    progressive: "Rescheduling",
                    past: "rescheduled",
                },
                Some(user_id),
            )
            .await
    }
}
