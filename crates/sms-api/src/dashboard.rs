//! `/dashboard` statistics per role.

use std::sync::Arc;

use sms_core::result::AppResult;
use sms_entity::UserType;
use sms_entity::dashboard::DashboardStats;
use sms_http::RequestPipeline;

/// Dashboard statistics endpoints.
#[derive(Debug, Clone)]
pub struct DashboardApi {
    pipeline: Arc<RequestPipeline>,
}

impl DashboardApi {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Statistics for one student.
    pub async fn student(&self, stu_id: &str) -> AppResult<DashboardStats> {
        self.pipeline
            .get(&format!("/dashboard/student/{stu_id}"))
            .await
    }

    /// Statistics for one advisor.
    pub async fn advisor(&self, advisor_id: &str) -> AppResult<DashboardStats> {
        self.pipeline
            .get(&format!("/dashboard/advisor/{advisor_id}"))
            .await
    }

    /// School-wide statistics.
    pub async fn admin(&self) -> AppResult<DashboardStats> {
        self.pipeline.get("/dashboard/admin").await
    }

    /// Statistics for the given identity, by user type.
    pub async fn for_user(&self, user_type: UserType, user_id: &str) -> AppResult<DashboardStats> {
        match user_type {
            UserType::Student => self.student(user_id).await,
            UserType::Advisor => self.advisor(user_id).await,
            UserType::Admin => self.admin().await,
        }
    }
}
