//! `/profile/{userType}/{userId}`.

use std::sync::Arc;

use sms_core::result::AppResult;
use sms_entity::user::{PasswordUpdateRequest, ProfileUpdateRequest};
use sms_entity::{UserInfo, UserType};
use sms_http::RequestPipeline;

/// Own-account profile endpoints.
#[derive(Debug, Clone)]
pub struct ProfileApi {
    pipeline: Arc<RequestPipeline>,
}

impl ProfileApi {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Fetches the profile of a user.
    pub async fn get(&self, user_type: UserType, user_id: &str) -> AppResult<UserInfo> {
        self.pipeline.get(&profile_path(user_type, user_id)).await
    }

    /// Updates phone and email; absent fields are left unchanged.
    pub async fn update_contact(
        &self,
        user_type: UserType,
        user_id: &str,
        update: &ProfileUpdateRequest,
    ) -> AppResult<bool> {
        self.pipeline
            .put(&profile_path(user_type, user_id), update)
            .await
    }

    /// Changes the password.
    pub async fn change_password(
        &self,
        user_type: UserType,
        user_id: &str,
        update: &PasswordUpdateRequest,
    ) -> AppResult<bool> {
        self.pipeline
            .put(
                &format!("{}/password", profile_path(user_type, user_id)),
                update,
            )
            .await
    }
}

fn profile_path(user_type: UserType, user_id: &str) -> String {
    format!("/profile/{}/{}", user_type.as_str(), user_id)
}
