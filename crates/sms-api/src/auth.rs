//! Login, logout, and identity updates.

use std::sync::Arc;

use tracing::{info, warn};

use sms_core::error::AppError;
use sms_core::result::AppResult;
use sms_entity::UserInfo;
use sms_entity::user::{LoginRequest, LoginResponse, PasswordUpdateRequest, ProfileUpdateRequest};
use sms_http::RequestPipeline;
use sms_session::SessionStore;

use crate::profile::ProfileApi;

/// Drives the session lifecycle against the backend.
///
/// The [`SessionStore`] only holds state; this type performs the round
/// trips that change it.
#[derive(Debug, Clone)]
pub struct SessionManager {
    pipeline: Arc<RequestPipeline>,
}

impl SessionManager {
    /// Creates a manager on the given pipeline.
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    fn session(&self) -> &Arc<SessionStore> {
        self.pipeline.session()
    }

    /// Signs in and installs the returned session.
    ///
    /// Fails with an authentication error when the server reports success
    /// without a payload.
    pub async fn login(&self, credentials: &LoginRequest) -> AppResult<UserInfo> {
        let response: Option<LoginResponse> = self.pipeline.post("/login", credentials).await?;
        let Some(response) = response else {
            warn!(user_id = %credentials.user_id, "Login succeeded without session data");
            return Err(AppError::authentication("登录失败"));
        };

        let identity = self.session().establish(&response)?;
        info!(
            user_id = %identity.user_id,
            user_type = %response.user_type,
            "Logged in"
        );
        Ok(identity)
    }

    /// Drops the session locally. No server round trip.
    pub fn logout(&self) -> AppResult<()> {
        let user_id = self.session().identity_id();
        self.session().clear()?;
        info!(user_id = %user_id, "Logged out");
        Ok(())
    }

    /// Replaces the stored identity without touching the token.
    pub fn update_identity(&self, info: UserInfo) -> AppResult<()> {
        self.session().update_identity(info)
    }

    /// Updates the signed-in user's contact details on the server and
    /// mirrors them into the stored identity.
    pub async fn update_contact(&self, update: &ProfileUpdateRequest) -> AppResult<UserInfo> {
        let (user_type, mut identity) = self.current()?;
        ProfileApi::new(Arc::clone(&self.pipeline))
            .update_contact(user_type, &identity.user_id, update)
            .await?;

        if let Some(phone) = &update.phone {
            identity.phone = Some(phone.clone());
        }
        if let Some(email) = &update.email {
            identity.email = Some(email.clone());
        }
        self.update_identity(identity.clone())?;
        Ok(identity)
    }

    /// Changes the signed-in user's password.
    pub async fn change_password(&self, update: &PasswordUpdateRequest) -> AppResult<bool> {
        let (user_type, identity) = self.current()?;
        ProfileApi::new(Arc::clone(&self.pipeline))
            .change_password(user_type, &identity.user_id, update)
            .await
    }

    /// Re-fetches the profile and stores it as the identity.
    pub async fn refresh_identity(&self) -> AppResult<UserInfo> {
        let (user_type, identity) = self.current()?;
        let profile = ProfileApi::new(Arc::clone(&self.pipeline))
            .get(user_type, &identity.user_id)
            .await?;
        self.update_identity(profile.clone())?;
        Ok(profile)
    }

    fn current(&self) -> AppResult<(sms_entity::UserType, UserInfo)> {
        let snapshot = self.session().snapshot();
        match (snapshot.user_type, snapshot.user_info) {
            (Some(user_type), Some(info)) if snapshot.token.is_some() => Ok((user_type, info)),
            _ => Err(AppError::authentication("未登录")),
        }
    }
}
