//! Point-in-time view of the session fields.

use sms_entity::{AdminRole, UserInfo, UserType};

/// A copy of the session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// Bearer credential.
    pub token: Option<String>,
    /// Signed-in user type.
    pub user_type: Option<UserType>,
    /// Admin sub-role; `None` unless `user_type` is admin.
    pub admin_role: Option<AdminRole>,
    /// Identity profile.
    pub user_info: Option<UserInfo>,
}

impl SessionSnapshot {
    /// Logged in means both a credential and an identity are held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user_info.is_some()
    }

    /// Display name of the identity, or an empty string.
    pub fn display_name(&self) -> &str {
        self.user_info
            .as_ref()
            .map(|u| u.user_name.as_str())
            .unwrap_or("")
    }

    /// ID of the identity, or an empty string.
    pub fn identity_id(&self) -> &str {
        self.user_info
            .as_ref()
            .map(|u| u.user_id.as_str())
            .unwrap_or("")
    }

    /// Whether the identity is the academic-affairs administrator.
    pub fn is_academic_admin(&self) -> bool {
        self.admin_role == Some(AdminRole::AcademicAffairs)
    }
}
