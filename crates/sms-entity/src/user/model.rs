//! User account records and authentication payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::role::UserType;

/// A student login account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStudent {
    /// Login ID (the student number).
    pub user_id: String,
    /// Display name.
    pub user_name: String,
    /// Password; only ever sent, never returned populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwd: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Account status.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_login_time: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
}

/// An advisor login account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAdvisor {
    pub user_id: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwd: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_login_time: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
}

/// An administrator login account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAdmin {
    pub user_id: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwd: Option<String>,
    /// Administrative sub-role name, see [`super::AdminRole`].
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_login_time: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
}

/// The signed-in identity as held by the session.
///
/// The shape of the profile differs per user type; fields beyond the common
/// ones are preserved verbatim in `extra` so a round-trip through durable
/// storage loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Admin sub-role as sent by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Any other profile fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserInfo {
    /// Build a minimal identity.
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            phone: None,
            email: None,
            role: None,
            extra: Map::new(),
        }
    }
}

/// Credentials posted to `/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
    pub passwd: String,
    pub user_type: UserType,
}

/// Payload of a successful `/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    pub user_type: UserType,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Admin sub-role; only set for admins.
    #[serde(default)]
    pub role: Option<String>,
    /// Bearer token for subsequent requests.
    pub token: String,
}

impl LoginResponse {
    /// The identity part of the response, without the credential.
    pub fn identity(&self) -> UserInfo {
        UserInfo {
            user_id: self.user_id.clone(),
            user_name: self.user_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            extra: Map::new(),
        }
    }
}

/// Contact details update for `/profile/{type}/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Password change for `/profile/{type}/{id}/password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdateRequest {
    pub old_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_keeps_unknown_fields() {
        let raw = r#"{"userId":"S001","userName":"张三","status":"正常","createTime":"2024-09-01"}"#;
        let info: UserInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.user_id, "S001");
        assert_eq!(info.extra.get("status"), Some(&Value::from("正常")));

        let back: Value = serde_json::to_value(&info).unwrap();
        assert_eq!(back["createTime"], "2024-09-01");
    }

    #[test]
    fn test_login_response_identity_drops_token() {
        let resp = LoginResponse {
            user_id: "A01".into(),
            user_name: "李四".into(),
            user_type: UserType::Admin,
            phone: None,
            email: Some("a01@example.edu".into()),
            role: Some("教务管理员".into()),
            token: "jwt".into(),
        };
        let info = resp.identity();
        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("jwt"));
        assert_eq!(info.role.as_deref(), Some("教务管理员"));
    }
}
