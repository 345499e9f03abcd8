//! Durable storage key names.

/// Bearer credential.
pub const TOKEN: &str = "token";
/// JSON-serialized identity record.
pub const USER_INFO: &str = "userInfo";
/// `student`, `advisor` or `admin`.
pub const USER_TYPE: &str = "userType";
/// Admin sub-role name.
pub const ADMIN_ROLE: &str = "adminRole";

/// Every key the session owns.
pub const ALL: [&str; 4] = [TOKEN, USER_INFO, USER_TYPE, ADMIN_ROLE];
