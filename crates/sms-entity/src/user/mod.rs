//! User identities, roles, and authentication payloads.

pub mod model;
pub mod role;

pub use model::{
    LoginRequest, LoginResponse, PasswordUpdateRequest, ProfileUpdateRequest, UserAdmin,
    UserAdvisor, UserInfo, UserStudent,
};
pub use role::{AdminRole, UserType};
