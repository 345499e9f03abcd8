//! User type and administrative sub-role enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three kinds of account that can sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// An enrolled student.
    Student,
    /// A class advisor reviewing their students' applications.
    Advisor,
    /// A school administrator; see [`AdminRole`] for the sub-role.
    Admin,
}

impl UserType {
    /// All user types, in display order.
    pub const ALL: [UserType; 3] = [Self::Student, Self::Advisor, Self::Admin];

    /// Return the type as the lowercase wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Advisor => "advisor",
            Self::Admin => "admin",
        }
    }

    /// The landing route for this user type.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Student => "/student/dashboard",
            Self::Advisor => "/advisor/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "学生",
            Self::Advisor => "辅导员",
            Self::Admin => "管理员",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserType {
    type Err = sms_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "advisor" => Ok(Self::Advisor),
            "admin" => Ok(Self::Admin),
            _ => Err(sms_core::AppError::validation(format!(
                "Invalid user type: '{s}'. Expected one of: student, advisor, admin"
            ))),
        }
    }
}

/// Administrative sub-roles. Only meaningful for [`UserType::Admin`].
///
/// The wire values are the Chinese role names the backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminRole {
    /// Dormitory administration; signs off the dormitory step of leave.
    #[serde(rename = "宿管管理员")]
    Dormitory,
    /// Library; signs off the library step of leave.
    #[serde(rename = "图书馆管理员")]
    Library,
    /// Finance office; signs off the finance step of leave.
    #[serde(rename = "财务处管理员")]
    Finance,
    /// Academic affairs; final reviewer for most workflows.
    #[serde(rename = "教务管理员")]
    AcademicAffairs,
}

impl AdminRole {
    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dormitory => "宿管管理员",
            Self::Library => "图书馆管理员",
            Self::Finance => "财务处管理员",
            Self::AcademicAffairs => "教务管理员",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = sms_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "宿管管理员" => Ok(Self::Dormitory),
            "图书馆管理员" => Ok(Self::Library),
            "财务处管理员" => Ok(Self::Finance),
            "教务管理员" => Ok(Self::AcademicAffairs),
            _ => Err(sms_core::AppError::validation(format!(
                "Invalid admin role: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_from_str() {
        assert_eq!("student".parse::<UserType>().unwrap(), UserType::Student);
        assert_eq!("ADMIN".parse::<UserType>().unwrap(), UserType::Admin);
        assert!("teacher".parse::<UserType>().is_err());
    }

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(UserType::Student.dashboard_path(), "/student/dashboard");
        assert_eq!(UserType::Advisor.dashboard_path(), "/advisor/dashboard");
        assert_eq!(UserType::Admin.dashboard_path(), "/admin/dashboard");
    }

    #[test]
    fn test_admin_role_wire_names() {
        let json = serde_json::to_string(&AdminRole::AcademicAffairs).unwrap();
        assert_eq!(json, "\"教务管理员\"");
        assert_eq!(
            "财务处管理员".parse::<AdminRole>().unwrap(),
            AdminRole::Finance
        );
        assert!("超级管理员".parse::<AdminRole>().is_err());
    }
}
