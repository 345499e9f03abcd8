//! Dashboard statistics per user type.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Landing page aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Named counters (pending reviews, notices, ...).
    #[serde(default)]
    pub counts: HashMap<String, i64>,
    #[serde(default)]
    pub todo_list: Vec<TodoItem>,
    #[serde(default)]
    pub notices: Vec<Value>,
    #[serde(default)]
    pub logs: Vec<Value>,
    #[serde(default)]
    pub warning_students: Vec<Value>,
    #[serde(default)]
    pub user_info: Option<Value>,
}

/// A pending task shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Route the task links to.
    #[serde(default)]
    pub link: Option<String>,
}
