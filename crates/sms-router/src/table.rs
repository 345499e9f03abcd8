//! The static route tree and path resolution.

use sms_entity::UserType;

use crate::route::{MatchedRecord, ResolvedRoute, RouteRecord};

/// Ordered top-level route records. The first record that matches wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteRecord>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteRecord>) -> Self {
        Self { routes }
    }

    /// The application's route table, with `login_path` as the public login
    /// view and the fallback for `/` and unknown paths.
    pub fn standard(login_path: &str) -> Self {
        Self::new(vec![
            RouteRecord::new(login_path)
                .name("Login")
                .title("登录")
                .requires_auth(false),
            RouteRecord::new("/").redirect(login_path),
            role_tree(
                UserType::Student,
                &[
                    ("dashboard", "StudentDashboard", "主页"),
                    ("profile", "StudentProfile", "个人信息"),
                    ("status", "StudentStatus", "学籍信息"),
                    ("award", "StudentAward", "奖励申请"),
                    ("punishment", "StudentPunishment", "处分查看"),
                    ("appeal", "StudentAppeal", "申诉管理"),
                    ("status-change", "StudentStatusChange", "学籍变动"),
                    ("leave", "StudentLeave", "离校手续"),
                    ("notice", "StudentNotice", "系统通知"),
                    ("user-center", "StudentUserCenter", "个人中心"),
                ],
            ),
            role_tree(
                UserType::Advisor,
                &[
                    ("dashboard", "AdvisorDashboard", "主页"),
                    ("students", "AdvisorStudents", "学生列表"),
                    ("award-review", "AdvisorAwardReview", "奖励审批"),
                    ("appeal-review", "AdvisorAppealReview", "申诉审理"),
                    (
                        "status-change-review",
                        "AdvisorStatusChangeReview",
                        "学籍变动审核",
                    ),
                    ("notice", "AdvisorNotice", "系统通知"),
                    ("user-center", "AdvisorUserCenter", "个人中心"),
                ],
            ),
            role_tree(
                UserType::Admin,
                &[
                    ("dashboard", "AdminDashboard", "主页"),
                    ("students", "AdminStudents", "学生管理"),
                    ("award-review", "AdminAwardReview", "奖励终审"),
                    ("punishment", "AdminPunishment", "处分管理"),
                    ("appeal-review", "AdminAppealReview", "申诉终审"),
                    (
                        "status-change-review",
                        "AdminStatusChangeReview",
                        "学籍变动终审",
                    ),
                    ("leave-review", "AdminLeaveReview", "离校审核"),
                    ("notice", "AdminNotice", "通知管理"),
                    ("log", "AdminLog", "操作日志"),
                    ("user-center", "AdminUserCenter", "个人中心"),
                ],
            ),
            RouteRecord::catch_all(login_path),
        ])
    }

    /// Top-level records.
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Resolve `path` into its matched chain. Query string and fragment are
    /// ignored, as is a trailing slash.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let path = normalize(path);
        self.routes.iter().find_map(|record| {
            match_record(record, "", &path).map(|matched| ResolvedRoute {
                path: path.clone(),
                matched,
            })
        })
    }

    /// Every navigable (non-redirecting) absolute path, in table order.
    pub fn view_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        for record in &self.routes {
            collect_views(record, "", &mut out);
        }
        out
    }
}

fn role_tree(role: UserType, children: &[(&str, &str, &str)]) -> RouteRecord {
    let base = format!("/{}", role.as_str());
    RouteRecord::new(base)
        .requires_auth(true)
        .role(role)
        .redirect(role.dashboard_path())
        .children(
            children
                .iter()
                .map(|(path, name, title)| RouteRecord::new(*path).name(*name).title(*title))
                .collect(),
        )
}

fn join(parent: &str, segment: &str) -> String {
    if segment.starts_with('/') {
        segment.to_string()
    } else if parent.ends_with('/') {
        format!("{parent}{segment}")
    } else {
        format!("{parent}/{segment}")
    }
}

fn match_record(record: &RouteRecord, parent: &str, path: &str) -> Option<Vec<MatchedRecord>> {
    if record.is_catch_all() {
        return Some(vec![MatchedRecord::from_record(record, path.to_string())]);
    }

    let full = join(parent, &record.path);
    if full == path {
        return Some(vec![MatchedRecord::from_record(record, full)]);
    }

    let prefix = if full.ends_with('/') {
        full.clone()
    } else {
        format!("{full}/")
    };
    if !path.starts_with(&prefix) {
        return None;
    }

    record.children.iter().find_map(|child| {
        match_record(child, &full, path).map(|mut rest| {
            rest.insert(0, MatchedRecord::from_record(record, full.clone()));
            rest
        })
    })
}

fn collect_views(record: &RouteRecord, parent: &str, out: &mut Vec<String>) {
    if record.is_catch_all() {
        return;
    }
    let full = join(parent, &record.path);
    if record.redirect.is_none() {
        out.push(full.clone());
    }
    for child in &record.children {
        collect_views(child, &full, out);
    }
}

fn normalize(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    match path.trim_end_matches('/') {
        "" => "/".to_string(),
        trimmed => trimmed.to_string(),
    }
}
