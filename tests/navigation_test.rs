//! Integration tests for guarded navigation against a live session.

mod helpers;

use sms_core::error::ErrorKind;
use sms_entity::UserType;
use sms_entity::user::LoginRequest;
use sms_router::Navigation;
use serde_json::Value;

fn credentials(user_type: UserType) -> LoginRequest {
    LoginRequest {
        user_id: "S2024001".into(),
        passwd: "secret".into(),
        user_type,
    }
}

async fn app_with_navigation() -> (helpers::TestApp, Navigation) {
    let app = helpers::TestApp::with_navigator(helpers::FakeNavigator::open()).await;
    let navigation = app.navigation.clone();
    (app, navigation)
}

#[tokio::test]
async fn test_anonymous_user_lands_on_login() {
    let (app, navigation) = app_with_navigation().await;

    let route = navigation.navigate("/student/dashboard").unwrap();

    assert_eq!(route.path, "/login");
    assert_eq!(route.name(), Some("Login"));
    assert_eq!(app.navigator.titles().last().map(String::as_str), Some("登录"));
}

#[tokio::test]
async fn test_foreign_role_leads_to_own_dashboard() {
    let (app, navigation) = app_with_navigation().await;
    app.api.auth().login(&credentials(UserType::Advisor)).await.unwrap();

    let route = navigation.navigate("/student/award").unwrap();
    assert_eq!(route.path, "/advisor/dashboard");

    let route = navigation.navigate("/advisor/award-review").unwrap();
    assert_eq!(route.name(), Some("AdvisorAwardReview"));
    assert_eq!(
        app.navigator.titles().last().map(String::as_str),
        Some("奖励审批")
    );
}

#[tokio::test]
async fn test_expired_session_blocks_protected_views() {
    let (app, navigation) = app_with_navigation().await;
    app.api.auth().login(&credentials(UserType::Student)).await.unwrap();
    assert_eq!(
        navigation.navigate("/student/status").unwrap().path,
        "/student/status"
    );

    let err = app.pipeline.get::<Value>("/expired").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
    app.pipeline.expiry().settle().await;

    assert_eq!(app.navigator.replaced(), vec!["/login"]);
    assert_eq!(navigation.navigate("/student/status").unwrap().path, "/login");
}

#[tokio::test]
async fn test_expiry_redirect_runs_the_guard() {
    let (app, _navigation) = app_with_navigation().await;
    app.api.auth().login(&credentials(UserType::Student)).await.unwrap();
    assert!(app.navigator.titles().is_empty());

    let err = app.pipeline.get::<Value>("/expired").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
    app.pipeline.expiry().settle().await;

    assert_eq!(app.navigator.titles(), vec!["登录"]);
    assert_eq!(app.navigator.replaced(), vec!["/login"]);
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_login() {
    let (_app, navigation) = app_with_navigation().await;

    let route = navigation.navigate("/no/such/page").unwrap();

    assert_eq!(route.path, "/login");
}
