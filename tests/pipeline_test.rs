//! Integration tests for response classification and session expiry.

mod helpers;

use futures::future::join_all;
use serde_json::Value;

use sms_core::error::ErrorKind;
use sms_entity::UserType;
use sms_entity::user::LoginRequest;
use sms_http::{DEFAULT_EXPIRED_MESSAGE, DEFAULT_FAILURE_MESSAGE};

fn credentials(user_type: UserType) -> LoginRequest {
    LoginRequest {
        user_id: "S2024001".into(),
        passwd: "secret".into(),
        user_type,
    }
}

#[tokio::test]
async fn test_concurrent_expiry_runs_once() {
    let app = helpers::TestApp::new().await;
    app.api.auth().login(&credentials(UserType::Student)).await.unwrap();

    let calls = (0..5).map(|_| app.pipeline.get::<Value>("/expired"));
    let results = join_all(calls).await;

    assert_eq!(app.hits.expired(), 5);
    for result in &results {
        let err = result.as_ref().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, "登录已过期，请重新登录");
    }
    assert!(!app.session.is_authenticated());
    assert!(app.pipeline.expiry().is_redirecting());

    app.navigator.release(1);
    app.pipeline.expiry().settle().await;

    assert_eq!(app.navigator.prompts(), vec!["登录已过期，请重新登录"]);
    assert_eq!(app.navigator.replaced(), vec!["/login"]);
    assert!(!app.pipeline.expiry().is_redirecting());
    assert!(app.notifier.errors().is_empty());
}

#[tokio::test]
async fn test_application_failure_toasts_without_expiry() {
    let app = helpers::TestApp::new().await;
    app.api.auth().login(&credentials(UserType::Student)).await.unwrap();

    let err = app.pipeline.get::<Value>("/failure").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Application);
    assert_eq!(err.message, "服务器内部错误");
    assert_eq!(app.notifier.errors(), vec!["服务器内部错误"]);
    assert!(app.session.is_authenticated());
    assert!(!app.pipeline.expiry().is_redirecting());
}

#[tokio::test]
async fn test_expiry_marker_in_message() {
    let app = helpers::TestApp::new().await;
    app.api.auth().login(&credentials(UserType::Student)).await.unwrap();

    let err = app.pipeline.get::<Value>("/marker").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.message, "Token 无效");
    assert!(app.notifier.errors().is_empty());
    assert!(!app.session.is_authenticated());

    app.navigator.release(1);
    app.pipeline.expiry().settle().await;
    assert_eq!(app.navigator.prompts(), vec!["Token 无效"]);
}

#[tokio::test]
async fn test_transport_unauthorized_expires_session() {
    let app = helpers::TestApp::new().await;
    app.api.auth().login(&credentials(UserType::Advisor)).await.unwrap();

    let err = app.pipeline.get::<Value>("/unauthorized").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.message, DEFAULT_EXPIRED_MESSAGE);
    assert!(app.session.token().is_none());

    app.navigator.release(1);
    app.pipeline.expiry().settle().await;
    assert_eq!(app.navigator.replaced(), vec!["/login"]);
}

#[tokio::test]
async fn test_transport_failure_keeps_session() {
    let app = helpers::TestApp::new().await;
    app.api.auth().login(&credentials(UserType::Student)).await.unwrap();

    let err = app.pipeline.get::<Value>("/server-error").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Transport);
    assert!(err.message.contains("500"));
    assert_eq!(app.notifier.errors().len(), 1);
    assert!(app.session.is_authenticated());
    assert!(app.navigator.prompts().is_empty());
}

#[tokio::test]
async fn test_timeout_is_reported_and_keeps_session() {
    let app = helpers::TestApp::new().await;
    app.api.auth().login(&credentials(UserType::Student)).await.unwrap();

    let err = app.pipeline.get::<Value>("/slow").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Timeout);
    assert_eq!(app.notifier.errors().len(), 1);
    assert!(app.session.is_authenticated());
    assert!(app.navigator.prompts().is_empty());
}

#[tokio::test]
async fn test_body_without_envelope_is_generic_failure() {
    let app = helpers::TestApp::new().await;

    let err = app.pipeline.get::<Value>("/plain").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Application);
    assert_eq!(err.message, DEFAULT_FAILURE_MESSAGE);
    assert_eq!(app.notifier.errors(), vec![DEFAULT_FAILURE_MESSAGE]);
}

#[tokio::test]
async fn test_rotated_token_replaces_only_token() {
    let app = helpers::TestApp::new().await;
    app.api.auth().login(&credentials(UserType::Student)).await.unwrap();
    let before = app.session.snapshot();

    let data: u64 = app.pipeline.get("/rotate").await.unwrap();

    assert_eq!(data, 7);
    let after = app.session.snapshot();
    assert_eq!(after.token.as_deref(), Some("token-2"));
    assert_eq!(after.user_info, before.user_info);
    assert_eq!(after.user_type, before.user_type);

    let auth: Option<String> = app.pipeline.get("/whoami").await.unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer token-2"));
}

#[tokio::test]
async fn test_download_reads_file_name() {
    let app = helpers::TestApp::new().await;
    app.api.auth().login(&credentials(UserType::Admin)).await.unwrap();

    let download = app.pipeline.download("/file", &[("kind", "students")]).await.unwrap();

    assert_eq!(download.file_name.as_deref(), Some("学生.xlsx"));
    assert_eq!(download.content_type.as_deref(), Some("application/vnd.ms-excel"));
    assert_eq!(download.bytes.as_ref(), &[1u8, 2, 3, 4]);
}

#[tokio::test]
async fn test_download_with_expired_envelope() {
    let app = helpers::TestApp::new().await;
    app.api.auth().login(&credentials(UserType::Admin)).await.unwrap();

    let err = app
        .pipeline
        .download("/file-expired", &[("kind", "students")])
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.message, DEFAULT_EXPIRED_MESSAGE);
    assert!(!app.session.is_authenticated());
}
