//! Shared test helpers for integration tests.
//!
//! Each test starts a stub backend on an ephemeral port and builds the real
//! pipeline against it, with in-memory storage and recording ports.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Json;
use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Semaphore;

use sms_api::SmsApi;
use sms_core::config::{HttpConfig, RoutingConfig};
use sms_core::traits::{Navigator, Notifier};
use sms_http::{RequestPipeline, SessionExpiryHandler};
use sms_router::Navigation;
use sms_session::{MemoryStore, SessionStore};

/// Navigator whose prompt blocks until the test opens the gate.
#[derive(Debug)]
pub struct FakeNavigator {
    pub gate: Semaphore,
    pub prompts: Mutex<Vec<String>>,
    pub replaced: Mutex<Vec<String>>,
    pub titles: Mutex<Vec<String>>,
}

impl FakeNavigator {
    /// A navigator that blocks prompts until [`FakeNavigator::release`].
    pub fn gated() -> Self {
        Self {
            gate: Semaphore::new(0),
            prompts: Mutex::new(Vec::new()),
            replaced: Mutex::new(Vec::new()),
            titles: Mutex::new(Vec::new()),
        }
    }

    /// A navigator whose prompts return immediately.
    pub fn open() -> Self {
        let navigator = Self::gated();
        navigator.gate.add_permits(1024);
        navigator
    }

    /// Let `n` pending or future prompts complete.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn replaced(&self) -> Vec<String> {
        self.replaced.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }
}

#[async_trait]
impl Navigator for FakeNavigator {
    fn set_title(&self, title: &str) {
        self.titles.lock().unwrap().push(title.to_string());
    }

    async fn prompt(&self, message: &str) {
        self.prompts.lock().unwrap().push(message.to_string());
        self.gate.acquire().await.unwrap().forget();
    }

    async fn replace(&self, path: &str) {
        self.replaced.lock().unwrap().push(path.to_string());
    }
}

/// Notifier that records every toast.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Counters the stub backend updates.
#[derive(Debug, Default)]
pub struct Hits {
    pub expired: AtomicUsize,
}

impl Hits {
    pub fn expired(&self) -> usize {
        self.expired.load(Ordering::SeqCst)
    }
}

/// Test application context
pub struct TestApp {
    pub api: SmsApi,
    pub pipeline: Arc<RequestPipeline>,
    pub session: Arc<SessionStore>,
    pub storage: Arc<MemoryStore>,
    pub navigator: Arc<FakeNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub hits: Arc<Hits>,
    pub routing: RoutingConfig,
    pub navigation: Navigation,
}

impl TestApp {
    /// Start the stub backend and build a client with a gated navigator.
    pub async fn new() -> Self {
        Self::with_navigator(FakeNavigator::gated()).await
    }

    /// Start the stub backend and build a client around `navigator`.
    pub async fn with_navigator(navigator: FakeNavigator) -> Self {
        let hits = Arc::new(Hits::default());
        let base_url = spawn_backend(Arc::clone(&hits)).await;

        let storage = Arc::new(MemoryStore::new());
        let session = Arc::new(SessionStore::rehydrate(storage.clone()).unwrap());
        let navigator = Arc::new(navigator);
        let notifier = Arc::new(RecordingNotifier::default());
        let routing = RoutingConfig::default();

        let config = HttpConfig {
            base_url,
            timeout_seconds: 1,
            ..HttpConfig::default()
        };
        let navigation = Navigation::standard(session.clone(), navigator.clone(), &routing);
        let expiry = SessionExpiryHandler::new(
            session.clone(),
            navigator.clone(),
            routing.login_path.as_str(),
        )
        .with_router(Arc::new(navigation.clone()));
        let pipeline = Arc::new(
            RequestPipeline::with_expiry_handler(
                &config,
                session.clone(),
                Arc::new(expiry),
                notifier.clone(),
            )
            .expect("Failed to build pipeline"),
        );

        Self {
            api: SmsApi::new(pipeline.clone()),
            pipeline,
            session,
            storage,
            navigator,
            notifier,
            hits,
            routing,
            navigation,
        }
    }
}

/// Serve the stub backend on `127.0.0.1:0` and return its API base URL.
async fn spawn_backend(hits: Arc<Hits>) -> String {
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/whoami", get(whoami))
        .route(
            "/api/expired",
            get(move || {
                let hits = Arc::clone(&hits);
                async move {
                    hits.expired.fetch_add(1, Ordering::SeqCst);
                    Json(json!({"code": 401, "message": "登录已过期，请重新登录", "data": null}))
                }
            }),
        )
        .route(
            "/api/failure",
            get(|| async { Json(json!({"code": 500, "message": "服务器内部错误", "data": null})) }),
        )
        .route(
            "/api/marker",
            get(|| async { Json(json!({"code": 400, "message": "Token 无效", "data": null})) }),
        )
        .route(
            "/api/unauthorized",
            get(|| async { StatusCode::UNAUTHORIZED }),
        )
        .route(
            "/api/server-error",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route("/api/plain", get(|| async { "not an envelope" }))
        .route(
            "/api/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!({"code": 200, "message": "操作成功", "data": 1}))
            }),
        )
        .route("/api/rotate", get(rotate))
        .route("/api/file", get(file))
        .route(
            "/api/file-expired",
            get(|| async { Json(json!({"code": 401, "message": null, "data": null})) }),
        );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

async fn login(Json(body): Json<Value>) -> Json<Value> {
    if body["passwd"] != "secret" {
        return Json(json!({"code": 400, "message": "用户名或密码错误", "data": null}));
    }
    if body["userId"] == "NODATA" {
        return Json(json!({"code": 200, "message": "登录成功", "data": null}));
    }
    let user_type = body["userType"].as_str().unwrap_or("student");
    let role = (user_type == "admin").then_some("教务管理员");
    Json(json!({
        "code": 200,
        "message": "登录成功",
        "data": {
            "userId": body["userId"],
            "userName": "张三",
            "userType": user_type,
            "phone": "13800000000",
            "email": null,
            "role": role,
            "token": "token-1"
        }
    }))
}

async fn whoami(headers: HeaderMap) -> Json<Value> {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    Json(json!({"code": 200, "message": "操作成功", "data": auth}))
}

async fn rotate() -> impl IntoResponse {
    (
        [("x-new-token", "token-2")],
        Json(json!({"code": 200, "message": "操作成功", "data": 7})),
    )
}

async fn file() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "application/vnd.ms-excel"),
            (
                CONTENT_DISPOSITION,
                "attachment; filename*=UTF-8''%E5%AD%A6%E7%94%9F.xlsx",
            ),
        ],
        vec![1u8, 2, 3, 4],
    )
}
