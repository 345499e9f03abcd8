//! The request pipeline.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use sms_core::config::HttpConfig;
use sms_core::error::{AppError, ErrorKind};
use sms_core::result::AppResult;
use sms_core::traits::{Navigator, Notifier};
use sms_core::types::ApiEnvelope;
use sms_session::SessionStore;

use crate::download::{Download, file_name_from_disposition};
use crate::expiry::SessionExpiryHandler;
use crate::markers::ExpiryMarkers;
use crate::{DEFAULT_EXPIRED_MESSAGE, DEFAULT_FAILURE_MESSAGE};

/// The shared HTTP client every API call goes through.
///
/// Outbound, the current bearer token is attached when the session holds
/// one. Inbound, each response is classified:
///
/// | Outcome                                   | Result                                  |
/// |-------------------------------------------|-----------------------------------------|
/// | transport failure with HTTP 401           | expiry handler, `Authentication` error  |
/// | any other transport failure               | toast, `Transport`/`Timeout` error      |
/// | envelope `code` 200                       | rotate token if header present, `data`  |
/// | envelope `code` 401                       | expiry handler, `Authentication` error  |
/// | envelope message contains an expiry marker| expiry handler, `Authentication` error  |
/// | any other envelope                        | toast, `Application` error              |
#[derive(Debug)]
pub struct RequestPipeline {
    client: Client,
    base_url: String,
    refresh_header: HeaderName,
    markers: ExpiryMarkers,
    session: Arc<SessionStore>,
    expiry: Arc<SessionExpiryHandler>,
    notifier: Arc<dyn Notifier>,
}

impl RequestPipeline {
    /// Build the pipeline and its expiry handler.
    pub fn new(
        config: &HttpConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        login_path: &str,
    ) -> AppResult<Self> {
        let expiry = Arc::new(SessionExpiryHandler::new(
            Arc::clone(&session),
            navigator,
            login_path,
        ));
        Self::with_expiry_handler(config, session, expiry, notifier)
    }

    /// Build the pipeline around an existing expiry handler.
    pub fn with_expiry_handler(
        config: &HttpConfig,
        session: Arc<SessionStore>,
        expiry: Arc<SessionExpiryHandler>,
        notifier: Arc<dyn Notifier>,
    ) -> AppResult<Self> {
        let refresh_header =
            HeaderName::from_bytes(config.refresh_header.as_bytes()).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Invalid refresh header name '{}'", config.refresh_header),
                    e,
                )
            })?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            refresh_header,
            markers: ExpiryMarkers::from_config(config),
            session,
            expiry,
            notifier,
        })
    }

    /// The session this pipeline authenticates with.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// The expiry handler.
    pub fn expiry(&self) -> &Arc<SessionExpiryHandler> {
        &self.expiry
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET path`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.execute(self.request(Method::GET, path)).await
    }

    /// `GET path?query`.
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.request(Method::GET, path).query(query))
            .await
    }

    /// `POST path` with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    /// `POST path` with a multipart form.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> AppResult<T> {
        self.execute(self.request(Method::POST, path).multipart(form))
            .await
    }

    /// `PUT path` with a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    /// `PUT path?query` without a body.
    pub async fn put_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.request(Method::PUT, path).query(query))
            .await
    }

    /// `DELETE path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    /// `GET path?query` returning the raw file.
    ///
    /// A JSON response where a file was expected is treated as an envelope,
    /// so expired sessions and server failures take the usual path.
    pub async fn download<Q>(&self, path: &str, query: &Q) -> AppResult<Download>
    where
        Q: Serialize + ?Sized,
    {
        let response = self
            .dispatch(self.request(Method::GET, path).query(query))
            .await?;

        let content_type = header_string(&response, &header::CONTENT_TYPE);
        if content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
        {
            let _: Value = self.unwrap_envelope(response).await?;
            let err = AppError::application("服务器未返回文件");
            self.notifier.error(&err.message);
            return Err(err);
        }

        self.apply_rotation(&response);
        let file_name = header_string(&response, &header::CONTENT_DISPOSITION)
            .as_deref()
            .and_then(file_name_from_disposition);
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return Err(self.transport_failure(e.status(), transport_error(e))),
        };

        debug!(path, size = bytes.len(), "File downloaded");
        Ok(Download {
            file_name,
            content_type,
            bytes,
        })
    }

    /// Outbound stage: join the URL and attach the bearer token.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "Dispatching request");
        let builder = self.client.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = self.dispatch(builder).await?;
        let data = self.unwrap_envelope(response).await?;
        serde_json::from_value(data).map_err(|e| {
            warn!(error = %e, "Response data did not match the expected shape");
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Unexpected response data: {e}"),
                e,
            )
        })
    }

    /// Send the request and reject transport-level failures.
    async fn dispatch(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.transport_failure(e.status(), transport_error(e))),
        };

        let status = response.status();
        if !status.is_success() {
            let err = AppError::transport(format!(
                "Request failed with status code {}",
                status.as_u16()
            ));
            return Err(self.transport_failure(Some(status), err));
        }
        Ok(response)
    }

    /// Inbound stage: classify the envelope and return its `data`.
    async fn unwrap_envelope(&self, response: Response) -> AppResult<Value> {
        let rotated = header_string(&response, &self.refresh_header);
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return Err(self.transport_failure(e.status(), transport_error(e))),
        };

        let envelope: ApiEnvelope<Value> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(error = %e, "Response is not a valid envelope");
                self.notifier.error(DEFAULT_FAILURE_MESSAGE);
                return Err(AppError::with_source(
                    ErrorKind::Application,
                    DEFAULT_FAILURE_MESSAGE,
                    e,
                ));
            }
        };

        if envelope.is_success() {
            if let Some(token) = rotated {
                self.rotate(&token);
            }
            return Ok(envelope.data.unwrap_or(Value::Null));
        }

        Err(self.application_failure(&envelope))
    }

    fn application_failure(&self, envelope: &ApiEnvelope<Value>) -> AppError {
        if envelope.is_unauthorized() {
            let message = envelope.message_or(DEFAULT_EXPIRED_MESSAGE);
            warn!(code = envelope.code, reason = message, "Server rejected the session");
            self.expiry.trigger(message);
            return AppError::authentication(message);
        }

        let message = envelope.message_or(DEFAULT_FAILURE_MESSAGE);
        if let Some(marker) = self.markers.find(message) {
            warn!(
                code = envelope.code,
                reason = message,
                marker,
                "Server reported an expired session"
            );
            self.expiry.trigger(message);
            return AppError::authentication(message);
        }

        debug!(code = envelope.code, reason = message, "Request failed");
        self.notifier.error(message);
        AppError::application(message)
    }

    fn transport_failure(&self, status: Option<StatusCode>, err: AppError) -> AppError {
        if status == Some(StatusCode::UNAUTHORIZED) {
            warn!("Transport rejected the session with HTTP 401");
            self.expiry.trigger(DEFAULT_EXPIRED_MESSAGE);
            return AppError::authentication(DEFAULT_EXPIRED_MESSAGE);
        }

        warn!(error = %err, "Request failed at transport level");
        if err.message.is_empty() {
            self.notifier.error("网络错误");
        } else {
            self.notifier.error(&err.message);
        }
        err
    }

    fn apply_rotation(&self, response: &Response) {
        if let Some(token) = header_string(response, &self.refresh_header) {
            self.rotate(&token);
        }
    }

    fn rotate(&self, token: &str) {
        if token.is_empty() {
            return;
        }
        match self.session.rotate_token(token) {
            Ok(()) => debug!("Token refreshed from response header"),
            Err(e) => warn!(error = %e, "Failed to store rotated token"),
        }
    }
}

fn header_string(response: &Response, name: &HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Map a `reqwest` failure into the client error.
pub fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        return AppError::with_source(ErrorKind::Timeout, format!("Request timed out: {err}"), err);
    }
    if err.is_decode() {
        return AppError::with_source(
            ErrorKind::Serialization,
            format!("Failed to decode response: {err}"),
            err,
        );
    }
    AppError::with_source(ErrorKind::Transport, err.to_string(), err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sms_session::MemoryStore;

    #[derive(Debug)]
    struct Silent;

    #[async_trait::async_trait]
    impl Navigator for Silent {
        fn set_title(&self, _title: &str) {}
        async fn prompt(&self, _message: &str) {}
        async fn replace(&self, _path: &str) {}
    }

    impl Notifier for Silent {
        fn error(&self, _message: &str) {}
    }

    fn pipeline(base_url: &str) -> RequestPipeline {
        let session =
            Arc::new(SessionStore::rehydrate(Arc::new(MemoryStore::new())).unwrap());
        let config = HttpConfig {
            base_url: base_url.to_string(),
            ..HttpConfig::default()
        };
        RequestPipeline::new(&config, session, Arc::new(Silent), Arc::new(Silent), "/login")
            .unwrap()
    }

    #[test]
    fn test_url_joining() {
        let p = pipeline("http://localhost:8080/api/");
        assert_eq!(p.base_url(), "http://localhost:8080/api");
        assert_eq!(p.url("/award/1"), "http://localhost:8080/api/award/1");
        assert_eq!(p.url("notice"), "http://localhost:8080/api/notice");
    }

    #[test]
    fn test_invalid_refresh_header_is_rejected() {
        let session =
            Arc::new(SessionStore::rehydrate(Arc::new(MemoryStore::new())).unwrap());
        let config = HttpConfig {
            refresh_header: "bad header".to_string(),
            ..HttpConfig::default()
        };
        let err = RequestPipeline::new(&config, session, Arc::new(Silent), Arc::new(Silent), "/login")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
