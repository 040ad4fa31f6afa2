//! `reqwest`-backed implementation of the transport port.

use std::sync::Arc;
use std::time::Duration;

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde_json::Value;

use crate::api::{ApiError, ApiResult, ApiTransport, QueryParams};
use crate::session::{SessionStorage, SessionStore};

/// Connection settings for [`HttpApi`].
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, e.g. `https://api.example.com/api/v1`.
    pub base_url: String,
    /// Per-request timeout in seconds. `None` keeps the reqwest default.
    pub timeout_secs: Option<u64>,
}

/// Authenticated HTTP client for the Avicor API.
///
/// Reads the bearer token lazily from the session store on every
/// authenticated request, so token expiry and logout take effect without
/// rebuilding the client.
#[derive(Debug, Clone)]
pub struct HttpApi<S> {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore<S>>,
}

impl<S: SessionStorage> HttpApi<S> {
    pub fn new(config: &ApiConfig, session: Arc<SessionStore<S>>) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), body));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl<S: SessionStorage> ApiTransport for HttpApi<S> {
    async fn get(&self, path: &str, query: &QueryParams) -> ApiResult<Value> {
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(self.authorized(request)).await
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        let request = self.http.post(self.url(path)).json(&body);
        self.execute(self.authorized(request)).await
    }

    async fn put(&self, path: &str, body: Value) -> ApiResult<Value> {
        let request = self.http.put(self.url(path)).json(&body);
        self.execute(self.authorized(request)).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.http.delete(self.url(path));
        self.execute(self.authorized(request)).await.map(|_| ())
    }

    async fn post_public(&self, path: &str, body: Value) -> ApiResult<Value> {
        let request = self.http.post(self.url(path)).json(&body);
        self.execute(request).await
    }
}
