//! Shared test doubles: a scripted transport and a failing storage backend.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use avicor_client::api::{ApiResult, ApiTransport, QueryParams};
use avicor_client::session::{SessionStorage, StorageError};

/// One request observed by [`StubApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

/// Transport double that replays queued responses and records every call.
#[derive(Default)]
pub struct StubApi {
    responses: Mutex<VecDeque<ApiResult<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: ApiResult<Value>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn dispatch(
        &self,
        method: &'static str,
        path: &str,
        query: &QueryParams,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            query: query.to_vec(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no stubbed response for {method} {path}"))
    }
}

impl ApiTransport for StubApi {
    async fn get(&self, path: &str, query: &QueryParams) -> ApiResult<Value> {
        self.dispatch("GET", path, query, None)
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.dispatch("POST", path, &[], Some(body))
    }

    async fn put(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.dispatch("PUT", path, &[], Some(body))
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        self.dispatch("DELETE", path, &[], None).map(|_| ())
    }

    async fn post_public(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.dispatch("POST_PUBLIC", path, &[], Some(body))
    }
}

/// Storage backend where every operation fails, as with exceeded quota.
pub struct FailingStorage;

impl SessionStorage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed("quota exceeded".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed("quota exceeded".into()))
    }
}
