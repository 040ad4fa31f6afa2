//! Transport port for the Avicor REST API.
//!
//! Services talk to the backend through [`ApiTransport`] instead of a
//! concrete HTTP client, so they can be exercised against stubs in tests.
//! The bundled [`HttpApi`] implementation executes requests with `reqwest`.

use serde_json::Value;

pub mod errors;
pub mod http;

pub use errors::{ApiError, ApiResult};
pub use http::{ApiConfig, HttpApi};

/// Query-string pairs produced by [`crate::query::QueryFilter`].
pub type QueryParams = [(&'static str, String)];

/// Boundary to the shared HTTP client.
///
/// Every method resolves to the parsed JSON body of a successful response or
/// fails with a transport-level [`ApiError`]. `post_public` skips the
/// `Authorization` header and exists only for login.
#[allow(async_fn_in_trait)]
pub trait ApiTransport {
    async fn get(&self, path: &str, query: &QueryParams) -> ApiResult<Value>;

    async fn post(&self, path: &str, body: Value) -> ApiResult<Value>;

    async fn put(&self, path: &str, body: Value) -> ApiResult<Value>;

    async fn delete(&self, path: &str) -> ApiResult<()>;

    async fn post_public(&self, path: &str, body: Value) -> ApiResult<Value>;
}
