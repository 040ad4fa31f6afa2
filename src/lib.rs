//! Typed data-access layer for the Avicor management API.
//!
//! The crate mirrors the REST surface of the backend: one domain module per
//! collection (`/clientes`, `/empleados`, ...), a generic CRUD service
//! parameterized by the [`services::Resource`] trait, a session/token store
//! backed by an injectable key-value port, and declarative form validation
//! for the registration forms.
//!
//! HTTP execution lives behind the [`api::ApiTransport`] port; the bundled
//! [`api::HttpApi`] implementation uses `reqwest`, but tests (and alternative
//! hosts) can supply their own transport.

pub mod api;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod query;
pub mod services;
pub mod session;

/// Fixed lifetime of a login token, counted from the moment of login.
pub const TOKEN_TTL_HOURS: i64 = 24;
