//! Generic CRUD service over the transport port.
//!
//! Every collection endpoint follows the same contract, so the five verbs
//! are implemented once and instantiated per entity through the [`Resource`]
//! trait instead of being repeated per service. Transport failures propagate
//! to the caller unchanged; this layer adds no retries and no caching.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::api::{ApiResult, ApiTransport};
use crate::dto::{ApiResponse, Page};
use crate::query::QueryFilter;

pub mod auth;

/// Per-entity configuration of the generic CRUD surface.
pub trait Resource: DeserializeOwned {
    /// REST collection path, e.g. `/clientes`.
    const BASE_PATH: &'static str;
    type Filter: QueryFilter;
    type Create: Serialize;
    type Update: Serialize;
}

/// Entities whose collection supports the soft-enable toggle.
pub trait Activate: Resource {
    /// Builds the partial update carrying only `esta_activo`.
    fn activation(active: bool) -> Self::Update;
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    Ok(serde_json::from_value(value)?)
}

fn item_path<E: Resource>(id: Uuid) -> String {
    format!("{}/{id}", E::BASE_PATH)
}

/// Fetches one page of the collection, constrained by the given filters.
pub async fn list<A, E>(api: &A, filter: &E::Filter) -> ApiResult<Page<E>>
where
    A: ApiTransport,
    E: Resource,
{
    let value = api.get(E::BASE_PATH, &filter.query_pairs()).await?;
    let envelope: ApiResponse<Page<E>> = decode(value)?;
    Ok(envelope.data)
}

/// Fetches the whole collection without filters or pagination.
///
/// Some endpoints return a bare array instead of the paginated payload when
/// queried without parameters; this is the shape picker widgets consume.
pub async fn list_all<A, E>(api: &A) -> ApiResult<Vec<E>>
where
    A: ApiTransport,
    E: Resource,
{
    let value = api.get(E::BASE_PATH, &[]).await?;
    Ok(decode::<ApiResponse<Vec<E>>>(value)?.data)
}

pub async fn get_by_id<A, E>(api: &A, id: Uuid) -> ApiResult<E>
where
    A: ApiTransport,
    E: Resource,
{
    let value = api.get(&item_path::<E>(id), &[]).await?;
    Ok(decode::<ApiResponse<E>>(value)?.data)
}

/// Creates an entity; the server assigns `id` and timestamps.
pub async fn create<A, E>(api: &A, dto: &E::Create) -> ApiResult<E>
where
    A: ApiTransport,
    E: Resource,
{
    let body = serde_json::to_value(dto)?;
    let value = api.post(E::BASE_PATH, body).await?;
    Ok(decode::<ApiResponse<E>>(value)?.data)
}

/// Applies a partial update; absent DTO fields are left untouched.
pub async fn update<A, E>(api: &A, id: Uuid, dto: &E::Update) -> ApiResult<E>
where
    A: ApiTransport,
    E: Resource,
{
    let body = serde_json::to_value(dto)?;
    let value = api.put(&item_path::<E>(id), body).await?;
    Ok(decode::<ApiResponse<E>>(value)?.data)
}

pub async fn remove<A, E>(api: &A, id: Uuid) -> ApiResult<()>
where
    A: ApiTransport,
    E: Resource,
{
    api.delete(&item_path::<E>(id)).await
}

/// Convenience wrapper over [`update`] that only flips `esta_activo`.
pub async fn toggle_active<A, E>(api: &A, id: Uuid, active: bool) -> ApiResult<E>
where
    A: ApiTransport,
    E: Activate,
{
    update::<A, E>(api, id, &E::activation(active)).await
}
