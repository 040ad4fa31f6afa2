//! Response envelopes shared by every collection endpoint.

use serde::Deserialize;

/// Single-item envelope: `{ "status": ..., "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: T,
}

/// Paginated payload carried inside the `data` field of list responses.
///
/// The API names the item array after the collection (`clientes`,
/// `empleados`, ...); the aliases below accept every collection key as well
/// as the neutral `items`.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(
        alias = "clientes",
        alias = "empleados",
        alias = "proveedores",
        alias = "categorias",
        alias = "marcas",
        alias = "unidadMedidas",
        alias = "zonas",
        alias = "usuarios",
        alias = "roles"
    )]
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    #[serde(rename = "perPage")]
    pub per_page: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}
