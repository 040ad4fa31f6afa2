//! Suppliers, each attached to a delivery zone.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::{QueryFilter, QueryPairs};
use crate::services::Resource;

/// Read-only reference to the supplier's zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonaRef {
    pub id: Uuid,
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proveedor {
    pub id: Uuid,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub empresa: String,
    pub telefono: String,
    pub direccion: String,
    pub esta_activo: bool,
    #[serde(rename = "Zona")]
    pub zona: Option<ZonaRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProveedor {
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub empresa: String,
    pub zona_id: Uuid,
    pub telefono: String,
    pub direccion: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProveedor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_paterno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_materno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zona_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esta_activo: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ProveedorFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub zona_id: Option<Uuid>,
}

impl ProveedorFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn zona_id(mut self, zona_id: Uuid) -> Self {
        self.zona_id = Some(zona_id);
        self
    }
}

impl QueryFilter for ProveedorFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = QueryPairs::new();
        q.number("page", self.page);
        q.number("perPage", self.per_page);
        q.text("search", self.search.as_deref());
        q.value("zona_id", self.zona_id);
        q.into_pairs()
    }
}

impl Resource for Proveedor {
    const BASE_PATH: &'static str = "/proveedores";
    type Filter = ProveedorFilters;
    type Create = CreateProveedor;
    type Update = UpdateProveedor;
}
