//! Product brands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::{QueryFilter, QueryPairs};
use crate::services::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marca {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: String,
    pub esta_activo: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateMarca {
    pub nombre: String,
    pub descripcion: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateMarca {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esta_activo: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct MarcaFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

impl MarcaFilters {
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
}

impl QueryFilter for MarcaFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = QueryPairs::new();
        q.number("page", self.page);
        q.number("perPage", self.per_page);
        q.text("search", self.search.as_deref());
        q.into_pairs()
    }
}

impl Resource for Marca {
    const BASE_PATH: &'static str = "/marcas";
    type Filter = MarcaFilters;
    type Create = CreateMarca;
    type Update = UpdateMarca;
}
