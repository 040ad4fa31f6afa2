//! Roles assignable to user accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::{QueryFilter, QueryPairs};
use crate::services::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rol {
    pub id: Uuid,
    pub nombre_rol: String,
    pub code_rol: String,
    pub descripcion: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateRol {
    pub nombre_rol: String,
    pub code_rol: String,
    pub descripcion: String,
}

/// Roles have no soft-enable toggle; only the descriptive fields change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRol {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_rol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_rol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RolFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

impl RolFilters {
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

impl QueryFilter for RolFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = QueryPairs::new();
        q.number("page", self.page);
        q.number("perPage", self.per_page);
        q.text("search", self.search.as_deref());
        q.into_pairs()
    }
}

impl Resource for Rol {
    const BASE_PATH: &'static str = "/roles";
    type Filter = RolFilters;
    type Create = CreateRol;
    type Update = UpdateRol;
}
