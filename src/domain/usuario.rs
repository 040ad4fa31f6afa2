//! User accounts and their role assignment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::{QueryFilter, QueryPairs};
use crate::services::{Activate, Resource};

/// Read-only reference to the account's role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolRef {
    pub id: Uuid,
    pub nombre_rol: String,
    pub code_rol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: Uuid,
    pub rol_id: Uuid,
    pub name_user: String,
    pub email: String,
    pub password_hash: String,
    pub password_reset_token: Option<String>,
    pub password_reset_expires: Option<String>,
    pub esta_activo: bool,
    pub empleado_id: Option<Uuid>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub rol: Option<RolRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUsuario {
    pub rol_id: Uuid,
    pub name_user: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUsuario {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esta_activo: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct UsuarioFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub rol_id: Option<Uuid>,
    pub esta_activo: Option<bool>,
}

impl UsuarioFilters {
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

    pub fn rol_id(mut self, rol_id: Uuid) -> Self {
        self.rol_id = Some(rol_id);
        self
    }

    pub fn esta_activo(mut self, active: bool) -> Self {
        self.esta_activo = Some(active);
        self
    }
}

impl QueryFilter for UsuarioFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = QueryPairs::new();
        q.number("page", self.page);
        q.number("perPage", self.per_page);
        q.text("search", self.search.as_deref());
        q.value("rol_id", self.rol_id);
        q.flag("esta_activo", self.esta_activo);
        q.into_pairs()
    }
}

impl Resource for Usuario {
    const BASE_PATH: &'static str = "/usuarios";
    type Filter = UsuarioFilters;
    type Create = CreateUsuario;
    type Update = UpdateUsuario;
}

impl Activate for Usuario {
    fn activation(active: bool) -> UpdateUsuario {
        UpdateUsuario {
            esta_activo: Some(active),
            ..UpdateUsuario::default()
        }
    }
}
