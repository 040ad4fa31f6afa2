//! Employees, optionally bundled with a user account at creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::usuario::CreateUsuario;
use crate::query::{QueryFilter, QueryPairs};
use crate::services::Resource;

/// Read-only reference to the employee's user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioRef {
    pub id: Uuid,
    pub name_user: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empleado {
    pub id: Uuid,
    pub usuario_id: Option<Uuid>,
    pub ci: String,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub cargo: String,
    /// `DD-MM-YYYY`.
    pub fecha_nacimiento: String,
    /// `DD-MM-YYYY`.
    pub fecha_contratacion: String,
    /// Decimal amount serialized by the server as a string.
    pub salario_base: String,
    pub telefono: String,
    pub direccion: String,
    pub esta_activo: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "Usuario")]
    pub usuario: Option<UsuarioRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateEmpleado {
    pub ci: String,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub cargo: String,
    pub fecha_nacimiento: String,
    pub fecha_contratacion: String,
    pub salario_base: f64,
    pub telefono: String,
    pub direccion: String,
    /// Account to create alongside the employee, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario: Option<CreateUsuario>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEmpleado {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_paterno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_materno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_contratacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salario_base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esta_activo: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct EmpleadoFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

impl EmpleadoFilters {
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

impl QueryFilter for EmpleadoFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = QueryPairs::new();
        q.number("page", self.page);
        q.number("perPage", self.per_page);
        q.text("search", self.search.as_deref());
        q.into_pairs()
    }
}

impl Resource for Empleado {
    const BASE_PATH: &'static str = "/empleados";
    type Filter = EmpleadoFilters;
    type Create = CreateEmpleado;
    type Update = UpdateEmpleado;
}
