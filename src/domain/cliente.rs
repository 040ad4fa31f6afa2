//! Clients of the business, wholesale and retail.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::{QueryFilter, QueryPairs};
use crate::services::{Activate, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genero {
    #[serde(rename = "M")]
    Masculino,
    #[serde(rename = "F")]
    Femenino,
}

impl Genero {
    pub fn as_str(self) -> &'static str {
        match self {
            Genero::Masculino => "M",
            Genero::Femenino => "F",
        }
    }
}

impl Display for Genero {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Retail (`MIN`) or wholesale (`MAY`) client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoCliente {
    #[serde(rename = "MIN")]
    Minorista,
    #[serde(rename = "MAY")]
    Mayorista,
}

impl TipoCliente {
    pub fn as_str(self) -> &'static str {
        match self {
            TipoCliente::Minorista => "MIN",
            TipoCliente::Mayorista => "MAY",
        }
    }
}

impl Display for TipoCliente {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: Uuid,
    pub ci: String,
    pub zona_id: Uuid,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub correo_electronico: String,
    /// Birth date as sent by the server, `DD-MM-YYYY`.
    pub fecha_nacimiento: String,
    pub telefono: String,
    pub direccion: String,
    /// Loyalty points, maintained server-side.
    pub puntos: i64,
    pub genero: Genero,
    pub tipo_cliente: TipoCliente,
    pub esta_activo: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCliente {
    pub ci: String,
    pub zona_id: Uuid,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub correo_electronico: String,
    pub fecha_nacimiento: String,
    pub telefono: String,
    pub direccion: String,
    pub genero: Genero,
    pub tipo_cliente: TipoCliente,
}

/// Partial update; absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCliente {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zona_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_paterno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_materno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correo_electronico: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genero: Option<Genero>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_cliente: Option<TipoCliente>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esta_activo: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ClienteFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub tipo_cliente: Option<TipoCliente>,
}

impl ClienteFilters {
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

    pub fn tipo_cliente(mut self, tipo: TipoCliente) -> Self {
        self.tipo_cliente = Some(tipo);
        self
    }
}

impl QueryFilter for ClienteFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = QueryPairs::new();
        q.number("page", self.page);
        q.number("perPage", self.per_page);
        q.text("search", self.search.as_deref());
        q.value("tipo_cliente", self.tipo_cliente);
        q.into_pairs()
    }
}

impl Resource for Cliente {
    const BASE_PATH: &'static str = "/clientes";
    type Filter = ClienteFilters;
    type Create = CreateCliente;
    type Update = UpdateCliente;
}

impl Activate for Cliente {
    fn activation(active: bool) -> UpdateCliente {
        UpdateCliente {
            esta_activo: Some(active),
            ..UpdateCliente::default()
        }
    }
}
