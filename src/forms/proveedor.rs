//! Supplier registration form.

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::proveedor::CreateProveedor;
use crate::forms::{FieldError, FormResult, Validator, field_error};

#[derive(Debug, Clone, Deserialize)]
pub struct ProveedorRegisterForm {
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub empresa: String,
    pub zona_id: String,
    pub telefono: String,
    pub direccion: String,
}

impl ProveedorRegisterForm {
    pub fn validate(&self) -> FormResult {
        let mut v = Validator::new();
        v.min_len(
            "nombre",
            &self.nombre,
            2,
            "El nombre debe tener al menos 2 caracteres",
        );
        v.min_len(
            "apellido_paterno",
            &self.apellido_paterno,
            2,
            "El apellido paterno es muy corto",
        );
        v.min_len(
            "apellido_materno",
            &self.apellido_materno,
            2,
            "El apellido materno es muy corto",
        );
        v.min_len(
            "empresa",
            &self.empresa,
            2,
            "El nombre de la empresa es muy corto",
        );
        v.uuid("zona_id", &self.zona_id, "La zona debe ser un UUID válido");
        v.min_len("telefono", &self.telefono, 7, "Teléfono inválido");
        v.max_len("telefono", &self.telefono, 15, "Teléfono inválido");
        v.min_len("direccion", &self.direccion, 5, "La dirección es muy corta");
        v.finish()
    }
}

impl TryFrom<&ProveedorRegisterForm> for CreateProveedor {
    type Error = Vec<FieldError>;

    fn try_from(form: &ProveedorRegisterForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let zona_id = Uuid::parse_str(form.zona_id.trim())
            .map_err(|_| field_error("zona_id", "La zona debe ser un UUID válido"))?;
        Ok(Self {
            nombre: form.nombre.clone(),
            apellido_paterno: form.apellido_paterno.clone(),
            apellido_materno: form.apellido_materno.clone(),
            empresa: form.empresa.clone(),
            zona_id,
            telefono: form.telefono.clone(),
            direccion: form.direccion.clone(),
        })
    }
}
