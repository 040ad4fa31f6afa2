//! Brand registration form.

use serde::Deserialize;

use crate::domain::marca::CreateMarca;
use crate::forms::{FieldError, FormResult, Validator};

#[derive(Debug, Clone, Deserialize)]
pub struct MarcaRegisterForm {
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl MarcaRegisterForm {
    pub fn validate(&self) -> FormResult {
        let mut v = Validator::new();
        v.min_len(
            "nombre",
            &self.nombre,
            2,
            "El nombre debe tener al menos 2 caracteres",
        );
        if let Some(descripcion) = &self.descripcion {
            v.max_len(
                "descripcion",
                descripcion,
                1000,
                "La descripción es muy larga",
            );
        }
        v.finish()
    }
}

impl TryFrom<&MarcaRegisterForm> for CreateMarca {
    type Error = Vec<FieldError>;

    fn try_from(form: &MarcaRegisterForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            nombre: form.nombre.clone(),
            descripcion: form.descripcion.clone().unwrap_or_default(),
        })
    }
}
