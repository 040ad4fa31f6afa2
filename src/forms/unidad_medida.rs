//! Unit-of-measure registration form.

use serde::Deserialize;

use crate::domain::unidad_medida::CreateUnidadMedida;
use crate::forms::{FieldError, FormResult, Validator};

#[derive(Debug, Clone, Deserialize)]
pub struct UnidadMedidaRegisterForm {
    pub nombre: String,
    pub abreviatura: String,
}

impl UnidadMedidaRegisterForm {
    pub fn validate(&self) -> FormResult {
        let mut v = Validator::new();
        v.min_len(
            "nombre",
            &self.nombre,
            2,
            "El nombre debe tener al menos 2 caracteres.",
        );
        v.min_len(
            "abreviatura",
            &self.abreviatura,
            1,
            "La abreviatura es requerida.",
        );
        v.finish()
    }
}

impl TryFrom<&UnidadMedidaRegisterForm> for CreateUnidadMedida {
    type Error = Vec<FieldError>;

    fn try_from(form: &UnidadMedidaRegisterForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            nombre: form.nombre.clone(),
            abreviatura: form.abreviatura.clone(),
        })
    }
}
