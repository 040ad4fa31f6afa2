//! Account-creation form.

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::usuario::CreateUsuario;
use crate::forms::{FieldError, FormResult, Validator, field_error};

#[derive(Debug, Clone, Deserialize)]
pub struct UsuarioForm {
    pub rol_id: String,
    pub name_user: String,
    pub email: String,
    pub password: String,
}

impl UsuarioForm {
    pub fn validate(&self) -> FormResult {
        let mut v = Validator::new();
        v.uuid("rol_id", &self.rol_id, "El rol_id debe ser un UUID válido");
        v.min_len(
            "name_user",
            &self.name_user,
            3,
            "El nombre de usuario debe tener al menos 3 caracteres",
        );
        v.email("email", &self.email, "Email inválido");
        v.min_len(
            "password",
            &self.password,
            8,
            "La contraseña debe tener al menos 8 caracteres",
        );
        v.check(
            "password",
            self.password.chars().any(|c| c.is_ascii_uppercase()),
            "Debe contener al menos una letra mayúscula",
        );
        v.check(
            "password",
            self.password.chars().any(|c| c.is_ascii_lowercase()),
            "Debe contener al menos una letra minúscula",
        );
        v.check(
            "password",
            self.password.chars().any(|c| c.is_ascii_digit()),
            "Debe contener al menos un número",
        );
        v.finish()
    }
}

impl TryFrom<&UsuarioForm> for CreateUsuario {
    type Error = Vec<FieldError>;

    fn try_from(form: &UsuarioForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let rol_id = Uuid::parse_str(form.rol_id.trim())
            .map_err(|_| field_error("rol_id", "El rol_id debe ser un UUID válido"))?;
        Ok(Self {
            rol_id,
            name_user: form.name_user.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
        })
    }
}
