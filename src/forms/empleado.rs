//! Employee registration form, bundling the account sub-form.

use serde::Deserialize;

use crate::domain::empleado::CreateEmpleado;
use crate::domain::usuario::CreateUsuario;
use crate::forms::usuario::UsuarioForm;
use crate::forms::{FieldError, FormResult, Validator};

#[derive(Debug, Clone, Deserialize)]
pub struct EmpleadoRegisterForm {
    pub ci: String,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub cargo: String,
    /// `DD-MM-YYYY`.
    pub fecha_nacimiento: String,
    /// `DD-MM-YYYY`.
    pub fecha_contratacion: String,
    pub salario_base: f64,
    pub telefono: String,
    pub direccion: String,
    pub usuario: UsuarioForm,
}

impl EmpleadoRegisterForm {
    pub fn validate(&self) -> FormResult {
        let mut v = Validator::new();
        v.min_len("ci", &self.ci, 6, "CI inválido");
        v.max_len("ci", &self.ci, 15, "CI demasiado largo");
        v.min_len("nombre", &self.nombre, 2, "Nombre muy corto");
        v.min_len(
            "apellido_paterno",
            &self.apellido_paterno,
            2,
            "Apellido paterno muy corto",
        );
        v.min_len(
            "apellido_materno",
            &self.apellido_materno,
            2,
            "Apellido materno muy corto",
        );
        v.min_len("cargo", &self.cargo, 3, "Cargo inválido");
        v.date_dmy(
            "fecha_nacimiento",
            &self.fecha_nacimiento,
            "Formato de fecha inválido (DD-MM-YYYY)",
        );
        v.date_dmy(
            "fecha_contratacion",
            &self.fecha_contratacion,
            "Formato de fecha inválido (DD-MM-YYYY)",
        );
        v.positive(
            "salario_base",
            self.salario_base,
            "El salario debe ser mayor a 0",
        );
        v.min_len("telefono", &self.telefono, 7, "Teléfono inválido");
        v.max_len("telefono", &self.telefono, 15, "Teléfono inválido");
        v.min_len("direccion", &self.direccion, 5, "Dirección muy corta");
        v.nested("usuario", self.usuario.validate());
        v.finish()
    }
}

impl TryFrom<&EmpleadoRegisterForm> for CreateEmpleado {
    type Error = Vec<FieldError>;

    fn try_from(form: &EmpleadoRegisterForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let usuario = CreateUsuario::try_from(&form.usuario)?;
        Ok(Self {
            ci: form.ci.clone(),
            nombre: form.nombre.clone(),
            apellido_paterno: form.apellido_paterno.clone(),
            apellido_materno: form.apellido_materno.clone(),
            cargo: form.cargo.clone(),
            fecha_nacimiento: form.fecha_nacimiento.clone(),
            fecha_contratacion: form.fecha_contratacion.clone(),
            salario_base: form.salario_base,
            telefono: form.telefono.clone(),
            direccion: form.direccion.clone(),
            usuario: Some(usuario),
        })
    }
}
