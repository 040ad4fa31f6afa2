//! Declarative field-level validation for create/registration forms.
//!
//! Each field maps to an ordered list of predicate + message rules collected
//! by [`Validator`]. Object validation runs every rule and returns either
//! `Ok(())` or the ordered failures; expected validation failures are values,
//! never panics, and no rule touches storage or the network.

use chrono::NaiveDate;
use uuid::Uuid;
use validator::ValidateEmail;

pub mod empleado;
pub mod marca;
pub mod proveedor;
pub mod unidad_medida;
pub mod usuario;

/// A single failed rule, addressed by field path (`usuario.password` for
/// nested sub-forms).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

pub type FormResult = Result<(), Vec<FieldError>>;

/// Collects rule failures in evaluation order.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `field` when the predicate does not hold.
    pub fn check(&mut self, field: &str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.errors.push(FieldError {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
        self
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize, message: &str) -> &mut Self {
        let ok = value.chars().count() >= min;
        self.check(field, ok, message)
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize, message: &str) -> &mut Self {
        let ok = value.chars().count() <= max;
        self.check(field, ok, message)
    }

    pub fn positive(&mut self, field: &str, value: f64, message: &str) -> &mut Self {
        self.check(field, value > 0.0, message)
    }

    pub fn email(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        self.check(field, value.validate_email(), message)
    }

    pub fn uuid(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        self.check(field, Uuid::parse_str(value).is_ok(), message)
    }

    /// Calendar date in `DD-MM-YYYY`.
    pub fn date_dmy(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        let ok = NaiveDate::parse_from_str(value, "%d-%m-%Y").is_ok();
        self.check(field, ok, message)
    }

    /// Merges a sub-form result, prefixing its field paths.
    pub fn nested(&mut self, prefix: &str, result: FormResult) -> &mut Self {
        if let Err(errors) = result {
            for error in errors {
                self.errors.push(FieldError {
                    field: format!("{prefix}.{}", error.field),
                    message: error.message,
                });
            }
        }
        self
    }

    pub fn finish(self) -> FormResult {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

pub(crate) fn field_error(field: &str, message: &str) -> Vec<FieldError> {
    vec![FieldError {
        field: field.to_string(),
        message: message.to_string(),
    }]
}
