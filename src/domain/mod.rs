//! Domain entities, DTOs, and list filters for every API collection.

pub mod auth;
pub mod categoria;
pub mod cliente;
pub mod empleado;
pub mod marca;
pub mod proveedor;
pub mod rol;
pub mod unidad_medida;
pub mod usuario;
pub mod zona;
