//! Query-string assembly for filtered list endpoints.
//!
//! Every filter struct renders itself to key/value pairs through
//! [`QueryFilter`]. The rules are uniform across collections: absent fields
//! are omitted, numeric fields are stringified, empty search strings are
//! treated as absent, and boolean filters are included even when `false`.

use std::fmt::Display;

/// Renders a filter object to query-string pairs.
pub trait QueryFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Accumulator used by [`QueryFilter`] implementations.
#[derive(Debug, Default)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a numeric field when present.
    pub fn number<N: Display>(&mut self, key: &'static str, value: Option<N>) -> &mut Self {
        if let Some(n) = value {
            self.pairs.push((key, n.to_string()));
        }
        self
    }

    /// Appends a text field when present and non-empty.
    pub fn text(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(s) = value
            && !s.is_empty()
        {
            self.pairs.push((key, s.to_string()));
        }
        self
    }

    /// Appends a boolean field when explicitly set; `Some(false)` is kept.
    pub fn flag(&mut self, key: &'static str, value: Option<bool>) -> &mut Self {
        if let Some(b) = value {
            self.pairs.push((key, b.to_string()));
        }
        self
    }

    /// Appends any displayable field (enums, UUIDs) when present.
    pub fn value<T: Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.pairs.push((key, v.to_string()));
        }
        self
    }

    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::cliente::{ClienteFilters, TipoCliente};
    use crate::domain::usuario::UsuarioFilters;

    #[test]
    fn absent_fields_are_omitted() {
        let pairs = ClienteFilters::new().query_pairs();
        assert!(pairs.is_empty());
    }

    #[test]
    fn empty_search_is_treated_as_absent() {
        let pairs = ClienteFilters::new().search("").query_pairs();
        assert!(pairs.is_empty());
    }

    #[test]
    fn numbers_are_stringified_in_declaration_order() {
        let pairs = ClienteFilters::new()
            .paginate(2, 25)
            .search("perez")
            .tipo_cliente(TipoCliente::Mayorista)
            .query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("perPage", "25".to_string()),
                ("search", "perez".to_string()),
                ("tipo_cliente", "MAY".to_string()),
            ]
        );
    }

    #[test]
    fn explicit_false_flag_is_included() {
        let rol_id = Uuid::nil();
        let pairs = UsuarioFilters::new()
            .rol_id(rol_id)
            .esta_activo(false)
            .query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("rol_id", rol_id.to_string()),
                ("esta_activo", "false".to_string()),
            ]
        );
    }
}
