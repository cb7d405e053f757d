//! Scope: restriction of the candidate record set.

use crate::types::TypeTag;

/// Restricts a query to all records or to specific record types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
    /// No restriction.
    #[default]
    All,
    /// Only records whose discriminant is one of these types.
    Types(Vec<TypeTag>),
}

impl Scope {
    /// Scope over a single record type.
    pub fn single(tag: TypeTag) -> Self {
        Scope::Types(vec![tag])
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Scope::All)
    }

    /// Returns true if a record with this discriminant is in scope.
    pub fn admits(&self, tag: &str) -> bool {
        match self {
            Scope::All => true,
            Scope::Types(tags) => tags.iter().any(|t| t.as_str() == tag),
        }
    }
}
