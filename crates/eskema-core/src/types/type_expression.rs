use std::fmt;

use serde::{Deserialize, Serialize};

use super::identifier::Identifier;
use super::primitive::Primitive;

/// A type reference with optional generic arguments, e.g. `Map<String, Array<T>>`.
///
/// The name is either a primitive or a user type; the distinction is made on
/// demand via [`TypeExpression::primitive`] rather than stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeExpression {
    pub id: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<TypeExpression>,
}

impl TypeExpression {
    /// Creates a type with no generic arguments.
    pub fn new(name: impl Into<Identifier>) -> Self {
        Self {
            id: name.into(),
            generics: Vec::new(),
        }
    }

    /// Creates a type with the given generic arguments.
    pub fn with_generics(name: impl Into<Identifier>, generics: Vec<TypeExpression>) -> Self {
        Self {
            id: name.into(),
            generics,
        }
    }

    /// Returns the type name as written.
    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the primitive this type names, if any.
    pub fn primitive(&self) -> Option<Primitive> {
        Primitive::from_name(self.id.as_str())
    }

    /// Returns true if this type carries generic arguments.
    pub fn is_generic(&self) -> bool {
        !self.generics.is_empty()
    }
}

impl fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if !self.is_generic() {
            return Ok(());
        }
        f.write_str("<")?;
        for (i, generic) in self.generics.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{generic}")?;
        }
        f.write_str(">")
    }
}
