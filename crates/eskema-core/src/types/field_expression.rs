use std::fmt;

use serde::{Deserialize, Serialize};

use super::annotation::{AnnotationExpression, AnnotationKind};
use super::identifier::Identifier;
use super::type_expression::TypeExpression;

/// A single field inside a schema: `name: Type?` plus leading annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldExpression {
    pub id: Identifier,
    pub is_optional: bool,
    #[serde(rename = "type")]
    pub field_type: TypeExpression,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationExpression>,
}

impl FieldExpression {
    /// Creates a required field with no annotations.
    pub fn new(name: impl Into<Identifier>, field_type: TypeExpression) -> Self {
        Self {
            id: name.into(),
            is_optional: false,
            field_type,
            annotations: Vec::new(),
        }
    }

    /// Creates an optional (nullable) field with no annotations.
    pub fn optional(name: impl Into<Identifier>, field_type: TypeExpression) -> Self {
        Self {
            is_optional: true,
            ..Self::new(name, field_type)
        }
    }

    /// Returns the field name as written.
    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the serialized-name override, if the field carries one.
    pub fn serial_name(&self) -> Option<&str> {
        self.annotations.iter().find_map(|a| match a.kind {
            AnnotationKind::SerialName => Some(a.value.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for FieldExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for a in &self.annotations {
            write!(f, "{a} ")?;
        }
        write!(f, "{}: {}", self.id, self.field_type)?;
        if self.is_optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}
