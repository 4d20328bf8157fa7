use std::fmt;

use serde::{Deserialize, Serialize};

use super::enum_definition::EnumDefinition;
use super::schema_definition::SchemaDefinition;

/// A top-level declaration.
///
/// Serialized as `{"type": "...", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Expression {
    Schema(SchemaDefinition),
    Enum(EnumDefinition),
}

impl Expression {
    /// Returns the declared name.
    pub fn name(&self) -> &str {
        match self {
            Self::Schema(schema) => schema.name(),
            Self::Enum(definition) => definition.name(),
        }
    }

    pub fn as_schema(&self) -> Option<&SchemaDefinition> {
        match self {
            Self::Schema(schema) => Some(schema),
            Self::Enum(_) => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDefinition> {
        match self {
            Self::Enum(definition) => Some(definition),
            Self::Schema(_) => None,
        }
    }
}

impl From<SchemaDefinition> for Expression {
    fn from(schema: SchemaDefinition) -> Self {
        Self::Schema(schema)
    }
}

impl From<EnumDefinition> for Expression {
    fn from(definition: EnumDefinition) -> Self {
        Self::Enum(definition)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(schema) => write!(f, "{schema}"),
            Self::Enum(definition) => write!(f, "{definition}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_serialization() {
        let expr = Expression::from(EnumDefinition::new("Color", vec!["RED".into()]));
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json["type"], "Enum");
        assert_eq!(json["data"]["id"], "Color");
        assert_eq!(json["data"]["values"][0], "RED");
    }

    #[test]
    fn accessors() {
        let expr = Expression::from(SchemaDefinition::new("Foo", vec![]));
        assert_eq!(expr.name(), "Foo");
        assert!(expr.as_schema().is_some());
        assert!(expr.as_enum().is_none());
    }
}
