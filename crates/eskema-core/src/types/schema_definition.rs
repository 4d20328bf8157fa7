use std::fmt;

use serde::{Deserialize, Serialize};

use super::field_expression::FieldExpression;
use super::identifier::Identifier;
use super::type_expression::TypeExpression;

/// A named record type: ordered fields plus optional generic parameters.
///
/// Field order is declaration order and is preserved through emission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub id: Identifier,
    pub fields: Vec<FieldExpression>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<TypeExpression>,
}

impl SchemaDefinition {
    /// Creates a schema with the given fields and no generic parameters.
    pub fn new(name: impl Into<Identifier>, fields: Vec<FieldExpression>) -> Self {
        Self {
            id: name.into(),
            fields,
            generics: Vec::new(),
        }
    }

    /// Returns the schema name as written.
    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    /// Returns true if at least one field is optional.
    pub fn contains_nullable_fields(&self) -> bool {
        self.fields.iter().any(|f| f.is_optional)
    }
}

impl fmt::Display for SchemaDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema {}", self.id)?;
        if !self.generics.is_empty() {
            let params: Vec<String> = self.generics.iter().map(ToString::to_string).collect();
            write!(f, "<{}>", params.join(", "))?;
        }
        write!(f, " ({} fields)", self.fields.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SchemaDefinition {
        SchemaDefinition::new(
            "Foo",
            vec![
                FieldExpression::new("name", TypeExpression::new("String")),
                FieldExpression::optional("age", TypeExpression::new("Int32")),
            ],
        )
    }

    #[test]
    fn nullable_fields_detected() {
        assert!(sample().contains_nullable_fields());
    }

    #[test]
    fn no_nullable_fields() {
        let schema = SchemaDefinition::new(
            "Bar",
            vec![FieldExpression::new("id", TypeExpression::new("UInt64"))],
        );
        assert!(!schema.contains_nullable_fields());
    }

    #[test]
    fn empty_schema_has_no_nullable_fields() {
        assert!(!SchemaDefinition::new("Empty", vec![]).contains_nullable_fields());
    }

    #[test]
    fn display_with_generics() {
        let mut schema = sample();
        schema.generics.push(TypeExpression::new("T"));
        assert_eq!(schema.to_string(), "schema Foo<T> (2 fields)");
    }
}
