use serde::{Deserialize, Serialize};

use super::enum_definition::EnumDefinition;
use super::expression::Expression;
use super::schema_definition::SchemaDefinition;

/// Root of a parsed schema file: one expression per top-level declaration,
/// in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EskemaTree {
    pub expressions: Vec<Expression>,
}

impl EskemaTree {
    pub fn new(expressions: Vec<Expression>) -> Self {
        Self { expressions }
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.expressions.iter()
    }

    /// Iterates over the schema declarations only.
    pub fn schemas(&self) -> impl Iterator<Item = &SchemaDefinition> {
        self.expressions.iter().filter_map(Expression::as_schema)
    }

    /// Iterates over the enum declarations only.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDefinition> {
        self.expressions.iter().filter_map(Expression::as_enum)
    }
}

impl<'a> IntoIterator for &'a EskemaTree {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.iter()
    }
}
