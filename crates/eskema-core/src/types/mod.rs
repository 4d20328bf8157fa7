mod annotation;
mod enum_definition;
mod expression;
mod field_expression;
mod identifier;
mod primitive;
mod schema_definition;
mod tree;
mod type_expression;

pub use annotation::{AnnotationExpression, AnnotationKind};
pub use enum_definition::EnumDefinition;
pub use expression::Expression;
pub use field_expression::FieldExpression;
pub use identifier::Identifier;
pub use primitive::Primitive;
pub use schema_definition::SchemaDefinition;
pub use tree::EskemaTree;
pub use type_expression::TypeExpression;
