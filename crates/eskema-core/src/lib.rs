//! # eskema-core
//!
//! Abstract syntax tree for the Eskema schema definition language.
//!
//! The tree is produced by `eskema-dsl` and consumed read-only by the
//! language emitters and the visualizer. Nodes are plain owned data: each
//! node belongs to its parent and the [`EskemaTree`](types::EskemaTree) root
//! belongs to whoever called the parser.

pub mod codestyle;
pub mod types;

pub use types::{
    AnnotationExpression, AnnotationKind, EnumDefinition, EskemaTree, Expression, FieldExpression,
    Identifier, Primitive, SchemaDefinition, TypeExpression,
};
