//! One emitter per target language.

mod csharp;
mod golang;
mod kotlin;
mod swift;

pub use csharp::CSharpEmitter;
pub use golang::GoEmitter;
pub use kotlin::KotlinEmitter;
pub use swift::SwiftEmitter;

use std::collections::BTreeSet;

use eskema_core::types::{EskemaTree, TypeExpression};
use eskema_core::Primitive;

/// Joins the file preamble and the rendered declarations, separating every
/// section with a blank line.
fn assemble(preamble: Vec<String>, declarations: Vec<String>) -> String {
    let sections: Vec<String> = preamble
        .into_iter()
        .chain(declarations)
        .filter(|s| !s.is_empty())
        .collect();
    if sections.is_empty() {
        return String::new();
    }
    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

/// Collects every primitive referenced anywhere in the tree's field types.
fn primitives_used(tree: &EskemaTree) -> BTreeSet<Primitive> {
    fn walk(ty: &TypeExpression, found: &mut BTreeSet<Primitive>) {
        if let Some(p) = ty.primitive() {
            found.insert(p);
        }
        for generic in &ty.generics {
            walk(generic, found);
        }
    }

    let mut found = BTreeSet::new();
    for schema in tree.schemas() {
        for field in &schema.fields {
            walk(&field.field_type, &mut found);
        }
    }
    found
}

fn log_emitted(language: &str, tree: &EskemaTree) {
    tracing::debug!(
        language,
        schemas = tree.schemas().count(),
        enums = tree.enums().count(),
        "emitted declarations"
    );
}
