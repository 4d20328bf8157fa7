//! # eskema-emit
//!
//! Source generators that render an [`EskemaTree`] as Kotlin, C#, Go or
//! Swift type declarations.
//!
//! Emitters only read the tree; they never see tokens or parser state, and
//! they do not check that the tree came from an error-free parse. Emission is
//! lossy: annotations and generic constraints do not survive every target, so
//! feeding generated code back through the parser is not a round trip.
//!
//! # Example
//!
//! ```
//! use eskema_core::types::{EskemaTree, FieldExpression, SchemaDefinition, TypeExpression};
//! use eskema_emit::{emitter_for, EmitOptions};
//!
//! let schema = SchemaDefinition::new(
//!     "Contact",
//!     vec![FieldExpression::new("name", TypeExpression::new("String"))],
//! );
//! let tree = EskemaTree::new(vec![schema.into()]);
//!
//! let kotlin = emitter_for("kotlin", &EmitOptions::default()).unwrap();
//! let code = kotlin.emit(&tree);
//! assert!(code.contains("data class Contact("));
//! ```

pub mod languages;

use eskema_core::types::EskemaTree;

use languages::{CSharpEmitter, GoEmitter, KotlinEmitter, SwiftEmitter};

/// Renders a tree into one target language.
pub trait LanguageEmitter {
    /// Canonical language name, as accepted by [`emitter_for`].
    fn name(&self) -> &'static str;

    /// File extension for generated sources, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Renders every declaration in the tree, in source order.
    fn emit(&self, tree: &EskemaTree) -> String;
}

/// Settings shared by every emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Kotlin package, C# namespace or Go package. Each language has its own
    /// default when unset; Swift ignores it.
    pub package: Option<String>,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            package: None,
            indent: 4,
        }
    }
}

impl EmitOptions {
    pub(crate) fn package_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.package.as_deref().unwrap_or(default)
    }

    pub(crate) fn indent_unit(&self) -> String {
        " ".repeat(self.indent)
    }
}

const LANGUAGES: &[&str] = &["kotlin", "csharp", "go", "swift"];

/// Canonical names of every supported language.
pub fn supported_languages() -> &'static [&'static str] {
    LANGUAGES
}

/// Looks up an emitter by name. Matching ignores case and accepts common
/// aliases (`kt`, `cs`, `c#`, `golang`).
pub fn emitter_for(name: &str, options: &EmitOptions) -> Option<Box<dyn LanguageEmitter>> {
    let emitter: Box<dyn LanguageEmitter> = match name.to_ascii_lowercase().as_str() {
        "kotlin" | "kt" => Box::new(KotlinEmitter::new(options)),
        "csharp" | "cs" | "c#" => Box::new(CSharpEmitter::new(options)),
        "go" | "golang" => Box::new(GoEmitter::new(options)),
        "swift" => Box::new(SwiftEmitter::new(options)),
        _ => return None,
    };
    Some(emitter)
}
