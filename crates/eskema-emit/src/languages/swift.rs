use eskema_core::codestyle::to_camel_case;
use eskema_core::types::{
    EnumDefinition, EskemaTree, Expression, FieldExpression, SchemaDefinition, TypeExpression,
};
use eskema_core::Primitive;

use super::{assemble, log_emitted, primitives_used};
use crate::{EmitOptions, LanguageEmitter};

const CONFORMANCES: &str = "Decodable, Equatable";

/// Emits Swift `struct` and string-backed `enum` declarations.
///
/// Annotations are dropped: the generated structs decode by property name.
pub struct SwiftEmitter {
    indent: String,
}

impl SwiftEmitter {
    pub fn new(options: &EmitOptions) -> Self {
        Self {
            indent: options.indent_unit(),
        }
    }

    fn imports(&self, tree: &EskemaTree) -> String {
        let used = primitives_used(tree);
        let needs_foundation = [Primitive::TimeStamp, Primitive::Date, Primitive::DateTime]
            .iter()
            .any(|p| used.contains(p));
        if needs_foundation {
            "import Foundation".to_string()
        } else {
            String::new()
        }
    }

    fn schema(&self, schema: &SchemaDefinition) -> String {
        let mut out = format!("public struct {}", schema.name());
        if !schema.generics.is_empty() {
            let params: Vec<String> = schema
                .generics
                .iter()
                .map(|g| format!("{}: Decodable & Equatable", type_name(g)))
                .collect();
            out.push_str(&format!("<{}>", params.join(", ")));
        }
        out.push_str(&format!(": {CONFORMANCES} {{\n"));

        for field in &schema.fields {
            out.push_str(&format!("{}let {}\n", self.indent, declaration(field)));
        }

        if schema.contains_nullable_fields() {
            out.push('\n');
            out.push_str(&self.nullable_init(schema));
        }

        out.push('}');
        out
    }

    /// A memberwise initializer that lets callers omit optional fields.
    fn nullable_init(&self, schema: &SchemaDefinition) -> String {
        let params: Vec<String> = schema
            .fields
            .iter()
            .map(|f| {
                if f.is_optional {
                    format!("{} = nil", declaration(f))
                } else {
                    declaration(f)
                }
            })
            .collect();

        let mut out = format!("{}public init({}) {{\n", self.indent, params.join(", "));
        for field in &schema.fields {
            out.push_str(&format!(
                "{0}{0}self.{1} = {1}\n",
                self.indent,
                field.name()
            ));
        }
        out.push_str(&format!("{}}}\n", self.indent));
        out
    }

    fn enumeration(&self, def: &EnumDefinition) -> String {
        let mut out = format!("public enum {}: String, {CONFORMANCES} {{\n", def.name());
        for value in &def.values {
            out.push_str(&format!(
                "{}case {} = \"{value}\"\n",
                self.indent,
                to_camel_case(value)
            ));
        }
        out.push('}');
        out
    }
}

impl LanguageEmitter for SwiftEmitter {
    fn name(&self) -> &'static str {
        "swift"
    }

    fn file_extension(&self) -> &'static str {
        "swift"
    }

    fn emit(&self, tree: &EskemaTree) -> String {
        let declarations = tree
            .iter()
            .map(|expr| match expr {
                Expression::Schema(schema) => self.schema(schema),
                Expression::Enum(def) => self.enumeration(def),
            })
            .collect();
        log_emitted(self.name(), tree);
        assemble(vec![self.imports(tree)], declarations)
    }
}

fn declaration(field: &FieldExpression) -> String {
    format!(
        "{}: {}{}",
        field.name(),
        type_name(&field.field_type),
        if field.is_optional { "?" } else { "" }
    )
}

fn primitive_name(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "String",
        Primitive::Char => "Character",
        Primitive::UInt8 => "UInt8",
        Primitive::UInt16 => "UInt16",
        Primitive::UInt32 => "UInt32",
        Primitive::UInt64 => "UInt64",
        Primitive::Int8 => "Int8",
        Primitive::Int16 => "Int16",
        Primitive::Int32 => "Int32",
        Primitive::Int64 => "Int64",
        Primitive::Float => "Float",
        Primitive::Double => "Double",
        Primitive::TimeStamp | Primitive::Date | Primitive::DateTime => "Date",
        Primitive::Array => "Array",
        Primitive::Map => "Dictionary",
        Primitive::Bool => "Bool",
    }
}

fn type_name(ty: &TypeExpression) -> String {
    let args: Vec<String> = ty.generics.iter().map(type_name).collect();
    match (ty.primitive(), args.as_slice()) {
        (Some(Primitive::Array), [element]) => format!("[{element}]"),
        (Some(Primitive::Map), [key, value]) => format!("[{key} : {value}]"),
        (Some(p), []) => primitive_name(p).to_string(),
        (Some(p), args) => format!("{}<{}>", primitive_name(p), args.join(", ")),
        (None, []) => ty.name().to_string(),
        (None, args) => format!("{}<{}>", ty.name(), args.join(", ")),
    }
}
