use eskema_core::types::{
    EnumDefinition, EskemaTree, Expression, FieldExpression, SchemaDefinition, TypeExpression,
};
use eskema_core::Primitive;

use super::{assemble, log_emitted, primitives_used};
use crate::{EmitOptions, LanguageEmitter};

const DEFAULT_PACKAGE: &str = "com.example";

/// Emits Kotlin `data class` and `enum class` declarations.
///
/// Serial-name annotations become kotlinx.serialization `@SerialName`
/// annotations on the constructor property.
pub struct KotlinEmitter {
    package: String,
    indent: String,
}

impl KotlinEmitter {
    pub fn new(options: &EmitOptions) -> Self {
        Self {
            package: options.package_or(DEFAULT_PACKAGE).to_string(),
            indent: options.indent_unit(),
        }
    }

    fn imports(&self, tree: &EskemaTree) -> String {
        let mut imports: Vec<&str> = primitives_used(tree)
            .into_iter()
            .filter_map(|p| match p {
                Primitive::TimeStamp => Some("java.time.Instant"),
                Primitive::Date => Some("java.time.LocalDate"),
                Primitive::DateTime => Some("java.time.LocalDateTime"),
                _ => None,
            })
            .collect();
        let serial_names = tree
            .schemas()
            .flat_map(|s| &s.fields)
            .any(|f| f.serial_name().is_some());
        if serial_names {
            imports.push("kotlinx.serialization.SerialName");
        }
        imports.sort_unstable();
        imports
            .iter()
            .map(|i| format!("import {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn schema(&self, schema: &SchemaDefinition) -> String {
        let mut out = String::new();
        // Kotlin data classes need at least one constructor property.
        if schema.fields.is_empty() {
            out.push_str("class ");
        } else {
            out.push_str("data class ");
        }
        out.push_str(schema.name());
        out.push_str(&type_parameters(&schema.generics));

        if schema.fields.is_empty() {
            return out;
        }

        out.push_str("(\n");
        let fields: Vec<String> = schema.fields.iter().map(|f| self.field(f)).collect();
        out.push_str(&fields.join(",\n"));
        out.push_str("\n)");
        out
    }

    fn field(&self, field: &FieldExpression) -> String {
        let mut out = String::new();
        if let Some(name) = field.serial_name() {
            out.push_str(&format!("{}@SerialName(\"{name}\")\n", self.indent));
        }
        out.push_str(&format!(
            "{}val {}: {}{}",
            self.indent,
            field.name(),
            type_name(&field.field_type),
            if field.is_optional { "?" } else { "" }
        ));
        out
    }

    fn enumeration(&self, def: &EnumDefinition) -> String {
        let values: Vec<String> = def
            .values
            .iter()
            .map(|v| format!("{}{v}", self.indent))
            .collect();
        let mut out = format!("enum class {} {{\n", def.name());
        if !values.is_empty() {
            out.push_str(&values.join(",\n"));
            out.push('\n');
        }
        out.push('}');
        out
    }
}

impl LanguageEmitter for KotlinEmitter {
    fn name(&self) -> &'static str {
        "kotlin"
    }

    fn file_extension(&self) -> &'static str {
        "kt"
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
        assemble(
            vec![format!("package {}", self.package), self.imports(tree)],
            declarations,
        )
    }
}

fn primitive_name(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "String",
        Primitive::Char => "Char",
        Primitive::UInt8 => "UByte",
        Primitive::UInt16 => "UShort",
        Primitive::UInt32 => "UInt",
        Primitive::UInt64 => "ULong",
        Primitive::Int8 => "Byte",
        Primitive::Int16 => "Short",
        Primitive::Int32 => "Int",
        Primitive::Int64 => "Long",
        Primitive::Float => "Float",
        Primitive::Double => "Double",
        Primitive::TimeStamp => "Instant",
        Primitive::Date => "LocalDate",
        Primitive::DateTime => "LocalDateTime",
        Primitive::Array => "List",
        Primitive::Map => "Map",
        Primitive::Bool => "Boolean",
    }
}

fn type_name(ty: &TypeExpression) -> String {
    let base = ty.primitive().map_or(ty.name(), |p| primitive_name(p));
    format!("{base}{}", type_parameters(&ty.generics))
}

fn type_parameters(generics: &[TypeExpression]) -> String {
    if generics.is_empty() {
        return String::new();
    }
    let names: Vec<String> = generics.iter().map(type_name).collect();
    format!("<{}>", names.join(", "))
}
