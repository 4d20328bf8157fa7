use eskema_core::codestyle::to_pascal_case;
use eskema_core::types::{
    EnumDefinition, EskemaTree, Expression, FieldExpression, SchemaDefinition, TypeExpression,
};
use eskema_core::Primitive;

use super::{assemble, log_emitted, primitives_used};
use crate::{EmitOptions, LanguageEmitter};

const DEFAULT_PACKAGE: &str = "example";

/// Emits Go structs and `iota` enums.
///
/// Fields are exported (PascalCase) and tagged with their JSON name. Optional
/// fields become pointers marked `omitempty`.
pub struct GoEmitter {
    package: String,
    indent: String,
}

impl GoEmitter {
    pub fn new(options: &EmitOptions) -> Self {
        Self {
            package: options.package_or(DEFAULT_PACKAGE).to_string(),
            indent: options.indent_unit(),
        }
    }

    fn imports(&self, tree: &EskemaTree) -> String {
        let used = primitives_used(tree);
        let needs_time = [Primitive::TimeStamp, Primitive::Date, Primitive::DateTime]
            .iter()
            .any(|p| used.contains(p));
        if needs_time {
            "import \"time\"".to_string()
        } else {
            String::new()
        }
    }

    fn schema(&self, schema: &SchemaDefinition) -> String {
        let mut out = format!("type {}", schema.name());
        if !schema.generics.is_empty() {
            let params: Vec<String> = schema
                .generics
                .iter()
                .map(|g| format!("{} any", type_name(g)))
                .collect();
            out.push_str(&format!("[{}]", params.join(", ")));
        }
        out.push_str(" struct {\n");
        for field in &schema.fields {
            out.push_str(&self.field(field));
            out.push('\n');
        }
        out.push('}');
        out
    }

    fn field(&self, field: &FieldExpression) -> String {
        let json = field.serial_name().unwrap_or(field.name());
        let (pointer, omit) = if field.is_optional {
            ("*", ",omitempty")
        } else {
            ("", "")
        };
        format!(
            "{}{} {pointer}{} `json:\"{json}{omit}\"`",
            self.indent,
            to_pascal_case(field.name()),
            type_name(&field.field_type),
        )
    }

    fn enumeration(&self, def: &EnumDefinition) -> String {
        let mut out = format!("type {} int", def.name());
        if def.values.is_empty() {
            return out;
        }
        out.push_str("\n\nconst (\n");
        for (i, value) in def.values.iter().enumerate() {
            out.push_str(&self.indent);
            out.push_str(value);
            if i == 0 {
                out.push_str(&format!(" {} = iota", def.name()));
            }
            out.push('\n');
        }
        out.push(')');
        out
    }
}

impl LanguageEmitter for GoEmitter {
    fn name(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
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
        Primitive::String => "string",
        Primitive::Char => "rune",
        Primitive::UInt8 => "uint8",
        Primitive::UInt16 => "uint16",
        Primitive::UInt32 => "uint32",
        Primitive::UInt64 => "uint64",
        Primitive::Int8 => "int8",
        Primitive::Int16 => "int16",
        Primitive::Int32 => "int32",
        Primitive::Int64 => "int64",
        Primitive::Float => "float32",
        Primitive::Double => "float64",
        Primitive::TimeStamp | Primitive::Date | Primitive::DateTime => "time.Time",
        Primitive::Array => "[]",
        Primitive::Map => "map",
        Primitive::Bool => "bool",
    }
}

fn type_name(ty: &TypeExpression) -> String {
    let args: Vec<String> = ty.generics.iter().map(type_name).collect();
    match (ty.primitive(), args.as_slice()) {
        (Some(Primitive::Array), [element]) => format!("[]{element}"),
        (Some(Primitive::Map), [key, value]) => format!("map[{key}]{value}"),
        // Malformed containers fall back to an untyped element.
        (Some(Primitive::Array), _) => "[]any".to_string(),
        (Some(Primitive::Map), _) => "map[string]any".to_string(),
        (Some(p), _) => primitive_name(p).to_string(),
        (None, []) => ty.name().to_string(),
        (None, args) => format!("{}[{}]", ty.name(), args.join(", ")),
    }
}
