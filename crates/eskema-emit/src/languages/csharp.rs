use eskema_core::codestyle::to_pascal_case;
use eskema_core::types::{
    EnumDefinition, EskemaTree, Expression, FieldExpression, SchemaDefinition, TypeExpression,
};
use eskema_core::Primitive;

use super::{assemble, log_emitted, primitives_used};
use crate::{EmitOptions, LanguageEmitter};

const DEFAULT_NAMESPACE: &str = "Example";

/// Emits C# positional `record` and `enum` declarations.
///
/// Record properties are PascalCase. Whenever that changes the wire name, or
/// a serial-name annotation overrides it, the parameter carries a
/// `[property: JsonPropertyName("...")]` attribute.
pub struct CSharpEmitter {
    namespace: String,
    indent: String,
}

impl CSharpEmitter {
    pub fn new(options: &EmitOptions) -> Self {
        Self {
            namespace: options.package_or(DEFAULT_NAMESPACE).to_string(),
            indent: options.indent_unit(),
        }
    }

    fn usings(&self, tree: &EskemaTree) -> String {
        let used = primitives_used(tree);
        let mut usings = Vec::new();
        if [Primitive::TimeStamp, Primitive::Date, Primitive::DateTime]
            .iter()
            .any(|p| used.contains(p))
        {
            usings.push("using System;");
        }
        if used.contains(&Primitive::Array) || used.contains(&Primitive::Map) {
            usings.push("using System.Collections.Generic;");
        }
        if tree
            .schemas()
            .flat_map(|s| &s.fields)
            .any(|f| json_name(f).is_some())
        {
            usings.push("using System.Text.Json.Serialization;");
        }
        usings.join("\n")
    }

    fn schema(&self, schema: &SchemaDefinition) -> String {
        let header = format!(
            "public record {}{}",
            schema.name(),
            type_parameters(&schema.generics)
        );
        if schema.fields.is_empty() {
            return format!("{header}();");
        }

        let params: Vec<String> = schema.fields.iter().map(|f| self.parameter(f)).collect();
        format!("{header}(\n{}\n);", params.join(",\n"))
    }

    fn parameter(&self, field: &FieldExpression) -> String {
        let attribute = json_name(field)
            .map(|name| format!("[property: JsonPropertyName(\"{name}\")] "))
            .unwrap_or_default();
        format!(
            "{}{attribute}{}{} {}",
            self.indent,
            type_name(&field.field_type),
            if field.is_optional { "?" } else { "" },
            to_pascal_case(field.name())
        )
    }

    fn enumeration(&self, def: &EnumDefinition) -> String {
        let mut out = format!("public enum {} {{\n", def.name());
        if !def.values.is_empty() {
            let values: Vec<String> = def
                .values
                .iter()
                .map(|v| format!("{}{v}", self.indent))
                .collect();
            out.push_str(&values.join(",\n"));
            out.push('\n');
        }
        out.push('}');
        out
    }
}

impl LanguageEmitter for CSharpEmitter {
    fn name(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
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
            vec![self.usings(tree), format!("namespace {};", self.namespace)],
            declarations,
        )
    }
}

/// The JSON name to pin on a property, if it differs from the C# name.
fn json_name(field: &FieldExpression) -> Option<&str> {
    match field.serial_name() {
        Some(name) => Some(name),
        None if to_pascal_case(field.name()) != field.name() => Some(field.name()),
        None => None,
    }
}

fn primitive_name(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "string",
        Primitive::Char => "char",
        Primitive::UInt8 => "byte",
        Primitive::UInt16 => "ushort",
        Primitive::UInt32 => "uint",
        Primitive::UInt64 => "ulong",
        Primitive::Int8 => "sbyte",
        Primitive::Int16 => "short",
        Primitive::Int32 => "int",
        Primitive::Int64 => "long",
        Primitive::Float => "float",
        Primitive::Double => "double",
        Primitive::TimeStamp => "DateTimeOffset",
        Primitive::Date => "DateOnly",
        Primitive::DateTime => "DateTime",
        Primitive::Array => "List",
        Primitive::Map => "Dictionary",
        Primitive::Bool => "bool",
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

#[cfg(test)]
mod tests {
    use eskema_core::types::{AnnotationExpression, AnnotationKind};

    use super::*;

    fn emit(tree: &EskemaTree) -> String {
        CSharpEmitter::new(&EmitOptions::default()).emit(tree)
    }

    #[test]
    fn record_with_generics() {
        let mut schema = SchemaDefinition::new(
            "Page",
            vec![
                FieldExpression::new(
                    "Items",
                    TypeExpression::with_generics("Array", vec![TypeExpression::new("T")]),
                ),
                FieldExpression::optional("Total", TypeExpression::new("Int32")),
            ],
        );
        schema.generics.push(TypeExpression::new("T"));

        let expected = "\
using System.Collections.Generic;

namespace Example;

public record Page<T>(
    List<T> Items,
    int? Total
);
";
        assert_eq!(emit(&EskemaTree::new(vec![schema.into()])), expected);
    }

    #[test]
    fn renamed_properties_keep_their_json_name() {
        let mut id = FieldExpression::new("Id", TypeExpression::new("UInt64"));
        id.annotations
            .push(AnnotationExpression::new(AnnotationKind::SerialName, "user_id"));
        let schema = SchemaDefinition::new(
            "User",
            vec![
                id,
                FieldExpression::new("display_name", TypeExpression::new("String")),
                FieldExpression::new("joined", TypeExpression::new("DateTime")),
            ],
        );

        let expected = "\
using System;
using System.Text.Json.Serialization;

namespace Example;

public record User(
    [property: JsonPropertyName(\"user_id\")] ulong Id,
    [property: JsonPropertyName(\"display_name\")] string DisplayName,
    [property: JsonPropertyName(\"joined\")] DateTime Joined
);
";
        assert_eq!(emit(&EskemaTree::new(vec![schema.into()])), expected);
    }

    #[test]
    fn enum_and_empty_record() {
        let tree = EskemaTree::new(vec![
            EnumDefinition::new("State", vec!["ON".into(), "OFF".into()]).into(),
            SchemaDefinition::new("Marker", Vec::new()).into(),
        ]);
        let options = EmitOptions {
            package: Some("Acme.Models".into()),
            indent: 4,
        };
        let expected = "\
namespace Acme.Models;

public enum State {
    ON,
    OFF
}

public record Marker();
";
        assert_eq!(CSharpEmitter::new(&options).emit(&tree), expected);
    }

    #[test]
    fn map_becomes_dictionary() {
        let ty = TypeExpression::with_generics(
            "Map",
            vec![TypeExpression::new("String"), TypeExpression::new("Int8")],
        );
        assert_eq!(type_name(&ty), "Dictionary<string, sbyte>");
    }
}
