use eskema_core::types::{
    AnnotationExpression, EnumDefinition, EskemaTree, Expression, FieldExpression,
    SchemaDefinition, TypeExpression,
};

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";
const PIPE: &str = "│   ";
const GAP: &str = "    ";

/// Renders a tree as an indented box-drawing listing.
///
/// ```text
/// ├── schema: Box
/// │   ├── type: 'T'
/// │   └── field: value [Nullable]
/// │       └── type: 'T'
/// └── enum: Color
///     ├── RED
///     └── BLUE
/// ```
///
/// The listing is for humans only and cannot be parsed back.
pub fn visualize(tree: &EskemaTree) -> String {
    let mut out = String::new();
    let count = tree.len();
    for (i, expr) in tree.iter().enumerate() {
        let last = i + 1 == count;
        match expr {
            Expression::Schema(schema) => write_schema(&mut out, schema, "", last),
            Expression::Enum(def) => write_enum(&mut out, def, "", last),
        }
    }
    out
}

fn line(out: &mut String, prefix: &str, last: bool, label: &str) {
    out.push_str(prefix);
    out.push_str(if last { LAST_BRANCH } else { BRANCH });
    out.push(' ');
    out.push_str(label);
    out.push('\n');
}

fn child_prefix(prefix: &str, last: bool) -> String {
    format!("{prefix}{}", if last { GAP } else { PIPE })
}

fn write_schema(out: &mut String, schema: &SchemaDefinition, prefix: &str, last: bool) {
    line(out, prefix, last, &format!("schema: {}", schema.name()));

    let prefix = child_prefix(prefix, last);
    let count = schema.generics.len() + schema.fields.len();
    let mut index = 0;
    for generic in &schema.generics {
        index += 1;
        write_type(out, generic, &prefix, index == count);
    }
    for field in &schema.fields {
        index += 1;
        write_field(out, field, &prefix, index == count);
    }
}

fn write_field(out: &mut String, field: &FieldExpression, prefix: &str, last: bool) {
    let presence = if field.is_optional {
        "[Nullable]"
    } else {
        "[Required]"
    };
    line(out, prefix, last, &format!("field: {} {presence}", field.name()));

    let prefix = child_prefix(prefix, last);
    for annotation in &field.annotations {
        write_annotation(out, annotation, &prefix);
    }
    write_type(out, &field.field_type, &prefix, true);
}

fn write_annotation(out: &mut String, annotation: &AnnotationExpression, prefix: &str) {
    // The field's type always follows, so an annotation is never the last child.
    line(
        out,
        prefix,
        false,
        &format!("annotation: {} = {}", annotation.kind, annotation.value),
    );
}

fn write_type(out: &mut String, ty: &TypeExpression, prefix: &str, last: bool) {
    line(out, prefix, last, &format!("type: '{}'", ty.name()));

    let prefix = child_prefix(prefix, last);
    let count = ty.generics.len();
    for (i, generic) in ty.generics.iter().enumerate() {
        write_type(out, generic, &prefix, i + 1 == count);
    }
}

fn write_enum(out: &mut String, def: &EnumDefinition, prefix: &str, last: bool) {
    line(out, prefix, last, &format!("enum: {}", def.name()));

    let prefix = child_prefix(prefix, last);
    let count = def.values.len();
    for (i, value) in def.values.iter().enumerate() {
        line(out, &prefix, i + 1 == count, value);
    }
}
