use std::fmt;

use serde::{Deserialize, Serialize};

/// The tag of a field annotation.
///
/// Only the serialized-name override has meaning to the emitters; every other
/// annotation name is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    /// `@name("...")` or `@json("...")`: overrides the serialized field name.
    SerialName,
    /// Any other annotation, keyed by the name used in the source.
    Custom(String),
}

impl AnnotationKind {
    /// Classifies an annotation by the name written after `@`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "name" | "json" => Self::SerialName,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Returns a short name for display.
    pub fn as_str(&self) -> &str {
        match self {
            Self::SerialName => "name",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field-level annotation: a tag plus a single string argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationExpression {
    pub kind: AnnotationKind,
    pub value: String,
}

impl AnnotationExpression {
    pub fn new(kind: AnnotationKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for AnnotationExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}({})", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_name_aliases() {
        assert_eq!(AnnotationKind::from_name("name"), AnnotationKind::SerialName);
        assert_eq!(AnnotationKind::from_name("json"), AnnotationKind::SerialName);
    }

    #[test]
    fn unknown_names_are_custom() {
        assert_eq!(
            AnnotationKind::from_name("deprecated"),
            AnnotationKind::Custom("deprecated".into())
        );
    }

    #[test]
    fn display() {
        let a = AnnotationExpression::new(AnnotationKind::SerialName, "user_name");
        assert_eq!(a.to_string(), "@name(user_name)");
    }
}
