use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in types recognized by the lexer.
///
/// The set is fixed: [`Primitive::from_name`] is a plain `match`, so there
/// is no table that could be modified at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Primitive {
    String,
    Char,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    TimeStamp,
    Date,
    DateTime,
    Array,
    Map,
    Bool,
}

impl Primitive {
    /// Every primitive in declaration order.
    pub const ALL: [Primitive; 18] = [
        Self::String,
        Self::Char,
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float,
        Self::Double,
        Self::TimeStamp,
        Self::Date,
        Self::DateTime,
        Self::Array,
        Self::Map,
        Self::Bool,
    ];

    /// Looks up a primitive by its exact (case-sensitive) source spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        let primitive = match name {
            "String" => Self::String,
            "Char" => Self::Char,
            "UInt8" => Self::UInt8,
            "UInt16" => Self::UInt16,
            "UInt32" => Self::UInt32,
            "UInt64" => Self::UInt64,
            "Int8" => Self::Int8,
            "Int16" => Self::Int16,
            "Int32" => Self::Int32,
            "Int64" => Self::Int64,
            "Float" => Self::Float,
            "Double" => Self::Double,
            "TimeStamp" => Self::TimeStamp,
            "Date" => Self::Date,
            "DateTime" => Self::DateTime,
            "Array" => Self::Array,
            "Map" => Self::Map,
            "Bool" => Self::Bool,
            _ => return None,
        };
        Some(primitive)
    }

    /// Returns the source spelling of this primitive.
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Char => "Char",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::TimeStamp => "TimeStamp",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Array => "Array",
            Self::Map => "Map",
            Self::Bool => "Bool",
        }
    }

    /// Returns true for the container primitives that take generic arguments.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Map)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
