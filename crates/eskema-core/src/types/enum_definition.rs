use std::fmt;

use serde::{Deserialize, Serialize};

use super::identifier::Identifier;

/// A named closed set of string constants.
///
/// Values keep declaration order and are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub id: Identifier,
    pub values: Vec<String>,
}

impl EnumDefinition {
    pub fn new(name: impl Into<Identifier>, values: Vec<String>) -> Self {
        Self {
            id: name.into(),
            values,
        }
    }

    /// Returns the enum name as written.
    pub fn name(&self) -> &str {
        self.id.as_str()
    }
}

impl fmt::Display for EnumDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enum {} [{}]", self.id, self.values.join(", "))
    }
}
