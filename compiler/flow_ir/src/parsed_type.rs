//! Type names as written in source.
//!
//! The language has no type inference: a `ParsedType` is only ever compared
//! against the type derived from a concrete runtime value.

use std::fmt;

/// A declared type: one of the builtin types or a class name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParsedType {
    Int,
    Double,
    Boolean,
    Char,
    String,
    Unit,
    /// A user-declared class.
    Class(String),
}

impl ParsedType {
    /// Map a type name to its builtin variant, falling back to a class name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Int" => ParsedType::Int,
            "Double" => ParsedType::Double,
            "Boolean" => ParsedType::Boolean,
            "Char" => ParsedType::Char,
            "String" => ParsedType::String,
            "Unit" => ParsedType::Unit,
            other => ParsedType::Class(other.to_string()),
        }
    }

    /// User-facing name of the type.
    pub fn name(&self) -> &str {
        match self {
            ParsedType::Int => "Int",
            ParsedType::Double => "Double",
            ParsedType::Boolean => "Boolean",
            ParsedType::Char => "Char",
            ParsedType::String => "String",
            ParsedType::Unit => "Unit",
            ParsedType::Class(name) => name,
        }
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, ParsedType::Unit)
    }
}

impl fmt::Display for ParsedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
