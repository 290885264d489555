//! Identity types for CHASSIS.
//!
//! Domain types and marker types are interned into dense numeric ids when a
//! model is built. Resolution code passes ids around; names only appear at
//! the declaration surface and in diagnostics.

use std::fmt;

/// Unique identifier for a domain type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a new type ID from a raw value.
    pub fn new(id: u32) -> Self {
        TypeId(id)
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Unique identifier for a marker type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(u32);

impl MarkerId {
    /// Create a new marker ID from a raw value.
    pub fn new(id: u32) -> Self {
        MarkerId(id)
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

/// Human-readable identifier for a model element, used in diagnostics.
///
/// Identifies either a type (`Customer`) or a member of a type
/// (`Customer#firstName`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// Name of the owning type.
    pub type_name: String,
    /// Member name, or `None` when the identifier names the type itself.
    pub member: Option<String>,
}

impl Identifier {
    /// Identifier for a type.
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Identifier {
            type_name: type_name.into(),
            member: None,
        }
    }

    /// Identifier for a member of a type.
    pub fn of_member(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Identifier {
            type_name: type_name.into(),
            member: Some(member.into()),
        }
    }

    /// Returns true if this identifier names a member rather than a type.
    pub fn is_member(&self) -> bool {
        self.member.is_some()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(m) => write!(f, "{}#{}", self.type_name, m),
            None => write!(f, "{}", self.type_name),
        }
    }
}
