//! Domain type declarations.

use chassis_core::{SupportBody, TypeId};
use chassis_marker::MarkerApplication;
use std::fmt;

/// Reference to a value type in a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// No value. Only valid as an action return type.
    Void,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// UTF-8 string.
    String,
    /// Reference to a domain type by name.
    Object(String),
    /// Ordered collection of the element type.
    ListOf(Box<TypeRef>),
}

impl TypeRef {
    /// Shorthand for a list of the given element type.
    pub fn list_of(element: TypeRef) -> Self {
        TypeRef::ListOf(Box::new(element))
    }

    /// Returns true for multi-valued types.
    pub fn is_collection(&self) -> bool {
        matches!(self, TypeRef::ListOf(_))
    }

    /// Returns true for the void type.
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    /// The element type of a collection, if this is one.
    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::ListOf(element) => Some(element),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => write!(f, "Void"),
            TypeRef::Bool => write!(f, "Bool"),
            TypeRef::Int => write!(f, "Int"),
            TypeRef::Float => write!(f, "Float"),
            TypeRef::String => write!(f, "String"),
            TypeRef::Object(name) => write!(f, "{}", name),
            TypeRef::ListOf(element) => write!(f, "List<{}>", element),
        }
    }
}

/// A declared parameter of a method.
#[derive(Debug, Clone)]
pub struct ParamDecl {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Markers applied to this parameter.
    pub markers: Vec<MarkerApplication>,
}

/// A declared field of a domain type.
///
/// Fields with a collection type resolve to collection features; all
/// others resolve to properties.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Markers applied to this field.
    pub markers: Vec<MarkerApplication>,
}

/// A declared method of a domain type.
///
/// Methods whose names match a support convention are companion
/// candidates; all others resolve to actions.
#[derive(Clone)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// Declared parameters in order.
    pub params: Vec<ParamDecl>,
    /// Declared return type.
    pub returns: TypeRef,
    /// Markers applied to this method.
    pub markers: Vec<MarkerApplication>,
    /// Host-supplied body, if any.
    pub body: Option<SupportBody>,
}

impl fmt::Debug for MethodDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDecl")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("returns", &self.returns)
            .field("markers", &self.markers)
            .field("body", &self.body.as_ref().map(|_| "<body>"))
            .finish()
    }
}

/// A declared domain type.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    /// Unique identifier.
    pub id: TypeId,
    /// Type name.
    pub name: String,
    /// Supertype, if any.
    pub supertype: Option<TypeId>,
    /// Directly implemented interfaces.
    pub interfaces: Vec<TypeId>,
    /// Whether this type is abstract (cannot be instantiated directly).
    pub is_abstract: bool,
    /// Whether this type is an interface.
    pub is_interface: bool,
    /// Markers applied to this type.
    pub markers: Vec<MarkerApplication>,
    /// Declared fields in declaration order.
    pub fields: Vec<FieldDecl>,
    /// Declared methods in declaration order.
    pub methods: Vec<MethodDecl>,
}

impl TypeDecl {
    /// Get a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get the first method declaration with the given name.
    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Iterate all method declarations with the given name.
    ///
    /// Yields more than one element only for overloaded declarations,
    /// which the catalog builder rejects with a violation.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDecl> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// Check if this type declares a field with the given name.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Check if this type declares a method with the given name.
    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }
}
