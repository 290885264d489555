//! Declaration inputs accepted by the model builder.
//!
//! Defs carry marker applications by name; the type builder resolves the
//! names against the marker registry when the declaration is finished.

use crate::TypeRef;
use chassis_core::{Attributes, SupportBody, Value};
use std::fmt;

/// A field declaration under construction.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub(crate) name: String,
    pub(crate) ty: TypeRef,
    pub(crate) markers: Vec<(String, Attributes)>,
}

impl FieldDef {
    /// Declare a field with a name and type.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            markers: Vec::new(),
        }
    }

    /// Apply a marker by name, with no attribute values.
    pub fn marker(self, name: impl Into<String>) -> Self {
        self.marker_with(name, Attributes::new())
    }

    /// Apply a marker by name with attribute values.
    pub fn marker_with(mut self, name: impl Into<String>, values: Attributes) -> Self {
        self.markers.push((name.into(), values));
        self
    }
}

/// A parameter declaration under construction.
#[derive(Debug, Clone)]
pub struct ParamDef {
    pub(crate) name: String,
    pub(crate) ty: TypeRef,
    pub(crate) markers: Vec<(String, Attributes)>,
}

impl ParamDef {
    /// Declare a parameter with a name and type.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            markers: Vec::new(),
        }
    }

    /// Apply a marker by name, with no attribute values.
    pub fn marker(self, name: impl Into<String>) -> Self {
        self.marker_with(name, Attributes::new())
    }

    /// Apply a marker by name with attribute values.
    pub fn marker_with(mut self, name: impl Into<String>, values: Attributes) -> Self {
        self.markers.push((name.into(), values));
        self
    }
}

/// A method declaration under construction.
#[derive(Clone)]
pub struct MethodDef {
    pub(crate) name: String,
    pub(crate) params: Vec<ParamDef>,
    pub(crate) returns: TypeRef,
    pub(crate) markers: Vec<(String, Attributes)>,
    pub(crate) body: Option<SupportBody>,
}

impl MethodDef {
    /// Declare a method. The return type defaults to void.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: TypeRef::Void,
            markers: Vec::new(),
            body: None,
        }
    }

    /// Add a parameter with a name and type.
    pub fn param(self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.param_def(ParamDef::new(name, ty))
    }

    /// Add a fully specified parameter.
    pub fn param_def(mut self, param: ParamDef) -> Self {
        self.params.push(param);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.returns = ty;
        self
    }

    /// Apply a marker by name, with no attribute values.
    pub fn marker(self, name: impl Into<String>) -> Self {
        self.marker_with(name, Attributes::new())
    }

    /// Apply a marker by name with attribute values.
    pub fn marker_with(mut self, name: impl Into<String>, values: Attributes) -> Self {
        self.markers.push((name.into(), values));
        self
    }

    /// Attach a host-supplied body.
    pub fn body(
        mut self,
        body: impl Fn(&Attributes, &[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.body = Some(std::sync::Arc::new(body));
        self
    }
}

impl fmt::Debug for MethodDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDef")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("returns", &self.returns)
            .field("markers", &self.markers)
            .field("body", &self.body.as_ref().map(|_| "<body>"))
            .finish()
    }
}
