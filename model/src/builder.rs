//! DomainModelBuilder for constructing an immutable DomainModel.

use crate::{
    DomainModel, FieldDecl, FieldDef, MethodDecl, MethodDef, ParamDecl, SubtypeIndex, TypeDecl,
};
use chassis_core::{Attributes, FeatureSort, TypeId};
use chassis_marker::{MarkerApplication, MarkerRegistryBuilder};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors that can occur during model construction.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Unknown supertype: {0}")]
    UnknownSupertype(String),

    #[error("Supertype is an interface: {0}")]
    SupertypeIsInterface(String),

    #[error("Unknown interface: {0}")]
    UnknownInterface(String),

    #[error("Not an interface: {0}")]
    NotAnInterface(String),

    #[error("Unknown marker '{marker}' on {element}")]
    UnknownMarker { marker: String, element: String },

    #[error("Marker '{marker}' is not applicable to {sort} {element}")]
    MarkerNotApplicable {
        marker: String,
        sort: FeatureSort,
        element: String,
    },

    #[error("Duplicate field '{field}' on type {type_name}")]
    DuplicateField { type_name: String, field: String },

    #[error("Duplicate parameter '{param}' on method {method}")]
    DuplicateParam { method: String, param: String },
}

/// Builder for constructing an immutable DomainModel.
///
/// Marker types must be declared before any type declaration applies them;
/// supertypes and interfaces must be declared before they are referenced.
/// Forward references are impossible, so the finished hierarchy is
/// cycle-free by construction.
#[derive(Debug, Default)]
pub struct DomainModelBuilder {
    /// Next type ID to allocate.
    next_type_id: u32,
    /// Marker types being declared.
    markers: MarkerRegistryBuilder,
    /// Types being built.
    types: IndexMap<TypeId, TypeDecl>,
    /// Type name to ID mapping.
    type_names: FxHashMap<String, TypeId>,
}

impl DomainModelBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the marker registry builder to declare marker types.
    pub fn markers(&mut self) -> &mut MarkerRegistryBuilder {
        &mut self.markers
    }

    /// Add a domain type declaration.
    pub fn add_type(&mut self, name: impl Into<String>) -> TypeDeclBuilder<'_> {
        self.add_decl(name, false)
    }

    /// Add an interface declaration.
    pub fn add_interface(&mut self, name: impl Into<String>) -> TypeDeclBuilder<'_> {
        self.add_decl(name, true)
    }

    fn add_decl(&mut self, name: impl Into<String>, is_interface: bool) -> TypeDeclBuilder<'_> {
        let name = name.into();
        let id = TypeId::new(self.next_type_id);
        self.next_type_id += 1;

        TypeDeclBuilder {
            builder: self,
            id,
            name,
            supertype_name: None,
            interface_names: Vec::new(),
            is_abstract: false,
            is_interface,
            markers: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Resolve a declared type name to its id.
    pub fn get_type_id(&self, name: &str) -> Option<TypeId> {
        self.type_names.get(name).copied()
    }

    /// Build the immutable DomainModel.
    pub fn build(self) -> DomainModel {
        let subtypes = SubtypeIndex::build(&self.types);
        DomainModel::new(self.types, self.type_names, self.markers.build(), subtypes)
    }

    /// Resolve named marker applications for an element of the given sort.
    fn resolve_markers(
        &self,
        named: Vec<(String, Attributes)>,
        sort: FeatureSort,
        element: &str,
    ) -> Result<Vec<MarkerApplication>, ModelError> {
        let mut applications = Vec::with_capacity(named.len());
        for (name, values) in named {
            let id = match self.markers.id_of(&name) {
                Some(id) => id,
                None => {
                    return Err(ModelError::UnknownMarker {
                        marker: name,
                        element: element.to_string(),
                    })
                }
            };
            // id came from the builder, so the definition exists.
            if let Some(def) = self.markers.get(id) {
                if !def.applicable_to(sort) {
                    return Err(ModelError::MarkerNotApplicable {
                        marker: name,
                        sort,
                        element: element.to_string(),
                    });
                }
            }
            applications.push(MarkerApplication { marker: id, values });
        }
        Ok(applications)
    }
}

/// Builder for a type declaration.
pub struct TypeDeclBuilder<'a> {
    builder: &'a mut DomainModelBuilder,
    id: TypeId,
    name: String,
    supertype_name: Option<String>,
    interface_names: Vec<String>,
    is_abstract: bool,
    is_interface: bool,
    markers: Vec<(String, Attributes)>,
    fields: Vec<FieldDef>,
    methods: Vec<MethodDef>,
}

impl<'a> TypeDeclBuilder<'a> {
    /// Set the supertype by name.
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.supertype_name = Some(name.into());
        self
    }

    /// Add a directly implemented interface by name.
    pub fn implements(mut self, name: impl Into<String>) -> Self {
        self.interface_names.push(name.into());
        self
    }

    /// Mark as abstract.
    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
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

    /// Add a field declaration.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method declaration.
    pub fn method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Finish building this type.
    pub fn done(self) -> Result<TypeId, ModelError> {
        // Check for duplicate name
        if self.builder.type_names.contains_key(&self.name) {
            return Err(ModelError::DuplicateTypeName(self.name));
        }

        // Resolve the supertype
        let supertype = match &self.supertype_name {
            Some(name) => match self.builder.type_names.get(name) {
                Some(&id) => {
                    let decl = &self.builder.types[&id];
                    if decl.is_interface {
                        return Err(ModelError::SupertypeIsInterface(name.clone()));
                    }
                    Some(id)
                }
                None => return Err(ModelError::UnknownSupertype(name.clone())),
            },
            None => None,
        };

        // Resolve interfaces
        let mut interfaces = Vec::with_capacity(self.interface_names.len());
        for name in &self.interface_names {
            match self.builder.type_names.get(name) {
                Some(&id) => {
                    let decl = &self.builder.types[&id];
                    if !decl.is_interface {
                        return Err(ModelError::NotAnInterface(name.clone()));
                    }
                    interfaces.push(id);
                }
                None => return Err(ModelError::UnknownInterface(name.clone())),
            }
        }

        // Resolve type markers
        let markers =
            self.builder
                .resolve_markers(self.markers, FeatureSort::Object, &self.name)?;

        // Resolve fields
        let mut fields: Vec<FieldDecl> = Vec::with_capacity(self.fields.len());
        for def in self.fields {
            if fields.iter().any(|f| f.name == def.name) {
                return Err(ModelError::DuplicateField {
                    type_name: self.name,
                    field: def.name,
                });
            }
            let sort = if def.ty.is_collection() {
                FeatureSort::Collection
            } else {
                FeatureSort::Property
            };
            let element = format!("{}#{}", self.name, def.name);
            let markers = self.builder.resolve_markers(def.markers, sort, &element)?;
            fields.push(FieldDecl {
                name: def.name,
                ty: def.ty,
                markers,
            });
        }

        // Resolve methods. Duplicate method names are allowed here; the
        // catalog builder reports them as overload violations.
        let mut methods: Vec<MethodDecl> = Vec::with_capacity(self.methods.len());
        for def in self.methods {
            let element = format!("{}#{}", self.name, def.name);
            let mut params: Vec<ParamDecl> = Vec::with_capacity(def.params.len());
            for param in def.params {
                if params.iter().any(|p| p.name == param.name) {
                    return Err(ModelError::DuplicateParam {
                        method: element,
                        param: param.name,
                    });
                }
                let param_element = format!("{}({})", element, param.name);
                let markers = self.builder.resolve_markers(
                    param.markers,
                    FeatureSort::Parameter,
                    &param_element,
                )?;
                params.push(ParamDecl {
                    name: param.name,
                    ty: param.ty,
                    markers,
                });
            }
            let markers =
                self.builder
                    .resolve_markers(def.markers, FeatureSort::Action, &element)?;
            methods.push(MethodDecl {
                name: def.name,
                params,
                returns: def.returns,
                markers,
                body: def.body,
            });
        }

        let decl = TypeDecl {
            id: self.id,
            name: self.name.clone(),
            supertype,
            interfaces,
            is_abstract: self.is_abstract,
            is_interface: self.is_interface,
            markers,
            fields,
            methods,
        };

        self.builder.type_names.insert(self.name, self.id);
        self.builder.types.insert(self.id, decl);

        Ok(self.id)
    }
}
