//! The element a factory is looking at.

use chassis_core::{FeatureSort, Identifier};
use chassis_marker::MarkerApplication;
use chassis_model::{FieldDecl, MethodDecl, ParamDecl, TypeDecl};

/// View of the declared member backing a feature site.
#[derive(Debug, Clone, Copy)]
pub enum MemberView<'a> {
    /// A declared field (property or collection).
    Field(&'a FieldDecl),
    /// A declared method (action).
    Method(&'a MethodDecl),
}

/// One element under introspection: the type itself, one of its members,
/// or one parameter of an action.
///
/// Carries the owning declaration so factories can reach sibling methods
/// (companions) and type-level markers.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSite<'a> {
    owner: &'a TypeDecl,
    sort: FeatureSort,
    member: Option<MemberView<'a>>,
    param: Option<(usize, &'a ParamDecl)>,
}

impl<'a> FeatureSite<'a> {
    /// Site for the type itself.
    pub fn object(owner: &'a TypeDecl) -> Self {
        Self {
            owner,
            sort: FeatureSort::Object,
            member: None,
            param: None,
        }
    }

    /// Site for a declared field; the sort follows the field type.
    pub fn field(owner: &'a TypeDecl, field: &'a FieldDecl) -> Self {
        let sort = if field.ty.is_collection() {
            FeatureSort::Collection
        } else {
            FeatureSort::Property
        };
        Self {
            owner,
            sort,
            member: Some(MemberView::Field(field)),
            param: None,
        }
    }

    /// Site for a declared action method.
    pub fn method(owner: &'a TypeDecl, method: &'a MethodDecl) -> Self {
        Self {
            owner,
            sort: FeatureSort::Action,
            member: Some(MemberView::Method(method)),
            param: None,
        }
    }

    /// Site for one parameter of an action method.
    pub fn parameter(
        owner: &'a TypeDecl,
        method: &'a MethodDecl,
        index: usize,
        param: &'a ParamDecl,
    ) -> Self {
        Self {
            owner,
            sort: FeatureSort::Parameter,
            member: Some(MemberView::Method(method)),
            param: Some((index, param)),
        }
    }

    /// The owning type declaration.
    pub fn owner(&self) -> &'a TypeDecl {
        self.owner
    }

    /// The sort of the feature at this site.
    pub fn sort(&self) -> FeatureSort {
        self.sort
    }

    /// Name of the element at this site.
    pub fn name(&self) -> &'a str {
        if let Some((_, param)) = self.param {
            return &param.name;
        }
        match self.member {
            Some(MemberView::Field(field)) => &field.name,
            Some(MemberView::Method(method)) => &method.name,
            None => &self.owner.name,
        }
    }

    /// The element's own marker applications.
    pub fn markers(&self) -> &'a [MarkerApplication] {
        if let Some((_, param)) = self.param {
            return &param.markers;
        }
        match self.member {
            Some(MemberView::Field(field)) => &field.markers,
            Some(MemberView::Method(method)) => &method.markers,
            None => &self.owner.markers,
        }
    }

    /// The backing field, if this is a property or collection site.
    pub fn as_field(&self) -> Option<&'a FieldDecl> {
        match self.member {
            Some(MemberView::Field(field)) => Some(field),
            _ => None,
        }
    }

    /// The backing method: the action for action and parameter sites.
    pub fn as_method(&self) -> Option<&'a MethodDecl> {
        match self.member {
            Some(MemberView::Method(method)) => Some(method),
            _ => None,
        }
    }

    /// The parameter view, if this is a parameter site.
    pub fn as_param(&self) -> Option<(usize, &'a ParamDecl)> {
        self.param
    }

    /// Diagnostic identifier for this site.
    pub fn identifier(&self) -> Identifier {
        match (&self.member, self.param) {
            (_, Some((_, param))) => {
                let action = self.as_method().map(|m| m.name.as_str()).unwrap_or("");
                Identifier::of_member(&self.owner.name, format!("{}({})", action, param.name))
            }
            (Some(MemberView::Field(field)), None) => {
                Identifier::of_member(&self.owner.name, &field.name)
            }
            (Some(MemberView::Method(method)), None) => {
                Identifier::of_member(&self.owner.name, &method.name)
            }
            (None, None) => Identifier::of_type(&self.owner.name),
        }
    }
}
