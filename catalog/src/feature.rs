//! Resolved features.

use chassis_core::{Attributes, FeatureSort, Value};
use chassis_facet::{
    ChoicesFacet, DefaultsFacet, DisabledFacet, Facet, FacetKind, FacetRegistry, HiddenFacet,
    MaxLengthFacet, MemberOrderFacet, OrderKey, PatternFacet, ValidationFacet,
};
use chassis_model::TypeRef;
use std::sync::Arc;

/// Where a catalog member came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureProvenance {
    /// Declared on the type itself.
    Declared,
    /// Carried forward from a supertype or interface.
    Inherited {
        /// Name of the type that declared the member.
        from: String,
    },
    /// Contributed by a mixin.
    MixedIn {
        /// Name of the contributing mixin type.
        mixin: String,
    },
}

/// One resolved model element: a property, collection, action, or action
/// parameter, with its facet registry.
///
/// Features are immutable once their owning catalog is published; the
/// evaluation methods read facets against a caller-supplied instance
/// attribute map.
#[derive(Debug, Clone)]
pub struct Feature {
    name: String,
    sort: FeatureSort,
    /// Value type: the field type for properties and collections, the
    /// return type for actions, the declared type for parameters.
    value_ty: TypeRef,
    provenance: FeatureProvenance,
    facets: FacetRegistry,
    params: Vec<Feature>,
}

impl Feature {
    /// Create a resolved feature.
    pub(crate) fn new(
        name: impl Into<String>,
        sort: FeatureSort,
        value_ty: TypeRef,
        facets: FacetRegistry,
        params: Vec<Feature>,
    ) -> Self {
        Self {
            name: name.into(),
            sort,
            value_ty,
            provenance: FeatureProvenance::Declared,
            facets,
            params,
        }
    }

    pub(crate) fn with_provenance(mut self, provenance: FeatureProvenance) -> Self {
        self.provenance = provenance;
        self
    }

    pub(crate) fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Member id of this feature in its catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The feature sort.
    pub fn sort(&self) -> FeatureSort {
        self.sort
    }

    /// The value type of this feature.
    pub fn value_ty(&self) -> &TypeRef {
        &self.value_ty
    }

    /// Where this feature came from.
    pub fn provenance(&self) -> &FeatureProvenance {
        &self.provenance
    }

    /// The facet registry of this feature.
    pub fn facets(&self) -> &FacetRegistry {
        &self.facets
    }

    /// Get the facet of a kind, if present.
    pub fn facet(&self, kind: FacetKind) -> Option<&Arc<dyn Facet>> {
        self.facets.get(kind)
    }

    /// Get the facet of a kind downcast to its concrete type.
    pub fn facet_as<T: Facet>(&self, kind: FacetKind) -> Option<&T> {
        self.facets.get_as::<T>(kind)
    }

    /// Returns true if a facet of the kind is present.
    pub fn has_facet(&self, kind: FacetKind) -> bool {
        self.facets.contains(kind)
    }

    /// Parameter features of an action, in declaration order.
    pub fn params(&self) -> &[Feature] {
        &self.params
    }

    /// Get a parameter feature by position.
    pub fn param(&self, index: usize) -> Option<&Feature> {
        self.params.get(index)
    }

    /// The resolved ordering key; the default when no order facet exists.
    pub fn order_key(&self) -> OrderKey {
        self.facet_as::<MemberOrderFacet>(FacetKind::MemberOrder)
            .map(|f| f.key().clone())
            .unwrap_or_default()
    }

    /// Returns true if this action is restricted to prototyping scope.
    pub fn is_prototype(&self) -> bool {
        self.has_facet(FacetKind::Prototype)
    }

    /// Evaluate visibility against an instance.
    pub fn is_hidden(&self, subject: &Attributes) -> bool {
        self.facet_as::<HiddenFacet>(FacetKind::Hidden)
            .is_some_and(|f| f.is_hidden(subject))
    }

    /// Evaluate usability against an instance; `None` means enabled.
    pub fn disabled_reason(&self, subject: &Attributes) -> Option<String> {
        self.facet_as::<DisabledFacet>(FacetKind::Disabled)
            .and_then(|f| f.disabled_reason(subject))
    }

    /// Evaluate the bound default provider, if any.
    pub fn default_value(&self, subject: &Attributes) -> Option<Value> {
        self.facet_as::<DefaultsFacet>(FacetKind::Defaults)
            .map(|f| f.default_value(subject))
    }

    /// Evaluate the bound choices provider; empty when none is bound.
    pub fn choices(&self, subject: &Attributes) -> Vec<Value> {
        self.facet_as::<ChoicesFacet>(FacetKind::Choices)
            .map(|f| f.choices(subject))
            .unwrap_or_default()
    }

    /// Validate a proposed value against every bound constraint.
    ///
    /// Declarative constraints (max length, match pattern) run first, the
    /// bound validator body last; the first failure message wins.
    pub fn validate(&self, subject: &Attributes, proposed: &Value) -> Option<String> {
        if let Some(text) = proposed.as_str() {
            if let Some(facet) = self.facet_as::<MaxLengthFacet>(FacetKind::MaxLength) {
                if !facet.accepts(text) {
                    return Some(format!("exceeds maximum length of {}", facet.max()));
                }
            }
            if let Some(facet) = self.facet_as::<PatternFacet>(FacetKind::Pattern) {
                if !facet.matches(text) {
                    return Some(format!("does not match pattern '{}'", facet.pattern()));
                }
            }
        }
        self.facet_as::<ValidationFacet>(FacetKind::Validation)
            .and_then(|f| f.validate(subject, proposed))
    }

    /// Returns true if a prototype facet is absent or the scope allows it.
    pub(crate) fn in_scope(&self, prototyping: bool) -> bool {
        prototyping || !self.is_prototype()
    }
}
