//! Type-level facets: nature, mixin, prototype.

use crate::{Facet, FacetKind, FacetOrigin};
use chassis_core::TypeId;
use std::any::Any;

/// Classification of a domain type.
///
/// The value is the nature name carried by the marker (`"entity"`,
/// `"service"`, ...); the engine treats it as an opaque tag and only
/// checks for contradictions.
#[derive(Debug, Clone)]
pub struct NatureFacet {
    origin: FacetOrigin,
    nature: String,
}

impl NatureFacet {
    /// Create the facet with an explicit nature.
    pub fn new(nature: impl Into<String>, origin: FacetOrigin) -> Self {
        Self {
            origin,
            nature: nature.into(),
        }
    }

    /// The built-in fallback applied when no nature marker is reachable.
    pub fn fallback() -> Self {
        Self::new("entity", FacetOrigin::Default)
    }

    /// The nature name.
    pub fn nature(&self) -> &str {
        &self.nature
    }
}

impl Facet for NatureFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::Nature
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Marks a type as a mixin contributing one member to a target type and
/// all of its subtypes.
#[derive(Debug, Clone)]
pub struct MixinFacet {
    origin: FacetOrigin,
    target: TypeId,
    target_name: String,
}

impl MixinFacet {
    /// Create the facet with a resolved target type.
    pub fn new(target: TypeId, target_name: impl Into<String>, origin: FacetOrigin) -> Self {
        Self {
            origin,
            target,
            target_name: target_name.into(),
        }
    }

    /// The target type id.
    pub fn target(&self) -> TypeId {
        self.target
    }

    /// The target type name, for diagnostics.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }
}

impl Facet for MixinFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::Mixin
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Restricts an action to prototyping scope.
#[derive(Debug, Clone)]
pub struct PrototypeFacet {
    origin: FacetOrigin,
}

impl PrototypeFacet {
    /// Create the facet.
    pub fn new(origin: FacetOrigin) -> Self {
        Self { origin }
    }
}

impl Facet for PrototypeFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::Prototype
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
