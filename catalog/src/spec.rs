//! The per-type feature catalog.

use crate::{CatalogError, Feature};
use chassis_core::{FeatureSort, TypeId, Violations};
use chassis_facet::{FacetKind, FacetRegistry, NatureFacet};
use indexmap::IndexMap;

/// Which actions an enumeration should see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionScope {
    /// Production scope: prototype-only actions are excluded.
    Production,
    /// Prototyping scope: everything.
    Prototyping,
}

/// Whether mixed-in members participate in an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixedInPolicy {
    /// Include mixin-contributed members.
    Include,
    /// Only declared and inherited members.
    Exclude,
}

/// The published catalog of one domain type.
///
/// Members are keyed by id, unique after merge, in resolved catalog
/// order. The spec is immutable once published by the loader; structural
/// violations found while building are recorded here and surfaced by the
/// validation pass.
#[derive(Debug)]
pub struct ObjectSpec {
    id: TypeId,
    name: String,
    facets: FacetRegistry,
    members: IndexMap<String, Feature>,
    violations: Violations,
}

impl ObjectSpec {
    pub(crate) fn new(
        id: TypeId,
        name: impl Into<String>,
        facets: FacetRegistry,
        members: IndexMap<String, Feature>,
        violations: Violations,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            facets,
            members,
            violations,
        }
    }

    /// The type id.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Object-level facets (nature, mixin, ...).
    pub fn facets(&self) -> &FacetRegistry {
        &self.facets
    }

    /// The resolved nature of this type.
    pub fn nature(&self) -> Option<&str> {
        self.facets
            .get_as::<NatureFacet>(FacetKind::Nature)
            .map(|f| f.nature())
    }

    /// All members in catalog order.
    pub fn members(&self) -> impl Iterator<Item = &Feature> {
        self.members.values()
    }

    /// Get any member by id.
    pub fn member(&self, id: &str) -> Option<&Feature> {
        self.members.get(id)
    }

    /// Get a property by id.
    pub fn property(&self, id: &str) -> Option<&Feature> {
        self.member_of_sort(id, FeatureSort::Property)
    }

    /// Get a collection by id.
    pub fn collection(&self, id: &str) -> Option<&Feature> {
        self.member_of_sort(id, FeatureSort::Collection)
    }

    /// Get an action by id.
    pub fn action(&self, id: &str) -> Option<&Feature> {
        self.member_of_sort(id, FeatureSort::Action)
    }

    /// Get a property by id, failing when absent.
    pub fn require_property(&self, id: &str) -> Result<&Feature, CatalogError> {
        self.require(id, FeatureSort::Property)
    }

    /// Get a collection by id, failing when absent.
    pub fn require_collection(&self, id: &str) -> Result<&Feature, CatalogError> {
        self.require(id, FeatureSort::Collection)
    }

    /// Get an action by id, failing when absent.
    pub fn require_action(&self, id: &str) -> Result<&Feature, CatalogError> {
        self.require(id, FeatureSort::Action)
    }

    /// Enumerate actions under a scope and mixed-in policy, in catalog
    /// order.
    pub fn actions(
        &self,
        scope: ActionScope,
        mixed_in: MixedInPolicy,
    ) -> impl Iterator<Item = &Feature> {
        let prototyping = scope == ActionScope::Prototyping;
        self.members.values().filter(move |f| {
            f.sort() == FeatureSort::Action
                && f.in_scope(prototyping)
                && (mixed_in == MixedInPolicy::Include
                    || !matches!(f.provenance(), crate::FeatureProvenance::MixedIn { .. }))
        })
    }

    /// Structural violations recorded while building this catalog.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    fn member_of_sort(&self, id: &str, sort: FeatureSort) -> Option<&Feature> {
        self.members.get(id).filter(|f| f.sort() == sort)
    }

    fn require(&self, id: &str, sort: FeatureSort) -> Result<&Feature, CatalogError> {
        self.member_of_sort(id, sort)
            .ok_or_else(|| CatalogError::MemberNotFound {
                type_name: self.name.clone(),
                member: id.to_string(),
                sort,
            })
    }
}
