//! The per-feature facet store.

use crate::{FacetKind, FacetOrigin};
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A resolved behavior bound to one feature under one kind.
pub trait Facet: fmt::Debug + Send + Sync + 'static {
    /// The kind this facet is bound under.
    fn kind(&self) -> FacetKind;

    /// The source this facet was resolved from.
    fn origin(&self) -> FacetOrigin;

    /// Downcast support for typed lookups.
    fn as_any(&self) -> &dyn Any;
}

/// Per-feature store holding at most one facet per kind.
///
/// Adding a facet of a kind already present replaces the existing facet.
/// Insertion order is preserved for deterministic debug output.
#[derive(Debug, Clone, Default)]
pub struct FacetRegistry {
    facets: IndexMap<FacetKind, Arc<dyn Facet>>,
}

impl FacetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a facet, replacing any existing facet of the same kind.
    ///
    /// Returns the replaced facet, if there was one.
    pub fn add(&mut self, facet: Arc<dyn Facet>) -> Option<Arc<dyn Facet>> {
        self.facets.insert(facet.kind(), facet)
    }

    /// Get the facet of a kind, if present.
    pub fn get(&self, kind: FacetKind) -> Option<&Arc<dyn Facet>> {
        self.facets.get(&kind)
    }

    /// Get the facet of a kind downcast to its concrete type.
    pub fn get_as<T: Facet>(&self, kind: FacetKind) -> Option<&T> {
        self.facets.get(&kind)?.as_any().downcast_ref::<T>()
    }

    /// Returns true if a facet of the given kind is present.
    pub fn contains(&self, kind: FacetKind) -> bool {
        self.facets.contains_key(&kind)
    }

    /// Number of facets.
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Returns true if no facets are present.
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Iterate facets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Facet>> {
        self.facets.values()
    }
}
