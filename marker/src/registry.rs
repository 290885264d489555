//! MarkerRegistryBuilder for constructing an immutable MarkerRegistry.

use crate::{MarkerApplication, MarkerDef};
use chassis_core::{Attributes, FeatureSort, MarkerId, Value};
use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during marker registry construction.
#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("Duplicate marker name: {0}")]
    DuplicateMarkerName(String),

    #[error("Unknown refined marker: {0}")]
    UnknownRefinedMarker(String),

    #[error("Unknown meta-marker: {0}")]
    UnknownMetaMarker(String),
}

/// Immutable registry of marker definitions.
///
/// Declaration order is preserved; refinement references always point at
/// earlier declarations, so walking a refinement chain terminates.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    defs: IndexMap<MarkerId, MarkerDef>,
    names: HashMap<String, MarkerId>,
}

impl MarkerRegistry {
    pub(crate) fn new(defs: IndexMap<MarkerId, MarkerDef>, names: HashMap<String, MarkerId>) -> Self {
        Self { defs, names }
    }

    /// Get a marker definition by id.
    pub fn get(&self, id: MarkerId) -> Option<&MarkerDef> {
        self.defs.get(&id)
    }

    /// Get a marker definition by name.
    pub fn get_by_name(&self, name: &str) -> Option<&MarkerDef> {
        self.names.get(name).and_then(|id| self.defs.get(id))
    }

    /// Resolve a marker name to its id.
    pub fn id_of(&self, name: &str) -> Option<MarkerId> {
        self.names.get(name).copied()
    }

    /// Number of registered marker types.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns true if no marker types are registered.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate all marker definitions in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &MarkerDef> {
        self.defs.values()
    }

    /// Returns true if `marker` is assignable to `target`.
    ///
    /// A marker is assignable to itself and to every marker reachable over
    /// its refinement chain.
    pub fn is_assignable(&self, marker: MarkerId, target: MarkerId) -> bool {
        let mut current = Some(marker);
        while let Some(id) = current {
            if id == target {
                return true;
            }
            current = self.get(id).and_then(|def| def.refines);
        }
        false
    }
}

/// Builder for constructing an immutable MarkerRegistry.
#[derive(Debug, Default)]
pub struct MarkerRegistryBuilder {
    /// Next marker ID to allocate.
    next_id: u32,
    /// Definitions being built.
    defs: IndexMap<MarkerId, MarkerDef>,
    /// Marker name to ID mapping.
    names: HashMap<String, MarkerId>,
}

impl MarkerRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a marker type.
    pub fn declare(&mut self, name: impl Into<String>) -> MarkerBuilder<'_> {
        let name = name.into();
        let id = MarkerId::new(self.next_id);
        self.next_id += 1;

        MarkerBuilder {
            builder: self,
            id,
            name,
            targets: None,
            refines_name: None,
            defaults: Attributes::new(),
            meta_names: Vec::new(),
        }
    }

    /// Resolve a declared marker name to its id.
    pub fn id_of(&self, name: &str) -> Option<MarkerId> {
        self.names.get(name).copied()
    }

    /// Get a declared marker definition by id.
    pub fn get(&self, id: MarkerId) -> Option<&MarkerDef> {
        self.defs.get(&id)
    }

    /// Build the immutable MarkerRegistry.
    pub fn build(self) -> MarkerRegistry {
        MarkerRegistry::new(self.defs, self.names)
    }
}

/// Builder for a marker definition.
pub struct MarkerBuilder<'a> {
    builder: &'a mut MarkerRegistryBuilder,
    id: MarkerId,
    name: String,
    targets: Option<Vec<FeatureSort>>,
    refines_name: Option<String>,
    defaults: Attributes,
    meta_names: Vec<(String, Attributes)>,
}

impl<'a> MarkerBuilder<'a> {
    /// Restrict this marker to a feature sort. May be called repeatedly.
    pub fn target(mut self, sort: FeatureSort) -> Self {
        self.targets.get_or_insert_with(Vec::new).push(sort);
        self
    }

    /// Declare that this marker refines another marker by name.
    pub fn refines(mut self, name: impl Into<String>) -> Self {
        self.refines_name = Some(name.into());
        self
    }

    /// Add a default attribute value.
    pub fn default_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    /// Apply a meta-marker to this marker type, with no attribute values.
    pub fn meta(self, name: impl Into<String>) -> Self {
        self.meta_with(name, Attributes::new())
    }

    /// Apply a meta-marker to this marker type with attribute values.
    pub fn meta_with(mut self, name: impl Into<String>, values: Attributes) -> Self {
        self.meta_names.push((name.into(), values));
        self
    }

    /// Finish building this marker type.
    pub fn done(self) -> Result<MarkerId, MarkerError> {
        // Check for duplicate name
        if self.builder.names.contains_key(&self.name) {
            return Err(MarkerError::DuplicateMarkerName(self.name));
        }

        // Resolve the refined marker
        let refines = match &self.refines_name {
            Some(name) => match self.builder.names.get(name) {
                Some(&id) => Some(id),
                None => return Err(MarkerError::UnknownRefinedMarker(name.clone())),
            },
            None => None,
        };

        // Resolve meta-markers
        let mut meta = Vec::with_capacity(self.meta_names.len());
        for (name, values) in self.meta_names {
            match self.builder.names.get(&name) {
                Some(&id) => meta.push(MarkerApplication { marker: id, values }),
                None => return Err(MarkerError::UnknownMetaMarker(name)),
            }
        }

        let def = MarkerDef {
            id: self.id,
            name: self.name.clone(),
            targets: self.targets,
            refines,
            defaults: self.defaults,
            meta,
        };

        self.builder.names.insert(self.name, self.id);
        self.builder.defs.insert(self.id, def);

        Ok(self.id)
    }
}
