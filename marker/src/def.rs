//! Marker definitions and applications.

use chassis_core::{Attributes, FeatureSort, MarkerId, Value};

/// An application of a marker to a model element.
///
/// Carries the attribute values supplied at the application site. Values
/// not supplied here fall back to the defaults of the marker definition.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerApplication {
    /// The applied marker type.
    pub marker: MarkerId,
    /// Attribute values supplied at the application site.
    pub values: Attributes,
}

impl MarkerApplication {
    /// Apply a marker with no attribute values.
    pub fn new(marker: MarkerId) -> Self {
        Self {
            marker,
            values: Attributes::new(),
        }
    }

    /// Supply an attribute value at the application site.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Get an attribute value supplied at the application site.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// Definition of a marker type.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDef {
    /// Unique id of this marker type.
    pub id: MarkerId,
    /// Name of this marker type.
    pub name: String,
    /// Feature sorts this marker may be applied to. `None` means any.
    pub targets: Option<Vec<FeatureSort>>,
    /// Marker type this one refines, if any.
    ///
    /// Instances of a refining marker are assignable wherever the refined
    /// marker is requested.
    pub refines: Option<MarkerId>,
    /// Default attribute values.
    pub defaults: Attributes,
    /// Markers applied to this marker type itself.
    pub meta: Vec<MarkerApplication>,
}

impl MarkerDef {
    /// Returns true if this marker may be applied to the given sort.
    pub fn applicable_to(&self, sort: FeatureSort) -> bool {
        match &self.targets {
            Some(targets) => targets.contains(&sort),
            None => true,
        }
    }
}
