//! Marker synthesis over the meta-marker graph.
//!
//! An element's markers are not limited to the applications written
//! directly on it: a marker type can itself carry markers, and those carry
//! markers in turn. Synthesis flattens this graph into the set of instances
//! assignable to one requested marker type, tagged with the depth at which
//! each was found. Depth 0 is the element itself; every hop into a marker
//! type's own markers adds one.

use crate::{MarkerApplication, MarkerRegistry};
use chassis_core::{Attributes, MarkerId, Value};
use std::collections::{HashSet, VecDeque};

/// Upper bound on meta-marker traversal depth.
pub const MAX_SYNTHESIS_DEPTH: u32 = 16;

/// One synthesized marker instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesized {
    /// The marker type of this instance.
    pub marker: MarkerId,
    /// Name of the marker type, for diagnostics.
    pub name: String,
    /// Definition defaults overlaid with application values.
    pub values: Attributes,
    /// Distance from the element: 0 for direct applications.
    pub depth: u32,
}

/// Result of synthesizing one marker type over one element.
///
/// Instances are ordered by ascending depth; within one depth, by
/// application order. The nearest instance wins attribute lookups.
#[derive(Debug, Clone, Default)]
pub struct Synthesis {
    instances: Vec<Synthesized>,
}

impl Synthesis {
    /// A synthesis with no instances.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if at least one instance was synthesized.
    pub fn is_present(&self) -> bool {
        !self.instances.is_empty()
    }

    /// The instance nearest to the element, if any.
    pub fn nearest(&self) -> Option<&Synthesized> {
        self.instances.first()
    }

    /// The effective value of an attribute: the value carried by the
    /// nearest instance that has it.
    pub fn effective(&self, attr: &str) -> Option<&Value> {
        self.instances.iter().find_map(|i| i.values.get(attr))
    }

    /// All synthesized instances in depth order.
    pub fn all(&self) -> &[Synthesized] {
        &self.instances
    }

    /// Number of synthesized instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns true if nothing was synthesized.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl MarkerRegistry {
    /// Synthesize all instances of `target` reachable from `direct`.
    ///
    /// Walks breadth-first: the direct applications at depth 0, then the
    /// markers carried by their marker types at depth 1, and so on. Every
    /// visited application whose marker type is assignable to `target`
    /// yields an instance whose values are the definition defaults overlaid
    /// with the application's own values. A marker type is visited at most
    /// once, at its shallowest depth.
    pub fn synthesize(&self, direct: &[MarkerApplication], target: MarkerId) -> Synthesis {
        let mut instances = Vec::new();
        let mut visited: HashSet<MarkerId> = HashSet::new();
        let mut queue: VecDeque<(&MarkerApplication, u32)> =
            direct.iter().map(|app| (app, 0)).collect();

        while let Some((app, depth)) = queue.pop_front() {
            if depth > MAX_SYNTHESIS_DEPTH {
                continue;
            }
            if !visited.insert(app.marker) {
                continue;
            }
            let Some(def) = self.get(app.marker) else {
                continue;
            };

            if self.is_assignable(app.marker, target) {
                let mut values: Attributes = def.defaults.clone();
                for (k, v) in &app.values {
                    values.insert(k.clone(), v.clone());
                }
                instances.push(Synthesized {
                    marker: app.marker,
                    name: def.name.clone(),
                    values,
                    depth,
                });
            }

            for meta in &def.meta {
                queue.push_back((meta, depth + 1));
            }
        }

        Synthesis { instances }
    }

    /// Synthesize by marker name. Unknown names yield an empty synthesis.
    pub fn synthesize_named(&self, direct: &[MarkerApplication], target: &str) -> Synthesis {
        match self.id_of(target) {
            Some(id) => self.synthesize(direct, id),
            None => Synthesis::empty(),
        }
    }
}
