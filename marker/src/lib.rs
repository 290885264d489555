//! CHASSIS Marker Types
//!
//! Markers are the declarative annotations of the metamodel. A marker type
//! is defined once in a [`MarkerRegistry`] with its defaults, its applicable
//! targets, the marker it refines, and the markers applied to the marker
//! type itself (meta-markers). Model elements then carry
//! [`MarkerApplication`]s.
//!
//! The synthesizer walks the meta-marker graph breadth-first and collapses
//! everything reachable into a [`Synthesis`]: the depth-ordered set of
//! instances assignable to a requested marker type, where the instance
//! nearest to the element wins attribute lookups.

mod def;
mod registry;
mod synth;

pub use def::*;
pub use registry::*;
pub use synth::*;
