//! CHASSIS Facets
//!
//! A facet is one resolved behavior bound to one feature under one
//! [`FacetKind`]. Facets are produced by the factory pipeline and stored in
//! a per-feature [`FacetRegistry`] that holds at most one facet per kind:
//! adding a second facet of a kind replaces the first, it never accumulates.
//!
//! The registry itself is policy-free. Which source wins (explicit marker,
//! companion method, configuration, built-in default) is decided entirely
//! by the order in which the factories run and the checks they make before
//! adding; each facet records the [`FacetOrigin`] it came from.

mod constraint;
mod kind;
mod nature;
mod order;
mod publishing;
mod registry;
mod semantics;
mod support;
mod usability;

pub use constraint::*;
pub use kind::*;
pub use nature::*;
pub use order::*;
pub use publishing::*;
pub use registry::*;
pub use semantics::*;
pub use support::*;
pub use usability::*;
