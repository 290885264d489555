//! CHASSIS Facet Factory Pipeline
//!
//! Facet resolution runs every feature through a fixed, ordered set of
//! [`FacetFactory`] implementations. Each factory inspects the synthesized
//! markers of the element, its companion methods, and the resolved
//! configuration, and may add facets to the feature's registry.
//!
//! Precedence is encoded in the order of the factories and in the checks
//! they make before adding, never in the registry: a factory that defers to
//! configuration runs after the one that reads explicit markers, and asks
//! `contains` before overwriting.

mod consumed;
mod error;
mod factories;
mod factory;
mod site;
pub mod support;
pub mod vocab;

pub use consumed::*;
pub use error::*;
pub use factories::*;
pub use factory::*;
pub use site::*;
