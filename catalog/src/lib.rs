//! CHASSIS Feature Catalogs
//!
//! The catalog builder assembles, per domain type, the merged set of
//! declared, inherited, and mixin-contributed features, each carrying the
//! facets the pipeline resolved for it. Catalogs are built lazily by the
//! [`Metamodel`] loader, memoized for the process lifetime, and immutable
//! once published.

mod builder;
mod error;
mod feature;
mod metamodel;
mod spec;

pub use error::*;
pub use feature::*;
pub use metamodel::*;
pub use spec::*;
