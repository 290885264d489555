//! CHASSIS Domain Model
//!
//! The immutable structural description of an application's domain types:
//! type declarations with their fields, methods, parameters and marker
//! applications, plus the marker registry the applications refer to.
//!
//! A model is assembled once through [`DomainModelBuilder`] and never
//! changes afterwards. Resolution reads it concurrently without locking.

mod builder;
mod def;
mod model;
mod types;

pub use builder::*;
pub use def::*;
pub use model::*;
pub use types::*;
