//! CHASSIS Core Types
//!
//! This crate provides the foundational types used throughout the CHASSIS
//! metamodel:
//! - Identity types (TypeId, MarkerId, Identifier)
//! - Feature classification (FeatureSort)
//! - Value types (the Value enum and the Attributes map)
//! - Support method bodies supplied by the host application
//! - Resolved process configuration (MetamodelConfig)
//! - Structural violations collected during resolution

mod config;
mod id;
mod sort;
mod support;
mod template;
mod value;
mod violation;

pub use config::*;
pub use id::*;
pub use sort::*;
pub use support::*;
pub use template::*;
pub use value::*;
pub use violation::*;
