//! Pipeline errors.

use chassis_core::Identifier;
use thiserror::Error;

/// Errors that abort the build of a type's catalog.
///
/// Structural problems are collected as violations and do not abort;
/// only conflicts where resolution would have to guess fail fast.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot resolve {concern} publishing for '{identifier}': the configured policy needs action semantics but none are declared")]
    ConfigurationConflict {
        identifier: Identifier,
        concern: &'static str,
    },
}
