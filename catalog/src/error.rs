//! Catalog errors.

use chassis_core::FeatureSort;
use chassis_pipeline::PipelineError;
use thiserror::Error;

/// Errors raised by catalog construction and the else-fail accessors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("no {sort} '{member}' on type '{type_name}'")]
    MemberNotFound {
        type_name: String,
        member: String,
        sort: FeatureSort,
    },

    #[error("build cycle detected: {chain}")]
    BuildCycle { chain: String },

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
