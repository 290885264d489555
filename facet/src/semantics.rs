//! Action side-effect semantics.

use crate::{Facet, FacetKind, FacetOrigin};
use std::any::Any;

/// Declared side-effect classification of an action.
///
/// There is deliberately no default: an action without an explicit
/// semantics marker has *unestablished* semantics, which policies that
/// depend on semantics must treat as unresolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionSemantics {
    /// Query-only; no side effects.
    Safe,
    /// Side effects, but repeat invocations are harmless.
    Idempotent,
    /// Side effects on every invocation.
    NonIdempotent,
}

impl ActionSemantics {
    /// Parse a marker attribute value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "safe" => Some(ActionSemantics::Safe),
            "idempotent" => Some(ActionSemantics::Idempotent),
            "non_idempotent" => Some(ActionSemantics::NonIdempotent),
            _ => None,
        }
    }

    /// Returns the snake_case name of this semantics.
    pub fn name(&self) -> &'static str {
        match self {
            ActionSemantics::Safe => "safe",
            ActionSemantics::Idempotent => "idempotent",
            ActionSemantics::NonIdempotent => "non_idempotent",
        }
    }

    /// Returns true for query-only semantics.
    pub fn is_safe(&self) -> bool {
        matches!(self, ActionSemantics::Safe)
    }
}

/// Facet carrying the declared semantics of an action.
#[derive(Debug, Clone)]
pub struct ActionSemanticsFacet {
    origin: FacetOrigin,
    semantics: ActionSemantics,
}

impl ActionSemanticsFacet {
    /// Create the facet with declared semantics.
    pub fn new(semantics: ActionSemantics, origin: FacetOrigin) -> Self {
        Self { origin, semantics }
    }

    /// The declared semantics.
    pub fn semantics(&self) -> ActionSemantics {
        self.semantics
    }
}

impl Facet for ActionSemanticsFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::ActionSemantics
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
