//! Publishing facets for actions.

use crate::{Facet, FacetKind, FacetOrigin};
use std::any::Any;

/// The two independent publishing concerns of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublishingConcern {
    /// Publishing of the command that requests the action.
    Command,
    /// Publishing of the completed execution.
    Execution,
}

impl PublishingConcern {
    /// Returns the lowercase name of this concern.
    pub fn name(&self) -> &'static str {
        match self {
            PublishingConcern::Command => "command",
            PublishingConcern::Execution => "execution",
        }
    }

    /// The facet kind this concern resolves into.
    pub fn facet_kind(&self) -> FacetKind {
        match self {
            PublishingConcern::Command => FacetKind::CommandPublishing,
            PublishingConcern::Execution => FacetKind::ExecutionPublishing,
        }
    }
}

/// The resolved publishing decision for one concern of one action.
#[derive(Debug, Clone)]
pub struct PublishingFacet {
    origin: FacetOrigin,
    concern: PublishingConcern,
    enabled: bool,
}

impl PublishingFacet {
    /// Create a resolved publishing facet.
    pub fn new(concern: PublishingConcern, enabled: bool, origin: FacetOrigin) -> Self {
        Self {
            origin,
            concern,
            enabled,
        }
    }

    /// The concern this facet resolves.
    pub fn concern(&self) -> PublishingConcern {
        self.concern
    }

    /// Whether publishing is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Facet for PublishingFacet {
    fn kind(&self) -> FacetKind {
        self.concern.facet_kind()
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
