//! Visibility and usability facets.

use crate::{Facet, FacetKind, FacetOrigin};
use chassis_core::{Attributes, SupportBody, Value};
use std::any::Any;
use std::fmt;

/// Hides a member, either unconditionally (marker) or when a companion
/// method says so for the instance under inspection.
pub struct HiddenFacet {
    origin: FacetOrigin,
    condition: Option<SupportBody>,
}

impl HiddenFacet {
    /// Hidden unconditionally.
    pub fn always(origin: FacetOrigin) -> Self {
        Self {
            origin,
            condition: None,
        }
    }

    /// Hidden when the bound companion body returns true.
    pub fn when(condition: SupportBody) -> Self {
        Self {
            origin: FacetOrigin::CompanionMethod,
            condition: Some(condition),
        }
    }

    /// Evaluate visibility against an instance.
    pub fn is_hidden(&self, subject: &Attributes) -> bool {
        match &self.condition {
            None => true,
            Some(body) => body(subject, &[]).as_bool().unwrap_or(false),
        }
    }
}

impl Facet for HiddenFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::Hidden
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for HiddenFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HiddenFacet")
            .field("origin", &self.origin)
            .field("conditional", &self.condition.is_some())
            .finish()
    }
}

/// Disables a member, with a reason surfaced to the caller.
pub struct DisabledFacet {
    origin: FacetOrigin,
    reason: String,
    condition: Option<SupportBody>,
}

impl DisabledFacet {
    /// Disabled unconditionally with a fixed reason.
    pub fn always(reason: impl Into<String>, origin: FacetOrigin) -> Self {
        Self {
            origin,
            reason: reason.into(),
            condition: None,
        }
    }

    /// Disabled when the bound companion body says so.
    pub fn when(condition: SupportBody) -> Self {
        Self {
            origin: FacetOrigin::CompanionMethod,
            reason: "disabled".to_string(),
            condition: Some(condition),
        }
    }

    /// Evaluate usability against an instance.
    ///
    /// Returns the reason the member is disabled, or `None` when enabled.
    /// A companion body disables by returning a reason string or `true`;
    /// `null` and `false` leave the member enabled.
    pub fn disabled_reason(&self, subject: &Attributes) -> Option<String> {
        match &self.condition {
            None => Some(self.reason.clone()),
            Some(body) => match body(subject, &[]) {
                Value::Null | Value::Bool(false) => None,
                Value::Bool(true) => Some(self.reason.clone()),
                Value::String(reason) => Some(reason),
                other => Some(other.to_string()),
            },
        }
    }
}

impl Facet for DisabledFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::Disabled
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for DisabledFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisabledFacet")
            .field("origin", &self.origin)
            .field("reason", &self.reason)
            .field("conditional", &self.condition.is_some())
            .finish()
    }
}
