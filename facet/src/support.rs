//! Facets bound from companion method bodies.

use crate::{Facet, FacetKind, FacetOrigin};
use chassis_core::{Attributes, SupportBody, Value};
use std::any::Any;
use std::fmt;

/// Provides the default value of a property or parameter.
pub struct DefaultsFacet {
    origin: FacetOrigin,
    provider: SupportBody,
}

impl DefaultsFacet {
    /// Bind a default provider body.
    pub fn new(provider: SupportBody, origin: FacetOrigin) -> Self {
        Self { origin, provider }
    }

    /// Evaluate the default for an instance.
    pub fn default_value(&self, subject: &Attributes) -> Value {
        (self.provider)(subject, &[])
    }
}

impl Facet for DefaultsFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::Defaults
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for DefaultsFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultsFacet")
            .field("origin", &self.origin)
            .finish()
    }
}

/// Provides the choices offered for a property or parameter.
pub struct ChoicesFacet {
    origin: FacetOrigin,
    provider: SupportBody,
}

impl ChoicesFacet {
    /// Bind a choices provider body.
    pub fn new(provider: SupportBody, origin: FacetOrigin) -> Self {
        Self { origin, provider }
    }

    /// Evaluate the choices for an instance.
    ///
    /// A body returning a list yields its elements; a single value yields
    /// one choice; `null` yields none.
    pub fn choices(&self, subject: &Attributes) -> Vec<Value> {
        match (self.provider)(subject, &[]) {
            Value::List(items) => items,
            Value::Null => Vec::new(),
            single => vec![single],
        }
    }
}

impl Facet for ChoicesFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::Choices
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for ChoicesFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoicesFacet")
            .field("origin", &self.origin)
            .finish()
    }
}

/// Validates a proposed value for a property or action argument.
pub struct ValidationFacet {
    origin: FacetOrigin,
    validator: SupportBody,
}

impl ValidationFacet {
    /// Bind a validator body.
    pub fn new(validator: SupportBody, origin: FacetOrigin) -> Self {
        Self { origin, validator }
    }

    /// Validate a proposed value against an instance.
    ///
    /// Returns the failure message, or `None` when the value is accepted.
    /// A body accepts by returning `null` or `true`; it rejects with a
    /// message string or a bare `false`.
    pub fn validate(&self, subject: &Attributes, proposed: &Value) -> Option<String> {
        match (self.validator)(subject, std::slice::from_ref(proposed)) {
            Value::Null | Value::Bool(true) => None,
            Value::Bool(false) => Some("invalid".to_string()),
            Value::String(message) => Some(message),
            other => Some(other.to_string()),
        }
    }
}

impl Facet for ValidationFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::Validation
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for ValidationFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationFacet")
            .field("origin", &self.origin)
            .finish()
    }
}
