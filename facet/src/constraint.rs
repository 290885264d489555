//! Declarative value constraints on properties.

use crate::{Facet, FacetKind, FacetOrigin};
use regex_lite::Regex;
use std::any::Any;

/// Constrains a string property to a match pattern.
#[derive(Debug, Clone)]
pub struct PatternFacet {
    origin: FacetOrigin,
    raw: String,
    regex: Regex,
}

impl PatternFacet {
    /// Compile a pattern facet. An unparsable pattern is the caller's
    /// violation to report; no facet is produced for it.
    pub fn compile(pattern: &str, origin: FacetOrigin) -> Result<Self, regex_lite::Error> {
        Ok(Self {
            origin,
            raw: pattern.to_string(),
            regex: Regex::new(pattern)?,
        })
    }

    /// The pattern as written.
    pub fn pattern(&self) -> &str {
        &self.raw
    }

    /// Check a value against the pattern.
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl Facet for PatternFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::Pattern
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Constrains the length of a string property.
#[derive(Debug, Clone)]
pub struct MaxLengthFacet {
    origin: FacetOrigin,
    max: usize,
}

impl MaxLengthFacet {
    /// Create the facet with a maximum length in characters.
    pub fn new(max: usize, origin: FacetOrigin) -> Self {
        Self { origin, max }
    }

    /// The maximum accepted length.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Check a value against the limit.
    pub fn accepts(&self, value: &str) -> bool {
        value.chars().count() <= self.max
    }
}

impl Facet for MaxLengthFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::MaxLength
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
