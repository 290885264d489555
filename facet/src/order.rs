//! Member ordering keys and the member-order facet.
//!
//! Catalog ordering is driven by `"group:sequence"` specifications where
//! the sequence is dewey-style (`"2.3"`). Members without a specification
//! sort under group `"General"` with sequence `"1"`.

use crate::{Facet, FacetKind, FacetOrigin};
use std::any::Any;
use std::fmt;

/// One segment of a dewey-style sequence.
///
/// Variant order matters: numeric segments compare before textual ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Num(u64),
    Text(String),
}

/// A parsed dewey-style sequence (`"2.3"` => [2, 3]).
///
/// Segments compare pairwise; numeric segments order numerically and
/// before textual ones. Parsing never fails: non-numeric segments are
/// carried as text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SequenceKey(Vec<Segment>);

impl SequenceKey {
    /// Parse a sequence string, splitting on `.`.
    pub fn parse(spec: &str) -> Self {
        SequenceKey(
            spec.split('.')
                .map(|seg| match seg.parse::<u64>() {
                    Ok(n) => Segment::Num(n),
                    Err(_) => Segment::Text(seg.to_string()),
                })
                .collect(),
        )
    }
}

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match seg {
                Segment::Num(n) => write!(f, "{}", n)?,
                Segment::Text(t) => write!(f, "{}", t)?,
            }
        }
        Ok(())
    }
}

/// The ordering key of one catalog member: (group, sequence).
///
/// Keys sort lexicographically by group name, then by sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderKey {
    /// Group name.
    pub group: String,
    /// Position within the group.
    pub sequence: SequenceKey,
}

impl OrderKey {
    /// Create a key from group and sequence strings.
    pub fn new(group: impl Into<String>, sequence: &str) -> Self {
        OrderKey {
            group: group.into(),
            sequence: SequenceKey::parse(sequence),
        }
    }

    /// Parse a `"group"` or `"group:sequence"` specification.
    ///
    /// A bare group gets sequence `"1"`. A specification with more than
    /// one `:` delimiter is malformed and yields `None`; the caller falls
    /// back to the default key.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.split(':');
        let group = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (None, _) => Some(OrderKey::new(group, "1")),
            (Some(sequence), None) => Some(OrderKey::new(group, sequence)),
            (Some(_), Some(_)) => None,
        }
    }
}

impl Default for OrderKey {
    fn default() -> Self {
        OrderKey::new("General", "1")
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.sequence)
    }
}

/// Facet carrying the resolved ordering key of a member.
#[derive(Debug, Clone)]
pub struct MemberOrderFacet {
    origin: FacetOrigin,
    key: OrderKey,
}

impl MemberOrderFacet {
    /// Create the facet with a resolved key.
    pub fn new(key: OrderKey, origin: FacetOrigin) -> Self {
        Self { origin, key }
    }

    /// The resolved ordering key.
    pub fn key(&self) -> &OrderKey {
        &self.key
    }
}

impl Facet for MemberOrderFacet {
    fn kind(&self) -> FacetKind {
        FacetKind::MemberOrder
    }

    fn origin(&self) -> FacetOrigin {
        self.origin
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
