//! Facet classification.

use std::fmt;

/// The closed set of concerns a facet can be bound under.
///
/// Exactly one facet may exist per kind per feature. New concerns extend
/// this enum; the registry and pipeline are agnostic to the individual
/// variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    /// Classification of a domain type (entity, service, ...).
    Nature,
    /// Marks a type as contributing one member to assignable targets.
    Mixin,
    /// Member visibility.
    Hidden,
    /// Member usability.
    Disabled,
    /// Position of a member in the catalog ordering.
    MemberOrder,
    /// Side-effect classification of an action.
    ActionSemantics,
    /// Whether invocations of an action are published as commands.
    CommandPublishing,
    /// Whether executions of an action are published.
    ExecutionPublishing,
    /// Restricts an action to prototyping scope.
    Prototype,
    /// Default value provider.
    Defaults,
    /// Choices provider.
    Choices,
    /// Proposed-value validation.
    Validation,
    /// Declarative match pattern on a property value.
    Pattern,
    /// Maximum length of a property value.
    MaxLength,
}

impl FacetKind {
    /// Returns the snake_case name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            FacetKind::Nature => "nature",
            FacetKind::Mixin => "mixin",
            FacetKind::Hidden => "hidden",
            FacetKind::Disabled => "disabled",
            FacetKind::MemberOrder => "member_order",
            FacetKind::ActionSemantics => "action_semantics",
            FacetKind::CommandPublishing => "command_publishing",
            FacetKind::ExecutionPublishing => "execution_publishing",
            FacetKind::Prototype => "prototype",
            FacetKind::Defaults => "defaults",
            FacetKind::Choices => "choices",
            FacetKind::Validation => "validation",
            FacetKind::Pattern => "pattern",
            FacetKind::MaxLength => "max_length",
        }
    }
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where a facet came from.
///
/// Recorded for diagnostics and for the validation pass; precedence between
/// origins is enforced by factory order, not by comparing origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetOrigin {
    /// An explicit marker on the element.
    Marker,
    /// A convention-named companion method.
    CompanionMethod,
    /// A resolved configuration value.
    Configuration,
    /// A built-in fallback.
    Default,
}
