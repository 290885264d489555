//! The marker vocabulary understood by the built-in factories.
//!
//! Host applications declare these marker types once, typically via
//! [`declare_vocabulary`], and may refine them with their own markers;
//! synthesis resolves refinements transparently.

use chassis_core::FeatureSort;
use chassis_marker::{MarkerError, MarkerRegistryBuilder};

/// Type-level classification marker; attribute `value` names the nature.
pub const NATURE: &str = "nature";
/// Type-level mixin marker; attribute `target` names the target type.
pub const MIXIN: &str = "mixin";
/// Member visibility marker.
pub const HIDDEN: &str = "hidden";
/// Member usability marker; attribute `reason` carries the explanation.
pub const DISABLED: &str = "disabled";
/// Member ordering marker; attribute `value` is `"group:sequence"`.
pub const MEMBER_ORDER: &str = "member_order";
/// Action semantics marker; attribute `value` is `safe`, `idempotent` or
/// `non_idempotent`. Deliberately no default.
pub const ACTION_SEMANTICS: &str = "action_semantics";
/// Command publishing marker; attribute `value` is `enabled`, `disabled`
/// or `as_configured`.
pub const COMMAND_PUBLISHING: &str = "command_publishing";
/// Execution publishing marker; same attribute grammar as command
/// publishing.
pub const EXECUTION_PUBLISHING: &str = "execution_publishing";
/// Restricts an action to prototyping scope.
pub const PROTOTYPE: &str = "prototype";
/// Property match-pattern marker; attribute `value` is the pattern.
pub const MATCH_PATTERN: &str = "match_pattern";
/// Maximum-length marker; attribute `value` is the limit.
pub const MAX_LENGTH: &str = "max_length";

/// Declare the standard marker vocabulary into a registry builder.
pub fn declare_vocabulary(markers: &mut MarkerRegistryBuilder) -> Result<(), MarkerError> {
    markers
        .declare(NATURE)
        .target(FeatureSort::Object)
        .default_value("value", "entity")
        .done()?;
    markers.declare(MIXIN).target(FeatureSort::Object).done()?;
    markers
        .declare(HIDDEN)
        .target(FeatureSort::Property)
        .target(FeatureSort::Collection)
        .target(FeatureSort::Action)
        .target(FeatureSort::Parameter)
        .done()?;
    markers
        .declare(DISABLED)
        .target(FeatureSort::Property)
        .target(FeatureSort::Collection)
        .target(FeatureSort::Action)
        .default_value("reason", "disabled")
        .done()?;
    markers
        .declare(MEMBER_ORDER)
        .target(FeatureSort::Property)
        .target(FeatureSort::Collection)
        .target(FeatureSort::Action)
        .done()?;
    markers
        .declare(ACTION_SEMANTICS)
        .target(FeatureSort::Action)
        .done()?;
    markers
        .declare(COMMAND_PUBLISHING)
        .target(FeatureSort::Action)
        .target(FeatureSort::Object)
        .default_value("value", "as_configured")
        .done()?;
    markers
        .declare(EXECUTION_PUBLISHING)
        .target(FeatureSort::Action)
        .target(FeatureSort::Object)
        .default_value("value", "as_configured")
        .done()?;
    markers
        .declare(PROTOTYPE)
        .target(FeatureSort::Action)
        .done()?;
    markers
        .declare(MATCH_PATTERN)
        .target(FeatureSort::Property)
        .done()?;
    markers
        .declare(MAX_LENGTH)
        .target(FeatureSort::Property)
        .target(FeatureSort::Parameter)
        .done()?;
    Ok(())
}
