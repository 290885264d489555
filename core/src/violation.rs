//! Structural violation types.
//!
//! Resolution does not abort on the first structural problem it finds.
//! Violations are collected per type while the build continues, then
//! surfaced together by the validation pass.

use crate::template::render;
use crate::Identifier;
use std::fmt;

/// Classification of a structural violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// An action name is declared more than once on the same type.
    OverloadedMember,
    /// A member redeclares an inherited member with an incompatible shape.
    IncompatibleOverride,
    /// Two mixins contribute a member under the same derived name.
    AmbiguousMixinMember,
    /// A mixin declaration is ill-formed.
    MixinShape,
    /// A property declares a match pattern that does not compile.
    InvalidPattern,
    /// A support method matches the naming convention but binds to nothing.
    OrphanedSupportMethod,
    /// A type carries contradicting nature markers.
    ConflictingNature,
    /// A type carries no nature marker while strict mode requires one.
    MissingNature,
    /// Member and type declare contradicting explicit publishing.
    AmbiguousPublishing,
}

impl ViolationKind {
    /// Returns the snake_case name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ViolationKind::OverloadedMember => "overloaded_member",
            ViolationKind::IncompatibleOverride => "incompatible_override",
            ViolationKind::AmbiguousMixinMember => "ambiguous_mixin_member",
            ViolationKind::MixinShape => "mixin_shape",
            ViolationKind::InvalidPattern => "invalid_pattern",
            ViolationKind::OrphanedSupportMethod => "orphaned_support_method",
            ViolationKind::ConflictingNature => "conflicting_nature",
            ViolationKind::MissingNature => "missing_nature",
            ViolationKind::AmbiguousPublishing => "ambiguous_publishing",
        }
    }
}

/// Message template: action declared more than once.
pub const TPL_OVERLOADED_MEMBER: &str =
    "action '${member}' is declared ${count} times on '${type}'; overloading is not supported";

/// Message template: incompatible redeclaration of an inherited member.
pub const TPL_INCOMPATIBLE_OVERRIDE: &str =
    "member '${member}' of '${type}' redeclares a member of '${parent}' with an incompatible shape";

/// Message template: two mixins derive the same member name.
pub const TPL_AMBIGUOUS_MIXIN_MEMBER: &str =
    "mixins '${first}' and '${second}' both contribute member '${member}' to '${type}'";

/// Message template: action overloading an inherited action.
pub const TPL_OVERLOADED_INHERITED: &str =
    "action '${member}' of '${type}' overloads an action inherited from '${parent}'; overloading is not supported";

/// Message template: mixin member colliding with a declared member.
pub const TPL_MIXIN_COLLISION: &str =
    "mixin '${mixin}' contributes member '${member}' colliding with a declared member of '${type}'";

/// Message template: ill-formed mixin declaration.
pub const TPL_MIXIN_SHAPE: &str = "mixin '${type}' is ill-formed: ${detail}";

/// Message template: unparsable match pattern.
pub const TPL_INVALID_PATTERN: &str =
    "property '${member}' of '${type}' declares an unparsable match pattern '${pattern}'";

/// Message template: support method bound to nothing.
pub const TPL_ORPHANED_SUPPORT_METHOD: &str =
    "support method '${member}' on '${type}' matches a naming convention but no member consumed it";

/// Message template: contradicting nature markers.
pub const TPL_CONFLICTING_NATURE: &str =
    "type '${type}' carries contradicting nature markers '${first}' and '${second}'";

/// Message template: nature marker required but absent.
pub const TPL_MISSING_NATURE: &str =
    "type '${type}' carries no nature marker but strict nature mode is enabled";

/// Message template: contradicting explicit publishing markers.
pub const TPL_AMBIGUOUS_PUBLISHING: &str =
    "member '${member}' and type '${type}' declare contradicting explicit ${concern} publishing";

/// A structural violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Classification of this violation.
    pub kind: ViolationKind,
    /// The offending type or member.
    pub identifier: Identifier,
    /// Rendered human-readable message.
    pub message: String,
}

impl Violation {
    /// Create a violation with an already-rendered message.
    pub fn new(kind: ViolationKind, identifier: Identifier, message: impl Into<String>) -> Self {
        Self {
            kind,
            identifier,
            message: message.into(),
        }
    }

    /// An action name declared more than once on one type.
    pub fn overloaded_member(type_name: &str, member: &str, count: usize) -> Self {
        let message = render(
            TPL_OVERLOADED_MEMBER,
            &[
                ("member", member),
                ("count", &count.to_string()),
                ("type", type_name),
            ],
        );
        Self::new(
            ViolationKind::OverloadedMember,
            Identifier::of_member(type_name, member),
            message,
        )
    }

    /// A member redeclaring an inherited member with an incompatible shape.
    pub fn incompatible_override(type_name: &str, member: &str, parent: &str) -> Self {
        let message = render(
            TPL_INCOMPATIBLE_OVERRIDE,
            &[("member", member), ("type", type_name), ("parent", parent)],
        );
        Self::new(
            ViolationKind::IncompatibleOverride,
            Identifier::of_member(type_name, member),
            message,
        )
    }

    /// An action overloading a same-named inherited action.
    pub fn overloaded_inherited(type_name: &str, member: &str, parent: &str) -> Self {
        let message = render(
            TPL_OVERLOADED_INHERITED,
            &[("member", member), ("type", type_name), ("parent", parent)],
        );
        Self::new(
            ViolationKind::OverloadedMember,
            Identifier::of_member(type_name, member),
            message,
        )
    }

    /// Two mixins contributing the same derived member name.
    pub fn ambiguous_mixin_member(
        type_name: &str,
        member: &str,
        first: &str,
        second: &str,
    ) -> Self {
        let message = render(
            TPL_AMBIGUOUS_MIXIN_MEMBER,
            &[
                ("first", first),
                ("second", second),
                ("member", member),
                ("type", type_name),
            ],
        );
        Self::new(
            ViolationKind::AmbiguousMixinMember,
            Identifier::of_member(type_name, member),
            message,
        )
    }

    /// A mixin member colliding with a declared or inherited member.
    pub fn mixin_collision(type_name: &str, member: &str, mixin: &str) -> Self {
        let message = render(
            TPL_MIXIN_COLLISION,
            &[("mixin", mixin), ("member", member), ("type", type_name)],
        );
        Self::new(
            ViolationKind::AmbiguousMixinMember,
            Identifier::of_member(type_name, member),
            message,
        )
    }

    /// An ill-formed mixin declaration.
    pub fn mixin_shape(mixin_name: &str, detail: &str) -> Self {
        let message = render(TPL_MIXIN_SHAPE, &[("type", mixin_name), ("detail", detail)]);
        Self::new(
            ViolationKind::MixinShape,
            Identifier::of_type(mixin_name),
            message,
        )
    }

    /// A match pattern that failed to compile.
    pub fn invalid_pattern(type_name: &str, member: &str, pattern: &str) -> Self {
        let message = render(
            TPL_INVALID_PATTERN,
            &[("member", member), ("type", type_name), ("pattern", pattern)],
        );
        Self::new(
            ViolationKind::InvalidPattern,
            Identifier::of_member(type_name, member),
            message,
        )
    }

    /// A support method that no member consumed.
    pub fn orphaned_support_method(type_name: &str, method: &str) -> Self {
        let message = render(
            TPL_ORPHANED_SUPPORT_METHOD,
            &[("member", method), ("type", type_name)],
        );
        Self::new(
            ViolationKind::OrphanedSupportMethod,
            Identifier::of_member(type_name, method),
            message,
        )
    }

    /// Contradicting nature markers on one type.
    pub fn conflicting_nature(type_name: &str, first: &str, second: &str) -> Self {
        let message = render(
            TPL_CONFLICTING_NATURE,
            &[("type", type_name), ("first", first), ("second", second)],
        );
        Self::new(
            ViolationKind::ConflictingNature,
            Identifier::of_type(type_name),
            message,
        )
    }

    /// Nature marker absent while strict mode requires one.
    pub fn missing_nature(type_name: &str) -> Self {
        let message = render(TPL_MISSING_NATURE, &[("type", type_name)]);
        Self::new(
            ViolationKind::MissingNature,
            Identifier::of_type(type_name),
            message,
        )
    }

    /// Member and type declaring contradicting explicit publishing.
    pub fn ambiguous_publishing(type_name: &str, member: &str, concern: &str) -> Self {
        let message = render(
            TPL_AMBIGUOUS_PUBLISHING,
            &[("member", member), ("type", type_name), ("concern", concern)],
        );
        Self::new(
            ViolationKind::AmbiguousPublishing,
            Identifier::of_member(type_name, member),
            message,
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind.name(), self.identifier, self.message)
    }
}

/// Collection of violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get all violations.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Get violations of a specific kind.
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Merge another violations collection.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
