//! Process-wide configuration consumed by the resolution pipeline.

/// Policy applied to actions whose publishing state defers to configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishingPolicy {
    /// Never publish unless a marker explicitly enables it.
    #[default]
    Never,
    /// Publish everything not explicitly disabled.
    Always,
    /// Publish only actions with side effects; skip query-only actions.
    ///
    /// Resolving against this policy requires the action to declare its
    /// semantics. An action without declared semantics cannot be resolved
    /// and the build of its type fails.
    IgnoreQueryOnly,
}

/// Resolved configuration for a metamodel instance.
///
/// Captured once at construction; resolution never re-reads external
/// configuration sources.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetamodelConfig {
    /// Policy for command publishing of actions.
    pub command_publishing: PublishingPolicy,
    /// Policy for execution publishing of actions.
    pub execution_publishing: PublishingPolicy,
    /// When true, every domain type must carry an explicit nature marker.
    pub strict_nature: bool,
}

impl MetamodelConfig {
    /// Configuration with all policies at their defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the command publishing policy.
    pub fn with_command_publishing(mut self, policy: PublishingPolicy) -> Self {
        self.command_publishing = policy;
        self
    }

    /// Set the execution publishing policy.
    pub fn with_execution_publishing(mut self, policy: PublishingPolicy) -> Self {
        self.execution_publishing = policy;
        self
    }

    /// Require every domain type to carry an explicit nature marker.
    pub fn with_strict_nature(mut self, strict: bool) -> Self {
        self.strict_nature = strict;
        self
    }
}
