//! Publishing resolution and the prototype gate.

use crate::{vocab, FacetFactory, FactoryContext, FeatureSite, PipelineError};
use chassis_core::{FeatureSort, PublishingPolicy, Violation, Violations};
use chassis_facet::{
    ActionSemanticsFacet, FacetKind, FacetOrigin, FacetRegistry, PrototypeFacet, PublishingConcern,
    PublishingFacet,
};
use chassis_marker::Synthesis;
use std::sync::Arc;

/// The member- or type-level publishing state read from marker synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PublishingState {
    /// No reachable marker, or no recognized value.
    Unspecified,
    /// Explicitly deferring to configuration.
    AsConfigured,
    /// Explicitly enabled.
    Enabled,
    /// Explicitly disabled.
    Disabled,
}

impl PublishingState {
    fn from_synthesis(synthesis: &Synthesis) -> Self {
        match synthesis.effective("value").and_then(|v| v.as_str()) {
            Some("enabled") => PublishingState::Enabled,
            Some("disabled") => PublishingState::Disabled,
            Some("as_configured") => PublishingState::AsConfigured,
            _ => PublishingState::Unspecified,
        }
    }

    /// The explicit decision, if this state carries one.
    fn explicit(&self) -> Option<bool> {
        match self {
            PublishingState::Enabled => Some(true),
            PublishingState::Disabled => Some(false),
            _ => None,
        }
    }
}

/// Resolves command and execution publishing for an action.
///
/// Per concern: an explicit member-level marker always wins; member and
/// type contradicting explicitly is additionally reported. `as_configured`
/// and absence defer first to an explicit type-level marker, then to the
/// process-wide policy. The ignore-query-only policy needs established
/// action semantics and fails fast without them.
pub struct PublishingFactory;

impl FacetFactory for PublishingFactory {
    fn name(&self) -> &'static str {
        "publishing"
    }

    fn handles(&self, sort: FeatureSort) -> bool {
        sort == FeatureSort::Action
    }

    fn process(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        let concerns = [
            (
                PublishingConcern::Command,
                vocab::COMMAND_PUBLISHING,
                ctx.config.command_publishing,
            ),
            (
                PublishingConcern::Execution,
                vocab::EXECUTION_PUBLISHING,
                ctx.config.execution_publishing,
            ),
        ];

        for (concern, marker, policy) in concerns {
            let member_state = PublishingState::from_synthesis(&ctx.synthesize(site, marker));
            let type_state =
                PublishingState::from_synthesis(&ctx.synthesize_on(&site.owner().markers, marker));

            let (enabled, origin) = if let Some(enabled) = member_state.explicit() {
                // Member-level wins for every concern; a contradicting
                // explicit pair is still reported.
                if type_state.explicit().is_some_and(|t| t != enabled) {
                    violations.push(Violation::ambiguous_publishing(
                        &site.owner().name,
                        site.name(),
                        concern.name(),
                    ));
                }
                (enabled, FacetOrigin::Marker)
            } else if let Some(enabled) = type_state.explicit() {
                (enabled, FacetOrigin::Marker)
            } else {
                match policy {
                    PublishingPolicy::Never => (false, FacetOrigin::Configuration),
                    PublishingPolicy::Always => (true, FacetOrigin::Configuration),
                    PublishingPolicy::IgnoreQueryOnly => {
                        let Some(semantics) = facets
                            .get_as::<ActionSemanticsFacet>(FacetKind::ActionSemantics)
                        else {
                            return Err(PipelineError::ConfigurationConflict {
                                identifier: site.identifier(),
                                concern: concern.name(),
                            });
                        };
                        (!semantics.semantics().is_safe(), FacetOrigin::Configuration)
                    }
                }
            };
            facets.add(Arc::new(PublishingFacet::new(concern, enabled, origin)));
        }
        Ok(())
    }
}

/// Restricts an action carrying the `prototype` marker to prototyping
/// scope.
pub struct PrototypeFactory;

impl FacetFactory for PrototypeFactory {
    fn name(&self) -> &'static str {
        "prototype"
    }

    fn handles(&self, sort: FeatureSort) -> bool {
        sort == FeatureSort::Action
    }

    fn process(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        _violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        if ctx.synthesize(site, vocab::PROTOTYPE).is_present() {
            facets.add(Arc::new(PrototypeFacet::new(FacetOrigin::Marker)));
        }
        Ok(())
    }
}
