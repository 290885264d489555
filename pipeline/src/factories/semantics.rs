//! Action semantics factory.

use crate::{vocab, FacetFactory, FactoryContext, FeatureSite, PipelineError};
use chassis_core::{FeatureSort, Violations};
use chassis_facet::{ActionSemantics, ActionSemanticsFacet, FacetOrigin, FacetRegistry};
use std::sync::Arc;
use tracing::debug;

/// Resolves the declared side-effect semantics of an action.
///
/// There is no semantics default: an action without a reachable marker,
/// or with an unrecognized value, keeps its semantics unestablished, which
/// lets semantics-dependent policies fail fast instead of guessing.
pub struct ActionSemanticsFactory;

impl FacetFactory for ActionSemanticsFactory {
    fn name(&self) -> &'static str {
        "action-semantics"
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
        let synthesis = ctx.synthesize(site, vocab::ACTION_SEMANTICS);
        let Some(value) = synthesis.effective("value").and_then(|v| v.as_str()) else {
            return Ok(());
        };

        match ActionSemantics::from_name(value) {
            Some(semantics) => {
                facets.add(Arc::new(ActionSemanticsFacet::new(
                    semantics,
                    FacetOrigin::Marker,
                )));
            }
            None => debug!(
                action = %site.identifier(),
                value,
                "unrecognized action semantics value, semantics stay unestablished"
            ),
        }
        Ok(())
    }
}
