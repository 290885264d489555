//! Marker-driven visibility and usability factories.

use crate::{vocab, FacetFactory, FactoryContext, FeatureSite, PipelineError};
use chassis_core::{FeatureSort, Violations};
use chassis_facet::{DisabledFacet, FacetOrigin, FacetRegistry, HiddenFacet};
use std::sync::Arc;

/// Hides a member or parameter carrying a reachable `hidden` marker.
pub struct HiddenMarkerFactory;

impl FacetFactory for HiddenMarkerFactory {
    fn name(&self) -> &'static str {
        "hidden-from-marker"
    }

    fn handles(&self, sort: FeatureSort) -> bool {
        sort.is_member() || sort == FeatureSort::Parameter
    }

    fn process(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        _violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        if ctx.synthesize(site, vocab::HIDDEN).is_present() {
            facets.add(Arc::new(HiddenFacet::always(FacetOrigin::Marker)));
        }
        Ok(())
    }
}

/// Disables a member carrying a reachable `disabled` marker.
pub struct DisabledMarkerFactory;

impl FacetFactory for DisabledMarkerFactory {
    fn name(&self) -> &'static str {
        "disabled-from-marker"
    }

    fn handles(&self, sort: FeatureSort) -> bool {
        sort.is_member()
    }

    fn process(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        _violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        let synthesis = ctx.synthesize(site, vocab::DISABLED);
        if synthesis.is_present() {
            let reason = synthesis
                .effective("reason")
                .and_then(|v| v.as_str())
                .unwrap_or("disabled");
            facets.add(Arc::new(DisabledFacet::always(reason, FacetOrigin::Marker)));
        }
        Ok(())
    }
}
