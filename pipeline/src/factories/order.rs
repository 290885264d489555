//! Member ordering factory.

use crate::{vocab, FacetFactory, FactoryContext, FeatureSite, PipelineError};
use chassis_core::{FeatureSort, Violations};
use chassis_facet::{FacetOrigin, FacetRegistry, MemberOrderFacet, OrderKey};
use std::sync::Arc;
use tracing::debug;

/// Resolves the `"group:sequence"` ordering marker of a member.
///
/// A malformed specification is recovered locally with the default key;
/// it never fails the build.
pub struct MemberOrderFactory;

impl FacetFactory for MemberOrderFactory {
    fn name(&self) -> &'static str {
        "member-order"
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
        let synthesis = ctx.synthesize(site, vocab::MEMBER_ORDER);
        let Some(spec) = synthesis.effective("value").and_then(|v| v.as_str()) else {
            return Ok(());
        };

        let key = match OrderKey::parse(spec) {
            Some(key) => key,
            None => {
                debug!(
                    member = %site.identifier(),
                    spec,
                    "malformed member order specification, falling back to default key"
                );
                OrderKey::default()
            }
        };
        facets.add(Arc::new(MemberOrderFacet::new(key, FacetOrigin::Marker)));
        Ok(())
    }
}
