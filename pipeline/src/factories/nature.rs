//! Object-level factories: nature, mixin, nature fallback.

use crate::{vocab, FacetFactory, FactoryContext, FeatureSite, PipelineError};
use chassis_core::{FeatureSort, Violation, Violations};
use chassis_facet::{FacetKind, FacetOrigin, FacetRegistry, MixinFacet, NatureFacet};
use std::sync::Arc;

/// Resolves the type classification from `nature` marker synthesis.
///
/// Contradicting values at the shallowest synthesis depth are reported as
/// a violation; the first declared value wins deterministically.
pub struct NatureFactory;

impl FacetFactory for NatureFactory {
    fn name(&self) -> &'static str {
        "nature-from-marker"
    }

    fn handles(&self, sort: FeatureSort) -> bool {
        sort == FeatureSort::Object
    }

    fn process(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        let synthesis = ctx.synthesize(site, vocab::NATURE);
        let Some(nearest) = synthesis.nearest() else {
            return Ok(());
        };

        let depth = nearest.depth;
        let values: Vec<&str> = synthesis
            .all()
            .iter()
            .filter(|i| i.depth == depth)
            .filter_map(|i| i.values.get("value").and_then(|v| v.as_str()))
            .collect();
        if let Some(&first) = values.first() {
            if let Some(&conflict) = values.iter().find(|&&v| v != first) {
                violations.push(Violation::conflicting_nature(
                    &site.owner().name,
                    first,
                    conflict,
                ));
            }
        }

        let nature = synthesis
            .effective("value")
            .and_then(|v| v.as_str())
            .unwrap_or("entity");
        facets.add(Arc::new(NatureFacet::new(nature, FacetOrigin::Marker)));
        Ok(())
    }
}

/// Supplies the built-in nature when no marker resolved one.
pub struct NatureFallbackFactory;

impl FacetFactory for NatureFallbackFactory {
    fn name(&self) -> &'static str {
        "nature-fallback"
    }

    fn handles(&self, sort: FeatureSort) -> bool {
        sort == FeatureSort::Object
    }

    fn process(
        &self,
        _ctx: &FactoryContext<'_>,
        _site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        _violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        if !facets.contains(FacetKind::Nature) {
            facets.add(Arc::new(NatureFacet::fallback()));
        }
        Ok(())
    }
}

/// Resolves the `mixin` marker into a mixin facet with a resolved target.
pub struct MixinFactory;

impl FacetFactory for MixinFactory {
    fn name(&self) -> &'static str {
        "mixin-from-marker"
    }

    fn handles(&self, sort: FeatureSort) -> bool {
        sort == FeatureSort::Object
    }

    fn process(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        let synthesis = ctx.synthesize(site, vocab::MIXIN);
        if !synthesis.is_present() {
            return Ok(());
        }

        match synthesis.effective("target").and_then(|v| v.as_str()) {
            Some(target_name) => match ctx.model.type_id(target_name) {
                Some(target) => {
                    facets.add(Arc::new(MixinFacet::new(
                        target,
                        target_name,
                        FacetOrigin::Marker,
                    )));
                }
                None => violations.push(Violation::mixin_shape(
                    &site.owner().name,
                    &format!("unknown target type '{}'", target_name),
                )),
            },
            None => violations.push(Violation::mixin_shape(
                &site.owner().name,
                "the mixin marker names no target type",
            )),
        }
        Ok(())
    }
}
