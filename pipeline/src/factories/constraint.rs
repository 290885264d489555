//! Declarative value-constraint factories.

use crate::{vocab, FacetFactory, FactoryContext, FeatureSite, PipelineError};
use chassis_core::{FeatureSort, Violation, Violations};
use chassis_facet::{FacetOrigin, FacetRegistry, MaxLengthFacet, PatternFacet};
use std::sync::Arc;
use tracing::debug;

/// Compiles the `match_pattern` marker of a property.
///
/// An unparsable pattern is recorded as a violation and produces no
/// facet; the property stays unconstrained.
pub struct PatternFactory;

impl FacetFactory for PatternFactory {
    fn name(&self) -> &'static str {
        "match-pattern"
    }

    fn handles(&self, sort: FeatureSort) -> bool {
        sort == FeatureSort::Property
    }

    fn process(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        let synthesis = ctx.synthesize(site, vocab::MATCH_PATTERN);
        let Some(pattern) = synthesis.effective("value").and_then(|v| v.as_str()) else {
            return Ok(());
        };

        match PatternFacet::compile(pattern, FacetOrigin::Marker) {
            Ok(facet) => {
                facets.add(Arc::new(facet));
            }
            Err(_) => {
                debug!(
                    member = %site.identifier(),
                    pattern,
                    "match pattern failed to compile"
                );
                violations.push(Violation::invalid_pattern(
                    &site.owner().name,
                    site.name(),
                    pattern,
                ));
            }
        }
        Ok(())
    }
}

/// Resolves the `max_length` marker of a property or parameter.
pub struct MaxLengthFactory;

impl FacetFactory for MaxLengthFactory {
    fn name(&self) -> &'static str {
        "max-length"
    }

    fn handles(&self, sort: FeatureSort) -> bool {
        sort == FeatureSort::Property || sort == FeatureSort::Parameter
    }

    fn process(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        _violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        let synthesis = ctx.synthesize(site, vocab::MAX_LENGTH);
        let Some(max) = synthesis.effective("value").and_then(|v| v.as_int()) else {
            return Ok(());
        };
        if max >= 0 {
            facets.add(Arc::new(MaxLengthFacet::new(max as usize, FacetOrigin::Marker)));
        }
        Ok(())
    }
}
