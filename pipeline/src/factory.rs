//! The factory trait and the ordered programming model.

use crate::{ConsumedMethods, FeatureSite, PipelineError};
use chassis_core::{FeatureSort, MetamodelConfig, Violations};
use chassis_facet::FacetRegistry;
use chassis_marker::{MarkerApplication, Synthesis};
use chassis_model::DomainModel;
use tracing::trace;

/// Everything a factory may consult while processing a site.
pub struct FactoryContext<'a> {
    /// The immutable domain model under introspection.
    pub model: &'a DomainModel,
    /// Resolved process configuration.
    pub config: &'a MetamodelConfig,
    /// The method-consumption side-channel.
    pub consumed: &'a ConsumedMethods,
}

impl FactoryContext<'_> {
    /// Synthesize a named marker over the element at a site.
    pub fn synthesize(&self, site: &FeatureSite<'_>, marker: &str) -> Synthesis {
        self.model.markers().synthesize_named(site.markers(), marker)
    }

    /// Synthesize a named marker over an arbitrary application list,
    /// e.g. the owning type's markers.
    pub fn synthesize_on(&self, markers: &[MarkerApplication], marker: &str) -> Synthesis {
        self.model.markers().synthesize_named(markers, marker)
    }
}

/// One step of the resolution pipeline.
///
/// Factories declare the feature sorts they apply to and run in the fixed
/// order assembled by [`ProgrammingModel`].
pub trait FacetFactory: Send + Sync {
    /// Factory name for trace output.
    fn name(&self) -> &'static str;

    /// Returns true if this factory applies to features of the sort.
    fn handles(&self, sort: FeatureSort) -> bool;

    /// Inspect the site and add facets.
    ///
    /// Structural problems go into `violations`; only unresolvable
    /// configuration conflicts return an error.
    fn process(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        violations: &mut Violations,
    ) -> Result<(), PipelineError>;
}

/// The ordered factory set defining the programming model.
pub struct ProgrammingModel {
    factories: Vec<Box<dyn FacetFactory>>,
}

impl ProgrammingModel {
    /// The standard factory order.
    ///
    /// Marker-reading factories run first, companion binding next, and the
    /// configuration-deferring publishing resolution after semantics and
    /// companions are established; the nature fallback closes the object
    /// pipeline.
    pub fn standard() -> Self {
        use crate::factories::*;
        Self::custom(vec![
            Box::new(NatureFactory),
            Box::new(MixinFactory),
            Box::new(ActionSemanticsFactory),
            Box::new(HiddenMarkerFactory),
            Box::new(DisabledMarkerFactory),
            Box::new(MemberOrderFactory),
            Box::new(PatternFactory),
            Box::new(MaxLengthFactory),
            Box::new(CompanionMethodsFactory),
            Box::new(ParameterCompanionFactory),
            Box::new(PublishingFactory),
            Box::new(PrototypeFactory),
            Box::new(NatureFallbackFactory),
        ])
    }

    /// A programming model with a caller-chosen factory order.
    pub fn custom(factories: Vec<Box<dyn FacetFactory>>) -> Self {
        Self { factories }
    }

    /// The factories in execution order.
    pub fn factories(&self) -> &[Box<dyn FacetFactory>] {
        &self.factories
    }

    /// Run every applicable factory over a site, in order.
    pub fn run(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        for factory in &self.factories {
            if !factory.handles(site.sort()) {
                continue;
            }
            trace!(
                factory = factory.name(),
                site = %site.identifier(),
                "running facet factory"
            );
            factory.process(ctx, site, facets, violations)?;
        }
        Ok(())
    }
}

impl Default for ProgrammingModel {
    fn default() -> Self {
        Self::standard()
    }
}
