//! The whole-model validation pass.

use crate::{ValidationError, ValidationReport};
use chassis_catalog::Metamodel;
use chassis_core::{Violation, Violations};
use chassis_facet::{Facet, FacetKind, FacetOrigin, NatureFacet};
use chassis_pipeline::support;
use tracing::info;

/// Forces every catalog to build and gathers every violation.
pub struct ValidationPass;

impl ValidationPass {
    /// Run validation over the whole model.
    ///
    /// Builds every type's catalog (memoized builds are reused), then runs
    /// the checks that need the complete picture. Orphan detection must
    /// come after all builds: a support method on one type can be consumed
    /// while building any catalog that splices it.
    pub fn run(metamodel: &Metamodel) -> Result<ValidationReport, ValidationError> {
        let mut violations = Violations::new();
        violations.merge(metamodel.model_violations().clone());

        let specs = metamodel.all_specs()?;
        for spec in &specs {
            violations.merge(spec.violations().clone());
        }

        for decl in metamodel.model().types() {
            for method in &decl.methods {
                if support::is_support_name(&method.name)
                    && !metamodel.consumed().is_consumed(decl.id, &method.name)
                {
                    violations.push(Violation::orphaned_support_method(
                        &decl.name,
                        &method.name,
                    ));
                }
            }
        }

        if metamodel.config().strict_nature {
            for spec in &specs {
                // Interfaces are not instantiable and mixins are classified
                // by their mixin marker; neither needs a nature.
                let exempt = spec.facets().contains(FacetKind::Mixin)
                    || metamodel
                        .model()
                        .decl(spec.type_id())
                        .is_some_and(|d| d.is_interface);
                if exempt {
                    continue;
                }
                let defaulted = spec
                    .facets()
                    .get_as::<NatureFacet>(FacetKind::Nature)
                    .map_or(true, |f| f.origin() == FacetOrigin::Default);
                if defaulted {
                    violations.push(Violation::missing_nature(spec.name()));
                }
            }
        }

        info!(
            types = specs.len(),
            violations = violations.len(),
            "validation pass complete"
        );
        Ok(ValidationReport::new(violations))
    }
}
