//! Companion-method binding factories.
//!
//! Binding a companion immediately reports the method on the consumption
//! channel so the catalog builder and validation pass never misinterpret
//! it. A recognized method that fails the signature check (or carries no
//! host-supplied body) binds nothing and is left for orphan detection.

use crate::support::{match_support, SupportMatch, SupportPrefix};
use crate::{FacetFactory, FactoryContext, FeatureSite, PipelineError};
use chassis_core::{FeatureSort, Violations};
use chassis_facet::{
    ChoicesFacet, DefaultsFacet, DisabledFacet, FacetOrigin, FacetRegistry, HiddenFacet,
    ValidationFacet,
};
use chassis_model::{MethodDecl, TypeRef};
use std::sync::Arc;
use tracing::trace;

/// Binds member-level companions (`hideX`, `disableX`, `validateX`,
/// `defaultX`, `choicesX`) to the feature at the site.
pub struct CompanionMethodsFactory;

impl FacetFactory for CompanionMethodsFactory {
    fn name(&self) -> &'static str {
        "companion-methods"
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
        let owner = site.owner();
        for method in &owner.methods {
            let Some(SupportMatch::Member { prefix, member }) = match_support(&method.name) else {
                continue;
            };
            if member != site.name() {
                continue;
            }
            let Some(body) = method.body.clone() else {
                continue;
            };

            let bound = match prefix {
                SupportPrefix::Hide if hide_signature(method) => {
                    facets.add(Arc::new(HiddenFacet::when(body)));
                    true
                }
                SupportPrefix::Disable if disable_signature(method) => {
                    facets.add(Arc::new(DisabledFacet::when(body)));
                    true
                }
                SupportPrefix::Validate if validate_signature(method, site) => {
                    facets.add(Arc::new(ValidationFacet::new(
                        body,
                        FacetOrigin::CompanionMethod,
                    )));
                    true
                }
                SupportPrefix::Default if default_signature(method, site) => {
                    facets.add(Arc::new(DefaultsFacet::new(
                        body,
                        FacetOrigin::CompanionMethod,
                    )));
                    true
                }
                SupportPrefix::Choices if choices_signature(method, site) => {
                    facets.add(Arc::new(ChoicesFacet::new(
                        body,
                        FacetOrigin::CompanionMethod,
                    )));
                    true
                }
                _ => false,
            };
            if bound {
                ctx.consumed.consume(owner.id, &method.name);
                trace!(
                    member = %site.identifier(),
                    companion = %method.name,
                    "bound companion method"
                );
            }
        }
        Ok(())
    }
}

/// Binds parameter companions (`default<N><Action>`, `choices<N><Action>`)
/// to the parameter feature at the site.
pub struct ParameterCompanionFactory;

impl FacetFactory for ParameterCompanionFactory {
    fn name(&self) -> &'static str {
        "parameter-companions"
    }

    fn handles(&self, sort: FeatureSort) -> bool {
        sort == FeatureSort::Parameter
    }

    fn process(
        &self,
        ctx: &FactoryContext<'_>,
        site: &FeatureSite<'_>,
        facets: &mut FacetRegistry,
        _violations: &mut Violations,
    ) -> Result<(), PipelineError> {
        let owner = site.owner();
        let Some((index, param)) = site.as_param() else {
            return Ok(());
        };
        let Some(action) = site.as_method() else {
            return Ok(());
        };

        for method in &owner.methods {
            let Some(SupportMatch::Parameter {
                prefix,
                index: companion_index,
                action: companion_action,
            }) = match_support(&method.name)
            else {
                continue;
            };
            if companion_index != index || companion_action != action.name {
                continue;
            }
            let Some(body) = method.body.clone() else {
                continue;
            };
            if !method.params.is_empty() {
                continue;
            }

            let bound = match prefix {
                SupportPrefix::Default if method.returns == param.ty => {
                    facets.add(Arc::new(DefaultsFacet::new(
                        body,
                        FacetOrigin::CompanionMethod,
                    )));
                    true
                }
                SupportPrefix::Choices if is_list_of(&method.returns, &param.ty) => {
                    facets.add(Arc::new(ChoicesFacet::new(
                        body,
                        FacetOrigin::CompanionMethod,
                    )));
                    true
                }
                _ => false,
            };
            if bound {
                ctx.consumed.consume(owner.id, &method.name);
                trace!(
                    parameter = %site.identifier(),
                    companion = %method.name,
                    "bound parameter companion"
                );
            }
        }
        Ok(())
    }
}

fn hide_signature(method: &MethodDecl) -> bool {
    method.params.is_empty() && method.returns == TypeRef::Bool
}

fn disable_signature(method: &MethodDecl) -> bool {
    method.params.is_empty()
        && matches!(method.returns, TypeRef::String | TypeRef::Bool)
}

fn validate_signature(method: &MethodDecl, site: &FeatureSite<'_>) -> bool {
    if method.returns != TypeRef::String {
        return false;
    }
    match site.sort() {
        FeatureSort::Property => {
            let Some(field) = site.as_field() else {
                return false;
            };
            method.params.len() == 1 && method.params[0].ty == field.ty
        }
        FeatureSort::Action => {
            let Some(action) = site.as_method() else {
                return false;
            };
            method.params.len() == action.params.len()
                && method
                    .params
                    .iter()
                    .zip(&action.params)
                    .all(|(companion, declared)| companion.ty == declared.ty)
        }
        _ => false,
    }
}

fn default_signature(method: &MethodDecl, site: &FeatureSite<'_>) -> bool {
    site.sort() == FeatureSort::Property
        && method.params.is_empty()
        && site.as_field().is_some_and(|f| method.returns == f.ty)
}

fn choices_signature(method: &MethodDecl, site: &FeatureSite<'_>) -> bool {
    site.sort() == FeatureSort::Property
        && method.params.is_empty()
        && site
            .as_field()
            .is_some_and(|f| is_list_of(&method.returns, &f.ty))
}

fn is_list_of(returns: &TypeRef, element: &TypeRef) -> bool {
    returns.element() == Some(element)
}
