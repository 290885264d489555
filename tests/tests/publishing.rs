//! Publishing resolution: markers, type-level defaults, and policy.

use chassis_catalog::CatalogError;
use chassis_core::{attrs, MetamodelConfig, PublishingPolicy, ViolationKind};
use chassis_facet::{FacetKind, PublishingFacet};
use chassis_model::{DomainModelBuilder, MethodDef, TypeRef};
use chassis_pipeline::PipelineError;
use chassis_tests::fixtures::{metamodel_with, model_builder};

fn one_action(marker_values: Option<&str>) -> DomainModelBuilder {
    let mut builder = model_builder();
    let mut method = MethodDef::new("submit");
    if let Some(value) = marker_values {
        method = method.marker_with("command_publishing", attrs! { "value" => value });
    }
    builder.add_type("Order").method(method).done().unwrap();
    builder
}

fn command_enabled(metamodel: &chassis_catalog::Metamodel, action: &str) -> bool {
    metamodel
        .spec("Order")
        .unwrap()
        .action(action)
        .unwrap()
        .facet_as::<PublishingFacet>(FacetKind::CommandPublishing)
        .unwrap()
        .is_enabled()
}

// ========== TEST: policy_never_and_always ==========
#[test]
fn test_policy_never_and_always() {
    // GIVEN an action with no publishing marker
    // THEN the process policy decides
    let metamodel = metamodel_with(one_action(None), MetamodelConfig::new());
    assert!(!command_enabled(&metamodel, "submit"));

    let metamodel = metamodel_with(
        one_action(None),
        MetamodelConfig::new().with_command_publishing(PublishingPolicy::Always),
    );
    assert!(command_enabled(&metamodel, "submit"));
}

// ========== TEST: explicit_member_marker_wins_over_policy ==========
#[test]
fn test_explicit_member_marker_wins_over_policy() {
    // GIVEN an explicitly disabled action under an always-publish policy
    let metamodel = metamodel_with(
        one_action(Some("disabled")),
        MetamodelConfig::new().with_command_publishing(PublishingPolicy::Always),
    );
    assert!(!command_enabled(&metamodel, "submit"));

    // AND an explicitly enabled action under the default never policy
    let metamodel = metamodel_with(one_action(Some("enabled")), MetamodelConfig::new());
    assert!(command_enabled(&metamodel, "submit"));
}

// ========== TEST: as_configured_defers_to_policy ==========
#[test]
fn test_as_configured_defers_to_policy() {
    // GIVEN an action explicitly deferring to configuration
    let metamodel = metamodel_with(
        one_action(Some("as_configured")),
        MetamodelConfig::new().with_command_publishing(PublishingPolicy::Always),
    );
    assert!(command_enabled(&metamodel, "submit"));

    let metamodel = metamodel_with(one_action(Some("as_configured")), MetamodelConfig::new());
    assert!(!command_enabled(&metamodel, "submit"));
}

// ========== TEST: type_level_marker_applies_when_member_silent ==========
#[test]
fn test_type_level_marker_applies_when_member_silent() {
    // GIVEN a type-level enablement and a silent member
    let mut builder = model_builder();
    builder
        .add_type("Order")
        .marker_with("command_publishing", attrs! { "value" => "enabled" })
        .method(MethodDef::new("submit"))
        .done()
        .unwrap();
    let metamodel = metamodel_with(builder, MetamodelConfig::new());

    // THEN the type-level decision applies
    assert!(command_enabled(&metamodel, "submit"));
}

// ========== TEST: member_type_conflict_reported_member_wins ==========
#[test]
fn test_member_type_conflict_reported_member_wins() {
    // GIVEN member and type declaring contradicting explicit states
    let mut builder = model_builder();
    builder
        .add_type("Order")
        .marker_with("command_publishing", attrs! { "value" => "enabled" })
        .method(
            MethodDef::new("submit")
                .marker_with("command_publishing", attrs! { "value" => "disabled" }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel_with(builder, MetamodelConfig::new());

    // THEN the member-level decision wins and the conflict is recorded
    assert!(!command_enabled(&metamodel, "submit"));
    let spec = metamodel.spec("Order").unwrap();
    assert_eq!(
        spec.violations()
            .of_kind(ViolationKind::AmbiguousPublishing)
            .count(),
        1
    );
}

// ========== TEST: ignore_query_only_uses_semantics ==========
#[test]
fn test_ignore_query_only_uses_semantics() {
    // GIVEN a safe and a mutating action under the ignore-query-only policy
    let mut builder = model_builder();
    builder
        .add_type("Order")
        .method(
            MethodDef::new("total")
                .returns(TypeRef::Float)
                .marker_with("action_semantics", attrs! { "value" => "safe" }),
        )
        .method(
            MethodDef::new("submit")
                .marker_with("action_semantics", attrs! { "value" => "non_idempotent" }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel_with(
        builder,
        MetamodelConfig::new().with_command_publishing(PublishingPolicy::IgnoreQueryOnly),
    );

    // THEN the query stays unpublished and the mutation is published
    assert!(!command_enabled(&metamodel, "total"));
    assert!(command_enabled(&metamodel, "submit"));
}

// ========== TEST: ignore_query_only_without_semantics_fails ==========
#[test]
fn test_ignore_query_only_without_semantics_fails() {
    // GIVEN an action without declared semantics under the policy that
    // needs them
    let metamodel = metamodel_with(
        one_action(None),
        MetamodelConfig::new().with_command_publishing(PublishingPolicy::IgnoreQueryOnly),
    );

    // WHEN resolving the catalog
    let result = metamodel.spec("Order");

    // THEN the build fails fast instead of guessing
    assert!(matches!(
        result,
        Err(CatalogError::Pipeline(
            PipelineError::ConfigurationConflict { .. }
        ))
    ));
}

// ========== TEST: concerns_resolve_independently ==========
#[test]
fn test_concerns_resolve_independently() {
    // GIVEN command publishing enabled by marker and execution publishing
    // left to an always policy
    let mut builder = model_builder();
    builder
        .add_type("Order")
        .method(
            MethodDef::new("submit")
                .marker_with("command_publishing", attrs! { "value" => "disabled" }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel_with(
        builder,
        MetamodelConfig::new().with_execution_publishing(PublishingPolicy::Always),
    );

    let spec = metamodel.spec("Order").unwrap();
    let submit = spec.action("submit").unwrap();

    // THEN the two concerns carry independent decisions
    assert!(!submit
        .facet_as::<PublishingFacet>(FacetKind::CommandPublishing)
        .unwrap()
        .is_enabled());
    assert!(submit
        .facet_as::<PublishingFacet>(FacetKind::ExecutionPublishing)
        .unwrap()
        .is_enabled());
}
