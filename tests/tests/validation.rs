//! The whole-model validation pass.

use chassis_core::{attrs, MetamodelConfig, ViolationKind};
use chassis_model::{FieldDef, MethodDef, TypeRef};
use chassis_tests::fixtures::{customer_domain, metamodel, metamodel_with, model_builder};
use chassis_validate::{ValidationError, ValidationPass};

// ========== TEST: clean_model_passes ==========
#[test]
fn test_clean_model_passes() {
    // GIVEN the customer domain, which is well-formed
    let metamodel = metamodel(customer_domain());

    // WHEN validating
    let report = ValidationPass::run(&metamodel).unwrap();

    // THEN the model is valid and throwing is a no-op
    assert!(report.is_valid());
    report.throw_if_invalid().unwrap();
}

// ========== TEST: report_aggregates_catalog_violations ==========
#[test]
fn test_report_aggregates_catalog_violations() {
    // GIVEN overloads on two different types
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .method(MethodDef::new("notify"))
        .method(MethodDef::new("notify").param("message", TypeRef::String))
        .done()
        .unwrap();
    builder
        .add_type("Order")
        .method(MethodDef::new("submit"))
        .method(MethodDef::new("submit").param("force", TypeRef::Bool))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // WHEN validating
    let report = ValidationPass::run(&metamodel).unwrap();

    // THEN both types' violations land in one report
    assert_eq!(report.of_kind(ViolationKind::OverloadedMember).count(), 2);
    let type_names: Vec<_> = report
        .violations()
        .all()
        .iter()
        .map(|v| v.identifier.type_name.clone())
        .collect();
    assert!(type_names.contains(&"Customer".to_string()));
    assert!(type_names.contains(&"Order".to_string()));
}

// ========== TEST: orphan_detection_waits_for_all_builds ==========
#[test]
fn test_orphan_detection_waits_for_all_builds() {
    // GIVEN a companion for a member that does not exist
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .field(FieldDef::new("firstName", TypeRef::String))
        .method(
            MethodDef::new("hideMiddleName")
                .returns(TypeRef::Bool)
                .body(|_, _| chassis_core::Value::Bool(true)),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let report = ValidationPass::run(&metamodel).unwrap();
    let orphan = report
        .of_kind(ViolationKind::OrphanedSupportMethod)
        .next()
        .unwrap();
    assert_eq!(orphan.identifier.member.as_deref(), Some("hideMiddleName"));
}

// ========== TEST: strict_nature_flags_defaulted_types ==========
#[test]
fn test_strict_nature_flags_defaulted_types() {
    // GIVEN strict nature mode with one marked type, one unmarked type,
    // an interface, and a mixin
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .marker_with("nature", attrs! { "value" => "entity" })
        .done()
        .unwrap();
    builder.add_type("Order").done().unwrap();
    builder.add_interface("Auditable").done().unwrap();
    builder
        .add_type("Customer_notes")
        .marker_with("mixin", attrs! { "target" => "Customer" })
        .field(FieldDef::new("text", TypeRef::String))
        .done()
        .unwrap();
    let metamodel = metamodel_with(builder, MetamodelConfig::new().with_strict_nature(true));

    // WHEN validating
    let report = ValidationPass::run(&metamodel).unwrap();

    // THEN only the unmarked domain type is flagged
    let flagged: Vec<_> = report
        .of_kind(ViolationKind::MissingNature)
        .map(|v| v.identifier.type_name.clone())
        .collect();
    assert_eq!(flagged, vec!["Order"]);
}

// ========== TEST: strict_nature_off_accepts_fallback ==========
#[test]
fn test_strict_nature_off_accepts_fallback() {
    // GIVEN an unmarked type without strict mode
    let mut builder = model_builder();
    builder.add_type("Order").done().unwrap();
    let metamodel = metamodel(builder);

    let report = ValidationPass::run(&metamodel).unwrap();
    assert!(report.is_valid());
}

// ========== TEST: model_level_mixin_shape_surfaces ==========
#[test]
fn test_model_level_mixin_shape_surfaces() {
    // GIVEN a mixin with two contributable members
    let mut builder = model_builder();
    builder.add_type("Customer").done().unwrap();
    builder
        .add_type("Customer_extras")
        .marker_with("mixin", attrs! { "target" => "Customer" })
        .field(FieldDef::new("a", TypeRef::String))
        .field(FieldDef::new("b", TypeRef::String))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let report = ValidationPass::run(&metamodel).unwrap();
    assert_eq!(report.of_kind(ViolationKind::MixinShape).count(), 1);
}

// ========== TEST: throw_renders_every_violation ==========
#[test]
fn test_throw_renders_every_violation() {
    // GIVEN a model with an overload
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .method(MethodDef::new("notify"))
        .method(MethodDef::new("notify").param("message", TypeRef::String))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // WHEN throwing the report
    let report = ValidationPass::run(&metamodel).unwrap();
    let err = report.throw_if_invalid().unwrap_err();

    // THEN the message carries the count, the kind tag, and the member
    match err {
        ValidationError::Invalid { count, rendered } => {
            assert_eq!(count, 1);
            assert!(rendered.contains("[overloaded_member]"));
            assert!(rendered.contains("Customer#notify"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
