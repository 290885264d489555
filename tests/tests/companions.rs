//! Companion-method binding, end to end.

use chassis_core::{attrs, Value, ViolationKind};
use chassis_model::{FieldDef, MethodDef, TypeRef};
use chassis_tests::fixtures::{customer_domain, metamodel, model_builder};
use chassis_validate::ValidationPass;

// ========== TEST: hide_companion_evaluates_against_subject ==========
#[test]
fn test_hide_companion_evaluates_against_subject() {
    // GIVEN the customer domain with hideLastName bound to lastName
    let metamodel = metamodel(customer_domain());
    let spec = metamodel.spec("Customer").unwrap();
    let last_name = spec.property("lastName").unwrap();

    // THEN visibility follows the subject's state
    assert!(last_name.is_hidden(&attrs! { "anonymous" => true }));
    assert!(!last_name.is_hidden(&attrs! { "anonymous" => false }));
    assert!(!last_name.is_hidden(&attrs!()));

    // AND the companion was consumed
    assert!(metamodel
        .consumed()
        .is_consumed(spec.type_id(), "hideLastName"));
}

// ========== TEST: disable_companion_returns_reason ==========
#[test]
fn test_disable_companion_returns_reason() {
    // GIVEN a disable companion returning a reason string, or null when
    // the member is usable
    let mut builder = model_builder();
    builder
        .add_type("Order")
        .field(FieldDef::new("total", TypeRef::Float))
        .method(
            MethodDef::new("disableTotal")
                .returns(TypeRef::String)
                .body(|subject, _| {
                    if subject.get("frozen") == Some(&Value::Bool(true)) {
                        Value::String("order is frozen".into())
                    } else {
                        Value::Null
                    }
                }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Order").unwrap();
    let total = spec.property("total").unwrap();
    assert_eq!(
        total.disabled_reason(&attrs! { "frozen" => true }),
        Some("order is frozen".to_string())
    );
    assert_eq!(total.disabled_reason(&attrs!()), None);
}

// ========== TEST: validate_companion_rejects_proposed_value ==========
#[test]
fn test_validate_companion_rejects_proposed_value() {
    // GIVEN a validate companion for a property
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .field(FieldDef::new("firstName", TypeRef::String))
        .method(
            MethodDef::new("validateFirstName")
                .param("proposed", TypeRef::String)
                .returns(TypeRef::String)
                .body(|_, args| match args.first().and_then(|v| v.as_str()) {
                    Some("") => Value::String("must not be empty".into()),
                    _ => Value::Null,
                }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Customer").unwrap();
    let first_name = spec.property("firstName").unwrap();
    assert_eq!(
        first_name.validate(&attrs!(), &Value::String("".into())),
        Some("must not be empty".to_string())
    );
    assert_eq!(
        first_name.validate(&attrs!(), &Value::String("Ada".into())),
        None
    );
}

// ========== TEST: default_and_choices_companions ==========
#[test]
fn test_default_and_choices_companions() {
    // GIVEN default and choices companions for one property
    let mut builder = model_builder();
    builder
        .add_type("Order")
        .field(FieldDef::new("status", TypeRef::String))
        .method(
            MethodDef::new("defaultStatus")
                .returns(TypeRef::String)
                .body(|_, _| Value::String("draft".into())),
        )
        .method(
            MethodDef::new("choicesStatus")
                .returns(TypeRef::list_of(TypeRef::String))
                .body(|_, _| {
                    Value::List(vec![
                        Value::String("draft".into()),
                        Value::String("submitted".into()),
                    ])
                }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Order").unwrap();
    let status = spec.property("status").unwrap();
    assert_eq!(
        status.default_value(&attrs!()),
        Some(Value::String("draft".into()))
    );
    assert_eq!(status.choices(&attrs!()).len(), 2);
}

// ========== TEST: parameter_companions_bind_by_index ==========
#[test]
fn test_parameter_companions_bind_by_index() {
    // GIVEN indexed default and choices companions for an action parameter
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .method(MethodDef::new("placeOrder").param("quantity", TypeRef::Int))
        .method(
            MethodDef::new("default0PlaceOrder")
                .returns(TypeRef::Int)
                .body(|_, _| Value::Int(1)),
        )
        .method(
            MethodDef::new("choices0PlaceOrder")
                .returns(TypeRef::list_of(TypeRef::Int))
                .body(|_, _| Value::List(vec![Value::Int(1), Value::Int(5), Value::Int(10)])),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Customer").unwrap();
    let action = spec.action("placeOrder").unwrap();
    let quantity = action.param(0).unwrap();
    assert_eq!(quantity.default_value(&attrs!()), Some(Value::Int(1)));
    assert_eq!(quantity.choices(&attrs!()).len(), 3);
}

// ========== TEST: wrong_signature_leaves_orphan ==========
#[test]
fn test_wrong_signature_leaves_orphan() {
    // GIVEN a hide companion with the wrong return type
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .field(FieldDef::new("firstName", TypeRef::String))
        .method(
            MethodDef::new("hideFirstName")
                .returns(TypeRef::String)
                .body(|_, _| Value::Bool(true)),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN nothing binds and the validation pass reports the orphan
    let spec = metamodel.spec("Customer").unwrap();
    assert!(!spec
        .property("firstName")
        .unwrap()
        .has_facet(chassis_facet::FacetKind::Hidden));

    let report = ValidationPass::run(&metamodel).unwrap();
    assert_eq!(
        report
            .of_kind(ViolationKind::OrphanedSupportMethod)
            .count(),
        1
    );
}

// ========== TEST: bodiless_companion_is_orphan ==========
#[test]
fn test_bodiless_companion_is_orphan() {
    // GIVEN a correctly shaped companion without a host-supplied body
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .field(FieldDef::new("firstName", TypeRef::String))
        .method(MethodDef::new("hideFirstName").returns(TypeRef::Bool))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Customer").unwrap();
    assert!(!spec
        .property("firstName")
        .unwrap()
        .has_facet(chassis_facet::FacetKind::Hidden));

    let report = ValidationPass::run(&metamodel).unwrap();
    assert_eq!(
        report
            .of_kind(ViolationKind::OrphanedSupportMethod)
            .count(),
        1
    );
}

// ========== TEST: companion_on_mixin_binds_to_contribution ==========
#[test]
fn test_companion_on_mixin_binds_to_contribution() {
    // GIVEN a mixin whose own companion hides the contributed action
    let mut builder = model_builder();
    builder.add_type("Order").done().unwrap();
    builder
        .add_type("Order_archive")
        .marker_with("mixin", attrs! { "target" => "Order" })
        .method(MethodDef::new("archive"))
        .method(
            MethodDef::new("hideArchive")
                .returns(TypeRef::Bool)
                .body(|subject, _| {
                    Value::Bool(subject.get("archived") == Some(&Value::Bool(true)))
                }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Order").unwrap();
    let archive = spec.action("archive").unwrap();
    assert!(archive.is_hidden(&attrs! { "archived" => true }));
    assert!(!archive.is_hidden(&attrs! { "archived" => false }));
}

// ========== TEST: companions_are_not_members ==========
#[test]
fn test_companions_are_not_members() {
    // GIVEN the customer domain
    let metamodel = metamodel(customer_domain());
    let spec = metamodel.spec("Customer").unwrap();

    // THEN support methods never surface as actions
    assert!(spec.member("hideLastName").is_none());
}
