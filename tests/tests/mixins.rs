//! Mixin contribution and splicing.

use chassis_catalog::{ActionScope, FeatureProvenance, MixedInPolicy};
use chassis_core::{attrs, ViolationKind};
use chassis_model::{FieldDef, MethodDef, TypeRef};
use chassis_tests::fixtures::{customer_domain, metamodel, model_builder};

// ========== TEST: mixin_contributes_action ==========
#[test]
fn test_mixin_contributes_action() {
    // GIVEN the customer domain with the Customer_recentOrders mixin
    let metamodel = metamodel(customer_domain());

    // WHEN resolving the target catalog
    let spec = metamodel.spec("Customer").unwrap();

    // THEN the contributed action appears under the derived member id
    let action = spec.action("recentOrders").unwrap();
    assert_eq!(
        action.provenance(),
        &FeatureProvenance::MixedIn {
            mixin: "Customer_recentOrders".into()
        }
    );
    assert_eq!(
        action.value_ty(),
        &TypeRef::list_of(TypeRef::Object("Order".into()))
    );
}

// ========== TEST: mixin_applies_to_subtypes ==========
#[test]
fn test_mixin_applies_to_subtypes() {
    // GIVEN a mixin targeting Party and a subtype Customer
    let mut builder = model_builder();
    builder.add_type("Party").done().unwrap();
    builder.add_type("Customer").extends("Party").done().unwrap();
    builder
        .add_type("Party_notes")
        .marker_with("mixin", attrs! { "target" => "Party" })
        .field(FieldDef::new("text", TypeRef::String))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN both the target and the subtype carry the member, re-spliced
    // rather than inherited
    for type_name in ["Party", "Customer"] {
        let spec = metamodel.spec(type_name).unwrap();
        let notes = spec.property("notes").unwrap();
        assert_eq!(
            notes.provenance(),
            &FeatureProvenance::MixedIn {
                mixin: "Party_notes".into()
            }
        );
    }
}

// ========== TEST: mixin_property_renamed_to_derived_id ==========
#[test]
fn test_mixin_property_renamed_to_derived_id() {
    // GIVEN a mixin whose single field has a different name than the
    // derived member id
    let mut builder = model_builder();
    builder.add_type("Order").done().unwrap();
    builder
        .add_type("Order_auditTrail")
        .marker_with("mixin", attrs! { "target" => "Order" })
        .field(FieldDef::new("entries", TypeRef::list_of(TypeRef::String)))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN the member id comes from the mixin type name
    let spec = metamodel.spec("Order").unwrap();
    assert!(spec.collection("auditTrail").is_some());
    assert!(spec.member("entries").is_none());
}

// ========== TEST: collision_with_declared_member ==========
#[test]
fn test_collision_with_declared_member() {
    // GIVEN a mixin deriving a member id the target already declares
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .field(FieldDef::new("notes", TypeRef::String))
        .done()
        .unwrap();
    builder
        .add_type("Customer_notes")
        .marker_with("mixin", attrs! { "target" => "Customer" })
        .field(FieldDef::new("text", TypeRef::String))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Customer").unwrap();

    // THEN the declared member wins and the collision is recorded
    assert_eq!(
        spec.violations()
            .of_kind(ViolationKind::AmbiguousMixinMember)
            .count(),
        1
    );
    assert_eq!(
        spec.property("notes").unwrap().provenance(),
        &FeatureProvenance::Declared
    );
}

// ========== TEST: two_mixins_same_member_id ==========
#[test]
fn test_two_mixins_same_member_id() {
    // GIVEN two mixins deriving the same member id for one target
    let mut builder = model_builder();
    builder.add_type("Customer").done().unwrap();
    builder
        .add_type("Crm_summary")
        .marker_with("mixin", attrs! { "target" => "Customer" })
        .field(FieldDef::new("text", TypeRef::String))
        .done()
        .unwrap();
    builder
        .add_type("Billing_summary")
        .marker_with("mixin", attrs! { "target" => "Customer" })
        .field(FieldDef::new("text", TypeRef::String))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Customer").unwrap();

    // THEN the first contribution wins and the ambiguity is recorded with
    // both mixin names
    let violation = spec
        .violations()
        .of_kind(ViolationKind::AmbiguousMixinMember)
        .next()
        .unwrap();
    assert!(violation.message.contains("Crm_summary"));
    assert!(violation.message.contains("Billing_summary"));
    assert_eq!(
        spec.property("summary").unwrap().provenance(),
        &FeatureProvenance::MixedIn {
            mixin: "Crm_summary".into()
        }
    );
}

// ========== TEST: ill_formed_mixin_shapes ==========
#[test]
fn test_ill_formed_mixin_shapes() {
    // GIVEN a mixin with two contributable members and one with an
    // unknown target
    let mut builder = model_builder();
    builder.add_type("Customer").done().unwrap();
    builder
        .add_type("Customer_extras")
        .marker_with("mixin", attrs! { "target" => "Customer" })
        .field(FieldDef::new("a", TypeRef::String))
        .field(FieldDef::new("b", TypeRef::String))
        .done()
        .unwrap();
    builder
        .add_type("Ghost_member")
        .marker_with("mixin", attrs! { "target" => "NoSuchType" })
        .field(FieldDef::new("text", TypeRef::String))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN the two-member mixin is rejected at loader construction
    assert_eq!(
        metamodel
            .model_violations()
            .of_kind(ViolationKind::MixinShape)
            .count(),
        1
    );
    // AND neither mixin contributes anything
    let spec = metamodel.spec("Customer").unwrap();
    assert!(spec.member("extras").is_none());

    // AND the unknown target surfaces on the mixin type's own catalog
    let ghost = metamodel.spec("Ghost_member").unwrap();
    assert_eq!(
        ghost
            .violations()
            .of_kind(ViolationKind::MixinShape)
            .count(),
        1
    );
}

// ========== TEST: mixed_in_policy_filters_actions ==========
#[test]
fn test_mixed_in_policy_filters_actions() {
    // GIVEN the customer domain
    let metamodel = metamodel(customer_domain());
    let spec = metamodel.spec("Customer").unwrap();

    // WHEN enumerating with and without mixed-in members
    let with: Vec<_> = spec
        .actions(ActionScope::Production, MixedInPolicy::Include)
        .map(|f| f.name().to_string())
        .collect();
    let without: Vec<_> = spec
        .actions(ActionScope::Production, MixedInPolicy::Exclude)
        .map(|f| f.name().to_string())
        .collect();

    // THEN the contributed action is filtered by the policy
    assert!(with.contains(&"recentOrders".to_string()));
    assert!(!without.contains(&"recentOrders".to_string()));
    assert!(without.contains(&"placeOrder".to_string()));
}

// ========== TEST: mixin_action_with_parameters ==========
#[test]
fn test_mixin_action_with_parameters() {
    // GIVEN a mixin contributing an action with a parameter
    let mut builder = model_builder();
    builder.add_type("Order").done().unwrap();
    builder
        .add_type("Order_reassign")
        .marker_with("mixin", attrs! { "target" => "Order" })
        .method(MethodDef::new("reassign").param("owner", TypeRef::String))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Order").unwrap();
    let action = spec.action("reassign").unwrap();
    assert_eq!(action.params().len(), 1);
    assert_eq!(action.param(0).unwrap().value_ty(), &TypeRef::String);
}
