//! Member merge over supertypes and interfaces.

use chassis_catalog::FeatureProvenance;
use chassis_core::ViolationKind;
use chassis_model::{FieldDef, MethodDef, TypeRef};
use chassis_tests::fixtures::{metamodel, model_builder};

// ========== TEST: members_inherited_with_provenance ==========
#[test]
fn test_members_inherited_with_provenance() {
    // GIVEN Customer extends Party
    let mut builder = model_builder();
    builder
        .add_type("Party")
        .field(FieldDef::new("name", TypeRef::String))
        .done()
        .unwrap();
    builder
        .add_type("Customer")
        .extends("Party")
        .field(FieldDef::new("loyaltyPoints", TypeRef::Int))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // WHEN resolving the subtype catalog
    let spec = metamodel.spec("Customer").unwrap();

    // THEN the inherited member carries its declaring type
    assert_eq!(
        spec.property("name").unwrap().provenance(),
        &FeatureProvenance::Inherited {
            from: "Party".into()
        }
    );
    assert_eq!(
        spec.property("loyaltyPoints").unwrap().provenance(),
        &FeatureProvenance::Declared
    );
}

// ========== TEST: deep_chain_keeps_original_declarer ==========
#[test]
fn test_deep_chain_keeps_original_declarer() {
    // GIVEN a three-level chain where only the root declares the member
    let mut builder = model_builder();
    builder
        .add_type("Party")
        .field(FieldDef::new("name", TypeRef::String))
        .done()
        .unwrap();
    builder.add_type("Person").extends("Party").done().unwrap();
    builder
        .add_type("Customer")
        .extends("Person")
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN the leaf still names the root as the declarer
    let spec = metamodel.spec("Customer").unwrap();
    assert_eq!(
        spec.property("name").unwrap().provenance(),
        &FeatureProvenance::Inherited {
            from: "Party".into()
        }
    );
}

// ========== TEST: interface_members_inherited ==========
#[test]
fn test_interface_members_inherited() {
    // GIVEN a type implementing an interface with a member
    let mut builder = model_builder();
    builder
        .add_interface("Auditable")
        .field(FieldDef::new("updatedAt", TypeRef::String))
        .done()
        .unwrap();
    builder
        .add_type("Order")
        .implements("Auditable")
        .field(FieldDef::new("total", TypeRef::Float))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Order").unwrap();
    assert_eq!(
        spec.property("updatedAt").unwrap().provenance(),
        &FeatureProvenance::Inherited {
            from: "Auditable".into()
        }
    );
}

// ========== TEST: compatible_override_replaces_in_place ==========
#[test]
fn test_compatible_override_replaces_in_place() {
    // GIVEN a subtype redeclaring an inherited property with the same shape
    let mut builder = model_builder();
    builder
        .add_type("Party")
        .field(FieldDef::new("name", TypeRef::String))
        .field(FieldDef::new("email", TypeRef::String))
        .done()
        .unwrap();
    builder
        .add_type("Customer")
        .extends("Party")
        .field(FieldDef::new("email", TypeRef::String).marker("hidden"))
        .field(FieldDef::new("loyaltyPoints", TypeRef::Int))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Customer").unwrap();

    // THEN no violation, the local declaration wins, and the member keeps
    // the inherited catalog slot
    assert!(spec.violations().is_empty());
    let email = spec.property("email").unwrap();
    assert_eq!(email.provenance(), &FeatureProvenance::Declared);
    assert!(email.has_facet(chassis_facet::FacetKind::Hidden));

    let names: Vec<_> = spec.members().map(|f| f.name().to_string()).collect();
    assert_eq!(names, vec!["name", "email", "loyaltyPoints"]);
}

// ========== TEST: incompatible_override_reported ==========
#[test]
fn test_incompatible_override_reported() {
    // GIVEN a subtype redeclaring an inherited property with another type
    let mut builder = model_builder();
    builder
        .add_type("Party")
        .field(FieldDef::new("name", TypeRef::String))
        .done()
        .unwrap();
    builder
        .add_type("Customer")
        .extends("Party")
        .field(FieldDef::new("name", TypeRef::Int))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Customer").unwrap();

    // THEN the violation is recorded and the local declaration still wins
    assert_eq!(
        spec.violations()
            .of_kind(ViolationKind::IncompatibleOverride)
            .count(),
        1
    );
    assert_eq!(spec.property("name").unwrap().value_ty(), &TypeRef::Int);
}

// ========== TEST: overloading_inherited_action_rejected ==========
#[test]
fn test_overloading_inherited_action_rejected() {
    // GIVEN a subtype declaring an inherited action name with a different
    // parameter list
    let mut builder = model_builder();
    builder
        .add_type("Party")
        .method(MethodDef::new("notify"))
        .done()
        .unwrap();
    builder
        .add_type("Customer")
        .extends("Party")
        .method(MethodDef::new("notify").param("message", TypeRef::String))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Customer").unwrap();

    // THEN an overload violation is recorded, not a silent overload
    assert_eq!(
        spec.violations()
            .of_kind(ViolationKind::OverloadedMember)
            .count(),
        1
    );
    assert_eq!(spec.action("notify").unwrap().params().len(), 1);
}

// ========== TEST: local_overload_rejected ==========
#[test]
fn test_local_overload_rejected() {
    // GIVEN two same-named action declarations on one type
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .method(MethodDef::new("placeOrder").param("quantity", TypeRef::Int))
        .method(MethodDef::new("placeOrder"))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    let spec = metamodel.spec("Customer").unwrap();

    // THEN the violation counts the declarations and the first one wins
    let violation = spec
        .violations()
        .of_kind(ViolationKind::OverloadedMember)
        .next()
        .unwrap();
    assert!(violation.message.contains("2 times"));
    assert_eq!(spec.action("placeOrder").unwrap().params().len(), 1);
}

// ========== TEST: supertype_runs_before_interfaces ==========
#[test]
fn test_supertype_runs_before_interfaces() {
    // GIVEN a supertype and an interface both declaring the same property
    let mut builder = model_builder();
    builder
        .add_interface("Named")
        .field(FieldDef::new("name", TypeRef::String))
        .done()
        .unwrap();
    builder
        .add_type("Party")
        .field(FieldDef::new("name", TypeRef::String))
        .done()
        .unwrap();
    builder
        .add_type("Customer")
        .extends("Party")
        .implements("Named")
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN the supertype's member takes the slot
    let spec = metamodel.spec("Customer").unwrap();
    assert!(spec.violations().is_empty());
    assert_eq!(
        spec.property("name").unwrap().provenance(),
        &FeatureProvenance::Inherited {
            from: "Party".into()
        }
    );
}
