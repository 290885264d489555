//! Deterministic catalog ordering.

use chassis_catalog::Metamodel;
use chassis_core::attrs;
use chassis_model::{FieldDef, MethodDef, TypeRef};
use chassis_tests::fixtures::{metamodel, model_builder};

fn member_names(metamodel: &Metamodel, type_name: &str) -> Vec<String> {
    metamodel
        .spec(type_name)
        .unwrap()
        .members()
        .map(|f| f.name().to_string())
        .collect()
}

// ========== TEST: members_sorted_by_group_then_sequence ==========
#[test]
fn test_members_sorted_by_group_then_sequence() {
    // GIVEN members spread over two groups with dewey sequences
    let mut builder = model_builder();
    builder
        .add_type("Customer")
        .field(
            FieldDef::new("email", TypeRef::String)
                .marker_with("member_order", attrs! { "value" => "details:2" }),
        )
        .field(
            FieldDef::new("phone", TypeRef::String)
                .marker_with("member_order", attrs! { "value" => "details:1.2" }),
        )
        .field(
            FieldDef::new("name", TypeRef::String)
                .marker_with("member_order", attrs! { "value" => "General:1" }),
        )
        .method(
            MethodDef::new("archive")
                .marker_with("member_order", attrs! { "value" => "details:1.10" }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN groups sort lexicographically and sequences numerically
    assert_eq!(
        member_names(&metamodel, "Customer"),
        vec!["name", "phone", "archive", "email"]
    );
}

// ========== TEST: unordered_members_keep_merge_order ==========
#[test]
fn test_unordered_members_keep_merge_order() {
    // GIVEN no ordering markers at all
    let mut builder = model_builder();
    builder
        .add_type("Order")
        .field(FieldDef::new("total", TypeRef::Float))
        .field(FieldDef::new("notes", TypeRef::String))
        .method(MethodDef::new("submit"))
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN everyone shares the default key and the stable sort keeps the
    // declaration order
    assert_eq!(
        member_names(&metamodel, "Order"),
        vec!["total", "notes", "submit"]
    );
}

// ========== TEST: numeric_segments_order_numerically ==========
#[test]
fn test_numeric_segments_order_numerically() {
    // GIVEN sequences where lexicographic ordering would be wrong
    let mut builder = model_builder();
    builder
        .add_type("Order")
        .field(
            FieldDef::new("ten", TypeRef::String)
                .marker_with("member_order", attrs! { "value" => "g:10" }),
        )
        .field(
            FieldDef::new("two", TypeRef::String)
                .marker_with("member_order", attrs! { "value" => "g:2" }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN 2 comes before 10
    assert_eq!(member_names(&metamodel, "Order"), vec!["two", "ten"]);
}

// ========== TEST: malformed_spec_falls_back_to_default ==========
#[test]
fn test_malformed_spec_falls_back_to_default() {
    // GIVEN one malformed ordering specification among valid ones
    let mut builder = model_builder();
    builder
        .add_type("Order")
        .field(
            FieldDef::new("broken", TypeRef::String)
                .marker_with("member_order", attrs! { "value" => "a:1:2" }),
        )
        .field(
            FieldDef::new("first", TypeRef::String)
                .marker_with("member_order", attrs! { "value" => "General:0" }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN the malformed member sorts under the default key ("General:1")
    // rather than failing the build
    assert_eq!(member_names(&metamodel, "Order"), vec!["first", "broken"]);
    let spec = metamodel.spec("Order").unwrap();
    assert!(spec.violations().is_empty());
}

// ========== TEST: inherited_and_mixed_in_share_the_ordering ==========
#[test]
fn test_inherited_and_mixed_in_share_the_ordering() {
    // GIVEN inherited, declared, and mixed-in members with explicit keys
    let mut builder = model_builder();
    builder
        .add_type("Party")
        .field(
            FieldDef::new("name", TypeRef::String)
                .marker_with("member_order", attrs! { "value" => "General:2" }),
        )
        .done()
        .unwrap();
    builder
        .add_type("Customer")
        .extends("Party")
        .field(
            FieldDef::new("email", TypeRef::String)
                .marker_with("member_order", attrs! { "value" => "General:3" }),
        )
        .done()
        .unwrap();
    builder
        .add_type("Customer_badge")
        .marker_with("mixin", attrs! { "target" => "Customer" })
        .field(
            FieldDef::new("label", TypeRef::String)
                .marker_with("member_order", attrs! { "value" => "General:1" }),
        )
        .done()
        .unwrap();
    let metamodel = metamodel(builder);

    // THEN all three sort together in one sequence
    assert_eq!(
        member_names(&metamodel, "Customer"),
        vec!["badge", "name", "email"]
    );
}
