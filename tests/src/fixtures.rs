//! Model-building helpers shared across the integration tests.

use chassis_catalog::Metamodel;
use chassis_core::{attrs, MetamodelConfig, Value};
use chassis_model::{DomainModelBuilder, FieldDef, MethodDef, TypeRef};
use chassis_pipeline::vocab;
use std::sync::Arc;

/// A model builder with the standard marker vocabulary declared.
pub fn model_builder() -> DomainModelBuilder {
    let mut builder = DomainModelBuilder::new();
    vocab::declare_vocabulary(builder.markers()).expect("vocabulary declares cleanly");
    builder
}

/// Finish a builder into a metamodel with default configuration.
pub fn metamodel(builder: DomainModelBuilder) -> Metamodel {
    metamodel_with(builder, MetamodelConfig::new())
}

/// Finish a builder into a metamodel with the given configuration.
pub fn metamodel_with(builder: DomainModelBuilder, config: MetamodelConfig) -> Metamodel {
    Metamodel::new(Arc::new(builder.build()), config)
}

/// A small customer/order domain exercising fields, actions, companions,
/// and one mixin. Used by tests that need a realistic model rather than a
/// minimal one.
pub fn customer_domain() -> DomainModelBuilder {
    let mut builder = model_builder();

    builder
        .add_type("Order")
        .field(FieldDef::new("total", TypeRef::Float))
        .done()
        .expect("Order declares");

    builder
        .add_type("Customer")
        .marker_with("nature", attrs! { "value" => "entity" })
        .field(
            FieldDef::new("firstName", TypeRef::String)
                .marker_with("max_length", attrs! { "value" => 50i64 }),
        )
        .field(FieldDef::new("lastName", TypeRef::String))
        .field(FieldDef::new("orders", TypeRef::list_of(TypeRef::Object("Order".into()))))
        .method(
            MethodDef::new("placeOrder")
                .param("quantity", TypeRef::Int)
                .returns(TypeRef::Object("Order".into()))
                .marker_with("action_semantics", attrs! { "value" => "non_idempotent" }),
        )
        .method(
            MethodDef::new("hideLastName")
                .returns(TypeRef::Bool)
                .body(|subject, _| {
                    Value::Bool(subject.get("anonymous") == Some(&Value::Bool(true)))
                }),
        )
        .done()
        .expect("Customer declares");

    builder
        .add_type("Customer_recentOrders")
        .marker_with("mixin", attrs! { "target" => "Customer" })
        .method(
            MethodDef::new("recentOrders")
                .returns(TypeRef::list_of(TypeRef::Object("Order".into())))
                .marker_with("action_semantics", attrs! { "value" => "safe" }),
        )
        .done()
        .expect("mixin declares");

    builder
}
