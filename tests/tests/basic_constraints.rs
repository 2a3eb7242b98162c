//! Leaf constraint scenarios against declared metadata.

use assay_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_object_with_no_attached_constraints_yields_empty_list() {
    // GIVEN a validator whose schema knows nothing about the type
    let validator = Validator::new(Arc::new(SchemaBuilder::new().build()));
    let stranger = Instance::new("Stranger").set("anything", 42i64);

    // WHEN validating
    let violations = validator.validate(&Value::Object(stranger)).unwrap();

    // THEN no violations
    assert!(violations.is_empty());
}

#[test]
fn test_failing_field_constraint_reports_type_dot_field_path() {
    // GIVEN an order with a blank reference
    let validator = Validator::new(Arc::new(order_schema()));
    let order = Instance::new("Order")
        .set("reference", "")
        .set("quantity", 3i64);

    // WHEN validating
    let violations = validator.validate(&Value::Object(order)).unwrap();

    // THEN exactly one violation with the configured message
    assert_eq!(violations.len(), 1);
    assert_eq!(violations.all()[0].path, "Order.reference");
    assert_eq!(violations.all()[0].message, "blank reference");
    assert_eq!(violations.all()[0].invalid_value, Value::String(String::new()));
}

#[test]
fn test_count_scenario_reports_the_empty_list() {
    // GIVEN X { items: Count(expected: 1) } with items = []
    let validator = Validator::new(Arc::new(count_schema()));
    let x = Instance::new("X").set("items", Vec::<Value>::new());

    // WHEN validating
    let violations = validator.validate(&Value::Object(x)).unwrap();

    // THEN one violation: path X.items, invalid value []
    assert_eq!(violations.len(), 1);
    assert_eq!(violations.all()[0].path, "X.items");
    assert_eq!(violations.all()[0].invalid_value, Value::List(vec![]));
    assert_eq!(violations.all()[0].message, "expected one item");
}

#[test]
fn test_uninitialized_field_is_skipped_by_ordinary_handlers() {
    // GIVEN an order whose quantity was never assigned
    let validator = Validator::new(Arc::new(order_schema()));
    let order = Instance::new("Order").set("reference", "A-1");

    // WHEN validating
    let violations = validator.validate(&Value::Object(order)).unwrap();

    // THEN the Positive handler skips the missing field entirely
    assert!(violations.is_empty());
}

#[test]
fn test_initialized_constraint_reports_unassigned_fields() {
    // GIVEN a type whose field requires initialization
    let mut builder = SchemaBuilder::new();
    builder
        .add_type("Draft")
        .field("title", vec![Arc::new(Initialized::new("title never set"))])
        .done()
        .unwrap();
    let validator = Validator::new(Arc::new(builder.build()));

    // WHEN validating an instance without the field
    let violations = validator
        .validate(&Value::Object(Instance::new("Draft")))
        .unwrap();

    // THEN the Initialized handler reports it
    assert_eq!(violations.len(), 1);
    assert_eq!(violations.all()[0].path, "Draft.title");
    assert_eq!(violations.all()[0].message, "title never set");

    // AND an explicit null counts as assigned
    let violations = validator
        .validate(&Value::Object(Instance::new("Draft").set("title", Value::Null)))
        .unwrap();
    assert!(violations.is_empty());
}

#[test]
fn test_list_input_produces_indexed_paths() {
    // GIVEN two failing orders as a list
    let validator = Validator::new(Arc::new(order_schema()));
    let orders = Value::List(vec![
        Value::Object(Instance::new("Order").set("reference", "").set("quantity", 1i64)),
        Value::Object(Instance::new("Order").set("reference", "B-2").set("quantity", 0i64)),
    ]);

    // WHEN validating
    let violations = validator.validate(&orders).unwrap();

    // THEN paths carry the element index
    assert_eq!(violations.len(), 2);
    assert_eq!(violations.all()[0].path, "[0].reference");
    assert_eq!(violations.all()[1].path, "[1].quantity");
}

#[test]
fn test_length_range_and_regex_end_to_end() {
    // GIVEN a user schema combining the bounded constraints
    let mut builder = SchemaBuilder::new();
    builder
        .add_type("User")
        .field(
            "handle",
            vec![
                Arc::new(Length::between(3, 12, "handle too short", "handle too long").unwrap()),
                Arc::new(Regex::new(r"^[a-z0-9_]+$", "handle has invalid characters").unwrap()),
            ],
        )
        .field(
            "age",
            vec![Arc::new(Range::between(13.0, 130.0, "too young", "implausible age").unwrap())],
        )
        .done()
        .unwrap();
    let validator = Validator::new(Arc::new(builder.build()));

    // WHEN validating a user failing all three
    let user = Instance::new("User")
        .set("handle", "A!")
        .set("age", 7i64);
    let violations = validator.validate(&Value::Object(user)).unwrap();

    // THEN violations arrive in declaration order with the right messages
    let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(
        messages,
        ["handle too short", "handle has invalid characters", "too young"]
    );

    // AND a conforming user passes clean
    let user = Instance::new("User")
        .set("handle", "ada_l0velace")
        .set("age", 36i64);
    assert!(validator.validate(&Value::Object(user)).unwrap().is_empty());
}

#[test]
fn test_scalar_input_is_rejected_before_traversal() {
    let validator = Validator::new(Arc::new(order_schema()));

    let result = validator.validate(&Value::Int(5));

    assert!(matches!(result, Err(ValidateError::UnsupportedInput { .. })));
}

#[test]
fn test_list_containing_scalar_is_rejected_before_traversal() {
    let validator = Validator::new(Arc::new(order_schema()));
    let values = Value::List(vec![Value::Object(Instance::new("Order")), Value::Bool(true)]);

    let result = validator.validate(&values);

    assert!(matches!(result, Err(ValidateError::UnsupportedInput { .. })));
}

#[test]
fn test_class_level_constraints_run_before_field_constraints() {
    // GIVEN a type carrying a class-level probe and a failing field
    let mut registry = HandlerRegistry::new();
    registry.register(
        probe_id(),
        HandlerSpec::new(|_| Ok(Box::new(ProbeValidator))),
    );

    let mut builder = SchemaBuilder::new();
    builder
        .add_type("Order")
        .constraint(Arc::new(ProbeConstraint::new(probe_id(), "probed")))
        .field("quantity", vec![Arc::new(Positive::new("non-positive quantity"))])
        .done()
        .unwrap();

    let validator =
        Validator::with_instantiator(Arc::new(builder.build()), Instantiator::new(registry));
    let order = Instance::new("Order").set("quantity", 0i64);

    // WHEN validating
    let violations = validator.validate(&Value::Object(order)).unwrap();

    // THEN the class-level violation comes first, anchored at the type path
    assert_eq!(violations.len(), 2);
    assert_eq!(violations.all()[0].path, "Order");
    assert_eq!(violations.all()[0].message, "probed");
    assert_eq!(violations.all()[1].path, "Order.quantity");
}
