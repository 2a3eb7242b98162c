//! Explicit-constraints mode scenarios.

use assay_tests::prelude::*;
use pretty_assertions::assert_eq;

fn probe_validator(schema: Schema) -> Validator {
    let mut registry = HandlerRegistry::new();
    registry.register(
        probe_id(),
        HandlerSpec::new(|_| Ok(Box::new(ProbeValidator))),
    );
    Validator::with_instantiator(Arc::new(schema), Instantiator::new(registry))
}

#[test]
fn test_explicit_constraint_applies_to_the_value_itself() {
    // GIVEN an explicit probe constraint
    let validator = probe_validator(SchemaBuilder::new().build());
    let constraints: Vec<Arc<dyn Constraint>> =
        vec![Arc::new(ProbeConstraint::new(probe_id(), "probed"))];
    let target = Instance::new("Order").set("reference", "A-1");

    // WHEN validating with it
    let violations = validator
        .validate_with(&Value::Object(target), &constraints)
        .unwrap();

    // THEN one violation anchored at the type name, not a field
    assert_eq!(violations.len(), 1);
    assert_eq!(violations.all()[0].path, "Order");
    assert_eq!(violations.all()[0].message, "probed");
}

#[test]
fn test_explicit_constraints_ignore_declared_metadata() {
    // GIVEN a schema that would flag the order, but a probe-only explicit
    // list
    let validator = probe_validator(order_schema());
    let constraints: Vec<Arc<dyn Constraint>> =
        vec![Arc::new(ProbeConstraint::new(probe_id(), "probed"))];
    let failing_order = Instance::new("Order")
        .set("reference", "")
        .set("quantity", -1i64);

    // WHEN validating with explicit constraints
    let violations = validator
        .validate_with(&Value::Object(failing_order), &constraints)
        .unwrap();

    // THEN only the explicit constraint ran
    assert_eq!(violations.len(), 1);
    assert_eq!(violations.all()[0].message, "probed");
}

#[test]
fn test_explicit_list_runs_once_per_element() {
    let validator = probe_validator(SchemaBuilder::new().build());
    let constraints: Vec<Arc<dyn Constraint>> =
        vec![Arc::new(ProbeConstraint::new(probe_id(), "probed"))];
    let values = Value::List(vec![
        Value::Object(Instance::new("Order")),
        Value::Object(Instance::new("Order")),
    ]);

    let violations = validator.validate_with(&values, &constraints).unwrap();

    // Explicit mode anchors every element at its own type name.
    assert_eq!(violations.len(), 2);
    assert_eq!(violations.all()[0].path, "Order");
    assert_eq!(violations.all()[1].path, "Order");
}

#[test]
fn test_explicit_cascade_is_equivalent_to_declared_mode() {
    // GIVEN a failing order
    let validator = Validator::new(Arc::new(order_schema()));
    let order = || {
        Instance::new("Order")
            .set("reference", "")
            .set("quantity", -2i64)
    };

    // WHEN validating with an explicit Cascade vs. plain declared mode
    let cascade: Vec<Arc<dyn Constraint>> = vec![Arc::new(Cascade::new())];
    let explicit = validator
        .validate_with(&Value::Object(order()), &cascade)
        .unwrap();
    let declared = validator.validate(&Value::Object(order())).unwrap();

    // THEN the same violation set with the same paths
    assert_eq!(explicit, declared);
    assert_eq!(explicit.len(), 2);
    assert_eq!(explicit.all()[0].path, "Order.reference");
}

#[test]
fn test_cascade_among_explicit_constraints_discards_the_whole_list() {
    // GIVEN an explicit list mixing a probe with a Cascade
    let validator = probe_validator(order_schema());
    let constraints: Vec<Arc<dyn Constraint>> = vec![
        Arc::new(ProbeConstraint::new(probe_id(), "probed")),
        Arc::new(Cascade::new()),
    ];
    let order = Instance::new("Order")
        .set("reference", "")
        .set("quantity", 1i64);

    // WHEN validating
    let violations = validator
        .validate_with(&Value::Object(order), &constraints)
        .unwrap();

    // THEN the probe never ran; only declared metadata did
    assert_eq!(violations.len(), 1);
    assert_eq!(violations.all()[0].message, "blank reference");
}

#[test]
fn test_empty_explicit_list_falls_back_to_declared_mode() {
    let validator = Validator::new(Arc::new(order_schema()));
    let order = Instance::new("Order")
        .set("reference", "")
        .set("quantity", 1i64);

    let violations = validator
        .validate_with(&Value::Object(order), &[])
        .unwrap();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations.all()[0].path, "Order.reference");
}

#[test]
fn test_explicit_mode_still_rejects_malformed_input() {
    let validator = probe_validator(SchemaBuilder::new().build());
    let constraints: Vec<Arc<dyn Constraint>> =
        vec![Arc::new(ProbeConstraint::new(probe_id(), "probed"))];
    let values = Value::List(vec![Value::Int(1)]);

    let result = validator.validate_with(&values, &constraints);

    assert!(matches!(result, Err(ValidateError::UnsupportedInput { .. })));
}
