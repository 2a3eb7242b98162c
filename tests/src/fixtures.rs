//! Shared schemas, instances, and custom constraints.

use assay_constraint::{Constraint, HandlerId, Violation, ViolationList};
use assay_core::ValidatedValue;
use assay_handler::{expect_constraint, ConstraintValidator, HandlerResult};
use assay_schema::{Schema, SchemaBuilder};
use assay_constraint::assert::{Cascade, Count, NotBlank, Positive};
use std::any::Any;
use std::sync::Arc;

/// An order line: `reference` must be non-blank, `quantity` positive.
pub fn order_schema() -> Schema {
    let mut builder = SchemaBuilder::new();
    builder
        .add_type("Order")
        .field("reference", vec![Arc::new(NotBlank::new("blank reference"))])
        .field("quantity", vec![Arc::new(Positive::new("non-positive quantity"))])
        .done()
        .unwrap();
    builder.build()
}

/// A three-level cascade chain: Company -> Department -> Employee, with a
/// cascading list of departments and a cascading single manager.
pub fn company_schema() -> Schema {
    let mut builder = SchemaBuilder::new();
    builder
        .add_type("Company")
        .field("name", vec![Arc::new(NotBlank::new("blank company name"))])
        .field("departments", vec![Arc::new(Cascade::new())])
        .done()
        .unwrap();
    builder
        .add_type("Department")
        .field("name", vec![Arc::new(NotBlank::new("blank department name"))])
        .field("manager", vec![Arc::new(Cascade::new())])
        .done()
        .unwrap();
    builder
        .add_type("Employee")
        .field("badge", vec![Arc::new(Positive::new("non-positive badge"))])
        .done()
        .unwrap();
    builder.build()
}

/// The count scenario type: `X` whose `items` list must hold one element.
pub fn count_schema() -> Schema {
    let mut builder = SchemaBuilder::new();
    builder
        .add_type("X")
        .field("items", vec![Arc::new(Count::new(1, "expected one item"))])
        .done()
        .unwrap();
    builder.build()
}

/// A custom constraint whose handler id is whatever the test wires in.
/// Used to exercise resolution failure modes end to end.
#[derive(Debug, Clone)]
pub struct ProbeConstraint {
    pub handler: HandlerId,
    pub message: String,
}

impl ProbeConstraint {
    pub fn new(handler: HandlerId, message: impl Into<String>) -> Self {
        Self {
            handler,
            message: message.into(),
        }
    }
}

impl Constraint for ProbeConstraint {
    fn handler(&self) -> HandlerId {
        self.handler.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A handler that reports every probed value. Lets scenarios attach a
/// violation anywhere, including at class level.
#[derive(Debug, Clone, Default)]
pub struct ProbeValidator;

impl ConstraintValidator for ProbeValidator {
    fn validate(
        &self,
        value: &ValidatedValue,
        constraint: &dyn Constraint,
    ) -> HandlerResult<ViolationList> {
        let constraint = expect_constraint::<ProbeConstraint>(constraint, "Probe")?;

        let mut violations = ViolationList::new();
        violations.push(Violation::new(
            value.value().clone(),
            &constraint.message,
            value.path(),
        ));
        Ok(violations)
    }
}

/// The handler id `ProbeValidator` is conventionally registered under.
pub fn probe_id() -> HandlerId {
    HandlerId::Custom("Probe".into())
}
