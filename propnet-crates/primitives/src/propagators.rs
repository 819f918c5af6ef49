//! Primitive propagators, each computing a single output from its inputs.
//!
//! The arithmetic propagators apply the operators registered by
//! [`install_arithmetic`](crate::install_arithmetic), which has to be called on the registry of the
//! network before it runs.
use log::trace;
use propnet_core::propagation::OperatorPropagator;
use propnet_core::propagation::PropagationContext;
use propnet_core::propagation::PropagationStatus;
use propnet_core::propagation::Priority;
use propnet_core::propagation::Propagator;
use propnet_core::propagation::PropagatorHandle;
use propnet_core::CellId;
use propnet_core::Network;
use propnet_core::NetworkError;
use propnet_core::OperationError;
use propnet_core::Value;

use crate::ADD;
use crate::DIVIDE;
use crate::MULTIPLY;
use crate::SUBTRACT;

/// Adds `lhs + rhs` to `output`.
pub fn adder(
    network: &mut Network,
    lhs: CellId,
    rhs: CellId,
    output: CellId,
) -> PropagatorHandle<OperatorPropagator> {
    network.add_propagator(OperatorPropagator::new(ADD, [lhs, rhs], output).with_name("adder"))
}

/// Adds `lhs - rhs` to `output`.
pub fn subtractor(
    network: &mut Network,
    lhs: CellId,
    rhs: CellId,
    output: CellId,
) -> PropagatorHandle<OperatorPropagator> {
    network.add_propagator(
        OperatorPropagator::new(SUBTRACT, [lhs, rhs], output).with_name("subtractor"),
    )
}

/// Adds `lhs * rhs` to `output`.
pub fn multiplier(
    network: &mut Network,
    lhs: CellId,
    rhs: CellId,
    output: CellId,
) -> PropagatorHandle<OperatorPropagator> {
    network.add_propagator(
        OperatorPropagator::new(MULTIPLY, [lhs, rhs], output).with_name("multiplier"),
    )
}

/// Adds `lhs / rhs` to `output`. Running it with a zero `rhs` fails with
/// [`OperationError::DivisionByZero`].
pub fn divider(
    network: &mut Network,
    lhs: CellId,
    rhs: CellId,
    output: CellId,
) -> PropagatorHandle<OperatorPropagator> {
    network.add_propagator(OperatorPropagator::new(DIVIDE, [lhs, rhs], output).with_name("divider"))
}

/// Adds `value` to `cell` when the network runs.
pub fn constant(
    network: &mut Network,
    value: impl Into<Value>,
    cell: CellId,
) -> PropagatorHandle<Constant> {
    network.add_propagator(Constant {
        value: value.into(),
        output: cell,
    })
}

/// A propagator without inputs which adds a fixed value to its output. It runs once, when it is
/// added to the network.
#[derive(Debug, Clone)]
pub struct Constant {
    value: Value,
    output: CellId,
}

impl Constant {
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Propagator for Constant {
    fn name(&self) -> &str {
        "constant"
    }

    fn inputs(&self) -> &[CellId] {
        &[]
    }

    fn propagate(&self, mut context: PropagationContext) -> PropagationStatus {
        context.add_content(self.output, self.value.clone())
    }

    fn priority(&self) -> Priority {
        Priority::High
    }
}

/// Adds `dividend / divisor` to `output` like a [`divider`], but derives nothing when the divisor
/// is zero or an interval containing zero. Used for the inverse directions of a
/// [`product`](crate::product), where a zero factor says nothing about the other factor.
#[derive(Debug, Clone, Copy)]
pub struct Quotient {
    inputs: [CellId; 2],
    output: CellId,
}

impl Quotient {
    pub fn new(dividend: CellId, divisor: CellId, output: CellId) -> Quotient {
        Quotient {
            inputs: [dividend, divisor],
            output,
        }
    }
}

impl Propagator for Quotient {
    fn name(&self) -> &str {
        "quotient"
    }

    fn inputs(&self) -> &[CellId] {
        &self.inputs
    }

    fn propagate(&self, mut context: PropagationContext) -> PropagationStatus {
        let Some(arguments) = context.contents(&self.inputs) else {
            return Ok(());
        };

        let divisor_contains_zero = match &arguments[1] {
            Value::Interval(interval) => interval.contains(0.0),
            divisor => divisor.as_number() == Some(0.0),
        };
        if divisor_contains_zero {
            trace!("{} skipped, the divisor {} contains zero", self.name(), arguments[1]);
            return Ok(());
        }

        let quotient = context
            .operators()
            .operator(DIVIDE)?
            .call(&arguments)
            .map_err(|source| match source {
                OperationError::ArityMismatch {
                    operator,
                    expected,
                    received,
                } => NetworkError::ArityMismatch {
                    operator,
                    expected,
                    received,
                },
                source => NetworkError::PropagatorFailed {
                    propagator: self.name().to_owned(),
                    source,
                },
            })?;

        context.add_content(self.output, quotient)
    }
}

#[cfg(test)]
mod tests {
    use propnet_core::Network;
    use propnet_core::NetworkError;
    use propnet_core::OperationError;
    use propnet_core::Value;

    use super::adder;
    use super::constant;
    use super::divider;
    use super::multiplier;
    use super::subtractor;
    use super::Quotient;
    use crate::install_arithmetic;

    fn arithmetic_network() -> Network {
        let mut network = Network::default();
        install_arithmetic(network.operators_mut()).unwrap();
        network
    }

    #[test]
    fn primitives_compute_in_one_direction() {
        let mut network = arithmetic_network();
        let a = network.new_cell_with_content(6);
        let b = network.new_cell_with_content(3);
        let outputs: Vec<_> = (0..4).map(|_| network.new_cell()).collect();

        let _ = adder(&mut network, a, b, outputs[0]);
        let _ = subtractor(&mut network, a, b, outputs[1]);
        let _ = multiplier(&mut network, a, b, outputs[2]);
        let _ = divider(&mut network, a, b, outputs[3]);
        network.run().unwrap();

        let contents: Vec<_> = outputs.iter().map(|&cell| network.content(cell)).collect();
        assert_eq!(
            contents,
            vec![
                Some(&Value::from(9)),
                Some(&Value::from(3)),
                Some(&Value::from(18)),
                Some(&Value::from(2)),
            ]
        );
    }

    #[test]
    fn constant_fills_its_cell() {
        let mut network = arithmetic_network();
        let cell = network.new_cell();

        let handle = constant(&mut network, 42, cell);
        network.run().unwrap();

        assert_eq!(network.content(cell), Some(&Value::from(42)));
        assert_eq!(
            network.get_propagator(handle).map(|constant| constant.value().clone()),
            Some(Value::from(42))
        );
    }

    #[test]
    fn divider_fails_on_zero() {
        let mut network = arithmetic_network();
        let a = network.new_cell_with_content(1);
        let b = network.new_cell_with_content(0);
        let out = network.new_cell();
        let _ = divider(&mut network, a, b, out);

        assert_eq!(
            network.run(),
            Err(NetworkError::PropagatorFailed {
                propagator: "divider".to_owned(),
                source: OperationError::DivisionByZero,
            })
        );
    }

    #[test]
    fn quotient_skips_zero_divisors() {
        let mut network = arithmetic_network();
        let a = network.new_cell_with_content(0);
        let b = network.new_cell_with_content(0);
        let out = network.new_cell();
        let _ = network.add_propagator(Quotient::new(a, b, out));

        network.run().unwrap();

        assert_eq!(network.content(out), None);
    }

    #[test]
    fn primitives_without_operators_fail() {
        let mut network = Network::default();
        let a = network.new_cell_with_content(1);
        let out = network.new_cell();
        let _ = adder(&mut network, a, a, out);

        assert_eq!(
            network.run(),
            Err(NetworkError::UnknownOperator {
                name: "add".to_owned()
            })
        );
    }
}
