use propnet_core::propagation::PropagatorId;
use propnet_core::CellId;
use propnet_core::Network;

use crate::adder;
use crate::multiplier;
use crate::subtractor;
use crate::Quotient;

/// Creates the constraint `lhs + rhs = total`: any two of the cells determine the third.
pub fn sum(network: &mut Network, lhs: CellId, rhs: CellId, total: CellId) -> [PropagatorId; 3] {
    [
        adder(network, lhs, rhs, total).untyped(),
        subtractor(network, total, lhs, rhs).untyped(),
        subtractor(network, total, rhs, lhs).untyped(),
    ]
}

/// Creates the constraint `lhs * rhs = total`: any two of the cells determine the third, unless
/// the factor which is known is zero.
pub fn product(
    network: &mut Network,
    lhs: CellId,
    rhs: CellId,
    total: CellId,
) -> [PropagatorId; 3] {
    [
        multiplier(network, lhs, rhs, total).untyped(),
        network
            .add_propagator(Quotient::new(total, lhs, rhs))
            .untyped(),
        network
            .add_propagator(Quotient::new(total, rhs, lhs))
            .untyped(),
    ]
}
