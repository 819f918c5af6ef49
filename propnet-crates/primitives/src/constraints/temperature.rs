use propnet_core::CellId;
use propnet_core::Network;

use crate::constant;
use crate::product;
use crate::sum;

/// Creates the constraint `fahrenheit = celsius * 9 / 5 + 32` from [`product`]s and a [`sum`],
/// so that either temperature is derived from the other.
///
/// The arithmetic operators have to be installed, see
/// [`install_arithmetic`](crate::install_arithmetic).
pub fn celsius_fahrenheit(network: &mut Network, celsius: CellId, fahrenheit: CellId) {
    let nine = network.new_named_cell("nine");
    let five = network.new_named_cell("five");
    let thirty_two = network.new_named_cell("thirty-two");
    let _ = constant(network, 9, nine);
    let _ = constant(network, 5, five);
    let _ = constant(network, 32, thirty_two);

    // celsius * 9 = scaled * 5 and scaled + 32 = fahrenheit
    let times_nine = network.new_named_cell("celsius * 9");
    let scaled = network.new_named_cell("celsius * 9 / 5");
    let _ = product(network, celsius, nine, times_nine);
    let _ = product(network, scaled, five, times_nine);
    let _ = sum(network, scaled, thirty_two, fahrenheit);
}
