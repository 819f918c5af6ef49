#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use propnet_core::CellId;
use propnet_core::Interval;
use propnet_core::Network;
use propnet_core::NetworkError;
use propnet_core::Value;
use propnet_primitives::celsius_fahrenheit;
use propnet_primitives::install_arithmetic;

fn temperature_network() -> (Network, CellId, CellId) {
    let mut network = Network::default();
    install_arithmetic(network.operators_mut()).expect("valid operators");

    let celsius = network.new_named_cell("celsius");
    let fahrenheit = network.new_named_cell("fahrenheit");
    celsius_fahrenheit(&mut network, celsius, fahrenheit);

    (network, celsius, fahrenheit)
}

fn number(network: &Network, cell: CellId) -> Option<f64> {
    network.content(cell).and_then(Value::as_number)
}

#[test]
fn celsius_to_fahrenheit() {
    let (mut network, celsius, fahrenheit) = temperature_network();

    network.add_content(celsius, Value::from(100)).unwrap();
    network.run().unwrap();

    assert_eq!(network.content(fahrenheit), Some(&Value::from(212)));
}

#[test]
fn fahrenheit_to_celsius() {
    let (mut network, celsius, fahrenheit) = temperature_network();

    network.add_content(fahrenheit, Value::from(-40)).unwrap();
    network.run().unwrap();

    assert_eq!(network.content(celsius), Some(&Value::from(-40)));
}

#[test]
fn fractional_temperatures_survive_the_round_trip() {
    let (mut network, celsius, fahrenheit) = temperature_network();

    network.add_content(celsius, Value::from(37)).unwrap();
    network.run().unwrap();

    let derived = number(&network, fahrenheit).unwrap();
    assert!((derived - 98.6).abs() < 1e-9);
    assert_eq!(network.content(celsius), Some(&Value::from(37)));
}

#[test]
fn zero_celsius_is_freezing() {
    let (mut network, celsius, fahrenheit) = temperature_network();

    network.add_content(celsius, Value::from(0)).unwrap();
    network.run().unwrap();

    assert_eq!(number(&network, fahrenheit), Some(32.0));
}

#[test]
fn conflicting_temperatures_contradict() {
    let (mut network, celsius, fahrenheit) = temperature_network();
    network.add_content(celsius, Value::from(100)).unwrap();
    network.add_content(fahrenheit, Value::from(100)).unwrap();

    let result = network.run();

    assert!(matches!(result, Err(NetworkError::Contradiction { .. })));
}

#[test]
fn temperature_ranges_are_converted() {
    let (mut network, celsius, fahrenheit) = temperature_network();

    network
        .add_content(celsius, Value::from(Interval::new(10.0, 20.0).unwrap()))
        .unwrap();
    network.run().unwrap();

    let range = network.content(fahrenheit).and_then(Value::as_interval).unwrap();
    assert!((range.low() - 50.0).abs() < 1e-9);
    assert!((range.high() - 68.0).abs() < 1e-9);
}
