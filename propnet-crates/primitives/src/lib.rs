//! Building blocks for [`propnet_core`] networks over numbers and intervals.
//!
//! - [`install_arithmetic`] registers the generic operators `add`, `subtract`, `multiply` and
//!   `divide`, and teaches `merge` to treat numbers which agree up to rounding as equal.
//! - The primitive propagators ([`adder`], [`subtractor`], [`multiplier`], [`divider`] and
//!   [`constant`]) compute in one direction.
//! - The constraints ([`sum`], [`product`] and [`celsius_fahrenheit`]) combine primitive
//!   propagators so that information flows in every direction.
//!
//! # Example
//! ```rust
//! # use propnet_core::Network;
//! # use propnet_core::Value;
//! let mut network = Network::default();
//! propnet_primitives::install_arithmetic(network.operators_mut()).expect("valid operators");
//!
//! let a = network.new_cell();
//! let b = network.new_cell();
//! let total = network.new_cell();
//! let _ = propnet_primitives::sum(&mut network, a, b, total);
//!
//! network.add_content(total, Value::from(10)).expect("total is empty");
//! network.add_content(a, Value::from(4)).expect("a is empty");
//! network.run().expect("no contradiction");
//!
//! assert_eq!(network.content(b), Some(&Value::from(6)));
//! ```
mod constraints;
mod operators;
mod propagators;

pub use constraints::*;
pub use operators::*;
pub use propagators::*;
