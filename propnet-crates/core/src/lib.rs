//! # Propnet
//! A propagator network: a set of [cells](CellId) which accumulate information about values, and
//! propagators which derive new information from the content of some cells and add it to others.
//!
//! The content of a cell only ever becomes more informative. New content is combined with the
//! existing content by the generic `merge` operator ([`MERGE_OPERATOR`]); when the two cannot be
//! reconciled the network reports a [`NetworkError::Contradiction`]. A change of content alerts
//! the neighbouring propagators of the cell, which run when the [`Network`] is asked to
//! [`run`](Network::run) until no propagator is left to run.
//!
//! Generic operators ([`generic_operators`]) are functions of a fixed arity whose behaviour can
//! be extended for specific kinds of arguments after they have been created; `merge` is one of
//! them.
//!
//! # Example
//! ```rust
//! # use propnet_core::propagation::OperatorPropagator;
//! # use propnet_core::Network;
//! # use propnet_core::Value;
//! let mut network = Network::default();
//! network
//!     .operators_mut()
//!     .make_generic_operator(2, "concat", |arguments: &[Value]| {
//!         let lhs = arguments[0].as_text().unwrap_or_default();
//!         let rhs = arguments[1].as_text().unwrap_or_default();
//!         Ok(Value::from(format!("{lhs}{rhs}")))
//!     })
//!     .expect("arity is not zero");
//!
//! let a = network.new_cell_with_content("left");
//! let b = network.new_cell_with_content("right");
//! let joined = network.new_cell();
//! let _ = network.add_propagator(OperatorPropagator::new("concat", [a, b], joined));
//!
//! network.run().expect("no contradiction");
//! assert_eq!(network.content(joined), Some(&Value::from("leftright")));
//! ```
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
#[doc(hidden)]
pub mod propnet_asserts;

pub mod generic_operators;
pub mod propagation;
pub mod statistics;
pub mod termination;

pub use convert_case;

pub use crate::basic_types::Interval;
pub use crate::basic_types::NetworkError;
pub use crate::basic_types::OperationError;
pub use crate::basic_types::OperationResult;
pub use crate::basic_types::Value;
pub use crate::engine::CellId;
pub use crate::engine::Network;
pub use crate::engine::NetworkOptions;
pub use crate::engine::NetworkStatistics;
pub use crate::engine::SchedulerState;
pub use crate::engine::MERGE_OPERATOR;
