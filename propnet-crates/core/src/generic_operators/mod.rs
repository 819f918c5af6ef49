//! Generic operators are named, fixed-arity functions whose behaviour is selected when they are
//! called.
//!
//! Every [`GenericOperator`] has a default operation and an ordered list of assigned operations,
//! each guarded by one [`Predicate`] per argument. A call runs the first assigned operation whose
//! predicates all accept their argument, and the default operation if none does. Operations are
//! tried in the order in which they were assigned, so an operation assigned earlier takes
//! precedence over a later one when both apply.
//!
//! The [`OperatorRegistry`] stores operators by name. The network looks up its `merge` operator
//! there, which is what makes the merging of cell content open to extension:
//! ```rust
//! # use propnet_core::generic_operators::predicates::is_number;
//! # use propnet_core::generic_operators::OperatorRegistry;
//! # use propnet_core::Value;
//! let mut registry = OperatorRegistry::default();
//! registry
//!     .make_generic_operator(2, "concat", |arguments: &[Value]| {
//!         match (arguments[0].as_text(), arguments[1].as_text()) {
//!             (Some(lhs), Some(rhs)) => Ok(Value::from(format!("{lhs}{rhs}"))),
//!             _ => Ok(Value::from("?")),
//!         }
//!     })
//!     .expect("arity is positive");
//!
//! let concat = registry.operator("concat").expect("concat exists");
//! let greeting = concat.call(&[Value::from("hello "), Value::from("world")]);
//! assert_eq!(greeting, Ok(Value::from("hello world")));
//!
//! registry
//!     .assign_operation(
//!         "concat",
//!         |arguments: &[Value]| Ok(Value::from(format!("{}{}", arguments[0], arguments[1]))),
//!         &[is_number, is_number],
//!     )
//!     .expect("concat exists and has arity 2");
//!
//! let concat = registry.operator("concat").expect("concat exists");
//! assert_eq!(concat.call(&[Value::from(1), Value::from(2)]), Ok(Value::from("12")));
//! ```
mod generic_operator;
pub mod predicates;
mod registry;

pub use generic_operator::*;
pub use registry::*;
