//! Contains the [`Propagator`] trait and the propagators provided by the engine.
//!
//! A propagator watches a set of input cells. Whenever the content of one of them changes, the
//! network alerts the propagator, and the scheduler eventually calls [`Propagator::propagate`].
//! The propagator reads its inputs through the [`PropagationContext`] and adds whatever it can
//! derive to other cells; all state lives in cells.
//!
//! Most networks are built from [`FunctionPropagator`]s, which apply a function to the content of
//! their inputs, and [`OperatorPropagator`]s, which apply a generic operator that is looked up by
//! name when the propagator runs.
mod context;
mod function_propagator;
mod operator_propagator;
mod propagator;
mod propagator_id;
pub(crate) mod store;

pub use context::PropagationContext;
pub use function_propagator::FunctionPropagator;
pub use operator_propagator::OperatorPropagator;
pub use propagator::Priority;
pub use propagator::Propagator;
pub use propagator_id::PropagatorId;
pub use store::PropagatorHandle;

use crate::basic_types::NetworkError;

/// The result of invoking a propagator.
pub type PropagationStatus = Result<(), NetworkError>;
