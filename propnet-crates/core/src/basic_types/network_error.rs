use thiserror::Error;

use super::OperationError;
use super::Value;
use crate::engine::CellId;
#[cfg(doc)]
use crate::engine::Network;
#[cfg(doc)]
use crate::termination::TerminationCondition;

/// Errors reported by the operations of a [`Network`].
///
/// None of these are recovered from by the network itself. An error raised while running the
/// scheduler halts it; see [`Network::initialise`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A cell received content which the `merge` operator could not reconcile with the content
    /// it already holds. The content of the cell is left unchanged.
    #[error("contradiction in cell '{cell_name}': {incoming} conflicts with {current}")]
    Contradiction {
        cell: CellId,
        cell_name: String,
        current: Value,
        incoming: Value,
    },
    /// The `merge` operator failed for a reason other than a contradiction.
    #[error("merging content into cell '{cell_name}' failed: {source}")]
    MergeFailed { cell_name: String, source: OperationError },
    /// An operation was assigned to, or called on, an operator which was never created.
    #[error("operator '{name}' does not exist")]
    UnknownOperator { name: String },
    /// A predicate list or an argument list does not match the arity of an operator.
    #[error("operator '{operator}' has arity {expected}, but received {received}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        received: usize,
    },
    /// An operator was created with an arity of zero.
    #[error("operator '{operator}' cannot be created with arity {arity}")]
    InvalidArity { operator: String, arity: usize },
    /// The computation of a propagator failed.
    #[error("propagator '{propagator}' failed: {source}")]
    PropagatorFailed {
        propagator: String,
        source: OperationError,
    },
    /// The [`TerminationCondition`] of a run triggered before the network became quiescent.
    /// The pending propagators remain scheduled.
    #[error("propagation was interrupted after {executed} propagator executions")]
    PropagationInterrupted { executed: u64 },
    /// The scheduler was asked to run after a previous run failed.
    #[error("the scheduler halted on an earlier error; initialise the network before running it")]
    SchedulerHalted,
}
