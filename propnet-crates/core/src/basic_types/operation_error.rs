use thiserror::Error;

use super::Value;
#[cfg(doc)]
use crate::generic_operators::GenericOperator;

/// The result of applying an operation of a [`GenericOperator`].
pub type OperationResult = Result<Value, OperationError>;

/// Errors which an operation of a [`GenericOperator`] can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// The arguments carry irreconcilable information; reported by `merge` operations.
    #[error("the arguments contradict each other")]
    Contradiction,
    /// The operator was called with a number of arguments other than its arity.
    #[error("operator '{operator}' expects {expected} arguments, but received {received}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        received: usize,
    },
    /// No operation of the operator is applicable to the arguments.
    #[error("operator '{operator}' is not applicable to {arguments:?}")]
    Unsupported {
        operator: String,
        arguments: Vec<Value>,
    },
    #[error("division by zero")]
    DivisionByZero,
}
