//! A [`TerminationCondition`] is polled by the scheduler before every propagator execution. It
//! guards a run against networks which never become quiescent, e.g. because a cell can be
//! refined infinitely often. When it triggers, the run stops with
//! [`NetworkError::PropagationInterrupted`] and the remaining alerts stay scheduled.

mod combinator;
mod indefinite;
mod propagation_budget;
mod time_budget;

pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use propagation_budget::PropagationBudget;
pub use time_budget::TimeBudget;

#[cfg(doc)]
use crate::NetworkError;

/// The central trait that defines a termination condition. A termination condition determines when
/// the scheduler should give up on reaching quiescence.
pub trait TerminationCondition {
    /// Returns `true` when the scheduler should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called after every propagator execution.
    fn propagator_has_run(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn propagator_has_run(&mut self) {
        if let Some(t) = self {
            t.propagator_has_run()
        }
    }
}
