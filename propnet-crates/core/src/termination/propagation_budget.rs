use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once a number of propagators has been executed.
#[derive(Debug, Copy, Clone)]
pub struct PropagationBudget {
    budget: u64,
    num_executions: u64,
}

impl PropagationBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_executions: 0,
        }
    }
}

impl TerminationCondition for PropagationBudget {
    fn should_stop(&mut self) -> bool {
        self.num_executions >= self.budget
    }

    fn propagator_has_run(&mut self) {
        self.num_executions += 1;
    }
}
