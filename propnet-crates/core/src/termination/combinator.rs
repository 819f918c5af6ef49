use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers when one of two given [`TerminationCondition`]s
/// triggers.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    /// Combine two [`TerminationCondition`]s into one.
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.t1.should_stop() || self.t2.should_stop()
    }

    fn propagator_has_run(&mut self) {
        self.t1.propagator_has_run();
        self.t2.propagator_has_run();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Combinator;
    use crate::termination::Indefinite;
    use crate::termination::PropagationBudget;
    use crate::termination::TerminationCondition;
    use crate::termination::TimeBudget;

    #[test]
    fn triggers_when_either_condition_triggers() {
        let mut condition = Combinator::new(Indefinite, PropagationBudget::new(1));

        assert!(!condition.should_stop());
        condition.propagator_has_run();
        assert!(condition.should_stop());
    }

    #[test]
    fn generous_time_budget_does_not_trigger() {
        let mut condition = Combinator::new(
            TimeBudget::starting_now(Duration::from_secs(3600)),
            Indefinite,
        );

        assert!(!condition.should_stop());
    }
}
