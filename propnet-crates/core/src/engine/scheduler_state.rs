/// The state of the scheduler of a [`Network`](crate::Network).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Not running. Pending alerts, if any, are processed by the next run.
    #[default]
    Idle,
    /// Draining the queue of alerted propagators.
    Running,
    /// A run failed. The queue is in an unspecified, partially drained state and the network has
    /// to be initialised before it can run again.
    Halted,
}
