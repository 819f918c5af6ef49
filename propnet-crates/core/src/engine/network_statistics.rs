use crate::create_statistics_struct;

create_statistics_struct!(
    /// Counters which are maintained while a [`Network`](crate::Network) propagates.
    NetworkStatistics {
        /// The number of times the scheduler was run
        num_runs: u64,
        /// The number of times a propagator was executed
        num_propagator_executions: u64,
        /// The number of times the content of a cell changed
        num_content_changes: u64,
        /// The number of times content was added to a cell without adding information
        num_redundant_contents: u64,
        /// The number of contradictions which were detected
        num_contradictions: u64,
});
