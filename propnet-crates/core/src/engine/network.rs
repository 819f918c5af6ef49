use log::debug;
use log::trace;
use log::warn;

use super::merge::install_merge;
use super::Cell;
use super::CellId;
use super::DebugHelper;
use super::NetworkOptions;
use super::NetworkStatistics;
use super::PropagatorQueue;
use super::SchedulerState;
use crate::basic_types::NetworkError;
use crate::basic_types::Value;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::generic_operators::OperatorRegistry;
use crate::propagation::store::PropagatorStore;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorHandle;
use crate::propagation::PropagatorId;
use crate::propnet_assert_extreme;
use crate::propnet_assert_simple;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::termination::Indefinite;
use crate::termination::TerminationCondition;

/// A propagator network: the cells, the propagators wired between them, the generic operators
/// they use and the scheduler which drives them to quiescence.
///
/// Every network is independent; there is no state shared between networks.
///
/// # Example
/// ```rust
/// # use propnet_core::propagation::FunctionPropagator;
/// # use propnet_core::Network;
/// # use propnet_core::Value;
/// let mut network = Network::default();
/// let a = network.new_cell();
/// let b = network.new_cell();
/// let out = network.new_cell();
///
/// let _ = network.add_propagator(FunctionPropagator::new(
///     [a, b],
///     |arguments: &[Value]| {
///         Ok(match (arguments[0].as_integer(), arguments[1].as_integer()) {
///             (Some(lhs), Some(rhs)) => Some(Value::from(lhs + rhs)),
///             _ => None,
///         })
///     },
///     out,
/// ));
///
/// network.add_content(a, Value::from(3)).expect("a is empty");
/// network.run().expect("no contradiction");
/// assert_eq!(network.content(out), None);
///
/// network.add_content(b, Value::from(4)).expect("b is empty");
/// network.run().expect("no contradiction");
/// assert_eq!(network.content(out), Some(&Value::from(7)));
/// ```
#[derive(Debug)]
pub struct Network {
    cells: KeyedVec<CellId, Cell>,
    propagators: PropagatorStore,
    propagator_queue: PropagatorQueue,
    operators: OperatorRegistry,
    state: SchedulerState,
    statistics: NetworkStatistics,
}

impl Default for Network {
    fn default() -> Self {
        Network::with_options(NetworkOptions::default())
    }
}

impl Network {
    pub fn with_options(options: NetworkOptions) -> Network {
        let mut operators = OperatorRegistry::default();
        install_merge(&mut operators, options.interval_merge)
            .expect("the merge operator has a valid arity and predicate lists");

        Network {
            cells: KeyedVec::default(),
            propagators: PropagatorStore::default(),
            propagator_queue: PropagatorQueue::default(),
            operators,
            state: SchedulerState::Idle,
            statistics: NetworkStatistics::default(),
        }
    }

    /// Creates an empty cell.
    pub fn new_cell(&mut self) -> CellId {
        self.cells.push(Cell::new(None, None))
    }

    /// Creates a cell which already holds `content`. No propagator is alerted.
    pub fn new_cell_with_content(&mut self, content: impl Into<Value>) -> CellId {
        self.cells.push(Cell::new(None, Some(content.into())))
    }

    /// Creates an empty cell with a name, which is used in logging and in error messages.
    pub fn new_named_cell(&mut self, name: impl Into<String>) -> CellId {
        self.cells.push(Cell::new(Some(name.into()), None))
    }

    /// The content of `cell`, or `None` if nothing is known about it yet.
    pub fn content(&self, cell: CellId) -> Option<&Value> {
        self.check_cell(cell);
        self.cells[cell].content()
    }

    /// The name `cell` was created with, or its identifier if it has none.
    pub fn cell_name(&self, cell: CellId) -> String {
        self.check_cell(cell);
        self.cells[cell].display_name(cell)
    }

    /// The propagators which are alerted when the content of `cell` changes, in the order in which
    /// they were registered.
    pub fn neighbours(&self, cell: CellId) -> &[PropagatorId] {
        self.check_cell(cell);
        self.cells[cell].neighbours()
    }

    /// Registers `propagator` to be alerted on future changes of `cell`. Registering the same
    /// propagator twice has no effect.
    pub fn new_neighbour(&mut self, cell: CellId, propagator: PropagatorId) {
        propnet_assert_simple!(
            propagator.index() < self.propagators.num_propagators(),
            "{propagator} does not belong to this network"
        );
        self.check_cell(cell);

        let _ = self.cells[cell].new_neighbour(propagator);
    }

    /// Merges `value` into the content of `cell` and alerts the neighbours of the cell if the
    /// content changed. The alerted propagators run on the next call to [`Network::run`].
    ///
    /// See [`PropagationContext::add_content`] for the merge rules.
    pub fn add_content(
        &mut self,
        cell: CellId,
        value: impl Into<Option<Value>>,
    ) -> Result<(), NetworkError> {
        self.check_cell(cell);
        let mut context = PropagationContext::new(
            &mut self.cells,
            &mut self.propagator_queue,
            &self.propagators,
            &self.operators,
            &mut self.statistics,
            None,
        );

        context.add_content(cell, value)
    }

    /// Adds a propagator to the network.
    ///
    /// The propagator becomes a neighbour of each of its inputs and is alerted once, so that it
    /// runs on the next call to [`Network::run`] even if its inputs already have content.
    pub fn add_propagator<P: Propagator>(&mut self, propagator: P) -> PropagatorHandle<P> {
        for &input in propagator.inputs() {
            self.check_cell(input);
        }

        let handle = self.propagators.add_propagator(propagator);
        let propagator_id = handle.untyped();

        let propagator = &self.propagators[propagator_id];
        for &input in propagator.inputs() {
            let _ = self.cells[input].new_neighbour(propagator_id);
        }
        let _ = self
            .propagator_queue
            .enqueue_propagator(propagator_id, propagator.priority());

        handle
    }

    fn check_cell(&self, cell: CellId) {
        propnet_assert_simple!(
            cell.index() < self.cells.len(),
            "{cell} does not belong to this network"
        );
    }

    /// Get a reference to the propagator identified by the given handle.
    pub fn get_propagator<P: Propagator>(&self, handle: PropagatorHandle<P>) -> Option<&P> {
        self.propagators.get_propagator(handle)
    }

    pub fn operators(&self) -> &OperatorRegistry {
        &self.operators
    }

    /// Access to the generic operators, e.g. to assign operations to the `merge` operator.
    pub fn operators_mut(&mut self) -> &mut OperatorRegistry {
        &mut self.operators
    }

    /// Discards all pending alerts and makes the scheduler idle, also after a failed run. The
    /// content of the cells is kept.
    pub fn initialise(&mut self) {
        self.propagator_queue.clear();
        self.state = SchedulerState::Idle;
    }

    /// Runs alerted propagators until none are left.
    ///
    /// An error of a propagator, most notably a [`NetworkError::Contradiction`], stops the run
    /// immediately and halts the scheduler. The network has to be initialised with
    /// [`Network::initialise`] before it can run again.
    ///
    /// A run only terminates if every cell can only change a finite number of times; use
    /// [`Network::run_with`] to bound runs of other networks.
    pub fn run(&mut self) -> Result<(), NetworkError> {
        self.run_with(&mut Indefinite)
    }

    /// Like [`Network::run`], but polls `termination` before every propagator execution.
    ///
    /// When `termination` triggers, the run stops with [`NetworkError::PropagationInterrupted`].
    /// The pending alerts are kept and the scheduler stays usable, so the run can be resumed.
    pub fn run_with(
        &mut self,
        termination: &mut impl TerminationCondition,
    ) -> Result<(), NetworkError> {
        if self.state == SchedulerState::Halted {
            return Err(NetworkError::SchedulerHalted);
        }

        self.state = SchedulerState::Running;
        self.statistics.num_runs += 1;

        let mut executed = 0;
        while !self.propagator_queue.is_empty() {
            if termination.should_stop() {
                warn!(
                    "Propagation interrupted with {} propagators pending",
                    self.propagator_queue.num_enqueued()
                );
                self.state = SchedulerState::Idle;
                return Err(NetworkError::PropagationInterrupted { executed });
            }

            let Some(propagator_id) = self.propagator_queue.pop() else {
                break;
            };

            let propagator = &self.propagators[propagator_id];
            trace!("Running propagator '{}'", propagator.name());

            let context = PropagationContext::new(
                &mut self.cells,
                &mut self.propagator_queue,
                &self.propagators,
                &self.operators,
                &mut self.statistics,
                Some(propagator_id),
            );
            let status = propagator.propagate(context);

            executed += 1;
            self.statistics.num_propagator_executions += 1;
            termination.propagator_has_run();

            if let Err(error) = status {
                debug!(
                    "Propagator '{}' halted the scheduler: {error}",
                    self.propagators[propagator_id].name()
                );
                self.state = SchedulerState::Halted;
                return Err(error);
            }
        }

        self.state = SchedulerState::Idle;
        propnet_assert_extreme!(
            DebugHelper::debug_fixed_point_propagation(
                &self.cells,
                &self.propagators,
                &self.operators
            ),
            "The network is not at a fixed point after the queue was drained"
        );

        Ok(())
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.state
    }

    /// Whether no propagator is waiting to run.
    pub fn is_quiescent(&self) -> bool {
        self.propagator_queue.is_empty()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn num_propagators(&self) -> usize {
        self.propagators.num_propagators()
    }

    pub fn statistics(&self) -> &NetworkStatistics {
        &self.statistics
    }

    /// Logs the statistics of the network, if statistic logging has been configured with
    /// [`configure_statistic_logging`](crate::statistics::configure_statistic_logging).
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::new(["network"]));
            log_statistic_postfix();
        }
    }
}
