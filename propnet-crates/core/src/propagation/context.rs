use log::trace;

use super::store::PropagatorStore;
use super::PropagatorId;
use crate::basic_types::NetworkError;
use crate::basic_types::OperationError;
use crate::basic_types::Value;
use crate::containers::KeyedVec;
use crate::engine::Cell;
use crate::engine::CellId;
use crate::engine::NetworkStatistics;
use crate::engine::PropagatorQueue;
use crate::engine::MERGE_OPERATOR;
use crate::generic_operators::OperatorRegistry;

/// The view of the network which is given to a propagator when it runs.
///
/// It is also what [`Network::add_content`](crate::Network::add_content) uses internally, so
/// content added from outside and content added by a propagator follow the same rules.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    cells: &'a mut KeyedVec<CellId, Cell>,
    propagator_queue: &'a mut PropagatorQueue,
    propagators: &'a PropagatorStore,
    operators: &'a OperatorRegistry,
    statistics: &'a mut NetworkStatistics,
    /// The propagator which is running, if any.
    propagator_id: Option<PropagatorId>,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(
        cells: &'a mut KeyedVec<CellId, Cell>,
        propagator_queue: &'a mut PropagatorQueue,
        propagators: &'a PropagatorStore,
        operators: &'a OperatorRegistry,
        statistics: &'a mut NetworkStatistics,
        propagator_id: Option<PropagatorId>,
    ) -> PropagationContext<'a> {
        PropagationContext {
            cells,
            propagator_queue,
            propagators,
            operators,
            statistics,
            propagator_id,
        }
    }

    pub fn operators(&self) -> &'a OperatorRegistry {
        self.operators
    }

    pub fn content(&self, cell: CellId) -> Option<&Value> {
        self.cells[cell].content()
    }

    /// The content of all of `cells`, in order, or `None` if any of them is still empty.
    pub fn contents(&self, cells: &[CellId]) -> Option<Vec<Value>> {
        cells
            .iter()
            .map(|&cell| self.content(cell).cloned())
            .collect()
    }

    /// Merges `value` into the content of `cell`.
    ///
    /// - Adding nothing (`None`) does nothing.
    /// - An empty cell takes `value` as its content.
    /// - Otherwise the `merge` operator combines the current content with `value`. If the result
    ///   equals the current content there is no new information and nothing happens.
    ///
    /// Whenever the content changes, all neighbours of the cell are alerted. A contradiction
    /// leaves the content untouched and is reported as [`NetworkError::Contradiction`].
    pub fn add_content(
        &mut self,
        cell: CellId,
        value: impl Into<Option<Value>>,
    ) -> Result<(), NetworkError> {
        let Some(incoming) = value.into() else {
            return Ok(());
        };

        let new_content = match self.cells[cell].content() {
            None => incoming,
            Some(current) => {
                let merge = self.operators.operator(MERGE_OPERATOR)?;

                match merge.call(&[current.clone(), incoming.clone()]) {
                    Ok(merged) if merged == *current => {
                        self.statistics.num_redundant_contents += 1;
                        return Ok(());
                    }
                    Ok(merged) => merged,
                    Err(OperationError::Contradiction) => {
                        self.statistics.num_contradictions += 1;
                        return Err(NetworkError::Contradiction {
                            cell,
                            cell_name: self.cell_name(cell),
                            current: current.clone(),
                            incoming,
                        });
                    }
                    Err(OperationError::ArityMismatch {
                        operator,
                        expected,
                        received,
                    }) => {
                        return Err(NetworkError::ArityMismatch {
                            operator,
                            expected,
                            received,
                        })
                    }
                    Err(source) => {
                        return Err(NetworkError::MergeFailed {
                            cell_name: self.cell_name(cell),
                            source,
                        })
                    }
                }
            }
        };

        match self.propagator_id {
            Some(propagator) => trace!(
                "{} := {new_content} by {}",
                self.cell_name(cell),
                self.propagators[propagator].name()
            ),
            None => trace!("{} := {new_content}", self.cell_name(cell)),
        }
        self.cells[cell].set_content(new_content);
        self.statistics.num_content_changes += 1;
        self.alert_neighbours(cell);

        Ok(())
    }

    fn alert_neighbours(&mut self, cell: CellId) {
        for &neighbour in self.cells[cell].neighbours() {
            let _ = self
                .propagator_queue
                .enqueue_propagator(neighbour, self.propagators[neighbour].priority());
        }
    }

    pub(crate) fn cell_name(&self, cell: CellId) -> String {
        self.cells[cell].display_name(cell)
    }
}
