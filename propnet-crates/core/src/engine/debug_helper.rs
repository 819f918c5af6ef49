use std::fmt::Debug;
use std::fmt::Formatter;

use log::warn;

use super::Cell;
use super::CellId;
use super::NetworkStatistics;
use super::PropagatorQueue;
use crate::containers::KeyedVec;
use crate::generic_operators::OperatorRegistry;
use crate::propagation::store::PropagatorStore;
use crate::propagation::PropagationContext;

#[derive(Copy, Clone)]
pub(crate) struct DebugDyn<'a> {
    trait_name: &'a str,
}

impl<'a> DebugDyn<'a> {
    pub(crate) fn from(trait_name: &'a str) -> Self {
        DebugDyn { trait_name }
    }
}

impl Debug for DebugDyn<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<dyn {}>", self.trait_name)
    }
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct DebugHelper {}

impl DebugHelper {
    /// Method which checks whether the reported fixed point is correct, i.e. whether running any
    /// propagator again would change the content of a cell.
    ///
    /// This method is only to be called after the scheduler drained its queue without an error.
    /// Every propagator runs on a copy of the cells, so the network itself is not affected.
    pub(crate) fn debug_fixed_point_propagation(
        cells: &KeyedVec<CellId, Cell>,
        propagators: &PropagatorStore,
        operators: &OperatorRegistry,
    ) -> bool {
        for propagator_id in propagators.ids() {
            let mut cells_clone = cells.clone();
            let mut scratch_queue = PropagatorQueue::default();
            let mut scratch_statistics = NetworkStatistics::default();

            let context = PropagationContext::new(
                &mut cells_clone,
                &mut scratch_queue,
                propagators,
                operators,
                &mut scratch_statistics,
                Some(propagator_id),
            );

            if let Err(error) = propagators[propagator_id].propagate(context) {
                warn!(
                    "Propagator '{}' fails at the fixed point: {error}",
                    propagators[propagator_id].name()
                );
                return false;
            }

            let is_unchanged = cells
                .iter()
                .zip(cells_clone.iter())
                .all(|(before, after)| before.content() == after.content());
            if !is_unchanged {
                warn!(
                    "Propagator '{}' changes a cell at the fixed point",
                    propagators[propagator_id].name()
                );
                return false;
            }
        }

        true
    }
}
