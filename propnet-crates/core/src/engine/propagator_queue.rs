use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::VecDeque;

use crate::containers::KeyedVec;
use crate::propagation::Priority;
use crate::propagation::PropagatorId;
use crate::propnet_assert_moderate;

/// The alerts which the scheduler still has to process.
///
/// Propagators are popped by priority, and in the order in which they were alerted within a
/// priority. A propagator is present at most once: alerting a propagator which is already pending
/// does nothing. Once it has been popped it can be alerted again.
#[derive(Debug, Clone)]
pub(crate) struct PropagatorQueue {
    queues: Vec<VecDeque<PropagatorId>>,
    is_enqueued: KeyedVec<PropagatorId, bool>,
    num_enqueued: usize,
    present_priorities: BinaryHeap<Reverse<u8>>,
}

impl Default for PropagatorQueue {
    fn default() -> Self {
        Self::new(Priority::NUM_LEVELS)
    }
}

impl PropagatorQueue {
    pub(crate) fn new(num_priority_levels: usize) -> PropagatorQueue {
        PropagatorQueue {
            queues: vec![VecDeque::new(); num_priority_levels],
            is_enqueued: KeyedVec::default(),
            num_enqueued: 0,
            present_priorities: BinaryHeap::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.num_enqueued == 0
    }

    pub(crate) fn num_enqueued(&self) -> usize {
        self.num_enqueued
    }

    /// Returns `true` if the propagator was not pending yet.
    pub(crate) fn enqueue_propagator(
        &mut self,
        propagator_id: PropagatorId,
        priority: Priority,
    ) -> bool {
        propnet_assert_moderate!((priority as usize) < self.queues.len());

        if self.is_propagator_enqueued(propagator_id) {
            return false;
        }

        self.is_enqueued.accomodate(propagator_id, false);
        self.is_enqueued[propagator_id] = true;
        self.num_enqueued += 1;

        if self.queues[priority as usize].is_empty() {
            self.present_priorities.push(Reverse(priority as u8));
        }
        self.queues[priority as usize].push_back(propagator_id);

        true
    }

    pub(crate) fn pop(&mut self) -> Option<PropagatorId> {
        let top_priority = self.present_priorities.peek()?.0 as usize;
        propnet_assert_moderate!(!self.queues[top_priority].is_empty());

        let next_propagator_id = self.queues[top_priority].pop_front();

        if let Some(propagator_id) = next_propagator_id {
            self.is_enqueued[propagator_id] = false;
            self.num_enqueued -= 1;

            if self.queues[top_priority].is_empty() {
                let _ = self.present_priorities.pop();
            }
        }

        next_propagator_id
    }

    pub(crate) fn clear(&mut self) {
        for queue in self.queues.iter_mut() {
            queue.clear();
        }

        for is_propagator_enqueued in self.is_enqueued.iter_mut() {
            *is_propagator_enqueued = false;
        }

        self.present_priorities.clear();
        self.num_enqueued = 0;
    }

    pub(crate) fn is_propagator_enqueued(&self, propagator_id: PropagatorId) -> bool {
        self.is_enqueued
            .get(propagator_id)
            .copied()
            .unwrap_or_default()
    }
}
