use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Index;

use super::Propagator;
use super::PropagatorId;
use crate::containers::KeyedVec;
use crate::engine::DebugDyn;

/// A central store for propagators.
#[derive(Default)]
pub(crate) struct PropagatorStore {
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
}

/// A typed wrapper around a [`PropagatorId`] that allows retrieving concrete propagators from the
/// network.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PropagatorHandle<P> {
    id: PropagatorId,
    propagator: PhantomData<P>,
}

impl<P> PropagatorHandle<P> {
    /// Get a type-erased handle to the propagator.
    pub fn untyped(self) -> PropagatorId {
        self.id
    }
}

impl<P> Clone for PropagatorHandle<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for PropagatorHandle<P> {}

impl PropagatorStore {
    pub(crate) fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = PropagatorId> + '_ {
        self.propagators.keys()
    }

    pub(crate) fn add_propagator<P: Propagator>(&mut self, propagator: P) -> PropagatorHandle<P> {
        PropagatorHandle {
            id: self.propagators.push(Box::new(propagator)),
            propagator: PhantomData,
        }
    }

    /// Get a reference to the propagator identified by the given handle.
    ///
    /// To prevent downcasting, [`PropagatorStore`] implements [`Index`] with [`PropagatorId`] as an
    /// index.
    pub(crate) fn get_propagator<P: Propagator>(&self, handle: PropagatorHandle<P>) -> Option<&P> {
        let propagator: &dyn Propagator = self.propagators.get(handle.id)?.as_ref();
        propagator.downcast_ref()
    }
}

impl Index<PropagatorId> for PropagatorStore {
    type Output = dyn Propagator;

    fn index(&self, index: PropagatorId) -> &Self::Output {
        self.propagators[index].as_ref()
    }
}

impl Debug for PropagatorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let propagators: Vec<_> = self
            .propagators
            .iter()
            .map(|_| DebugDyn::from("Propagator"))
            .collect();

        write!(f, "{propagators:?}")
    }
}
