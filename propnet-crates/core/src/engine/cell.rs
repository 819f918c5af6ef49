use std::fmt::Display;

use crate::basic_types::Value;
use crate::containers::StorageKey;
use crate::propagation::PropagatorId;

/// An identifier to a cell within a [`Network`](crate::Network).
///
/// Identifiers are only meaningful in the network which created them; using one with another
/// network panics if it is out of range there.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellId(pub(crate) u32);

impl Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell#{}", self.0)
    }
}

impl StorageKey for CellId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        CellId(index as u32)
    }
}

/// A holder of partial information.
///
/// The content only changes through [`Network::add_content`](crate::Network::add_content), which
/// merges instead of overwriting. The cell itself never runs computation; it only remembers which
/// propagators must be alerted when its content changes.
#[derive(Clone, Debug, Default)]
pub(crate) struct Cell {
    name: Option<String>,
    content: Option<Value>,
    /// Propagators to alert on change, in registration order and without duplicates.
    neighbours: Vec<PropagatorId>,
}

impl Cell {
    pub(crate) fn new(name: Option<String>, content: Option<Value>) -> Cell {
        Cell {
            name,
            content,
            neighbours: Vec::new(),
        }
    }

    /// The name of the cell, or `id` if it has none.
    pub(crate) fn display_name(&self, id: CellId) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| id.to_string())
    }

    pub(crate) fn content(&self) -> Option<&Value> {
        self.content.as_ref()
    }

    pub(crate) fn set_content(&mut self, content: Value) {
        self.content = Some(content);
    }

    pub(crate) fn neighbours(&self) -> &[PropagatorId] {
        &self.neighbours
    }

    /// Registers `propagator` as a neighbour. Returns `false` if it already was one.
    pub(crate) fn new_neighbour(&mut self, propagator: PropagatorId) -> bool {
        if self.neighbours.contains(&propagator) {
            return false;
        }

        self.neighbours.push(propagator);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;
    use crate::basic_types::Value;
    use crate::propagation::PropagatorId;

    #[test]
    fn new_cell_has_no_content_and_no_neighbours() {
        let cell = Cell::default();

        assert_eq!(cell.content(), None);
        assert!(cell.neighbours().is_empty());
    }

    #[test]
    fn cell_with_initial_content() {
        let cell = Cell::new(None, Some(Value::from("hello")));

        assert_eq!(cell.content(), Some(&Value::from("hello")));
    }

    #[test]
    fn existing_neighbour_is_not_added_twice() {
        let mut cell = Cell::default();

        assert!(cell.new_neighbour(PropagatorId(0)));
        assert!(!cell.new_neighbour(PropagatorId(0)));
        assert!(cell.new_neighbour(PropagatorId(1)));

        assert_eq!(cell.neighbours(), &[PropagatorId(0), PropagatorId(1)]);
    }
}
