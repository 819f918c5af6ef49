use downcast_rs::impl_downcast;
use downcast_rs::Downcast;

use super::PropagationContext;
use super::PropagationStatus;
use crate::engine::CellId;

// We need to use this to cast from `Box<dyn Propagator>` to a concrete propagator; rust inherently
// does not allow downcasting from the trait definition to its concrete type.
impl_downcast!(Propagator);

/// All propagators implement the [`Propagator`] trait.
///
/// A propagator is stateless with respect to the network: [`Propagator::propagate`] takes `&self`
/// and may be called any number of times, also when none of its inputs changed since the last
/// call. It should then derive nothing new, which the merge of the cells turns into a no-op.
pub trait Propagator: Downcast {
    /// Return the name of the propagator, this is a convenience method that is used for printing
    /// and in error messages.
    fn name(&self) -> &str;

    /// The cells whose changes alert this propagator. The network registers the propagator as a
    /// neighbour of each of them when it is added.
    fn inputs(&self) -> &[CellId];

    /// Reads the inputs from the context and adds the derived information to the output cells.
    ///
    /// If not all required inputs have content yet, the propagator should return `Ok(())`
    /// without adding anything; missing information is not an error. Errors are not recovered
    /// from, they stop the scheduler.
    fn propagate(&self, context: PropagationContext) -> PropagationStatus;

    /// Returns the priority of the propagator. The scheduler runs all alerted propagators of a
    /// higher priority before those of a lower priority.
    ///
    /// By default the priority is [`Priority::Medium`].
    fn priority(&self) -> Priority {
        Priority::default()
    }
}

/// The priority of a propagator, used to determine the order in which alerted propagators run.
///
/// Typically, propagators with low computational complexity should be assigned a high
/// priority (i.e., should be propagated before computationally expensive propagators).
#[derive(Default, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Priority {
    High = 0,
    #[default]
    Medium = 1,
    Low = 2,
    VeryLow = 3,
}

impl Priority {
    pub(crate) const NUM_LEVELS: usize = 4;
}
