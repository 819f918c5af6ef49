mod cell;
mod debug_helper;
mod merge;
mod network;
mod network_options;
mod network_statistics;
mod propagator_queue;
mod scheduler_state;

pub(crate) use cell::Cell;
pub use cell::CellId;
pub(crate) use debug_helper::DebugDyn;
pub(crate) use debug_helper::DebugHelper;
pub use merge::MERGE_OPERATOR;
pub use network::Network;
pub use network_options::NetworkOptions;
pub use network_statistics::NetworkStatistics;
pub(crate) use propagator_queue::PropagatorQueue;
pub use scheduler_state::SchedulerState;
