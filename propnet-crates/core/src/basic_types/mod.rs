mod interval;
mod network_error;
mod operation_error;
mod value;

pub use interval::Interval;
pub use network_error::NetworkError;
pub use operation_error::OperationError;
pub use operation_error::OperationResult;
pub use value::Value;
