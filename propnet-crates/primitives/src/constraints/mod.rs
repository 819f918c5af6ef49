//! Constraints are relations between cells which hold in every direction. Each constraint is a
//! collection of primitive propagators, one for every cell that can be derived from the others.
mod arithmetic;
mod temperature;

pub use arithmetic::*;
pub use temperature::*;
