//! Node-level building blocks for recurrent cell operators.

pub mod cell_base;
pub mod elementwise;

pub use cell_base::RecurrentCellBase;
