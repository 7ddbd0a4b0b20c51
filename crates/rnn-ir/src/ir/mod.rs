//! Core IR types consumed by the cell layer
//!
//! This module contains the symbolic shape descriptors the validator works
//! over and the graph-value handle the builders produce.

pub mod shape;
pub mod value;

pub use shape::{Dims, Rank, TensorShape, dims_compatible};
pub use value::{OpKind, Value};
