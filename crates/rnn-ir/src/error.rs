//! Validation and resolution failures.

use thiserror::Error;

/// Failures raised while validating or configuring a recurrent cell.
///
/// Every variant is fatal to the graph-construction call that triggered it;
/// there is no local recovery. Shape errors carry the owning node's name so
/// diagnostics can point at the operator being built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellError {
    /// An input's rank is not statically known.
    #[error("node '{node}': input {index} must have a statically known rank")]
    RankUnknown { node: String, index: usize },

    /// An input's rank violates the 1-D (bias) / 2-D (all others) contract.
    #[error("node '{node}': input {index} has rank {actual}, expected {expected}")]
    RankMismatch {
        node: String,
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// `X` and `W` disagree on the input_size axis extent.
    #[error("node '{node}': input_size dimension of X ({x:?}) does not match W ({w:?})")]
    DimensionMismatch {
        node: String,
        x: Option<usize>,
        w: Option<usize>,
    },

    /// An activation name has no registry entry. Raised lazily, on the first
    /// resolution attempt, not at cell construction.
    #[error("unknown activation function '{name}'")]
    UnknownActivation { name: String },

    /// An activation slot index beyond the configured list was requested.
    #[error("activation index {index} out of range for {count} configured activations")]
    ActivationIndex { index: usize, count: usize },
}
