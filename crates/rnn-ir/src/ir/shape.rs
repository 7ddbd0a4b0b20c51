//! Symbolic tensor shapes
//!
//! Shape information as it exists at graph-construction time: the rank may
//! itself be unknown, and each axis extent may be unknown independently.

pub type Rank = usize;

/// Per-axis extents of a shape whose rank is statically known.
/// Each dimension is independently `Some(extent)` or `None` (dynamic).
pub type Dims = Vec<Option<usize>>;

/// Symbolic shape descriptor for a tensor input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorShape {
    /// `None` when the rank itself is dynamic.
    dims: Option<Dims>,
}

impl TensorShape {
    /// Shape with fully known extents.
    pub fn known(dims: Vec<usize>) -> Self {
        Self {
            dims: Some(dims.into_iter().map(Some).collect()),
        }
    }

    /// Shape with statically known rank; individual extents may be dynamic.
    pub fn with_dims(dims: Dims) -> Self {
        Self { dims: Some(dims) }
    }

    /// Shape whose rank is not statically known.
    pub fn dynamic() -> Self {
        Self { dims: None }
    }

    pub fn is_rank_static(&self) -> bool {
        self.dims.is_some()
    }

    /// Rank if statically known.
    pub fn rank(&self) -> Option<Rank> {
        self.dims.as_ref().map(Vec::len)
    }

    /// Extent of `axis`, if the rank is known and the extent is concrete.
    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.dims
            .as_ref()
            .and_then(|dims| dims.get(axis).copied().flatten())
    }
}

/// Two axis extents are compatible unless both are concrete and unequal.
pub fn dims_compatible(a: Option<usize>, b: Option<usize>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}
