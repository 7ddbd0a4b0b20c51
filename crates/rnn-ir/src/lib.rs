//! # rnn-ir
//!
//! Shared validation and activation-configuration layer for recurrent-cell
//! operators (RNN-, LSTM-, and GRU-style cells) in a computational-graph IR.
//!
//! A concrete cell operator constructs a [`RecurrentCellBase`] from its
//! attributes, calls [`RecurrentCellBase::validate_input_rank_dimension`]
//! once during its shape-inference phase, then uses the activation, clipping,
//! and element-wise helpers while assembling its internal subgraph.
//!
//! ## What lives here
//!
//! - Static rank/dimension validation for the canonical five-input cell
//!   signature (`X`, `initial_hidden_state`, `W`, `R`, `B`)
//! - Named activation resolution with per-site alpha/beta coefficients
//! - The symmetric clip transform applied to intermediate cell state
//! - Element-wise add/sub/mul node factories
//! - Attribute introspection over the cell's five configuration attributes
//!
//! Numeric execution, the concrete cell operators themselves, and backend
//! lowering are out of scope.

pub mod activation;
pub mod attribute;
pub mod error;
pub mod ir;
pub mod node;

pub use activation::{ActivationFunction, ActivationKind, get_activation_func_by_name};
pub use attribute::{AttrValue, AttributeVisitor};
pub use error::CellError;
pub use ir::{TensorShape, Value};
pub use node::RecurrentCellBase;
