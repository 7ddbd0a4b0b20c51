//! Recurrent cell base
//!
//! Shared configuration and validation for RNN-, LSTM-, and GRU-style cell
//! operators. A concrete cell constructs one of these from its attributes,
//! validates its input shapes once during shape inference, then uses the
//! activation, clipping, and element-wise helpers while assembling its
//! internal subgraph.

use crate::activation::{ActivationFunction, get_activation_func_by_name};
use crate::attribute::{AttrValue, AttributeVisitor};
use crate::error::CellError;
use crate::ir::{TensorShape, Value, dims_compatible};
use crate::node::elementwise;

// Canonical input positions: X, initial_hidden_state, W, R, B.
const X: usize = 0;
const W: usize = 2;
const B: usize = 4;

/// Feature axis shared by `X` and `W`.
const INPUT_SIZE_AXIS: usize = 1;

/// Common configuration of recurrent-cell operators.
///
/// Owns the hidden size, clip threshold, and activation configuration a
/// concrete cell was constructed with, and is immutable for the rest of the
/// owning operator's lifetime. Activation names are stored lowercase;
/// resolving them against the registry is deferred until
/// [`Self::get_activation_function`] is called, so a cell can be constructed
/// before its activation names are guaranteed valid. Shape validation, by
/// contrast, is eager.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecurrentCellBase {
    hidden_size: usize,
    clip: f32,
    activations: Vec<String>,
    activations_alpha: Vec<f32>,
    activations_beta: Vec<f32>,
}

/// Lowercase every name with a locale-independent ASCII fold.
fn to_lower_case(names: Vec<String>) -> Vec<String> {
    names.into_iter().map(|s| s.to_ascii_lowercase()).collect()
}

impl RecurrentCellBase {
    /// `activations_alpha`/`activations_beta` are aligned by index with
    /// `activations` and may be shorter; uncovered slots fall back to the
    /// registry defaults for that activation kind.
    pub fn new(
        hidden_size: usize,
        clip: f32,
        activations: Vec<String>,
        activations_alpha: Vec<f32>,
        activations_beta: Vec<f32>,
    ) -> Self {
        Self {
            hidden_size,
            clip,
            activations: to_lower_case(activations),
            activations_alpha,
            activations_beta,
        }
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Clip threshold; `0.0` disables clipping.
    pub fn clip(&self) -> f32 {
        self.clip
    }

    pub fn activations(&self) -> &[String] {
        &self.activations
    }

    pub fn activations_alpha(&self) -> &[f32] {
        &self.activations_alpha
    }

    pub fn activations_beta(&self) -> &[f32] {
        &self.activations_beta
    }

    /// Validate the ranks and cross-input dimensions of a cell's inputs.
    ///
    /// `inputs` is positional: `X`, `initial_hidden_state`, `W`, `R`, `B`.
    /// Every rank must be statically known, the bias `B` must be rank 1 and
    /// all other inputs rank 2, and the input_size axis of `X` must be
    /// compatible with that of `W`. Mutual consistency of `W`/`R`/`B` is the
    /// concrete cell's job, since only it knows its gate-count multiplier.
    ///
    /// Called once per operator, during its shape-inference phase. `node`
    /// identifies the owning operator in error messages.
    pub fn validate_input_rank_dimension(
        &self,
        node: &str,
        inputs: &[TensorShape],
    ) -> Result<(), CellError> {
        log::debug!("validating {} cell inputs for node '{node}'", inputs.len());

        // All ranks must be statically known before any rank value is checked.
        let mut ranks = Vec::with_capacity(inputs.len());
        for (index, shape) in inputs.iter().enumerate() {
            match shape.rank() {
                Some(rank) => ranks.push(rank),
                None => {
                    return Err(CellError::RankUnknown {
                        node: node.to_string(),
                        index,
                    });
                }
            }
        }

        for (index, &actual) in ranks.iter().enumerate() {
            let expected = if index == B { 1 } else { 2 };
            if actual != expected {
                return Err(CellError::RankMismatch {
                    node: node.to_string(),
                    index,
                    expected,
                    actual,
                });
            }
        }

        // X and W must agree on the input_size axis.
        if inputs.len() > W {
            let x = inputs[X].dim(INPUT_SIZE_AXIS);
            let w = inputs[W].dim(INPUT_SIZE_AXIS);
            if !dims_compatible(x, w) {
                return Err(CellError::DimensionMismatch {
                    node: node.to_string(),
                    x,
                    w,
                });
            }
        }

        Ok(())
    }

    /// Resolve the activation configured for application site `index`.
    ///
    /// The stored name is looked up in the activation registry, then the
    /// per-site alpha/beta overrides are applied when the coefficient lists
    /// reach `index`. Unknown activation names surface here, not at
    /// construction.
    pub fn get_activation_function(&self, index: usize) -> Result<ActivationFunction, CellError> {
        let name = self
            .activations
            .get(index)
            .ok_or(CellError::ActivationIndex {
                index,
                count: self.activations.len(),
            })?;

        let mut func = get_activation_func_by_name(name)?;
        if let Some(&alpha) = self.activations_alpha.get(index) {
            func.set_alpha(alpha);
        }
        if let Some(&beta) = self.activations_beta.get(index) {
            func.set_beta(beta);
        }
        Ok(func)
    }

    /// Clamp `value` into `[-clip, clip]`, or return the same value when
    /// clipping is disabled (no node is introduced).
    pub fn apply_clip(&self, value: &Value) -> Value {
        if self.clip == 0.0 {
            return value.clone();
        }
        elementwise::clamp(value, -self.clip, self.clip)
    }

    /// `lhs + rhs`.
    pub fn add(lhs: &Value, rhs: &Value) -> Value {
        elementwise::add(lhs, rhs)
    }

    /// `lhs - rhs`.
    pub fn sub(lhs: &Value, rhs: &Value) -> Value {
        elementwise::sub(lhs, rhs)
    }

    /// `lhs * rhs`.
    pub fn mul(lhs: &Value, rhs: &Value) -> Value {
        elementwise::mul(lhs, rhs)
    }

    /// Present the five cell attributes to `visitor`, in the fixed order
    /// `hidden_size`, `activations`, `activations_alpha`, `activations_beta`,
    /// `clip`. No validation happens here, in either direction.
    pub fn visit_attributes(&mut self, visitor: &mut dyn AttributeVisitor) {
        visitor.on_attribute("hidden_size", AttrValue::Usize(&mut self.hidden_size));
        visitor.on_attribute("activations", AttrValue::Strings(&mut self.activations));
        visitor.on_attribute(
            "activations_alpha",
            AttrValue::Floats(&mut self.activations_alpha),
        );
        visitor.on_attribute(
            "activations_beta",
            AttrValue::Floats(&mut self.activations_beta),
        );
        visitor.on_attribute("clip", AttrValue::F32(&mut self.clip));
    }
}
