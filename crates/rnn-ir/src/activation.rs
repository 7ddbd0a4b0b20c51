//! Activation function resolution
//!
//! Maps the activation names recurrent cells are configured with to
//! parametrized activation descriptors. Resolution is the only place
//! activation names are validated, and it happens lazily when a cell first
//! asks for a configured slot, not at cell construction.

use std::str::FromStr;

use derive_new::new;

use crate::error::CellError;
use crate::ir::{OpKind, Value};

/// Activation functions recognized for recurrent cells (the ONNX name set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationKind {
    #[default]
    Tanh,
    Sigmoid,
    Relu,
    HardSigmoid,
    LeakyRelu,
    ThresholdedRelu,
    ScaledTanh,
    Elu,
    Softsign,
    Softplus,
    Affine,
}

impl FromStr for ActivationKind {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive matching on the canonical lowercase names
        match s.to_ascii_lowercase().as_str() {
            "tanh" => Ok(ActivationKind::Tanh),
            "sigmoid" => Ok(ActivationKind::Sigmoid),
            "relu" => Ok(ActivationKind::Relu),
            "hardsigmoid" => Ok(ActivationKind::HardSigmoid),
            "leakyrelu" => Ok(ActivationKind::LeakyRelu),
            "thresholdedrelu" => Ok(ActivationKind::ThresholdedRelu),
            "scaledtanh" => Ok(ActivationKind::ScaledTanh),
            "elu" => Ok(ActivationKind::Elu),
            "softsign" => Ok(ActivationKind::Softsign),
            "softplus" => Ok(ActivationKind::Softplus),
            "affine" => Ok(ActivationKind::Affine),
            _ => Err(CellError::UnknownActivation {
                name: s.to_string(),
            }),
        }
    }
}

impl ActivationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationKind::Tanh => "tanh",
            ActivationKind::Sigmoid => "sigmoid",
            ActivationKind::Relu => "relu",
            ActivationKind::HardSigmoid => "hardsigmoid",
            ActivationKind::LeakyRelu => "leakyrelu",
            ActivationKind::ThresholdedRelu => "thresholdedrelu",
            ActivationKind::ScaledTanh => "scaledtanh",
            ActivationKind::Elu => "elu",
            ActivationKind::Softsign => "softsign",
            ActivationKind::Softplus => "softplus",
            ActivationKind::Affine => "affine",
        }
    }

    /// Default alpha coefficient (ONNX recurrent-operator defaults).
    pub fn default_alpha(&self) -> f32 {
        match self {
            ActivationKind::HardSigmoid => 0.2,
            ActivationKind::LeakyRelu => 0.01,
            ActivationKind::Elu
            | ActivationKind::ThresholdedRelu
            | ActivationKind::ScaledTanh
            | ActivationKind::Affine => 1.0,
            _ => 0.0,
        }
    }

    /// Default beta coefficient (ONNX recurrent-operator defaults).
    pub fn default_beta(&self) -> f32 {
        match self {
            ActivationKind::HardSigmoid => 0.5,
            ActivationKind::ScaledTanh => 1.0,
            _ => 0.0,
        }
    }
}

/// A resolved activation together with its alpha/beta coefficients.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct ActivationFunction {
    kind: ActivationKind,
    alpha: f32,
    beta: f32,
}

impl ActivationFunction {
    pub fn kind(&self) -> ActivationKind {
        self.kind
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn beta(&self) -> f32 {
        self.beta
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    pub fn set_beta(&mut self, beta: f32) {
        self.beta = beta;
    }

    /// Apply to a graph value, producing the activation node. The activation
    /// math itself is carried out by the concrete operator downstream.
    pub fn apply(&self, data: &Value) -> Value {
        Value::new(
            OpKind::Activation {
                kind: self.kind,
                alpha: self.alpha,
                beta: self.beta,
            },
            vec![data.clone()],
        )
    }
}

/// Look up an activation by name, configured with the kind's default
/// coefficients. Matching is case-insensitive.
pub fn get_activation_func_by_name(name: &str) -> Result<ActivationFunction, CellError> {
    let kind: ActivationKind = name.parse()?;
    Ok(ActivationFunction::new(
        kind,
        kind.default_alpha(),
        kind.default_beta(),
    ))
}
