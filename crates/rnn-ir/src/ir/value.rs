//! Graph values
//!
//! A [`Value`] is a handle to an expression node in a cell's internal
//! subgraph: an operation plus the values it consumes. Handles are cheap to
//! clone; equality is structural, node identity is [`Value::same_node`].

use std::rc::Rc;

use crate::activation::ActivationKind;

/// Operation performed by a graph node.
#[derive(Debug, Clone, PartialEq)]
pub enum OpKind {
    /// External input to the subgraph being assembled.
    Parameter { name: String },
    Add,
    Sub,
    Mul,
    /// Element-wise clamp into `[min, max]`.
    Clamp { min: f32, max: f32 },
    /// Parametrized activation applied element-wise.
    Activation {
        kind: ActivationKind,
        alpha: f32,
        beta: f32,
    },
}

/// Handle to a node in the cell's internal subgraph.
#[derive(Debug, Clone)]
pub struct Value {
    inner: Rc<ValueInner>,
}

#[derive(Debug)]
struct ValueInner {
    op: OpKind,
    inputs: Vec<Value>,
}

impl Value {
    pub(crate) fn new(op: OpKind, inputs: Vec<Value>) -> Self {
        Self {
            inner: Rc::new(ValueInner { op, inputs }),
        }
    }

    /// External input to the subgraph being assembled.
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::new(OpKind::Parameter { name: name.into() }, Vec::new())
    }

    pub fn op(&self) -> &OpKind {
        &self.inner.op
    }

    pub fn inputs(&self) -> &[Value] {
        &self.inner.inputs
    }

    /// Whether two handles refer to the same node instance.
    pub fn same_node(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Structural equality: same operation over structurally equal inputs.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.inner.op == other.inner.op && self.inner.inputs == other.inner.inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_has_no_inputs() {
        let x = Value::parameter("X");
        assert!(x.inputs().is_empty());
        assert_eq!(
            x.op(),
            &OpKind::Parameter {
                name: "X".to_string()
            }
        );
    }

    #[test]
    fn test_structural_equality_across_instances() {
        let a = Value::new(OpKind::Add, vec![Value::parameter("x"), Value::parameter("y")]);
        let b = Value::new(OpKind::Add, vec![Value::parameter("x"), Value::parameter("y")]);
        assert_eq!(a, b);
        assert!(!a.same_node(&b));
    }

    #[test]
    fn test_clone_preserves_identity() {
        let a = Value::parameter("x");
        let b = a.clone();
        assert!(a.same_node(&b));
    }
}
