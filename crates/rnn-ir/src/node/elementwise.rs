//! Element-wise node factories
//!
//! Thin constructors for the binary arithmetic and clamp nodes recurrent
//! cells compose their internal subgraph from. No shape checking happens
//! here; the concrete element-wise operators validate broadcasting
//! downstream.

use crate::ir::{OpKind, Value};

/// `lhs + rhs` as a new graph node.
pub fn add(lhs: &Value, rhs: &Value) -> Value {
    Value::new(OpKind::Add, vec![lhs.clone(), rhs.clone()])
}

/// `lhs - rhs` as a new graph node.
pub fn sub(lhs: &Value, rhs: &Value) -> Value {
    Value::new(OpKind::Sub, vec![lhs.clone(), rhs.clone()])
}

/// `lhs * rhs` as a new graph node.
pub fn mul(lhs: &Value, rhs: &Value) -> Value {
    Value::new(OpKind::Mul, vec![lhs.clone(), rhs.clone()])
}

/// Element-wise clamp of `data` into `[min, max]`.
pub fn clamp(data: &Value, min: f32, max: f32) -> Value {
    Value::new(OpKind::Clamp { min, max }, vec![data.clone()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_builders_reference_both_operands() {
        let x = Value::parameter("x");
        let y = Value::parameter("y");

        for (value, op) in [
            (add(&x, &y), OpKind::Add),
            (sub(&x, &y), OpKind::Sub),
            (mul(&x, &y), OpKind::Mul),
        ] {
            assert_eq!(value.op(), &op);
            assert_eq!(value.inputs().len(), 2);
            assert!(value.inputs()[0].same_node(&x));
            assert!(value.inputs()[1].same_node(&y));
        }
    }

    #[test]
    fn test_clamp_carries_bounds() {
        let x = Value::parameter("x");
        let clamped = clamp(&x, -3.0, 3.0);

        assert_eq!(clamped.op(), &OpKind::Clamp { min: -3.0, max: 3.0 });
        assert!(clamped.inputs()[0].same_node(&x));
    }
}
