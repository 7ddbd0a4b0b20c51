//! Attribute introspection
//!
//! Push-based visitor protocol for operator attributes. The visited component
//! presents each attribute by name with a mutable reference; the visitor
//! decides whether it reads (serialization, cloning, hashing) or writes
//! (deserialization). The component is agnostic to the direction and always
//! presents the same attributes in the same order.

/// A single attribute value, presented by mutable reference so the same
/// protocol serves both directions.
#[derive(Debug)]
pub enum AttrValue<'a> {
    Usize(&'a mut usize),
    F32(&'a mut f32),
    Strings(&'a mut Vec<String>),
    Floats(&'a mut Vec<f32>),
}

/// Receiver side of attribute introspection.
pub trait AttributeVisitor {
    fn on_attribute(&mut self, name: &str, value: AttrValue<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NameRecorder {
        names: Vec<String>,
    }

    impl AttributeVisitor for NameRecorder {
        fn on_attribute(&mut self, name: &str, _value: AttrValue<'_>) {
            self.names.push(name.to_string());
        }
    }

    #[test]
    fn test_visitor_receives_mutable_reference() {
        struct Doubler;
        impl AttributeVisitor for Doubler {
            fn on_attribute(&mut self, _name: &str, value: AttrValue<'_>) {
                if let AttrValue::Usize(v) = value {
                    *v *= 2;
                }
            }
        }

        let mut size = 21usize;
        Doubler.on_attribute("hidden_size", AttrValue::Usize(&mut size));
        assert_eq!(size, 42);
    }

    #[test]
    fn test_visitor_records_names() {
        let mut recorder = NameRecorder { names: Vec::new() };
        let mut clip = 0.0f32;
        recorder.on_attribute("clip", AttrValue::F32(&mut clip));
        assert_eq!(recorder.names, vec!["clip"]);
    }
}
