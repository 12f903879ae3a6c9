use crate::value::{JsonObject, JsonValue, Number};

/// Per-variant callbacks driven by [`JsonValue::accept`].
///
/// Every callback defaults to a no-op, so implementors only write the ones
/// they need. Each receives the node itself plus the key under which it is
/// stored in its enclosing object, when there is one:
///
/// - the root is reported with `None`,
/// - object members are reported with `Some(their key)`,
/// - array elements are reported with `None`; positions are not propagated
///   as keys, so callers that need them track indexes themselves or use
///   [`JsonValue::filter_with_path`].
///
/// ```rust
/// use jsontree::{JsonValue, Visit};
///
/// #[derive(Default)]
/// struct KeyCollector {
///     keys: Vec<String>,
/// }
///
/// impl Visit for KeyCollector {
///     fn visit_number(&mut self, _value: &jsontree::Number, key: Option<&str>) {
///         if let Some(key) = key {
///             self.keys.push(key.to_owned());
///         }
///     }
/// }
///
/// let document = JsonValue::object([("a", 1), ("b", 2)]);
/// let mut collector = KeyCollector::default();
/// document.accept(&mut collector);
/// assert_eq!(collector.keys, ["a", "b"]);
/// ```
#[allow(unused_variables)]
pub trait Visit {
    /// Called for every `Null` node.
    fn visit_null(&mut self, key: Option<&str>) {}

    /// Called for every boolean node.
    fn visit_bool(&mut self, value: bool, key: Option<&str>) {}

    /// Called for every number node.
    fn visit_number(&mut self, value: &Number, key: Option<&str>) {}

    /// Called for every string node.
    fn visit_string(&mut self, value: &str, key: Option<&str>) {}

    /// Called for every array node, before its elements are visited.
    fn visit_array(&mut self, elements: &[JsonValue], key: Option<&str>) {}

    /// Called for every object node, before its members are visited.
    fn visit_object(&mut self, object: &JsonObject, key: Option<&str>) {}
}

impl JsonValue {
    /// Drives a visitor over this value in pre-order, depth-first.
    ///
    /// The driver owns the recursion: a composite's callback fires before its
    /// children are descended into, every node is visited exactly once, and
    /// there is no early termination. Recursion depth follows input nesting
    /// depth.
    pub fn accept<V: Visit>(&self, visitor: &mut V) {
        self.accept_with_key(visitor, None);
    }

    fn accept_with_key<V: Visit>(&self, visitor: &mut V, key: Option<&str>) {
        match self {
            JsonValue::Null => visitor.visit_null(key),
            JsonValue::Bool(value) => visitor.visit_bool(*value, key),
            JsonValue::Number(number) => visitor.visit_number(number, key),
            JsonValue::String(text) => visitor.visit_string(text, key),
            JsonValue::Array(elements) => {
                visitor.visit_array(elements, key);
                for element in elements {
                    element.accept_with_key(visitor, None);
                }
            }
            JsonValue::Object(object) => {
                visitor.visit_object(object, key);
                for (child_key, value) in object {
                    value.accept_with_key(visitor, Some(child_key));
                }
            }
        }
    }
}
