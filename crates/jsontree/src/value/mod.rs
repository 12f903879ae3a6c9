mod display;
mod number;

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

pub use number::Number;

use crate::error::IndexError;

/// Insertion-ordered map backing the [`JsonValue::Object`] variant.
///
/// Keys are unique; inserting an existing key replaces the value but keeps
/// the original position. The order is observable through serialization and
/// traversal.
pub type JsonObject = IndexMap<String, JsonValue, ahash::RandomState>;

/// Sequence backing the [`JsonValue::Array`] variant.
pub type JsonArray = Vec<JsonValue>;

/// An immutable JSON value.
///
/// The six variants are the whole model; there is no other shape. Values are
/// trees built bottom-up from already-constructed children, so cycles cannot
/// occur, and the API offers no in-place mutation: every transformation
/// ([`filter`], [`map`], [`deep_map`], ...) returns a new value.
///
/// Equality is deep and structural. Object comparison ignores key order,
/// array comparison is order-sensitive, and `1` never equals `1.0` (see
/// [`Number`]). `Hash` is consistent with equality.
///
/// ```rust
/// use jsontree::JsonValue;
///
/// let document = JsonValue::object([
///     ("name", JsonValue::from("jsontree")),
///     ("stars", JsonValue::from(42)),
/// ]);
/// assert_eq!(document.stringify(), r#"{"name" : "jsontree","stars" : 42}"#);
/// ```
///
/// [`filter`]: JsonValue::filter
/// [`map`]: JsonValue::map
/// [`deep_map`]: JsonValue::deep_map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(JsonArray),
    Object(JsonObject),
}

impl JsonValue {
    /// Creates an array from anything convertible to JSON values.
    ///
    /// ```rust
    /// use jsontree::JsonValue;
    ///
    /// let array = JsonValue::array([1, 2, 3]);
    /// assert_eq!(array.stringify(), "[1,2,3]");
    /// ```
    #[must_use]
    pub fn array(elements: impl IntoIterator<Item = impl Into<JsonValue>>) -> JsonValue {
        JsonValue::Array(elements.into_iter().map(Into::into).collect())
    }

    /// Creates an object from key-value pairs, preserving their order.
    ///
    /// Duplicate keys keep the first occurrence's position and the last
    /// occurrence's value.
    ///
    /// ```rust
    /// use jsontree::JsonValue;
    ///
    /// let object = JsonValue::object([("a", 1), ("b", 2)]);
    /// assert_eq!(object.stringify(), r#"{"a" : 1,"b" : 2}"#);
    /// ```
    #[must_use]
    pub fn object(
        entries: impl IntoIterator<Item = (impl Into<String>, impl Into<JsonValue>)>,
    ) -> JsonValue {
        JsonValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Returns `true` for [`JsonValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns `true` for the container variants, `Array` and `Object`.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    /// Returns `true` for `Null`, `Bool`, `Number`, and `String`.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        !self.is_composite()
    }

    /// The underlying `bool`, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The underlying [`Number`], if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            JsonValue::Number(number) => Some(number),
            _ => None,
        }
    }

    /// The underlying text, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(text) => Some(text),
            _ => None,
        }
    }

    /// The underlying elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// The underlying map, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Looks up a key in an object.
    ///
    /// Absence is a value, not a fault: a missing key and a non-object
    /// receiver both yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(object) => object.get(key),
            _ => None,
        }
    }

    /// Looks up an element of an array by position.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] when `index` falls outside `[0, len)`. For
    /// values that are not arrays the valid range is empty.
    pub fn at(&self, index: usize) -> Result<&JsonValue, IndexError> {
        let elements = match self {
            JsonValue::Array(elements) => elements.as_slice(),
            _ => &[],
        };
        elements
            .get(index)
            .ok_or_else(|| IndexError::new(index, elements.len()))
    }

    /// Renders the canonical string form of this value.
    ///
    /// Objects serialize as `{"key" : value}` pairs with a single space on
    /// each side of the colon, arrays as `[a,b]`, numbers in their stored
    /// representation (`1` and `1.0` stay distinct), and `true`/`false`/`null`
    /// as bare literals. The same value always produces identical output.
    ///
    /// Strings are wrapped in double quotes **without escaping**: embedded
    /// quotes, backslashes, or control characters are written through
    /// verbatim and produce output that is not valid JSON text. This is a
    /// known limitation of the wire format, not an option.
    ///
    /// ```rust
    /// use jsontree::JsonValue;
    ///
    /// let value = JsonValue::object([("x", 1)]);
    /// assert_eq!(value.stringify(), r#"{"x" : 1}"#);
    /// ```
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl Hash for JsonValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            JsonValue::Null => state.write_u8(0),
            JsonValue::Bool(value) => {
                state.write_u8(1);
                value.hash(state);
            }
            JsonValue::Number(number) => {
                state.write_u8(2);
                number.hash(state);
            }
            JsonValue::String(text) => {
                state.write_u8(3);
                text.hash(state);
            }
            JsonValue::Array(elements) => {
                state.write_u8(4);
                state.write_usize(elements.len());
                for element in elements {
                    element.hash(state);
                }
            }
            JsonValue::Object(object) => {
                state.write_u8(5);
                state.write_usize(object.len());
                // Entry hashes come from a fixed-key hasher and are combined
                // with a commutative operation, so the result does not depend
                // on key order. Equality ignores key order as well.
                let mut combined = 0u64;
                for (key, value) in object {
                    let mut entry = ahash::AHasher::default();
                    key.hash(&mut entry);
                    value.hash(&mut entry);
                    combined = combined.wrapping_add(entry.finish());
                }
                state.write_u64(combined);
            }
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::Number(Number::from(value))
                }
            }
        )*
    };
}

from_integer!(u8 u16 u32 u64 usize i8 i16 i32 i64 isize);

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::from(f64::from(value))
    }
}

impl From<f64> for JsonValue {
    /// Non-finite floats have no JSON representation and become `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(JsonValue::Null, JsonValue::Number)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<()> for JsonValue {
    fn from((): ()) -> Self {
        JsonValue::Null
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(elements: Vec<T>) -> Self {
        JsonValue::array(elements)
    }
}

impl<T: Into<JsonValue> + Clone> From<&[T]> for JsonValue {
    fn from(elements: &[T]) -> Self {
        JsonValue::array(elements.iter().cloned())
    }
}

impl From<JsonObject> for JsonValue {
    fn from(object: JsonObject) -> Self {
        JsonValue::Object(object)
    }
}

impl<T: Into<JsonValue>> FromIterator<T> for JsonValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        JsonValue::array(iter)
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonValue::object(iter)
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use test_case::test_case;

    use super::{JsonArray, JsonValue, Number};

    fn hash(value: &JsonValue) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn null_is_the_default() {
        assert_eq!(JsonValue::default(), JsonValue::Null);
        assert!(JsonValue::default().is_null());
    }

    #[test_case(JsonValue::Null, true)]
    #[test_case(JsonValue::Bool(true), true)]
    #[test_case(JsonValue::from(1), true)]
    #[test_case(JsonValue::from("text"), true)]
    #[test_case(JsonValue::array([1]), false)]
    #[test_case(JsonValue::object([("a", 1)]), false)]
    fn scalar_and_composite_split(value: JsonValue, scalar: bool) {
        assert_eq!(value.is_scalar(), scalar);
        assert_eq!(value.is_composite(), !scalar);
    }

    #[test]
    fn object_equality_ignores_key_order() {
        let first = JsonValue::object([("a", 1), ("b", 2)]);
        let second = JsonValue::object([("b", 2), ("a", 1)]);
        assert_eq!(first, second);
        assert_eq!(hash(&first), hash(&second));
        // Serialization still observes construction order.
        assert_ne!(first.stringify(), second.stringify());
    }

    #[test]
    fn array_equality_is_order_sensitive() {
        assert_ne!(JsonValue::array([1, 2]), JsonValue::array([2, 1]));
        assert_eq!(JsonValue::array([1, 2]), JsonValue::array([1, 2]));
    }

    #[test]
    fn nested_equality_is_deep() {
        let make = || JsonValue::object([("outer", JsonValue::array([1, 2, 3]))]);
        assert_eq!(make(), make());
        assert_eq!(hash(&make()), hash(&make()));
    }

    #[test]
    fn variants_with_similar_contents_stay_distinct() {
        let array = JsonValue::array([1, 2]);
        let object = JsonValue::object([("1", 2)]);
        assert_ne!(array, object);
        assert_ne!(hash(&array), hash(&object));
    }

    #[test]
    fn duplicate_keys_keep_first_position_last_value() {
        let object = JsonValue::object([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(object.get("a"), Some(&JsonValue::from(3)));
        assert_eq!(object.stringify(), r#"{"a" : 3,"b" : 2}"#);
    }

    #[test]
    fn get_on_object() {
        let object = JsonValue::object([("a", 1)]);
        assert_eq!(object.get("a"), Some(&JsonValue::from(1)));
        assert_eq!(object.get("missing"), None);
    }

    #[test]
    fn get_on_non_object_is_none() {
        assert_eq!(JsonValue::array([1]).get("a"), None);
        assert_eq!(JsonValue::from("text").get("a"), None);
    }

    #[test]
    fn at_within_bounds() {
        let array = JsonValue::array([10, 20]);
        assert_eq!(array.at(0).unwrap(), &JsonValue::from(10));
        assert_eq!(array.at(1).unwrap(), &JsonValue::from(20));
    }

    #[test]
    fn at_out_of_bounds() {
        let array = JsonValue::array([10, 20]);
        let error = array.at(2).unwrap_err();
        assert_eq!(error.index(), 2);
        assert_eq!(error.len(), 2);
    }

    #[test]
    fn at_on_non_array_has_empty_range() {
        let error = JsonValue::object([("a", 1)]).at(0).unwrap_err();
        assert_eq!(error.index(), 0);
        assert_eq!(error.len(), 0);
    }

    #[test]
    fn accessors_match_variants() {
        assert_eq!(JsonValue::Bool(true).as_bool(), Some(true));
        assert_eq!(JsonValue::from("text").as_str(), Some("text"));
        assert_eq!(
            JsonValue::from(7).as_number(),
            Some(&Number::from(7_u64))
        );
        assert_eq!(JsonValue::array([1]).as_array().map(<[JsonValue]>::len), Some(1));
        assert_eq!(JsonValue::object([("a", 1)]).as_object().map(super::JsonObject::len), Some(1));
        assert_eq!(JsonValue::Null.as_bool(), None);
        assert_eq!(JsonValue::Bool(true).as_str(), None);
    }

    #[test]
    fn conversions_from_primitives() {
        assert_eq!(JsonValue::from(true), JsonValue::Bool(true));
        assert_eq!(JsonValue::from(-5), JsonValue::Number(Number::from(-5)));
        assert_eq!(JsonValue::from(2.5), JsonValue::Number(Number::from_f64(2.5).unwrap()));
        assert_eq!(JsonValue::from("text"), JsonValue::String("text".into()));
        assert_eq!(JsonValue::from(String::from("text")), JsonValue::String("text".into()));
        assert_eq!(JsonValue::from(()), JsonValue::Null);
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!(JsonValue::from(f64::NAN), JsonValue::Null);
        assert_eq!(JsonValue::from(f64::INFINITY), JsonValue::Null);
        assert_eq!(JsonValue::from(f32::NEG_INFINITY), JsonValue::Null);
    }

    #[test]
    fn conversions_from_options() {
        assert_eq!(JsonValue::from(Some(1)), JsonValue::from(1));
        assert_eq!(JsonValue::from(None::<i32>), JsonValue::Null);
    }

    #[test]
    fn conversions_from_sequences() {
        assert_eq!(JsonValue::from(vec![1, 2]), JsonValue::array([1, 2]));
        assert_eq!(JsonValue::from(&["a", "b"][..]), JsonValue::array(["a", "b"]));
    }

    #[test]
    fn collecting_values() {
        let array: JsonValue = (1..=3).collect();
        assert_eq!(array, JsonValue::array([1, 2, 3]));

        let object: JsonValue = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(object, JsonValue::object([("a", 1), ("b", 2)]));
    }

    #[test]
    fn empty_composites() {
        assert_eq!(JsonValue::Array(JsonArray::new()).stringify(), "[]");
        assert_eq!(JsonValue::Object(super::JsonObject::default()).stringify(), "{}");
    }
}
