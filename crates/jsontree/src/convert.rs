use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use crate::{
    error::ConversionError,
    value::{JsonObject, JsonValue, Number},
};

/// Capability for converting a value into a [`JsonValue`].
///
/// This is the ingestion boundary of the model: [`JsonValue::of`] accepts
/// anything implementing it. Implementations are provided for the shapes the
/// model can classify on its own: primitives, strings, already-constructed
/// values, options, ordered sequences, and associative structures with
/// stringifiable keys.
///
/// Everything else describes its own mapping. A record type enumerates its
/// fields in declaration order:
///
/// ```rust
/// use jsontree::{ConversionError, IntoJson, JsonValue};
///
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// impl IntoJson for Server {
///     fn into_json(self) -> Result<JsonValue, ConversionError> {
///         Ok(JsonValue::object([
///             ("host", JsonValue::from(self.host)),
///             ("port", JsonValue::from(self.port)),
///         ]))
///     }
/// }
///
/// let json = JsonValue::of(Server { host: "localhost".into(), port: 8080 })?;
/// assert_eq!(json.stringify(), r#"{"host" : "localhost","port" : 8080}"#);
/// # Ok::<(), ConversionError>(())
/// ```
///
/// A named-constant type converts to the string form of its symbolic name:
///
/// ```rust
/// use jsontree::{ConversionError, IntoJson, JsonValue};
///
/// enum Status {
///     Active,
///     Disabled,
/// }
///
/// impl IntoJson for Status {
///     fn into_json(self) -> Result<JsonValue, ConversionError> {
///         Ok(JsonValue::from(match self {
///             Status::Active => "Active",
///             Status::Disabled => "Disabled",
///         }))
///     }
/// }
///
/// assert_eq!(JsonValue::of(Status::Active)?.stringify(), "\"Active\"");
/// # Ok::<(), ConversionError>(())
/// ```
pub trait IntoJson {
    /// Converts `self` into a [`JsonValue`].
    ///
    /// The conversion is purely functional and produces no partial results:
    /// the first failure aborts the whole conversion.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the value cannot be represented in
    /// the model.
    fn into_json(self) -> Result<JsonValue, ConversionError>;
}

impl JsonValue {
    /// Converts an arbitrary convertible value into the model.
    ///
    /// An already-constructed `JsonValue` passes through unchanged; every
    /// other shape converts per its [`IntoJson`] implementation, recursing
    /// through sequences and associative structures. Map keys are coerced to
    /// their string form and the resulting object follows the source map's
    /// iteration order.
    ///
    /// ```rust
    /// use jsontree::JsonValue;
    ///
    /// let json = JsonValue::of(vec![Some(1), None, Some(3)])?;
    /// assert_eq!(json.stringify(), "[1,null,3]");
    /// # Ok::<(), jsontree::ConversionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when any part of the input cannot be
    /// represented; the error of the first failing element surfaces
    /// unmodified.
    pub fn of<T: IntoJson>(value: T) -> Result<JsonValue, ConversionError> {
        value.into_json()
    }
}

impl IntoJson for JsonValue {
    fn into_json(self) -> Result<JsonValue, ConversionError> {
        Ok(self)
    }
}

macro_rules! infallible {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoJson for $ty {
                fn into_json(self) -> Result<JsonValue, ConversionError> {
                    Ok(JsonValue::from(self))
                }
            }
        )*
    };
}

infallible!(
    bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64, &str, String, (), Number
);

impl<T: IntoJson> IntoJson for Option<T> {
    fn into_json(self) -> Result<JsonValue, ConversionError> {
        match self {
            Some(value) => value.into_json(),
            None => Ok(JsonValue::Null),
        }
    }
}

fn from_elements<T: IntoJson>(
    elements: impl IntoIterator<Item = T>,
) -> Result<JsonValue, ConversionError> {
    elements
        .into_iter()
        .map(IntoJson::into_json)
        .collect::<Result<Vec<_>, _>>()
        .map(JsonValue::Array)
}

fn from_entries<K: ToString, V: IntoJson>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> Result<JsonValue, ConversionError> {
    entries
        .into_iter()
        .map(|(key, value)| Ok((key.to_string(), value.into_json()?)))
        .collect::<Result<JsonObject, _>>()
        .map(JsonValue::Object)
}

impl<T: IntoJson> IntoJson for Vec<T> {
    fn into_json(self) -> Result<JsonValue, ConversionError> {
        from_elements(self)
    }
}

impl<T: IntoJson, const N: usize> IntoJson for [T; N] {
    fn into_json(self) -> Result<JsonValue, ConversionError> {
        from_elements(self)
    }
}

impl<T: IntoJson + Clone> IntoJson for &[T] {
    fn into_json(self) -> Result<JsonValue, ConversionError> {
        from_elements(self.iter().cloned())
    }
}

impl<K: ToString, V: IntoJson, S> IntoJson for IndexMap<K, V, S> {
    fn into_json(self) -> Result<JsonValue, ConversionError> {
        from_entries(self)
    }
}

impl<K: ToString, V: IntoJson, S> IntoJson for HashMap<K, V, S> {
    fn into_json(self) -> Result<JsonValue, ConversionError> {
        from_entries(self)
    }
}

impl<K: ToString, V: IntoJson> IntoJson for BTreeMap<K, V> {
    fn into_json(self) -> Result<JsonValue, ConversionError> {
        from_entries(self)
    }
}
