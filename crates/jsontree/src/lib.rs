//! # jsontree
//!
//! An immutable JSON value model with visitor traversal, hierarchy-preserving
//! filtering, and shallow/deep mapping.
//!
//! [`JsonValue`] is a closed set of six variants: object, array, string,
//! number, boolean, and null. Values are built bottom-up, never mutated, and
//! every transformation returns a new value, so instances can be shared freely
//! between threads.
//!
//! ```rust
//! use jsontree::JsonValue;
//!
//! let document = JsonValue::object([
//!     ("a", JsonValue::from(1)),
//!     ("b", JsonValue::object([("c", 2), ("d", 3)])),
//! ]);
//!
//! // Hierarchy-preserving filtering: a branch survives when it matches
//! // directly or any of its descendants does.
//! let filtered = document.filter(|value| {
//!     value.as_number().is_some_and(|number| number.as_f64() > 2.0)
//! });
//! assert_eq!(filtered.stringify(), r#"{"b" : {"d" : 3}}"#);
//! ```
//!
//! Construction goes through the factory surface: `From` conversions and
//! [`JsonValue::array`]/[`JsonValue::object`] for literals, and the
//! [`IntoJson`] capability behind [`JsonValue::of`] for everything else.
//! With the `serde_json` feature, already-parsed [`serde_json::Value`] trees
//! convert structurally through the same capability; no JSON text parser is
//! exposed either way.
//!
//! ## Serialization
//!
//! [`JsonValue::stringify`] writes the fixed canonical form: `"key" : value`
//! members separated by bare commas, with no indentation options. String
//! content is written
//! **without escaping**, so values containing quotes, backslashes, or control
//! characters produce output that is not valid JSON text. Recursive
//! operations consume call stack proportional to nesting depth; the crate
//! targets trusted documents of bounded depth.
//!
//! [`serde_json::Value`]: https://docs.rs/serde_json/latest/serde_json/enum.Value.html

mod convert;
mod error;
mod filter;
mod impls;
mod map;
mod path;
mod value;
mod visit;

pub use convert::IntoJson;
pub use error::{ConversionError, IndexError};
pub use path::{Path, Segment};
pub use value::{JsonArray, JsonObject, JsonValue, Number};
pub use visit::Visit;
