use std::fmt;

use super::JsonValue;

/// Canonical serializer behind [`JsonValue::stringify`].
///
/// The format is fixed: `"key" : value` pairs inside `{}`, bare commas, no
/// other whitespace, no indentation mode, and no escaping of string content.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Bool(value) => f.write_str(if *value { "true" } else { "false" }),
            JsonValue::Number(number) => write!(f, "{number}"),
            JsonValue::String(text) => write!(f, "\"{text}\""),
            JsonValue::Array(elements) => {
                f.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            JsonValue::Object(object) => {
                f.write_str("{")?;
                for (index, (key, value)) in object.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "\"{key}\" : {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
