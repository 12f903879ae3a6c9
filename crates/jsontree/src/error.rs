use std::error::Error;
use std::fmt;

/// Error returned when a value cannot be converted into a JSON tree.
///
/// Produced by [`JsonValue::of`] and the [`IntoJson`] implementations it
/// relies on. Carries a human-readable description of the rejected value
/// and, optionally, the underlying failure.
///
/// [`JsonValue::of`]: crate::JsonValue::of
/// [`IntoJson`]: crate::IntoJson
#[derive(Debug)]
pub struct ConversionError {
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ConversionError {
    /// Creates an error describing the rejected value.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying failure.
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn Error + 'static))
    }
}

/// Error returned by [`JsonValue::at`] for an index outside the array.
///
/// For values that are not arrays the valid range is empty, so every index
/// fails with `len` equal to zero.
///
/// [`JsonValue::at`]: crate::JsonValue::at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    index: usize,
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl IndexError {
    pub(crate) fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    /// The requested index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The number of elements that were available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index out of bounds: the len is {} but the index is {}",
            self.len, self.index
        )
    }
}

impl Error for IndexError {}
