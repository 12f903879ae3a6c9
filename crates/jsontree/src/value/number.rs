use core::fmt;
use std::hash::{Hash, Hasher};

/// A JSON number.
///
/// The representation chosen at construction time is kept for the lifetime
/// of the value: a non-negative integer, a negative integer, or a finite
/// float. The two families never collapse into each other, so `1` and `1.0`
/// are different numbers with different serialized forms.
///
/// NaN and infinities have no JSON representation and cannot be constructed;
/// see [`Number::from_f64`].
#[derive(Debug, Copy, Clone)]
pub struct Number {
    n: N,
}

#[derive(Debug, Copy, Clone)]
enum N {
    PositiveInteger(u64),
    NegativeInteger(i64),
    Float(f64),
}

impl Number {
    /// Creates a `Number` from a finite `f64`.
    ///
    /// Returns `None` for NaN and infinite values.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Number> {
        if value.is_finite() {
            Some(Number {
                n: N::Float(value),
            })
        } else {
            None
        }
    }

    /// Returns `true` if the number is an integer in the `u64` range.
    #[must_use]
    pub fn is_u64(&self) -> bool {
        matches!(self.n, N::PositiveInteger(_))
    }

    /// Returns `true` if the number is an integer in the `i64` range.
    #[must_use]
    pub fn is_i64(&self) -> bool {
        match self.n {
            N::PositiveInteger(value) => i64::try_from(value).is_ok(),
            N::NegativeInteger(_) => true,
            N::Float(_) => false,
        }
    }

    /// Returns `true` if the number is stored as a float.
    #[must_use]
    pub fn is_f64(&self) -> bool {
        matches!(self.n, N::Float(_))
    }

    /// The number as a `u64`, if it is a non-negative integer.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            N::PositiveInteger(value) => Some(value),
            N::NegativeInteger(_) | N::Float(_) => None,
        }
    }

    /// The number as an `i64`, if it is an integer in the `i64` range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            N::PositiveInteger(value) => i64::try_from(value).ok(),
            N::NegativeInteger(value) => Some(value),
            N::Float(_) => None,
        }
    }

    /// The number as an `f64`. Integers above 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match self.n {
            N::PositiveInteger(value) => value as f64,
            N::NegativeInteger(value) => value as f64,
            N::Float(value) => value,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.n {
            N::PositiveInteger(value) => f.write_str(itoa::Buffer::new().format(value)),
            N::NegativeInteger(value) => f.write_str(itoa::Buffer::new().format(value)),
            // `Debug` keeps the decimal point on integral floats, so `1.0`
            // never collapses into the rendering of the integer `1`.
            N::Float(value) => write!(f, "{value:?}"),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (&self.n, &other.n) {
            (N::PositiveInteger(a), N::PositiveInteger(b)) => a == b,
            (N::NegativeInteger(a), N::NegativeInteger(b)) => a == b,
            (N::Float(a), N::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, h: &mut H) {
        match self.n {
            N::PositiveInteger(i) => i.hash(h),
            N::NegativeInteger(i) => i.hash(h),
            N::Float(f) => {
                if f == 0.0f64 {
                    // `0.0 == -0.0`, but their bit patterns differ.
                    0.0f64.to_bits().hash(h);
                } else {
                    f.to_bits().hash(h);
                }
            }
        }
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number {
            n: N::PositiveInteger(u64::from(value)),
        }
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number {
            n: N::PositiveInteger(u64::from(value)),
        }
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number {
            n: N::PositiveInteger(u64::from(value)),
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number {
            n: N::PositiveInteger(value),
        }
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number {
            n: N::PositiveInteger(value as u64),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::from(i64::from(value))
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::from(i64::from(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        // Non-negative integers always take the `u64` representation so that
        // `Number::from(1_i64) == Number::from(1_u64)`.
        if let Ok(positive) = u64::try_from(value) {
            Number {
                n: N::PositiveInteger(positive),
            }
        } else {
            Number {
                n: N::NegativeInteger(value),
            }
        }
    }
}

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Number::from(value as i64)
    }
}
