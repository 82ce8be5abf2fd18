//! Lenient decoding for whole-number fields.
//!
//! Catalog files and agent arguments often carry counts as JSON floats
//! (`250000.0`). These helpers accept any non-negative integral value and
//! reject fractions, negatives and values out of range for the target type.

use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use std::fmt;

struct WholeNumberVisitor;

impl<'de> Visitor<'de> for WholeNumberVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative whole number")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
            Ok(v as u64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}

struct WholeNumber(u64);

impl<'de> Deserialize<'de> for WholeNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WholeNumberVisitor).map(WholeNumber)
    }
}

fn narrow<T, E>(value: u64) -> Result<T, E>
where
    T: TryFrom<u64>,
    E: de::Error,
{
    T::try_from(value)
        .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &"a whole number in range"))
}

/// `deserialize_with` for required whole-number fields
pub fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    narrow(WholeNumber::deserialize(deserializer)?.0)
}

/// `deserialize_with` for optional whole-number fields; pair with `#[serde(default)]`
pub fn optional_whole_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    Option::<WholeNumber>::deserialize(deserializer)?
        .map(|n| narrow(n.0))
        .transpose()
}
