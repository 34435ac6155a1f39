//! Serde support for calculator numbers.
//!
//! Results and the memory cell can overflow to `Infinity` (and from there
//! reach `NaN`). JSON has no literal for either, so finite values are
//! written as plain numbers and non-finite ones by the same name the entry
//! buffer shows: `"Infinity"`, `"-Infinity"` or `"NaN"`.
//!
//! Used through `#[serde(with = "crate::core::number")]` and, for optional
//! operands, `crate::core::number::option`.

use super::operation::stringify_value;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, Debug)]
struct Number(f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored {
    Finite(f64),
    Named(String),
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_str(&stringify_value(self.0))
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Stored::deserialize(deserializer)? {
            Stored::Finite(value) => Ok(Number(value)),
            Stored::Named(name) => match name.as_str() {
                "Infinity" => Ok(Number(f64::INFINITY)),
                "-Infinity" => Ok(Number(f64::NEG_INFINITY)),
                "NaN" => Ok(Number(f64::NAN)),
                other => Err(D::Error::custom(format!(
                    "expected a number, \"Infinity\", \"-Infinity\" or \"NaN\", found \"{other}\""
                ))),
            },
        }
    }
}

pub(crate) fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Number(*value).serialize(serializer)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Number::deserialize(deserializer).map(|number| number.0)
}

pub(crate) mod option {
    use super::Number;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(crate) fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.map(Number).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Number>::deserialize(deserializer)?.map(|number| number.0))
    }
}
