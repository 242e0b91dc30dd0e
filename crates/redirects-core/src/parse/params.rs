//! Rule parameters.
//!
//! Fields after the status are free-form `key=value` pairs or bare flags.
//! Their meaning is left to the consumer.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// The value of a single rule parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    /// A bare key with no `=` (e.g. `Country`). Serializes as `true`.
    Flag,
    /// The text after the first `=` (e.g. `foo=bar` → `"bar"`).
    Text(String),
}

impl ParamValue {
    /// Returns true if this is a bare flag.
    pub fn is_flag(&self) -> bool {
        matches!(self, ParamValue::Flag)
    }

    /// Returns the text value, or `None` for a flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Flag => None,
            ParamValue::Text(text) => Some(text),
        }
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Flag => f.write_str("true"),
            ParamValue::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Flag => serializer.serialize_bool(true),
            ParamValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// The parameters attached to a rule, keyed by name.
///
/// Keys are kept sorted so iteration and serialized output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) {
        self.0.insert(key.into(), value);
    }

    /// Returns true if the parameter is present.
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the parameter value.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match value {
                ParamValue::Flag => f.write_str(key)?,
                ParamValue::Text(text) => write!(f, "{}={}", key, text)?,
            }
        }
        Ok(())
    }
}

/// Decodes a single parameter field.
///
/// Splits once on the first `=`; anything after it, including further `=`
/// characters, is the value. A field without `=` is a flag.
pub fn parse_param(field: &str) -> (&str, ParamValue) {
    match field.split_once('=') {
        Some((key, value)) => (key, ParamValue::Text(value.to_string())),
        None => (field, ParamValue::Flag),
    }
}

/// Decodes the parameter fields of a rule line.
///
/// Later fields overwrite earlier ones with the same key. Never fails.
pub fn parse_params<'a>(fields: impl IntoIterator<Item = &'a str>) -> Params {
    fields.into_iter().map(parse_param).collect()
}
