use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Strings starting with this token are "not yet provided".
pub const PLACEHOLDER_PREFIX: &str = "TODO:";

pub fn is_placeholder(s: &str) -> bool {
    s.starts_with(PLACEHOLDER_PREFIX)
}

/// A hand-edited value in one of three states.
///
/// On the wire `Unset` is `null` (or a missing key), `Placeholder` is any
/// string carrying the `TODO:` prefix, and everything else is `Provided`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Unset,
    Placeholder(String),
    Provided(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    pub fn provided(&self) -> Option<&T> {
        match self {
            Field::Provided(v) => Some(v),
            Field::Unset | Field::Placeholder(_) => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }
}

impl Field<String> {
    /// Classify a plain string: `TODO:`-prefixed text becomes a placeholder.
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if is_placeholder(&s) {
            Field::Placeholder(s)
        } else {
            Field::Provided(s)
        }
    }

    /// Override, then generated value, then the hardcoded default.
    ///
    /// An empty generated string counts as absent; an empty override does not.
    pub fn resolve(&self, generated: Option<&str>, default: &str) -> String {
        match self {
            Field::Provided(v) => v.clone(),
            Field::Unset | Field::Placeholder(_) => generated
                .filter(|g| !g.is_empty())
                .unwrap_or(default)
                .to_string(),
        }
    }

    /// Like [`Field::resolve`] without a generated counterpart.
    pub fn or_default(&self, default: &str) -> String {
        self.resolve(None, default)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Field::Unset),
            Value::String(s) if is_placeholder(&s) => Ok(Field::Placeholder(s)),
            other => T::deserialize(other)
                .map(Field::Provided)
                .map_err(de::Error::custom),
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Unset => serializer.serialize_none(),
            Field::Placeholder(text) => serializer.serialize_str(text),
            Field::Provided(v) => v.serialize(serializer),
        }
    }
}

/// Deserialize `null` the same way as a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treat `null` and a `TODO:` string like a missing key, so a placeholder
/// standing in for a whole list or group defers to the generated data.
pub fn placeholder_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(T::default()),
        Value::String(s) if is_placeholder(&s) => Ok(T::default()),
        other => T::deserialize(other).map_err(de::Error::custom),
    }
}

/// Older generated artifacts wrote `""` for links they could not find.
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

// ── Tests ──
