use serde::de::{self, Deserialize, Deserializer};

/// A stored entity with a repository-assigned identifier.
///
/// `merged` builds the record that results from overlaying an update payload
/// onto the current state. Identity and creation time never change.
pub trait Record: Clone + Send + Sync + 'static {
    type Update: Send + Sync;

    fn id(&self) -> &str;

    fn merged(&self, update: &Self::Update) -> Self;
}

/// One updatable field in a partial update payload.
///
/// A missing JSON key deserializes (through `#[serde(default)]`) to `Keep`.
/// A JSON `null` is rejected, so "not provided" and "cleared" can never be
/// confused.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate<T> {
    Keep,
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn as_set(&self) -> Option<&T> {
        match self {
            FieldUpdate::Keep => None,
            FieldUpdate::Set(value) => Some(value),
        }
    }
}

impl<T: Clone> FieldUpdate<T> {
    /// The value the field holds after the update is applied.
    pub fn resolve(&self, current: &T) -> T {
        match self {
            FieldUpdate::Keep => current.clone(),
            FieldUpdate::Set(value) => value.clone(),
        }
    }
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Keep
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<T>::deserialize(deserializer)? {
            Some(value) => Ok(FieldUpdate::Set(value)),
            None => Err(de::Error::custom(
                "null is not accepted; omit the field to keep its current value",
            )),
        }
    }
}
