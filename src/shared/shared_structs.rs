// src/shared/shared_structs.rs

use serde::{Deserialize, Deserializer, Serialize};

/// Single-field envelope used for every textual API response,
/// successful or not: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// State of one field in a partial update request.
///
/// A key missing from the JSON body is `Absent`, an explicit `null` is `Null`
/// and any other value is `Set`. Fields must be annotated with
/// `#[serde(default)]` so that missing keys fall back to `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Absent,
    Null,
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Absent
    }
}

impl<T> FieldUpdate<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldUpdate::Absent)
    }

    /// Value to write for a non-nullable column; `Null` reads as "unchanged".
    pub fn into_value(self) -> Option<T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Absent | FieldUpdate::Null => None,
        }
    }

    /// Applies the update to a nullable column.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            FieldUpdate::Absent => {}
            FieldUpdate::Null => *target = None,
            FieldUpdate::Set(value) => *target = Some(value),
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(FieldUpdate::from)
    }
}
