use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One property listing held by the in-memory store.
///
/// Every caller-supplied field is passed through as-is; null fields serialize
/// explicitly so listings always expose the full shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: u64,
    pub name: Option<String>,
    pub location: Option<String>,
    pub size_ha: Option<f64>,
    pub details: Option<Value>,
    pub is_available: bool,
}

/// Create payload. Every field is optional; `is_available` defaults to true.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PropertyInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub size_ha: Option<f64>,
    #[serde(default)]
    pub details: Option<Value>,
    #[serde(default)]
    pub is_available: Option<bool>,
}

impl PropertyInput {
    /// Materialize a record under the given id, filling defaults.
    pub fn into_record(self, id: u64) -> PropertyRecord {
        PropertyRecord {
            id,
            name: self.name,
            location: self.location,
            size_ha: self.size_ha,
            details: self.details,
            is_available: self.is_available.unwrap_or(true),
        }
    }
}

/// Update payload applied as a shallow merge: only keys present in the JSON
/// body touch the record. An explicit `null` clears a nullable field, while an
/// absent key leaves it untouched, hence the nested `Option`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PropertyPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub size_ha: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub details: Option<Option<Value>>,
    #[serde(default)]
    pub is_available: Option<bool>,
}

impl PropertyPatch {
    /// Merge the supplied fields into `record`, key by key.
    pub fn apply(self, record: &mut PropertyRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(location) = self.location {
            record.location = location;
        }
        if let Some(size_ha) = self.size_ha {
            record.size_ha = size_ha;
        }
        if let Some(details) = self.details {
            record.details = details;
        }
        if let Some(is_available) = self.is_available {
            record.is_available = is_available;
        }
    }
}

// Wraps the inner `Option` so a present-but-null key deserializes to
// `Some(None)` instead of collapsing into the field default.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
