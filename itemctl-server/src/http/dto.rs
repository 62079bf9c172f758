//! Request and response bodies

use serde::{Deserialize, Deserializer, Serialize};

use crate::db::Record;

/// `null` decodes like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Create/update body for items and collections.
///
/// Absent or null fields decode as empty so that `{}` fails name validation
/// rather than JSON decoding.
#[derive(Debug, Default, Deserialize)]
pub struct RecordRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Body for adding an item to a collection. Absent or null `item_id` decodes as 0.
#[derive(Debug, Default, Deserialize)]
pub struct MembershipRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_id: i64,
}

/// Item or collection as returned to clients
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: String,
}

impl From<Record> for RecordResponse {
    fn from(r: Record) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            created_at: r.created_at,
        }
    }
}

pub fn records(rows: Vec<Record>) -> Vec<RecordResponse> {
    rows.into_iter().map(RecordResponse::from).collect()
}
