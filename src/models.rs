use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decodes a field as `None` when it is absent, null or of an unexpected shape,
/// so one odd child cannot fail the whole listing.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Children that are not objects at all are kept as empty entries.
fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<Listing>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|value| Listing::deserialize(value).unwrap_or(Listing { data: None }))
        .collect())
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ListingDetail {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) title: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) data: Option<ListingDetail>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ListingData {
    #[serde(deserialize_with = "lenient_children")]
    pub(crate) children: Vec<Listing>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) after: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ListingResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) kind: Option<String>,
    pub(crate) data: ListingData,
}
