use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Deserializes a present field into `Some`, letting `#[serde(default)]` produce `None`
/// for an absent one.
///
/// Used for `Option<Option<T>>` fields in partial updates where an explicit `null`
/// clears the value and an absent field leaves it untouched.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
