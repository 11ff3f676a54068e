use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error_shaping::domain::model::value_objects::error_item::ErrorItem;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorItemResource {
    #[serde(deserialize_with = "null_as_default")]
    pub param: String,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

// Other services may send `null` for a field they left blank.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&ErrorItem> for ErrorItemResource {
    fn from(item: &ErrorItem) -> Self {
        Self {
            param: item.param().to_string(),
            detail: item.detail().to_string(),
            message: item.message().to_string(),
        }
    }
}

impl From<ErrorItemResource> for ErrorItem {
    fn from(resource: ErrorItemResource) -> Self {
        ErrorItem::new(resource.param, resource.detail, resource.message)
    }
}
