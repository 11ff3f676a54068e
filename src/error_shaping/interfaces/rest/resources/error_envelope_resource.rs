use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error_shaping::{
    domain::model::value_objects::{error_envelope::ErrorEnvelope, error_item::ErrorItem},
    interfaces::rest::resources::error_item_resource::{ErrorItemResource, null_as_default},
};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorEnvelopeResource {
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<ErrorItemResource>,
}

impl ErrorEnvelopeResource {
    /// Reads an envelope out of a raw response body. Anything that is not an
    /// envelope decodes as an empty one.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

impl From<&ErrorEnvelope> for ErrorEnvelopeResource {
    fn from(envelope: &ErrorEnvelope) -> Self {
        Self {
            errors: envelope.errors().iter().map(ErrorItemResource::from).collect(),
        }
    }
}

impl From<ErrorEnvelopeResource> for ErrorEnvelope {
    fn from(resource: ErrorEnvelopeResource) -> Self {
        resource.errors.into_iter().map(ErrorItem::from).collect()
    }
}
