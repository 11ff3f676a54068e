use std::{error::Error as StdError, sync::Arc, time::Duration};

use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    error_shaping::{
        domain::{
            model::{
                entities::error_description::ErrorDescription,
                enums::status_code::StatusCode,
                value_objects::error_envelope::ErrorEnvelope,
            },
            services::error_shaping_service::ErrorShapingService,
        },
        interfaces::rest::resources::error_envelope_resource::ErrorEnvelopeResource,
    },
    remote_calls::domain::model::{
        enums::remote_call_domain_error::RemoteCallDomainError,
        value_objects::request_header::RequestHeader,
    },
    shared::domain::model::retry_policy::RetryPolicy,
};

const REMOTE_FAILURE_MESSAGE: &str = "Something wrong happened on our end. Please try again later.";

/// JSON client for calls to other services. Failures come back as the
/// `ErrorDescription` the remote service reported, so they can be handled
/// like local ones.
#[derive(Clone)]
pub struct HttpRemoteCaller {
    client: Client,
    error_shaping_service: Arc<dyn ErrorShapingService>,
}

impl HttpRemoteCaller {
    pub fn new(client: Client, error_shaping_service: Arc<dyn ErrorShapingService>) -> Self {
        Self {
            client,
            error_shaping_service,
        }
    }

    pub fn with_timeout(
        timeout: Duration,
        error_shaping_service: Arc<dyn ErrorShapingService>,
    ) -> Result<Self, RemoteCallDomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteCallDomainError::ClientBuild(e.to_string()))?;

        Ok(Self::new(client, error_shaping_service))
    }

    /// Sends `body` as JSON and decodes a successful answer into `R`.
    ///
    /// Returns `Ok(None)` when the remote answered successfully with an
    /// empty body.
    pub async fn send<B, R>(
        &self,
        header: &RequestHeader,
        body: Option<&B>,
    ) -> Result<Option<R>, ErrorDescription>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self
            .client
            .request(header.method().clone(), header.url().clone())
            .header(CONTENT_TYPE, header.content_type());

        if let Some(authorization) = header.authorization() {
            request = request.header(AUTHORIZATION, authorization);
        }

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(unexpected_failure)?;
            request = request.body(encoded);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(url = %header.url(), method = %header.method(), error = %e, "remote call failed");
            unexpected_failure(e)
        })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(unexpected_failure)?;

        tracing::debug!(url = %header.url(), method = %header.method(), status, "remote call answered");

        let envelope = ErrorEnvelope::from(ErrorEnvelopeResource::from_body(&bytes));
        if let Some(description) = self
            .error_shaping_service
            .reconstruct_error_description(&envelope, status)
        {
            tracing::warn!(
                url = %header.url(),
                status,
                message = description.message(),
                "remote service reported an error"
            );
            return Err(description);
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(unexpected_failure)
    }

    /// Polls `url` until it answers at all, within `policy`.
    pub async fn wait_for_server(&self, url: &str, policy: &RetryPolicy) -> bool {
        let client = &self.client;

        policy
            .run("wait_for_server", move |_| async move {
                client.get(url).send().await.map(|_| ())
            })
            .await
            .is_ok()
    }
}

fn unexpected_failure<E>(error: E) -> ErrorDescription
where
    E: StdError + Send + Sync + 'static,
{
    ErrorDescription::new(StatusCode::UnexpectedError, REMOTE_FAILURE_MESSAGE).with_cause(error)
}
