//! Request dispatcher: endpoint resolution, URL composition and the GET itself.

use super::request::ApiRequest;
use super::response::{ApiEnvelope, RawResponse};
use crate::endpoint::lookup;
use crate::error::{Error, Result};

use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Issues [`ApiRequest`]s against one station.
///
/// The dispatcher does not retry and sets no timeout of its own; both are
/// left to the underlying HTTP client.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    client: ClientWithMiddleware,
    base_url: Url,
}

impl Dispatcher {
    /// Creates a dispatcher rooted at `base_url` (e.g. `http://nas:5000/webapi/`).
    pub fn new(client: ClientWithMiddleware, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Root every CGI path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for `request`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownEndpoint`] or [`Error::UnsupportedVersion`] when the
    /// request does not match the registry, [`Error::InvalidUrl`] when the
    /// path cannot be joined onto the base URL.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let endpoint = lookup(request.endpoint())?;
        endpoint.check_version(request.version())?;

        let mut url = self
            .base_url
            .join(endpoint.path)
            .map_err(|e| Error::InvalidUrl(e.to_string()))?;
        url.set_query(Some(&request.encode_query(endpoint.api)));
        Ok(url)
    }

    /// Sends `request` and returns the undecoded answer.
    pub async fn dispatch(&self, request: &ApiRequest) -> Result<RawResponse> {
        let url = self.url_for(request)?;
        debug!(
            endpoint = request.endpoint(),
            method = request.method(),
            version = request.version(),
            "Dispatching request"
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(endpoint = request.endpoint(), %status, "Received response");

        Ok(RawResponse::new(status, body))
    }

    /// Sends `request` and decodes the answer as an envelope around `T`.
    pub async fn dispatch_json<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<ApiEnvelope<T>> {
        self.dispatch(request).await?.json()
    }
}
