//! Core client: login, logout and raw dispatch.
//!
//! A [`DownloadStation`] only exists once the station accepted its
//! credentials, so every operation can rely on a valid session id. The id is
//! owned by the client and only replaced through
//! [`DownloadStation::reauthenticate`].
//!
//! The client issues one request at a time and is not meant to be shared
//! between concurrent callers; wrap it in a mutex if several tasks need it.

use super::config::{StationConfig, LOGIN_VERSION, SESSION_SCOPE};
use super::builder::DownloadStationBuilder;
use crate::api::{ApiEnvelope, ApiRequest, Dispatcher, RawResponse};
use crate::endpoint::API_AUTH;
use crate::error::{Error, Result};
use crate::http::create_http_client;
use crate::model::SessionId;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use tracing::{error, info};

#[derive(Deserialize)]
struct LoginData {
    sid: String,
}

/// Authenticated Download Station client.
pub struct DownloadStation {
    config: StationConfig,
    dispatcher: Dispatcher,
    session: SessionId,
}

impl fmt::Debug for DownloadStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadStation")
            .field("config", &self.config)
            .field("base_url", &self.dispatcher.base_url().as_str())
            .finish()
    }
}

/// Logs in with the account credentials and returns the session id.
///
/// # Errors
///
/// [`Error::Authentication`] carrying the raw payload when the station
/// reports a failure, [`Error::MalformedResponse`] when a successful answer
/// has no `sid`.
pub async fn authenticate(
    dispatcher: &Dispatcher,
    username: &str,
    password: &str,
    session_scope: &str,
    version: u32,
) -> Result<SessionId> {
    let request = ApiRequest::new(API_AUTH, "login", version)
        .param("account", username)
        .param("passwd", password)
        .param("session", session_scope)
        .param("format", "cookie");

    let envelope: ApiEnvelope<LoginData> = dispatcher.dispatch_json(&request).await?;
    if !envelope.success {
        envelope.log_failure("Authentication unsuccessful");
        return Err(Error::Authentication {
            payload: envelope.raw().clone(),
        });
    }

    let data = envelope.into_data("login")?;
    info!(username, "Successfully authenticated");
    Ok(SessionId::new(data.sid))
}

impl DownloadStation {
    /// Creates a builder with the default options.
    pub fn builder() -> DownloadStationBuilder {
        DownloadStationBuilder::new()
    }

    /// Builds the HTTP client, logs in, and returns the authenticated client.
    pub async fn connect(config: StationConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let client = create_http_client(config.http.clone())?;
        let dispatcher = Dispatcher::new(client, base_url);
        info!(host = %config.host, "DownloadStation initialised");

        let session = authenticate(
            &dispatcher,
            &config.username,
            &config.password,
            SESSION_SCOPE,
            LOGIN_VERSION,
        )
        .await?;

        Ok(Self {
            config,
            dispatcher,
            session,
        })
    }

    /// Logs in again and replaces the session id.
    pub async fn reauthenticate(&mut self) -> Result<()> {
        self.session = authenticate(
            &self.dispatcher,
            &self.config.username,
            &self.config.password,
            SESSION_SCOPE,
            LOGIN_VERSION,
        )
        .await?;
        Ok(())
    }

    /// Current session id.
    pub fn session_id(&self) -> &SessionId {
        &self.session
    }

    /// Configuration the client was built from.
    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    /// Dispatcher the client sends requests through.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Sends `request` as is and returns status code and body.
    pub async fn dispatch(&self, request: &ApiRequest) -> Result<RawResponse> {
        self.dispatcher.dispatch(request).await
    }

    /// Sends `request` and decodes the answer.
    pub async fn dispatch_json<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<ApiEnvelope<T>> {
        self.dispatcher.dispatch_json(request).await
    }

    /// Starts a request on `endpoint` carrying the session id.
    ///
    /// Parameters added afterwards still precede `_sid` on the wire.
    pub(crate) fn request(&self, endpoint: &str, method: &str, version: u32) -> ApiRequest {
        ApiRequest::new(endpoint, method, version).session(&self.session)
    }

    /// Closes the API session.
    ///
    /// Returns whether the station acknowledged the logout with HTTP 200.
    /// Failures are logged, never returned.
    pub async fn logout(self) -> bool {
        let request = ApiRequest::new(API_AUTH, "logout", 1).param("session", SESSION_SCOPE);

        match self.dispatcher.dispatch(&request).await {
            Ok(response) if response.status == StatusCode::OK => {
                info!("API session successfully closed");
                true
            }
            Ok(response) => {
                error!(status = %response.status, "Problem with closing API sessions");
                false
            }
            Err(e) => {
                error!(error = %e, "Problem with closing API sessions");
                false
            }
        }
    }
}
