//! Query parameter builder for a single API call.
//!
//! Some station firmwares reject requests whose `_sid` parameter is not the
//! last one in the query string, so [`ApiRequest`] keeps the session id apart
//! from the other parameters and always serializes it last.
//!
//! # Examples
//!
//! ```rust
//! use download_station::api::ApiRequest;
//! use download_station::SessionId;
//!
//! let sid = SessionId::new("abc");
//! let request = ApiRequest::new("DS_Task", "getinfo", 1)
//!     .session(&sid)
//!     .param("id", "dbid_42");
//!
//! assert_eq!(
//!     request.encode_query("SYNO.DownloadStation.Task"),
//!     "api=SYNO.DownloadStation.Task&version=1&method=getinfo&id=dbid_42&_sid=abc"
//! );
//! ```

use crate::model::SessionId;

/// Name of the session id query parameter.
pub const SID_PARAM: &str = "_sid";

/// One call against a logical endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    endpoint: String,
    method: String,
    version: u32,
    params: Vec<(String, String)>,
    session: Option<SessionId>,
}

impl ApiRequest {
    /// Creates a request for `method` of `endpoint` at the given API version.
    pub fn new(endpoint: impl Into<String>, method: impl Into<String>, version: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: method.into(),
            version,
            params: Vec::new(),
            session: None,
        }
    }

    /// Appends a query parameter.
    ///
    /// Parameters keep their insertion order. A `_sid` key is routed to
    /// [`ApiRequest::session`] so it still ends up last.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        if key == SID_PARAM {
            self.session = Some(SessionId::new(value.to_string()));
        } else {
            self.params.push((key, value.to_string()));
        }
        self
    }

    /// Attaches the session id.
    pub fn session(mut self, sid: &SessionId) -> Self {
        self.session = Some(sid.clone());
        self
    }

    /// Logical endpoint name.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// API method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Requested API version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Whether a session id is attached.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Query pairs in wire order, `api` first and `_sid` last.
    pub fn query_pairs<'a>(&'a self, api: &'a str) -> Vec<(&'a str, String)> {
        let mut pairs = Vec::with_capacity(self.params.len() + 4);
        pairs.push(("api", api.to_string()));
        pairs.push(("version", self.version.to_string()));
        pairs.push(("method", self.method.clone()));
        pairs.extend(self.params.iter().map(|(k, v)| (k.as_str(), v.clone())));
        if let Some(sid) = &self.session {
            pairs.push((SID_PARAM, sid.as_str().to_string()));
        }
        pairs
    }

    /// URL-encoded query string for the remote API name `api`.
    pub fn encode_query(&self, api: &str) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs(api))
            .finish()
    }
}

// Parameter values can hold credentials, only the keys are shown.
impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.params.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("ApiRequest")
            .field("endpoint", &self.endpoint)
            .field("method", &self.method)
            .field("version", &self.version)
            .field("params", &keys)
            .field("session", &self.session.is_some())
            .finish()
    }
}
