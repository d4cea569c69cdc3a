//! Informational endpoints.

use super::client::DownloadStation;
use crate::api::ApiRequest;
use crate::endpoint::{API_INFO, DS_INFO};
use crate::error::{Error, Result};
use crate::model::{ApiInfo, StationInfo};

impl DownloadStation {
    /// Asks the station where its APIs live and which versions they support.
    ///
    /// `query` is a comma separated list of API names, or `all`. This call
    /// needs no session.
    pub async fn api_info(&self, query: &str) -> Result<ApiInfo> {
        let request = ApiRequest::new(API_INFO, "query", 1).param("query", query);

        let envelope = self.dispatch_json::<ApiInfo>(&request).await?;
        if !envelope.success {
            envelope.log_failure("Problem querying API info");
            return Err(Error::MalformedResponse(format!(
                "API info query reported failure: {}",
                envelope.raw()
            )));
        }
        envelope.into_data("API info")
    }

    /// Download Station version and whether the account manages it.
    pub async fn station_info(&self) -> Result<Option<StationInfo>> {
        let request = self.request(DS_INFO, "getinfo", 1);

        let envelope = self.dispatch_json::<StationInfo>(&request).await?;
        if !envelope.success {
            envelope.log_failure("Problem retrieving station info");
            return Ok(None);
        }
        envelope.into_data("station info").map(Some)
    }
}
