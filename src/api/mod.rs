//! Wire-level plumbing shared by every operation.
//!
//! - [`request`] - [`ApiRequest`], an ordered set of query parameters for one call
//! - [`response`] - [`RawResponse`] and the decoded [`ApiEnvelope`]
//! - [`dispatch`] - [`Dispatcher`], which resolves endpoints and issues GET requests
//!
//! Every Download Station call has the same shape:
//!
//! ```text
//! GET /<prefix>/<cgi-path>?api=<API_NAME>&version=<N>&method=<METHOD>[&<PARAMS>...][&_sid=<SID>]
//! ```

pub mod dispatch;
pub mod request;
pub mod response;

pub use dispatch::Dispatcher;
pub use request::{ApiRequest, SID_PARAM};
pub use response::{ApiEnvelope, ApiErrorBody, RawResponse};
