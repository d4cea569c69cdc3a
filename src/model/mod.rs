//! Typed payloads decoded from station responses.
//!
//! - [`session`] - the opaque [`SessionId`]
//! - [`task`] - [`TaskRecord`], [`TaskList`] and [`TaskStatus`]
//! - [`search`] - [`SearchStart`] and [`SearchResult`]
//! - [`info`] - [`ApiInfo`] and [`StationInfo`]
//!
//! Only the fields the client acts on are typed strictly. Everything else is
//! kept as JSON so callers get the station's payload back unchanged.

pub mod info;
pub mod search;
pub mod session;
pub mod task;

pub use info::{ApiInfo, ApiInfoEntry, StationInfo};
pub use search::{SearchResult, SearchStart};
pub use session::SessionId;
pub use task::{TaskList, TaskRecord, TaskStatus};
