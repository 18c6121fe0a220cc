//! Generic typed remote-data fetching for the realworld apps.
//!
//! Every API client in the workspace follows the same shape: build a query
//! string, issue a GET against a keyed base endpoint, decode the JSON body and
//! narrow it to a typed result. This crate owns that shape.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod request;

pub use config::{ApiConfig, Envelope, DEFAULT_PAGE_SIZE};
pub use error::{FailureKind, FetchError, ResourceError};
pub use fetcher::RemoteResourceFetcher;
pub use request::{build_pagination, build_query, build_request_uri, query_pair, ResourceRequest};
