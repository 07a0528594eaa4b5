//! Typed client core for the telecom marketing admin API.
//!
//! # Overview
//! Request and response shapes for sites, grids, communities, marketing
//! groups, roles, accounts, tags, strategies and prospects, plus one wrapper
//! per backend operation. Requests are built as plain data and parsed from
//! plain data (host-does-IO); `Gateway` ties the two together around a
//! caller-supplied `Transport`.
//!
//! # Design
//! - `MarketingClient` is immutable: base URL plus optional bearer token.
//! - List operations normalize their query before sending: missing filters
//!   become `""`, the `"all"` selector becomes `""`, paging defaults to 1/10.
//! - Every response is an `Envelope { code, msg, data }`; `code` is passed
//!   through, never interpreted.
//! - No retries, caching or timeouts; those belong to the transport.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod types;

pub use client::MarketingClient;
pub use config::ClientConfig;
pub use error::{ApiError, BoxError, ConfigError};
pub use gateway::{ApiResult, Gateway, Transport};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::*;
