//! HTTP client module
//!
//! Provides the HTTP client used for every chronicle request.
//!
//! # Features
//!
//! - **Automatic Retries**: Transport failures and 5xx responses are retried with backoff
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **API Envelope**: `{"retcode", "message", "data"}` responses are unwrapped and
//!   non-zero retcodes mapped onto [`crate::Error`]; "visits too frequently" is retried

mod client;

pub use client::{ApiResponse, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
