// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Chronicle Client
//!
//! Async client for the HoYoLAB / miHoYo battle chronicle of Zenless Zone Zero.
//!
//! ## Features
//!
//! - **Account data**: real-time notes, monthly diary, gacha currencies
//! - **Challenges**: Deadly Assault, Shiyu Defense, Threshold Simulation
//! - **Calendars**: running events and banners
//! - **Signal history**: cursor paged per banner, merged newest-first across banners
//! - **Enhancement calculator**: single and batch upgrade plans
//! - **Retries**: transient HTTP failures and the rate-limit retcode are retried with backoff
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chronicle_client::{Client, ClientConfig, Paginator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_file("chronicle.yaml")?;
//!     let client = Client::new(config)?;
//!
//!     let info = client.get_zzz_gacha_info(None).await?;
//!     println!("{} polychrome", info.currencies.polychrome);
//!
//!     let mut history = client.chronicle_signal_history(None, &[], Some(100), 0)?;
//!     while let Some(signal) = history.next().await? {
//!         println!("{} {}", signal.time, signal.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            Client                               │
//! │  notes · diary · calendars · gacha info · deadly assault        │
//! │  chronicle_signal_history() → Paginator<SignalSearch>           │
//! │  calculator() / batch_calculator()                              │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   Auth   │   HTTP    │   Paginate    │  Routes   │   Models    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Cookies  │ GET/POST  │ Cursor        │ Overseas  │ Gacha       │
//! │          │ Retry     │ Merged        │ Chinese   │ Events      │
//! │          │ Backoff   │ Limit         │ Overrides │ Assault     │
//! │          │ Retcodes  │ Stream        │           │ Calculator  │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and retcode mapping
pub mod error;

/// Common types and type aliases
pub mod types;

/// Cookie authentication
pub mod auth;

/// HTTP client with retry and backoff
pub mod http;

/// Cursor and merged pagination
pub mod pagination;

/// Client configuration
pub mod config;

/// Response models
pub mod models;

/// Battle chronicle client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use auth::Cookies;
pub use client::{BatchCalculator, CalculatorBuilder, Client};
pub use config::ClientConfig;
pub use pagination::{
    into_stream, BoxedPaginator, Cursor, CursorPaginator, MergedPaginator, PageFetcher, Paginator,
    SortOrder,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
