//! Battle chronicle client
//!
//! [`Client`] owns the configuration and the HTTP transport. Endpoint groups live in
//! their own files as further `impl Client` blocks:
//! - `zzz` - ZZZ records, calendars, signal history
//! - `calculator` - enhancement cost calculator

mod calculator;
mod request;
pub mod routes;
mod zzz;

pub use calculator::{BatchCalculator, CalculatorBuilder};
pub use request::{PayloadStyle, RecordRequest};
pub use zzz::SignalPageFetcher;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{Game, Region};
use chrono::{FixedOffset, Offset, Utc};
use routes::{endpoint_url, RouteKind};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Async client for the battle chronicle API
///
/// Cloning is cheap; clones share configuration and the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    http: HttpClient,
}

impl Client {
    /// Create a client from a configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.http.to_client_config())?
            .with_cookies(config.cookies.clone());

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Copy of this client speaking another language
    #[must_use]
    pub fn with_lang(&self, lang: impl Into<String>) -> Self {
        let config = ClientConfig::clone(&self.config).with_lang(lang);
        Self {
            config: Arc::new(config),
            http: self.http.clone(),
        }
    }

    /// The given uid, or the one configured for `game`
    pub fn resolve_uid(&self, game: Game, uid: Option<u64>) -> Result<u64> {
        uid.or_else(|| self.config.uid(game))
            .ok_or(Error::MissingUid { game })
    }

    /// Request headers every endpoint sends
    fn base_request(&self) -> RequestConfig {
        RequestConfig::new().header("x-rpc-language", self.config.lang.as_str())
    }

    /// Send a ZZZ record request and unwrap its data
    pub async fn request_zzz_record<T: DeserializeOwned>(&self, request: RecordRequest) -> Result<T> {
        let uid = self.resolve_uid(Game::Zzz, request.uid)?;
        let server = recognize_zzz_server(uid)?;
        let url = endpoint_url(
            request.route,
            recognize_zzz_region(server),
            &self.config.routes,
            &request.endpoint,
        )?;

        debug!(endpoint = %request.endpoint, uid, server, "Requesting ZZZ record");

        let payload = request.payload(uid, server);
        let config = request.apply_payload(self.base_request(), payload);
        self.http
            .request_api(request.method.into(), url.as_str(), config)
            .await
    }

    /// POST a JSON body to a calculator endpoint and unwrap its data
    pub(crate) async fn request_calculator<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<T> {
        let url = endpoint_url(
            RouteKind::Calculator,
            self.config.region,
            &self.config.routes,
            endpoint,
        )?;

        debug!(endpoint, "Requesting calculator");

        let config = self.base_request().json(body);
        self.http
            .request_api(reqwest::Method::POST, url.as_str(), config)
            .await
    }
}

// ============================================================================
// Servers
// ============================================================================

/// ZZZ game server an account lives on, derived from its uid
pub fn recognize_zzz_server(uid: u64) -> Result<&'static str> {
    let digits = uid.to_string();
    if digits.len() == 8 {
        return Ok("prod_gf_cn");
    }

    match digits.get(..2) {
        Some("10") => Ok("prod_gf_us"),
        Some("13") => Ok("prod_gf_jp"),
        Some("15") => Ok("prod_gf_eu"),
        Some("17") => Ok("prod_gf_sg"),
        _ => Err(Error::UnknownServer { uid }),
    }
}

/// API deployment that serves a ZZZ server
pub fn recognize_zzz_region(server: &str) -> Region {
    if server == "prod_gf_cn" {
        Region::Chinese
    } else {
        Region::Overseas
    }
}

/// Fixed UTC offset the server reports local times in
pub fn server_timezone(server: &str) -> FixedOffset {
    let hours = match server {
        "prod_gf_us" => -5,
        "prod_gf_eu" => 1,
        _ => 8,
    };
    FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
}

/// Timezone of a ZZZ account
pub fn account_timezone(uid: u64) -> Result<FixedOffset> {
    Ok(server_timezone(recognize_zzz_server(uid)?))
}

#[cfg(test)]
mod tests;
