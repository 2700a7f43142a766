//! Client configuration
//!
//! Loaded from YAML. Every section is optional, so an empty document yields a
//! working overseas client without cookies.

use crate::auth::Cookies;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::pagination::PAGE_SIZE;
use crate::types::{BackoffType, Game, Region};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Language sent as `x-rpc-language`
    #[serde(default = "default_lang")]
    pub lang: String,

    /// API deployment
    #[serde(default)]
    pub region: Region,

    /// Account cookies, as a `Cookie` header string
    #[serde(default)]
    pub cookies: Cookies,

    /// Default uid per game
    #[serde(default)]
    pub uids: HashMap<Game, u64>,

    /// Expected page size of history endpoints
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Base URL overrides
    #[serde(default)]
    pub routes: RouteOverrides,
}

fn default_lang() -> String {
    "en-us".to_string()
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            region: Region::default(),
            cookies: Cookies::default(),
            uids: HashMap::new(),
            page_size: default_page_size(),
            http: HttpConfig::default(),
            routes: RouteOverrides::default(),
        }
    }
}

impl ClientConfig {
    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document parses as null
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than 0"));
        }
        if self.lang.trim().is_empty() {
            return Err(Error::config("lang cannot be empty"));
        }
        Ok(())
    }

    /// Default uid configured for a game
    pub fn uid(&self, game: Game) -> Option<u64> {
        self.uids.get(&game).copied()
    }

    /// Set the default uid for a game
    #[must_use]
    pub fn with_uid(mut self, game: Game, uid: u64) -> Self {
        self.uids.insert(game, uid);
        self
    }

    /// Set the cookies
    #[must_use]
    pub fn with_cookies(mut self, cookies: Cookies) -> Self {
        self.cookies = cookies;
        self
    }

    /// Set the language
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub retry_backoff: BackoffConfig,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            retry_backoff: BackoffConfig::default(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl HttpConfig {
    /// Build the transport config from these settings
    pub fn to_client_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_seconds))
            .max_retries(self.max_retries)
            .backoff(
                self.retry_backoff.backoff_type,
                Duration::from_millis(self.retry_backoff.initial_delay_ms),
                Duration::from_millis(self.retry_backoff.max_delay_ms),
            )
            .build()
    }
}

/// Retry backoff configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Backoff type
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::default(),
            initial_delay_ms: default_initial_delay(),
            max_delay_ms: default_max_delay(),
        }
    }
}

fn default_initial_delay() -> u64 {
    500
}

fn default_max_delay() -> u64 {
    30_000
}

// ============================================================================
// Route Overrides
// ============================================================================

/// Replacement base URLs, mostly for pointing the client at a mock server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteOverrides {
    /// Battle chronicle record base
    #[serde(default)]
    pub record: Option<String>,

    /// Nap ledger base
    #[serde(default)]
    pub nap_ledger: Option<String>,

    /// Enhancement calculator base
    #[serde(default)]
    pub calculator: Option<String>,
}
