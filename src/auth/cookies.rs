//! Cookie jar for the chronicle API

use crate::error::{Error, Result};
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Account cookies sent with every chronicle request
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cookies {
    values: BTreeMap<String, String>,
}

impl Cookies {
    /// Create an empty cookie jar
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a cookie
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Look up a cookie value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether no cookies are set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render as a `Cookie` header value
    pub fn header_value(&self) -> String {
        self.values
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Apply the cookies to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        if self.is_empty() {
            return req;
        }
        req.header(reqwest::header::COOKIE, self.header_value())
    }
}

impl FromStr for Cookies {
    type Err = Error;

    fn from_str(header: &str) -> Result<Self> {
        let mut values = BTreeMap::new();
        for pair in header.split(';') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| Error::config(format!("Malformed cookie '{pair}'")))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::config("Cookie with empty name"));
            }
            values.insert(name.to_string(), value.trim().to_string());
        }
        Ok(Self { values })
    }
}

impl TryFrom<String> for Cookies {
    type Error = Error;

    fn try_from(header: String) -> Result<Self> {
        header.parse()
    }
}

impl From<Cookies> for String {
    fn from(cookies: Cookies) -> Self {
        cookies.header_value()
    }
}

impl fmt::Debug for Cookies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.values.keys().map(|name| (name, "***")))
            .finish()
    }
}
