//! Battle chronicle request shaping
//!
//! Chronicle endpoints identify the account in one of two ways: `role_id` + `server`
//! for the classic record pages, `uid` + `region` for newer pages and the nap ledger.
//! [`RecordRequest`] carries that choice so endpoint code only lists its own fields.

use super::routes::RouteKind;
use crate::http::RequestConfig;
use crate::types::{JsonObject, JsonValue, Method};

/// How the account is named in the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadStyle {
    /// `role_id` and `server`
    #[default]
    RoleServer,
    /// `uid` and `region`
    UidRegion,
}

impl PayloadStyle {
    fn keys(self) -> (&'static str, &'static str) {
        match self {
            PayloadStyle::RoleServer => ("role_id", "server"),
            PayloadStyle::UidRegion => ("uid", "region"),
        }
    }
}

/// A request against a ZZZ record or nap ledger endpoint
#[derive(Debug, Clone)]
pub struct RecordRequest {
    pub(crate) endpoint: String,
    pub(crate) uid: Option<u64>,
    pub(crate) method: Method,
    pub(crate) style: PayloadStyle,
    pub(crate) route: RouteKind,
    pub(crate) params: JsonObject,
}

impl RecordRequest {
    /// GET request to `endpoint` under the record base
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            uid: None,
            method: Method::GET,
            style: PayloadStyle::RoleServer,
            route: RouteKind::Record,
            params: JsonObject::new(),
        }
    }

    /// Target a specific account instead of the configured one
    #[must_use]
    pub fn uid(mut self, uid: Option<u64>) -> Self {
        self.uid = uid;
        self
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Name the account with `uid`/`region`
    #[must_use]
    pub fn uid_in_payload(mut self) -> Self {
        self.style = PayloadStyle::UidRegion;
        self
    }

    /// Send to the nap ledger base; always uses `uid`/`region`
    #[must_use]
    pub fn nap_ledger(mut self) -> Self {
        self.route = RouteKind::NapLedger;
        self.style = PayloadStyle::UidRegion;
        self
    }

    /// Add an endpoint specific field
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Account fields followed by endpoint fields, the latter winning on conflict
    pub fn payload(&self, uid: u64, server: &str) -> JsonObject {
        let (uid_key, server_key) = self.style.keys();
        let mut payload = JsonObject::new();
        payload.insert(uid_key.to_string(), uid.into());
        payload.insert(server_key.to_string(), server.into());
        for (key, value) in &self.params {
            payload.insert(key.clone(), value.clone());
        }
        payload
    }

    /// Place the payload in the query for GET and in the body for POST
    pub(crate) fn apply_payload(&self, config: RequestConfig, payload: JsonObject) -> RequestConfig {
        match self.method {
            Method::POST => config.json(JsonValue::Object(payload)),
            Method::GET => payload
                .into_iter()
                .fold(config, |config, (key, value)| config.query(key, query_value(&value))),
        }
    }
}

fn query_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}
