//! Base URLs per API deployment

use crate::config::RouteOverrides;
use crate::error::Result;
use crate::types::Region;
use url::Url;

/// A base URL with one variant per deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub overseas: &'static str,
    pub chinese: &'static str,
}

impl Route {
    /// Base URL for a region
    pub fn get(&self, region: Region) -> &'static str {
        match region {
            Region::Overseas => self.overseas,
            Region::Chinese => self.chinese,
        }
    }
}

pub const ZZZ_RECORD_URL: Route = Route {
    overseas: "https://sg-public-api.hoyolab.com/event/game_record_zzz/api/zzz/",
    chinese: "https://api-takumi-record.mihoyo.com/event/game_record_zzz/api/zzz/",
};

pub const NAP_LEDGER_URL: Route = Route {
    overseas: "https://sg-public-api.hoyolab.com/event/nap_ledger/",
    chinese: "https://api-takumi.mihoyo.com/event/nap_ledger/",
};

pub const CALCULATOR_URL: Route = Route {
    overseas: "https://sg-public-api.hoyolab.com/event/calculateos/",
    chinese: "https://api-takumi.mihoyo.com/event/e20200928calculate/v1/",
};

/// Which family of endpoints a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Record,
    NapLedger,
    Calculator,
}

impl RouteKind {
    fn route(self) -> Route {
        match self {
            RouteKind::Record => ZZZ_RECORD_URL,
            RouteKind::NapLedger => NAP_LEDGER_URL,
            RouteKind::Calculator => CALCULATOR_URL,
        }
    }

    fn overridden(self, overrides: &RouteOverrides) -> Option<&str> {
        match self {
            RouteKind::Record => overrides.record.as_deref(),
            RouteKind::NapLedger => overrides.nap_ledger.as_deref(),
            RouteKind::Calculator => overrides.calculator.as_deref(),
        }
    }
}

/// Full URL of `endpoint` under the base for `kind`, honoring overrides
pub fn endpoint_url(
    kind: RouteKind,
    region: Region,
    overrides: &RouteOverrides,
    endpoint: &str,
) -> Result<Url> {
    let base = kind
        .overridden(overrides)
        .unwrap_or_else(|| kind.route().get(region));

    // `Url::join` drops the last path segment unless the base ends with a slash
    let base = if base.ends_with('/') {
        Url::parse(base)?
    } else {
        Url::parse(&format!("{base}/"))?
    };
    Ok(base.join(endpoint.trim_start_matches('/'))?)
}
