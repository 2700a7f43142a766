//! Signal search (gacha) records and banner info

use super::common::{lenient_i64, lenient_u64, Coerced, DateDict, Rarity};
use super::events::ZzzGachaEventType;
use crate::error::{Error, Result};
use crate::pagination::{Cursor, CursorItem};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Banner Types
// ============================================================================

/// ZZZ signal search banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ZzzBannerType {
    /// Stable channel
    Standard,
    /// Exclusive channel
    Character,
    /// W-Engine channel
    Weapon,
    /// Bangboo channel
    Bangboo,
}

impl ZzzBannerType {
    /// Every banner, in the order history is merged
    pub fn all() -> [ZzzBannerType; 4] {
        [
            ZzzBannerType::Standard,
            ZzzBannerType::Character,
            ZzzBannerType::Weapon,
            ZzzBannerType::Bangboo,
        ]
    }

    /// The `gacha_type` code used by the battle chronicle record endpoint
    pub fn to_chronicle_type(self) -> u32 {
        match self {
            ZzzBannerType::Standard => 1001,
            ZzzBannerType::Character => 2001,
            ZzzBannerType::Weapon => 3001,
            ZzzBannerType::Bangboo => 5001,
        }
    }
}

impl TryFrom<i64> for ZzzBannerType {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(ZzzBannerType::Standard),
            2 => Ok(ZzzBannerType::Character),
            3 => Ok(ZzzBannerType::Weapon),
            5 => Ok(ZzzBannerType::Bangboo),
            other => Err(Error::invalid_argument(format!(
                "Unknown banner type {other}"
            ))),
        }
    }
}

impl From<ZzzBannerType> for i64 {
    fn from(banner: ZzzBannerType) -> Self {
        match banner {
            ZzzBannerType::Standard => 1,
            ZzzBannerType::Character => 2,
            ZzzBannerType::Weapon => 3,
            ZzzBannerType::Bangboo => 5,
        }
    }
}

impl fmt::Display for ZzzBannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZzzBannerType::Standard => "standard",
            ZzzBannerType::Character => "character",
            ZzzBannerType::Weapon => "weapon",
            ZzzBannerType::Bangboo => "bangboo",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Signal Search
// ============================================================================

/// One entry of the chronicle `gacha_item_list`
#[derive(Debug, Clone, Deserialize)]
pub struct ChronicleSignalRecord {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub item_id: u64,
    pub item_name: String,
    #[serde(default)]
    pub item_type: String,
    pub rarity: Coerced<Rarity>,
    pub date: DateDict,
}

/// A single signal search pull
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalSearch {
    pub id: u64,
    pub uid: u64,
    pub banner_type: ZzzBannerType,
    pub item_id: u64,
    pub name: String,
    pub item_type: String,
    pub rarity: Coerced<Rarity>,
    /// Pull time at the account server's offset
    pub time: DateTime<FixedOffset>,
}

impl SignalSearch {
    /// Build from a chronicle record whose date is server local time
    pub fn from_chronicle_data(
        record: ChronicleSignalRecord,
        uid: u64,
        banner_type: ZzzBannerType,
        offset: FixedOffset,
    ) -> Result<Self> {
        let time = record.date.at_offset(offset).ok_or_else(|| {
            Error::decode(format!(
                "Invalid date {} on signal {}",
                record.date, record.id
            ))
        })?;

        Ok(Self {
            id: record.id,
            uid,
            banner_type,
            item_id: record.item_id,
            name: record.item_name,
            item_type: record.item_type,
            rarity: record.rarity,
            time,
        })
    }
}

impl CursorItem for SignalSearch {
    fn cursor(&self) -> Option<Cursor> {
        Some(Cursor::Id(self.id))
    }
}

// ============================================================================
// Gacha Info
// ============================================================================

/// Gacha currency counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZzzGachaCurrencies {
    pub monochrome: i64,
    pub polychrome: i64,
    pub encrypted_master_tape: i64,
    pub master_tape: i64,
    pub boopon: i64,
}

impl ZzzGachaCurrencies {
    fn slot(&mut self, ticket_type: &str) -> Option<&mut i64> {
        match ticket_type {
            "GACHA_TICKET_TYPE_RECHARGE_MONOCHROME" => Some(&mut self.monochrome),
            "GACHA_TICKET_TYPE_POLYCHROME" => Some(&mut self.polychrome),
            "GACHA_TICKET_TYPE_ENCRYPTED_MASTER_TAPE" => Some(&mut self.encrypted_master_tape),
            "GACHA_TICKET_TYPE_MASTER_TAPE" => Some(&mut self.master_tape),
            "GACHA_TICKET_TYPE_BOOPON" => Some(&mut self.boopon),
            _ => None,
        }
    }
}

/// Pity state of a running banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZzzGachaBannerInfo {
    #[serde(alias = "gacha_type")]
    pub banner_type: Coerced<ZzzGachaEventType>,
    /// Pulls left until a guaranteed S
    #[serde(alias = "more_s_need_cnt", deserialize_with = "lenient_i64")]
    pub pity: i64,
}

/// Current gacha currencies and pity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGachaInfo")]
pub struct ZzzGachaInfo {
    pub currencies: ZzzGachaCurrencies,
    pub banners: Vec<ZzzGachaBannerInfo>,
}

#[derive(Deserialize)]
struct RawTicket {
    ticket_type: String,
    #[serde(deserialize_with = "lenient_i64")]
    ticket_cnt: i64,
}

#[derive(Deserialize)]
struct RawGachaInfo {
    #[serde(default)]
    tickets: Vec<RawTicket>,
    #[serde(default, alias = "gacha_info_list")]
    banners: Vec<ZzzGachaBannerInfo>,
}

impl From<RawGachaInfo> for ZzzGachaInfo {
    fn from(raw: RawGachaInfo) -> Self {
        let mut currencies = ZzzGachaCurrencies::default();
        for ticket in raw.tickets {
            if let Some(slot) = currencies.slot(&ticket.ticket_type) {
                *slot = ticket.ticket_cnt;
            }
        }

        Self {
            currencies,
            banners: raw.banners,
        }
    }
}
