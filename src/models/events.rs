//! Event and gacha calendars

use super::common::{lenient_i64, lenient_u64, unix_timestamp, Coerced, Rarity, ZzzElement, ZzzSpecialty};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZzzEventStatus {
    #[serde(rename = "STATE_IN_PROGRESS")]
    InProgress,
    #[serde(rename = "STATE_COMPLETED")]
    Completed,
    #[serde(rename = "STATE_NOT_START")]
    NotStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZzzGachaEventStatus {
    #[serde(rename = "GACHA_STATE_IN_PROGRESS")]
    InProgress,
    #[serde(rename = "GACHA_STATE_COMPLETED")]
    Completed,
    #[serde(rename = "GACHA_STATE_NOT_START")]
    NotStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZzzGachaEventType {
    #[serde(rename = "GACHA_TYPE_CHARACTER_UP")]
    Character,
    #[serde(rename = "GACHA_TYPE_WEAPON_UP")]
    Weapon,
}

/// Entry of the event calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZzzEvent {
    #[serde(alias = "activity_id", deserialize_with = "lenient_u64")]
    pub id: u64,
    #[serde(alias = "state")]
    pub status: Coerced<ZzzEventStatus>,
    pub name: String,

    #[serde(alias = "monochrome_got_cnt", default)]
    pub obtained_monochromes: i64,
    #[serde(alias = "monochrome_cnt", default)]
    pub max_monochromes: i64,

    #[serde(alias = "start_ts", deserialize_with = "unix_timestamp")]
    pub start: DateTime<Utc>,
    #[serde(alias = "end_ts", deserialize_with = "unix_timestamp")]
    pub end: DateTime<Utc>,

    #[serde(alias = "left_start_ts", default, deserialize_with = "lenient_i64")]
    pub seconds_until_start: i64,
    #[serde(alias = "left_end_ts", default, deserialize_with = "lenient_i64")]
    pub seconds_until_end: i64,
}

/// Fields shared by character and weapon banners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZzzGachaEvent {
    #[serde(alias = "gacha_type")]
    pub banner_type: Coerced<ZzzGachaEventType>,
    #[serde(alias = "gacha_state")]
    pub status: Coerced<ZzzGachaEventStatus>,
    /// Game version, like `2.4`
    #[serde(default)]
    pub version: String,

    #[serde(alias = "start_ts", deserialize_with = "unix_timestamp")]
    pub start: DateTime<Utc>,
    #[serde(alias = "end_ts", deserialize_with = "unix_timestamp")]
    pub end: DateTime<Utc>,

    #[serde(alias = "left_start_ts", default, deserialize_with = "lenient_i64")]
    pub seconds_until_start: i64,
    #[serde(alias = "left_end_ts", default, deserialize_with = "lenient_i64")]
    pub seconds_until_end: i64,

    #[serde(default)]
    pub sup_lock_show: bool,
    #[serde(default)]
    pub insurance_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZzzGachaEventCharacter {
    #[serde(alias = "avatar_id")]
    pub id: u64,
    #[serde(alias = "avatar_name")]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    pub rarity: Coerced<Rarity>,
    #[serde(default)]
    pub icon: String,
    #[serde(alias = "avatar_profession")]
    pub specialty: Coerced<ZzzSpecialty>,
    #[serde(alias = "avatar_element_type")]
    pub element: Coerced<ZzzElement>,
    #[serde(alias = "avatar_sub_element_type", default)]
    pub sub_element: i64,
    #[serde(default)]
    pub wiki_url: String,
    #[serde(default)]
    pub is_forward: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZzzGachaEventWeapon {
    #[serde(alias = "weapon_id")]
    pub id: u64,
    pub rarity: Coerced<Rarity>,
    #[serde(default)]
    pub icon: String,
    #[serde(alias = "profession")]
    pub specialty: Coerced<ZzzSpecialty>,
    #[serde(alias = "talent_title", default)]
    pub skill_name: String,
    #[serde(alias = "talent_content", default)]
    pub skill_description: String,
    #[serde(default)]
    pub wiki_url: String,
}

/// Exclusive channel schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZzzCharacterGachaEvent {
    #[serde(flatten)]
    pub event: ZzzGachaEvent,
    #[serde(alias = "avatar_list", default)]
    pub characters: Vec<ZzzGachaEventCharacter>,
}

/// W-Engine channel schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZzzWeaponGachaEvent {
    #[serde(flatten)]
    pub event: ZzzGachaEvent,
    #[serde(alias = "weapon_list", default)]
    pub weapons: Vec<ZzzGachaEventWeapon>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZzzGachaCalendar {
    #[serde(alias = "avatar_gacha_schedule_list", default)]
    pub characters: Vec<ZzzCharacterGachaEvent>,
    #[serde(alias = "weapon_gacha_schedule_list", default)]
    pub weapons: Vec<ZzzWeaponGachaEvent>,
}

/// Payload of the event calendar endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ZzzEventCalendar {
    #[serde(default)]
    pub activity_list: Vec<ZzzEvent>,
}
