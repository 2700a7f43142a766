//! Deadly Assault

use super::common::{lenient_i64, optional_date_dict, Coerced, Rarity, ZzzElement, ZzzSpecialty};
use chrono::NaiveDateTime;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlyAssaultBoss {
    #[serde(default)]
    pub icon: String,
    pub name: String,
    #[serde(alias = "bg_icon", default)]
    pub background: String,
    #[serde(alias = "race_icon", default)]
    pub badge_icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlyAssaultBuff {
    pub name: String,
    #[serde(alias = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlyAssaultAgent {
    pub id: u64,
    pub level: i64,
    #[serde(alias = "element_type")]
    pub element: Coerced<ZzzElement>,
    #[serde(alias = "avatar_profession")]
    pub specialty: Coerced<ZzzSpecialty>,
    pub rarity: Coerced<Rarity>,
    #[serde(alias = "rank", default)]
    pub mindscape: i64,
    #[serde(alias = "role_square_url", default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeBangboo {
    pub id: u64,
    pub rarity: Coerced<Rarity>,
    pub level: i64,
    #[serde(alias = "bangboo_rectangle_url", default)]
    pub icon: String,
}

/// One boss fight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlyAssaultChallenge {
    pub score: i64,
    pub star: i64,
    pub total_star: i64,
    #[serde(default, deserialize_with = "optional_date_dict")]
    pub challenge_time: Option<NaiveDateTime>,

    /// Sent as a list; only the first entry is meaningful
    #[serde(deserialize_with = "first_boss")]
    pub boss: DeadlyAssaultBoss,
    #[serde(alias = "buffer", default)]
    pub buffs: Vec<DeadlyAssaultBuff>,
    #[serde(alias = "avatar_list", default)]
    pub agents: Vec<DeadlyAssaultAgent>,
    #[serde(alias = "buddy", default)]
    pub bangboo: Option<ChallengeBangboo>,
}

fn first_boss<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DeadlyAssaultBoss, D::Error> {
    Vec::<DeadlyAssaultBoss>::deserialize(deserializer)?
        .into_iter()
        .next()
        .ok_or_else(|| de::Error::custom("No boss data provided"))
}

/// Rank percentile arrives in hundredths of a percent
pub(crate) fn rank_percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = lenient_i64(deserializer)?;
    Ok(format_rank_percent(value))
}

pub(crate) fn format_rank_percent(value: i64) -> String {
    // Debug keeps the trailing `.0` on whole numbers
    format!("{:?}%", value as f64 / 100.0)
}

/// Deadly Assault season summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlyAssault {
    #[serde(alias = "zone_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "optional_date_dict")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "optional_date_dict")]
    pub end_time: Option<NaiveDateTime>,

    #[serde(alias = "list", default)]
    pub challenges: Vec<DeadlyAssaultChallenge>,
    #[serde(default)]
    pub has_data: bool,
    #[serde(default)]
    pub total_score: i64,
    #[serde(default)]
    pub total_star: i64,
    #[serde(deserialize_with = "rank_percent")]
    pub rank_percent: String,

    #[serde(alias = "nick_name", default)]
    pub nickname: String,
    #[serde(alias = "avatar_icon", default)]
    pub player_avatar: String,
}
