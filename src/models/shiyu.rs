//! Shiyu Defense

use super::assault::ChallengeBangboo;
use super::common::{lenient_i64, optional_date_dict, Coerced, Rarity, ZzzElement};
use chrono::NaiveDateTime;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a monster reacts to one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ShiyuMonsterElementEffect {
    Weakness,
    Neutral,
    Resistance,
}

impl TryFrom<i64> for ShiyuMonsterElementEffect {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Weakness),
            0 => Ok(Self::Neutral),
            -1 => Ok(Self::Resistance),
            other => Err(format!("unknown element effect {other}")),
        }
    }
}

impl From<ShiyuMonsterElementEffect> for i64 {
    fn from(effect: ShiyuMonsterElementEffect) -> Self {
        match effect {
            ShiyuMonsterElementEffect::Weakness => 1,
            ShiyuMonsterElementEffect::Neutral => 0,
            ShiyuMonsterElementEffect::Resistance => -1,
        }
    }
}

/// Per-attribute effects, sent as flat `*_weakness` fields on the monster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiyuMonsterElementEffects {
    #[serde(alias = "ice_weakness")]
    pub ice: ShiyuMonsterElementEffect,
    #[serde(alias = "fire_weakness")]
    pub fire: ShiyuMonsterElementEffect,
    #[serde(alias = "elec_weakness")]
    pub electric: ShiyuMonsterElementEffect,
    #[serde(alias = "ether_weakness")]
    pub ether: ShiyuMonsterElementEffect,
    #[serde(alias = "physics_weakness")]
    pub physical: ShiyuMonsterElementEffect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiyuDefenseCharacter {
    pub id: u64,
    pub level: i64,
    pub rarity: Coerced<Rarity>,
    #[serde(alias = "element_type")]
    pub element: Coerced<ZzzElement>,
    #[serde(alias = "role_square_url", default)]
    pub icon: String,
    #[serde(alias = "rank", default)]
    pub mindscape: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiyuDefenseBuff {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(alias = "text", default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiyuDefenseMonster {
    pub id: u64,
    pub name: String,
    /// Copied from the enclosing node's monster level
    #[serde(default)]
    pub level: i64,
    #[serde(flatten)]
    pub element_effects: ShiyuMonsterElementEffects,
}

/// One half of a floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiyuDefenseNode {
    #[serde(alias = "avatars", default)]
    pub characters: Vec<ShiyuDefenseCharacter>,
    #[serde(alias = "buddy", default)]
    pub bangboo: Option<ChallengeBangboo>,
    #[serde(alias = "element_type_list", default)]
    pub recommended_elements: Vec<Coerced<ZzzElement>>,
    #[serde(alias = "monster_info", deserialize_with = "leveled_monsters")]
    pub enemies: Vec<ShiyuDefenseMonster>,
    /// Clear time in seconds
    #[serde(default)]
    pub battle_time: Option<i64>,
}

#[derive(Deserialize)]
struct MonsterInfo {
    #[serde(default, deserialize_with = "lenient_i64")]
    level: i64,
    #[serde(default)]
    list: Vec<ShiyuDefenseMonster>,
}

/// Monsters arrive as `{"level": n, "list": [...]}` with the level shared by all
fn leveled_monsters<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<ShiyuDefenseMonster>, D::Error> {
    let info = MonsterInfo::deserialize(deserializer)?;
    Ok(info
        .list
        .into_iter()
        .map(|monster| ShiyuDefenseMonster {
            level: info.level,
            ..monster
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiyuDefenseFloor {
    #[serde(alias = "layer_index")]
    pub index: i64,
    pub rating: Coerced<Rarity>,
    #[serde(alias = "layer_id")]
    pub id: u64,
    #[serde(default)]
    pub buffs: Vec<ShiyuDefenseBuff>,
    pub node_1: ShiyuDefenseNode,
    pub node_2: ShiyuDefenseNode,
    #[serde(
        alias = "floor_challenge_time",
        default,
        deserialize_with = "optional_date_dict"
    )]
    pub challenge_time: Option<NaiveDateTime>,
    #[serde(alias = "zone_name", default)]
    pub name: String,
}

#[derive(Deserialize)]
struct RatingCount {
    rating: String,
    times: i64,
}

/// Ratings arrive as a list of `{"rating", "times"}` pairs
fn rating_counts<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, i64>, D::Error> {
    Ok(Vec::<RatingCount>::deserialize(deserializer)?
        .into_iter()
        .map(|count| (count.rating, count.times))
        .collect())
}

/// Shiyu Defense season summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiyuDefense {
    pub schedule_id: u64,
    #[serde(alias = "hadal_begin_time", default, deserialize_with = "optional_date_dict")]
    pub begin_time: Option<NaiveDateTime>,
    #[serde(alias = "hadal_end_time", default, deserialize_with = "optional_date_dict")]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub has_data: bool,
    /// Times each rating was achieved, keyed by rating letter
    #[serde(alias = "rating_list", default, deserialize_with = "rating_counts")]
    pub ratings: BTreeMap<String, i64>,
    #[serde(alias = "all_floor_detail", default)]
    pub floors: Vec<ShiyuDefenseFloor>,
    /// Fastest clear time this season in seconds
    #[serde(alias = "fast_layer_time", default)]
    pub fastest_clear_time: i64,
    #[serde(alias = "max_layer", default)]
    pub max_floor: i64,
}

impl ShiyuDefense {
    /// Sum of the clear times of every node, in seconds
    pub fn total_clear_time(&self) -> i64 {
        self.floors
            .iter()
            .flat_map(|floor| [&floor.node_1, &floor.node_2])
            .filter_map(|node| node.battle_time)
            .sum()
    }
}
