//! Threshold Simulation

use super::assault::{rank_percent, ChallengeBangboo};
use super::common::{lenient_i64, optional_date_dict, Coerced, Rarity, ZzzElement};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Summary of one Threshold Simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSimulationInfo {
    #[serde(alias = "void_front_id")]
    pub id: u64,
    #[serde(alias = "end_ts_over_42_days", default)]
    pub time_remaining_over_42_days: bool,
    /// Days until the run closes
    #[serde(alias = "end_ts", default, deserialize_with = "lenient_i64")]
    pub time_remaining_days: i64,
    #[serde(alias = "has_ending_record", default)]
    pub has_data: bool,
    #[serde(alias = "ending_record_name", default)]
    pub ending_name: String,
    #[serde(alias = "ending_record_bg_pic", default)]
    pub ending_background: String,
    #[serde(default)]
    pub total_score: i64,
    #[serde(deserialize_with = "rank_percent")]
    pub rank_percent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSimulationCharacter {
    pub id: u64,
    pub level: i64,
    #[serde(alias = "element_type")]
    pub element: Coerced<ZzzElement>,
    pub rarity: Coerced<Rarity>,
    #[serde(alias = "rank", default)]
    pub mindscape: i64,
    #[serde(alias = "role_square_url", default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSimulationBoss {
    #[serde(default)]
    pub icon: String,
    pub name: String,
    #[serde(alias = "race_icon", default)]
    pub badge_icon: String,
    #[serde(alias = "bg_icon", default)]
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSimulationBuff {
    pub name: String,
    #[serde(alias = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// One cleared battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSimulationChallenge {
    #[serde(alias = "battle_id")]
    pub id: u64,
    pub name: String,
    #[serde(alias = "star")]
    pub rating: Coerced<Rarity>,
    #[serde(alias = "avatar_list", default)]
    pub characters: Vec<ThresholdSimulationCharacter>,
    #[serde(alias = "buddy", default)]
    pub bangboo: Option<ChallengeBangboo>,
    #[serde(alias = "buffer")]
    pub buff: Option<ThresholdSimulationBuff>,
}

/// Scored battle with its sub-battles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSimulationMainChallenge {
    #[serde(flatten)]
    pub challenge: ThresholdSimulationChallenge,
    pub node_id: u64,
    pub score: i64,
    pub max_score: i64,
    #[serde(alias = "score_ratio", default)]
    pub score_multiplier: String,
    #[serde(alias = "challenge_time", default, deserialize_with = "optional_date_dict")]
    pub time: Option<NaiveDateTime>,
    #[serde(alias = "sub_challenge_record", default)]
    pub sub_challenges: Vec<ThresholdSimulationChallenge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSimulationBossChallenge {
    #[serde(alias = "boss_info")]
    pub boss: ThresholdSimulationBoss,
    #[serde(alias = "main_challenge_record")]
    pub challenge: ThresholdSimulationMainChallenge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSimulationPlayer {
    pub nickname: String,
    pub server: String,
    #[serde(default)]
    pub icon: String,
}

/// Threshold Simulation run details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSimulation {
    #[serde(alias = "void_front_battle_abstract_info_brief")]
    pub info: ThresholdSimulationInfo,
    #[serde(alias = "boss_challenge_record")]
    pub boss_challenge: ThresholdSimulationBossChallenge,
    #[serde(alias = "main_challenge_record_list", default)]
    pub challenges: Vec<ThresholdSimulationChallenge>,
    #[serde(alias = "role_basic_info")]
    pub player: ThresholdSimulationPlayer,
}

/// Payload of the brief endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ThresholdSimulationBrief {
    pub(crate) void_front_battle_abstract_info_brief: ThresholdSimulationInfo,
}
