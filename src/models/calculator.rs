//! Enhancement calculator results

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_amount() -> i64 {
    1
}

/// Item consumed when upgrading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConsumable {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(alias = "level", default)]
    pub rarity: i64,
    #[serde(alias = "num", default = "default_amount")]
    pub amount: i64,
    #[serde(alias = "lack_num", default)]
    pub lacking: i64,
    #[serde(default)]
    pub wiki_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorArtifactResult {
    #[serde(alias = "reliquary_id")]
    pub artifact_id: u64,
    #[serde(alias = "id_consume_list", default)]
    pub materials: Vec<CalculatorConsumable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorTalentInfo {
    #[serde(alias = "id")]
    pub talent_id: u64,
    #[serde(alias = "level_current", default)]
    pub current: i64,
    #[serde(alias = "level_target", default)]
    pub target: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorTalentResult {
    #[serde(alias = "skill_info")]
    pub info: CalculatorTalentInfo,
    #[serde(alias = "consume_list", default)]
    pub materials: Vec<CalculatorConsumable>,
}

/// Cost of one character plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorResult {
    #[serde(alias = "avatar_consume", default)]
    pub character: Vec<CalculatorConsumable>,
    #[serde(alias = "weapon_consume", default)]
    pub weapon: Vec<CalculatorConsumable>,
    #[serde(alias = "skills_consume", default)]
    pub talents: Vec<CalculatorTalentResult>,
    #[serde(alias = "reliquary_consume", default)]
    pub artifacts: Vec<CalculatorArtifactResult>,
    #[serde(alias = "lineup_recommend", default)]
    pub lineup_recommendation: Option<String>,
}

impl CalculatorResult {
    /// All materials merged by id, amounts summed, in first-seen order
    pub fn total(&self) -> Vec<CalculatorConsumable> {
        let talents = self.talents.iter().flat_map(|t| &t.materials);
        let artifacts = self.artifacts.iter().flat_map(|a| &a.materials);
        let combined = self
            .character
            .iter()
            .chain(&self.weapon)
            .chain(talents)
            .chain(artifacts);

        let mut totals: Vec<CalculatorConsumable> = Vec::new();
        let mut index: HashMap<u64, usize> = HashMap::new();
        for item in combined {
            match index.get(&item.id) {
                Some(&position) => totals[position].amount += item.amount,
                None => {
                    index.insert(item.id, totals.len());
                    totals.push(item.clone());
                }
            }
        }
        totals
    }
}

/// Cost of several character plans computed together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorBatchResult {
    #[serde(alias = "items", default)]
    pub characters: Vec<CalculatorResult>,
    #[serde(alias = "available_material", default)]
    pub available_materials: Vec<CalculatorConsumable>,
    #[serde(alias = "overall_consume", default)]
    pub total_materials: Vec<CalculatorConsumable>,
    #[serde(default)]
    pub has_user_info: bool,
}

impl CalculatorBatchResult {
    /// Materials the account does not have enough of
    pub fn total_remaining_required_materials(&self) -> Vec<&CalculatorConsumable> {
        self.total_materials
            .iter()
            .filter(|material| material.lacking > 0)
            .collect()
    }
}
