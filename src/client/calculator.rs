//! Enhancement cost calculator
//!
//! Build a plan with [`CalculatorBuilder`] and send it with `calculate`, or collect
//! several plans in a [`BatchCalculator`] to have them costed together.

use super::Client;
use crate::error::{Error, Result};
use crate::models::{CalculatorBatchResult, CalculatorResult};
use crate::types::JsonValue;
use serde::Serialize;
use serde_json::json;

/// Level range of one upgradable thing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct LevelTarget {
    id: u64,
    level_current: u32,
    level_target: u32,
}

impl LevelTarget {
    fn new(id: u64, current: u32, target: u32) -> std::result::Result<Self, String> {
        if current > target {
            return Err(format!(
                "Current level {current} is above target {target} for {id}"
            ));
        }
        Ok(Self {
            id,
            level_current: current,
            level_target: target,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CharacterTarget {
    level: LevelTarget,
    element: Option<u32>,
}

/// Upgrade plan for one character
#[derive(Debug, Clone)]
pub struct CalculatorBuilder {
    client: Client,
    character: Option<CharacterTarget>,
    weapon: Option<LevelTarget>,
    artifacts: Vec<LevelTarget>,
    talents: Vec<LevelTarget>,
    error: Option<String>,
}

impl CalculatorBuilder {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            character: None,
            weapon: None,
            artifacts: Vec::new(),
            talents: Vec::new(),
            error: None,
        }
    }

    /// Keep the first invalid level so `payload` can report it
    fn record(&mut self, target: std::result::Result<LevelTarget, String>) -> Option<LevelTarget> {
        match target {
            Ok(target) => Some(target),
            Err(message) => {
                self.error.get_or_insert(message);
                None
            }
        }
    }

    /// Level the character from `current` to `target`
    ///
    /// `element` is only needed for the traveler.
    #[must_use]
    pub fn set_character(mut self, id: u64, current: u32, target: u32, element: Option<u32>) -> Self {
        let level = LevelTarget::new(id, current, target);
        self.character = self
            .record(level)
            .map(|level| CharacterTarget { level, element });
        self
    }

    #[must_use]
    pub fn set_weapon(mut self, id: u64, current: u32, target: u32) -> Self {
        let level = LevelTarget::new(id, current, target);
        self.weapon = self.record(level);
        self
    }

    #[must_use]
    pub fn add_artifact(mut self, id: u64, current: u32, target: u32) -> Self {
        let level = LevelTarget::new(id, current, target);
        if let Some(level) = self.record(level) {
            self.artifacts.push(level);
        }
        self
    }

    /// Level a talent, identified by its group id
    #[must_use]
    pub fn add_talent(mut self, group_id: u64, current: u32, target: u32) -> Self {
        let level = LevelTarget::new(group_id, current, target);
        if let Some(level) = self.record(level) {
            self.talents.push(level);
        }
        self
    }

    /// Request body for `compute`
    pub fn payload(&self) -> Result<JsonValue> {
        if let Some(message) = &self.error {
            return Err(Error::invalid_argument(message.clone()));
        }
        if self.character.is_none() && self.weapon.is_none() && self.artifacts.is_empty() {
            return Err(Error::invalid_argument("Nothing to calculate"));
        }

        let mut payload = json!({
            "skill_list": self.talents,
            "reliquary_list": self.artifacts,
            "lang": self.client.config().lang,
        });

        if let Some(character) = &self.character {
            payload["avatar_id"] = character.level.id.into();
            payload["avatar_level_current"] = character.level.level_current.into();
            payload["avatar_level_target"] = character.level.level_target.into();
            if let Some(element) = character.element {
                payload["element_attr_id"] = element.into();
            }
        }
        if let Some(weapon) = &self.weapon {
            payload["weapon"] = serde_json::to_value(weapon)?;
        }

        Ok(payload)
    }

    /// Cost of this plan
    pub async fn calculate(&self) -> Result<CalculatorResult> {
        let payload = self.payload()?;
        self.client.request_calculator("compute", payload).await
    }
}

/// Several plans costed in one request
#[derive(Debug, Clone)]
pub struct BatchCalculator {
    client: Client,
    items: Vec<CalculatorBuilder>,
}

impl BatchCalculator {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn add(mut self, builder: CalculatorBuilder) -> Self {
        self.items.push(builder);
        self
    }

    /// Request body for `batch_compute`
    pub fn payload(&self) -> Result<JsonValue> {
        if self.items.is_empty() {
            return Err(Error::invalid_argument("Batch has no plans"));
        }
        let items = self
            .items
            .iter()
            .map(CalculatorBuilder::payload)
            .collect::<Result<Vec<_>>>()?;
        Ok(json!({ "items": items }))
    }

    /// Cost of every plan plus the combined total
    pub async fn calculate(&self) -> Result<CalculatorBatchResult> {
        let payload = self.payload()?;
        self.client.request_calculator("batch_compute", payload).await
    }
}

impl Client {
    /// Start an upgrade plan
    pub fn calculator(&self) -> CalculatorBuilder {
        CalculatorBuilder::new(self.clone())
    }

    /// Start a batch of upgrade plans
    pub fn batch_calculator(&self) -> BatchCalculator {
        BatchCalculator::new(self.clone())
    }
}
