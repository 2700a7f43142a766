//! Response models
//!
//! Fields accept the API's names through serde aliases and serialize under the
//! crate's own names. Enum-like fields are wrapped in [`Coerced`] so unseen values
//! survive parsing.

mod assault;
mod calculator;
mod common;
mod events;
mod gacha;
mod notes;
mod shiyu;
mod threshold;

pub use assault::{
    ChallengeBangboo, DeadlyAssault, DeadlyAssaultAgent, DeadlyAssaultBoss, DeadlyAssaultBuff,
    DeadlyAssaultChallenge,
};
pub use calculator::{
    CalculatorArtifactResult, CalculatorBatchResult, CalculatorConsumable, CalculatorResult,
    CalculatorTalentInfo, CalculatorTalentResult,
};
pub use common::{Coerced, DateDict, Rarity, ZzzElement, ZzzSpecialty};
pub use events::{
    ZzzCharacterGachaEvent, ZzzEvent, ZzzEventStatus, ZzzGachaCalendar, ZzzGachaEvent,
    ZzzGachaEventCharacter, ZzzGachaEventStatus, ZzzGachaEventType, ZzzGachaEventWeapon,
    ZzzWeaponGachaEvent,
};
pub(crate) use events::ZzzEventCalendar;
pub use gacha::{
    ChronicleSignalRecord, SignalSearch, ZzzBannerType, ZzzGachaBannerInfo, ZzzGachaCurrencies,
    ZzzGachaInfo,
};
pub use notes::{
    BatteryCharge, Progress, VideoStoreState, ZzzCurrencyType, ZzzDiary, ZzzDiaryCurrency,
    ZzzIncomeComponent, ZzzMonthDiaryData, ZzzNotes,
};
pub use shiyu::{
    ShiyuDefense, ShiyuDefenseBuff, ShiyuDefenseCharacter, ShiyuDefenseFloor,
    ShiyuDefenseMonster, ShiyuDefenseNode, ShiyuMonsterElementEffect, ShiyuMonsterElementEffects,
};
pub use threshold::{
    ThresholdSimulation, ThresholdSimulationBoss, ThresholdSimulationBossChallenge,
    ThresholdSimulationBuff, ThresholdSimulationChallenge, ThresholdSimulationCharacter,
    ThresholdSimulationInfo, ThresholdSimulationMainChallenge, ThresholdSimulationPlayer,
};
pub(crate) use threshold::ThresholdSimulationBrief;

#[cfg(test)]
mod tests;
