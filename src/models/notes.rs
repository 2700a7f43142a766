//! Real-time notes and the monthly ledger

use super::common::{lenient_i64, Coerced};
use serde::{Deserialize, Serialize};

// ============================================================================
// Notes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoStoreState {
    #[serde(rename = "SaleStateDone")]
    RevenueAvailable,
    #[serde(rename = "SaleStateNo")]
    WaitingToOpen,
    #[serde(rename = "SaleStateDoing")]
    CurrentlyOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBattery")]
pub struct BatteryCharge {
    pub current: i64,
    pub max: i64,
    pub seconds_till_full: i64,
}

impl BatteryCharge {
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

#[derive(Deserialize)]
struct RawBattery {
    progress: Progress,
    #[serde(default, deserialize_with = "lenient_i64")]
    restore: i64,
}

impl From<RawBattery> for BatteryCharge {
    fn from(raw: RawBattery) -> Self {
        Self {
            current: raw.progress.current,
            max: raw.progress.max,
            seconds_till_full: raw.restore,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawVhsSale {
    sale_state: Coerced<VideoStoreState>,
}

/// Real-time notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNotes")]
pub struct ZzzNotes {
    pub battery_charge: BatteryCharge,
    pub engagement: Progress,
    pub scratch_card_completed: bool,
    pub video_store_state: Coerced<VideoStoreState>,
}

#[derive(Deserialize)]
struct RawNotes {
    energy: BatteryCharge,
    vitality: Progress,
    #[serde(default)]
    card_sign: String,
    vhs_sale: RawVhsSale,
}

impl From<RawNotes> for ZzzNotes {
    fn from(raw: RawNotes) -> Self {
        Self {
            battery_charge: raw.energy,
            engagement: raw.vitality,
            scratch_card_completed: raw.card_sign == "CardSignDone",
            video_store_state: raw.vhs_sale.sale_state,
        }
    }
}

// ============================================================================
// Ledger
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZzzCurrencyType {
    #[serde(rename = "PolychromesData")]
    Polychromes,
    #[serde(rename = "MatserTapeData")]
    MasterTapes,
    #[serde(rename = "BooponsData")]
    Boopons,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZzzDiaryCurrency {
    #[serde(alias = "data_type")]
    pub currency_type: Coerced<ZzzCurrencyType>,
    #[serde(alias = "count", deserialize_with = "lenient_i64")]
    pub amount: i64,
    #[serde(alias = "data_name", default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZzzIncomeComponent {
    pub action: String,
    #[serde(alias = "num", deserialize_with = "lenient_i64")]
    pub amount: i64,
    #[serde(default)]
    pub percent: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZzzMonthDiaryData {
    #[serde(alias = "list", default)]
    pub currencies: Vec<ZzzDiaryCurrency>,
    #[serde(default)]
    pub income_components: Vec<ZzzIncomeComponent>,
}

/// Monthly currency income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZzzDiary {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub uid: i64,
    #[serde(default)]
    pub region: String,
    /// `YYYYMM`
    #[serde(alias = "data_month", default)]
    pub month: String,
    #[serde(alias = "month_data", default)]
    pub data: ZzzMonthDiaryData,
}
