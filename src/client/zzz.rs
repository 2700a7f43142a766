//! ZZZ battle chronicle endpoints

use super::{account_timezone, Client, RecordRequest};
use crate::error::Result;
use crate::models::{
    ChronicleSignalRecord, DeadlyAssault, ShiyuDefense, SignalSearch, ThresholdSimulation,
    ThresholdSimulationBrief, ThresholdSimulationInfo, ZzzBannerType, ZzzDiary, ZzzEvent,
    ZzzEventCalendar, ZzzGachaCalendar, ZzzGachaInfo,
};
use crate::pagination::{
    BoxedPaginator, Cursor, CursorPaginator, MergedPaginator, PageFetcher, SortOrder,
};
use crate::types::{Game, JsonValue};
use async_trait::async_trait;
use chrono::FixedOffset;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
struct GachaRecordPage {
    #[serde(default)]
    gacha_item_list: Vec<ChronicleSignalRecord>,
}

fn schedule_type(previous: bool) -> u8 {
    if previous {
        2
    } else {
        1
    }
}

impl Client {
    /// Real-time notes
    ///
    /// Use [`crate::models::ZzzNotes`] for the parsed model or [`JsonValue`] for raw data.
    pub async fn get_zzz_notes<T: DeserializeOwned>(&self, uid: Option<u64>) -> Result<T> {
        self.request_zzz_record(RecordRequest::new("note").uid(uid))
            .await
    }

    /// Monthly currency income; `month` is `YYYYMM`, empty for the current month
    pub async fn get_zzz_diary(&self, uid: Option<u64>, month: Option<&str>) -> Result<ZzzDiary> {
        let request = RecordRequest::new("month_info")
            .uid(uid)
            .nap_ledger()
            .param("month", month.unwrap_or_default());
        self.request_zzz_record(request).await
    }

    /// Running and upcoming events
    pub async fn get_zzz_event_calendar(&self, uid: Option<u64>) -> Result<Vec<ZzzEvent>> {
        let request = RecordRequest::new("activity_calendar")
            .uid(uid)
            .uid_in_payload();
        let calendar: ZzzEventCalendar = self.request_zzz_record(request).await?;
        Ok(calendar.activity_list)
    }

    /// Running and upcoming banners
    pub async fn get_zzz_gacha_calendar(&self, uid: Option<u64>) -> Result<ZzzGachaCalendar> {
        let request = RecordRequest::new("gacha_calendar")
            .uid(uid)
            .uid_in_payload();
        self.request_zzz_record(request).await
    }

    /// Gacha currencies and pity
    pub async fn get_zzz_gacha_info(&self, uid: Option<u64>) -> Result<ZzzGachaInfo> {
        self.request_zzz_record(gacha_info_request(uid)).await
    }

    /// Gacha currencies and pity, unparsed
    pub async fn get_zzz_gacha_info_raw(&self, uid: Option<u64>) -> Result<JsonValue> {
        self.request_zzz_record(gacha_info_request(uid)).await
    }

    /// Deadly Assault of the current or previous season
    pub async fn get_deadly_assault(&self, uid: Option<u64>, previous: bool) -> Result<DeadlyAssault> {
        self.request_zzz_record(deadly_assault_request(uid, previous))
            .await
    }

    /// Deadly Assault of the current or previous season, unparsed
    pub async fn get_deadly_assault_raw(&self, uid: Option<u64>, previous: bool) -> Result<JsonValue> {
        self.request_zzz_record(deadly_assault_request(uid, previous))
            .await
    }

    /// Shiyu Defense of the current or previous season
    pub async fn get_shiyu_defense(&self, uid: Option<u64>, previous: bool) -> Result<ShiyuDefense> {
        self.request_zzz_record(shiyu_defense_request(uid, previous))
            .await
    }

    /// Shiyu Defense of the current or previous season, unparsed
    pub async fn get_shiyu_defense_raw(&self, uid: Option<u64>, previous: bool) -> Result<JsonValue> {
        self.request_zzz_record(shiyu_defense_request(uid, previous))
            .await
    }

    /// Summary of the latest Threshold Simulation run
    pub async fn get_threshold_simulation_brief(
        &self,
        uid: Option<u64>,
    ) -> Result<ThresholdSimulationInfo> {
        let request = RecordRequest::new("void_front_battle_abstract_info")
            .uid(uid)
            .uid_in_payload();
        let brief: ThresholdSimulationBrief = self.request_zzz_record(request).await?;
        Ok(brief.void_front_battle_abstract_info_brief)
    }

    /// Threshold Simulation run `id`, or the latest run when `None`
    pub async fn get_threshold_simulation(
        &self,
        id: Option<u64>,
        uid: Option<u64>,
    ) -> Result<ThresholdSimulation> {
        let request = self.threshold_simulation_request(id, uid).await?;
        self.request_zzz_record(request).await
    }

    /// Threshold Simulation run `id`, or the latest run when `None`, unparsed
    pub async fn get_threshold_simulation_raw(
        &self,
        id: Option<u64>,
        uid: Option<u64>,
    ) -> Result<JsonValue> {
        let request = self.threshold_simulation_request(id, uid).await?;
        self.request_zzz_record(request).await
    }

    async fn threshold_simulation_request(
        &self,
        id: Option<u64>,
        uid: Option<u64>,
    ) -> Result<RecordRequest> {
        let id = match id {
            Some(id) => id,
            None => self.get_threshold_simulation_brief(uid).await?.id,
        };
        Ok(RecordRequest::new("void_front_battle_detail")
            .uid(uid)
            .uid_in_payload()
            .param("void_front_id", id))
    }

    /// Signal search history across `banners`, newest first
    ///
    /// An empty `banners` slice means every banner. A single banner is paged directly;
    /// several are merged by pull time. `limit` caps the total number of pulls and
    /// `end_id` resumes after a known signal id.
    pub fn chronicle_signal_history(
        &self,
        uid: Option<u64>,
        banners: &[ZzzBannerType],
        limit: Option<usize>,
        end_id: u64,
    ) -> Result<BoxedPaginator<SignalSearch>> {
        let uid = self.resolve_uid(Game::Zzz, uid)?;
        let offset = account_timezone(uid)?;

        let banners = if banners.is_empty() {
            ZzzBannerType::all().to_vec()
        } else {
            banners.to_vec()
        };

        let sources: Vec<BoxedPaginator<SignalSearch>> = banners
            .into_iter()
            .map(|banner| {
                let fetcher = SignalPageFetcher::new(self.clone(), uid, banner, offset);
                let paginator = CursorPaginator::new(fetcher)
                    .with_end_id(end_id)
                    .with_limit(limit)
                    .with_page_size(self.config.page_size);
                Box::new(paginator) as BoxedPaginator<SignalSearch>
            })
            .collect();

        let sources = match <[_; 1]>::try_from(sources) {
            Ok([source]) => return Ok(source),
            Err(sources) => sources,
        };

        let merged = MergedPaginator::new(sources, |signal: &SignalSearch| signal.time)
            .with_order(SortOrder::Descending)
            .with_limit(limit);
        Ok(Box::new(merged))
    }
}

fn gacha_info_request(uid: Option<u64>) -> RecordRequest {
    RecordRequest::new("cur_gacha_detail")
        .uid(uid)
        .uid_in_payload()
}

fn shiyu_defense_request(uid: Option<u64>, previous: bool) -> RecordRequest {
    RecordRequest::new("challenge")
        .uid(uid)
        .param("schedule_type", schedule_type(previous))
        .param("need_all", "true")
}

fn deadly_assault_request(uid: Option<u64>, previous: bool) -> RecordRequest {
    RecordRequest::new("mem_detail")
        .uid(uid)
        .uid_in_payload()
        .param("schedule_type", schedule_type(previous))
}

/// Fetches one page of chronicle signal history for a single banner
#[derive(Debug, Clone)]
pub struct SignalPageFetcher {
    client: Client,
    uid: u64,
    banner: ZzzBannerType,
    offset: FixedOffset,
}

impl SignalPageFetcher {
    pub fn new(client: Client, uid: u64, banner: ZzzBannerType, offset: FixedOffset) -> Self {
        Self {
            client,
            uid,
            banner,
            offset,
        }
    }
}

#[async_trait]
impl PageFetcher<SignalSearch> for SignalPageFetcher {
    async fn fetch_page(&self, cursor: &Cursor) -> Result<Vec<SignalSearch>> {
        let request = RecordRequest::new("gacha_record")
            .uid(Some(self.uid))
            .uid_in_payload()
            .param("gacha_type", self.banner.to_chronicle_type())
            .param("end_id", cursor.to_string());

        let page: GachaRecordPage = self.client.request_zzz_record(request).await?;
        debug!(banner = %self.banner, %cursor, records = page.gacha_item_list.len(), "Fetched signal page");

        page.gacha_item_list
            .into_iter()
            .map(|record| SignalSearch::from_chronicle_data(record, self.uid, self.banner, self.offset))
            .collect()
    }
}
