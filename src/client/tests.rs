//! Tests for the chronicle client

use super::*;
use crate::config::RouteOverrides;
use crate::models::{ZzzBannerType, ZzzNotes};
use crate::pagination::Paginator;
use crate::types::JsonValue;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JP_UID: u64 = 1_300_000_001;

fn mock_client(server: &MockServer) -> Client {
    let config = ClientConfig {
        routes: RouteOverrides {
            record: Some(format!("{}/zzz/", server.uri())),
            nap_ledger: Some(format!("{}/nap_ledger/", server.uri())),
            calculator: Some(format!("{}/calc/", server.uri())),
        },
        ..ClientConfig::default()
    }
    .with_uid(Game::Zzz, JP_UID)
    .with_cookies("ltuid_v2=1; ltoken_v2=secret".parse().unwrap());

    Client::new(config).unwrap()
}

fn ok(data: JsonValue) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"retcode": 0, "message": "OK", "data": data}))
}

#[test_case(12_345_678, "prod_gf_cn" ; "eight digits")]
#[test_case(1_000_000_001, "prod_gf_us" ; "america")]
#[test_case(1_300_000_001, "prod_gf_jp" ; "asia")]
#[test_case(1_500_000_001, "prod_gf_eu" ; "europe")]
#[test_case(1_700_000_001, "prod_gf_sg" ; "tw hk mo")]
fn test_recognize_zzz_server(uid: u64, expected: &str) {
    assert_eq!(recognize_zzz_server(uid).unwrap(), expected);
}

#[test_case(1_900_000_001 ; "unknown prefix")]
#[test_case(123 ; "too short")]
fn test_recognize_zzz_server_unknown(uid: u64) {
    assert!(matches!(
        recognize_zzz_server(uid),
        Err(Error::UnknownServer { .. })
    ));
}

#[test_case("prod_gf_us", -5)]
#[test_case("prod_gf_eu", 1)]
#[test_case("prod_gf_jp", 8)]
#[test_case("prod_gf_cn", 8)]
fn test_server_timezone(server: &str, hours: i32) {
    assert_eq!(server_timezone(server).local_minus_utc(), hours * 3600);
}

#[test]
fn test_recognize_zzz_region() {
    assert_eq!(recognize_zzz_region("prod_gf_cn"), Region::Chinese);
    assert_eq!(recognize_zzz_region("prod_gf_eu"), Region::Overseas);
}

#[test]
fn test_resolve_uid() {
    let client = Client::new(ClientConfig::default().with_uid(Game::Zzz, JP_UID)).unwrap();

    assert_eq!(client.resolve_uid(Game::Zzz, None).unwrap(), JP_UID);
    assert_eq!(client.resolve_uid(Game::Zzz, Some(42)).unwrap(), 42);
    assert!(matches!(
        client.resolve_uid(Game::Genshin, None),
        Err(Error::MissingUid {
            game: Game::Genshin
        })
    ));
}

#[test]
fn test_with_lang_leaves_source_client() {
    let client = Client::new(ClientConfig::default()).unwrap();
    let japanese = client.with_lang("ja-jp");

    assert_eq!(client.config().lang, "en-us");
    assert_eq!(japanese.config().lang, "ja-jp");
}

#[tokio::test]
async fn test_notes_raw_and_model() {
    let server = MockServer::start().await;
    let data = json!({
        "energy": {"progress": {"max": 240, "current": 240}, "restore": 0},
        "vitality": {"max": 400, "current": 100},
        "vhs_sale": {"sale_state": "SaleStateDone"},
        "card_sign": "CardSignNo"
    });

    Mock::given(method("GET"))
        .and(path("/zzz/note"))
        .and(query_param("role_id", JP_UID.to_string()))
        .and(query_param("server", "prod_gf_jp"))
        .and(header("x-rpc-language", "en-us"))
        .and(header("cookie", "ltoken_v2=secret; ltuid_v2=1"))
        .respond_with(ok(data.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let client = mock_client(&server);

    let notes: ZzzNotes = client.get_zzz_notes(None).await.unwrap();
    assert!(notes.battery_charge.is_full());
    assert!(!notes.scratch_card_completed);

    let raw: JsonValue = client.get_zzz_notes(None).await.unwrap();
    assert_eq!(raw, data);
}

#[tokio::test]
async fn test_diary_uses_nap_ledger() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nap_ledger/month_info"))
        .and(query_param("uid", JP_UID.to_string()))
        .and(query_param("region", "prod_gf_jp"))
        .and(query_param("month", "202407"))
        .respond_with(ok(json!({"uid": JP_UID, "region": "prod_gf_jp", "data_month": "202407"})))
        .expect(1)
        .mount(&server)
        .await;

    let diary = mock_client(&server)
        .get_zzz_diary(None, Some("202407"))
        .await
        .unwrap();
    assert_eq!(diary.month, "202407");
}

#[tokio::test]
async fn test_deadly_assault_previous_season() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zzz/mem_detail"))
        .and(query_param("uid", "1000000002"))
        .and(query_param("region", "prod_gf_us"))
        .and(query_param("schedule_type", "2"))
        .respond_with(ok(json!({"zone_id": 1, "has_data": false, "rank_percent": 0, "list": []})))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let assault = client
        .get_deadly_assault(Some(1_000_000_002), true)
        .await
        .unwrap();
    assert_eq!(assault.rank_percent, "0.0%");
    assert!(assault.challenges.is_empty());

    let raw = client
        .get_deadly_assault_raw(Some(1_000_000_002), true)
        .await
        .unwrap();
    assert_eq!(raw["rank_percent"], 0);
}

#[tokio::test]
async fn test_event_calendar_unwraps_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zzz/activity_calendar"))
        .respond_with(ok(json!({"activity_list": [{
            "activity_id": 7, "state": "STATE_NOT_START", "name": "Upcoming",
            "start_ts": 1720000000, "end_ts": 1721000000
        }]})))
        .mount(&server)
        .await;

    let events = mock_client(&server)
        .get_zzz_event_calendar(None)
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Upcoming");
}

#[tokio::test]
async fn test_missing_uid_fails_before_request() {
    let server = MockServer::start().await;
    let client = Client::new(ClientConfig::default()).unwrap();

    let err = client
        .get_zzz_gacha_info(None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingUid { game: Game::Zzz }));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_single_banner_history() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zzz/gacha_record"))
        .and(query_param("gacha_type", "2001"))
        .and(query_param("end_id", "0"))
        .respond_with(ok(json!({"gacha_item_list": [
            {"id": "30", "item_id": "1", "item_name": "A", "item_type": "Agents", "rarity": "S",
             "date": {"year": 2024, "month": 7, "day": 3, "hour": 0, "minute": 0, "second": 0}},
            {"id": "20", "item_id": "2", "item_name": "B", "item_type": "W-Engines", "rarity": "B",
             "date": {"year": 2024, "month": 7, "day": 2, "hour": 0, "minute": 0, "second": 0}}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let mut history = mock_client(&server)
        .chronicle_signal_history(None, &[ZzzBannerType::Character], None, 0)
        .unwrap();
    let signals = history.flatten().await.unwrap();

    let ids: Vec<u64> = signals.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![30, 20]);
    assert_eq!(signals[0].banner_type, ZzzBannerType::Character);
    assert_eq!(signals[0].uid, JP_UID);
    assert_eq!(signals[0].time.offset().local_minus_utc(), 8 * 3600);
    assert!(history.is_exhausted());
}

#[test]
fn test_history_needs_known_server() {
    let client = Client::new(ClientConfig::default()).unwrap();
    let result = client.chronicle_signal_history(Some(1_900_000_000), &[], None, 0);
    assert!(matches!(result, Err(Error::UnknownServer { .. })));
}

#[tokio::test]
async fn test_shiyu_defense_uses_role_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zzz/challenge"))
        .and(query_param("role_id", JP_UID.to_string()))
        .and(query_param("server", "prod_gf_jp"))
        .and(query_param("schedule_type", "2"))
        .and(query_param("need_all", "true"))
        .respond_with(ok(json!({
            "schedule_id": 61, "has_data": false, "rating_list": [],
            "all_floor_detail": [], "fast_layer_time": 0, "max_layer": 0
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let shiyu = client.get_shiyu_defense(None, true).await.unwrap();
    assert_eq!(shiyu.schedule_id, 61);
    assert_eq!(shiyu.total_clear_time(), 0);

    let raw = client.get_shiyu_defense_raw(None, true).await.unwrap();
    assert_eq!(raw["schedule_id"], 61);
}

fn threshold_brief_data() -> JsonValue {
    json!({"void_front_battle_abstract_info_brief": {
        "void_front_id": 4, "end_ts": 12, "has_ending_record": false,
        "total_score": 0, "rank_percent": 0
    }})
}

#[tokio::test]
async fn test_threshold_simulation_brief() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zzz/void_front_battle_abstract_info"))
        .and(query_param("uid", JP_UID.to_string()))
        .and(query_param("region", "prod_gf_jp"))
        .respond_with(ok(threshold_brief_data()))
        .expect(1)
        .mount(&server)
        .await;

    let info = mock_client(&server)
        .get_threshold_simulation_brief(None)
        .await
        .unwrap();
    assert_eq!(info.id, 4);
    assert_eq!(info.rank_percent, "0.0%");
}

#[tokio::test]
async fn test_threshold_simulation_defaults_to_latest_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zzz/void_front_battle_abstract_info"))
        .respond_with(ok(threshold_brief_data()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/zzz/void_front_battle_detail"))
        .and(query_param("void_front_id", "4"))
        .respond_with(ok(json!({"void_front_id": 4, "main_challenge_record_list": []})))
        .expect(1)
        .mount(&server)
        .await;

    let raw = mock_client(&server)
        .get_threshold_simulation_raw(None, None)
        .await
        .unwrap();
    assert_eq!(raw["void_front_id"], 4);
}

#[tokio::test]
async fn test_threshold_simulation_with_id_skips_brief() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zzz/void_front_battle_detail"))
        .and(query_param("void_front_id", "9"))
        .respond_with(ok(json!({"void_front_id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let raw = mock_client(&server)
        .get_threshold_simulation_raw(Some(9), None)
        .await
        .unwrap();
    assert_eq!(raw["void_front_id"], 9);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_multi_banner_history_is_merged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/zzz/gacha_record"))
        .and(query_param("gacha_type", "1001"))
        .respond_with(ok(json!({"gacha_item_list": [
            {"id": "5", "item_id": "1", "item_name": "A", "item_type": "Agents", "rarity": "A",
             "date": {"year": 2024, "month": 7, "day": 1, "hour": 0, "minute": 0, "second": 0}}
        ]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/zzz/gacha_record"))
        .and(query_param("gacha_type", "5001"))
        .respond_with(ok(json!({"gacha_item_list": [
            {"id": "6", "item_id": "2", "item_name": "B", "item_type": "Bangboo", "rarity": "S",
             "date": {"year": 2024, "month": 7, "day": 2, "hour": 0, "minute": 0, "second": 0}}
        ]})))
        .mount(&server)
        .await;

    let signals = mock_client(&server)
        .chronicle_signal_history(None, &[ZzzBannerType::Standard, ZzzBannerType::Bangboo], None, 0)
        .unwrap()
        .flatten()
        .await
        .unwrap();

    let ids: Vec<u64> = signals.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![6, 5]);
}
