//! Tests for response models

use super::assault::format_rank_percent;
use super::*;
use crate::pagination::{Cursor, CursorItem};
use chrono::{FixedOffset, NaiveDate, TimeZone};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Common
// ============================================================================

#[test]
fn test_coerced_keeps_unknown_values() {
    let known: Coerced<ZzzElement> = serde_json::from_value(json!(203)).unwrap();
    assert_eq!(known, Coerced::Known(ZzzElement::Electric));
    assert!(known.is_known());

    let unknown: Coerced<ZzzElement> = serde_json::from_value(json!(299)).unwrap();
    assert_eq!(unknown, Coerced::Unknown(json!(299)));
    assert_eq!(unknown.known(), None);

    let status: Coerced<ZzzEventStatus> =
        serde_json::from_value(json!("STATE_SOMETHING_NEW")).unwrap();
    assert!(!status.is_known());
}

#[test]
fn test_date_dict_accepts_strings() {
    let dict: DateDict = serde_json::from_value(json!({
        "year": "2024", "month": 7, "day": "4", "hour": 13, "minute": "05", "second": 9
    }))
    .unwrap();

    assert_eq!(
        dict.to_naive(),
        NaiveDate::from_ymd_opt(2024, 7, 4).and_then(|d| d.and_hms_opt(13, 5, 9))
    );
    assert_eq!(dict.to_string(), "2024-07-04 13:05:09");
}

#[test]
fn test_date_dict_out_of_range() {
    let dict: DateDict =
        serde_json::from_value(json!({"year": 2024, "month": 13, "day": 1})).unwrap();
    assert_eq!(dict.to_naive(), None);
}

#[test_case(1234, "12.34%" ; "fraction")]
#[test_case(5000, "50.0%" ; "whole")]
#[test_case(0, "0.0%" ; "zero")]
fn test_rank_percent(value: i64, expected: &str) {
    assert_eq!(format_rank_percent(value), expected);
}

// ============================================================================
// Gacha
// ============================================================================

#[test_case(ZzzBannerType::Standard, 1, 1001)]
#[test_case(ZzzBannerType::Character, 2, 2001)]
#[test_case(ZzzBannerType::Weapon, 3, 3001)]
#[test_case(ZzzBannerType::Bangboo, 5, 5001)]
fn test_banner_type_codes(banner: ZzzBannerType, code: i64, chronicle: u32) {
    assert_eq!(i64::from(banner), code);
    assert_eq!(ZzzBannerType::try_from(code).unwrap(), banner);
    assert_eq!(banner.to_chronicle_type(), chronicle);
}

#[test]
fn test_banner_type_rejects_unknown() {
    assert!(ZzzBannerType::try_from(4_i64).is_err());
    assert!(serde_json::from_value::<ZzzBannerType>(json!(4)).is_err());
    assert_eq!(ZzzBannerType::all().len(), 4);
}

#[test]
fn test_signal_search_from_chronicle_data() {
    let record: ChronicleSignalRecord = serde_json::from_value(json!({
        "id": "1718000000000012345",
        "item_id": "1041",
        "item_name": "Soldier 11",
        "item_type": "Agents",
        "rarity": "S",
        "date": {"year": 2024, "month": 7, "day": 4, "hour": 13, "minute": 5, "second": 9}
    }))
    .unwrap();
    let offset = FixedOffset::east_opt(8 * 3600).unwrap();

    let signal =
        SignalSearch::from_chronicle_data(record, 1_300_000_000, ZzzBannerType::Standard, offset)
            .unwrap();

    assert_eq!(signal.id, 1_718_000_000_000_012_345);
    assert_eq!(signal.item_id, 1041);
    assert_eq!(signal.name, "Soldier 11");
    assert_eq!(signal.rarity, Coerced::Known(Rarity::S));
    assert_eq!(
        signal.time,
        offset.with_ymd_and_hms(2024, 7, 4, 13, 5, 9).unwrap()
    );
    assert_eq!(signal.time.timestamp(), 1_720_069_509);
    assert_eq!(signal.cursor(), Some(Cursor::Id(1_718_000_000_000_012_345)));
}

#[test]
fn test_signal_search_invalid_date() {
    let record: ChronicleSignalRecord = serde_json::from_value(json!({
        "id": 1, "item_id": 2, "item_name": "x", "rarity": "B",
        "date": {"year": 2024, "month": 2, "day": 30}
    }))
    .unwrap();
    let offset = FixedOffset::east_opt(0).unwrap();

    let err =
        SignalSearch::from_chronicle_data(record, 1, ZzzBannerType::Weapon, offset).unwrap_err();
    assert!(err.to_string().contains("Invalid date"));
}

#[test]
fn test_gacha_info_folds_tickets() {
    let info: ZzzGachaInfo = serde_json::from_value(json!({
        "tickets": [
            {"ticket_type": "GACHA_TICKET_TYPE_POLYCHROME", "ticket_cnt": 1600},
            {"ticket_type": "GACHA_TICKET_TYPE_MASTER_TAPE", "ticket_cnt": "3"},
            {"ticket_type": "GACHA_TICKET_TYPE_BOOPON", "ticket_cnt": 12},
            {"ticket_type": "GACHA_TICKET_TYPE_FUTURE", "ticket_cnt": 99}
        ],
        "gacha_info_list": [
            {"gacha_type": "GACHA_TYPE_CHARACTER_UP", "more_s_need_cnt": 42},
            {"gacha_type": "GACHA_TYPE_NEW", "more_s_need_cnt": "80"}
        ]
    }))
    .unwrap();

    assert_eq!(
        info.currencies,
        ZzzGachaCurrencies {
            monochrome: 0,
            polychrome: 1600,
            encrypted_master_tape: 0,
            master_tape: 3,
            boopon: 12,
        }
    );
    assert_eq!(info.banners.len(), 2);
    assert_eq!(
        info.banners[0].banner_type,
        Coerced::Known(ZzzGachaEventType::Character)
    );
    assert_eq!(info.banners[0].pity, 42);
    assert!(!info.banners[1].banner_type.is_known());
    assert_eq!(info.banners[1].pity, 80);
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_event_parsing() {
    let event: ZzzEvent = serde_json::from_value(json!({
        "activity_id": 1001,
        "state": "STATE_IN_PROGRESS",
        "name": "Event",
        "monochrome_got_cnt": 120,
        "monochrome_cnt": 420,
        "start_ts": "1720000000",
        "end_ts": 1721000000,
        "left_start_ts": "0",
        "left_end_ts": 3600
    }))
    .unwrap();

    assert_eq!(event.id, 1001);
    assert_eq!(event.status, Coerced::Known(ZzzEventStatus::InProgress));
    assert_eq!(event.start.timestamp(), 1_720_000_000);
    assert_eq!(event.end.timestamp(), 1_721_000_000);
    assert_eq!(event.seconds_until_end, 3600);
}

#[test]
fn test_gacha_calendar_parsing() {
    let calendar: ZzzGachaCalendar = serde_json::from_value(json!({
        "avatar_gacha_schedule_list": [{
            "gacha_type": "GACHA_TYPE_CHARACTER_UP",
            "gacha_state": "GACHA_STATE_IN_PROGRESS",
            "version": "2.4",
            "start_ts": "1720000000",
            "end_ts": "1721000000",
            "left_start_ts": 0,
            "left_end_ts": 100,
            "sup_lock_show": true,
            "insurance_id": 7,
            "avatar_list": [{
                "avatar_id": 1091,
                "avatar_name": "Miyabi",
                "full_name": "Hoshimi Miyabi",
                "rarity": "S",
                "icon": "",
                "avatar_profession": 3,
                "avatar_element_type": 202,
                "avatar_sub_element_type": 1
            }]
        }],
        "weapon_gacha_schedule_list": [{
            "gacha_type": "GACHA_TYPE_WEAPON_UP",
            "gacha_state": "GACHA_STATE_NOT_START",
            "start_ts": 1720000000,
            "end_ts": 1721000000,
            "weapon_list": [{
                "weapon_id": 14109,
                "rarity": "S",
                "profession": 9,
                "talent_title": "Skill",
                "talent_content": "Does things"
            }]
        }]
    }))
    .unwrap();

    let character_event = &calendar.characters[0];
    assert_eq!(character_event.event.version, "2.4");
    assert!(character_event.event.sup_lock_show);
    assert_eq!(character_event.characters[0].name, "Miyabi");
    assert_eq!(
        character_event.characters[0].element,
        Coerced::Known(ZzzElement::Ice)
    );
    assert_eq!(
        character_event.characters[0].specialty,
        Coerced::Known(ZzzSpecialty::Anomaly)
    );

    let weapon_event = &calendar.weapons[0];
    assert_eq!(
        weapon_event.event.status,
        Coerced::Known(ZzzGachaEventStatus::NotStarted)
    );
    assert_eq!(weapon_event.weapons[0].skill_name, "Skill");
    assert_eq!(weapon_event.weapons[0].specialty, Coerced::Unknown(json!(9)));
}

// ============================================================================
// Deadly Assault
// ============================================================================

fn assault_payload(bosses: serde_json::Value) -> serde_json::Value {
    json!({
        "zone_id": 3,
        "start_time": {"year": 2024, "month": 7, "day": 1, "hour": 4, "minute": 0, "second": 0},
        "end_time": {},
        "list": [{
            "score": 20000,
            "star": 3,
            "total_star": 3,
            "challenge_time": {"year": 2024, "month": 7, "day": 2, "hour": 20, "minute": 1, "second": 2},
            "boss": bosses,
            "buffer": [{"name": "Buff", "desc": "Stronger", "icon": ""}],
            "avatar_list": [{
                "id": 1091, "level": 60, "element_type": 202, "avatar_profession": 3,
                "rarity": "S", "rank": 1, "role_square_url": "https://icon"
            }],
            "buddy": null
        }],
        "has_data": true,
        "total_score": 60000,
        "total_star": 9,
        "rank_percent": 1234,
        "nick_name": "Proxy",
        "avatar_icon": "https://avatar"
    })
}

#[test]
fn test_deadly_assault_parsing() {
    let assault: DeadlyAssault = serde_json::from_value(assault_payload(json!([
        {"icon": "", "name": "Boss One", "bg_icon": "bg", "race_icon": "race"},
        {"icon": "", "name": "Ignored", "bg_icon": "", "race_icon": ""}
    ])))
    .unwrap();

    assert_eq!(assault.id, 3);
    assert_eq!(assault.rank_percent, "12.34%");
    assert_eq!(
        assault.start_time,
        NaiveDate::from_ymd_opt(2024, 7, 1).and_then(|d| d.and_hms_opt(4, 0, 0))
    );
    assert_eq!(assault.end_time, None);
    assert_eq!(assault.nickname, "Proxy");

    let challenge = &assault.challenges[0];
    assert_eq!(challenge.boss.name, "Boss One");
    assert_eq!(challenge.boss.background, "bg");
    assert_eq!(challenge.buffs[0].description, "Stronger");
    assert_eq!(challenge.agents[0].mindscape, 1);
    assert!(challenge.bangboo.is_none());
}

#[test]
fn test_deadly_assault_requires_boss() {
    let err = serde_json::from_value::<DeadlyAssault>(assault_payload(json!([]))).unwrap_err();
    assert!(err.to_string().contains("No boss data provided"));
}

// ============================================================================
// Shiyu Defense
// ============================================================================

fn shiyu_node(battle_time: Option<i64>) -> serde_json::Value {
    json!({
        "avatars": [{"id": 1091, "level": 60, "rarity": "S", "element_type": 202,
                     "role_square_url": "icon", "rank": 2}],
        "buddy": {"id": 53001, "rarity": "S", "level": 60, "bangboo_rectangle_url": "b"},
        "element_type_list": [202, 299],
        "monster_info": {"level": 70, "list": [{
            "id": 900, "name": "Typhon", "weak_element_type": 200,
            "ice_weakness": 1, "fire_weakness": -1, "elec_weakness": 0,
            "ether_weakness": 0, "physics_weakness": 1
        }]},
        "battle_time": battle_time
    })
}

fn shiyu_payload() -> serde_json::Value {
    json!({
        "schedule_id": 62,
        "hadal_begin_time": {"year": 2024, "month": 7, "day": 5, "hour": 4, "minute": 0, "second": 0},
        "hadal_end_time": {},
        "has_data": true,
        "rating_list": [{"times": 3, "rating": "S"}, {"times": 1, "rating": "A"}],
        "all_floor_detail": [
            {"layer_index": 7, "rating": "S", "layer_id": 207,
             "buffs": [{"title": "Chill", "text": "Ice damage up"}],
             "node_1": shiyu_node(Some(95)), "node_2": shiyu_node(Some(120)),
             "floor_challenge_time": {"year": 2024, "month": 7, "day": 6, "hour": 20, "minute": 1, "second": 2},
             "zone_name": "Critical Node"},
            {"layer_index": 6, "rating": "A", "layer_id": 206, "buffs": [],
             "node_1": shiyu_node(Some(60)), "node_2": shiyu_node(None),
             "floor_challenge_time": {}, "zone_name": "Node 6"}
        ],
        "fast_layer_time": 95,
        "max_layer": 7
    })
}

#[test]
fn test_shiyu_defense_parsing() {
    let shiyu: ShiyuDefense = serde_json::from_value(shiyu_payload()).unwrap();

    assert_eq!(shiyu.schedule_id, 62);
    assert_eq!(
        shiyu.begin_time,
        NaiveDate::from_ymd_opt(2024, 7, 5).and_then(|d| d.and_hms_opt(4, 0, 0))
    );
    assert_eq!(shiyu.end_time, None);
    assert_eq!(shiyu.ratings.get("S"), Some(&3));
    assert_eq!(shiyu.ratings.get("A"), Some(&1));
    assert_eq!(shiyu.max_floor, 7);

    let floor = &shiyu.floors[0];
    assert_eq!(floor.index, 7);
    assert_eq!(floor.rating, Coerced::Known(Rarity::S));
    assert_eq!(floor.buffs[0].name, "Chill");
    assert_eq!(floor.buffs[0].description, "Ice damage up");
    assert_eq!(floor.name, "Critical Node");
    assert!(floor.challenge_time.is_some());
    assert!(shiyu.floors[1].challenge_time.is_none());

    let node = &floor.node_1;
    assert_eq!(node.characters[0].mindscape, 2);
    assert_eq!(node.characters[0].element, Coerced::Known(ZzzElement::Ice));
    assert_eq!(node.bangboo.as_ref().map(|b| b.id), Some(53001));
    assert_eq!(
        node.recommended_elements,
        vec![Coerced::Known(ZzzElement::Ice), Coerced::Unknown(json!(299))]
    );
}

#[test]
fn test_shiyu_monsters_share_node_level() {
    let node: ShiyuDefenseNode = serde_json::from_value(shiyu_node(None)).unwrap();
    let monster = &node.enemies[0];

    assert_eq!(monster.level, 70);
    assert_eq!(monster.name, "Typhon");
    assert_eq!(
        monster.element_effects,
        ShiyuMonsterElementEffects {
            ice: ShiyuMonsterElementEffect::Weakness,
            fire: ShiyuMonsterElementEffect::Resistance,
            electric: ShiyuMonsterElementEffect::Neutral,
            ether: ShiyuMonsterElementEffect::Neutral,
            physical: ShiyuMonsterElementEffect::Weakness,
        }
    );
}

#[test]
fn test_shiyu_total_clear_time_skips_missing_nodes() {
    let shiyu: ShiyuDefense = serde_json::from_value(shiyu_payload()).unwrap();
    assert_eq!(shiyu.total_clear_time(), 95 + 120 + 60);
}

// ============================================================================
// Threshold Simulation
// ============================================================================

fn threshold_brief() -> serde_json::Value {
    json!({
        "void_front_id": 4, "end_ts_over_42_days": false, "end_ts": "12",
        "has_ending_record": true, "ending_record_name": "Dawn",
        "ending_record_bg_pic": "bg", "total_score": 41200, "rank_percent": 5000
    })
}

fn threshold_challenge(id: u64) -> serde_json::Value {
    json!({
        "battle_id": id, "name": format!("Battle {id}"), "star": "A",
        "avatar_list": [{"id": 1241, "level": 60, "element_type": 205, "rarity": "S",
                         "rank": 0, "role_square_url": "r"}],
        "buddy": null,
        "buffer": {"name": "Overclock", "desc": "Faster", "icon": "i"}
    })
}

#[test]
fn test_threshold_simulation_info_parsing() {
    let info: ThresholdSimulationInfo = serde_json::from_value(threshold_brief()).unwrap();

    assert_eq!(info.id, 4);
    assert_eq!(info.time_remaining_days, 12);
    assert!(info.has_data);
    assert_eq!(info.ending_name, "Dawn");
    assert_eq!(info.rank_percent, "50.0%");
}

#[test]
fn test_threshold_simulation_parsing() {
    let mut main = threshold_challenge(100);
    main["node_id"] = json!(3);
    main["score"] = json!(20600);
    main["max_score"] = json!(30000);
    main["score_ratio"] = json!("1.5x");
    main["challenge_time"] = json!({"year": 2025, "month": 1, "day": 2, "hour": 3, "minute": 4});
    main["sub_challenge_record"] = json!([threshold_challenge(101)]);

    let simulation: ThresholdSimulation = serde_json::from_value(json!({
        "void_front_battle_abstract_info_brief": threshold_brief(),
        "boss_challenge_record": {
            "boss_info": {"icon": "", "name": "Nineveh", "race_icon": "race", "bg_icon": "bg"},
            "main_challenge_record": main
        },
        "main_challenge_record_list": [threshold_challenge(200), threshold_challenge(201)],
        "role_basic_info": {"nickname": "Proxy", "server": "prod_gf_jp", "icon": "p"}
    }))
    .unwrap();

    assert_eq!(simulation.info.total_score, 41200);
    assert_eq!(simulation.player.nickname, "Proxy");
    assert_eq!(simulation.boss_challenge.boss.badge_icon, "race");

    let boss_fight = &simulation.boss_challenge.challenge;
    assert_eq!(boss_fight.challenge.id, 100);
    assert_eq!(boss_fight.challenge.rating, Coerced::Known(Rarity::A));
    assert_eq!(boss_fight.score, 20600);
    assert_eq!(boss_fight.score_multiplier, "1.5x");
    assert_eq!(
        boss_fight.time,
        NaiveDate::from_ymd_opt(2025, 1, 2).and_then(|d| d.and_hms_opt(3, 4, 0))
    );
    assert_eq!(boss_fight.sub_challenges[0].id, 101);

    let ids: Vec<u64> = simulation.challenges.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![200, 201]);
    assert!(simulation.challenges[0].bangboo.is_none());
    assert_eq!(
        simulation.challenges[0].buff.as_ref().map(|b| b.description.as_str()),
        Some("Faster")
    );
}

// ============================================================================
// Notes
// ============================================================================

#[test]
fn test_notes_parsing() {
    let notes: ZzzNotes = serde_json::from_value(json!({
        "energy": {"progress": {"max": 240, "current": 100}, "restore": 50400},
        "vitality": {"max": 400, "current": 400},
        "vhs_sale": {"sale_state": "SaleStateDoing"},
        "card_sign": "CardSignDone"
    }))
    .unwrap();

    assert_eq!(notes.battery_charge.current, 100);
    assert_eq!(notes.battery_charge.seconds_till_full, 50400);
    assert!(!notes.battery_charge.is_full());
    assert_eq!(notes.engagement.current, 400);
    assert!(notes.scratch_card_completed);
    assert_eq!(
        notes.video_store_state,
        Coerced::Known(VideoStoreState::CurrentlyOpen)
    );
}

#[test]
fn test_diary_parsing() {
    let diary: ZzzDiary = serde_json::from_value(json!({
        "uid": "1300000000",
        "region": "prod_gf_jp",
        "data_month": "202407",
        "month_data": {
            "list": [
                {"data_type": "PolychromesData", "count": 3200, "data_name": "Polychromes"},
                {"data_type": "SomethingNew", "count": "5", "data_name": "New"}
            ],
            "income_components": [{"action": "daily_activity_rewards", "num": 1200, "percent": 38}]
        }
    }))
    .unwrap();

    assert_eq!(diary.uid, 1_300_000_000);
    assert_eq!(diary.month, "202407");
    assert_eq!(
        diary.data.currencies[0].currency_type,
        Coerced::Known(ZzzCurrencyType::Polychromes)
    );
    assert_eq!(diary.data.currencies[1].amount, 5);
    assert_eq!(diary.data.income_components[0].amount, 1200);
}

// ============================================================================
// Calculator
// ============================================================================

fn consumable(id: u64, amount: i64) -> serde_json::Value {
    json!({"id": id, "name": format!("item {id}"), "icon": "", "level": 2, "num": amount, "wiki_url": ""})
}

#[test]
fn test_calculator_total_merges_by_id() {
    let result: CalculatorResult = serde_json::from_value(json!({
        "avatar_consume": [consumable(104003, 10), consumable(202, 5000)],
        "weapon_consume": [consumable(202, 1000), consumable(114001, 3)],
        "skills_consume": [{
            "skill_info": {"id": 1, "level_current": 1, "level_target": 10},
            "consume_list": [consumable(104003, 2), consumable(104319, 9)]
        }],
        "reliquary_consume": [{
            "reliquary_id": 9651,
            "id_consume_list": [consumable(202, 500)]
        }]
    }))
    .unwrap();

    let totals: Vec<(u64, i64)> = result
        .total()
        .iter()
        .map(|item| (item.id, item.amount))
        .collect();

    assert_eq!(
        totals,
        vec![(104003, 12), (202, 6500), (114001, 3), (104319, 9)]
    );
    assert_eq!(result.talents[0].info.target, 10);
    assert_eq!(result.artifacts[0].artifact_id, 9651);
}

#[test]
fn test_calculator_batch_result() {
    let batch: CalculatorBatchResult = serde_json::from_value(json!({
        "items": [{"avatar_consume": [consumable(1, 1)]}, {}],
        "overall_consume": [
            {"id": 1, "name": "a", "num": 5, "lack_num": 2},
            {"id": 2, "name": "b", "num": 5, "lack_num": 0}
        ],
        "has_user_info": true
    }))
    .unwrap();

    assert_eq!(batch.characters.len(), 2);
    assert_eq!(batch.characters[0].character[0].rarity, 2);
    let lacking: Vec<u64> = batch
        .total_remaining_required_materials()
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(lacking, vec![1]);
}
