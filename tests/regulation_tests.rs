//! Limit regulation tests.
//!
//! These tests cover the lookup table as a host would use it:
//! - Building a table by insertion
//! - Loading the persisted grouped form
//! - Looking up cards from a decoded card list

use yugioh_card_db::{Card, CardKind, LimitRegulation, RegulationTable};

/// Test inserting a prohibited card and querying an unlisted one.
#[test]
fn test_insert_and_query() {
    let mut table = RegulationTable::new();
    table.add("Pot of Greed", LimitRegulation::Prohibited);

    assert_eq!(table.get("Pot of Greed"), LimitRegulation::Prohibited);
    assert_eq!(table.get("Blue-Eyes White Dragon"), LimitRegulation::Unlimited);
    assert_eq!(table.get("Blue-Eyes White Dragon").max_adoptable_count(), 3);
}

/// Test the persisted form survives encode and decode.
#[test]
fn test_persisted_round_trip() {
    let mut table = RegulationTable::new();
    table.add("Pot of Greed", LimitRegulation::Prohibited);
    table.add("Graceful Charity", LimitRegulation::Prohibited);
    table.add("Monster Reborn", LimitRegulation::Limited);
    table.add("Mirror Force", LimitRegulation::SemiLimited);

    let decoded = RegulationTable::from_json(&table.to_json().unwrap()).unwrap();

    for (regulation, name) in table.iter() {
        assert_eq!(decoded.get(name), regulation, "{name}");
    }
    assert_eq!(
        decoded.names(LimitRegulation::Prohibited),
        table.names(LimitRegulation::Prohibited)
    );
    assert_eq!(decoded.len(), 4);
}

/// Test a re-added name keeps only its latest quota across a reload.
#[test]
fn test_latest_quota_survives_reload() {
    let mut table = RegulationTable::new();
    table.add("Monster Reborn", LimitRegulation::Limited);
    table.add("Monster Reborn", LimitRegulation::Prohibited);

    let reloaded = RegulationTable::from_json(&table.to_json().unwrap()).unwrap();

    assert_eq!(reloaded.get("Monster Reborn"), LimitRegulation::Prohibited);
    assert!(reloaded.names(LimitRegulation::Limited).is_empty());
    assert_eq!(reloaded.len(), 1);
}

/// Test lifting a card back to unlimited removes it from the persisted form.
#[test]
fn test_unlimited_override_survives_reload() {
    let mut table = RegulationTable::new();
    table.add("Mirror Force", LimitRegulation::Limited);
    table.add("Mirror Force", LimitRegulation::Unlimited);

    assert_eq!(table.get("Mirror Force"), LimitRegulation::Unlimited);
    assert_eq!(table.len(), 0);
    assert_eq!(table.iter().count(), 0);

    let reloaded = RegulationTable::from_json(&table.to_json().unwrap()).unwrap();
    assert_eq!(reloaded.get("Mirror Force"), LimitRegulation::Unlimited);
    assert!(reloaded.is_empty());
}

/// Test missing quota keys default to empty groups.
#[test]
fn test_partial_persisted_form() {
    let table = RegulationTable::from_json(r#"{"1": ["Monster Reborn"]}"#).unwrap();

    assert_eq!(table.get("Monster Reborn"), LimitRegulation::Limited);
    assert!(table.names(LimitRegulation::Prohibited).is_empty());
    assert!(table.names(LimitRegulation::SemiLimited).is_empty());
}

/// Test looking up quotas for decoded cards by their identity name.
#[test]
fn test_lookup_by_card_identity() {
    let table = RegulationTable::from_json(r#"{"0": ["強欲な壺"]}"#).unwrap();

    let pot = Card::from_json(
        r#"{
            "name": "強欲な壺",
            "pronunciation": "ごうよくなつぼ",
            "description": "",
            "kinds": ["通常魔法"]
        }"#,
    )
    .unwrap();
    let dragon = Card::builder(
        "青眼の白龍",
        "ぶるーあいず・ほわいと・どらごん",
        "",
        [CardKind::NormalMonster],
    )
    .build()
    .unwrap();

    assert_eq!(table.get(pot.name()), LimitRegulation::Prohibited);
    assert_eq!(table.get(dragon.name()), LimitRegulation::Unlimited);
}

/// Test many threads racing on the first lookup see the same index.
#[test]
fn test_shared_table_across_threads() {
    let table = std::sync::Arc::new(
        RegulationTable::from_json(r#"{"0": ["A"], "1": ["B"], "2": ["C"]}"#).unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = std::sync::Arc::clone(&table);
            std::thread::spawn(move || {
                (
                    table.get("A"),
                    table.get("B"),
                    table.get("C"),
                    table.get("D"),
                )
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(
            result,
            (
                LimitRegulation::Prohibited,
                LimitRegulation::Limited,
                LimitRegulation::SemiLimited,
                LimitRegulation::Unlimited,
            )
        );
    }
}
