mod common;

use common::{charizard_json, record};
use pokedex_rust::core::factory::{create_loadout, CreateLoadoutOptions};
use pokedex_rust::core::stats::StatTable;
use pokedex_rust::data::items::ITEMS;
use pokedex_rust::data::natures::{DEFAULT_NATURE, NATURES};

#[test]
fn create_loadout_from_record() {
    let charizard = record(charizard_json());

    let loadout = create_loadout(
        &charizard,
        CreateLoadoutOptions {
            moves: Some(vec!["Flamethrower".to_string(), "air-slash".to_string()]),
            item: Some("choice specs".to_string()),
            nature: Some("Timid".to_string()),
            evs: Some(StatTable {
                special_attack: 252,
                speed: 252,
                hp: 4,
                ..Default::default()
            }),
        },
        &ITEMS,
        &NATURES,
    )
    .expect("create loadout");

    assert_eq!(loadout.species, "charizard");
    assert_eq!(loadout.moves, vec!["flamethrower", "air-slash"]);
    assert_eq!(loadout.item.as_deref(), Some("Choice Specs"));
    assert_eq!(loadout.nature.name, "Timid");

    let real = loadout.real_stats(&charizard).expect("base stats present");
    assert_eq!(real.speed, 167);
}

#[test]
fn defaults_to_no_item_and_neutral_nature() {
    let charizard = record(charizard_json());
    let loadout = create_loadout(&charizard, CreateLoadoutOptions::default(), &ITEMS, &NATURES).unwrap();

    assert!(loadout.moves.is_empty());
    assert_eq!(loadout.item, None);
    assert_eq!(loadout.nature.name, DEFAULT_NATURE);
    assert!(loadout.nature.is_neutral());
    assert_eq!(loadout.evs.total(), 0);
}

#[test]
fn create_loadout_rejects_unlearnable_move() {
    let charizard = record(charizard_json());

    let err = create_loadout(
        &charizard,
        CreateLoadoutOptions {
            moves: Some(vec!["flamethrower".to_string(), "surf".to_string()]),
            ..Default::default()
        },
        &ITEMS,
        &NATURES,
    )
    .expect_err("should fail");

    assert!(err.to_string().contains("Move(s) not learnable"));
    assert!(err.to_string().contains("surf"));
}

#[test]
fn create_loadout_rejects_fifth_move() {
    let charizard = record(charizard_json());
    let moves = charizard.move_names();
    assert_eq!(moves.len(), 5);

    let err = create_loadout(
        &charizard,
        CreateLoadoutOptions {
            moves: Some(moves),
            ..Default::default()
        },
        &ITEMS,
        &NATURES,
    );
    assert!(err.is_err());
}

#[test]
fn create_loadout_rejects_duplicate_move() {
    let charizard = record(charizard_json());
    let err = create_loadout(
        &charizard,
        CreateLoadoutOptions {
            moves: Some(vec!["roost".to_string(), "Roost".to_string()]),
            ..Default::default()
        },
        &ITEMS,
        &NATURES,
    );
    assert!(err.is_err());
}

#[test]
fn create_loadout_rejects_unknown_item_and_nature() {
    let charizard = record(charizard_json());

    let bad_item = CreateLoadoutOptions {
        item: Some("Master Ball".to_string()),
        ..Default::default()
    };
    assert!(create_loadout(&charizard, bad_item, &ITEMS, &NATURES).is_err());

    let bad_nature = CreateLoadoutOptions {
        nature: Some("Grumpy".to_string()),
        ..Default::default()
    };
    assert!(create_loadout(&charizard, bad_nature, &ITEMS, &NATURES).is_err());

    let none_item = CreateLoadoutOptions {
        item: Some("None".to_string()),
        ..Default::default()
    };
    let loadout = create_loadout(&charizard, none_item, &ITEMS, &NATURES).unwrap();
    assert_eq!(loadout.item, None);
}

#[test]
fn create_loadout_rejects_ev_overflow() {
    let charizard = record(charizard_json());
    let options = CreateLoadoutOptions {
        evs: Some(StatTable {
            attack: 252,
            speed: 252,
            hp: 252,
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(create_loadout(&charizard, options, &ITEMS, &NATURES).is_err());
}
