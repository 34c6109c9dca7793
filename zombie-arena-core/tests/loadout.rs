use zombie_arena_core::loadout::{Loadout, LoadoutError};

const ARSENAL: &str = r#"{
    "weapons": [
        {
            "name": "rifle",
            "magazine_capacity": 30,
            "stock_rounds": 90,
            "base_damage_per_round": 50.0,
            "sprite": "weapons/rifle"
        },
        {
            "name": "pistol",
            "magazine_capacity": 12,
            "stock_rounds": 36,
            "base_damage_per_round": 25.0,
            "sprite": "weapons/pistol"
        }
    ]
}"#;

#[test]
fn parses_and_builds_full_magazines() {
    let loadout = Loadout::from_json(ARSENAL).unwrap();
    assert_eq!(loadout.weapons.len(), 2);

    let rifle = loadout.get("rifle").unwrap().build();
    assert_eq!(rifle.magazine().rounds(), 30);
    assert_eq!(rifle.magazine().capacity(), 30);
    assert_eq!(rifle.stock_rounds(), 90);
    assert_eq!(rifle.base_damage_per_round(), 50.0);
    assert_eq!(rifle.sprite(), "weapons/rifle");
}

#[test]
fn lookup_misses_return_none() {
    let loadout = Loadout::from_json(ARSENAL).unwrap();
    assert!(loadout.get("chainsaw").is_none());
}

#[test]
fn rejects_a_zero_capacity_magazine() {
    let text = r#"{
        "weapons": [
            {
                "name": "jammed",
                "magazine_capacity": 0,
                "stock_rounds": 10,
                "base_damage_per_round": 50.0,
                "sprite": "weapons/jammed"
            }
        ]
    }"#;
    let err = Loadout::from_json(text).unwrap_err();
    assert!(matches!(err, LoadoutError::ZeroCapacity(name) if name == "jammed"));
}

#[test]
fn rejects_non_positive_base_damage() {
    let text = r#"{
        "weapons": [
            {
                "name": "foam dart",
                "magazine_capacity": 6,
                "stock_rounds": 0,
                "base_damage_per_round": 0.0,
                "sprite": "weapons/foam"
            }
        ]
    }"#;
    let err = Loadout::from_json(text).unwrap_err();
    assert!(matches!(err, LoadoutError::NonPositiveDamage(name) if name == "foam dart"));
}

#[test]
fn rejects_duplicate_weapon_names() {
    let text = r#"{
        "weapons": [
            {
                "name": "rifle",
                "magazine_capacity": 30,
                "stock_rounds": 90,
                "base_damage_per_round": 50.0,
                "sprite": "weapons/rifle"
            },
            {
                "name": "rifle",
                "magazine_capacity": 12,
                "stock_rounds": 36,
                "base_damage_per_round": 25.0,
                "sprite": "weapons/pistol"
            }
        ]
    }"#;
    let err = Loadout::from_json(text).unwrap_err();
    assert!(matches!(err, LoadoutError::DuplicateName(name) if name == "rifle"));
}

#[test]
fn rejects_malformed_json() {
    let err = Loadout::from_json("{ not json").unwrap_err();
    assert!(matches!(err, LoadoutError::Parse(_)));
}
