use rand::SeedableRng;
use rand_pcg::Pcg32;
use zombie_arena_core::weapon::{Magazine, Weapon};

fn rng() -> Pcg32 {
    Pcg32::seed_from_u64(0x5eed)
}

#[test]
fn fire_consumes_one_round_and_rolls_within_range() {
    let mut rng = rng();
    let mut weapon = Weapon::new(Magazine::full(8), 24, 50.0, "weapons/rifle");

    let damage = weapon.fire(&mut rng);

    assert_eq!(weapon.magazine().rounds(), 7);
    assert_eq!(weapon.stock_rounds(), 24);
    assert!(damage > 49.0 && damage <= 50.0, "damage = {}", damage);
}

#[test]
fn fire_on_empty_magazine_is_a_harmless_zero() {
    let mut rng = rng();
    let mut weapon = Weapon::new(Magazine::with_rounds(30, 0), 0, 50.0, "weapons/rifle");

    let damage = weapon.fire(&mut rng);

    assert_eq!(damage, 0.0);
    assert_eq!(weapon.magazine().rounds(), 0);
    assert_eq!(weapon.stock_rounds(), 0);
}

#[test]
fn full_magazine_yields_capacity_hits_then_only_misses() {
    let mut rng = rng();
    let mut weapon = Weapon::new(Magazine::full(30), 0, 50.0, "weapons/rifle");

    let rolls: Vec<f32> = (0..40).map(|_| weapon.fire(&mut rng)).collect();

    assert!(rolls[..30].iter().all(|&damage| damage > 0.0));
    assert!(rolls[30..].iter().all(|&damage| damage == 0.0));
}

#[test]
fn every_live_roll_stays_in_the_open_closed_range() {
    let mut rng = rng();
    let mut weapon = Weapon::new(Magazine::full(100), 0, 3.5, "weapons/pistol");

    for _ in 0..100 {
        let damage = weapon.fire(&mut rng);
        assert!(damage > 2.5 && damage <= 3.5, "damage = {}", damage);
    }
}

#[test]
fn reload_while_rounds_remain_is_a_noop() {
    let mut weapon = Weapon::new(Magazine::with_rounds(30, 1), 100, 50.0, "weapons/rifle");

    weapon.reload();

    assert_eq!(weapon.magazine().rounds(), 1);
    assert_eq!(weapon.stock_rounds(), 100);
}

#[test]
fn reload_with_plentiful_stock_fills_the_magazine() {
    let mut weapon = Weapon::new(Magazine::with_rounds(30, 0), 100, 50.0, "weapons/rifle");

    weapon.reload();

    assert_eq!(weapon.magazine().rounds(), 30);
    assert_eq!(weapon.stock_rounds(), 70);
}

#[test]
fn reload_with_scarce_stock_loads_everything_left() {
    let mut weapon = Weapon::new(Magazine::with_rounds(30, 0), 10, 50.0, "weapons/rifle");

    weapon.reload();

    assert_eq!(weapon.magazine().rounds(), 10);
    assert_eq!(weapon.stock_rounds(), 0);
}

#[test]
fn reload_with_stock_exactly_at_capacity_empties_the_stock() {
    let mut weapon = Weapon::new(Magazine::with_rounds(30, 0), 30, 50.0, "weapons/rifle");

    weapon.reload();

    assert_eq!(weapon.magazine().rounds(), 30);
    assert_eq!(weapon.stock_rounds(), 0);
}

#[test]
fn reload_with_no_stock_is_a_noop() {
    let mut weapon = Weapon::new(Magazine::with_rounds(30, 0), 0, 50.0, "weapons/rifle");

    weapon.reload();

    assert_eq!(weapon.magazine().rounds(), 0);
    assert_eq!(weapon.stock_rounds(), 0);
}

#[test]
fn same_seed_rolls_the_same_damage_sequence() {
    let mut rng_a = rng();
    let mut rng_b = rng();
    let mut weapon_a = Weapon::new(Magazine::full(10), 0, 50.0, "weapons/rifle");
    let mut weapon_b = Weapon::new(Magazine::full(10), 0, 50.0, "weapons/rifle");

    let rolls_a: Vec<f32> = (0..10).map(|_| weapon_a.fire(&mut rng_a)).collect();
    let rolls_b: Vec<f32> = (0..10).map(|_| weapon_b.fire(&mut rng_b)).collect();

    assert_eq!(rolls_a, rolls_b);
}

#[test]
fn sprite_key_is_fixed_at_construction() {
    let weapon = Weapon::new(Magazine::full(30), 90, 50.0, "weapons/rifle");
    assert_eq!(weapon.sprite(), "weapons/rifle");
}

#[test]
fn magazine_fire_reports_empty() {
    let mut magazine = Magazine::with_rounds(3, 0);
    assert!(!magazine.fire());
    assert_eq!(magazine.rounds(), 0);
}

#[test]
fn magazine_refill_by_saturates_at_capacity() {
    let mut magazine = Magazine::with_rounds(5, 4);
    magazine.refill_by(10);
    assert_eq!(magazine.rounds(), 5);
}

#[test]
fn magazine_with_rounds_caps_at_capacity() {
    let magazine = Magazine::with_rounds(5, 9);
    assert_eq!(magazine.rounds(), 5);
    assert_eq!(magazine.capacity(), 5);
}
