use relicsim::combat::{
    calc_average_damage, calc_scenario, damage_breakdown, defense_multiplier_from,
    explain_final_stats, resolve_final_stat, CalcError, Loadout,
};
use relicsim::data::{
    AreaOfEffect, Attack, Buff, Character, DamageTag, Element, Enemy, LightCone, Relic,
    RelicBuild, RelicSubstat, RollType, Scenario, Stat,
};

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {b}, got {a}");
}

fn hook() -> Character {
    Character {
        name: "Hook".to_string(),
        level: 80,
        base_hp: 1340.0,
        base_atk: 617.0,
        base_def: 352.0,
        base_spd: 94.0,
        base_aggro: 125.0,
        element: Element::Fire,
        buffs: vec![
            Buff::new(Stat::AtkPct, 4.0 + 6.0 + 6.0 + 8.0),
            Buff::new(Stat::HpPct, 4.0 + 6.0 + 8.0),
            Buff::new(Stat::CritDmg, 5.3 + 8.0),
            Buff::new(Stat::DmgBonus, 20.0),
            Buff::new(Stat::DmgBonus, 20.0).with_tag(DamageTag::Skill),
        ],
        ..Character::default()
    }
}

fn fall_of_an_aeon() -> LightCone {
    LightCone {
        name: "On the Fall of an Aeon".to_string(),
        level: 80,
        base_hp: 1058.0,
        base_atk: 529.0,
        base_def: 396.0,
        buffs: vec![
            Buff::new(Stat::AtkPct, 16.0 * 4.0),
            Buff::new(Stat::DmgBonus, 24.0),
        ],
        ..LightCone::default()
    }
}

fn hook_relics() -> RelicBuild {
    let mut build = RelicBuild::new([
        Stat::Hp,
        Stat::Atk,
        Stat::CritRate,
        Stat::AtkPct,
        Stat::DmgBonus,
        Stat::AtkPct,
    ]);
    build.sub_stats = vec![
        RelicSubstat::new(Stat::Atk, 2, RollType::Avg),
        RelicSubstat::new(Stat::AtkPct, 8, RollType::Avg),
        RelicSubstat::new(Stat::CritRate, 10, RollType::Avg),
        RelicSubstat::new(Stat::CritDmg, 12, RollType::Avg),
    ];
    build.set_effects = vec![
        Buff::new(Stat::AtkPct, 12.0),
        Buff::new(Stat::DefIgnore, 6.0 * 2.0),
        Buff::new(Stat::CritRate, 8.0),
        Buff::new(Stat::DmgBonus, 20.0).with_tag(DamageTag::Basic),
        Buff::new(Stat::DmgBonus, 20.0).with_tag(DamageTag::Skill),
    ];
    build
}

fn basic_enemy() -> Enemy {
    Enemy::new("Basic", 85)
}

fn hook_ultimate() -> Attack {
    Attack::new(
        "Ultimate",
        Stat::Atk,
        432.0 + 110.0,
        Element::Fire,
        DamageTag::Ultimate,
    )
}

fn hook_scenario() -> Scenario {
    Scenario {
        name: "Hook".to_string(),
        character: hook(),
        light_cone: fall_of_an_aeon(),
        relic_build: hook_relics(),
        enemies: vec![basic_enemy()],
        ..Scenario::default()
    }
}

fn plain_character(level: u32, base_atk: f64) -> Character {
    Character {
        name: "Plain".to_string(),
        level,
        base_atk,
        ..Character::default()
    }
}

#[test]
fn hook_final_stats_match_reference_sheet() {
    let (c, lc, rb) = (hook(), fall_of_an_aeon(), hook_relics());
    let stat = |stat| {
        resolve_final_stat(&c, &lc, &rb, stat, DamageTag::Ultimate, Element::Fire, &[])
    };
    approx_eq(stat(Stat::Atk), 4029.6792, 1e-6);
    approx_eq(stat(Stat::CritRate), 74.6, 1e-9);
    approx_eq(stat(Stat::CritDmg), 133.26, 1e-9);
    approx_eq(stat(Stat::DmgBonus), 83.0, 1e-9);
    approx_eq(stat(Stat::DefIgnore), 12.0, 1e-9);
}

#[test]
fn hook_ultimate_regression() {
    let mut scenario = hook_scenario();
    scenario.add_attack(hook_ultimate(), 1.0);
    let result = calc_scenario(&scenario).unwrap();
    assert_eq!(result.total_damage as i64, 41425);
    assert_eq!(result.explanations.len(), 1);

    let (damage, explanation) = calc_average_damage(
        &hook(),
        &fall_of_an_aeon(),
        &hook_relics(),
        &basic_enemy(),
        &hook_ultimate(),
        false,
    )
    .unwrap();
    approx_eq(damage, result.total_damage, 1e-9);
    assert!(explanation.contains("Average Damage: 41425.43"));
    assert!(explanation.contains("\n  Atk: 4029.7"));
    assert!(explanation.contains("\n  CritRate: 74.6%"));
}

#[test]
fn hook_blast_regression() {
    let mut scenario = hook_scenario();
    let mut center = basic_enemy();
    center.name = "Center".to_string();
    center.debuffs.push(Buff::new(Stat::DefShred, 45.0 + 8.0));
    scenario.enemies = vec![basic_enemy(), center, basic_enemy()];
    scenario.focused_enemy = 1;
    scenario.add_attack(
        Attack::new(
            "Skill",
            Stat::Atk,
            308.0 + 110.0,
            Element::Fire,
            DamageTag::Skill,
        )
        .with_area(AreaOfEffect::Blast, 88.0 + 110.0),
        1.0,
    );

    let result = calc_scenario(&scenario).unwrap();
    assert_eq!(result.total_damage as i64, 91656);
    assert_eq!(result.explanations.len(), 3);
    assert!(result.explanations[0].starts_with("Skill -> Center\n"));
    assert!(result.explanations[1].starts_with("Skill -> Basic (splash)"));
    assert!(result.explanations[2].starts_with("Skill -> Basic (splash)"));
}

#[test]
fn minimal_ultimate_without_relics() {
    let character = Character {
        name: "Bare".to_string(),
        level: 80,
        base_atk: 617.0,
        element: Element::Fire,
        buffs: vec![
            Buff::new(Stat::AtkPct, 24.0),
            Buff::new(Stat::CritDmg, 13.3),
        ],
        ..Character::default()
    };
    let light_cone = LightCone {
        name: "Cone".to_string(),
        base_atk: 529.0,
        ..LightCone::default()
    };
    let (damage, _) = calc_average_damage(
        &character,
        &light_cone,
        &RelicBuild::default(),
        &basic_enemy(),
        &hook_ultimate(),
        false,
    )
    .unwrap();
    assert_eq!(damage as i64, 3876);
}

#[test]
fn crit_rate_is_clamped_at_one_hundred() {
    let mut character = plain_character(80, 1000.0);
    character.buffs = vec![
        Buff::new(Stat::CritRate, 195.0),
        Buff::new(Stat::CritDmg, 100.0),
    ];
    let enemy = Enemy::new("Dummy", 80);
    // 1000 * (1 + 1.0 * 1.5) * 0.5
    enemy_damage_is(&character, &enemy, 1250.0);
}

fn enemy_damage_is(character: &Character, enemy: &Enemy, expected: f64) {
    let attack = Attack::new("Hit", Stat::Atk, 100.0, Element::Ice, DamageTag::Basic);
    let (damage, _) = calc_average_damage(
        character,
        &LightCone::default(),
        &RelicBuild::default(),
        enemy,
        &attack,
        false,
    )
    .unwrap();
    approx_eq(damage, expected, 1e-9);
}

#[test]
fn damage_over_time_never_crits() {
    let mut character = plain_character(80, 1000.0);
    character.buffs = vec![Buff::new(Stat::CritRate, 100.0)];
    let rb = RelicBuild::default();
    let lc = LightCone::default();
    let loadout = Loadout::new(&character, &lc, &rb);
    let dot = Attack::new("Burn", Stat::Atk, 100.0, Element::Fire, DamageTag::Dot);
    let breakdown = damage_breakdown(&loadout, &Enemy::new("Dummy", 80), &dot, false).unwrap();
    approx_eq(breakdown.crit_multiplier, 1.0, 0.0);
    approx_eq(breakdown.total(), 500.0, 1e-9);
}

#[test]
fn defense_floors_at_zero() {
    approx_eq(defense_multiplier_from(90, 80, 0.0, 250.0, 0.0), 1.0, 0.0);
    approx_eq(defense_multiplier_from(90, 80, 0.0, 100.0, -300.0), 1.0, 0.0);
    // 1100 def against a level 80 attacker.
    approx_eq(defense_multiplier_from(90, 80, 0.0, 0.0, 0.0), 1.0 - 1100.0 / 2100.0, 1e-12);
}

#[test]
fn attack_buffs_contribute_penetration_and_ignore() {
    let character = plain_character(80, 1000.0);
    let mut enemy = Enemy::new("Warded", 80);
    enemy
        .buffs
        .push(Buff::new(Stat::ElementalRes, 20.0).with_element(Element::Quantum));
    let lc = LightCone::default();
    let rb = RelicBuild::default();
    let loadout = Loadout::new(&character, &lc, &rb);

    let mut attack = Attack::new("Rift", Stat::Atk, 100.0, Element::Quantum, DamageTag::Skill);
    let plain = damage_breakdown(&loadout, &enemy, &attack, false).unwrap();
    approx_eq(plain.resistance_multiplier, 0.8, 1e-12);
    approx_eq(plain.defense_multiplier, 0.5, 1e-12);

    attack.buffs = vec![
        Buff::new(Stat::ResPen, 20.0),
        Buff::new(Stat::DefIgnore, 100.0),
    ];
    let boosted = damage_breakdown(&loadout, &enemy, &attack, false).unwrap();
    approx_eq(boosted.resistance_multiplier, 1.0, 1e-12);
    approx_eq(boosted.defense_multiplier, 1.0, 1e-12);

    // Resistance against another element does not apply.
    attack.element = Element::Ice;
    attack.buffs.clear();
    let other = damage_breakdown(&loadout, &enemy, &attack, false).unwrap();
    approx_eq(other.resistance_multiplier, 1.0, 1e-12);
}

#[test]
fn enemy_vulnerability_and_damage_reduction() {
    let character = plain_character(80, 1000.0);
    let mut enemy = Enemy::new("Dummy", 80);
    enemy.buffs.push(Buff::new(Stat::DmgReduction, 20.0));
    enemy.buffs.push(Buff::new(Stat::Vulnerability, 10.0));
    enemy.debuffs.push(Buff::new(Stat::Vulnerability, 15.0));
    // 1000 * 1.025 * 0.5 * 1.25 * 0.8
    enemy_damage_is(&character, &enemy, 512.5);

    enemy.debuffs.push(Buff::new(Stat::DmgReduction, 20.0));
    enemy_damage_is(&character, &enemy, 640.625);
}

#[test]
fn invalid_scaling_stat_is_rejected() {
    let attack = Attack::new("Odd", Stat::Spd, 100.0, Element::Wind, DamageTag::Basic);
    let err = calc_average_damage(
        &plain_character(80, 1000.0),
        &LightCone::default(),
        &RelicBuild::default(),
        &basic_enemy(),
        &attack,
        false,
    )
    .unwrap_err();
    assert_eq!(
        err,
        CalcError::InvalidScalingStat {
            attack: "Odd".to_string(),
            stat: Stat::Spd,
        }
    );
}

#[test]
fn relic_level_substats_count_toward_stats() {
    let mut build = RelicBuild::default();
    build.relics[0] = Relic {
        set: "Musketeer".to_string(),
        main_stat: Some(Stat::Hp),
        sub_stats: vec![RelicSubstat::new(Stat::CritRate, 3, RollType::Max)],
    };
    let rate = resolve_final_stat(
        &plain_character(80, 1000.0),
        &LightCone::default(),
        &build,
        Stat::CritRate,
        DamageTag::Basic,
        Element::Any,
        &[],
    );
    approx_eq(rate, 5.0 + 3.0 * 3.24, 1e-9);
}

#[test]
fn hook_stat_summary() {
    let text = explain_final_stats(&hook(), &fall_of_an_aeon(), &hook_relics());
    assert_eq!(
        text,
        "HP: 3535.2\nATK: 4029.7\nDEF: 748.0\nCRIT Rate: 74.6%\nCRIT DMG: 133.3%\nFire DMG: 143.0%"
    );
}

#[test]
fn substat_and_set_effect_order_does_not_matter() {
    let mut forward = hook_relics();
    forward.relics[2].sub_stats = vec![
        RelicSubstat::new(Stat::CritRate, 2, RollType::Max),
        RelicSubstat::new(Stat::AtkPct, 1, RollType::Min),
        RelicSubstat::new(Stat::CritDmg, 3, RollType::Avg),
    ];
    let mut reversed = forward.clone();
    reversed.sub_stats.reverse();
    reversed.set_effects.reverse();
    reversed.relics[2].sub_stats.reverse();
    assert_ne!(forward.sub_stats, reversed.sub_stats);

    for stat in [
        Stat::Atk,
        Stat::CritRate,
        Stat::CritDmg,
        Stat::DmgBonus,
        Stat::DefIgnore,
    ] {
        let resolve = |build: &RelicBuild| {
            resolve_final_stat(
                &hook(),
                &fall_of_an_aeon(),
                build,
                stat,
                DamageTag::Skill,
                Element::Fire,
                &[],
            )
        };
        approx_eq(resolve(&reversed), resolve(&forward), 1e-9);
    }

    let total = |build: RelicBuild| {
        let mut scenario = hook_scenario();
        scenario.relic_build = build;
        scenario.add_attack(hook_ultimate(), 1.0);
        calc_scenario(&scenario).unwrap().total_damage
    };
    let expected = total(forward);
    assert!(expected > 41425.0);
    approx_eq(total(reversed), expected, 1e-9);
}
