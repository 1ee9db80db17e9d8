//! Single damage evaluation throughput.
//!
//! Run with: `cargo bench --bench damage`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use relicsim::combat::{calc_average_damage, damage_breakdown, Loadout};
use relicsim::data::{
    Attack, Buff, Character, DamageTag, Element, Enemy, LightCone, RelicBuild, RelicSubstat,
    RollType, Stat,
};

fn character() -> Character {
    Character {
        name: "Bench".to_string(),
        level: 80,
        base_hp: 1340.0,
        base_atk: 617.0,
        base_def: 352.0,
        base_spd: 94.0,
        element: Element::Fire,
        buffs: vec![
            Buff::new(Stat::AtkPct, 24.0),
            Buff::new(Stat::CritDmg, 13.3),
            Buff::new(Stat::DmgBonus, 20.0).with_tag(DamageTag::Skill),
        ],
        ..Character::default()
    }
}

fn light_cone() -> LightCone {
    LightCone {
        name: "Bench Cone".to_string(),
        level: 80,
        base_hp: 1058.0,
        base_atk: 529.0,
        base_def: 396.0,
        buffs: vec![Buff::new(Stat::AtkPct, 64.0)],
        ..LightCone::default()
    }
}

fn relic_build() -> RelicBuild {
    let mut build = RelicBuild::new([
        Stat::Hp,
        Stat::Atk,
        Stat::CritRate,
        Stat::AtkPct,
        Stat::DmgBonus,
        Stat::AtkPct,
    ]);
    build.sub_stats = vec![
        RelicSubstat::new(Stat::AtkPct, 8, RollType::Avg),
        RelicSubstat::new(Stat::CritRate, 10, RollType::Avg),
        RelicSubstat::new(Stat::CritDmg, 12, RollType::Avg),
    ];
    build.set_effects = vec![Buff::new(Stat::DefIgnore, 12.0)];
    build
}

fn bench_damage(c: &mut Criterion) {
    let character = character();
    let light_cone = light_cone();
    let relic_build = relic_build();
    let mut enemy = Enemy::new("Bench Enemy", 85);
    enemy
        .buffs
        .push(Buff::new(Stat::ElementalRes, 20.0).with_element(Element::Fire));
    let attack = Attack::new("Skill", Stat::Atk, 418.0, Element::Fire, DamageTag::Skill);

    let mut group = c.benchmark_group("damage");
    group.throughput(Throughput::Elements(1));

    group.bench_function("calc_average_damage", |b| {
        b.iter(|| {
            black_box(calc_average_damage(
                &character,
                &light_cone,
                &relic_build,
                &enemy,
                &attack,
                false,
            ))
        });
    });

    let loadout = Loadout::new(&character, &light_cone, &relic_build);
    group.bench_with_input("breakdown_reused_loadout", &attack, |b, attack| {
        b.iter_batched(
            || attack.clone(),
            |a| black_box(damage_breakdown(&loadout, &enemy, &a, false)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_damage);
criterion_main!(benches);
