//! Scenario resolution: expands each attack's area of effect over the enemy
//! line-up and sums usage-weighted average damage.

use crate::combat::damage::damage_breakdown;
use crate::combat::error::{CalcError, Result};
use crate::combat::stats::Loadout;
use crate::data::attack::AreaOfEffect;
use crate::data::scenario::{AttackUsage, Scenario, ScenarioResult};

/// One evaluation of an attack against one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub enemy: usize,
    pub splash: bool,
    /// Damage is divided by this before usage weighting.
    pub share: f64,
}

impl Hit {
    const fn full(enemy: usize) -> Self {
        Self {
            enemy,
            splash: false,
            share: 1.0,
        }
    }
}

/// Enemies hit by an area-of-effect pattern, focused target first for Blast.
pub fn expand_targets(
    area_of_effect: AreaOfEffect,
    focused_enemy: i64,
    enemy_count: usize,
) -> Result<Vec<Hit>> {
    let focused = || {
        usize::try_from(focused_enemy)
            .ok()
            .filter(|&index| index < enemy_count)
            .ok_or(CalcError::IndexOutOfRange {
                index: focused_enemy,
                len: enemy_count,
            })
    };

    let hits = match area_of_effect {
        AreaOfEffect::Single => vec![Hit::full(focused()?)],
        AreaOfEffect::Blast => {
            let center = focused()?;
            let mut hits = vec![Hit::full(center)];
            let neighbours = [center.checked_sub(1), Some(center + 1)];
            for index in neighbours.into_iter().flatten() {
                if index < enemy_count {
                    hits.push(Hit {
                        enemy: index,
                        splash: true,
                        share: 1.0,
                    });
                }
            }
            hits
        }
        AreaOfEffect::All => (0..enemy_count).map(Hit::full).collect(),
        AreaOfEffect::EvenlyDistributed => (0..enemy_count)
            .map(|enemy| Hit {
                share: enemy_count as f64,
                ..Hit::full(enemy)
            })
            .collect(),
    };
    Ok(hits)
}

/// Total usage-weighted damage of every attack in the scenario.
///
/// Fails as a whole on the first malformed attack or focus index; no
/// partial total is returned.
pub fn calc_scenario(scenario: &Scenario) -> Result<ScenarioResult> {
    let loadout = Loadout::new(
        &scenario.character,
        &scenario.light_cone,
        &scenario.relic_build,
    );
    let mut result = ScenarioResult::default();

    for AttackUsage { attack, usage } in &scenario.attacks {
        let hits = expand_targets(
            attack.area_of_effect,
            scenario.focused_enemy,
            scenario.enemies.len(),
        )?;
        for hit in hits {
            let enemy = &scenario.enemies[hit.enemy];
            let breakdown = damage_breakdown(&loadout, enemy, attack, hit.splash)?;
            let damage = breakdown.total() / hit.share * usage;
            tracing::debug!(
                scenario = %scenario.name,
                attack = %attack.name,
                enemy = %enemy.name,
                splash = hit.splash,
                damage,
                "evaluated hit"
            );
            result.total_damage += damage;

            let mut explanation = format!("{} -> {}", attack.name, enemy.name);
            if hit.splash {
                explanation.push_str(" (splash)");
            }
            if hit.share != 1.0 {
                explanation.push_str(&format!(" (1/{} share)", hit.share));
            }
            explanation.push_str(&format!("\n{breakdown}\nDamage x{usage}: {damage:.2}"));
            result.explanations.push(explanation);
        }
    }

    tracing::debug!(
        scenario = %scenario.name,
        total_damage = result.total_damage,
        "scenario resolved"
    );
    Ok(result)
}
