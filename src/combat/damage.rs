//! Average damage of one attack against one enemy.
//!
//! Damage is the product of six independent multipliers applied to the base
//! damage: crit, damage bonus, resistance, defense, vulnerability and damage
//! reduction. Crits are averaged, never rolled.

use std::fmt;

use serde::Serialize;

use crate::combat::error::{CalcError, Result};
use crate::combat::explain::format_stat_value;
use crate::combat::stats::Loadout;
use crate::data::attack::Attack;
use crate::data::buff::{sum_matching, Buff};
use crate::data::character::{Character, LightCone};
use crate::data::enemy::Enemy;
use crate::data::relic::RelicBuild;
use crate::data::stat::Stat;
use crate::data::tag::DamageTag;

pub const CRIT_RATE_CAP: f64 = 100.0;
pub const DEF_BASE: f64 = 200.0;
pub const DEF_PER_LEVEL: f64 = 10.0;

/// Per-multiplier view of one damage evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageBreakdown {
    pub base_damage: f64,
    pub crit_multiplier: f64,
    pub dmg_bonus_multiplier: f64,
    pub resistance_multiplier: f64,
    pub defense_multiplier: f64,
    pub vulnerability_multiplier: f64,
    pub damage_reduction_multiplier: f64,
    /// Non-zero final stats for the attack's tag/element query.
    pub final_stats: Vec<(Stat, f64)>,
}

impl DamageBreakdown {
    pub fn total(&self) -> f64 {
        self.base_damage
            * self.crit_multiplier
            * self.dmg_bonus_multiplier
            * self.resistance_multiplier
            * self.defense_multiplier
            * self.vulnerability_multiplier
            * self.damage_reduction_multiplier
    }
}

impl fmt::Display for DamageBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Base Damage: {:.2}", self.base_damage)?;
        writeln!(f, "Crit Multiplier: {:.4}", self.crit_multiplier)?;
        writeln!(f, "Damage Bonus Multiplier: {:.4}", self.dmg_bonus_multiplier)?;
        writeln!(f, "Resistance Multiplier: {:.4}", self.resistance_multiplier)?;
        writeln!(f, "Defense Multiplier: {:.4}", self.defense_multiplier)?;
        writeln!(f, "Vulnerability Multiplier: {:.4}", self.vulnerability_multiplier)?;
        writeln!(
            f,
            "Damage Reduction Multiplier: {:.4}",
            self.damage_reduction_multiplier
        )?;
        write!(f, "Average Damage: {:.2}", self.total())?;
        if !self.final_stats.is_empty() {
            write!(f, "\nFinal Stats:")?;
            for (stat, value) in &self.final_stats {
                write!(f, "\n  {}: {}", stat.label(), format_stat_value(*stat, *value))?;
            }
        }
        Ok(())
    }
}

/// Scaling stat times the (splash) multiplier.
pub fn base_damage(loadout: &Loadout<'_>, attack: &Attack, is_splash: bool) -> Result<f64> {
    if !attack.scaling_stat.is_scaling_stat() {
        return Err(CalcError::InvalidScalingStat {
            attack: attack.name.clone(),
            stat: attack.scaling_stat,
        });
    }
    let multiplier = if is_splash {
        attack.multiplier_splash
    } else {
        attack.multiplier
    };
    let scaling = loadout.final_stat(
        attack.scaling_stat,
        attack.damage_tag,
        attack.element,
        &attack.buffs,
    );
    Ok(scaling * multiplier / 100.0)
}

/// Expected crit multiplier `1 + min(rate, 100)/100 * dmg/100`.
pub fn avg_crit_multiplier(crit_rate: f64, crit_dmg: f64) -> f64 {
    1.0 + crit_rate.min(CRIT_RATE_CAP) / 100.0 * crit_dmg / 100.0
}

pub fn crit_multiplier(loadout: &Loadout<'_>, attack: &Attack) -> f64 {
    if attack.damage_tag == DamageTag::Dot {
        return 1.0;
    }
    let crit_rate = query(loadout, attack, Stat::CritRate);
    let crit_dmg = query(loadout, attack, Stat::CritDmg);
    avg_crit_multiplier(crit_rate, crit_dmg)
}

pub fn dmg_bonus_multiplier(loadout: &Loadout<'_>, attack: &Attack) -> f64 {
    1.0 + query(loadout, attack, Stat::DmgBonus) / 100.0
}

/// `1 - (res - shred - pen)/100`; penetration comes from the loadout and the attack.
pub fn resistance_multiplier(loadout: &Loadout<'_>, enemy: &Enemy, attack: &Attack) -> f64 {
    let res = enemy_sum(&enemy.buffs, attack, Stat::ElementalRes);
    let shred = enemy_sum(&enemy.debuffs, attack, Stat::ResShred);
    let pen = query(loadout, attack, Stat::ResPen);
    1.0 - (res - shred - pen) / 100.0
}

/// Defense curve `1 - def / (def + 200 + 10 * attacker_level)`, with
/// `def = max(0, (200 + 10 * enemy_level) * (1 + pct/100 - reduction/100) + flat)`.
pub fn defense_multiplier_from(
    enemy_level: u32,
    attacker_level: u32,
    def_pct: f64,
    def_reduction: f64,
    flat_def: f64,
) -> f64 {
    let base_def = DEF_BASE + DEF_PER_LEVEL * f64::from(enemy_level);
    let total_def = (base_def * (1.0 + def_pct / 100.0 - def_reduction / 100.0) + flat_def).max(0.0);
    1.0 - total_def / (total_def + DEF_BASE + DEF_PER_LEVEL * f64::from(attacker_level))
}

pub fn defense_multiplier(loadout: &Loadout<'_>, enemy: &Enemy, attack: &Attack) -> f64 {
    // Enemy defense itself is unconditional; only reductions are filtered.
    let flat_def: f64 = stat_sum(&enemy.buffs, Stat::Def);
    let def_pct: f64 = stat_sum(&enemy.buffs, Stat::DefPct);
    let def_reduction = enemy_sum(&enemy.debuffs, attack, Stat::DefShred)
        + query(loadout, attack, Stat::DefIgnore);
    defense_multiplier_from(
        enemy.level,
        loadout.character.level,
        def_pct,
        def_reduction,
        flat_def,
    )
}

/// Innate and applied vulnerability both count.
pub fn vulnerability_multiplier(enemy: &Enemy, attack: &Attack) -> f64 {
    let vulnerability = enemy_sum(&enemy.buffs, attack, Stat::Vulnerability)
        + enemy_sum(&enemy.debuffs, attack, Stat::Vulnerability);
    1.0 + vulnerability / 100.0
}

/// Innate reduction, less any reduction removed by debuffs.
pub fn damage_reduction_multiplier(enemy: &Enemy, attack: &Attack) -> f64 {
    let reduction = enemy_sum(&enemy.buffs, attack, Stat::DmgReduction)
        - enemy_sum(&enemy.debuffs, attack, Stat::DmgReduction);
    1.0 - reduction / 100.0
}

pub fn damage_breakdown(
    loadout: &Loadout<'_>,
    enemy: &Enemy,
    attack: &Attack,
    is_splash: bool,
) -> Result<DamageBreakdown> {
    Ok(DamageBreakdown {
        base_damage: base_damage(loadout, attack, is_splash)?,
        crit_multiplier: crit_multiplier(loadout, attack),
        dmg_bonus_multiplier: dmg_bonus_multiplier(loadout, attack),
        resistance_multiplier: resistance_multiplier(loadout, enemy, attack),
        defense_multiplier: defense_multiplier(loadout, enemy, attack),
        vulnerability_multiplier: vulnerability_multiplier(enemy, attack),
        damage_reduction_multiplier: damage_reduction_multiplier(enemy, attack),
        final_stats: loadout
            .sheet(attack.damage_tag, attack.element, &attack.buffs)
            .non_zero(),
    })
}

/// Average damage of `attack` on `enemy`, with its explanation.
pub fn calc_average_damage(
    character: &Character,
    light_cone: &LightCone,
    relic_build: &RelicBuild,
    enemy: &Enemy,
    attack: &Attack,
    is_splash: bool,
) -> Result<(f64, String)> {
    let loadout = Loadout::new(character, light_cone, relic_build);
    let breakdown = damage_breakdown(&loadout, enemy, attack, is_splash)?;
    Ok((breakdown.total(), breakdown.to_string()))
}

fn query(loadout: &Loadout<'_>, attack: &Attack, stat: Stat) -> f64 {
    loadout.final_stat(stat, attack.damage_tag, attack.element, &attack.buffs)
}

fn enemy_sum(buffs: &[Buff], attack: &Attack, stat: Stat) -> f64 {
    sum_matching(buffs, stat, attack.damage_tag, attack.element)
}

fn stat_sum(buffs: &[Buff], stat: Stat) -> f64 {
    buffs
        .iter()
        .filter(|buff| buff.stat == stat)
        .map(|buff| buff.value)
        .sum()
}
