//! Final stat resolution.
//!
//! A stat resolves as `base * (1 + percent / 100) + flat`, where `base` comes
//! from the character (and light cone for Hp/Atk/Def), `percent` is the sum
//! of matching percent-variant buffs (paired flat stats only) and `flat` is
//! the sum of matching exact-stat buffs. Buffs are drawn from the character,
//! the light cone, the relic build and any per-call extras (an attack's own
//! buffs), filtered by the `(tag, element)` query.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::data::buff::Buff;
use crate::data::character::{Character, LightCone};
use crate::data::relic::RelicBuild;
use crate::data::stat::Stat;
use crate::data::tag::{DamageTag, Element};

pub const BASE_CRIT_RATE: f64 = 5.0;
pub const BASE_CRIT_DMG: f64 = 50.0;
pub const BASE_ENERGY_REGENERATION_RATE: f64 = 100.0;

/// Base, percent and flat parts of one stat.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatTotals {
    pub base: f64,
    /// Sum of percent-variant buffs, in percent.
    pub percent: f64,
    pub flat: f64,
}

impl StatTotals {
    pub fn from_base(base: f64) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn compose(self) -> f64 {
        self.base * (1.0 + self.percent / 100.0) + self.flat
    }
}

/// Character plus equipment, with the equipment buff list materialized once.
///
/// Build one per (character, light cone, relic build) and reuse it for every
/// stat query; per-call extras are never cached.
#[derive(Debug, Clone)]
pub struct Loadout<'a> {
    pub character: &'a Character,
    pub light_cone: &'a LightCone,
    pub relic_build: &'a RelicBuild,
    buffs: Vec<Buff>,
}

impl<'a> Loadout<'a> {
    pub fn new(
        character: &'a Character,
        light_cone: &'a LightCone,
        relic_build: &'a RelicBuild,
    ) -> Self {
        let buffs = character
            .buffs
            .iter()
            .chain(&light_cone.buffs)
            .copied()
            .chain(relic_build.as_buffs())
            .collect();
        Self {
            character,
            light_cone,
            relic_build,
            buffs,
        }
    }

    /// Character, light cone and relic buffs, in that order.
    pub fn buffs(&self) -> &[Buff] {
        &self.buffs
    }

    pub fn base_value(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Hp => self.character.base_hp + self.light_cone.base_hp,
            Stat::Atk => self.character.base_atk + self.light_cone.base_atk,
            Stat::Def => self.character.base_def + self.light_cone.base_def,
            Stat::Spd => self.character.base_spd,
            Stat::Aggro => self.character.base_aggro,
            Stat::CritRate => BASE_CRIT_RATE,
            Stat::CritDmg => BASE_CRIT_DMG,
            Stat::EnergyRegenerationRate => BASE_ENERGY_REGENERATION_RATE,
            _ => 0.0,
        }
    }

    fn matching<'b>(
        &'b self,
        tag: DamageTag,
        element: Element,
        extra_buffs: &'b [Buff],
    ) -> impl Iterator<Item = &'b Buff> + 'b {
        self.buffs
            .iter()
            .chain(extra_buffs)
            .filter(move |buff| buff.applies_to(tag, element))
    }

    pub fn totals(
        &self,
        stat: Stat,
        tag: DamageTag,
        element: Element,
        extra_buffs: &[Buff],
    ) -> StatTotals {
        let percent_variant = stat.percent_variant();
        let mut totals = StatTotals::from_base(self.base_value(stat));
        for buff in self.matching(tag, element, extra_buffs) {
            if buff.stat == stat {
                totals.flat += buff.value;
            } else if Some(buff.stat) == percent_variant {
                totals.percent += buff.value;
            }
        }
        totals
    }

    pub fn final_stat(
        &self,
        stat: Stat,
        tag: DamageTag,
        element: Element,
        extra_buffs: &[Buff],
    ) -> f64 {
        self.totals(stat, tag, element, extra_buffs).compose()
    }

    /// Every stat resolved for one query, in a single pass over the buffs.
    pub fn sheet(&self, tag: DamageTag, element: Element, extra_buffs: &[Buff]) -> StatSheet {
        let mut totals: BTreeMap<Stat, StatTotals> = Stat::iter()
            .map(|stat| (stat, StatTotals::from_base(self.base_value(stat))))
            .collect();
        for buff in self.matching(tag, element, extra_buffs) {
            totals.entry(buff.stat).or_default().flat += buff.value;
            if let Some(flat) = buff.stat.flat_variant() {
                totals.entry(flat).or_default().percent += buff.value;
            }
        }
        StatSheet { totals }
    }
}

/// Resolved totals for every stat under one query.
#[derive(Debug, Clone, Default)]
pub struct StatSheet {
    totals: BTreeMap<Stat, StatTotals>,
}

impl StatSheet {
    pub fn totals_for(&self, stat: Stat) -> Option<StatTotals> {
        self.totals.get(&stat).copied()
    }

    pub fn composed_for(&self, stat: Stat) -> f64 {
        self.totals_for(stat).map(StatTotals::compose).unwrap_or(0.0)
    }

    /// Final values in stat order, skipping zeros.
    pub fn non_zero(&self) -> Vec<(Stat, f64)> {
        self.totals
            .iter()
            .map(|(stat, totals)| (*stat, totals.compose()))
            .filter(|(_, value)| *value != 0.0)
            .collect()
    }
}

/// Final value of `stat` for a character and gear under a `(tag, element)` query.
pub fn resolve_final_stat(
    character: &Character,
    light_cone: &LightCone,
    relic_build: &RelicBuild,
    stat: Stat,
    tag: DamageTag,
    element: Element,
    extra_buffs: &[Buff],
) -> f64 {
    Loadout::new(character, light_cone, relic_build).final_stat(stat, tag, element, extra_buffs)
}
