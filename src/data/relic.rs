//! Relic builds and the static roll-value tables that turn them into buffs.
//!
//! Main stats are a single max-level value per stat. Substats are a per-roll
//! value for each quality tier multiplied by the number of rolls. Stats a
//! table has no entry for contribute 0.

use serde::{Deserialize, Serialize};

use crate::data::buff::Buff;
use crate::data::stat::Stat;

pub const RELIC_SLOTS: usize = 6;

/// Quality tier used to value one substat roll.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum RollType {
    Min,
    #[default]
    Avg,
    Max,
}

/// Main stat value for a relic, independent of relic level.
pub const fn main_stat_value(stat: Stat) -> f64 {
    match stat {
        Stat::Spd => 25.0,
        Stat::Hp => 705.6,
        Stat::Atk | Stat::Def => 352.8,
        Stat::HpPct | Stat::AtkPct => 43.2,
        Stat::DefPct => 54.0,
        Stat::BreakEffect => 64.8,
        Stat::EffectHitRate | Stat::EffectRes => 43.2,
        Stat::EnergyRegenerationRate => 19.0,
        Stat::OutgoingHealingBoost => 35.0,
        Stat::DmgBonus => 39.0,
        Stat::CritRate => 32.4,
        Stat::CritDmg => 64.8,
        _ => 0.0,
    }
}

impl RollType {
    /// Value of a single substat roll at this quality tier.
    pub const fn per_roll(self, stat: Stat) -> f64 {
        match self {
            Self::Min => match stat {
                Stat::Spd => 2.0,
                Stat::Hp => 33.87,
                Stat::Atk | Stat::Def => 16.93,
                Stat::HpPct | Stat::AtkPct => 3.46,
                Stat::DefPct => 4.32,
                Stat::BreakEffect => 5.18,
                Stat::EffectHitRate | Stat::EffectRes => 3.46,
                Stat::CritRate => 2.59,
                Stat::CritDmg => 5.18,
                _ => 0.0,
            },
            Self::Avg => match stat {
                Stat::Spd => 2.3,
                Stat::Hp => 38.10,
                Stat::Atk | Stat::Def => 19.05,
                Stat::HpPct | Stat::AtkPct => 3.89,
                Stat::DefPct => 4.86,
                Stat::BreakEffect => 5.83,
                Stat::EffectHitRate | Stat::EffectRes => 3.89,
                Stat::CritRate => 2.92,
                Stat::CritDmg => 5.83,
                _ => 0.0,
            },
            Self::Max => match stat {
                Stat::Spd => 2.6,
                Stat::Hp => 42.34,
                Stat::Atk | Stat::Def => 21.17,
                Stat::HpPct | Stat::AtkPct => 4.32,
                Stat::DefPct => 5.40,
                Stat::BreakEffect => 6.48,
                Stat::EffectHitRate | Stat::EffectRes => 4.32,
                Stat::CritRate => 3.24,
                Stat::CritDmg => 6.48,
                _ => 0.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelicSubstat {
    pub stat: Stat,
    pub rolls: u32,
    #[serde(default)]
    pub roll_type: RollType,
}

impl RelicSubstat {
    pub const fn new(stat: Stat, rolls: u32, roll_type: RollType) -> Self {
        Self {
            stat,
            rolls,
            roll_type,
        }
    }

    pub fn value(&self) -> f64 {
        self.roll_type.per_roll(self.stat) * f64::from(self.rolls)
    }

    pub fn as_buff(&self) -> Buff {
        Buff::new(self.stat, self.value())
    }
}

/// One gear piece. An empty slot has no main stat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relic {
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub main_stat: Option<Stat>,
    #[serde(default)]
    pub sub_stats: Vec<RelicSubstat>,
}

impl Relic {
    pub fn new(main_stat: Stat) -> Self {
        Self {
            set: String::new(),
            main_stat: Some(main_stat),
            sub_stats: Vec::new(),
        }
    }

    pub fn as_buffs(&self) -> impl Iterator<Item = Buff> + '_ {
        self.main_stat
            .map(|stat| Buff::new(stat, main_stat_value(stat)))
            .into_iter()
            .chain(self.sub_stats.iter().map(RelicSubstat::as_buff))
    }
}

/// Six relic slots plus build-level substats and set effects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelicBuild {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub relics: [Relic; RELIC_SLOTS],
    #[serde(default)]
    pub sub_stats: Vec<RelicSubstat>,
    #[serde(default)]
    pub set_effects: Vec<Buff>,
}

impl RelicBuild {
    pub fn new(main_stats: [Stat; RELIC_SLOTS]) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            relics: main_stats.map(Relic::new),
            sub_stats: Vec::new(),
            set_effects: Vec::new(),
        }
    }

    /// Every buff this build grants: relic main stats and substats, build
    /// substats, then set effects.
    pub fn as_buffs(&self) -> Vec<Buff> {
        self.relics
            .iter()
            .flat_map(Relic::as_buffs)
            .chain(self.sub_stats.iter().map(RelicSubstat::as_buff))
            .chain(self.set_effects.iter().copied())
            .collect()
    }
}
