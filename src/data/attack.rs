use serde::{Deserialize, Serialize};

use crate::data::buff::Buff;
use crate::data::stat::Stat;
use crate::data::tag::{DamageTag, Element};

/// How an attack's damage is spread over the enemy line-up.
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
pub enum AreaOfEffect {
    /// Focused enemy only.
    #[default]
    Single,
    /// Focused enemy, plus splash on its immediate neighbours.
    Blast,
    /// Full multiplier on every enemy.
    All,
    /// Full multiplier split evenly across every enemy.
    EvenlyDistributed,
}

impl AreaOfEffect {
    /// Patterns that are anchored on the focused enemy.
    pub const fn needs_focus(self) -> bool {
        matches!(self, Self::Single | Self::Blast)
    }
}

/// One damaging action. Multipliers are percentages of the scaling stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub scaling_stat: Stat,
    pub multiplier: f64,
    #[serde(default)]
    pub multiplier_splash: f64,
    #[serde(default)]
    pub element: Element,
    #[serde(default)]
    pub damage_tag: DamageTag,
    #[serde(default, alias = "aoe")]
    pub area_of_effect: AreaOfEffect,
    /// Buffs active only while this attack is evaluated.
    #[serde(default)]
    pub buffs: Vec<Buff>,
}

impl Attack {
    pub fn new(
        name: impl Into<String>,
        scaling_stat: Stat,
        multiplier: f64,
        element: Element,
        damage_tag: DamageTag,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            scaling_stat,
            multiplier,
            multiplier_splash: 0.0,
            element,
            damage_tag,
            area_of_effect: AreaOfEffect::Single,
            buffs: Vec::new(),
        }
    }

    pub fn with_area(mut self, area_of_effect: AreaOfEffect, multiplier_splash: f64) -> Self {
        self.area_of_effect = area_of_effect;
        self.multiplier_splash = multiplier_splash;
        self
    }

    /// Identifier used to key usage counts: the id, or the name when no id is set.
    pub fn key(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }
}
