use serde::{Deserialize, Serialize};

use crate::data::attack::Attack;
use crate::data::character::{Character, LightCone};
use crate::data::enemy::Enemy;
use crate::data::relic::RelicBuild;

/// An attack together with how many effective casts it gets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackUsage {
    pub attack: Attack,
    /// Non-negative, possibly fractional (e.g. average hits per rotation).
    pub usage: f64,
}

/// A character build fighting a line-up of enemies with a set of attacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub notes: String,
    pub character: Character,
    #[serde(default)]
    pub light_cone: LightCone,
    #[serde(default)]
    pub relic_build: RelicBuild,
    /// Ordered left to right; Blast splash hits index neighbours.
    #[serde(default)]
    pub enemies: Vec<Enemy>,
    /// Index into `enemies`. Signed so that out-of-range input stays representable.
    #[serde(default)]
    pub focused_enemy: i64,
    #[serde(default)]
    pub attacks: Vec<AttackUsage>,
}

impl Scenario {
    /// Sets the usage of `attack`, replacing any entry with the same key.
    pub fn add_attack(&mut self, attack: Attack, usage: f64) {
        match self
            .attacks
            .iter_mut()
            .find(|entry| entry.attack.key() == attack.key())
        {
            Some(entry) => {
                entry.attack = attack;
                entry.usage = usage;
            }
            None => self.attacks.push(AttackUsage { attack, usage }),
        }
    }

    pub fn usage_of(&self, key: &str) -> Option<f64> {
        self.attacks
            .iter()
            .find(|entry| entry.attack.key() == key)
            .map(|entry| entry.usage)
    }

    /// `focused_enemy` as an index, if it addresses an enemy.
    pub fn focused_index(&self) -> Option<usize> {
        usize::try_from(self.focused_enemy)
            .ok()
            .filter(|&index| index < self.enemies.len())
    }
}

/// Outcome of resolving a scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub total_damage: f64,
    /// One entry per evaluated (attack, enemy) pair, attack-major.
    pub explanations: Vec<String>,
}
