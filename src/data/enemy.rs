use serde::{Deserialize, Serialize};

use crate::data::buff::Buff;

/// Enemy target.
///
/// `buffs` hold the enemy's own resistances and defense modifiers;
/// `debuffs` hold what the attacking side has applied (shred, vulnerability).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub buffs: Vec<Buff>,
    #[serde(default)]
    pub debuffs: Vec<Buff>,
}

impl Enemy {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            ..Self::default()
        }
    }
}
