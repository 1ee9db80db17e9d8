use serde::{Deserialize, Serialize};

use crate::data::buff::Buff;
use crate::data::tag::Element;

/// Playable character. Gear is supplied per evaluation, not owned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub base_hp: f64,
    #[serde(default)]
    pub base_atk: f64,
    #[serde(default)]
    pub base_def: f64,
    #[serde(default)]
    pub base_spd: f64,
    #[serde(default)]
    pub base_aggro: f64,
    #[serde(default)]
    pub element: Element,
    #[serde(default)]
    pub buffs: Vec<Buff>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightCone {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub base_hp: f64,
    #[serde(default)]
    pub base_atk: f64,
    #[serde(default)]
    pub base_def: f64,
    #[serde(default)]
    pub buffs: Vec<Buff>,
}
