pub mod damage;
pub mod error;
pub mod explain;
pub mod scenario;
pub mod stats;

pub use damage::{
    avg_crit_multiplier, base_damage, calc_average_damage, crit_multiplier, damage_breakdown,
    damage_reduction_multiplier, defense_multiplier, defense_multiplier_from,
    dmg_bonus_multiplier, resistance_multiplier, vulnerability_multiplier, DamageBreakdown,
    CRIT_RATE_CAP, DEF_BASE, DEF_PER_LEVEL,
};
pub use error::{CalcError, Result};
pub use explain::{explain_final_stats, format_stat_value};
pub use scenario::{calc_scenario, expand_targets, Hit};
pub use stats::{
    resolve_final_stat, Loadout, StatSheet, StatTotals, BASE_CRIT_DMG, BASE_CRIT_RATE,
    BASE_ENERGY_REGENERATION_RATE,
};
