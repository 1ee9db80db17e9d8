//! Human-readable summaries of resolved stats.

use crate::combat::stats::Loadout;
use crate::data::character::{Character, LightCone};
use crate::data::relic::RelicBuild;
use crate::data::stat::Stat;
use crate::data::tag::DamageTag;

/// `3104.2` for flat-displayed stats, `74.6%` for the rest.
pub fn format_stat_value(stat: Stat, value: f64) -> String {
    if stat.is_flat_display() {
        format!("{value:.1}")
    } else {
        format!("{value:.1}%")
    }
}

/// HP, ATK, DEF, crit and elemental DMG% of a character wearing the given gear.
///
/// The query is unconstrained by damage tag, so conditional buffs for any
/// action are included; the elemental line uses the character's element.
pub fn explain_final_stats(
    character: &Character,
    light_cone: &LightCone,
    relic_build: &RelicBuild,
) -> String {
    let loadout = Loadout::new(character, light_cone, relic_build);
    let element = character.element;
    let value = |stat: Stat| loadout.final_stat(stat, DamageTag::Any, element, &[]);

    [
        format!("HP: {:.1}", value(Stat::Hp)),
        format!("ATK: {:.1}", value(Stat::Atk)),
        format!("DEF: {:.1}", value(Stat::Def)),
        format!("CRIT Rate: {:.1}%", value(Stat::CritRate)),
        format!("CRIT DMG: {:.1}%", value(Stat::CritDmg)),
        format!("{} DMG: {:.1}%", element, value(Stat::DmgBonus)),
    ]
    .join("\n")
}
