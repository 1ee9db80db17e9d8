use serde::{Deserialize, Serialize};

/// Attribute kinds a buff can modify.
///
/// `Hp`, `Atk`, `Def` and `Spd` are flat stats paired with a percent variant;
/// a percent buff scales the base value of its flat partner. Every other
/// stat is a plain additive value, whatever its name suggests.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spd,
    HpPct,
    AtkPct,
    DefPct,
    SpdPct,
    CritRate,
    CritDmg,
    OutgoingHealingBoost,
    EffectHitRate,
    EffectRes,
    EnergyRegenerationRate,
    BreakEffect,
    DefIgnore,
    DefShred,
    Aggro,
    DmgBonus,
    ElementalRes,
    ResShred,
    ResPen,
    Vulnerability,
    DmgReduction,
}

impl Stat {
    /// Percent partner of a paired flat stat.
    pub const fn percent_variant(self) -> Option<Stat> {
        match self {
            Self::Hp => Some(Self::HpPct),
            Self::Atk => Some(Self::AtkPct),
            Self::Def => Some(Self::DefPct),
            Self::Spd => Some(Self::SpdPct),
            _ => None,
        }
    }

    /// Flat partner of a percent stat.
    pub const fn flat_variant(self) -> Option<Stat> {
        match self {
            Self::HpPct => Some(Self::Hp),
            Self::AtkPct => Some(Self::Atk),
            Self::DefPct => Some(Self::Def),
            Self::SpdPct => Some(Self::Spd),
            _ => None,
        }
    }

    /// Stats an attack may scale from.
    pub const fn is_scaling_stat(self) -> bool {
        matches!(self, Self::Hp | Self::Atk | Self::Def)
    }

    /// True when values of this stat are shown as raw numbers rather than percentages.
    pub const fn is_flat_display(self) -> bool {
        matches!(
            self,
            Self::Hp | Self::Atk | Self::Def | Self::Spd | Self::Aggro
        )
    }

    /// Display label with the `Pct` suffix rendered as `%` (e.g. `Atk%`).
    pub fn label(self) -> String {
        self.as_ref().replacen("Pct", "%", 1)
    }
}
