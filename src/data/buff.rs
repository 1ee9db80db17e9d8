use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::stat::Stat;
use crate::data::tag::{DamageTag, Element, Wildcard};

/// Conditional additive modifier to a stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    pub stat: Stat,
    pub value: f64,
    #[serde(default)]
    pub damage_tag: DamageTag,
    #[serde(default)]
    pub element: Element,
}

impl Buff {
    /// Unfiltered buff: applies to every tag and element.
    pub const fn new(stat: Stat, value: f64) -> Self {
        Self {
            stat,
            value,
            damage_tag: DamageTag::Any,
            element: Element::Any,
        }
    }

    pub const fn with_tag(self, damage_tag: DamageTag) -> Self {
        Self { damage_tag, ..self }
    }

    pub const fn with_element(self, element: Element) -> Self {
        Self { element, ..self }
    }

    /// Whether this buff's filters accept the `(tag, element)` query.
    pub fn applies_to(&self, tag: DamageTag, element: Element) -> bool {
        self.damage_tag.matches(tag) && self.element.matches(element)
    }
}

impl fmt::Display for Buff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.stat.is_flat_display() { "" } else { "%" };
        write!(f, "{:.1}{} {}", self.value, suffix, self.stat.label())?;
        if !self.damage_tag.is_wildcard() {
            write!(f, "({})", self.damage_tag)?;
        }
        if !self.element.is_wildcard() {
            write!(f, "({})", self.element)?;
        }
        Ok(())
    }
}

/// Sum of `stat` buffs in `buffs` whose filters accept the query.
pub fn sum_matching<'a, I>(buffs: I, stat: Stat, tag: DamageTag, element: Element) -> f64
where
    I: IntoIterator<Item = &'a Buff>,
{
    buffs
        .into_iter()
        .filter(|buff| buff.stat == stat && buff.applies_to(tag, element))
        .map(|buff| buff.value)
        .sum()
}
