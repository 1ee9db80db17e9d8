//! Element and damage-tag filters with wildcard matching.
//!
//! Both dimensions carry an `Any` variant that matches, and is matched by,
//! every other value. Buff filters and attack queries are compared through
//! [Wildcard::matches], never through plain equality.

use serde::{Deserialize, Serialize};

/// Closed filter dimension with a wildcard value.
pub trait Wildcard: Copy + PartialEq {
    const WILDCARD: Self;

    fn is_wildcard(self) -> bool {
        self == Self::WILDCARD
    }

    /// Reflexive, symmetric and wildcard-absorbing.
    fn matches(self, other: Self) -> bool {
        self == other || self.is_wildcard() || other.is_wildcard()
    }
}

/// Free-function form of [Wildcard::matches].
pub fn matches<T: Wildcard>(a: T, b: T) -> bool {
    a.matches(b)
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
pub enum Element {
    #[default]
    #[serde(rename = "", alias = "Any")]
    #[strum(to_string = "Any", serialize = "")]
    Any,
    Physical,
    Fire,
    Ice,
    Wind,
    Lightning,
    Quantum,
    Imaginary,
}

impl Wildcard for Element {
    const WILDCARD: Self = Element::Any;
}

/// Category of action a modifier applies to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
pub enum DamageTag {
    #[default]
    #[serde(rename = "", alias = "Any")]
    #[strum(to_string = "Any", serialize = "")]
    Any,
    Basic,
    Skill,
    Ultimate,
    FollowUp,
    Dot,
}

impl Wildcard for DamageTag {
    const WILDCARD: Self = DamageTag::Any;
}
