//! Input-data errors raised by the damage engine.

use thiserror::Error;

use crate::data::stat::Stat;

/// Malformed input detected while resolving damage. Never an internal fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("attack '{attack}' scales from {stat}, expected Hp, Atk or Def")]
    InvalidScalingStat { attack: String, stat: Stat },

    #[error("focused enemy index {index} out of range for {len} enemies")]
    IndexOutOfRange { index: i64, len: usize },
}

pub type Result<T> = std::result::Result<T, CalcError>;
