//! Parallel evaluation of many scenarios.
//!
//! Each scenario is resolved independently; a failing scenario is logged and
//! returned in place without affecting the others.

use rayon::prelude::*;

use crate::combat::error::CalcError;
use crate::combat::scenario::calc_scenario;
use crate::data::scenario::{Scenario, ScenarioResult};
use crate::parallel::pool::WorkerPool;

/// Resolve every scenario on the global Rayon pool, preserving input order.
pub fn calc_scenarios(scenarios: &[Scenario]) -> Vec<Result<ScenarioResult, CalcError>> {
    scenarios
        .par_iter()
        .map(|scenario| {
            calc_scenario(scenario).inspect_err(|err| {
                tracing::warn!(scenario = %scenario.name, error = %err, "scenario failed");
            })
        })
        .collect()
}

/// [calc_scenarios] inside [WorkerPool::install].
pub fn calc_scenarios_with(
    scenarios: &[Scenario],
    pool: &WorkerPool,
) -> Vec<Result<ScenarioResult, CalcError>> {
    pool.install(|| calc_scenarios(scenarios))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::attack::Attack;
    use crate::data::character::Character;
    use crate::data::enemy::Enemy;
    use crate::data::stat::Stat;
    use crate::data::tag::{DamageTag, Element};

    fn scenario(name: &str, focused_enemy: i64) -> Scenario {
        let mut scenario = Scenario {
            name: name.to_string(),
            character: Character {
                level: 80,
                base_atk: 1000.0,
                ..Character::default()
            },
            enemies: vec![Enemy::new("Dummy", 80)],
            focused_enemy,
            ..Scenario::default()
        };
        scenario.add_attack(
            Attack::new("Hit", Stat::Atk, 100.0, Element::Physical, DamageTag::Basic),
            1.0,
        );
        scenario
    }

    #[test]
    fn failures_stay_in_place() {
        let batch = [scenario("ok", 0), scenario("bad", 3), scenario("ok again", 0)];
        let results = calc_scenarios_with(&batch, &WorkerPool::with_workers(2));
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(CalcError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(results[0], results[2]);
    }

    #[test]
    fn empty_batch_yields_nothing() {
        assert!(calc_scenarios(&[]).is_empty());
    }
}
