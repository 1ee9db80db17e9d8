//! Expected-damage calculator for character builds.
//!
//! [data] holds the records (characters, gear, enemies, attacks, scenarios)
//! and the catalog loader, [combat] resolves final stats and average damage,
//! and [parallel] evaluates scenario batches on a Rayon pool.

pub mod combat;
pub mod data;
pub mod parallel;

pub use combat::{calc_average_damage, calc_scenario, explain_final_stats, CalcError};
pub use data::{Catalog, Scenario, ScenarioResult};
pub use parallel::{calc_scenarios, WorkerPool};
